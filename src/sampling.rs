//! Sample epochs generation
use crate::{
    error::Error,
    prelude::{Duration, Epoch},
    window::ObservationWindow,
};

/// [TimeSequence] describes the sample epochs within an [ObservationWindow]:
/// `start, start + step, start + 2*step, ...` while lower or equal to `end`.
/// The window end is part of the sequence only when it falls on a step boundary.
/// [TimeSequence] is a pure description and may be iterated as many times as needed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TimeSequence {
    window: ObservationWindow,
    step: Duration,
    len: usize,
}

impl TimeSequence {
    /// Builds a new [TimeSequence]
    /// ## Errors
    /// - [Error::InvalidStep] if `step` is null or negative
    /// - [Error::EpochBudgetExceeded] if the number of epochs does not fit in a `usize`
    pub fn new(window: ObservationWindow, step: Duration) -> Result<Self, Error> {
        if step <= Duration::ZERO {
            return Err(Error::InvalidStep(step));
        }

        let span_ns = window.duration().total_nanoseconds();
        let step_ns = step.total_nanoseconds();
        let len = usize::try_from(span_ns / step_ns + 1)
            .map_err(|_| Error::EpochBudgetExceeded(usize::MAX, usize::MAX))?;

        Ok(Self { window, step, len })
    }

    /// Sampling step
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Number of sample epochs
    pub fn len(&self) -> usize {
        self.len
    }

    /// A sequence always contains the window start, so its length is at least 1.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the i-th sample epoch
    pub fn nth_epoch(&self, i: usize) -> Option<Epoch> {
        if i < self.len {
            let offset_ns = self.step.total_nanoseconds() * i as i128;
            Some(self.window.start() + Duration::from_total_nanoseconds(offset_ns))
        } else {
            None
        }
    }

    /// Iterates the sample epochs in chronological order
    pub fn iter(&self) -> TimeSequenceIter {
        TimeSequenceIter { seq: *self, i: 0 }
    }

    /// Collects all sample epochs
    pub fn to_vec(&self) -> Vec<Epoch> {
        self.iter().collect()
    }
}

/// Iterator over the epochs of a [TimeSequence]
#[derive(Debug, Clone)]
pub struct TimeSequenceIter {
    seq: TimeSequence,
    i: usize,
}

impl Iterator for TimeSequenceIter {
    type Item = Epoch;

    fn next(&mut self) -> Option<Self::Item> {
        let t = self.seq.nth_epoch(self.i)?;
        self.i += 1;
        Some(t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.seq.len.saturating_sub(self.i);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TimeSequenceIter {}

impl IntoIterator for &TimeSequence {
    type Item = Epoch;
    type IntoIter = TimeSequenceIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Generates the sample epochs within `window`, spaced by `step`.
/// See [TimeSequence] for the boundary policy.
pub fn generate(window: ObservationWindow, step: Duration) -> Result<Vec<Epoch>, Error> {
    Ok(TimeSequence::new(window, step)?.to_vec())
}
