//! One-shot lazy configuration state.

/// Progress of the deferred calibration run.
///
/// Moves forward only: once a run has been attempted the state never returns
/// to [`LazyConfigure::NotStarted`], so a failed run is not retried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LazyConfigure {
    /// No calibration has been attempted yet.
    #[default]
    NotStarted,
    /// A calibration run was attempted and failed.
    Attempted,
    /// Calibration completed and the gauge was resealed.
    Done,
}

impl LazyConfigure {
    /// Returns whether a calibration run should start now.
    pub const fn should_run(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    /// Records the outcome of the single calibration attempt.
    pub(crate) fn record(&mut self, succeeded: bool) {
        if self.should_run() {
            *self = if succeeded { Self::Done } else { Self::Attempted };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_attempt_is_terminal() {
        let mut state = LazyConfigure::default();
        assert!(state.should_run());
        state.record(false);
        assert_eq!(state, LazyConfigure::Attempted);
        assert!(!state.should_run());
        state.record(true);
        assert_eq!(state, LazyConfigure::Attempted);
    }

    #[test]
    fn successful_attempt_is_done() {
        let mut state = LazyConfigure::NotStarted;
        state.record(true);
        assert_eq!(state, LazyConfigure::Done);
        assert!(!state.should_run());
    }
}
