use crate::action::Action;
use alloy_primitives::B256;
use core_types::{ProgressCallback, ProgressStep, StepState};

/// Tracks one status entry per action and reports every transition to the
/// caller-supplied callback.
///
/// The callback receives the full, ordered step array and fires
/// synchronously with each mutation, so observers never see step *k+1*
/// before step *k* has resolved.
pub struct Progress {
    steps: Vec<ProgressStep>,
    callback: Option<ProgressCallback>,
}

impl Progress {
    /// Creates one step per action, all `Pending`, without notifying.
    pub fn new(actions: &[Action], callback: Option<ProgressCallback>) -> Self {
        let steps = actions
            .iter()
            .enumerate()
            .map(|(index, action)| ProgressStep {
                index,
                description: action.description(),
                kind: action.kind(),
                state: StepState::Pending,
                transaction_hash: None,
                chain_id: None,
                error: None,
            })
            .collect();
        Self { steps, callback }
    }

    /// Marks the step as the one in flight.
    pub fn begin(&mut self, index: usize) {
        self.steps[index].state = StepState::Pending;
        self.notify();
    }

    /// Records the broadcast transaction before its confirmation wait
    /// begins, so observers can show "submitted" before "confirmed".
    pub fn submitted(&mut self, index: usize, hash: B256, chain_id: u64) {
        let step = &mut self.steps[index];
        step.state = StepState::Submitted;
        step.transaction_hash = Some(hash);
        step.chain_id = Some(chain_id);
        self.notify();
    }

    pub fn completed(&mut self, index: usize) {
        self.steps[index].state = StepState::Completed;
        self.notify();
    }

    pub fn failed(&mut self, index: usize, error: impl Into<String>) {
        let step = &mut self.steps[index];
        step.state = StepState::Failed;
        step.error = Some(error.into());
        self.notify();
    }

    /// A copy of every step, for error context snapshots.
    pub fn snapshot(&self) -> Vec<ProgressStep> {
        self.steps.clone()
    }

    fn notify(&self) {
        if let Some(callback) = &self.callback {
            callback(&self.steps);
        }
    }
}
