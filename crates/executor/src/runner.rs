use crate::action::{Action, ActionOutput};
use crate::progress::Progress;
use core_types::{ErrorCode, ErrorContext, MarketError, ProgressCallback};
use settlement::SettlementError;

/// Runs an ordered action list to completion, strictly sequentially.
///
/// Later actions depend on the confirmed side effects of earlier ones (an
/// order cannot be signed before its prerequisite approval or conversion is
/// confirmed), so there is no parallelism and no retry at this layer. The
/// executor holds no state across `execute` calls.
pub struct ActionExecutor {
    chain_id: u64,
    on_progress: Option<ProgressCallback>,
}

impl ActionExecutor {
    pub fn new(chain_id: u64, on_progress: Option<ProgressCallback>) -> Self {
        Self { chain_id, on_progress }
    }

    /// Executes every action in order and returns the last action's output.
    ///
    /// Any failure marks the owning step failed and surfaces as a
    /// step-type-coded [`MarketError`] carrying the chain id, the failing
    /// action's kind and index, and a snapshot of every step.
    pub async fn execute(&self, actions: Vec<Action>) -> Result<ActionOutput, MarketError> {
        if actions.is_empty() {
            return Err(MarketError::new(
                ErrorCode::InvalidParameters,
                "cannot execute an empty action list",
            )
            .with_context(ErrorContext { chain_id: Some(self.chain_id), ..Default::default() }));
        }

        let mut progress = Progress::new(&actions, self.on_progress.clone());
        let total = actions.len();
        let mut last_output = None;

        for (index, action) in actions.into_iter().enumerate() {
            let kind = action.kind();
            tracing::debug!(index, total, ?kind, "executing action");
            progress.begin(index);

            match self.run_action(action, index, &mut progress).await {
                Ok(output) => {
                    progress.completed(index);
                    last_output = Some(output);
                }
                Err(error) => {
                    tracing::warn!(index, ?kind, %error, "action failed");
                    progress.failed(index, error.to_string());
                    return Err(MarketError::wrap(
                        error,
                        ErrorCode::for_step(kind),
                        format!("action {} of {} failed", index + 1, total),
                        ErrorContext {
                            chain_id: Some(self.chain_id),
                            action_kind: Some(kind),
                            action_index: Some(index),
                            steps: Some(progress.snapshot()),
                            params: None,
                        },
                    ));
                }
            }
        }

        // Unreachable while every flow ends in a result-producing action;
        // kept so a future zero-result flow fails loudly instead of
        // panicking.
        last_output.ok_or_else(|| {
            MarketError::new(ErrorCode::Unknown, "no action produced a final result").with_context(
                ErrorContext {
                    chain_id: Some(self.chain_id),
                    steps: Some(progress.snapshot()),
                    ..Default::default()
                },
            )
        })
    }

    async fn run_action(
        &self,
        action: Action,
        index: usize,
        progress: &mut Progress,
    ) -> Result<ActionOutput, SettlementError> {
        match action {
            Action::Create { sign } => Ok(ActionOutput::Order(sign().await?)),
            Action::CreateBulk { sign } => Ok(ActionOutput::Orders(sign().await?)),
            Action::OffChainCancel { sign } => Ok(ActionOutput::Signature(sign().await?)),
            Action::Approval { send, .. }
            | Action::Exchange { send }
            | Action::CancelOrder { send }
            | Action::Conversion { send, .. } => {
                let pending = send().await?;
                progress.submitted(index, pending.hash, pending.chain_id);
                let receipt = pending.confirmed().await?;
                Ok(ActionOutput::Receipt(receipt))
            }
        }
    }
}
