use crate::enums::ActionKind;
use crate::structs::ProgressStep;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable error codes for every failure the engine can surface.
///
/// Outer layers re-wrap inner failures under their own code while keeping
/// the inner error as `cause`, so a caller always sees the business-level
/// code first and can walk the chain for the step-level one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation
    InvalidParameters,
    UnsupportedMultiItemOffer,
    // Lookup
    OrderNotFound,
    // Balance
    InsufficientBalance,
    // Step-type failures (attached by the action executor)
    ApprovalFailed,
    SignatureFailed,
    OffChainCancelFailed,
    TransactionFailed,
    ConversionFailed,
    // Business-operation failures (attached by the operation handlers)
    CreateOfferFailed,
    CreateListingFailed,
    BuyListingFailed,
    AcceptOfferFailed,
    CancelListingFailed,
    CancelOfferFailed,
    // Catch-all
    Unknown,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParameters => "INVALID_PARAMETERS",
            ErrorCode::UnsupportedMultiItemOffer => "UNSUPPORTED_MULTI_ITEM_OFFER",
            ErrorCode::OrderNotFound => "ORDER_NOT_FOUND",
            ErrorCode::InsufficientBalance => "INSUFFICIENT_BALANCE",
            ErrorCode::ApprovalFailed => "APPROVAL_FAILED",
            ErrorCode::SignatureFailed => "SIGNATURE_FAILED",
            ErrorCode::OffChainCancelFailed => "OFF_CHAIN_CANCEL_FAILED",
            ErrorCode::TransactionFailed => "TRANSACTION_FAILED",
            ErrorCode::ConversionFailed => "CONVERSION_FAILED",
            ErrorCode::CreateOfferFailed => "CREATE_OFFER_FAILED",
            ErrorCode::CreateListingFailed => "CREATE_LISTING_FAILED",
            ErrorCode::BuyListingFailed => "BUY_LISTING_FAILED",
            ErrorCode::AcceptOfferFailed => "ACCEPT_OFFER_FAILED",
            ErrorCode::CancelListingFailed => "CANCEL_LISTING_FAILED",
            ErrorCode::CancelOfferFailed => "CANCEL_OFFER_FAILED",
            ErrorCode::Unknown => "UNKNOWN",
        }
    }

    /// The step-type failure code for an action of the given kind.
    pub fn for_step(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Approval => ErrorCode::ApprovalFailed,
            ActionKind::Create | ActionKind::CreateBulk => ErrorCode::SignatureFailed,
            ActionKind::OffChainCancel => ErrorCode::OffChainCancelFailed,
            ActionKind::Exchange | ActionKind::CancelOrder => ErrorCode::TransactionFailed,
            ActionKind::Conversion => ErrorCode::ConversionFailed,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured context attached to a [`MarketError`].
///
/// The executor fills in the action fields and the progress snapshot; the
/// operation handlers fill in the chain id and the serialized call
/// parameters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ErrorContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_kind: Option<ActionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
    /// Snapshot of every progress step at the moment of failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<ProgressStep>>,
}

/// The single error type surfaced by every engine operation.
///
/// Layered wrapping keeps the full trail inspectable: a transaction revert
/// inside an exchange step surfaces as `BUY_LISTING_FAILED` whose `cause` is
/// the executor's `TRANSACTION_FAILED`, whose `cause` is the settlement
/// client's error.
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct MarketError {
    pub code: ErrorCode,
    pub message: String,
    pub context: ErrorContext,
    #[source]
    pub cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl MarketError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), context: ErrorContext::default(), cause: None }
    }

    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_cause(
        mut self,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Re-wrap an inner error under a new code, keeping it as `cause`.
    pub fn wrap(
        cause: impl Into<Box<dyn std::error::Error + Send + Sync>>,
        code: ErrorCode,
        message: impl Into<String>,
        context: ErrorContext,
    ) -> Self {
        Self { code, message: message.into(), context, cause: Some(cause.into()) }
    }

    /// The code of the innermost wrapped [`MarketError`], if the cause chain
    /// bottoms out in one. Lets a UI find the failing step's code without
    /// walking the chain itself.
    pub fn root_code(&self) -> ErrorCode {
        let mut code = self.code;
        let mut source: Option<&(dyn std::error::Error + 'static)> =
            self.cause.as_deref().map(|c| c as _);
        while let Some(err) = source {
            if let Some(market) = err.downcast_ref::<MarketError>() {
                code = market.code;
            }
            source = err.source();
        }
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error;

    #[test]
    fn display_includes_code_and_message() {
        let err = MarketError::new(ErrorCode::OrderNotFound, "order L1 not found");
        assert_eq!(err.to_string(), "ORDER_NOT_FOUND: order L1 not found");
    }

    #[test]
    fn wrap_preserves_cause_chain() {
        let inner = MarketError::new(ErrorCode::TransactionFailed, "reverted");
        let outer = MarketError::wrap(
            inner,
            ErrorCode::BuyListingFailed,
            "buy listing failed",
            ErrorContext { chain_id: Some(1), ..Default::default() },
        );

        assert_eq!(outer.code, ErrorCode::BuyListingFailed);
        let source = outer.source().expect("cause must be preserved");
        let inner = source.downcast_ref::<MarketError>().expect("cause is a MarketError");
        assert_eq!(inner.code, ErrorCode::TransactionFailed);
        assert_eq!(outer.root_code(), ErrorCode::TransactionFailed);
    }

    #[test]
    fn step_code_mapping_is_exhaustive() {
        assert_eq!(ErrorCode::for_step(ActionKind::Approval), ErrorCode::ApprovalFailed);
        assert_eq!(ErrorCode::for_step(ActionKind::Create), ErrorCode::SignatureFailed);
        assert_eq!(ErrorCode::for_step(ActionKind::CreateBulk), ErrorCode::SignatureFailed);
        assert_eq!(
            ErrorCode::for_step(ActionKind::OffChainCancel),
            ErrorCode::OffChainCancelFailed
        );
        assert_eq!(ErrorCode::for_step(ActionKind::Exchange), ErrorCode::TransactionFailed);
        assert_eq!(ErrorCode::for_step(ActionKind::CancelOrder), ErrorCode::TransactionFailed);
        assert_eq!(ErrorCode::for_step(ActionKind::Conversion), ErrorCode::ConversionFailed);
    }

    #[test]
    fn codes_serialize_as_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::UnsupportedMultiItemOffer).unwrap();
        assert_eq!(json, "\"UNSUPPORTED_MULTI_ITEM_OFFER\"");
    }
}
