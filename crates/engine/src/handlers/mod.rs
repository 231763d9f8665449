//! The five business operations, one handler per operation.
//!
//! Each handler validates its input, fetches and validates existing orders,
//! assembles the action list (including conditional approval and conversion
//! steps), invokes the executor, and submits results to the marketplace
//! API. Whatever fails along the way is re-wrapped under the handler's own
//! business-operation code with the call parameters attached, preserving
//! the inner error as cause.

mod accept_offer;
mod buy_listing;
mod cancel;
mod create_listing;
mod create_offer;

pub use accept_offer::AcceptOfferHandler;
pub use buy_listing::BuyListingHandler;
pub use cancel::{CancelListingHandler, CancelOfferHandler};
pub use create_listing::CreateListingHandler;
pub use create_offer::CreateOfferHandler;

use crate::error::EngineError;
use core_types::{ErrorCode, ErrorContext, MarketError};
use serde::Serialize;

/// Stamps a handler's business-operation code onto a flow failure, keeping
/// the inner error as cause and attaching the serialized call parameters.
pub(crate) fn operation_error<P: Serialize>(
    error: EngineError,
    code: ErrorCode,
    message: &str,
    chain_id: u64,
    params: &P,
) -> MarketError {
    MarketError::wrap(
        error,
        code,
        message,
        ErrorContext {
            chain_id: Some(chain_id),
            params: serde_json::to_value(params).ok(),
            ..Default::default()
        },
    )
}

/// Order expiry in seconds since epoch: now plus the item's duration in
/// milliseconds, floor-divided into seconds. A zero duration, or one large
/// enough to overflow the epoch clock, is rejected here, before any input
/// reaches the order builders.
pub(crate) fn order_end_time(duration_ms: u64) -> Result<u64, MarketError> {
    if duration_ms == 0 {
        return Err(MarketError::new(
            ErrorCode::InvalidParameters,
            "duration must be greater than zero",
        ));
    }
    let now_ms = chrono::Utc::now().timestamp_millis() as u64;
    let end_ms = now_ms.checked_add(duration_ms).ok_or_else(|| {
        MarketError::new(ErrorCode::InvalidParameters, "duration is too far in the future")
    })?;
    Ok(end_ms / 1000)
}
