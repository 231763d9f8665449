//! # Nomen Core Types
//!
//! Layer-0 crate holding the shared vocabulary of the order execution
//! engine: action kinds, progress steps, operation parameters and results,
//! and the single typed error every operation surfaces.
//!
//! This crate has no knowledge of the settlement protocol or the
//! marketplace API; it only defines the data those layers exchange.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{ActionKind, CancellationType, StepState, TokenStandard, TxStatus};
pub use error::{ErrorCode, ErrorContext, MarketError};
pub use structs::{
    AcceptOfferParams, BuyListingParams, CancelListingParams, CancelOfferParams,
    CreateListingParams, CreateOfferParams, CreatedOrder, CreatedOrders, Fee, ListingItem,
    OfferItem, OperationResult, OrderComponents, OrderRecord, ProgressCallback, ProgressStep,
};

// The chain primitives used across the workspace.
pub use alloy_primitives::{Address, B256, Bytes, U256};
