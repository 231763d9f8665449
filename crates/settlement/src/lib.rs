//! # Nomen Settlement Interface
//!
//! This crate defines the engine's view of the external order-settlement
//! protocol: a signer abstraction, a protocol client abstraction, the order
//! input types, and the pure builders that shape marketplace items into
//! protocol order inputs.
//!
//! ## Architectural Principles
//!
//! - **Opaque protocol:** the protocol's cryptography and contract logic are
//!   not reimplemented here. The traits expose exactly the operations the
//!   engine sequences and nothing else, so the adapter over the real
//!   protocol SDK can absorb version churn without touching the engine.
//! - **Pure input building:** `builder` contains no I/O. Everything that can
//!   fail there fails on malformed input, before any network call.

// Declare the modules that constitute this crate.
pub mod builder;
pub mod client;
pub mod error;
pub mod signer;
pub mod types;

// Re-export the key components to provide a clean, public-facing API.
pub use builder::{build_listing_input, build_offer_input};
pub use client::SettlementClient;
pub use error::SettlementError;
pub use signer::Signer;
pub use types::{
    ApprovalTarget, CancellationScope, Fulfillment, InputEntry, OrderInput, PendingTransaction,
    SignedOrder, TransactionReceipt, TransactionRequest,
};
