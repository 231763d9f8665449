//! # Nomen Engine
//!
//! The orchestration layer of the order execution engine: one handler per
//! business operation (create offer, create listing, buy listing, accept
//! offer, cancel listing, cancel offer), each validating input, assembling
//! the action list, running it through the executor, and submitting results
//! to the marketplace API.
//!
//! ## Architectural Principles
//!
//! - **One operation per invocation:** a handler call owns its whole flow.
//!   Actions within it run strictly sequentially because later actions
//!   depend on the confirmed side effects of earlier ones. No state
//!   survives past a single `execute` call.
//! - **Layered error trail:** executor failures carry step-type codes; the
//!   owning handler re-wraps them (and its own validation failures) under
//!   its business-operation code with the call parameters attached, so the
//!   outermost error is always operation-scoped and the chain bottoms out
//!   at the true cause.

pub mod context;
pub mod error;
pub mod handlers;

// Re-export the key components to provide a clean, public-facing API.
pub use context::{ChainConfig, OperationContext};
pub use error::EngineError;
pub use handlers::{
    AcceptOfferHandler, BuyListingHandler, CancelListingHandler, CancelOfferHandler,
    CreateListingHandler, CreateOfferHandler,
};
