//! # Nomen Executor Crate
//!
//! This crate provides the core components for order-operation execution:
//! the `Action` sum type describing a single executable step, the `Progress`
//! tracker that streams step transitions to the caller, and the
//! `ActionExecutor` that runs an ordered action list to completion.
//!
//! ## Architectural Principles
//!
//! - **Closed step set:** `Action` is a closed sum type with an exhaustive
//!   match in the executor, so adding a step type is a compile-time-checked
//!   change rather than a string-dispatch hazard.
//! - **Precise failure attribution:** a failure inside a single action is
//!   recorded into that step's progress state and re-thrown as a
//!   step-type-coded error with a full progress snapshot, so callers know
//!   exactly which step failed without extra instrumentation.
//!
//! ## Public API
//!
//! - `Action` / `ActionOutput`: the executable step model.
//! - `Progress`: per-step status tracking with synchronous callbacks.
//! - `ActionExecutor`: the strictly sequential execution loop.

// Declare the modules that constitute this crate.
pub mod action;
pub mod progress;
pub mod runner;

// Re-export the key components to provide a clean, public-facing API.
pub use action::{Action, ActionOutput, SignBytesFn, SignOrderFn, SignOrdersFn, TransactFn};
pub use progress::Progress;
pub use runner::ActionExecutor;
