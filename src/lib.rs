//! # Nomen
//!
//! An execution engine for order operations on tokenized domain names:
//! creating offers and listings, buying listings, accepting offers, and
//! cancelling either side on- or off-chain, settled through an external
//! order-settlement protocol and recorded with the marketplace orderbook.
//!
//! This crate is the single public surface; the workspace members behind it
//! each own one concern:
//!
//! - `core-types`: the shared data model, progress steps, and the layered
//!   [`MarketError`] every operation surfaces.
//! - `configuration`: typed settings loaded from file and environment.
//! - `settlement`: the [`Signer`] and [`SettlementClient`] seams over the
//!   settlement protocol, plus the pure order-input builders.
//! - `api-client`: the marketplace orderbook REST client.
//! - `executor`: sequential action execution with progress reporting.
//! - `engine`: one handler per business operation.
//!
//! ## Getting started
//!
//! Construct an [`OperationContext`] from your signer, settlement client,
//! orderbook client, and chain configuration, then hand it to the handler
//! for the operation you need:
//!
//! ```no_run
//! # async fn run(ctx: std::sync::Arc<nomen::OperationContext>,
//! #              params: nomen::BuyListingParams) -> Result<(), nomen::MarketError> {
//! let result = nomen::BuyListingHandler::new(ctx).execute(params).await?;
//! println!("bought in tx {:?}", result.transaction_hash);
//! # Ok(())
//! # }
//! ```

pub use core_types::{
    AcceptOfferParams, ActionKind, Address, B256, BuyListingParams, Bytes, CancelListingParams,
    CancelOfferParams, CancellationType, CreateListingParams, CreateOfferParams, CreatedOrder,
    CreatedOrders, ErrorCode, ErrorContext, Fee, ListingItem, MarketError, OfferItem,
    OperationResult, OrderComponents, OrderRecord, ProgressCallback, ProgressStep, StepState,
    TokenStandard, TxStatus, U256,
};

pub use configuration::{ApiSettings, ChainSettings, ConfigError, Settings, load_settings};

pub use settlement::{
    ApprovalTarget, CancellationScope, Fulfillment, InputEntry, OrderInput, PendingTransaction,
    SettlementClient, SettlementError, SignedOrder, Signer, TransactionReceipt,
    TransactionRequest,
};

pub use api_client::{OrderQuery, OrderbookApi, OrderbookHttpClient};

pub use executor::{Action, ActionExecutor, ActionOutput};

pub use engine::{
    AcceptOfferHandler, BuyListingHandler, CancelListingHandler, CancelOfferHandler, ChainConfig,
    CreateListingHandler, CreateOfferHandler, OperationContext,
};
