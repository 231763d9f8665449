use crate::context::OperationContext;
use crate::error::EngineError;
use crate::handlers::operation_error;
use api_client::{CancelOrderRequest, OrderQuery};
use core_types::{
    CancelListingParams, CancelOfferParams, CancellationType, ErrorCode, MarketError,
    OperationResult,
};
use executor::{Action, ActionOutput};
use settlement::CancellationScope;
use std::sync::Arc;

/// Which side of the orderbook a cancellation targets. Determines the fetch
/// and cancel endpoints; the action flow is identical for both.
#[derive(Debug, Clone, Copy)]
enum CancelSide {
    Listing,
    Offer,
}

/// Cancels an existing listing, either off-chain (cancellation signature
/// submitted to the marketplace) or on-chain (protocol cancellation
/// transaction). Never both.
pub struct CancelListingHandler {
    ctx: Arc<OperationContext>,
}

impl CancelListingHandler {
    pub fn new(ctx: Arc<OperationContext>) -> Self {
        Self { ctx }
    }

    pub async fn execute(
        &self,
        params: CancelListingParams,
    ) -> Result<OperationResult, MarketError> {
        cancel_order(&self.ctx, CancelSide::Listing, &params.order_id, params.cancellation_type)
            .await
            .map_err(|err| {
                operation_error(
                    err,
                    ErrorCode::CancelListingFailed,
                    "cancelling the listing failed",
                    self.ctx.chain.chain_id,
                    &params,
                )
            })
    }
}

/// Cancels an existing offer; same flow as listing cancellation against the
/// offer endpoints.
pub struct CancelOfferHandler {
    ctx: Arc<OperationContext>,
}

impl CancelOfferHandler {
    pub fn new(ctx: Arc<OperationContext>) -> Self {
        Self { ctx }
    }

    pub async fn execute(
        &self,
        params: CancelOfferParams,
    ) -> Result<OperationResult, MarketError> {
        cancel_order(&self.ctx, CancelSide::Offer, &params.order_id, params.cancellation_type)
            .await
            .map_err(|err| {
                operation_error(
                    err,
                    ErrorCode::CancelOfferFailed,
                    "cancelling the offer failed",
                    self.ctx.chain.chain_id,
                    &params,
                )
            })
    }
}

async fn cancel_order(
    ctx: &Arc<OperationContext>,
    side: CancelSide,
    order_id: &str,
    cancellation_type: CancellationType,
) -> Result<OperationResult, EngineError> {
    let fulfiller = ctx.signer.address().await?;
    let query = OrderQuery { order_id: order_id.to_string(), fulfiller };
    let order = match side {
        CancelSide::Listing => ctx.api.get_listing(&query).await?,
        CancelSide::Offer => ctx.api.get_offer(&query).await?,
    }
    .ok_or_else(|| {
        MarketError::new(ErrorCode::OrderNotFound, format!("order {order_id} not found"))
    })?;

    match cancellation_type {
        CancellationType::OffChain => {
            let scope = CancellationScope {
                order_id: order.order_id.clone(),
                protocol_address: order.protocol_address,
                chain_id: order.chain_id,
            };
            let client = Arc::clone(&ctx.settlement);
            let actions = vec![Action::OffChainCancel {
                sign: Box::new(move || {
                    Box::pin(async move { client.sign_cancellation(&scope).await })
                }),
            }];

            let ActionOutput::Signature(signature) = ctx.executor().execute(actions).await?
            else {
                return Err(MarketError::new(
                    ErrorCode::Unknown,
                    "off-chain cancellation did not end in a signature",
                )
                .into());
            };

            let request = CancelOrderRequest { order_id: order.order_id, signature };
            match side {
                CancelSide::Listing => ctx.api.cancel_listing(&request).await?,
                CancelSide::Offer => ctx.api.cancel_offer(&request).await?,
            }
            tracing::info!(order_id = %request.order_id, "off-chain cancellation recorded");
            Ok(OperationResult::off_chain())
        }
        CancellationType::OnChain => {
            let components = vec![order.components];
            let client = Arc::clone(&ctx.settlement);
            let actions = vec![Action::CancelOrder {
                send: Box::new(move || {
                    Box::pin(async move { client.cancel_orders(&components).await })
                }),
            }];

            match ctx.executor().execute(actions).await? {
                ActionOutput::Receipt(receipt) => Ok(receipt.into()),
                _ => Err(MarketError::new(
                    ErrorCode::Unknown,
                    "on-chain cancellation did not end in a transaction receipt",
                )
                .into()),
            }
        }
    }
}
