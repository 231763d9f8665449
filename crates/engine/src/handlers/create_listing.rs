use crate::context::OperationContext;
use crate::error::EngineError;
use crate::handlers::{operation_error, order_end_time};
use api_client::CreateOrderRequest;
use core_types::{CreateListingParams, CreatedOrder, CreatedOrders, ErrorCode, MarketError};
use executor::{Action, ActionOutput};
use settlement::build_listing_input;
use std::sync::Arc;

/// Lists a tokenized domain for sale: grants any missing token approvals,
/// signs the order, and records it with the marketplace. Listings never
/// need a conversion step; the seller gives up the token, not currency.
pub struct CreateListingHandler {
    ctx: Arc<OperationContext>,
}

impl CreateListingHandler {
    pub fn new(ctx: Arc<OperationContext>) -> Self {
        Self { ctx }
    }

    pub async fn execute(&self, params: CreateListingParams) -> Result<CreatedOrders, MarketError> {
        self.run(&params).await.map_err(|err| {
            operation_error(
                err,
                ErrorCode::CreateListingFailed,
                "listing creation failed",
                self.ctx.chain.chain_id,
                &params,
            )
        })
    }

    async fn run(&self, params: &CreateListingParams) -> Result<CreatedOrders, EngineError> {
        if params.items.len() != 1 {
            return Err(MarketError::new(
                ErrorCode::UnsupportedMultiItemOffer,
                "exactly one item is supported per listing",
            )
            .into());
        }
        let item = &params.items[0];
        let end_time = order_end_time(item.duration)?;

        let offerer = self.ctx.signer.address().await?;
        let input = build_listing_input(
            item,
            offerer,
            end_time,
            &params.marketplace_fees,
            self.ctx.chain.zone,
        )?;

        let mut actions = Vec::new();
        for target in self.ctx.settlement.required_approvals(&input, offerer).await? {
            let client = Arc::clone(&self.ctx.settlement);
            actions.push(Action::Approval {
                token: target.token,
                spender: target.spender,
                send: Box::new(move || {
                    Box::pin(async move { client.approve(target.token, target.spender).await })
                }),
            });
        }

        let client = Arc::clone(&self.ctx.settlement);
        let sign_input = input.clone();
        actions.push(Action::Create {
            sign: Box::new(move || {
                Box::pin(async move { client.create_order(&sign_input, offerer).await })
            }),
        });

        let output = self.ctx.executor().execute(actions).await?;
        let ActionOutput::Order(signed) = output else {
            return Err(MarketError::new(
                ErrorCode::Unknown,
                "listing creation did not end in a signed order",
            )
            .into());
        };

        let response = self
            .ctx
            .api
            .create_listing(&CreateOrderRequest {
                signature: signed.signature.clone(),
                orderbook: params.orderbook.clone(),
                chain_id: self.ctx.chain.chain_id,
                parameters: signed.parameters.clone(),
            })
            .await?;
        tracing::info!(order_id = %response.order_id, "listing recorded");

        Ok(CreatedOrders {
            orders: vec![CreatedOrder {
                order_id: response.order_id,
                order_data: signed.parameters,
            }],
        })
    }
}
