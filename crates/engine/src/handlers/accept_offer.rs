use crate::context::OperationContext;
use crate::error::EngineError;
use crate::handlers::operation_error;
use api_client::OrderQuery;
use core_types::{AcceptOfferParams, ErrorCode, MarketError, OperationResult};
use executor::{Action, ActionOutput};
use settlement::Fulfillment;
use std::sync::Arc;

/// Accepts an existing offer by fulfilling it on-chain, with the accepting
/// party as the recipient of the offered currency.
pub struct AcceptOfferHandler {
    ctx: Arc<OperationContext>,
}

impl AcceptOfferHandler {
    pub fn new(ctx: Arc<OperationContext>) -> Self {
        Self { ctx }
    }

    pub async fn execute(&self, params: AcceptOfferParams) -> Result<OperationResult, MarketError> {
        self.run(&params).await.map_err(|err| {
            operation_error(
                err,
                ErrorCode::AcceptOfferFailed,
                "accepting the offer failed",
                self.ctx.chain.chain_id,
                &params,
            )
        })
    }

    async fn run(&self, params: &AcceptOfferParams) -> Result<OperationResult, EngineError> {
        let fulfiller = self.ctx.signer.address().await?;
        let query = OrderQuery { order_id: params.order_id.clone(), fulfiller };
        let order = self.ctx.api.get_offer(&query).await?.ok_or_else(|| {
            MarketError::new(
                ErrorCode::OrderNotFound,
                format!("offer {} not found", params.order_id),
            )
        })?;

        let units = order.partial_fill_units;
        let client = Arc::clone(&self.ctx.settlement);
        let actions = vec![Action::Exchange {
            send: Box::new(move || {
                Box::pin(async move {
                    client
                        .fulfill_order(&Fulfillment {
                            order,
                            recipient: Some(fulfiller),
                            units_to_fill: units,
                        })
                        .await
                })
            }),
        }];

        match self.ctx.executor().execute(actions).await? {
            ActionOutput::Receipt(receipt) => Ok(receipt.into()),
            _ => Err(MarketError::new(
                ErrorCode::Unknown,
                "accepting the offer did not end in a transaction receipt",
            )
            .into()),
        }
    }
}
