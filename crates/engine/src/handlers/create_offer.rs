use crate::context::OperationContext;
use crate::error::EngineError;
use crate::handlers::{operation_error, order_end_time};
use api_client::CreateOrderRequest;
use core_types::{
    Address, CreateOfferParams, CreatedOrder, CreatedOrders, ErrorCode, MarketError, OfferItem,
};
use executor::{Action, ActionOutput};
use settlement::{InputEntry, build_offer_input};
use std::sync::Arc;

/// Creates an offer on a tokenized domain: grants any missing approvals,
/// wraps native coin when the wrapped-native balance cannot cover the bid,
/// signs the order, and records it with the marketplace.
pub struct CreateOfferHandler {
    ctx: Arc<OperationContext>,
}

impl CreateOfferHandler {
    pub fn new(ctx: Arc<OperationContext>) -> Self {
        Self { ctx }
    }

    pub async fn execute(&self, params: CreateOfferParams) -> Result<CreatedOrders, MarketError> {
        self.run(&params).await.map_err(|err| {
            operation_error(
                err,
                ErrorCode::CreateOfferFailed,
                "offer creation failed",
                self.ctx.chain.chain_id,
                &params,
            )
        })
    }

    async fn run(&self, params: &CreateOfferParams) -> Result<CreatedOrders, EngineError> {
        // Single-item offers only; reject before touching the network.
        if params.items.len() != 1 {
            return Err(MarketError::new(
                ErrorCode::UnsupportedMultiItemOffer,
                "exactly one item is supported per offer",
            )
            .into());
        }
        let item = &params.items[0];
        let end_time = order_end_time(item.duration)?;

        let offerer = self.ctx.signer.address().await?;
        let input = build_offer_input(
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

        if let Some(conversion) = self.conversion_action(item, offerer, &input).await? {
            actions.push(conversion);
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
                "offer creation did not end in a signed order",
            )
            .into());
        };

        let response = self
            .ctx
            .api
            .create_offer(&CreateOrderRequest {
                signature: signed.signature.clone(),
                orderbook: params.orderbook.clone(),
                chain_id: self.ctx.chain.chain_id,
                parameters: signed.parameters.clone(),
            })
            .await?;
        tracing::info!(order_id = %response.order_id, "offer recorded");

        Ok(CreatedOrders {
            orders: vec![CreatedOrder {
                order_id: response.order_id,
                order_data: signed.parameters,
            }],
        })
    }

    /// When the offer is funded in the chain's wrapped-native token and the
    /// wrapped balance falls short, wrap exactly the shortfall from native
    /// coin. Fails with "insufficient balance" before building any
    /// transaction when native coin cannot cover the gap either.
    async fn conversion_action(
        &self,
        item: &OfferItem,
        offerer: Address,
        input: &settlement::OrderInput,
    ) -> Result<Option<Action>, EngineError> {
        if item.currency_contract_address != self.ctx.chain.wrapped_native {
            return Ok(None);
        }

        let Some(InputEntry::Currency { amount: price, .. }) = input.offer.first().copied() else {
            return Err(MarketError::new(
                ErrorCode::InvalidParameters,
                "offer input has no currency entry",
            )
            .into());
        };

        let wrapped_balance =
            self.ctx.settlement.balance_of(offerer, self.ctx.chain.wrapped_native).await?;
        if wrapped_balance >= price {
            return Ok(None);
        }

        let shortfall = price - wrapped_balance;
        let native_balance = self.ctx.settlement.native_balance(offerer).await?;
        if native_balance < shortfall {
            return Err(MarketError::new(
                ErrorCode::InsufficientBalance,
                format!(
                    "offer requires {shortfall} more wrapped native than held, \
                     and the native balance {native_balance} cannot cover it"
                ),
            )
            .into());
        }

        tracing::debug!(%shortfall, "inserting native-wrap conversion");
        let client = Arc::clone(&self.ctx.settlement);
        Ok(Some(Action::Conversion {
            amount: shortfall,
            send: Box::new(move || Box::pin(async move { client.wrap_native(shortfall).await })),
        }))
    }
}
