//! Pure builders turning marketplace-level item descriptions into protocol
//! order inputs.
//!
//! Both builders attach the supplied fee list and zone unmodified. Duration
//! validation happens upstream in the operation handlers; by the time an
//! item reaches a builder its end time has already been computed.

use crate::error::SettlementError;
use crate::types::{InputEntry, OrderInput};
use alloy_primitives::{Address, U256};
use core_types::{Fee, ListingItem, OfferItem, TokenStandard};

/// Builds the order input for an offer: the offerer bids a currency amount
/// and receives the token.
pub fn build_offer_input(
    item: &OfferItem,
    offerer: Address,
    end_time: u64,
    fees: &[Fee],
    zone: Address,
) -> Result<OrderInput, SettlementError> {
    let price = parse_amount(&item.price, "price")?;
    let identifier = parse_amount(&item.token_id, "tokenId")?;
    tracing::debug!(%offerer, %price, end_time, "building offer input");

    Ok(OrderInput {
        offerer,
        offer: vec![InputEntry::Currency {
            token: Some(item.currency_contract_address),
            amount: price,
        }],
        consideration: vec![token_entry(item.contract, identifier, item.standard)],
        end_time,
        zone,
        fees: fees.to_vec(),
    })
}

/// Builds the order input for a listing: the offerer gives up the token and
/// receives a currency amount. A listing priced in native coin carries no
/// currency token address.
pub fn build_listing_input(
    item: &ListingItem,
    offerer: Address,
    end_time: u64,
    fees: &[Fee],
    zone: Address,
) -> Result<OrderInput, SettlementError> {
    let price = parse_amount(&item.price, "price")?;
    let identifier = parse_amount(&item.token_id, "tokenId")?;
    tracing::debug!(%offerer, %price, end_time, "building listing input");

    Ok(OrderInput {
        offerer,
        offer: vec![token_entry(item.contract, identifier, item.standard)],
        consideration: vec![InputEntry::Currency {
            token: item.currency_contract_address,
            amount: price,
        }],
        end_time,
        zone,
        fees: fees.to_vec(),
    })
}

/// The token-side entry for an item, choosing the quantity variant when the
/// standard requires one.
fn token_entry(token: Address, identifier: U256, standard: TokenStandard) -> InputEntry {
    match standard {
        TokenStandard::Erc721 => InputEntry::Erc721 { token, identifier },
        TokenStandard::Erc1155 => InputEntry::Erc1155 { token, identifier, amount: U256::ONE },
    }
}

fn parse_amount(value: &str, field: &str) -> Result<U256, SettlementError> {
    value.parse::<U256>().map_err(|e| {
        SettlementError::InvalidInput(format!("{field} '{value}' is not a valid integer: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn offer_item(standard: TokenStandard) -> OfferItem {
        OfferItem {
            contract: Address::repeat_byte(0xaa),
            token_id: "7".to_string(),
            price: "1000000000000000000".to_string(),
            currency_contract_address: Address::repeat_byte(0xcc),
            duration: 86_400_000,
            standard,
        }
    }

    fn listing_item(currency: Option<Address>) -> ListingItem {
        ListingItem {
            contract: Address::repeat_byte(0xaa),
            token_id: "7".to_string(),
            price: "500".to_string(),
            currency_contract_address: currency,
            duration: 86_400_000,
            standard: TokenStandard::Erc721,
        }
    }

    fn fees() -> Vec<Fee> {
        vec![Fee { recipient: Address::repeat_byte(0xfe), basis_points: 250 }]
    }

    #[test]
    fn offer_bids_currency_for_single_token() {
        let offerer = Address::repeat_byte(0x01);
        let zone = Address::repeat_byte(0x02);
        let input =
            build_offer_input(&offer_item(TokenStandard::Erc721), offerer, 1_700_000_000, &fees(), zone)
                .unwrap();

        assert_eq!(
            input.offer,
            vec![InputEntry::Currency {
                token: Some(Address::repeat_byte(0xcc)),
                amount: U256::from(10).pow(U256::from(18)),
            }]
        );
        assert_eq!(
            input.consideration,
            vec![InputEntry::Erc721 { token: Address::repeat_byte(0xaa), identifier: U256::from(7) }]
        );
        assert_eq!(input.offerer, offerer);
        assert_eq!(input.zone, zone);
        assert_eq!(input.end_time, 1_700_000_000);
        assert_eq!(input.fees, fees());
    }

    #[test]
    fn multi_token_items_carry_a_quantity_of_one() {
        let input = build_offer_input(
            &offer_item(TokenStandard::Erc1155),
            Address::repeat_byte(0x01),
            1,
            &[],
            Address::ZERO,
        )
        .unwrap();

        assert_eq!(
            input.consideration,
            vec![InputEntry::Erc1155 {
                token: Address::repeat_byte(0xaa),
                identifier: U256::from(7),
                amount: U256::ONE,
            }]
        );
    }

    #[test]
    fn listing_offers_token_for_currency() {
        let currency = Some(Address::repeat_byte(0xcc));
        let input = build_listing_input(
            &listing_item(currency),
            Address::repeat_byte(0x01),
            1,
            &fees(),
            Address::ZERO,
        )
        .unwrap();

        assert_eq!(
            input.offer,
            vec![InputEntry::Erc721 { token: Address::repeat_byte(0xaa), identifier: U256::from(7) }]
        );
        assert_eq!(
            input.consideration,
            vec![InputEntry::Currency { token: currency, amount: U256::from(500) }]
        );
    }

    #[test]
    fn native_listing_omits_the_currency_token() {
        let input = build_listing_input(
            &listing_item(None),
            Address::repeat_byte(0x01),
            1,
            &[],
            Address::ZERO,
        )
        .unwrap();

        assert_eq!(
            input.consideration,
            vec![InputEntry::Currency { token: None, amount: U256::from(500) }]
        );
        // Serialized form drops the token field entirely for native pricing.
        let json = serde_json::to_value(&input.consideration[0]).unwrap();
        assert!(json.get("token").is_none());
    }

    #[test]
    fn non_integer_price_is_rejected() {
        let mut item = offer_item(TokenStandard::Erc721);
        item.price = "1.5".to_string();
        let err =
            build_offer_input(&item, Address::ZERO, 1, &[], Address::ZERO).unwrap_err();
        assert!(matches!(err, SettlementError::InvalidInput(_)));
    }
}
