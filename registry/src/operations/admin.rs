// Administrative Operations
// Price updates, free mints and treasury withdrawal.
// Every operation here requires the caller to be the administrator.

use crate::{
    address::Address,
    error::RegistryResult,
    types::{Registry, TokenId},
};

use super::{issue, PayoutSink};

/// Replace the mint price
///
/// Takes effect for every subsequent admission decision; requests already
/// admitted are unaffected.
///
/// # Parameters
/// - `registry`: Registry state
/// - `caller`: Must be the administrator
/// - `new_price`: Price in atomic units, zero allowed
///
/// # Returns
/// - `Ok(())`: Price replaced
/// - `Err(RegistryError)`: Rejection code; the registry is untouched
pub fn update_mint_price(
    registry: &mut Registry,
    caller: &Address,
    new_price: u64,
) -> RegistryResult<()> {
    registry.ensure_admin(caller)?;
    registry.mint_price = new_price;
    Ok(())
}

/// Issue a token without payment
///
/// The administrator mints directly to any recipient. No payment is
/// checked and the treasury does not move, but the supply cap still
/// applies.
///
/// # Parameters
/// - `registry`: Registry state
/// - `caller`: Must be the administrator
/// - `recipient`: Owner of the new token
/// - `metadata_locator`: Locator recorded verbatim, empty allowed
///
/// # Returns
/// - `Ok(TokenId)`: The new token identity
/// - `Err(RegistryError)`: Rejection code; the registry is untouched
pub fn free_mint(
    registry: &mut Registry,
    caller: &Address,
    recipient: Address,
    metadata_locator: String,
) -> RegistryResult<TokenId> {
    registry.ensure_admin(caller)?;
    registry.can_issue()?;
    Ok(issue(registry, recipient, metadata_locator))
}

/// Withdraw the accumulated treasury to the administrator
///
/// The treasury is zeroed first and the sink is credited afterwards, so
/// no interleaving of calls can pay the same balance out twice. An empty
/// treasury withdraws zero; the sink is not invoked for nothing.
///
/// # Parameters
/// - `registry`: Registry state
/// - `payouts`: Destination for the funds
/// - `caller`: Must be the administrator
///
/// # Returns
/// - `Ok(u64)`: Amount paid out, possibly zero
/// - `Err(RegistryError)`: Rejection code; the registry is untouched
pub fn withdraw(
    registry: &mut Registry,
    payouts: &dyn PayoutSink,
    caller: &Address,
) -> RegistryResult<u64> {
    registry.ensure_admin(caller)?;

    // Step 1: Zero the balance
    let amount = registry.take_treasury();

    // Step 2: Pay it out
    if amount > 0 {
        payouts.credit(registry.administrator(), amount);
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::ADDRESS_SIZE;
    use crate::error::RegistryError;
    use crate::operations::{mint, MemoryLedger, MintRequest};
    use crate::types::RegistryConfig;

    fn test_address(byte: u8) -> Address {
        Address::new([byte; ADDRESS_SIZE])
    }

    fn admin() -> Address {
        test_address(1)
    }

    fn test_registry(max_supply: u64, mint_price: u64) -> Registry {
        let config = RegistryConfig::new("Test".to_string(), "TEST".to_string(), admin())
            .with_max_supply(max_supply)
            .with_mint_price(mint_price);
        Registry::new(config)
    }

    #[test]
    fn test_update_mint_price() {
        let mut registry = test_registry(10, 100);
        update_mint_price(&mut registry, &admin(), 250).unwrap();
        assert_eq!(registry.mint_price(), 250);

        // Zero disables the payment requirement entirely
        update_mint_price(&mut registry, &admin(), 0).unwrap();
        assert_eq!(registry.mint_price(), 0);
    }

    #[test]
    fn test_update_mint_price_unauthorized() {
        let mut registry = test_registry(10, 100);
        let before = registry.clone();

        let result = update_mint_price(&mut registry, &test_address(2), 250);
        assert_eq!(result, Err(RegistryError::Unauthorized));
        assert_eq!(registry, before);
    }

    #[test]
    fn test_new_price_applies_to_subsequent_mints() {
        let mut registry = test_registry(10, 100);
        let buyer = test_address(2);

        update_mint_price(&mut registry, &admin(), 300).unwrap();

        let result = mint(
            &mut registry,
            MintRequest::new(buyer.clone(), buyer.clone(), 100),
        );
        assert_eq!(result, Err(RegistryError::InsufficientPayment));
        assert!(mint(&mut registry, MintRequest::new(buyer.clone(), buyer, 300)).is_ok());
    }

    #[test]
    fn test_free_mint_skips_payment() {
        let mut registry = test_registry(10, 100);
        let recipient = test_address(3);

        let token_id = free_mint(&mut registry, &admin(), recipient.clone(), "loc1".to_string())
            .unwrap();

        assert_eq!(token_id, 0);
        assert_eq!(registry.treasury_balance(), 0);
        assert_eq!(registry.tokens.get(&token_id).unwrap().owner, recipient);
        assert!(registry.verify_integrity().is_ok());
    }

    #[test]
    fn test_free_mint_unauthorized() {
        let mut registry = test_registry(10, 100);
        let intruder = test_address(2);
        let before = registry.clone();

        let result = free_mint(&mut registry, &intruder, intruder.clone(), String::new());
        assert_eq!(result, Err(RegistryError::Unauthorized));
        assert_eq!(registry, before);
    }

    #[test]
    fn test_free_mint_respects_supply_cap() {
        let mut registry = test_registry(1, 100);
        free_mint(&mut registry, &admin(), test_address(3), String::new()).unwrap();

        let result = free_mint(&mut registry, &admin(), test_address(3), String::new());
        assert_eq!(result, Err(RegistryError::SupplyExhausted));
    }

    #[test]
    fn test_withdraw_drains_treasury_to_admin() {
        let mut registry = test_registry(10, 100);
        let ledger = MemoryLedger::new();
        let buyer = test_address(2);

        mint(
            &mut registry,
            MintRequest::new(buyer.clone(), buyer.clone(), 100),
        )
        .unwrap();
        mint(&mut registry, MintRequest::new(buyer.clone(), buyer, 130)).unwrap();

        let amount = withdraw(&mut registry, &ledger, &admin()).unwrap();
        assert_eq!(amount, 230);
        assert_eq!(registry.treasury_balance(), 0);
        assert_eq!(ledger.balance_of(&admin()), 230);
    }

    #[test]
    fn test_second_withdraw_pays_nothing() {
        let mut registry = test_registry(10, 100);
        let ledger = MemoryLedger::new();
        let buyer = test_address(2);

        mint(&mut registry, MintRequest::new(buyer.clone(), buyer, 100)).unwrap();

        assert_eq!(withdraw(&mut registry, &ledger, &admin()).unwrap(), 100);
        assert_eq!(withdraw(&mut registry, &ledger, &admin()).unwrap(), 0);
        assert_eq!(ledger.balance_of(&admin()), 100);
    }

    #[test]
    fn test_withdraw_empty_treasury_pays_zero() {
        let mut registry = test_registry(10, 100);
        let ledger = MemoryLedger::new();

        assert_eq!(withdraw(&mut registry, &ledger, &admin()).unwrap(), 0);
        assert_eq!(ledger.balance_of(&admin()), 0);
    }

    #[test]
    fn test_withdraw_unauthorized() {
        let mut registry = test_registry(10, 100);
        let ledger = MemoryLedger::new();
        let buyer = test_address(2);

        mint(
            &mut registry,
            MintRequest::new(buyer.clone(), buyer.clone(), 100),
        )
        .unwrap();
        let before = registry.clone();

        let result = withdraw(&mut registry, &ledger, &buyer);
        assert_eq!(result, Err(RegistryError::Unauthorized));
        assert_eq!(registry, before);
        assert_eq!(ledger.balance_of(&buyer), 0);
    }
}
