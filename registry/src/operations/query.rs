// Registry Queries
// Read-only views over the ledger. Nothing here mutates state.

use crate::{
    address::Address,
    error::{RegistryError, RegistryResult},
    types::{Registry, TokenId},
};

/// Token identities held by `owner`, in acquisition order
///
/// An owner with no tokens yields the empty slice; owning nothing is not
/// an error.
pub fn tokens_of<'a>(registry: &'a Registry, owner: &Address) -> &'a [TokenId] {
    registry
        .tokens_by_owner
        .get(owner)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Number of tokens held by `owner`
pub fn balance_of(registry: &Registry, owner: &Address) -> u64 {
    tokens_of(registry, owner).len() as u64
}

/// Number of tokens issued so far
pub fn total_supply(registry: &Registry) -> u64 {
    registry.next_token_id()
}

/// Payment currently required per mint, in atomic units
pub fn current_price(registry: &Registry) -> u64 {
    registry.mint_price()
}

/// Owner of the token `id`
pub fn owner_of(registry: &Registry, id: TokenId) -> RegistryResult<&Address> {
    registry
        .tokens
        .get(&id)
        .map(|token| &token.owner)
        .ok_or(RegistryError::UnknownToken)
}

/// Metadata locator recorded for the token `id`
///
/// Returns whatever was stored at issuance, the empty string included.
pub fn locator_of(registry: &Registry, id: TokenId) -> RegistryResult<&str> {
    registry
        .tokens
        .get(&id)
        .map(|token| token.metadata_locator.as_str())
        .ok_or(RegistryError::UnknownToken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::ADDRESS_SIZE;
    use crate::operations::{free_mint, mint, MintRequest};
    use crate::types::RegistryConfig;

    fn test_address(byte: u8) -> Address {
        Address::new([byte; ADDRESS_SIZE])
    }

    fn test_registry() -> Registry {
        let config = RegistryConfig::new("Test".to_string(), "TEST".to_string(), test_address(1))
            .with_max_supply(10)
            .with_mint_price(100);
        Registry::new(config)
    }

    #[test]
    fn test_queries_on_empty_registry() {
        let registry = test_registry();
        assert_eq!(total_supply(&registry), 0);
        assert_eq!(current_price(&registry), 100);
        assert_eq!(tokens_of(&registry, &test_address(2)), &[] as &[TokenId]);
        assert_eq!(balance_of(&registry, &test_address(2)), 0);
        assert_eq!(owner_of(&registry, 0), Err(RegistryError::UnknownToken));
        assert_eq!(locator_of(&registry, 0), Err(RegistryError::UnknownToken));
    }

    #[test]
    fn test_tokens_of_acquisition_order() {
        let mut registry = test_registry();
        let alice = test_address(2);
        let bob = test_address(3);

        mint(
            &mut registry,
            MintRequest::new(alice.clone(), alice.clone(), 100),
        )
        .unwrap();
        mint(&mut registry, MintRequest::new(bob.clone(), bob.clone(), 100)).unwrap();
        mint(
            &mut registry,
            MintRequest::new(alice.clone(), alice.clone(), 100),
        )
        .unwrap();

        assert_eq!(tokens_of(&registry, &alice), &[0, 2]);
        assert_eq!(tokens_of(&registry, &bob), &[1]);
        assert_eq!(balance_of(&registry, &alice), 2);
        assert_eq!(balance_of(&registry, &bob), 1);
    }

    #[test]
    fn test_total_supply_counts_all_issuance_paths() {
        let mut registry = test_registry();
        let buyer = test_address(2);

        mint(&mut registry, MintRequest::new(buyer.clone(), buyer, 100)).unwrap();
        free_mint(
            &mut registry,
            &test_address(1),
            test_address(3),
            String::new(),
        )
        .unwrap();

        assert_eq!(total_supply(&registry), 2);
    }

    #[test]
    fn test_owner_of_and_locator_of() {
        let mut registry = test_registry();
        let buyer = test_address(2);

        let request = MintRequest::new(buyer.clone(), buyer.clone(), 100)
            .with_locator("bafybeigdyr".to_string());
        let token_id = mint(&mut registry, request).unwrap();

        assert_eq!(owner_of(&registry, token_id), Ok(&buyer));
        assert_eq!(locator_of(&registry, token_id), Ok("bafybeigdyr"));
    }

    #[test]
    fn test_unknown_token_beyond_supply() {
        let mut registry = test_registry();
        let buyer = test_address(2);
        mint(
            &mut registry,
            MintRequest::new(buyer.clone(), buyer.clone(), 100),
        )
        .unwrap();
        mint(&mut registry, MintRequest::new(buyer.clone(), buyer, 100)).unwrap();

        // Two tokens issued: 0 and 1 resolve, 5 does not
        assert!(owner_of(&registry, 1).is_ok());
        assert_eq!(owner_of(&registry, 5), Err(RegistryError::UnknownToken));
        assert_eq!(locator_of(&registry, 5), Err(RegistryError::UnknownToken));
    }

    #[test]
    fn test_empty_locator_round_trips() {
        let mut registry = test_registry();
        let token_id = free_mint(
            &mut registry,
            &test_address(1),
            test_address(4),
            String::new(),
        )
        .unwrap();

        assert_eq!(locator_of(&registry, token_id), Ok(""));
    }
}
