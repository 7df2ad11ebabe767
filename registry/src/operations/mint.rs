// Token Issuance
// This module contains the mint operation logic.

use crate::{
    address::Address,
    error::RegistryResult,
    types::{Registry, TokenId},
};

use super::{admit_mint, MintRequest};

/// Issue a new token to `recipient`
///
/// Assigns the next sequential identity (starting at zero), records the
/// token under both ledger indexes and returns the identity. Admission
/// and payment are the caller's concern; past that point issuance cannot
/// fail.
///
/// # Parameters
/// - `registry`: Registry state
/// - `recipient`: Owner of the new token
/// - `metadata_locator`: Locator recorded verbatim, empty allowed
///
/// # Returns
/// - `TokenId`: The assigned identity
pub fn issue(registry: &mut Registry, recipient: Address, metadata_locator: String) -> TokenId {
    // Step 1: Allocate the next identity
    let token_id = registry.allocate_token_id();

    // Step 2: Record ownership and the locator
    registry.insert_token(token_id, recipient, metadata_locator);

    token_id
}

/// Mint a token for a paying caller
///
/// # Parameters
/// - `registry`: Registry state
/// - `request`: Mint request (caller, recipient, locator, payment)
///
/// # Returns
/// - `Ok(TokenId)`: The new token identity
/// - `Err(RegistryError)`: Rejection code; the registry is untouched
pub fn mint(registry: &mut Registry, request: MintRequest) -> RegistryResult<TokenId> {
    // Step 1: Admission control
    admit_mint(registry, &request)?;

    // Step 2: Accept the payment into the treasury, overpayment included
    registry.record_payment(request.payment);

    // Step 3: Issue the token
    let token_id = issue(registry, request.recipient, request.metadata_locator);

    Ok(token_id)
}
