// Mint Admission Control
// This module decides whether a mint request may proceed.

use crate::{
    error::{RegistryError, RegistryResult},
    types::Registry,
};

use super::MintRequest;

/// Decide whether a mint request may proceed
///
/// Checks, in order:
/// 1. Supply: the cap applies to everyone, whatever they pay
/// 2. Payment: must reach the current mint price; overpayment is allowed
///    and will be retained in full
///
/// The metadata locator is deliberately not inspected. Admission reads
/// state and never mutates it.
///
/// # Parameters
/// - `registry`: Registry state
/// - `request`: Mint request to admit
///
/// # Returns
/// - `Ok(())`: The request may proceed
/// - `Err(RegistryError)`: Rejection code
pub fn admit_mint(registry: &Registry, request: &MintRequest) -> RegistryResult<()> {
    // Step 1: Check the supply cap
    registry.can_issue()?;

    // Step 2: Check the attached payment
    if request.payment < registry.mint_price() {
        return Err(RegistryError::InsufficientPayment);
    }

    Ok(())
}
