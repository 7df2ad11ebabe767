// Registry Events
// Notifications published after a mutation has been committed.

use serde::{Deserialize, Serialize};

use crate::{address::Address, types::TokenId};

/// Event published by a shared registry after a committed mutation
///
/// Delivery is fire-and-forget: subscribers that lag or disconnect miss
/// events, and the mutation stands regardless.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum RegistryEvent {
    /// A new token was issued, by a paid mint or by the administrator
    Minted {
        /// Owner of the new token
        recipient: Address,
        /// Assigned token identity
        id: TokenId,
        /// Locator recorded for the token
        metadata_locator: String,
    },

    /// The administrator replaced the mint price
    PriceUpdated {
        /// Price now required per mint, in atomic units
        new_price: u64,
    },
}
