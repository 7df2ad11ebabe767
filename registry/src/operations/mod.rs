// Registry Operations Module
// This module contains the core business logic for registry operations.
//
// The operations are designed to be runtime-agnostic:
// - State is passed in explicitly as `&Registry` / `&mut Registry`
// - Caller identity and attached payment arrive as plain parameters
// - Outbound payments are abstracted via the `PayoutSink` trait
// - This allows testing and reuse across different runtime environments

mod admin;
mod admission;
mod mint;
mod query;

pub use admin::*;
pub use admission::*;
pub use mint::*;
pub use query::*;

use dashmap::DashMap;

use crate::address::Address;

// ========================================
// Mint Request
// ========================================

/// A mint request as submitted by the caller-facing layer
///
/// Carries everything the registry needs to decide and execute a paid
/// mint; there is no ambient caller or attached value to consult.
#[derive(Clone, Debug)]
pub struct MintRequest {
    /// Identity submitting the request (the payer)
    pub caller: Address,
    /// Identity that will own the new token
    pub recipient: Address,
    /// Opaque locator of the token metadata blob (not validated)
    pub metadata_locator: String,
    /// Payment attached to the request, in atomic units
    pub payment: u64,
}

impl MintRequest {
    /// Create a new mint request with an empty locator
    pub fn new(caller: Address, recipient: Address, payment: u64) -> Self {
        Self {
            caller,
            recipient,
            metadata_locator: String::new(),
            payment,
        }
    }

    /// Set the metadata locator
    pub fn with_locator(mut self, locator: String) -> Self {
        self.metadata_locator = locator;
        self
    }
}

// ========================================
// Payout Sink (for dependency injection)
// ========================================

/// Destination for funds leaving the treasury
///
/// The registry custodies mint payments; the surrounding runtime decides
/// what crediting an address actually means. Crediting must not fail:
/// by the time a sink is invoked the treasury has already been zeroed.
pub trait PayoutSink: Send + Sync {
    /// Credit `amount` atomic units to `recipient`
    fn credit(&self, recipient: &Address, amount: u64);
}

/// In-memory payout ledger
///
/// Reference `PayoutSink` keeping per-address balances in a concurrent
/// map. Used by tests and local deployments.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    balances: DashMap<Address, u64>,
}

impl MemoryLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            balances: DashMap::new(),
        }
    }

    /// Total credited to `address` so far
    pub fn balance_of(&self, address: &Address) -> u64 {
        self.balances.get(address).map(|entry| *entry).unwrap_or(0)
    }
}

impl PayoutSink for MemoryLedger {
    fn credit(&self, recipient: &Address, amount: u64) {
        let mut balance = self.balances.entry(recipient.clone()).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .expect("payout ledger balance overflow");
    }
}
