// Registry Core Types
// This module defines the ledger state for token issuance and ownership.

use anyhow::bail;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    address::Address,
    config::{DEFAULT_MAX_SUPPLY, DEFAULT_MINT_PRICE},
    error::{RegistryError, RegistryResult},
};

/// Token identity, assigned sequentially from zero
pub type TokenId = u64;

// ========================================
// Token
// ========================================

/// A single issued token
///
/// Tokens are never destroyed and never change hands; both fields are
/// fixed at issuance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Owner address
    pub owner: Address,

    /// Opaque locator of the off-ledger metadata blob. Never validated,
    /// never dereferenced; the empty string is a legal value.
    pub metadata_locator: String,
}

// ========================================
// Registry Configuration
// ========================================

/// Deployment parameters for a new registry
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// Collection name
    pub name: String,

    /// Collection symbol
    pub symbol: String,

    /// Identity granted administrative rights
    pub administrator: Address,

    /// Ceiling on the number of tokens ever issued
    pub max_supply: u64,

    /// Payment required per mint, in atomic units
    pub mint_price: u64,
}

impl RegistryConfig {
    /// Create a configuration with the default supply cap and mint price
    pub fn new(name: String, symbol: String, administrator: Address) -> Self {
        Self {
            name,
            symbol,
            administrator,
            max_supply: DEFAULT_MAX_SUPPLY,
            mint_price: DEFAULT_MINT_PRICE,
        }
    }

    /// Set the supply cap
    pub fn with_max_supply(mut self, max_supply: u64) -> Self {
        self.max_supply = max_supply;
        self
    }

    /// Set the mint price
    pub fn with_mint_price(mut self, mint_price: u64) -> Self {
        self.mint_price = mint_price;
        self
    }
}

// ========================================
// Registry
// ========================================

/// Ledger of issued tokens, owners, supply counters, price and treasury
///
/// A registry is plain owned state: operations receive it by reference
/// and mutate it in place. Nothing here is shared or locked; concurrent
/// access goes through [`crate::shared::SharedRegistry`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registry {
    /// Collection name
    pub(crate) name: String,

    /// Collection symbol
    pub(crate) symbol: String,

    /// Identity authorized for administrative operations
    pub(crate) administrator: Address,

    /// Next token identity to assign (equals the number of issued tokens)
    pub(crate) next_token_id: TokenId,

    /// Issued tokens, keyed by identity, in issuance order
    pub(crate) tokens: IndexMap<TokenId, Token>,

    /// Token identities held by each owner, in acquisition order
    pub(crate) tokens_by_owner: IndexMap<Address, Vec<TokenId>>,

    /// Payment required per mint, in atomic units
    pub(crate) mint_price: u64,

    /// Ceiling on the number of tokens ever issued
    pub(crate) max_supply: u64,

    /// Mint payments accumulated and not yet withdrawn
    pub(crate) treasury_balance: u64,
}

impl Registry {
    /// Create an empty registry from its deployment configuration
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            name: config.name,
            symbol: config.symbol,
            administrator: config.administrator,
            next_token_id: 0,
            tokens: IndexMap::new(),
            tokens_by_owner: IndexMap::new(),
            mint_price: config.mint_price,
            max_supply: config.max_supply,
            treasury_balance: 0,
        }
    }

    /// Collection name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Collection symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Identity authorized for administrative operations
    pub fn administrator(&self) -> &Address {
        &self.administrator
    }

    /// Next token identity to assign
    pub fn next_token_id(&self) -> TokenId {
        self.next_token_id
    }

    /// Payment currently required per mint, in atomic units
    pub fn mint_price(&self) -> u64 {
        self.mint_price
    }

    /// Ceiling on the number of tokens ever issued
    pub fn max_supply(&self) -> u64 {
        self.max_supply
    }

    /// Mint payments accumulated and not yet withdrawn
    pub fn treasury_balance(&self) -> u64 {
        self.treasury_balance
    }

    /// Check that `caller` holds administrative rights
    pub fn ensure_admin(&self, caller: &Address) -> RegistryResult<()> {
        if *caller != self.administrator {
            return Err(RegistryError::Unauthorized);
        }
        Ok(())
    }

    /// Check that one more token can be issued
    pub fn can_issue(&self) -> RegistryResult<()> {
        if self.next_token_id >= self.max_supply {
            return Err(RegistryError::SupplyExhausted);
        }
        Ok(())
    }

    /// Get the next token identity and advance the counter
    ///
    /// Callers must have passed [`Registry::can_issue`] first. The counter
    /// is capped by `max_supply`, so wrapping the u64 here means the ledger
    /// itself is corrupt and the process must not continue.
    pub(crate) fn allocate_token_id(&mut self) -> TokenId {
        let token_id = self.next_token_id;
        self.next_token_id = self
            .next_token_id
            .checked_add(1)
            .expect("token identity counter overflow");
        token_id
    }

    /// Record a freshly issued token under both indexes
    pub(crate) fn insert_token(&mut self, id: TokenId, owner: Address, metadata_locator: String) {
        let token = Token {
            owner: owner.clone(),
            metadata_locator,
        };
        let replaced = self.tokens.insert(id, token);
        debug_assert!(replaced.is_none(), "token identity {} reused", id);
        self.tokens_by_owner.entry(owner).or_default().push(id);
    }

    /// Accept a mint payment into the treasury
    ///
    /// Total currency in circulation fits in u64, so wrapping here means
    /// the ledger is corrupt and the process must not continue.
    pub(crate) fn record_payment(&mut self, amount: u64) {
        self.treasury_balance = self
            .treasury_balance
            .checked_add(amount)
            .expect("treasury balance overflow");
    }

    /// Zero the treasury and hand back the accumulated balance
    ///
    /// The balance is cleared before the caller can pay anything out, so a
    /// competing withdrawal always observes an empty treasury.
    pub(crate) fn take_treasury(&mut self) -> u64 {
        std::mem::take(&mut self.treasury_balance)
    }

    /// Re-derive the ledger invariants from scratch
    ///
    /// Walks both indexes and cross-checks them against the supply counter.
    /// Intended for tests and diagnostics; operations maintain these
    /// invariants incrementally.
    pub fn verify_integrity(&self) -> anyhow::Result<()> {
        if self.next_token_id as usize != self.tokens.len() {
            bail!(
                "supply counter {} does not match {} issued tokens",
                self.next_token_id,
                self.tokens.len()
            );
        }
        if self.next_token_id > self.max_supply {
            bail!(
                "supply counter {} exceeds cap {}",
                self.next_token_id,
                self.max_supply
            );
        }

        // Every issued token appears exactly once in its owner's sequence
        for (id, token) in &self.tokens {
            if *id >= self.next_token_id {
                bail!("token {} is beyond the supply counter", id);
            }
            let owned = self
                .tokens_by_owner
                .get(&token.owner)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            if owned.iter().filter(|t| **t == *id).count() != 1 {
                bail!("token {} missing from its owner's sequence", id);
            }
        }

        // The owner index references no token it does not own
        let mut indexed = 0usize;
        for (owner, ids) in &self.tokens_by_owner {
            for id in ids {
                match self.tokens.get(id) {
                    Some(token) if token.owner == *owner => indexed += 1,
                    _ => bail!("owner index references token {} held by someone else", id),
                }
            }
        }
        if indexed != self.tokens.len() {
            bail!(
                "owner index covers {} tokens, ledger has {}",
                indexed,
                self.tokens.len()
            );
        }

        Ok(())
    }
}
