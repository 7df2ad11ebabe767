// Shared Registry Handle
// Serializes mutations behind a write lock and publishes events after
// each committed mutation.

use std::sync::Arc;

use log::{debug, info};
use tokio::sync::{broadcast, RwLock};

use crate::{
    address::Address,
    config::EVENT_CHANNEL_CAPACITY,
    error::RegistryResult,
    events::RegistryEvent,
    operations::{self, MintRequest, PayoutSink},
    types::{Registry, RegistryConfig, TokenId},
};

/// Thread-safe handle over a [`Registry`]
///
/// Mutations take the write lock, queries take the read lock: writers are
/// serialized, readers run in parallel, and no caller ever observes a
/// half-applied mutation. Events are published while the write lock is
/// still held, so subscribers see them in commit order.
///
/// The handle is cheap to clone; clones share the same ledger, payout
/// sink and event channel.
#[derive(Clone)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Registry>>,
    payouts: Arc<dyn PayoutSink>,
    events: broadcast::Sender<RegistryEvent>,
}

impl SharedRegistry {
    /// Create a registry and wrap it for shared use
    pub fn new(config: RegistryConfig, payouts: Arc<dyn PayoutSink>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(RwLock::new(Registry::new(config))),
            payouts,
            events,
        }
    }

    /// Subscribe to registry events
    ///
    /// Best-effort delivery: a receiver that falls more than the channel
    /// capacity behind starts losing the oldest events.
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: RegistryEvent) {
        // A send error only means nobody is subscribed right now
        if self.events.send(event).is_err() {
            debug!("registry event dropped, no active subscriber");
        }
    }

    /// Mint a token for a paying caller
    pub async fn mint(&self, request: MintRequest) -> RegistryResult<TokenId> {
        let recipient = request.recipient.clone();
        let metadata_locator = request.metadata_locator.clone();
        let payment = request.payment;

        let mut registry = self.inner.write().await;
        let token_id = operations::mint(&mut registry, request).map_err(|err| {
            debug!("mint rejected: {}", err);
            err
        })?;

        self.emit(RegistryEvent::Minted {
            recipient: recipient.clone(),
            id: token_id,
            metadata_locator,
        });
        info!(
            "minted token {} to {} for {} atomic units",
            token_id, recipient, payment
        );
        Ok(token_id)
    }

    /// Issue a token without payment (administrator only)
    pub async fn free_mint(
        &self,
        caller: &Address,
        recipient: Address,
        metadata_locator: String,
    ) -> RegistryResult<TokenId> {
        let mut registry = self.inner.write().await;
        let token_id = operations::free_mint(
            &mut registry,
            caller,
            recipient.clone(),
            metadata_locator.clone(),
        )
        .map_err(|err| {
            debug!("free mint rejected: {}", err);
            err
        })?;

        self.emit(RegistryEvent::Minted {
            recipient: recipient.clone(),
            id: token_id,
            metadata_locator,
        });
        info!("issued token {} to {} without payment", token_id, recipient);
        Ok(token_id)
    }

    /// Replace the mint price (administrator only)
    pub async fn update_mint_price(&self, caller: &Address, new_price: u64) -> RegistryResult<()> {
        let mut registry = self.inner.write().await;
        operations::update_mint_price(&mut registry, caller, new_price).map_err(|err| {
            debug!("price update rejected: {}", err);
            err
        })?;

        self.emit(RegistryEvent::PriceUpdated { new_price });
        info!("mint price set to {} atomic units", new_price);
        Ok(())
    }

    /// Withdraw the accumulated treasury (administrator only)
    pub async fn withdraw(&self, caller: &Address) -> RegistryResult<u64> {
        let mut registry = self.inner.write().await;
        let amount =
            operations::withdraw(&mut registry, self.payouts.as_ref(), caller).map_err(|err| {
                debug!("withdrawal rejected: {}", err);
                err
            })?;

        info!("withdrew {} atomic units to the administrator", amount);
        Ok(amount)
    }

    /// Token identities held by `owner`, in acquisition order
    pub async fn tokens_of(&self, owner: &Address) -> Vec<TokenId> {
        let registry = self.inner.read().await;
        operations::tokens_of(&registry, owner).to_vec()
    }

    /// Number of tokens held by `owner`
    pub async fn balance_of(&self, owner: &Address) -> u64 {
        let registry = self.inner.read().await;
        operations::balance_of(&registry, owner)
    }

    /// Number of tokens issued so far
    pub async fn total_supply(&self) -> u64 {
        let registry = self.inner.read().await;
        operations::total_supply(&registry)
    }

    /// Identity the next mint will be assigned
    pub async fn next_token_id(&self) -> TokenId {
        let registry = self.inner.read().await;
        registry.next_token_id()
    }

    /// Payment currently required per mint, in atomic units
    pub async fn current_price(&self) -> u64 {
        let registry = self.inner.read().await;
        operations::current_price(&registry)
    }

    /// Owner of the token `id`
    pub async fn owner_of(&self, id: TokenId) -> RegistryResult<Address> {
        let registry = self.inner.read().await;
        operations::owner_of(&registry, id).cloned()
    }

    /// Metadata locator recorded for the token `id`
    pub async fn locator_of(&self, id: TokenId) -> RegistryResult<String> {
        let registry = self.inner.read().await;
        operations::locator_of(&registry, id).map(str::to_string)
    }

    /// Collection name
    pub async fn name(&self) -> String {
        let registry = self.inner.read().await;
        registry.name().to_string()
    }

    /// Collection symbol
    pub async fn symbol(&self) -> String {
        let registry = self.inner.read().await;
        registry.symbol().to_string()
    }

    /// Identity authorized for administrative operations
    pub async fn administrator(&self) -> Address {
        let registry = self.inner.read().await;
        registry.administrator().clone()
    }

    /// Ceiling on the number of tokens ever issued
    pub async fn max_supply(&self) -> u64 {
        let registry = self.inner.read().await;
        registry.max_supply()
    }

    /// Mint payments accumulated and not yet withdrawn
    pub async fn treasury_balance(&self) -> u64 {
        let registry = self.inner.read().await;
        registry.treasury_balance()
    }

    /// Point-in-time copy of the whole ledger
    ///
    /// Taken under the read lock, so the copy is a committed state, never
    /// a half-applied one.
    pub async fn snapshot(&self) -> Registry {
        let registry = self.inner.read().await;
        registry.clone()
    }
}
