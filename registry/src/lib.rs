// Token Issuance and Ownership Registry
// A fixed-supply token ledger: sequential identities, paid and
// administrative mints, owner indexes and a withdrawable treasury.
//
// Module Structure:
// - address: account identities used as ledger keys
// - config: default deployment parameters and currency units
// - error: rejection codes shared by all operations
// - types: the ledger state itself
// - events: notifications published after committed mutations
// - operations: admission, issuance, administration and queries
// - shared: lock-protected handle for concurrent use

pub mod address;
pub mod config;
pub mod error;
pub mod events;
pub mod operations;
pub mod shared;
pub mod types;

pub use address::Address;
pub use error::{RegistryError, RegistryResult};
pub use events::RegistryEvent;
pub use operations::{MemoryLedger, MintRequest, PayoutSink};
pub use shared::SharedRegistry;
pub use types::{Registry, RegistryConfig, Token, TokenId};
