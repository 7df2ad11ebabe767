// Registry Configuration Constants
// Default deployment parameters and currency units.

/// Decimals used by the payment currency
pub const COIN_DECIMALS: u8 = 8;

/// Atomic units per whole coin
pub const COIN_VALUE: u64 = 10u64.pow(COIN_DECIMALS as u32);

/// Default mint price (0.01 coin)
pub const DEFAULT_MINT_PRICE: u64 = COIN_VALUE / 100;

/// Default ceiling on the number of tokens a registry may ever issue
pub const DEFAULT_MAX_SUPPLY: u64 = 1000;

/// Capacity of the registry event broadcast channel
pub const EVENT_CHANNEL_CAPACITY: usize = 256;
