// Registry Error Codes
// This module defines all rejection codes for registry operations.

use thiserror::Error;

/// Registry operation result type
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry error type
///
/// Every variant is a caller error: whenever one of these is returned the
/// registry state is exactly what it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Attached payment is below the current mint price
    #[error("Insufficient payment")]
    InsufficientPayment,

    /// Every token identity up to the supply cap has been issued
    #[error("Supply exhausted")]
    SupplyExhausted,

    /// Caller is not the registry administrator
    #[error("Unauthorized")]
    Unauthorized,

    /// No token has been issued under the requested identity
    #[error("Unknown token")]
    UnknownToken,
}
