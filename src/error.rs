use thiserror::Error;

/// Errors raised while validating solver input.
///
/// Infeasibility ("no combination of coins sums to the target") is not an
/// error; solvers report it as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The target amount could not be converted to a 64-bit signed integer.
    #[error("target amount is not representable as a 64-bit integer")]
    TargetNotInteger,
    /// A coin value could not be converted to a 64-bit signed integer.
    #[error("coin value is not representable as a 64-bit integer")]
    CoinNotInteger,
}

pub type Result<T> = std::result::Result<T, Error>;
