pub mod error;
pub mod normalize;
pub mod strategy;

pub use error::{Error, Result};
pub use normalize::{normalize, Normalized};
pub use strategy::{min_coins_bottom_up, min_coins_greedy, min_coins_memoized, min_coins_naive};
