pub mod bottom_up;
pub mod greedy;
pub mod memoized;
pub mod naive;

// Re-export the solvers with descriptive names
pub use bottom_up::min_coins_bottom_up;
pub use greedy::min_coins_greedy;
pub use memoized::min_coins_memoized;
pub use naive::min_coins_naive;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_optimal_strategies_agree() {
        let coin_sets: [&[i64]; 4] = [&[1, 3, 4], &[2, 4], &[3, 5], &[1, 5, 7, 11]];
        for coins in coin_sets {
            for target in 0..=60 {
                assert_eq!(
                    min_coins_memoized(target, coins.iter().copied()).unwrap(),
                    min_coins_bottom_up(target, coins.iter().copied()).unwrap(),
                    "memoized and bottom-up diverged on target {} coins {:?}",
                    target,
                    coins
                );
            }
        }
    }

    #[test]
    fn test_naive_matches_optimal_on_small_inputs() {
        for target in 0..=20 {
            let expected = min_coins_bottom_up(target, [1, 3, 4]).unwrap();
            assert_eq!(min_coins_naive(target, [1, 3, 4]).unwrap(), expected);
        }
    }

    #[test]
    fn test_all_agree_on_canonical_system() {
        // {1, 5, 10, 25} is a canonical system, so greedy is optimal too.
        for target in 0..=99 {
            let optimum = min_coins_bottom_up(target, [1, 5, 10, 25]).unwrap();
            assert_eq!(min_coins_greedy(target, [1, 5, 10, 25]).unwrap(), optimum);
            assert_eq!(min_coins_memoized(target, [1, 5, 10, 25]).unwrap(), optimum);
            // The naive solver is exponential; keep its share of the sweep small.
            if target <= 30 {
                assert_eq!(min_coins_naive(target, [1, 5, 10, 25]).unwrap(), optimum);
            }
        }
    }

    #[test]
    fn test_greedy_divergence_preserved() {
        // Greedy lands on 4 + 1 + 1 while the optimum is 3 + 3.
        assert_eq!(min_coins_greedy(6, [1, 3, 4]).unwrap(), Some(3));
        assert_eq!(min_coins_bottom_up(6, [1, 3, 4]).unwrap(), Some(2));
    }

    #[test]
    fn test_validation_errors_from_every_strategy() {
        assert_eq!(min_coins_greedy(u64::MAX, [1]), Err(Error::TargetNotInteger));
        assert_eq!(min_coins_naive(u64::MAX, [1]), Err(Error::TargetNotInteger));
        assert_eq!(min_coins_memoized(5, [u64::MAX]), Err(Error::CoinNotInteger));
        assert_eq!(min_coins_bottom_up(5, [u64::MAX]), Err(Error::CoinNotInteger));
    }
}
