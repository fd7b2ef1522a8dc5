use log::trace;

use crate::error::{Error, Result};

/// Outcome of input normalization.
///
/// Either the answer is already known without running any strategy, or a
/// well-posed problem remains: a strictly positive target and a non-empty,
/// ascending, duplicate-free set of positive denominations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// The answer is decided by the input shape alone: `Some(0)` for a zero
    /// target, `None` for a negative target or an empty denomination set.
    Immediate(Option<usize>),
    /// A non-trivial instance every strategy solves the same way.
    Problem { target: u64, coins: Vec<u64> },
}

/// Validates and canonicalizes a `(target, coins)` pair.
///
/// The target and each coin must convert to a 64-bit signed integer;
/// anything out of range is a validation error. Coins that convert to zero
/// or a negative value are silently discarded, and duplicates collapse to a
/// single denomination. A zero target short-circuits to `Some(0)` before
/// the coins are even examined; a negative target is always impossible.
///
/// # Examples
///
/// ```
/// use coin_change::{normalize, Normalized};
///
/// let n = normalize(11, [5, 1, -3, 5, 7]).unwrap();
/// assert_eq!(
///     n,
///     Normalized::Problem { target: 11, coins: vec![1, 5, 7] }
/// );
///
/// // Zero target: answered without looking at the coins.
/// assert_eq!(normalize(0, [u64::MAX]).unwrap(), Normalized::Immediate(Some(0)));
///
/// // Nothing positive survives filtering, so 5 is unreachable.
/// assert_eq!(normalize(5, [0, -2]).unwrap(), Normalized::Immediate(None));
/// ```
pub fn normalize<T, C>(target: T, coins: C) -> Result<Normalized>
where
    T: TryInto<i64>,
    C: IntoIterator,
    C::Item: TryInto<i64>,
{
    let target: i64 = target.try_into().map_err(|_| Error::TargetNotInteger)?;

    // Zero is solvable with zero coins no matter what was passed as coins,
    // so the coin values are not validated in this case.
    if target == 0 {
        return Ok(Normalized::Immediate(Some(0)));
    }
    // A negative amount can never be formed from positive denominations.
    if target < 0 {
        return Ok(Normalized::Immediate(None));
    }

    let mut valid: Vec<u64> = Vec::new();
    for coin in coins {
        let coin: i64 = coin.try_into().map_err(|_| Error::CoinNotInteger)?;
        if coin > 0 {
            valid.push(coin as u64);
        } else {
            trace!("discarding non-positive coin value {}", coin);
        }
    }
    valid.sort_unstable();
    valid.dedup();

    if valid.is_empty() {
        return Ok(Normalized::Immediate(None));
    }

    Ok(Normalized::Problem {
        target: target as u64,
        coins: valid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_and_sort() {
        let n = normalize(10, [25, 5, 10, 5, 1, 25]).unwrap();
        assert_eq!(
            n,
            Normalized::Problem {
                target: 10,
                coins: vec![1, 5, 10, 25]
            }
        );
    }

    #[test]
    fn test_non_positive_coins_filtered() {
        let n = normalize(7, [3, -1, 4, 0]).unwrap();
        assert_eq!(
            n,
            Normalized::Problem {
                target: 7,
                coins: vec![3, 4]
            },
            "only strictly positive denominations should survive"
        );
    }

    #[test]
    fn test_zero_target_skips_coin_validation() {
        // u64::MAX does not fit in i64, but the zero check comes first.
        assert_eq!(
            normalize(0, [u64::MAX]).unwrap(),
            Normalized::Immediate(Some(0))
        );
    }

    #[test]
    fn test_negative_target_is_impossible() {
        assert_eq!(normalize(-3, [1, 2, 5]).unwrap(), Normalized::Immediate(None));
    }

    #[test]
    fn test_empty_after_filtering() {
        assert_eq!(normalize(5, [-2, 0]).unwrap(), Normalized::Immediate(None));
        let empty: [i64; 0] = [];
        assert_eq!(normalize(5, empty).unwrap(), Normalized::Immediate(None));
    }

    #[test]
    fn test_unrepresentable_target() {
        assert_eq!(normalize(u64::MAX, [1]), Err(Error::TargetNotInteger));
    }

    #[test]
    fn test_unrepresentable_coin() {
        assert_eq!(normalize(5, [u64::MAX]), Err(Error::CoinNotInteger));
    }
}
