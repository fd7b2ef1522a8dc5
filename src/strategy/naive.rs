use crate::error::Result;
use crate::normalize::{normalize, Normalized};

/// Computes the true minimum coin count for `target` by exhaustive recursion.
///
/// Every combination of denominations is explored with no caching, so the
/// running time is exponential in the target and the recursion depth grows
/// with `target / smallest_coin`. Large targets are impractically slow and
/// can exhaust the call stack; that is inherent to the strategy. Prefer
/// [`min_coins_memoized`] or [`min_coins_bottom_up`] for anything beyond
/// small demonstration inputs.
///
/// [`min_coins_memoized`]: crate::strategy::memoized::min_coins_memoized
/// [`min_coins_bottom_up`]: crate::strategy::bottom_up::min_coins_bottom_up
///
/// # Examples
///
/// ```
/// use coin_change::min_coins_naive;
///
/// assert_eq!(min_coins_naive(6, [1, 3, 4]).unwrap(), Some(2)); // 3 + 3
/// assert_eq!(min_coins_naive(7, [2, 4]).unwrap(), None);
/// ```
pub fn min_coins_naive<T, C>(target: T, coins: C) -> Result<Option<usize>>
where
    T: TryInto<i64>,
    C: IntoIterator,
    C::Item: TryInto<i64>,
{
    match normalize(target, coins)? {
        Normalized::Immediate(answer) => Ok(answer),
        Normalized::Problem { target, coins } => Ok(search(target, &coins)),
    }
}

/// The recurrence: solve(0) = 0, solve(v) = 1 + min over d <= v of
/// solve(v - d). Branches that would go negative are skipped; `None` stands
/// for an unreachable amount.
fn search(value: u64, coins: &[u64]) -> Option<usize> {
    if value == 0 {
        return Some(0);
    }

    let mut best: Option<usize> = None;
    for &coin in coins {
        if coin > value {
            continue;
        }
        if let Some(sub) = search(value - coin, coins) {
            let candidate = sub + 1;
            if best.map_or(true, |b| candidate < b) {
                best = Some(candidate);
            }
        }
    }
    best
}
