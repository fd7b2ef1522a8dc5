use crate::error::Result;
use crate::normalize::{normalize, Normalized};

/// Counts coins for `target` by always taking the largest denomination that
/// still fits.
///
/// This heuristic is NOT guaranteed optimal: it returns whatever count the
/// largest-first rule achieves, which may be worse than the true minimum, and
/// it may report `Ok(None)` even when some non-greedy combination reaches the
/// target exactly. That divergence is the documented behavior of the
/// strategy, not a defect; use [`min_coins_memoized`] or
/// [`min_coins_bottom_up`] for the true optimum.
///
/// [`min_coins_memoized`]: crate::strategy::memoized::min_coins_memoized
/// [`min_coins_bottom_up`]: crate::strategy::bottom_up::min_coins_bottom_up
///
/// # Examples
///
/// ```
/// use coin_change::min_coins_greedy;
///
/// // Canonical coin systems are greedy-friendly: 41 = 25 + 10 + 5 + 1
/// assert_eq!(min_coins_greedy(41, [1, 5, 10, 25]).unwrap(), Some(4));
///
/// // Greedy takes 4 first and ends with 4 + 1 + 1; the optimum is 3 + 3.
/// assert_eq!(min_coins_greedy(6, [1, 3, 4]).unwrap(), Some(3));
///
/// // Greedy takes 4 then gets stuck on 3, even though 2 + 2 + 2 works.
/// assert_eq!(min_coins_greedy(7, [2, 4]).unwrap(), None);
/// ```
pub fn min_coins_greedy<T, C>(target: T, coins: C) -> Result<Option<usize>>
where
    T: TryInto<i64>,
    C: IntoIterator,
    C::Item: TryInto<i64>,
{
    match normalize(target, coins)? {
        Normalized::Immediate(answer) => Ok(answer),
        Normalized::Problem { target, coins } => Ok(reduce(target, &coins)),
    }
}

/// Single descending pass; `coins` is ascending, unique, all positive.
fn reduce(target: u64, coins: &[u64]) -> Option<usize> {
    let mut remaining = target;
    let mut total = 0usize;

    for &coin in coins.iter().rev() {
        if remaining == 0 {
            break;
        }
        if coin <= remaining {
            total += (remaining / coin) as usize;
            remaining %= coin;
        }
    }

    (remaining == 0).then_some(total)
}
