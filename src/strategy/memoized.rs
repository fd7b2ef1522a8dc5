use std::collections::HashMap;

use crate::error::Result;
use crate::normalize::{normalize, Normalized};

/// Computes the true minimum coin count for `target` with top-down
/// memoization.
///
/// Same recurrence as [`min_coins_naive`], but each distinct remaining
/// amount is solved at most once: results, including "unreachable", are
/// cached in a map created for this call and discarded when it returns.
/// Time is O(target x denominations); there is no caching across calls, so
/// concurrent callers never share state. Recursion depth still grows with
/// `target / smallest_coin`, so very large targets can overflow the stack.
///
/// [`min_coins_naive`]: crate::strategy::naive::min_coins_naive
///
/// # Examples
///
/// ```
/// use coin_change::min_coins_memoized;
///
/// assert_eq!(min_coins_memoized(11, [1, 5, 7]).unwrap(), Some(3)); // 5 + 5 + 1
/// assert_eq!(min_coins_memoized(7, [2, 4]).unwrap(), None);
/// ```
pub fn min_coins_memoized<T, C>(target: T, coins: C) -> Result<Option<usize>>
where
    T: TryInto<i64>,
    C: IntoIterator,
    C::Item: TryInto<i64>,
{
    match normalize(target, coins)? {
        Normalized::Immediate(answer) => Ok(answer),
        Normalized::Problem { target, coins } => {
            // Base case seeded up front: forming 0 costs 0 coins.
            let mut memo: HashMap<u64, Option<usize>> = HashMap::from([(0, Some(0))]);
            Ok(search(target, &coins, &mut memo))
        }
    }
}

/// Each amount is computed once and its entry never overwritten; `None`
/// entries record unreachable amounts so they are not re-explored.
fn search(value: u64, coins: &[u64], memo: &mut HashMap<u64, Option<usize>>) -> Option<usize> {
    if let Some(&cached) = memo.get(&value) {
        return cached;
    }

    let mut best: Option<usize> = None;
    for &coin in coins {
        if coin > value {
            continue;
        }
        if let Some(sub) = search(value - coin, coins, memo) {
            let candidate = sub + 1;
            if best.map_or(true, |b| candidate < b) {
                best = Some(candidate);
            }
        }
    }

    memo.insert(value, best);
    best
}
