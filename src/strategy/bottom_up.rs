use log::debug;
use num_integer::gcd;

use crate::error::Result;
use crate::normalize::{normalize, Normalized};

/// Computes the true minimum coin count for `target` with a bottom-up table.
///
/// Before any table work, the greatest common divisor of the denominations
/// is checked: a target not divisible by it can never be formed, so the
/// solver answers `Ok(None)` immediately. (Passing the check does not
/// guarantee feasibility; failing it guarantees infeasibility.) Otherwise a
/// table of `target + 1` entries is filled from amount 0 upward, so time is
/// O(target x denominations) and space is O(target), iterative throughout.
///
/// # Examples
///
/// ```
/// use coin_change::min_coins_bottom_up;
///
/// assert_eq!(min_coins_bottom_up(6, [1, 3, 4]).unwrap(), Some(2)); // 3 + 3
///
/// // gcd(2, 4) = 2 does not divide 7: rejected without building the table.
/// assert_eq!(min_coins_bottom_up(7, [2, 4]).unwrap(), None);
/// ```
pub fn min_coins_bottom_up<T, C>(target: T, coins: C) -> Result<Option<usize>>
where
    T: TryInto<i64>,
    C: IntoIterator,
    C::Item: TryInto<i64>,
{
    match normalize(target, coins)? {
        Normalized::Immediate(answer) => Ok(answer),
        Normalized::Problem { target, coins } => Ok(fill_table(target, &coins)),
    }
}

fn fill_table(target: u64, coins: &[u64]) -> Option<usize> {
    let divisor = coins.iter().fold(0u64, |acc, &coin| gcd(acc, coin));
    if target % divisor != 0 {
        debug!(
            "target {} not divisible by gcd {} of denominations, infeasible",
            target, divisor
        );
        return None;
    }

    let target = target as usize;
    // Sentinel one past the worst real answer: even all-1 coins need only
    // `target` of them, so `target + 1` is never produced by the recurrence.
    let unreachable = target + 1;
    let mut table = vec![unreachable; target + 1];
    table[0] = 0;

    // Each entry depends only on strictly smaller amounts, so the result is
    // the same for any denomination order.
    for &coin in coins {
        let coin = coin as usize;
        for amount in coin..=target {
            if table[amount - coin] + 1 < table[amount] {
                table[amount] = table[amount - coin] + 1;
            }
        }
    }

    (table[target] != unreachable).then_some(table[target])
}
