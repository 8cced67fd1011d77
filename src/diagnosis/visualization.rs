/// Reference daily wage of a traffic-control guard, in yen.
pub const GUARD_DAILY_WAGE_YEN: u64 = 17_931;

/// How many guard-days the monthly saving would pay for.
pub fn equivalent_guards(monthly_amount: u64) -> u64 {
    monthly_amount / GUARD_DAILY_WAGE_YEN
}

/// Number of icons to draw. `cap` keeps large results from overflowing the
/// layout; `None` draws all of them.
pub fn icon_count(equivalent: u64, cap: Option<usize>) -> usize {
    let count = usize::try_from(equivalent).unwrap_or(usize::MAX);
    match cap {
        Some(cap) => count.min(cap),
        None => count,
    }
}
