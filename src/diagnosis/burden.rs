use super::form::{CurrentMethod, IssueSet};

const FLOOR_PERCENT: f64 = 10.0;
const PER_ISSUE_REDUCTION: f64 = 18.0;
const FLUCTUATION_STEP: f64 = 0.3;

fn base_percent(method: Option<CurrentMethod>) -> f64 {
    match method {
        Some(CurrentMethod::Paper) => 92.0,
        Some(CurrentMethod::Excel) | None => 80.0,
        Some(CurrentMethod::System) => 65.0,
    }
}

/// Share of manual work left after adoption, for the gauge under the
/// result. The headcount term nudges the bar as the slider moves.
pub fn remaining_burden_percent(method: Option<CurrentMethod>, issues: IssueSet, guard_count: u32) -> f64 {
    if issues.is_empty() {
        return 100.0;
    }
    let fluctuation = (guard_count % 10) as f64 * FLUCTUATION_STEP;
    let remaining = base_percent(method) - PER_ISSUE_REDUCTION * issues.len() as f64 - fluctuation;
    remaining.clamp(FLOOR_PERCENT, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::form::Issue;

    #[test]
    fn idle_keeps_everything_manual() {
        assert_eq!(remaining_burden_percent(Some(CurrentMethod::Paper), IssueSet::empty(), 37), 100.0);
    }

    #[test]
    fn more_issues_leave_less_work() {
        let one = IssueSet::empty().with(Issue::Control);
        let all: IssueSet = Issue::ALL.into_iter().collect();
        let a = remaining_burden_percent(Some(CurrentMethod::Excel), one, 50);
        let b = remaining_burden_percent(Some(CurrentMethod::Excel), all, 50);
        assert_eq!(a, 62.0);
        assert_eq!(b, 26.0);
    }

    #[test]
    fn stays_within_bounds() {
        let all: IssueSet = Issue::ALL.into_iter().collect();
        for guards in 0..300 {
            for method in [None, Some(CurrentMethod::Paper), Some(CurrentMethod::System)] {
                let value = remaining_burden_percent(method, all, guards);
                assert!((FLOOR_PERCENT..=100.0).contains(&value));
            }
        }
    }
}
