use super::coefficients::Coefficients;
use super::form::{Issue, IssueSet};

/// Per-guard monthly savings attributed to one issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IssueMetric {
    pub monthly_cost: u32,
    pub monthly_minutes: u32,
}

impl Issue {
    pub fn metric(self) -> IssueMetric {
        match self {
            Issue::Control => IssueMetric { monthly_cost: 2000, monthly_minutes: 45 },
            Issue::Edu => IssueMetric { monthly_cost: 900, monthly_minutes: 20 },
            Issue::Payroll => IssueMetric { monthly_cost: 1500, monthly_minutes: 35 },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Savings {
    pub monthly_amount: u64,
    pub monthly_hours: u64,
}

pub fn estimate(issues: IssueSet, guard_count: u32, coefficients: &Coefficients) -> Savings {
    let (total_cost, total_minutes) = issues
        .iter()
        .map(Issue::metric)
        .fold((0u32, 0u32), |(cost, minutes), m| (cost + m.monthly_cost, minutes + m.monthly_minutes));

    let total_coeff = coefficients.total();
    let guards = guard_count as f64;

    // Left-to-right f64 evaluation, then truncation; the published figures
    // depend on this exact order.
    let amount = (total_cost as f64 * total_coeff * guards).floor();
    let hours = (total_minutes as f64 * total_coeff * guards / 60.0).floor();

    Savings {
        monthly_amount: amount.max(0.0) as u64,
        monthly_hours: hours.max(0.0) as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::form::{BusinessType, CurrentMethod};
    use std::collections::BTreeSet;

    fn coeffs(types: &[BusinessType], method: Option<CurrentMethod>) -> Coefficients {
        Coefficients::resolve(&types.iter().copied().collect::<BTreeSet<_>>(), method)
    }

    fn all_issues() -> IssueSet {
        Issue::ALL.into_iter().collect()
    }

    #[test]
    fn empty_selection_saves_nothing() {
        let savings = estimate(IssueSet::empty(), 200, &coeffs(&[BusinessType::Type2], Some(CurrentMethod::Paper)));
        assert_eq!(savings, Savings::default());
    }

    #[test]
    fn fifty_guards_full_bundle_on_excel() {
        let savings = estimate(all_issues(), 50, &coeffs(&[], Some(CurrentMethod::Excel)));
        assert_eq!(savings.monthly_amount, 220_000);
        assert_eq!(savings.monthly_hours, 83);
    }

    #[test]
    fn ten_traffic_guards_on_paper() {
        let issues = IssueSet::empty().with(Issue::Control);
        let savings = estimate(issues, 10, &coeffs(&[BusinessType::Type2], Some(CurrentMethod::Paper)));
        assert_eq!(savings.monthly_amount, 31_200);
        assert_eq!(savings.monthly_hours, 11);
    }

    #[test]
    fn truncates_float_products() {
        // 1.15 * 0.8 is slightly below 0.92 in f64.
        let issues = IssueSet::empty().with(Issue::Edu);
        let savings = estimate(issues, 30, &coeffs(&[BusinessType::Type5], Some(CurrentMethod::System)));
        assert_eq!(savings.monthly_amount, 24_839);
        assert_eq!(savings.monthly_hours, 9);
    }

    #[test]
    fn zero_guards_saves_nothing() {
        let savings = estimate(all_issues(), 0, &coeffs(&[BusinessType::Type1], None));
        assert_eq!(savings, Savings::default());
    }

    #[test]
    fn monotonic_in_guard_count() {
        let c = coeffs(&[BusinessType::Type4], Some(CurrentMethod::Paper));
        for issues in IssueSet::all_subsets() {
            let mut previous = Savings::default();
            for guards in 0..=300 {
                let current = estimate(issues, guards, &c);
                assert!(current.monthly_amount >= previous.monthly_amount);
                assert!(current.monthly_hours >= previous.monthly_hours);
                previous = current;
            }
        }
    }

    #[test]
    fn monotonic_in_issue_inclusion() {
        let c = coeffs(&[BusinessType::Type1, BusinessType::Type3], Some(CurrentMethod::System));
        for guards in [1, 7, 50, 99, 100, 300] {
            for smaller in IssueSet::all_subsets() {
                for larger in IssueSet::all_subsets().filter(|l| smaller.iter().all(|i| l.contains(i))) {
                    let a = estimate(smaller, guards, &c);
                    let b = estimate(larger, guards, &c);
                    assert!(b.monthly_amount >= a.monthly_amount, "{} vs {}", smaller.key(), larger.key());
                    assert!(b.monthly_hours >= a.monthly_hours);
                }
            }
        }
    }
}
