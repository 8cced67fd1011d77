use std::collections::BTreeSet;
use std::rc::Rc;

use yew::Reducible;

/// Regulatory category of the client's security work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BusinessType {
    Type1,
    Type2,
    Type3,
    Type4,
    Type5,
}

impl BusinessType {
    pub const ALL: [BusinessType; 5] = [
        BusinessType::Type1,
        BusinessType::Type2,
        BusinessType::Type3,
        BusinessType::Type4,
        BusinessType::Type5,
    ];

    pub fn value(self) -> &'static str {
        match self {
            BusinessType::Type1 => "type1",
            BusinessType::Type2 => "type2",
            BusinessType::Type3 => "type3",
            BusinessType::Type4 => "type4",
            BusinessType::Type5 => "type5",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BusinessType::Type1 => "1号 施設警備",
            BusinessType::Type2 => "2号 交通誘導・雑踏",
            BusinessType::Type3 => "3号 輸送警備",
            BusinessType::Type4 => "4号 身辺警備",
            BusinessType::Type5 => "機械警備",
        }
    }
}

/// Administrative tooling the client uses today.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurrentMethod {
    Paper,
    Excel,
    System,
}

impl CurrentMethod {
    pub const ALL: [CurrentMethod; 3] = [CurrentMethod::Paper, CurrentMethod::Excel, CurrentMethod::System];

    pub fn value(self) -> &'static str {
        match self {
            CurrentMethod::Paper => "paper",
            CurrentMethod::Excel => "excel",
            CurrentMethod::System => "system",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CurrentMethod::Paper => "紙・ホワイトボード",
            CurrentMethod::Excel => "Excel・スプレッドシート",
            CurrentMethod::System => "他社システム",
        }
    }
}

/// Operational pain point. Declaration order matches the lexicographic
/// order of `key()`, which `IssueSet` relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Issue {
    Control,
    Edu,
    Payroll,
}

impl Issue {
    pub const ALL: [Issue; 3] = [Issue::Control, Issue::Edu, Issue::Payroll];

    pub fn key(self) -> &'static str {
        match self {
            Issue::Control => "control",
            Issue::Edu => "edu",
            Issue::Payroll => "payroll",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Issue::Control => "管制・配置連絡に追われている",
            Issue::Edu => "教育実施簿・法定書類が負担",
            Issue::Payroll => "給与・請求計算に時間がかかる",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of selected issues as a bitset. Iteration is always in key order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IssueSet(u8);

impl IssueSet {
    pub fn empty() -> Self {
        IssueSet(0)
    }

    /// Every subset of the three issues, empty set first.
    pub fn all_subsets() -> impl Iterator<Item = IssueSet> {
        (0u8..8).map(IssueSet)
    }

    pub fn with(mut self, issue: Issue) -> Self {
        self.insert(issue);
        self
    }

    pub fn insert(&mut self, issue: Issue) {
        self.0 |= issue.bit();
    }

    pub fn remove(&mut self, issue: Issue) {
        self.0 &= !issue.bit();
    }

    pub fn contains(&self, issue: Issue) -> bool {
        self.0 & issue.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Issue> + '_ {
        Issue::ALL.into_iter().filter(move |issue| self.contains(*issue))
    }

    /// Canonical lookup key: sorted issue keys joined by commas.
    pub fn key(&self) -> String {
        self.iter().map(Issue::key).collect::<Vec<_>>().join(",")
    }
}

impl FromIterator<Issue> for IssueSet {
    fn from_iter<T: IntoIterator<Item = Issue>>(iter: T) -> Self {
        iter.into_iter().fold(IssueSet::empty(), IssueSet::with)
    }
}

/// Parses the raw guard-count field. Anything that is not a finite,
/// non-negative number reads as zero; the result is clamped to `max`.
pub fn parse_guard_count(raw: &str, max: u32) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value.trunc().min(max as f64) as u32,
        _ => 0,
    }
}

/// Snapshot of every diagnosis input.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub guard_count: u32,
    pub guard_count_max: u32,
    pub business_types: BTreeSet<BusinessType>,
    pub current_method: Option<CurrentMethod>,
    pub issues: IssueSet,
}

impl FormState {
    pub fn new(guard_count: u32, guard_count_max: u32) -> Self {
        Self {
            guard_count: guard_count.min(guard_count_max),
            guard_count_max,
            business_types: BTreeSet::new(),
            current_method: Some(CurrentMethod::Excel),
            issues: IssueSet::empty(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(50, 300)
    }
}

pub enum FormAction {
    GuardCountInput(String),
    BusinessType(BusinessType, bool),
    Method(CurrentMethod),
    Issue(Issue, bool),
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::GuardCountInput(raw) => {
                next.guard_count = parse_guard_count(&raw, next.guard_count_max);
            }
            FormAction::BusinessType(business_type, true) => {
                next.business_types.insert(business_type);
            }
            FormAction::BusinessType(business_type, false) => {
                next.business_types.remove(&business_type);
            }
            FormAction::Method(method) => next.current_method = Some(method),
            FormAction::Issue(issue, true) => next.issues.insert(issue),
            FormAction::Issue(issue, false) => next.issues.remove(issue),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_check_order() {
        let a: IssueSet = [Issue::Payroll, Issue::Control, Issue::Edu].into_iter().collect();
        let b: IssueSet = [Issue::Edu, Issue::Payroll, Issue::Control].into_iter().collect();
        assert_eq!(a.key(), "control,edu,payroll");
        assert_eq!(a.key(), b.key());

        let c: IssueSet = [Issue::Payroll, Issue::Edu].into_iter().collect();
        assert_eq!(c.key(), "edu,payroll");
        assert_eq!(IssueSet::empty().key(), "");
    }

    #[test]
    fn all_subsets_are_distinct() {
        let keys: BTreeSet<String> = IssueSet::all_subsets().map(|s| s.key()).collect();
        assert_eq!(keys.len(), 8);
        assert!(keys.contains(""));
        assert!(keys.contains("control,payroll"));
    }

    #[test]
    fn insert_remove_contains() {
        let mut set = IssueSet::empty();
        set.insert(Issue::Edu);
        set.insert(Issue::Edu);
        assert_eq!(set.len(), 1);
        assert!(set.contains(Issue::Edu));
        assert!(!set.contains(Issue::Control));
        set.remove(Issue::Edu);
        assert!(set.is_empty());
    }

    #[test]
    fn guard_count_parsing_falls_back_to_zero() {
        assert_eq!(parse_guard_count("50", 300), 50);
        assert_eq!(parse_guard_count(" 12 ", 300), 12);
        assert_eq!(parse_guard_count("12.9", 300), 12);
        assert_eq!(parse_guard_count("", 300), 0);
        assert_eq!(parse_guard_count("abc", 300), 0);
        assert_eq!(parse_guard_count("-5", 300), 0);
        assert_eq!(parse_guard_count("NaN", 300), 0);
        assert_eq!(parse_guard_count("inf", 300), 0);
        assert_eq!(parse_guard_count("1000", 300), 300);
    }

    #[test]
    fn reducer_applies_actions() {
        let state = Rc::new(FormState::default());
        let state = state.reduce(FormAction::GuardCountInput("120".into()));
        let state = state.reduce(FormAction::BusinessType(BusinessType::Type2, true));
        let state = state.reduce(FormAction::Method(CurrentMethod::Paper));
        let state = state.reduce(FormAction::Issue(Issue::Control, true));
        let state = state.reduce(FormAction::Issue(Issue::Payroll, true));
        let state = state.reduce(FormAction::Issue(Issue::Payroll, false));

        assert_eq!(state.guard_count, 120);
        assert!(state.business_types.contains(&BusinessType::Type2));
        assert_eq!(state.current_method, Some(CurrentMethod::Paper));
        assert_eq!(state.issues.key(), "control");

        let state = state.reduce(FormAction::BusinessType(BusinessType::Type2, false));
        assert!(state.business_types.is_empty());
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let state = Rc::new(FormState::default());
        let next = state.clone().reduce(FormAction::Method(CurrentMethod::Excel));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
