use std::collections::BTreeSet;

use super::form::{BusinessType, CurrentMethod};

impl BusinessType {
    /// Expected automation benefit for this category of work.
    pub fn coefficient(self) -> f64 {
        match self {
            BusinessType::Type1 => 1.2,
            BusinessType::Type2 => 1.3,
            BusinessType::Type3 => 1.05,
            BusinessType::Type4 => 1.1,
            BusinessType::Type5 => 1.15,
        }
    }
}

impl CurrentMethod {
    /// Improvement headroom left by the current tooling.
    pub fn coefficient(self) -> f64 {
        match self {
            CurrentMethod::Paper => 1.2,
            CurrentMethod::Excel => 1.0,
            CurrentMethod::System => 0.8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coefficients {
    pub type_coeff: f64,
    pub method_coeff: f64,
}

impl Coefficients {
    /// Highest coefficient among the selected types wins; nothing selected
    /// degrades to the neutral 1.0 on either axis.
    pub fn resolve(business_types: &BTreeSet<BusinessType>, method: Option<CurrentMethod>) -> Self {
        let type_coeff = business_types
            .iter()
            .map(|t| t.coefficient())
            .fold(1.0_f64, f64::max);
        let method_coeff = method.map_or(1.0, CurrentMethod::coefficient);
        Self { type_coeff, method_coeff }
    }

    pub fn total(&self) -> f64 {
        self.type_coeff * self.method_coeff
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self { type_coeff: 1.0, method_coeff: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_when_nothing_selected() {
        let coeffs = Coefficients::resolve(&BTreeSet::new(), None);
        assert_eq!(coeffs, Coefficients::default());
        assert_eq!(coeffs.total(), 1.0);
    }

    #[test]
    fn type_coefficient_is_max_not_sum() {
        let types: BTreeSet<_> = [BusinessType::Type3, BusinessType::Type2, BusinessType::Type5].into_iter().collect();
        let coeffs = Coefficients::resolve(&types, Some(CurrentMethod::Excel));
        assert_eq!(coeffs.type_coeff, 1.3);
        assert_eq!(coeffs.method_coeff, 1.0);
    }

    #[test]
    fn method_lookup() {
        let none = BTreeSet::new();
        assert_eq!(Coefficients::resolve(&none, Some(CurrentMethod::Paper)).method_coeff, 1.2);
        assert_eq!(Coefficients::resolve(&none, Some(CurrentMethod::Excel)).method_coeff, 1.0);
        assert_eq!(Coefficients::resolve(&none, Some(CurrentMethod::System)).method_coeff, 0.8);
    }

    #[test]
    fn traffic_guarding_on_paper() {
        let types: BTreeSet<_> = [BusinessType::Type2].into_iter().collect();
        let coeffs = Coefficients::resolve(&types, Some(CurrentMethod::Paper));
        assert_eq!(coeffs.total(), 1.3 * 1.2);
        assert!((coeffs.total() - 1.56).abs() < 1e-12);
    }
}
