use super::burden::remaining_burden_percent;
use super::coefficients::Coefficients;
use super::estimator::estimate;
use super::form::FormState;
use super::visualization::equivalent_guards;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosisState {
    /// No issue selected yet; the prompt is shown instead of a plan.
    Idle,
    Computed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DiagnosisResult {
    pub coefficients: Coefficients,
    pub monthly_amount: u64,
    pub monthly_hours: u64,
    pub recommendation_key: String,
    pub remaining_burden_percent: f64,
    pub equivalent_guard_count: u64,
}

impl DiagnosisResult {
    pub fn state(&self) -> DiagnosisState {
        if self.recommendation_key.is_empty() {
            DiagnosisState::Idle
        } else {
            DiagnosisState::Computed
        }
    }
}

/// Runs the whole estimate from a form snapshot.
pub fn diagnose(form: &FormState) -> DiagnosisResult {
    let coefficients = Coefficients::resolve(&form.business_types, form.current_method);
    let savings = estimate(form.issues, form.guard_count, &coefficients);
    DiagnosisResult {
        coefficients,
        monthly_amount: savings.monthly_amount,
        monthly_hours: savings.monthly_hours,
        recommendation_key: form.issues.key(),
        remaining_burden_percent: remaining_burden_percent(form.current_method, form.issues, form.guard_count),
        equivalent_guard_count: equivalent_guards(savings.monthly_amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::form::{BusinessType, CurrentMethod, Issue};

    #[test]
    fn default_form_is_idle() {
        let result = diagnose(&FormState::default());
        assert_eq!(result.state(), DiagnosisState::Idle);
        assert_eq!(result.monthly_amount, 0);
        assert_eq!(result.monthly_hours, 0);
        assert_eq!(result.equivalent_guard_count, 0);
        assert_eq!(result.recommendation_key, "");
    }

    #[test]
    fn full_bundle_reference_figures() {
        let mut form = FormState::new(50, 300);
        form.current_method = Some(CurrentMethod::Excel);
        form.issues = Issue::ALL.into_iter().collect();

        let result = diagnose(&form);
        assert_eq!(result.state(), DiagnosisState::Computed);
        assert_eq!(result.coefficients.type_coeff, 1.0);
        assert_eq!(result.coefficients.method_coeff, 1.0);
        assert_eq!(result.monthly_amount, 220_000);
        assert_eq!(result.monthly_hours, 83);
        assert_eq!(result.equivalent_guard_count, 12);
        assert_eq!(result.recommendation_key, "control,edu,payroll");
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut form = FormState::new(73, 300);
        form.business_types.insert(BusinessType::Type1);
        form.business_types.insert(BusinessType::Type4);
        form.current_method = Some(CurrentMethod::Paper);
        form.issues = [Issue::Edu, Issue::Control].into_iter().collect();

        assert_eq!(diagnose(&form), diagnose(&form));
    }
}
