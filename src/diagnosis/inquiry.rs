use crate::components::count_up::format_thousands;

use super::form::FormState;
use super::recommendation::advice;
use super::result::DiagnosisResult;

const NOT_SELECTED: &str = "未選択";

/// Pre-filled contact message carrying the current diagnosis.
pub fn inquiry_message(form: &FormState, result: &DiagnosisResult) -> String {
    let types = if form.business_types.is_empty() {
        NOT_SELECTED.to_string()
    } else {
        form.business_types.iter().map(|t| t.label()).collect::<Vec<_>>().join(", ")
    };
    let method = form.current_method.map_or(NOT_SELECTED, |m| m.label());

    format!(
        "【Web診断結果からの相談】\n・隊員規模: {}名\n・種別: {}\n・現状: {}\n・削減額: ¥{}/月 ({}時間)\n・アドバイス: {}\n\n詳細なデモとお見積りを希望します。",
        form.guard_count,
        types,
        method,
        format_thousands(result.monthly_amount),
        format_thousands(result.monthly_hours),
        advice(form.issues),
    )
}

/// Text shown once the simulated report has been "generated".
pub fn report_summary(form: &FormState, result: &DiagnosisResult) -> String {
    format!(
        "【レポート生成完了】\n・想定削減額：月間 {} 円\n・想定削減時間：月間 {} 時間\n・対象規模：{} 名\n\n貴社の社名入り詳細資料をPDFとして出力します。",
        format_thousands(result.monthly_amount),
        format_thousands(result.monthly_hours),
        form.guard_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::form::{BusinessType, CurrentMethod, Issue};
    use crate::diagnosis::result::diagnose;

    fn sample_form() -> FormState {
        let mut form = FormState::new(50, 300);
        form.business_types.insert(BusinessType::Type2);
        form.business_types.insert(BusinessType::Type1);
        form.current_method = Some(CurrentMethod::Paper);
        form.issues = [Issue::Control, Issue::Payroll].into_iter().collect();
        form
    }

    #[test]
    fn inquiry_lists_every_input() {
        let form = sample_form();
        let result = diagnose(&form);
        let message = inquiry_message(&form, &result);

        assert!(message.starts_with("【Web診断結果からの相談】"));
        assert!(message.contains("・隊員規模: 50名"));
        assert!(message.contains("・種別: 1号 施設警備, 2号 交通誘導・雑踏"));
        assert!(message.contains("・現状: 紙・ホワイトボード"));
        // 3500 * 1.56 * 50
        assert!(message.contains("・削減額: ¥273,000/月 (104時間)"));
        assert!(message.contains("【採算管理のスピードアップ】"));
        assert!(message.ends_with("詳細なデモとお見積りを希望します。"));
    }

    #[test]
    fn inquiry_marks_missing_selections() {
        let mut form = FormState::new(0, 300);
        form.current_method = None;
        let message = inquiry_message(&form, &diagnose(&form));
        assert!(message.contains("・種別: 未選択"));
        assert!(message.contains("・現状: 未選択"));
        assert!(message.contains("¥0/月 (0時間)"));
    }

    #[test]
    fn report_summary_uses_formatted_figures() {
        let form = sample_form();
        let summary = report_summary(&form, &diagnose(&form));
        assert!(summary.contains("月間 273,000 円"));
        assert!(summary.contains("月間 104 時間"));
        assert!(summary.contains("対象規模：50 名"));
    }
}
