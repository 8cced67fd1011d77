//! Badges, plan copy, advisory text and product cards for a set of issues.
//!
//! Every table is an exhaustive `match` over the three issue flags, so each
//! of the eight subsets has its own entry.

use super::form::{Issue, IssueSet};

/// From this many guards on, the control-only and full bundles switch to
/// their large-scale copy.
pub const LARGE_SCALE_GUARDS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub class: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanDetail {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductCard {
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Recommendation {
    pub key: String,
    pub badges: Vec<Badge>,
    /// `None` before any issue is selected.
    pub plan: Option<PlanDetail>,
    pub advice: &'static str,
    pub products: Vec<ProductCard>,
}

impl Issue {
    pub fn badge(self) -> Badge {
        match self {
            Issue::Control => Badge { label: "管制効率化", class: "p-kansei" },
            Issue::Edu => Badge { label: "法令自動化", class: "p-edu" },
            Issue::Payroll => Badge { label: "事務工数削減", class: "p-keibi" },
        }
    }

    pub fn product(self) -> ProductCard {
        match self {
            Issue::Control => ProductCard { label: "管制Pro (スマホ連携)", icon: "fa-mobile-alt" },
            Issue::Edu => ProductCard { label: "教育Pro (法令自動化)", icon: "fa-book-reader" },
            Issue::Payroll => ProductCard { label: "警備Pro (基幹・事務)", icon: "fa-desktop" },
        }
    }
}

fn flags(issues: IssueSet) -> (bool, bool, bool) {
    (
        issues.contains(Issue::Control),
        issues.contains(Issue::Edu),
        issues.contains(Issue::Payroll),
    )
}

pub fn plan_detail(issues: IssueSet, guard_count: u32) -> Option<PlanDetail> {
    let large = guard_count >= LARGE_SCALE_GUARDS;
    let plan = match flags(issues) {
        (false, false, false) => return None,
        (true, true, true) if large => PlanDetail {
            title: "【大規模トータル経営DXプラン】",
            description: "全拠点の管制・教育・給与を完全統合。多層構造の組織でもリアルタイムな収支管理を可能にする、経営基盤の抜本改革プランです。",
        },
        (true, true, true) => PlanDetail {
            title: "【標準トータル効率化プラン】",
            description: "日報・請求・給与をシームレスに連動させ、少人数の事務体制でもミスなく業務を完結。現場主義のパッケージプランです。",
        },
        (true, false, false) if large => PlanDetail {
            title: "【大規模管制最適化プラン】",
            description: "数百名規模の隊員配置をAIがサポート。拠点を跨いだ応援要請や、大規模現場の上下番管理を効率化する管制特化プランです。",
        },
        (true, false, false) => PlanDetail {
            title: "【現場管制DXプラン】",
            description: "ホワイトボードや電話での管制から脱却。スマホ連携で配置ミスと連絡コストを最小化し、管制業務の属人化を防ぎます。",
        },
        (false, true, false) => PlanDetail {
            title: "【法令遵守・監査対策プラン】",
            description: "警備業法に特化した教育管理を実現。複雑な実施簿の自動生成とアラート機能で、監査担当者の心理的負担をゼロにします。",
        },
        (false, false, true) => PlanDetail {
            title: "【バックオフィス自動化プラン】",
            description: "警備業特有の複雑な手当計算や請求処理を自動化。月末に集中する事務残業を根絶し、正確な原価管理を可能にします。",
        },
        (true, true, false) => PlanDetail {
            title: "【現場管理・コンプラ強化プラン】",
            description: "管制の効率化と法的書類の整備を同時に実現。現場の稼働と教育状況を連動させ、法令違反のリスクをシステムで遮断します。",
        },
        (true, false, true) => PlanDetail {
            title: "【採算重視・収支改善プラン】",
            description: "配置データと給与・請求を直結。現場ごとの粗利を当日中に可視化し、収支の「どんぶり勘定」を解消する収益改善プランです。",
        },
        (false, true, true) => PlanDetail {
            title: "【事務労務・完全ガードプラン】",
            description: "教育実施簿と給与計算の二重入力を廃止。バックオフィス業務のミスを徹底的に排除し、事務部門の生産性を最大化します。",
        },
    };
    Some(plan)
}

pub fn advice(issues: IssueSet) -> &'static str {
    match flags(issues) {
        (true, true, true) => "【経営DXの完成形】 全ての基幹業務を統合することで、事務員1名分の工数を「売上を作る営業活動」に完全シフトできます。警備業に特化した全自動フローを構築可能です。",
        (true, true, false) => "【現場と法の守りを強化】 スマホ連携による欠員防止と、自動帳票による監査対策を両立。現場管理者の「心理的ストレス」を劇的に軽減し、定着率向上に寄与します。",
        (false, true, true) => "【バックオフィスの完全自動化】 複雑な手当計算と教育実施簿が連動。月末の残業を根絶し、人為的なミスによる信頼失墜や行政処分のリスクをゼロにします。",
        (true, false, true) => "【採算管理のスピードアップ】 上下番データが即座に給与・請求へ反映。現場ごとの「今日の利益」が即座に見えるようになり、不採算案件の早期見極めが可能になります。",
        (true, false, false) => "【管制の属人化を解消】 ベテランの頭の中にしかない配置ノウハウをシステムへ。スマホ連携により、朝晩の電話連絡に縛られない柔軟な管制体制を構築できます。",
        (false, true, false) => "【監査への不安を解消】 実施漏れのアラート機能で、常に「100点満点」の備付書類を維持。法改正にも自動対応し、経営の持続性を高めます。",
        (false, false, true) => "【1円単位の収支改善】 複雑な給与計算を自動化し、請求漏れを徹底排除。システム導入初月から事務コスト削減による利益向上を実感いただけます。",
        (false, false, false) => "現状の課題を選択すると、貴社の状況に合わせた改善アドバイスと削減シミュレーションが表示されます。",
    }
}

/// Splits advisory text into its bracketed headline and the body, so the
/// headline can be rendered in bold.
pub fn split_headline(advice: &str) -> (Option<&str>, &str) {
    if advice.starts_with('【') {
        if let Some(end) = advice.find('】') {
            let split = end + '】'.len_utf8();
            return (Some(&advice[..split]), advice[split..].trim_start());
        }
    }
    (None, advice)
}

pub fn recommend(issues: IssueSet, guard_count: u32) -> Recommendation {
    Recommendation {
        key: issues.key(),
        badges: issues.iter().map(Issue::badge).collect(),
        plan: plan_detail(issues, guard_count),
        advice: advice(issues),
        products: issues.iter().map(Issue::product).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_subset_has_its_own_entries() {
        let mut advices = HashSet::new();
        let mut titles = HashSet::new();
        for issues in IssueSet::all_subsets() {
            let rec = recommend(issues, 10);
            assert_eq!(rec.key, issues.key());
            assert!(!rec.advice.is_empty());
            advices.insert(rec.advice);
            match rec.plan {
                Some(plan) => {
                    assert!(!issues.is_empty());
                    assert!(plan.title.starts_with('【'));
                    assert!(!plan.description.is_empty());
                    titles.insert(plan.title);
                }
                None => assert!(issues.is_empty()),
            }
        }
        assert_eq!(advices.len(), 8);
        assert_eq!(titles.len(), 7);
    }

    #[test]
    fn large_scale_variants_switch_at_threshold() {
        let control = IssueSet::empty().with(Issue::Control);
        let full: IssueSet = Issue::ALL.into_iter().collect();

        assert_eq!(plan_detail(control, 99).map(|p| p.title), Some("【現場管制DXプラン】"));
        assert_eq!(plan_detail(control, 100).map(|p| p.title), Some("【大規模管制最適化プラン】"));
        assert_eq!(plan_detail(full, 99).map(|p| p.title), Some("【標準トータル効率化プラン】"));
        assert_eq!(plan_detail(full, 100).map(|p| p.title), Some("【大規模トータル経営DXプラン】"));
    }

    #[test]
    fn other_plans_ignore_headcount() {
        for issues in IssueSet::all_subsets() {
            let full_or_control = issues.len() == 3 || issues.key() == "control";
            if !full_or_control {
                assert_eq!(plan_detail(issues, 5), plan_detail(issues, 500));
            }
        }
    }

    #[test]
    fn badges_and_products_follow_key_order() {
        let issues: IssueSet = [Issue::Payroll, Issue::Control].into_iter().collect();
        let rec = recommend(issues, 20);
        let classes: Vec<_> = rec.badges.iter().map(|b| b.class).collect();
        assert_eq!(classes, vec!["p-kansei", "p-keibi"]);
        let icons: Vec<_> = rec.products.iter().map(|p| p.icon).collect();
        assert_eq!(icons, vec!["fa-mobile-alt", "fa-desktop"]);
    }

    #[test]
    fn empty_selection_shows_prompt() {
        let rec = recommend(IssueSet::empty(), 50);
        assert!(rec.badges.is_empty());
        assert!(rec.products.is_empty());
        assert!(rec.plan.is_none());
        assert!(rec.advice.starts_with("現状の課題を選択すると"));
    }

    #[test]
    fn headline_split() {
        let (headline, body) = split_headline(advice(IssueSet::empty().with(Issue::Edu)));
        assert_eq!(headline, Some("【監査への不安を解消】"));
        assert!(body.starts_with("実施漏れ"));

        let (headline, body) = split_headline(advice(IssueSet::empty()));
        assert_eq!(headline, None);
        assert!(body.starts_with("現状の課題"));
    }
}
