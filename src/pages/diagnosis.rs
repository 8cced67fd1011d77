use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::components::collapsible::Collapsible;
use crate::components::count_up::{format_thousands, AnimatedNumber};
use crate::config::SiteConfig;
use crate::diagnosis::form::{BusinessType, CurrentMethod, FormAction, FormState, Issue};
use crate::diagnosis::inquiry::{inquiry_message, report_summary};
use crate::diagnosis::recommendation::{recommend, split_headline, Recommendation};
use crate::diagnosis::result::{diagnose, DiagnosisResult, DiagnosisState};
use crate::diagnosis::visualization::{icon_count, GUARD_DAILY_WAGE_YEN};

#[derive(Properties, PartialEq)]
pub struct DiagnosisProps {
    /// Receives the pre-filled contact message.
    pub on_inquire: Callback<String>,
}

#[function_component(Diagnosis)]
pub fn diagnosis(props: &DiagnosisProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let settings = config.diagnosis.clone();
    let form = {
        let default_guards = settings.default_guard_count;
        let max_guards = settings.guard_count_max;
        use_reducer(move || FormState::new(default_guards, max_guards))
    };

    // Everything below is recomputed from the current snapshot on each render.
    let result = diagnose(&form);
    let recommendation = recommend(form.issues, form.guard_count);

    {
        let key = result.recommendation_key.clone();
        let amount = result.monthly_amount;
        let hours = result.monthly_hours;
        use_effect_with_deps(
            move |_| {
                debug!("Diagnosis recomputed: issues=[{}] amount={} hours={}", key, amount, hours);
                || ()
            },
            (*form).clone(),
        );
    }

    let on_guards = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::GuardCountInput(input.value()));
        })
    };

    let on_type = |business_type: BusinessType| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::BusinessType(business_type, input.checked()));
        })
    };

    let on_method = |method: CurrentMethod| {
        let form = form.clone();
        Callback::from(move |_: Event| form.dispatch(FormAction::Method(method)))
    };

    let on_issue = |issue: Issue| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Issue(issue, input.checked()));
        })
    };

    let on_inquire = {
        let on_inquire = props.on_inquire.clone();
        let message = inquiry_message(&form, &result);
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Diagnosis inquiry started");
            on_inquire.emit(message.clone());
        })
    };

    html! {
        <section id="diagnosis" class="diagnosis-section">
            <h2 class="section-title">{"業務改善シミュレーション"}</h2>
            <p class="section-lead">{"貴社の状況を選ぶだけで、導入後の削減額と削減時間を試算します。"}</p>

            <div class="diagnosis-grid">
                <div class="diagnosis-form">
                    <div class="form-group">
                        <label for="diag-guards">
                            {"隊員数: "}<span id="diag-val-guards">{ form.guard_count }</span>{" 名"}
                        </label>
                        <input
                            type="range"
                            id="diag-guards"
                            min="1"
                            max={settings.guard_count_max.to_string()}
                            value={form.guard_count.to_string()}
                            oninput={on_guards}
                        />
                    </div>

                    <div class="form-group">
                        <p class="form-label">{"主な業務種別（複数選択可）"}</p>
                        { for BusinessType::ALL.iter().map(|&t| html! {
                            <label class="check-item">
                                <input
                                    type="checkbox"
                                    name="biz-type"
                                    value={t.value()}
                                    checked={form.business_types.contains(&t)}
                                    onchange={on_type(t)}
                                />
                                <span>{ t.label() }</span>
                            </label>
                        }) }
                    </div>

                    <div class="form-group">
                        <p class="form-label">{"現在の管理方法"}</p>
                        { for CurrentMethod::ALL.iter().map(|&m| html! {
                            <label class="radio-item">
                                <input
                                    type="radio"
                                    name="current-method"
                                    value={m.value()}
                                    checked={form.current_method == Some(m)}
                                    onchange={on_method(m)}
                                />
                                <span>{ m.label() }</span>
                            </label>
                        }) }
                    </div>

                    <div class="form-group">
                        <p class="form-label">{"現在の課題（複数選択可）"}</p>
                        { for Issue::ALL.iter().map(|&i| html! {
                            <label class="check-item">
                                <input
                                    type="checkbox"
                                    name="issue"
                                    value={i.key()}
                                    checked={form.issues.contains(i)}
                                    onchange={on_issue(i)}
                                />
                                <span>{ i.label() }</span>
                            </label>
                        }) }
                    </div>
                </div>

                <div class={classes!("diagnosis-result", (result.state() == DiagnosisState::Idle).then_some("idle"))}>
                    <div class="result-figures">
                        <div class="result-figure">
                            <span class="figure-label">{"月間削減額"}</span>
                            <span class="figure-value">
                                {"¥"}<AnimatedNumber id="res-amount" value={result.monthly_amount} duration_ms={settings.animation_ms} />
                            </span>
                        </div>
                        <div class="result-figure">
                            <span class="figure-label">{"月間削減時間"}</span>
                            <span class="figure-value">
                                <AnimatedNumber id="res-hours" value={result.monthly_hours} duration_ms={settings.animation_ms} />{" 時間"}
                            </span>
                        </div>
                    </div>

                    <p class="result-coeff">
                        { format!("適用係数 ×{:.2}", result.coefficients.total()) }
                    </p>

                    { render_recommendation(&recommendation) }
                    { render_people(&result, settings.icon_cap) }
                    { render_burden(&result) }

                    <div class="result-actions">
                        <ReportButton summary={report_summary(&form, &result)} />
                        <button class="btn btn-accent" onclick={on_inquire}>{"この結果で相談する"}</button>
                    </div>
                </div>
            </div>

            <Collapsible body_id="calc-details" title="試算根拠を見る">
                { render_calc_details() }
            </Collapsible>
        </section>
    }
}

fn render_recommendation(recommendation: &Recommendation) -> Html {
    let (headline, body) = split_headline(recommendation.advice);
    html! {
        <div class="result-recommendation" data-plan={recommendation.key.clone()}>
            <div id="res-badges">
                { for recommendation.badges.iter().map(|b| html! {
                    <span class={classes!("p-badge", b.class)}>{ b.label }</span>
                }) }
            </div>
            <div id="res-desc">
                { match recommendation.plan {
                    Some(plan) => html! {
                        <>
                            <div class="plan-title">{ plan.title }</div>
                            <div class="plan-desc">{ plan.description }</div>
                        </>
                    },
                    None => html! {},
                } }
            </div>
            <div id="res-specific-solutions">
                { for recommendation.products.iter().map(|p| html! {
                    <div class="solution-card">
                        <i class={classes!("fas", p.icon)}></i>{" "}{ p.label }
                    </div>
                }) }
            </div>
            <div id="diagnosis-advice-box">
                <p>
                    <i class="fas fa-lightbulb"></i>
                    { match headline {
                        Some(h) => html! { <strong>{ h }</strong> },
                        None => html! {},
                    } }
                    {" "}{ body }
                </p>
            </div>
        </div>
    }
}

fn render_people(result: &DiagnosisResult, cap: Option<usize>) -> Html {
    let icons = icon_count(result.equivalent_guard_count, cap);
    html! {
        <div class="people-visual">
            <p>{"警備員 "}<span id="pv-count">{ result.equivalent_guard_count }</span>{" 人日分の人件費に相当"}</p>
            <div id="pv-icons">
                { for (0..icons).map(|_| html! { <i class="fas fa-user pv-icon"></i> }) }
            </div>
        </div>
    }
}

fn render_burden(result: &DiagnosisResult) -> Html {
    let remaining = result.remaining_burden_percent;
    html! {
        <div class="burden-gauge">
            <span class="burden-label">{ format!("導入後に残る手作業: 約{:.0}%", remaining) }</span>
            <div class="burden-bar">
                <div class="burden-fill" style={format!("width: {:.1}%;", remaining)}></div>
            </div>
        </div>
    }
}

fn render_calc_details() -> Html {
    html! {
        <div class="calc-details">
            <table class="calc-table">
                <thead>
                    <tr><th>{"課題"}</th><th>{"隊員1名あたり削減額/月"}</th><th>{"削減時間/月"}</th></tr>
                </thead>
                <tbody>
                    { for Issue::ALL.iter().map(|&i| {
                        let metric = i.metric();
                        html! {
                            <tr>
                                <td>{ i.badge().label }</td>
                                <td>{ format!("¥{}", format_thousands(metric.monthly_cost as u64)) }</td>
                                <td>{ format!("{}分", metric.monthly_minutes) }</td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
            <table class="calc-table">
                <thead>
                    <tr><th>{"業務種別"}</th><th>{"係数"}</th></tr>
                </thead>
                <tbody>
                    { for BusinessType::ALL.iter().map(|&t| html! {
                        <tr><td>{ t.label() }</td><td>{ format!("×{}", t.coefficient()) }</td></tr>
                    }) }
                </tbody>
            </table>
            <table class="calc-table">
                <thead>
                    <tr><th>{"管理方法"}</th><th>{"係数"}</th></tr>
                </thead>
                <tbody>
                    { for CurrentMethod::ALL.iter().map(|&m| html! {
                        <tr><td>{ m.label() }</td><td>{ format!("×{}", m.coefficient()) }</td></tr>
                    }) }
                </tbody>
            </table>
            <p class="calc-note">
                { format!(
                    "削減額 = 課題別単価の合計 × 業務種別係数（選択中の最大値） × 管理方法係数 × 隊員数。人件費換算は警備員日当 ¥{} を基準にしています。",
                    format_thousands(GUARD_DAILY_WAGE_YEN)
                ) }
            </p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ReportButtonProps {
    summary: String,
}

#[function_component(ReportButton)]
fn report_button(props: &ReportButtonProps) -> Html {
    let generating = use_state(|| false);

    let onclick = {
        let generating = generating.clone();
        let summary = props.summary.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if *generating {
                return;
            }
            generating.set(true);
            let generating = generating.clone();
            let summary = summary.clone();
            spawn_local(async move {
                TimeoutFuture::new(1_500).await;
                if let Some(window) = window() {
                    let _ = window.alert_with_message(&summary);
                }
                generating.set(false);
            });
        })
    };

    let (icon, label) = if *generating {
        ("fa-spinner fa-spin", " 生成中...")
    } else {
        ("fa-file-pdf", " レポート出力")
    };

    html! {
        <button class="btn btn-white" disabled={*generating} {onclick}>
            <i class={format!("fas {}", icon)}></i>{ label }
        </button>
    }
}
