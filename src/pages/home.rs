use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::collapsible::Collapsible;
use crate::components::diagram::DiagramBoard;
use crate::components::faq::Faq;
use crate::components::modal::ContactModal;
use crate::components::reveal::{AnimatedBar, Reveal};
use crate::components::years::YearsInBusiness;
use crate::config::SiteConfig;
use crate::pages::diagnosis::Diagnosis;

/// Monthly back-office hours for a 50-guard company, before and after.
const WORKLOAD_ROWS: [(&str, f64, f64); 3] = [
    ("管制・配置連絡", 62.0, 18.0),
    ("教育実施簿・法定書類", 28.0, 6.0),
    ("給与・請求計算", 46.0, 12.0),
];

fn bar_width(hours: f64) -> f64 {
    let max = WORKLOAD_ROWS.iter().map(|r| r.1).fold(0.0, f64::max);
    if max > 0.0 {
        hours / max * 100.0
    } else {
        0.0
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let modal_open = use_state(|| false);
    let prefill = use_state(String::new);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let open_contact = {
        let modal_open = modal_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            modal_open.set(true);
        })
    };

    let on_inquire = {
        let modal_open = modal_open.clone();
        let prefill = prefill.clone();
        Callback::from(move |message: String| {
            prefill.set(message);
            modal_open.set(true);
        })
    };

    let on_close = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| {
            info!("Contact modal closed");
            modal_open.set(false);
        })
    };

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-content">
                    <p class="hero-eyebrow">{"創業"}<YearsInBusiness />{"年の警備会社が作った業務システム"}</p>
                    <h1>{"管制・教育・給与を、ひとつに。"}</h1>
                    <p class="hero-subtitle">
                        {"警備Proシリーズは、現場の上下番から教育実施簿、給与・請求までを一気通貫でつなぐ警備業専用のクラウドシステムです。"}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#diagnosis" class="btn btn-primary">{"無料で削減効果を診断"}</a>
                        <button class="btn btn-outline" onclick={open_contact.clone()}>{"デモを申し込む"}</button>
                    </div>
                </div>
            </header>

            <section id="features" class="features-section">
                <h2 class="section-title">{"3つの製品で、警備業務をまるごと効率化"}</h2>
                <div class="feature-row">
                    <Reveal class="feature-text" animation="fade-right">
                        <h3>{"管制Pro"}</h3>
                        <p>{"隊員のスマホに指示書を自動送信。上下番報告がそのまま勤務実績になり、朝晩の電話連絡から解放されます。"}</p>
                    </Reveal>
                    <Reveal class="feature-img" animation="fade-left">
                        <img src="/assets/feature-control.png" alt="管制Proの画面" loading="lazy" />
                    </Reveal>
                </div>
                <div class="feature-row">
                    <Reveal class="feature-img" animation="fade-right">
                        <img src="/assets/feature-edu.png" alt="教育Proの画面" loading="lazy" />
                    </Reveal>
                    <Reveal class="feature-text" animation="fade-left">
                        <h3>{"教育Pro"}</h3>
                        <p>{"新任・現任教育の実施状況を自動集計。実施漏れはアラートで通知し、立入検査に必要な書類をいつでも出力できます。"}</p>
                    </Reveal>
                </div>
                <div class="feature-row">
                    <Reveal class="feature-text" animation="fade-right">
                        <h3>{"警備Pro"}</h3>
                        <p>{"勤務実績から給与・請求を自動計算。深夜・交通費・日払いなど警備業特有の計算にも標準対応しています。"}</p>
                    </Reveal>
                    <Reveal class="feature-img" animation="fade-left">
                        <img src="/assets/feature-keibi.png" alt="警備Proの画面" loading="lazy" />
                    </Reveal>
                </div>
            </section>

            <section id="flow" class="flow-section">
                <h2 class="section-title">{"受注から年末調整まで、データがつながる"}</h2>
                <Reveal>
                    <DiagramBoard />
                </Reveal>
            </section>

            <section id="workload" class="workload-section">
                <h2 class="section-title">{"月間の事務工数はここまで減らせます"}</h2>
                <Reveal class="comparison-table-wrapper">
                    { for WORKLOAD_ROWS.iter().map(|&(label, before, after)| html! {
                        <div class="workload-row">
                            <span class="workload-label">{ label }</span>
                            <AnimatedBar class="bar-before" width_percent={bar_width(before)}>
                                { format!("{}時間", before) }
                            </AnimatedBar>
                            <AnimatedBar class="bar-after" width_percent={bar_width(after)}>
                                { format!("{}時間", after) }
                            </AnimatedBar>
                        </div>
                    }) }
                </Reveal>
                <Collapsible body_id="evidence-body" title="算出根拠データ" display="flex">
                    <div class="evidence-item">
                        <strong>{"対象"}</strong>
                        <p>{"隊員50名規模・管制担当2名・事務担当1名の警備会社の月間実績（導入前後3ヶ月平均）。"}</p>
                    </div>
                    <div class="evidence-item">
                        <strong>{"計測方法"}</strong>
                        <p>{"電話・FAX・手書き転記に費やした時間を担当者の作業記録から集計しています。"}</p>
                    </div>
                </Collapsible>
            </section>

            <Diagnosis on_inquire={on_inquire} />

            <Faq />

            <section class="cta-section">
                <Reveal class="fit-box">
                    <h2>{"まずは実際の画面で、操作感をお確かめください。"}</h2>
                    <button class="btn btn-primary" onclick={open_contact}>{"無料デモを申し込む"}</button>
                </Reveal>
            </section>

            <footer class="site-footer">
                <p>{"© 警備Pro シリーズ 運営事務局"}</p>
            </footer>

            <ContactModal
                open={*modal_open}
                on_close={on_close}
                prefill={(*prefill).clone()}
                sales_email={config.sales_email.clone()}
            />

            <style>
                {r#"
                .fade-up, .fade-left, .fade-right {
                    opacity: 0;
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }
                .fade-up { transform: translateY(30px); }
                .fade-left { transform: translateX(30px); }
                .fade-right { transform: translateX(-30px); }
                .fade-up.visible, .fade-left.visible, .fade-right.visible {
                    opacity: 1;
                    transform: none;
                }

                .animate-bar {
                    height: 28px;
                    width: 0;
                    transition: width 1.2s ease-out;
                    white-space: nowrap;
                    color: #fff;
                    padding-left: 8px;
                }
                .bar-before { background: #94a3b8; }
                .bar-after { background: #3b82f6; }

                .diagram-board {
                    position: relative;
                    display: grid;
                    grid-template-columns: repeat(4, minmax(140px, 1fr));
                    gap: 48px 32px;
                    overflow-x: auto;
                    padding: 24px;
                }
                .diagram-svg {
                    position: absolute;
                    top: 0;
                    left: 0;
                    pointer-events: none;
                    z-index: 0;
                }
                .diagram-node {
                    position: relative;
                    z-index: 1;
                    background: #fff;
                    border: 2px solid #3b82f6;
                    border-radius: 8px;
                    padding: 12px;
                    text-align: center;
                    font-weight: 700;
                }

                .faq-answer {
                    overflow: hidden;
                    transition: height 0.3s ease;
                }

                .modal {
                    display: none;
                    position: fixed;
                    inset: 0;
                    background: rgba(10, 37, 64, 0.6);
                    z-index: 1000;
                    align-items: center;
                    justify-content: center;
                }
                .modal.active { display: flex; }
                .modal-content {
                    background: #fff;
                    border-radius: 12px;
                    padding: 32px;
                    width: min(560px, 92vw);
                    position: relative;
                }

                .burden-bar {
                    background: rgba(255, 255, 255, 0.2);
                    border-radius: 6px;
                    height: 12px;
                    overflow: hidden;
                }
                .burden-fill {
                    background: #fbbf24;
                    height: 100%;
                    transition: width 0.5s ease;
                }

                #pv-icons {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 4px;
                }
                .pv-icon { color: #fbbf24; }

                @media (max-width: 768px) {
                    .feature-row { flex-direction: column; }
                    .diagnosis-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_bar_fills_the_row() {
        assert_eq!(bar_width(62.0), 100.0);
        assert_eq!(bar_width(31.0), 50.0);
        assert_eq!(bar_width(0.0), 0.0);
    }
}
