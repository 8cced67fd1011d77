use web_sys::{Element, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: String,
    pub children: Children,
}

/// Height the answer should take: its natural content height when open.
fn answer_height(open: bool, content_height: i32) -> String {
    if open {
        format!("height: {}px;", content_height.max(0))
    } else {
        "height: 0px;".to_string()
    }
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);
    let answer_ref = use_node_ref();

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    // Measured at render time; an answer that is not mounted yet opens at 0
    // and picks up its height on the next render.
    let content_height = answer_ref
        .cast::<Element>()
        .map(|answer| answer.scroll_height())
        .unwrap_or(0);

    html! {
        <div class={classes!("faq-item", (*is_open).then_some("active"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer" ref={answer_ref} style={answer_height(*is_open, content_height)}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id="faq" class="faq-section">
            <h2 class="section-title">{"よくあるご質問"}</h2>

            <FaqItem question="導入までどのくらいの期間がかかりますか？">
                <p>{"標準的な構成であれば、お申し込みから最短2週間で運用を開始いただけます。既存の隊員名簿や現場情報はExcelから一括取り込みが可能です。"}</p>
            </FaqItem>

            <FaqItem question="スマホを持っていない隊員がいても使えますか？">
                <p>{"はい。上下番報告は電話・SMSでも受け付けており、管制側で代理入力もできます。スマホ利用者とそれ以外の隊員を同じ画面で管理できます。"}</p>
            </FaqItem>

            <FaqItem question="教育実施簿は警備業法の様式に対応していますか？">
                <p>{"新任・現任教育の実施簿、指導教育責任者の記録など、立入検査で確認される備付書類を法定様式で出力します。法改正時は追加費用なしで更新されます。"}</p>
            </FaqItem>

            <FaqItem question="給与計算や請求書は既存の会計ソフトと連携できますか？">
                <p>{"主要な会計・給与ソフト向けのCSV出力に対応しています。夜勤・深夜・交通費など警備業特有の手当もそのまま連携できます。"}</p>
            </FaqItem>

            <FaqItem question="診断の削減額はどのように算出していますか？">
                <p>{"課題ごとに隊員1名あたりの月間削減単価と削減時間を設定し、業務種別と現在の管理方法による係数を掛けて隊員数分を合算しています。実際の効果は運用状況により異なります。"}</p>
            </FaqItem>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_answer_collapses() {
        assert_eq!(answer_height(false, 240), "height: 0px;");
    }

    #[test]
    fn open_answer_uses_content_height() {
        assert_eq!(answer_height(true, 240), "height: 240px;");
        assert_eq!(answer_height(true, -3), "height: 0px;");
    }
}
