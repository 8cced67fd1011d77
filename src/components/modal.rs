use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

pub const CONTACT_SUBJECT: &str = "【お問い合わせ】デモ・お見積りのご相談";

/// Body of the e-mail the contact form opens.
pub fn contact_body(company: &str, name: &str, email: &str, message: &str) -> String {
    format!(
        "会社名: {}\nご担当者名: {}\nメールアドレス: {}\n\n{}",
        company.trim(),
        name.trim(),
        email.trim(),
        message.trim()
    )
}

pub fn mailto_href(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    /// Message the textarea starts with, e.g. a diagnosis summary.
    #[prop_or_default]
    pub prefill: String,
    pub sales_email: String,
}

#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    let company = use_state(String::new);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(|| props.prefill.clone());

    {
        let message = message.clone();
        use_effect_with_deps(
            move |prefill: &String| {
                message.set(prefill.clone());
                || ()
            },
            props.prefill.clone(),
        );
    }

    let close_on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    let bind_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let on_submit = {
        let company = company.clone();
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let sales_email = props.sales_email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let body = contact_body(&company, &name, &email, &message);
            let href = mailto_href(&sales_email, CONTACT_SUBJECT, &body);
            info!("Opening contact mail for {}", company.trim());
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&href);
            }
        })
    };

    html! {
        <div id="contactModal" class={classes!("modal", props.open.then_some("active"))} onclick={close_on_backdrop}>
            <div class="modal-content" onclick={keep_open}>
                <button class="modal-close" onclick={close_button}>{"×"}</button>
                <h3>{"無料デモ・お見積りのご相談"}</h3>
                <form class="contact-form" onsubmit={on_submit}>
                    <label>
                        {"会社名"}
                        <input type="text" required=true value={(*company).clone()} oninput={bind_input(&company)} />
                    </label>
                    <label>
                        {"ご担当者名"}
                        <input type="text" required=true value={(*name).clone()} oninput={bind_input(&name)} />
                    </label>
                    <label>
                        {"メールアドレス"}
                        <input type="email" required=true value={(*email).clone()} oninput={bind_input(&email)} />
                    </label>
                    <label>
                        {"ご相談内容"}
                        <textarea id="contact-msg" rows="8" value={(*message).clone()} oninput={on_message} />
                    </label>
                    <button type="submit" class="btn btn-primary">{"送信する"}</button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_lists_contact_fields() {
        let body = contact_body(" 株式会社サンプル警備 ", "山田", "yamada@example.jp", "デモ希望\n");
        assert_eq!(
            body,
            "会社名: 株式会社サンプル警備\nご担当者名: 山田\nメールアドレス: yamada@example.jp\n\nデモ希望"
        );
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let href = mailto_href("sales@example.jp", "a b", "x&y=z\n");
        assert_eq!(href, "mailto:sales@example.jp?subject=a%20b&body=x%26y%3Dz%0A");
    }
}
