use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CollapsibleProps {
    /// Id of the body element.
    pub body_id: &'static str,
    pub title: &'static str,
    /// CSS `display` used while open.
    #[prop_or("block")]
    pub display: &'static str,
    #[prop_or_default]
    pub children: Children,
}

fn chevron(open: bool) -> &'static str {
    if open {
        "fa-chevron-up"
    } else {
        "fa-chevron-down"
    }
}

/// A header button that shows or hides a detail panel.
#[function_component(Collapsible)]
pub fn collapsible(props: &CollapsibleProps) -> Html {
    let open = use_state(|| false);

    let toggle = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open.set(!*open);
        })
    };

    let display = if *open { props.display } else { "none" };

    html! {
        <div class="collapsible">
            <button class="collapsible-toggle" onclick={toggle}>
                <span>{props.title}</span>
                <i class={classes!("fas", chevron(*open))}></i>
            </button>
            <div id={props.body_id} class="collapsible-body" style={format!("display: {};", display)}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chevron_points_at_next_action() {
        assert_eq!(chevron(false), "fa-chevron-down");
        assert_eq!(chevron(true), "fa-chevron-up");
    }
}
