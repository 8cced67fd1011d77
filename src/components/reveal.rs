use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const BAR_THRESHOLD: f64 = 0.5;

/// Flips to `true` the first time `threshold` of the node is on screen and
/// stays there. Browsers without `IntersectionObserver` reveal immediately.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observed = node.cast::<Element>().and_then(|element| {
                    let on_entries = {
                        let revealed = revealed.clone();
                        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                                    if entry.is_intersecting() {
                                        revealed.set(true);
                                        observer.unobserve(&entry.target());
                                    }
                                }
                            }
                        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
                    };

                    let mut options = IntersectionObserverInit::new();
                    options.threshold(&JsValue::from_f64(threshold));
                    let observer =
                        IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options).ok()?;
                    observer.observe(&element);
                    Some((observer, on_entries))
                });

                if observed.is_none() {
                    debug!("IntersectionObserver unavailable, revealing without animation");
                    revealed.set(true);
                }

                move || {
                    if let Some((observer, _on_entries)) = observed {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Entry animation class: `fade-up`, `fade-left` or `fade-right`.
    #[prop_or("fade-up")]
    pub animation: &'static str,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), REVEAL_THRESHOLD);

    html! {
        <div ref={node} class={classes!(props.animation, props.class.clone(), revealed.then_some("visible"))}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedBarProps {
    pub width_percent: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Comparison bar that grows to its width once half of it is visible.
#[function_component(AnimatedBar)]
pub fn animated_bar(props: &AnimatedBarProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), BAR_THRESHOLD);
    let width = if revealed { props.width_percent.clamp(0.0, 100.0) } else { 0.0 };

    html! {
        <div
            ref={node}
            class={classes!("animate-bar", props.class.clone())}
            style={format!("width: {}%;", width)}
        >
            { for props.children.iter() }
        </div>
    }
}
