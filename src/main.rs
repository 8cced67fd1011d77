use log::{info, Level};
use web_sys::{window, Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod config;
mod diagnosis {
    pub mod burden;
    pub mod coefficients;
    pub mod estimator;
    pub mod form;
    pub mod inquiry;
    pub mod recommendation;
    pub mod result;
    pub mod visualization;
}
mod components {
    pub mod collapsible;
    pub mod count_up;
    pub mod diagram;
    pub mod faq;
    pub mod modal;
    pub mod reveal;
    pub mod years;
}
mod pages {
    pub mod diagnosis;
    pub mod home;
}

use config::SiteConfig;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

/// Inline style for the mobile menu panel while it is open.
const MOBILE_MENU_OPEN_STYLE: &str = "display: flex; position: absolute; top: 70px; left: 0; width: 100%; \
     background: white; flex-direction: column; padding: 20px; box-shadow: 0 10px 15px rgba(0,0,0,0.1);";

fn menu_style(open: bool) -> &'static str {
    if open {
        MOBILE_MENU_OPEN_STYLE
    } else {
        ""
    }
}

const NAV_LINKS: [(&str, &str); 4] = [
    ("#features", "製品紹介"),
    ("#flow", "業務フロー"),
    ("#diagnosis", "削減シミュレーション"),
    ("#faq", "よくあるご質問"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let scroll_top = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            is_scrolled.set(scroll_top > 80.0);
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"警備Pro"}
                </Link<Route>>

                <button class="mobile-toggle" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class="nav-menu" style={menu_style(*menu_open)}>
                    { for NAV_LINKS.iter().map(|&(href, label)| html! {
                        <a href={href} class="nav-link" onclick={close_menu.clone()}>{ label }</a>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| SiteConfig::load(), ());

    html! {
        <ContextProvider<SiteConfig> context={(*config).clone()}>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SiteConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
