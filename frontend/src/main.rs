use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod dom;
mod timing;
mod animation;
mod chat;
mod contact;
#[cfg(test)]
mod testing;

mod components {
    pub mod toast;
    pub mod loading_overlay;
    pub mod chat_widget;
    pub mod contact_form;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::toast::ToastProvider;
use pages::{home::Home, not_found::NotFound};

/// Scroll offset after which the navbar gets its solid background.
const NAV_SOLID_AFTER: f64 = 50.0;

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
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let subscription = web_sys::window().and_then(|window| {
                let target = window.clone();
                dom::listen(&target, "scroll", move || {
                    let scroll_y = window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > NAV_SOLID_AFTER);
                })
            });
            move || drop(subscription)
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation still happens, only the mobile menu collapses
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("navbar", "fixed-top", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Empire Builders"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle navigation">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#services" class="nav-link" onclick={close_menu.clone()}>{"Services"}</a>
                    <a href="#about" class="nav-link" onclick={close_menu.clone()}>{"About"}</a>
                    <a href="#contact" class="nav-link nav-cta" onclick={close_menu}>{"Contact"}</a>
                </div>
            </div>
            <style>
                {r#"
                .navbar {
                    padding: 1rem 0;
                    transition: background-color 0.3s ease;
                    z-index: 1040;
                }
                .navbar.scrolled {
                    background-color: rgba(33, 37, 41, 0.95);
                }
                .nav-content {
                    max-width: 1140px;
                    width: 100%;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.4rem;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                }
                .nav-right .nav-link {
                    color: rgba(255, 255, 255, 0.85);
                    text-decoration: none;
                }
                .nav-right .nav-link:hover,
                .nav-cta {
                    color: #fff;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1rem;
                        background-color: rgba(33, 37, 41, 0.95);
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Nav />
                <Switch<Route> render={switch} />
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Empire Builders");
    yew::Renderer::<App>::new().render();
}
