use log::{info, warn, Level};
use stylist::css;
use stylist::yew::Global;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod format;
mod seo;
mod storage;
mod theme;
mod lead {
    pub mod fields;
    pub mod form;
    pub mod wizard;
}
mod sandbox {
    pub mod form;
    pub mod message;
    pub mod rate_limit;
}
mod components {
    pub mod buyer_analysis;
    pub mod fallback_image;
    pub mod metric_card;
    pub mod notification;
    pub mod reveal;
}
mod pages {
    pub mod case_studies;
    pub mod features;
    pub mod home;
    pub mod industries;
    pub mod lead;
    pub mod login;
    pub mod not_found;
    pub mod pricing;
    pub mod testimonials;
}

use pages::{
    case_studies::CaseStudies,
    features::{switch_features, FeatureRoute},
    home::Home,
    industries::Industries,
    lead::Lead,
    login::Login,
    not_found::NotFound,
    pricing::Pricing,
    testimonials::Testimonials,
};
use seo::Seo;
use theme::{use_theme_styles, ThemeProvider, ThemeSelector};

const SCROLLED_AFTER_PX: i32 = 80;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/features")]
    FeaturesRoot,
    #[at("/features/*")]
    Features,
    #[at("/pricing")]
    Pricing,
    #[at("/testimonials")]
    Testimonials,
    #[at("/industries")]
    Industries,
    #[at("/case-studies")]
    CaseStudies,
    #[at("/lead")]
    Lead,
    #[at("/contact")]
    Contact,
    #[at("/demo")]
    Demo,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    let meta = seo::meta_for(&routes);
    let page = match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::FeaturesRoot | Route::Features => {
            info!("Rendering Features section");
            // Feature pages carry their own head tags.
            return html! { <Switch<FeatureRoute> render={switch_features} /> };
        }
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        }
        Route::Testimonials => {
            info!("Rendering Testimonials page");
            html! { <Testimonials /> }
        }
        Route::Industries => {
            info!("Rendering Industries page");
            html! { <Industries /> }
        }
        Route::CaseStudies => {
            info!("Rendering Case Studies page");
            html! { <CaseStudies /> }
        }
        Route::Lead => {
            info!("Rendering Lead page");
            html! { <Lead /> }
        }
        Route::Contact | Route::Demo => {
            info!("Redirecting {} to the lead form", routes.to_path());
            return html! { <Redirect<Route> to={Route::Lead} /> };
        }
        Route::Login => {
            info!("Rendering Login page");
            html! { <Login /> }
        }
        Route::NotFound => {
            warn!("Rendering Not Found page");
            html! { <NotFound /> }
        }
    };

    html! {
        <>
            <Seo {meta} />
            { page }
        </>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let styles = use_theme_styles();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().map(|window| {
                    let document = window.document();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_top = document
                            .as_ref()
                            .and_then(|d| d.document_element())
                            .map(|el| el.scroll_top())
                            .unwrap_or(0);
                        is_scrolled.set(scroll_top > SCROLLED_AFTER_PX);
                    }) as Box<dyn FnMut()>);
                    if window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        warn!("Could not attach scroll listener");
                    }
                    scroll_callback
                });

                move || {
                    if let (Some(window), Some(scroll_callback)) = (window, listener) {
                        let _ = window
                            .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
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
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let links = [
        (Route::FeaturesRoot, "Features"),
        (Route::Industries, "Industries"),
        (Route::Pricing, "Pricing"),
        (Route::Testimonials, "Testimonials"),
        (Route::CaseStudies, "Case Studies"),
    ];

    html! {
        <nav class={classes!("top-nav", "sticky", "top-0", "z-50", styles.nav, (*is_scrolled).then_some("scrolled shadow-md"))}>
            <div class="nav-content max-w-6xl mx-auto flex items-center justify-between px-6 py-4">
                <Link<Route> to={Route::Home} classes={classes!("nav-logo", "text-2xl", "font-extrabold", styles.heading)}>
                    {"Easibill"}
                </Link<Route>>

                <button class="burger-menu md:hidden" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!(menu_class, "flex", "items-center", "gap-6")}>
                    { for links.into_iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route} classes={classes!("nav-link", styles.text)}>
                                { label }
                            </Link<Route>>
                        </div>
                    }) }
                    <ThemeSelector />
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Login} classes={classes!("nav-link", styles.muted)}>
                            {"Login"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Lead} classes={classes!("px-4", "py-2", styles.button_primary)}>
                            {"Book a demo"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let styles = use_theme_styles();
    let year = chrono::Utc::now().format("%Y").to_string();

    html! {
        <footer class={classes!("py-12", "px-6", styles.footer)}>
            <div class="max-w-6xl mx-auto grid md:grid-cols-4 gap-8">
                <div>
                    <div class="text-xl font-bold mb-2">{"Easibill"}</div>
                    <p class="text-sm opacity-80">{"Billing, payments and reminders for Indian businesses."}</p>
                </div>
                <div class="flex flex-col gap-2 text-sm">
                    <Link<FeatureRoute> to={FeatureRoute::Invoicing}>{"Invoicing"}</Link<FeatureRoute>>
                    <Link<FeatureRoute> to={FeatureRoute::Payments}>{"Payments"}</Link<FeatureRoute>>
                    <Link<FeatureRoute> to={FeatureRoute::WhatsApp}>{"WhatsApp reminders"}</Link<FeatureRoute>>
                    <Link<FeatureRoute> to={FeatureRoute::Reports}>{"Reports"}</Link<FeatureRoute>>
                </div>
                <div class="flex flex-col gap-2 text-sm">
                    <Link<Route> to={Route::Industries}>{"Industries"}</Link<Route>>
                    <Link<Route> to={Route::CaseStudies}>{"Case studies"}</Link<Route>>
                    <Link<Route> to={Route::Testimonials}>{"Testimonials"}</Link<Route>>
                    <Link<Route> to={Route::Pricing}>{"Pricing"}</Link<Route>>
                </div>
                <div class="flex flex-col gap-2 text-sm">
                    <Link<Route> to={Route::Lead}>{"Contact sales"}</Link<Route>>
                    <Link<FeatureRoute> to={FeatureRoute::Sandbox}>{"WhatsApp sandbox"}</Link<FeatureRoute>>
                    <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                </div>
            </div>
            <div class="max-w-6xl mx-auto mt-8 text-xs opacity-70">
                { format!("© {} Easibill. All rights reserved.", year) }
            </div>
        </footer>
    }
}

#[function_component]
fn Shell() -> Html {
    let styles = use_theme_styles();

    html! {
        <div class={classes!("min-h-screen", "flex", "flex-col", styles.page)}>
            <Nav />
            <main class="flex-1">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </div>
    }
}

#[function_component]
fn App() -> Html {
    let global = css!(
        r#"
        html {
            scroll-behavior: smooth;
        }

        @keyframes slide-in {
            from { opacity: 0; transform: translateX(32px); }
            to { opacity: 1; transform: none; }
        }

        .animate-slide-in {
            animation: slide-in 0.5s ease-out both;
        }

        @media (prefers-reduced-motion: reduce) {
            html { scroll-behavior: auto; }
            .animate-slide-in { animation: none; }
        }
        "#
    );

    html! {
        <ThemeProvider>
            <Global css={global} />
            <BrowserRouter>
                <Shell />
            </BrowserRouter>
        </ThemeProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
