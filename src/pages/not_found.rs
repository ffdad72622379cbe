use yew::prelude::*;
use yew_router::prelude::*;

use crate::theme::use_theme_styles;
use crate::Route;

#[function_component]
pub fn NotFound() -> Html {
    let styles = use_theme_styles();

    html! {
        <section class={classes!("py-32", "px-6", "text-center", styles.hero)}>
            <div class={classes!("text-6xl", "font-extrabold", "mb-4", styles.accent)}>{"404"}</div>
            <h1 class={classes!("text-2xl", "mb-6", styles.heading)}>{"We couldn't find that page"}</h1>
            <Link<Route> to={Route::Home} classes={classes!("px-6", "py-3", styles.button_primary)}>
                {"Back to home"}
            </Link<Route>>
        </section>
    }
}
