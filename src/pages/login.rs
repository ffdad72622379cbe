use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::storage::{read_auth_token, BrowserStorage, KeyValueStore, AUTH_TOKEN_KEY};
use crate::theme::use_theme_styles;
use crate::pages::features::FeatureRoute;

/// The dashboard lives on its own domain; this page only stores the API key
/// the sandbox sends with its requests and points everyone else to the app.
#[function_component]
pub fn Login() -> Html {
    let styles = use_theme_styles();
    let token = use_state(String::new);
    let saved = use_state(|| read_auth_token(&BrowserStorage).is_some());
    let error = use_state(|| None::<String>);

    let on_token = {
        let token = token.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            token.set(input.value());
        })
    };

    let onsubmit = {
        let token = token.clone();
        let saved = saved.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = token.trim();
            if value.is_empty() {
                error.set(Some("Paste the API key from your dashboard".to_string()));
                return;
            }
            match BrowserStorage.set(AUTH_TOKEN_KEY, value) {
                Ok(()) => {
                    info!("Sandbox API key stored");
                    error.set(None);
                    saved.set(true);
                    token.set(String::new());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    let on_clear = {
        let saved = saved.clone();
        Callback::from(move |_: MouseEvent| {
            BrowserStorage.remove(AUTH_TOKEN_KEY);
            saved.set(false);
        })
    };

    html! {
        <section class={classes!("py-20", "px-6", "flex", "justify-center", styles.hero)}>
            <div class={classes!("w-full", "max-w-md", "p-8", "space-y-6", styles.card)}>
                <h1 class={classes!("text-3xl", "text-center", styles.heading)}>{"Sign in"}</h1>
                <a href={config::APP_URL} class={classes!("block", "text-center", "py-3", styles.button_primary)}>
                    {"Open the Easibill dashboard"}
                </a>
                <hr class="opacity-20" />
                <form class="space-y-3" {onsubmit}>
                    <label class={classes!("block", "text-sm", styles.text)} for="api-key">
                        {"Developer API key for the WhatsApp sandbox"}
                    </label>
                    <input
                        id="api-key"
                        type="password"
                        autocomplete="off"
                        placeholder="ebk_live_..."
                        class={classes!("w-full", "px-4", "py-2", styles.input)}
                        value={(*token).clone()}
                        oninput={on_token}
                    />
                    if let Some(err) = (*error).as_ref() {
                        <p class="text-sm text-red-500">{ err }</p>
                    }
                    <button type="submit" class={classes!("w-full", "py-2", styles.button_secondary)}>{"Save key"}</button>
                </form>
                if *saved {
                    <div class={classes!("text-sm", "flex", "justify-between", "items-center", styles.muted)}>
                        <span>{"An API key is saved in this browser."}</span>
                        <button class={styles.accent} onclick={on_clear}>{"Remove"}</button>
                    </div>
                    <Link<FeatureRoute> to={FeatureRoute::Sandbox} classes={classes!("block", "text-center", styles.accent)}>
                        {"Go to the sandbox →"}
                    </Link<FeatureRoute>>
                }
            </div>
        </section>
    }
}
