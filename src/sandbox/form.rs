use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::message::{is_valid_mobile, prepare_send, send_test_message, settle_send, SendError};
use super::rate_limit::{RateLimiter, MAX_SENDS_PER_WINDOW};
use crate::storage::{read_auth_token, BrowserStorage};
use crate::theme::use_theme_styles;

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[function_component]
pub fn SandboxForm() -> Html {
    let styles = use_theme_styles();
    let name = use_state(String::new);
    let mobile = use_state(String::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<SendError>);
    let success = use_state(|| false);
    let remaining = use_state(|| None::<u32>);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_mobile = {
        let mobile = mobile.clone();
        let remaining = remaining.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            if is_valid_mobile(&value) {
                remaining.set(Some(RateLimiter::new(BrowserStorage).remaining(&value, now_ms())));
            } else {
                remaining.set(None);
            }
            mobile.set(value);
        })
    };

    let onsubmit = {
        let name = name.clone();
        let mobile = mobile.clone();
        let loading = loading.clone();
        let error = error.clone();
        let success = success.clone();
        let remaining = remaining.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            success.set(false);

            let phone = mobile.trim().to_string();
            let payload = match prepare_send(&RateLimiter::new(BrowserStorage), &name, &phone, now_ms()) {
                Ok(payload) => payload,
                Err(e) => {
                    if e == SendError::HourlyLimitReached {
                        info!("Sandbox send blocked locally for {}", phone);
                        remaining.set(Some(0));
                    }
                    error.set(Some(e));
                    return;
                }
            };

            error.set(None);
            loading.set(true);
            let loading = loading.clone();
            let error = error.clone();
            let success = success.clone();
            let remaining = remaining.clone();
            spawn_local(async move {
                let token = read_auth_token(&BrowserStorage);
                if token.is_none() {
                    warn!("No sandbox token stored, sending without Authorization");
                }
                let result = send_test_message(&payload, &phone, token.as_deref()).await;
                let left = settle_send(&RateLimiter::new(BrowserStorage), &phone, &result, now_ms());
                remaining.set(Some(left));
                match result {
                    Ok(()) => {
                        info!("Sandbox message sent to {} ({} left this hour)", phone, left);
                        success.set(true);
                    }
                    Err(e) => {
                        warn!("Sandbox send failed: {}", e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <form class={classes!("sandbox-form", "p-6", "space-y-4", styles.card)} {onsubmit}>
            <h3 class={classes!("text-xl", styles.heading)}>{"Try it on your own phone"}</h3>
            <p class={classes!("text-sm", styles.muted)}>
                {"We'll send you a sample payment reminder on WhatsApp, exactly as your customers would see it."}
            </p>
            <input
                type="text"
                placeholder="Your name"
                class={classes!("w-full", "px-4", "py-2", styles.input)}
                value={(*name).clone()}
                oninput={on_name}
                disabled={*loading}
            />
            <div class="flex gap-2">
                <span class={classes!("px-3", "py-2", styles.badge)}>{"+91"}</span>
                <input
                    type="tel"
                    inputmode="numeric"
                    maxlength="10"
                    placeholder="WhatsApp number"
                    class={classes!("flex-1", "px-4", "py-2", styles.input)}
                    value={(*mobile).clone()}
                    oninput={on_mobile}
                    disabled={*loading}
                />
            </div>
            if let Some(left) = *remaining {
                <p class={classes!("text-xs", styles.muted)}>
                    { format!("{} of {} test messages left this hour", left, MAX_SENDS_PER_WINDOW) }
                </p>
            }
            if let Some(err) = (*error).as_ref() {
                <div class={classes!(
                    "sandbox-error", "text-sm", "p-3", "rounded-lg",
                    if err.is_rate_limit() { "bg-amber-50 text-amber-800" } else { "bg-red-50 text-red-700" }
                )}>
                    { err.to_string() }
                </div>
            }
            if *success {
                <div class="sandbox-success text-sm p-3 rounded-lg bg-green-50 text-green-700">
                    {"Sent! Check WhatsApp for your sample reminder."}
                </div>
            }
            <button type="submit" class={classes!("w-full", "py-2", styles.button_primary)} disabled={*loading}>
                { if *loading { "Sending..." } else { "Send test message" } }
            </button>
        </form>
    }
}
