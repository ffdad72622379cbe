use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use super::fields::{LeadField, LeadFormData, FIELDS};
use super::wizard::{LeadWizard, SubmitError, SubmitRejected, WizardState, THANK_YOU_DELAY_MS};
use crate::config;
use crate::theme::{ThemeContext, Theme};

pub async fn submit_lead(lead: &LeadFormData) -> Result<(), SubmitError> {
    let request = Request::post(config::get_lead_endpoint())
        .json(lead)
        .map_err(|e| SubmitError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Status(response.status()))
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    /// Fired when the thank-you screen has been shown long enough.
    pub on_done: Callback<()>,
}

pub enum LeadFormMsg {
    Input(LeadField, String),
    Next,
    Back,
    Submit,
    Submitted(Result<(), SubmitError>),
    ThemeChanged(ThemeContext),
    Done,
}

pub struct LeadForm {
    wizard: LeadWizard,
    theme: Theme,
    _theme_listener: Option<ContextHandle<ThemeContext>>,
    return_timer: Option<Timeout>,
}

impl Component for LeadForm {
    type Message = LeadFormMsg;
    type Properties = LeadFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (theme, listener) = match ctx
            .link()
            .context::<ThemeContext>(ctx.link().callback(LeadFormMsg::ThemeChanged))
        {
            Some((theme_ctx, handle)) => (theme_ctx.theme, Some(handle)),
            None => (Theme::default(), None),
        };

        Self {
            wizard: LeadWizard::new(),
            theme,
            _theme_listener: listener,
            return_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LeadFormMsg::Input(field, value) => {
                self.wizard.set_value(field, value);
                true
            }
            LeadFormMsg::Next => {
                self.wizard.advance();
                true
            }
            LeadFormMsg::Back => self.wizard.retreat(),
            LeadFormMsg::Submit => {
                match self.wizard.begin_submit() {
                    Ok(lead) => {
                        info!("Submitting lead for {}", lead.company_name);
                        ctx.link().send_future(async move {
                            LeadFormMsg::Submitted(submit_lead(&lead).await)
                        });
                    }
                    Err(SubmitRejected::Busy) => return false,
                    Err(SubmitRejected::Invalid(errors)) => {
                        info!("Lead submission blocked by {} invalid field(s)", errors.len());
                    }
                }
                true
            }
            LeadFormMsg::Submitted(result) => {
                if let Err(e) = &result {
                    warn!("Lead submission failed: {}", e);
                }
                let succeeded = result.is_ok();
                self.wizard.finish_submit(result);
                if succeeded {
                    let link = ctx.link().clone();
                    self.return_timer = Some(Timeout::new(THANK_YOU_DELAY_MS, move || {
                        link.send_message(LeadFormMsg::Done);
                    }));
                }
                true
            }
            LeadFormMsg::ThemeChanged(theme_ctx) => {
                self.theme = theme_ctx.theme;
                true
            }
            LeadFormMsg::Done => {
                self.return_timer = None;
                ctx.props().on_done.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let styles = self.theme.styles();

        let step = match self.wizard.state() {
            WizardState::Step(step) => step,
            WizardState::ThankYou => {
                return html! {
                    <div class={classes!("lead-thank-you", "p-8", "text-center", styles.card)}>
                        <div class="text-5xl mb-4">{"🎉"}</div>
                        <h2 class={classes!("text-2xl", "mb-2", styles.heading)}>{"Thank you!"}</h2>
                        <p class={styles.text}>
                            {"Our team will reach out within one business day. Taking you back to the home page..."}
                        </p>
                    </div>
                };
            }
        };
        let Some(descriptor) = self.wizard.current_field() else {
            return html! {};
        };

        let field = descriptor.field;
        let submitting = self.wizard.is_submitting();
        let is_last = self.wizard.is_last_step();

        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            LeadFormMsg::Input(field, input.value())
        });
        let onkeydown = ctx.link().batch_callback(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                Some(if is_last { LeadFormMsg::Submit } else { LeadFormMsg::Next })
            } else {
                None
            }
        });
        let onsubmit = ctx.link().callback(move |e: SubmitEvent| {
            e.prevent_default();
            if is_last { LeadFormMsg::Submit } else { LeadFormMsg::Next }
        });

        html! {
            <form class={classes!("lead-form", "p-8", styles.card)} {onsubmit} novalidate=true>
                <div class="lead-progress flex items-center justify-between mb-6">
                    <span class={classes!("text-sm", styles.muted)}>
                        { format!("Step {} of {}", step + 1, FIELDS.len()) }
                    </span>
                    <div class="flex gap-1">
                        { for (0..FIELDS.len()).map(|i| html! {
                            <span class={classes!(
                                "h-1.5", "w-8", "rounded-full",
                                if i <= step { "bg-current opacity-90" } else { "bg-current opacity-20" },
                                styles.accent
                            )}></span>
                        }) }
                    </div>
                </div>

                <label class={classes!("block", "text-xl", "mb-3", styles.heading)} for={field.key()}>
                    <span class="mr-2">{ descriptor.icon }</span>
                    { descriptor.label }
                </label>
                <input
                    id={field.key()}
                    name={field.key()}
                    key={field.key()}
                    type={descriptor.input.as_str()}
                    placeholder={descriptor.placeholder}
                    class={classes!("w-full", "px-4", "py-3", styles.input)}
                    value={self.wizard.data().get(field).to_string()}
                    {oninput}
                    {onkeydown}
                    disabled={submitting}
                />
                if let Some(err) = self.wizard.error_for(field) {
                    <p class="field-error text-sm text-red-500 mt-2">{ err }</p>
                }

                if is_last && self.wizard.errors().len() > 1 {
                    <ul class="error-summary text-sm text-red-500 mt-4 list-disc pl-5">
                        { for self.wizard.errors().values().map(|err| html! { <li>{ err }</li> }) }
                    </ul>
                }
                if let Some(err) = self.wizard.submit_error() {
                    <div class="submit-error mt-4 p-3 rounded-lg bg-red-50 text-red-700 text-sm">{ err }</div>
                }

                <div class="lead-actions flex justify-between mt-8">
                    <button
                        type="button"
                        class={classes!("px-5", "py-2", styles.button_secondary)}
                        onclick={ctx.link().callback(|_| LeadFormMsg::Back)}
                        disabled={step == 0 || submitting}
                    >
                        {"Back"}
                    </button>
                    <button
                        type="submit"
                        class={classes!("px-6", "py-2", styles.button_primary)}
                        disabled={submitting}
                    >
                        {
                            if submitting {
                                "Submitting..."
                            } else if is_last {
                                "Submit"
                            } else {
                                "Next"
                            }
                        }
                    </button>
                </div>
            </form>
        }
    }
}
