use yew::prelude::*;
use yew_router::prelude::*;

use crate::lead::form::LeadForm;
use crate::theme::use_theme_styles;
use crate::Route;

#[function_component]
pub fn Lead() -> Html {
    let styles = use_theme_styles();
    let navigator = use_navigator();

    let on_done = Callback::from(move |_: ()| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <section class={classes!("py-20", "px-6", styles.hero)}>
            <div class="max-w-5xl mx-auto grid md:grid-cols-2 gap-12 items-center">
                <div>
                    <span class={classes!("px-3", "py-1", "text-xs", styles.badge)}>{"Free 30-minute demo"}</span>
                    <h1 class={classes!("text-4xl", "mt-4", "mb-4", styles.heading)}>{"See Easibill with your own invoices"}</h1>
                    <p class={classes!("mb-6", styles.text)}>
                        {"Five quick questions and a billing specialist will set up a walkthrough around how your business actually works."}
                    </p>
                    <ul class="space-y-2">
                        <li class={styles.text}>{"✓ No credit card needed"}</li>
                        <li class={styles.text}>{"✓ Data import from Tally, Excel or Vyapar"}</li>
                        <li class={styles.text}>{"✓ Support in English, Hindi and 6 regional languages"}</li>
                    </ul>
                </div>
                <LeadForm {on_done} />
            </div>
        </section>
    }
}
