use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::components::reveal::Reveal;
use crate::theme::use_theme_styles;
use crate::Route;

struct CaseStudy {
    company: &'static str,
    industry: &'static str,
    image: &'static str,
    challenge: &'static str,
    outcome: &'static str,
    results: &'static [(&'static str, &'static str)],
}

static CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        company: "Patel Distributors",
        industry: "FMCG distribution, Surat",
        image: "/assets/case-studies/patel.jpg",
        challenge: "Over 400 retailers on credit, collections tracked in a notebook and outstanding creeping past 60 days.",
        outcome: "Moved every invoice to Easibill with automated WhatsApp reminders three days before and after the due date.",
        results: &[("-58%", "days sales outstanding"), ("12 hrs", "saved every week"), ("₹38L", "recovered in the first quarter")],
    },
    CaseStudy {
        company: "Green Leaf Cafe",
        industry: "Food & beverage, Bengaluru",
        image: "/assets/case-studies/greenleaf.jpg",
        challenge: "Three outlets on different billing tools and a painful month-end GST reconciliation.",
        outcome: "One Easibill account across outlets with consolidated GSTR summaries for the accountant.",
        results: &[("3 → 1", "billing systems"), ("2 days", "cut from GST filing"), ("100%", "UPI payments reconciled")],
    },
    CaseStudy {
        company: "Nova Clinics",
        industry: "Healthcare, Hyderabad",
        image: "/assets/case-studies/nova.jpg",
        challenge: "Long queues at the front desk and handwritten receipts patients kept losing.",
        outcome: "Counter billing on tablets with receipts delivered instantly on WhatsApp.",
        results: &[("45 s", "average billing time"), ("0", "lost receipts"), ("4.8★", "patient feedback score")],
    },
];

#[function_component]
pub fn CaseStudies() -> Html {
    let styles = use_theme_styles();

    html! {
        <div class="case-studies-page">
            <section class={classes!("py-20", "px-6", "text-center", styles.hero)}>
                <h1 class={classes!("text-4xl", "mb-4", styles.heading)}>{"Case studies"}</h1>
                <p class={classes!("max-w-2xl", "mx-auto", styles.text)}>
                    {"Real businesses, real numbers. See what changed after they switched to Easibill."}
                </p>
            </section>
            <section class={classes!("py-16", "px-6", "space-y-12", styles.section)}>
                { for CASE_STUDIES.iter().map(|study| html! {
                    <Reveal class={classes!("max-w-6xl", "mx-auto")}>
                        <article class={classes!("grid", "md:grid-cols-5", "gap-8", "p-8", styles.card)}>
                            <FallbackImage src={study.image} alt={study.company} class={classes!("md:col-span-2", "w-full", "h-64", "object-cover", "rounded-xl")} />
                            <div class="md:col-span-3">
                                <span class={classes!("px-3", "py-1", "text-xs", styles.badge)}>{ study.industry }</span>
                                <h2 class={classes!("text-2xl", "mt-3", "mb-4", styles.heading)}>{ study.company }</h2>
                                <h3 class={classes!("font-semibold", styles.heading)}>{"The challenge"}</h3>
                                <p class={classes!("mb-3", styles.text)}>{ study.challenge }</p>
                                <h3 class={classes!("font-semibold", styles.heading)}>{"What they did"}</h3>
                                <p class={classes!("mb-6", styles.text)}>{ study.outcome }</p>
                                <div class="grid grid-cols-3 gap-4">
                                    { for study.results.iter().map(|(figure, label)| html! {
                                        <div>
                                            <div class={classes!("text-2xl", "font-bold", styles.accent)}>{ *figure }</div>
                                            <div class={classes!("text-xs", styles.muted)}>{ *label }</div>
                                        </div>
                                    }) }
                                </div>
                            </div>
                        </article>
                    </Reveal>
                }) }
                <div class="text-center">
                    <Link<Route> to={Route::Lead} classes={classes!("px-6", "py-3", styles.button_primary)}>
                        {"Get results like these"}
                    </Link<Route>>
                </div>
            </section>
        </div>
    }
}
