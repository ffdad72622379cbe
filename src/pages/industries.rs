use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::theme::use_theme_styles;
use crate::Route;

struct Industry {
    icon: &'static str,
    name: &'static str,
    pitch: &'static str,
    highlights: &'static [&'static str],
}

static INDUSTRIES: [Industry; 6] = [
    Industry {
        icon: "🛍️",
        name: "Retail",
        pitch: "Fast counter billing with barcode support and instant WhatsApp receipts.",
        highlights: &["Barcode and thermal printing", "Daily cash register close"],
    },
    Industry {
        icon: "🚚",
        name: "Wholesale & Distribution",
        pitch: "Bulk invoices, credit limits and reminders that keep outstanding in check.",
        highlights: &["Customer-wise price lists", "Credit limit alerts"],
    },
    Industry {
        icon: "💊",
        name: "Pharmacy",
        pitch: "Batch and expiry tracking alongside GST billing.",
        highlights: &["Batch and expiry on every line", "Schedule H register"],
    },
    Industry {
        icon: "🍽️",
        name: "Restaurants & Cafes",
        pitch: "Table and takeaway bills, split payments and daily sales summaries.",
        highlights: &["KOT printing", "UPI at the table"],
    },
    Industry {
        icon: "🧑‍💼",
        name: "Professional Services",
        pitch: "Retainers, milestone invoices and TDS handling for agencies and consultants.",
        highlights: &["Recurring invoices", "TDS receivable tracking"],
    },
    Industry {
        icon: "🏭",
        name: "Manufacturing",
        pitch: "E-way bills, job work challans and purchase tracking in one place.",
        highlights: &["E-way bill generation", "Raw material purchase logs"],
    },
];

#[function_component]
pub fn Industries() -> Html {
    let styles = use_theme_styles();

    html! {
        <div class="industries-page">
            <section class={classes!("py-20", "px-6", "text-center", styles.hero)}>
                <h1 class={classes!("text-4xl", "mb-4", styles.heading)}>{"Built for the way you do business"}</h1>
                <p class={classes!("max-w-2xl", "mx-auto", styles.text)}>
                    {"Easibill adapts to your trade, from a single counter to a network of distributors."}
                </p>
            </section>
            <section class={classes!("py-16", "px-6", styles.section)}>
                <div class="max-w-6xl mx-auto grid md:grid-cols-3 gap-6">
                    { for INDUSTRIES.iter().enumerate().map(|(i, industry)| html! {
                        <Reveal delay_ms={(i as u32 % 3) * 100}>
                            <div class={classes!("p-6", "h-full", styles.card)}>
                                <div class="text-4xl mb-3">{ industry.icon }</div>
                                <h2 class={classes!("text-xl", "mb-2", styles.heading)}>{ industry.name }</h2>
                                <p class={classes!("mb-4", styles.text)}>{ industry.pitch }</p>
                                <ul class="space-y-1">
                                    { for industry.highlights.iter().map(|h| html! {
                                        <li class={classes!("text-sm", styles.muted)}>{"• "}{ *h }</li>
                                    }) }
                                </ul>
                            </div>
                        </Reveal>
                    }) }
                </div>
                <div class="text-center mt-12">
                    <Link<Route> to={Route::Lead} classes={classes!("px-6", "py-3", styles.button_primary)}>
                        {"See Easibill for your industry"}
                    </Link<Route>>
                </div>
            </section>
        </div>
    }
}
