use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::buyer_analysis::BuyerAnalysis;
use crate::components::metric_card::MetricCard;
use crate::components::notification::DemoNotifications;
use crate::components::reveal::Reveal;
use crate::pages::features::{FeatureRoute, FEATURES};
use crate::pages::testimonials::{TestimonialCard, TESTIMONIALS};
use crate::theme::use_theme_styles;
use crate::Route;

const TESTIMONIAL_PREVIEW: usize = 3;

struct Metric {
    value: u64,
    label: &'static str,
    prefix: &'static str,
    suffix: &'static str,
}

static METRICS: [Metric; 4] = [
    Metric { value: 25_000, label: "businesses billing daily", prefix: "", suffix: "+" },
    Metric { value: 1_20_00_00_000, label: "invoiced every month", prefix: "₹", suffix: "+" },
    Metric { value: 18, label: "days faster collections", prefix: "", suffix: "" },
    Metric { value: 98, label: "reminders delivered on WhatsApp", prefix: "", suffix: "%" },
];

#[function_component]
pub fn Home() -> Html {
    let styles = use_theme_styles();

    html! {
        <div class="home-page">
            <section class={classes!("hero", "py-24", "px-6", styles.hero)}>
                <div class="max-w-6xl mx-auto grid md:grid-cols-2 gap-12 items-center">
                    <div>
                        <span class={classes!("px-3", "py-1", "text-xs", styles.badge)}>{"Made for Indian businesses"}</span>
                        <h1 class={classes!("text-4xl", "md:text-6xl", "mt-4", "mb-6", styles.heading)}>
                            {"Bill in seconds. Get paid on WhatsApp."}
                        </h1>
                        <p class={classes!("text-lg", "mb-8", styles.text)}>
                            {"GST invoices, payment links and automatic reminders in one simple app. Stop chasing payments and start growing."}
                        </p>
                        <div class="flex flex-wrap gap-4">
                            <Link<Route> to={Route::Lead} classes={classes!("px-6", "py-3", styles.button_primary)}>
                                {"Book a free demo"}
                            </Link<Route>>
                            <Link<FeatureRoute> to={FeatureRoute::Sandbox} classes={classes!("px-6", "py-3", styles.button_secondary)}>
                                {"Try a WhatsApp reminder"}
                            </Link<FeatureRoute>>
                        </div>
                    </div>
                    <div class="flex justify-center">
                        <DemoNotifications />
                    </div>
                </div>
            </section>

            <section class={classes!("py-16", "px-6", styles.section)}>
                <div class="max-w-6xl mx-auto grid grid-cols-2 md:grid-cols-4 gap-6">
                    { for METRICS.iter().map(|m| html! {
                        <MetricCard value={m.value} label={m.label} prefix={m.prefix} suffix={m.suffix} />
                    }) }
                </div>
            </section>

            <section class={classes!("py-16", "px-6", styles.section)}>
                <h2 class={classes!("text-3xl", "text-center", "mb-10", styles.heading)}>{"Everything between the invoice and the bank"}</h2>
                <div class="max-w-6xl mx-auto grid md:grid-cols-4 gap-6">
                    { for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                        <Reveal delay_ms={(i as u32) * 100}>
                            <Link<FeatureRoute> to={feature.route.clone()} classes={classes!("block", "p-6", "h-full", styles.card)}>
                                <div class="text-3xl mb-3">{ feature.icon }</div>
                                <h3 class={classes!("text-lg", "mb-2", styles.heading)}>{ feature.title }</h3>
                                <p class={classes!("text-sm", styles.text)}>{ feature.summary }</p>
                            </Link<FeatureRoute>>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class={classes!("py-16", "px-6", styles.section)}>
                <div class="max-w-4xl mx-auto">
                    <Reveal>
                        <BuyerAnalysis />
                    </Reveal>
                </div>
            </section>

            <section class={classes!("py-16", "px-6", styles.section)}>
                <h2 class={classes!("text-3xl", "text-center", "mb-10", styles.heading)}>{"What our customers say"}</h2>
                <div class="max-w-6xl mx-auto grid md:grid-cols-3 gap-6">
                    { for TESTIMONIALS.iter().take(TESTIMONIAL_PREVIEW).enumerate().map(|(i, t)| html! {
                        <Reveal delay_ms={(i as u32) * 100}>
                            <TestimonialCard testimonial={*t} />
                        </Reveal>
                    }) }
                </div>
                <div class="text-center mt-8">
                    <Link<Route> to={Route::Testimonials} classes={classes!(styles.accent)}>
                        {"Read more stories →"}
                    </Link<Route>>
                </div>
            </section>

            <section class={classes!("cta", "py-20", "px-6", "text-center", styles.hero)}>
                <h2 class={classes!("text-3xl", "mb-4", styles.heading)}>{"Ready to get paid faster?"}</h2>
                <p class={classes!("mb-8", styles.text)}>{"Set up in one afternoon. Free for your first 50 invoices every month."}</p>
                <div class="flex justify-center gap-4">
                    <Link<Route> to={Route::Lead} classes={classes!("px-6", "py-3", styles.button_primary)}>
                        {"Talk to us"}
                    </Link<Route>>
                    <Link<Route> to={Route::Pricing} classes={classes!("px-6", "py-3", styles.button_secondary)}>
                        {"See pricing"}
                    </Link<Route>>
                </div>
            </section>
        </div>
    }
}
