use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::components::reveal::Reveal;
use crate::sandbox::form::SandboxForm;
use crate::seo::{feature_meta, Seo};
use crate::theme::use_theme_styles;
use crate::Route;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum FeatureRoute {
    #[at("/features")]
    Overview,
    #[at("/features/invoicing")]
    Invoicing,
    #[at("/features/payments")]
    Payments,
    #[at("/features/whatsapp")]
    WhatsApp,
    #[at("/features/whatsapp/sandbox")]
    Sandbox,
    #[at("/features/reports")]
    Reports,
    #[not_found]
    #[at("/features/404")]
    NotFound,
}

pub struct FeatureInfo {
    pub route: FeatureRoute,
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub points: &'static [&'static str],
    pub image: &'static str,
}

pub static FEATURES: [FeatureInfo; 4] = [
    FeatureInfo {
        route: FeatureRoute::Invoicing,
        icon: "🧾",
        title: "GST invoicing in seconds",
        summary: "Create GST-compliant invoices, quotations and credit notes from any device.",
        points: &[
            "Auto-calculated CGST, SGST and IGST",
            "E-invoice and e-way bill ready",
            "Your logo, your terms, your template",
            "Bulk invoices from a spreadsheet",
        ],
        image: "/assets/features/invoicing.png",
    },
    FeatureInfo {
        route: FeatureRoute::Payments,
        icon: "💳",
        title: "Collect payments online",
        summary: "Every invoice carries a UPI and card payment link that reconciles itself.",
        points: &[
            "UPI, cards and net banking",
            "Partial payments and advances",
            "Automatic reconciliation against invoices",
        ],
        image: "/assets/features/payments.png",
    },
    FeatureInfo {
        route: FeatureRoute::WhatsApp,
        icon: "💬",
        title: "Invoices and reminders on WhatsApp",
        summary: "Send invoices where your customers already are and follow up without awkward calls.",
        points: &[
            "One-tap invoice sharing",
            "Scheduled, polite payment reminders",
            "Delivery and read status on every message",
        ],
        image: "/assets/features/whatsapp.png",
    },
    FeatureInfo {
        route: FeatureRoute::Reports,
        icon: "📊",
        title: "Reports that update as you bill",
        summary: "Know what you sold, what you are owed and what you owe the taxman.",
        points: &[
            "Sales, outstanding and ageing reports",
            "GSTR-1 and GSTR-3B summaries",
            "Export to Excel or your accountant",
        ],
        image: "/assets/features/reports.png",
    },
];

fn feature_info(route: &FeatureRoute) -> Option<&'static FeatureInfo> {
    FEATURES.iter().find(|f| &f.route == route)
}

pub fn switch_features(route: FeatureRoute) -> Html {
    info!("Rendering feature page {}", route.to_path());
    let meta = feature_meta(&route);
    let page = match route {
        FeatureRoute::Overview => html! { <FeaturesOverview /> },
        FeatureRoute::Sandbox => html! { <SandboxPage /> },
        FeatureRoute::NotFound => html! { <Redirect<Route> to={Route::NotFound} /> },
        other => html! { <FeatureDetail route={other} /> },
    };
    html! {
        <>
            <Seo {meta} />
            { page }
        </>
    }
}

#[function_component]
pub fn FeaturesOverview() -> Html {
    let styles = use_theme_styles();

    html! {
        <div class="features-page">
            <section class={classes!("py-20", "px-6", "text-center", styles.hero)}>
                <h1 class={classes!("text-4xl", "md:text-5xl", "mb-4", styles.heading)}>{"Everything you need to bill and get paid"}</h1>
                <p class={classes!("max-w-2xl", "mx-auto", "text-lg", styles.text)}>
                    {"One app for invoices, payments, reminders and reports. No spreadsheets, no chasing."}
                </p>
            </section>
            <section class={classes!("py-16", "px-6", styles.section)}>
                <div class="max-w-6xl mx-auto grid md:grid-cols-2 gap-8">
                    { for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                        <Reveal delay_ms={(i as u32) * 120}>
                            <Link<FeatureRoute> to={feature.route.clone()} classes={classes!("block", "p-8", "h-full", styles.card)}>
                                <div class="text-4xl mb-4">{ feature.icon }</div>
                                <h2 class={classes!("text-2xl", "mb-2", styles.heading)}>{ feature.title }</h2>
                                <p class={styles.text}>{ feature.summary }</p>
                                <span class={classes!("inline-block", "mt-4", styles.accent)}>{"Learn more →"}</span>
                            </Link<FeatureRoute>>
                        </Reveal>
                    }) }
                </div>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureDetailProps {
    pub route: FeatureRoute,
}

#[function_component]
pub fn FeatureDetail(props: &FeatureDetailProps) -> Html {
    let styles = use_theme_styles();
    let Some(feature) = feature_info(&props.route) else {
        return html! { <Redirect<Route> to={Route::NotFound} /> };
    };

    html! {
        <div class="feature-detail">
            <section class={classes!("py-20", "px-6", styles.hero)}>
                <div class="max-w-6xl mx-auto grid md:grid-cols-2 gap-12 items-center">
                    <Reveal>
                        <Link<FeatureRoute> to={FeatureRoute::Overview} classes={classes!("text-sm", styles.muted)}>
                            {"← All features"}
                        </Link<FeatureRoute>>
                        <h1 class={classes!("text-4xl", "mt-4", "mb-4", styles.heading)}>
                            <span class="mr-3">{ feature.icon }</span>{ feature.title }
                        </h1>
                        <p class={classes!("text-lg", "mb-6", styles.text)}>{ feature.summary }</p>
                        <ul class="space-y-2 mb-8">
                            { for feature.points.iter().map(|point| html! {
                                <li class={styles.text}><span class={classes!("mr-2", styles.accent)}>{"✓"}</span>{ *point }</li>
                            }) }
                        </ul>
                        <div class="flex gap-4">
                            <Link<Route> to={Route::Lead} classes={classes!("px-6", "py-3", styles.button_primary)}>
                                {"Book a demo"}
                            </Link<Route>>
                            if feature.route == FeatureRoute::WhatsApp {
                                <Link<FeatureRoute> to={FeatureRoute::Sandbox} classes={classes!("px-6", "py-3", styles.button_secondary)}>
                                    {"Try the sandbox"}
                                </Link<FeatureRoute>>
                            }
                        </div>
                    </Reveal>
                    <Reveal delay_ms={150}>
                        <FallbackImage src={feature.image} alt={feature.title} class={classes!("w-full", "rounded-2xl", "min-h-64")} />
                    </Reveal>
                </div>
            </section>
        </div>
    }
}

#[function_component]
pub fn SandboxPage() -> Html {
    let styles = use_theme_styles();

    html! {
        <section class={classes!("py-20", "px-6", styles.hero)}>
            <div class="max-w-5xl mx-auto grid md:grid-cols-2 gap-12 items-start">
                <div>
                    <span class={classes!("px-3", "py-1", "text-xs", styles.badge)}>{"Sandbox"}</span>
                    <h1 class={classes!("text-4xl", "mt-4", "mb-4", styles.heading)}>{"See a WhatsApp reminder for yourself"}</h1>
                    <p class={classes!("mb-4", styles.text)}>
                        {"Enter your name and WhatsApp number and we'll send the same payment reminder your customers receive, with a working payment link."}
                    </p>
                    <p class={classes!("text-sm", styles.muted)}>
                        {"Limited to 5 test messages per number per hour. Signed-in users get their own sender ID; "}
                        <Link<Route> to={Route::Login} classes={styles.accent}>{"sign in"}</Link<Route>>
                        {" first if you have an account."}
                    </p>
                </div>
                <SandboxForm />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_detail_feature_has_a_route() {
        for feature in FEATURES.iter() {
            assert!(feature_info(&feature.route).is_some());
            assert!(!feature.points.is_empty());
            assert!(feature.route.to_path().starts_with("/features/"));
        }
        assert!(feature_info(&FeatureRoute::Overview).is_none());
    }

    #[test]
    fn sandbox_lives_under_whatsapp() {
        assert_eq!(FeatureRoute::Sandbox.to_path(), "/features/whatsapp/sandbox");
        assert_eq!(
            FeatureRoute::recognize("/features/payments"),
            Some(FeatureRoute::Payments)
        );
    }
}
