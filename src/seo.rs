//! Per-route document metadata.

use log::debug;
use web_sys::{window, Document, Element};
use yew::prelude::*;

use crate::config::SITE_ORIGIN;
use crate::pages::features::FeatureRoute;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeoMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub path: &'static str,
}

const KEYWORDS: &str = "GST billing software, invoicing app, WhatsApp invoices, payment reminders, Easibill";

pub fn meta_for(route: &Route) -> SeoMeta {
    match route {
        Route::Home => SeoMeta {
            title: "Easibill | GST Billing & Invoicing Software for Growing Businesses",
            description: "Create GST invoices in seconds, collect payments faster with WhatsApp reminders and track every rupee in one place.",
            keywords: KEYWORDS,
            path: "/",
        },
        Route::FeaturesRoot | Route::Features => feature_meta(&FeatureRoute::Overview),
        Route::Pricing => SeoMeta {
            title: "Pricing | Easibill",
            description: "Simple plans for every stage of your business. Start free, upgrade when you grow, save 20% with yearly billing.",
            keywords: "Easibill pricing, billing software price, invoicing plans",
            path: "/pricing",
        },
        Route::Testimonials => SeoMeta {
            title: "Customer Stories | Easibill",
            description: "Hear from retailers, distributors and service firms who get paid faster with Easibill.",
            keywords: "Easibill reviews, billing software testimonials",
            path: "/testimonials",
        },
        Route::Industries => SeoMeta {
            title: "Industries | Easibill",
            description: "Billing workflows tuned for retail, wholesale, pharmacy, restaurants and professional services.",
            keywords: "retail billing, wholesale invoicing, pharmacy billing software",
            path: "/industries",
        },
        Route::CaseStudies => SeoMeta {
            title: "Case Studies | Easibill",
            description: "How businesses cut collection time and paperwork after moving their billing to Easibill.",
            keywords: "Easibill case studies, faster payment collection",
            path: "/case-studies",
        },
        Route::Lead | Route::Contact | Route::Demo => SeoMeta {
            title: "Book a Demo | Easibill",
            description: "Tell us a little about your business and our team will walk you through Easibill.",
            keywords: "Easibill demo, contact Easibill sales",
            path: "/lead",
        },
        Route::Login => SeoMeta {
            title: "Sign in | Easibill",
            description: "Sign in to your Easibill account.",
            keywords: KEYWORDS,
            path: "/login",
        },
        Route::NotFound => SeoMeta {
            title: "Page not found | Easibill",
            description: "The page you were looking for does not exist.",
            keywords: KEYWORDS,
            path: "/404",
        },
    }
}

pub fn feature_meta(route: &FeatureRoute) -> SeoMeta {
    match route {
        FeatureRoute::Overview | FeatureRoute::NotFound => SeoMeta {
            title: "Features | Easibill",
            description: "GST invoicing, online payments, WhatsApp reminders and real-time reports in a single billing app.",
            keywords: KEYWORDS,
            path: "/features",
        },
        FeatureRoute::Invoicing => SeoMeta {
            title: "GST Invoicing | Easibill",
            description: "Professional GST-compliant invoices, quotations and credit notes from your phone or desktop.",
            keywords: "GST invoice generator, e-invoice, quotation software",
            path: "/features/invoicing",
        },
        FeatureRoute::Payments => SeoMeta {
            title: "Online Payments | Easibill",
            description: "Add UPI and card payment links to every invoice and reconcile collections automatically.",
            keywords: "UPI payment links, invoice payments, payment reconciliation",
            path: "/features/payments",
        },
        FeatureRoute::WhatsApp => SeoMeta {
            title: "WhatsApp Invoices & Reminders | Easibill",
            description: "Send invoices and polite payment reminders on WhatsApp with one tap.",
            keywords: "WhatsApp invoice, WhatsApp payment reminder",
            path: "/features/whatsapp",
        },
        FeatureRoute::Sandbox => SeoMeta {
            title: "WhatsApp Sandbox | Easibill",
            description: "Send yourself a sample Easibill payment reminder on WhatsApp.",
            keywords: "WhatsApp reminder demo, Easibill sandbox",
            path: "/features/whatsapp/sandbox",
        },
        FeatureRoute::Reports => SeoMeta {
            title: "Business Reports | Easibill",
            description: "Sales, outstanding and GST reports that update as you bill.",
            keywords: "GST reports, sales reports, outstanding payments report",
            path: "/features/reports",
        },
    }
}

fn upsert_head_element(
    document: &Document,
    selector: &str,
    tag: &str,
    attrs: &[(&str, &str)],
) -> Option<Element> {
    let element = match document.query_selector(selector).ok().flatten() {
        Some(el) => el,
        None => {
            let el = document.create_element(tag).ok()?;
            document.head()?.append_child(&el).ok()?;
            el
        }
    };
    for (name, value) in attrs {
        let _ = element.set_attribute(name, value);
    }
    Some(element)
}

/// Writes `meta` into `<head>`, creating tags that are not there yet.
pub fn apply(meta: &SeoMeta) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(meta.title);
    let canonical = format!("{}{}", SITE_ORIGIN, meta.path);

    upsert_head_element(
        &document,
        "meta[name='description']",
        "meta",
        &[("name", "description"), ("content", meta.description)],
    );
    upsert_head_element(
        &document,
        "meta[name='keywords']",
        "meta",
        &[("name", "keywords"), ("content", meta.keywords)],
    );
    upsert_head_element(
        &document,
        "meta[property='og:title']",
        "meta",
        &[("property", "og:title"), ("content", meta.title)],
    );
    upsert_head_element(
        &document,
        "meta[property='og:description']",
        "meta",
        &[("property", "og:description"), ("content", meta.description)],
    );
    upsert_head_element(
        &document,
        "link[rel='canonical']",
        "link",
        &[("rel", "canonical"), ("href", canonical.as_str())],
    );
    debug!("SEO metadata applied for {}", meta.path);
}

#[derive(Properties, PartialEq)]
pub struct SeoProps {
    pub meta: SeoMeta,
}

#[function_component(Seo)]
pub fn seo(props: &SeoProps) -> Html {
    use_effect_with_deps(
        |meta| {
            apply(meta);
            || ()
        },
        props.meta,
    );
    html! {}
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const ROUTES: [Route; 9] = [
        Route::Home,
        Route::FeaturesRoot,
        Route::Pricing,
        Route::Testimonials,
        Route::Industries,
        Route::CaseStudies,
        Route::Lead,
        Route::Login,
        Route::NotFound,
    ];

    #[test]
    fn every_page_has_its_own_title() {
        let titles: HashSet<_> = ROUTES.iter().map(|r| meta_for(r).title).collect();
        assert_eq!(titles.len(), ROUTES.len());
        for route in ROUTES.iter() {
            let meta = meta_for(route);
            assert!(meta.title.contains("Easibill"));
            assert!(!meta.description.is_empty());
            assert!(meta.path.starts_with('/'));
        }
    }

    #[test]
    fn redirect_routes_share_lead_metadata() {
        assert_eq!(meta_for(&Route::Contact), meta_for(&Route::Lead));
        assert_eq!(meta_for(&Route::Demo), meta_for(&Route::Lead));
    }

    #[test]
    fn feature_pages_have_distinct_paths() {
        let routes = [
            FeatureRoute::Overview,
            FeatureRoute::Invoicing,
            FeatureRoute::Payments,
            FeatureRoute::WhatsApp,
            FeatureRoute::Sandbox,
            FeatureRoute::Reports,
        ];
        let paths: HashSet<_> = routes.iter().map(|r| feature_meta(r).path).collect();
        assert_eq!(paths.len(), routes.len());
        assert_eq!(feature_meta(&FeatureRoute::Sandbox).path, "/features/whatsapp/sandbox");
    }
}
