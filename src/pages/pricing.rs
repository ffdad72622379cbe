use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::format::inr;
use crate::theme::use_theme_styles;
use crate::Route;

/// Yearly plans are billed at 80% of twelve monthly payments.
const YEARLY_DISCOUNT_PCT: u64 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub tagline: &'static str,
    /// INR per month when billed monthly; 0 means free.
    pub monthly_inr: u64,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

pub static PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "Starter",
        tagline: "For freelancers and new shops",
        monthly_inr: 0,
        features: &["50 invoices a month", "1 user", "GST invoices", "WhatsApp sharing"],
        highlighted: false,
    },
    PricingPlan {
        name: "Growth",
        tagline: "For growing teams that bill every day",
        monthly_inr: 499,
        features: &[
            "Unlimited invoices",
            "3 users",
            "Payment links and auto-reconciliation",
            "Automated WhatsApp reminders",
            "GSTR-1 and GSTR-3B summaries",
        ],
        highlighted: true,
    },
    PricingPlan {
        name: "Business",
        tagline: "For multi-branch businesses",
        monthly_inr: 1_499,
        features: &[
            "Everything in Growth",
            "Unlimited users and branches",
            "E-invoice and e-way bill",
            "Inventory and purchase tracking",
            "Priority support",
        ],
        highlighted: false,
    },
];

/// Amount charged per billing period.
pub fn price_for(plan: &PricingPlan, cycle: BillingCycle) -> u64 {
    match cycle {
        BillingCycle::Monthly => plan.monthly_inr,
        BillingCycle::Yearly => plan.monthly_inr * 12 * (100 - YEARLY_DISCOUNT_PCT) / 100,
    }
}

pub fn yearly_savings(plan: &PricingPlan) -> u64 {
    plan.monthly_inr * 12 - price_for(plan, BillingCycle::Yearly)
}

#[function_component]
pub fn Pricing() -> Html {
    let styles = use_theme_styles();
    let cycle = use_state(|| BillingCycle::Monthly);

    let set_cycle = |target: BillingCycle| {
        let cycle = cycle.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Pricing cycle switched to {:?}", target);
            cycle.set(target);
        })
    };
    let toggle_class = |target: BillingCycle| {
        if *cycle == target {
            classes!("px-4", "py-2", styles.button_primary)
        } else {
            classes!("px-4", "py-2", styles.muted)
        }
    };

    html! {
        <div class="pricing-page">
            <section class={classes!("py-20", "px-6", "text-center", styles.hero)}>
                <h1 class={classes!("text-4xl", "mb-4", styles.heading)}>{"Simple, honest pricing"}</h1>
                <p class={classes!("max-w-xl", "mx-auto", "mb-8", styles.text)}>
                    {"Start free. Upgrade when your business needs more. Prices exclude GST."}
                </p>
                <div class={classes!("inline-flex", "p-1", "gap-1", styles.card)}>
                    <button class={toggle_class(BillingCycle::Monthly)} onclick={set_cycle(BillingCycle::Monthly)}>
                        {"Monthly"}
                    </button>
                    <button class={toggle_class(BillingCycle::Yearly)} onclick={set_cycle(BillingCycle::Yearly)}>
                        { format!("Yearly (save {}%)", YEARLY_DISCOUNT_PCT) }
                    </button>
                </div>
            </section>
            <section class={classes!("py-16", "px-6", styles.section)}>
                <div class="max-w-6xl mx-auto grid md:grid-cols-3 gap-8">
                    { for PLANS.iter().enumerate().map(|(i, plan)| {
                        let price = price_for(plan, *cycle);
                        let period = match *cycle {
                            BillingCycle::Monthly => "/month",
                            BillingCycle::Yearly => "/year",
                        };
                        html! {
                            <Reveal delay_ms={(i as u32) * 120}>
                                <div class={classes!(
                                    "pricing-card", "p-8", "h-full", "flex", "flex-col", styles.card,
                                    plan.highlighted.then_some("ring-2 ring-offset-2 scale-105")
                                )}>
                                    if plan.highlighted {
                                        <span class={classes!("self-start", "px-3", "py-1", "text-xs", "mb-4", styles.badge)}>{"Most popular"}</span>
                                    }
                                    <h2 class={classes!("text-2xl", styles.heading)}>{ plan.name }</h2>
                                    <p class={classes!("text-sm", "mb-6", styles.muted)}>{ plan.tagline }</p>
                                    <div class="mb-6">
                                        if price == 0 {
                                            <span class={classes!("text-4xl", styles.heading)}>{"Free"}</span>
                                        } else {
                                            <span class={classes!("text-4xl", styles.heading)}>{ inr(price) }</span>
                                            <span class={styles.muted}>{ period }</span>
                                        }
                                        if *cycle == BillingCycle::Yearly && yearly_savings(plan) > 0 {
                                            <div class={classes!("text-sm", "mt-1", styles.accent)}>
                                                { format!("You save {} a year", inr(yearly_savings(plan))) }
                                            </div>
                                        }
                                    </div>
                                    <ul class="space-y-2 mb-8 flex-1">
                                        { for plan.features.iter().map(|f| html! {
                                            <li class={styles.text}><span class={classes!("mr-2", styles.accent)}>{"✓"}</span>{ *f }</li>
                                        }) }
                                    </ul>
                                    <Link<Route>
                                        to={Route::Lead}
                                        classes={classes!("text-center", "py-3",
                                            if plan.highlighted { styles.button_primary } else { styles.button_secondary })}
                                    >
                                        { if price == 0 { "Start free" } else { "Talk to sales" } }
                                    </Link<Route>>
                                </div>
                            </Reveal>
                        }
                    }) }
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yearly_price_is_discounted() {
        let growth = &PLANS[1];
        assert_eq!(price_for(growth, BillingCycle::Monthly), 499);
        assert_eq!(price_for(growth, BillingCycle::Yearly), 4_790);
        assert_eq!(yearly_savings(growth), 1_198);
        let business = &PLANS[2];
        assert_eq!(price_for(business, BillingCycle::Yearly), 14_390);
    }

    #[test]
    fn free_plan_stays_free() {
        assert_eq!(price_for(&PLANS[0], BillingCycle::Yearly), 0);
        assert_eq!(yearly_savings(&PLANS[0]), 0);
    }

    #[test]
    fn exactly_one_plan_is_highlighted() {
        assert_eq!(PLANS.iter().filter(|p| p.highlighted).count(), 1);
    }
}
