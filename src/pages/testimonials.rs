use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::theme::use_theme_styles;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub rating: u8,
}

pub static TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        quote: "We used to spend Saturday mornings chasing payments. Now the WhatsApp reminders do it and money comes in before Monday.",
        author: "Rakesh Sharma",
        role: "Owner",
        company: "Sharma Electronics, Jaipur",
        rating: 5,
    },
    Testimonial {
        quote: "GST filing used to be a two-day ordeal with my CA. With the GSTR summaries it is a phone call.",
        author: "Meera Iyer",
        role: "Founder",
        company: "Green Leaf Cafe, Bengaluru",
        rating: 5,
    },
    Testimonial {
        quote: "Our outstanding went from 60 days to under 25. The payment links alone paid for the subscription.",
        author: "Harsh Patel",
        role: "Director",
        company: "Patel Distributors, Surat",
        rating: 5,
    },
    Testimonial {
        quote: "Setting up took one afternoon. Our front desk bills patients in under a minute now.",
        author: "Dr. Ananya Rao",
        role: "Administrator",
        company: "Nova Clinics, Hyderabad",
        rating: 4,
    },
    Testimonial {
        quote: "The reports tell me which customers to call and which products to restock. I open the app every morning.",
        author: "Imran Qureshi",
        role: "Partner",
        company: "Qureshi Hardware, Lucknow",
        rating: 5,
    },
    Testimonial {
        quote: "Switching from our desktop software was painless. Support imported five years of invoices for us.",
        author: "Kavita Joshi",
        role: "Accounts Head",
        company: "Joshi Textiles, Pune",
        rating: 4,
    },
];

pub fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: Testimonial,
}

#[function_component]
pub fn TestimonialCard(props: &TestimonialCardProps) -> Html {
    let styles = use_theme_styles();
    let t = props.testimonial;

    html! {
        <figure class={classes!("testimonial-card", "p-6", "h-full", "flex", "flex-col", styles.card)}>
            <div class={classes!("mb-3", styles.accent)} aria-label={format!("{} out of 5", t.rating)}>{ stars(t.rating) }</div>
            <blockquote class={classes!("flex-1", "mb-4", styles.text)}>{ format!("“{}”", t.quote) }</blockquote>
            <figcaption>
                <div class={classes!("font-semibold", styles.heading)}>{ t.author }</div>
                <div class={classes!("text-sm", styles.muted)}>{ format!("{}, {}", t.role, t.company) }</div>
            </figcaption>
        </figure>
    }
}

#[function_component]
pub fn Testimonials() -> Html {
    let styles = use_theme_styles();

    html! {
        <div class="testimonials-page">
            <section class={classes!("py-20", "px-6", "text-center", styles.hero)}>
                <h1 class={classes!("text-4xl", "mb-4", styles.heading)}>{"Loved by businesses across India"}</h1>
                <p class={classes!("max-w-2xl", "mx-auto", styles.text)}>
                    {"Retailers, distributors, clinics and cafes use Easibill to bill faster and get paid sooner."}
                </p>
            </section>
            <section class={classes!("py-16", "px-6", styles.section)}>
                <div class="max-w-6xl mx-auto grid md:grid-cols-3 gap-6">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                        <Reveal delay_ms={(i as u32 % 3) * 100}>
                            <TestimonialCard testimonial={*t} />
                        </Reveal>
                    }) }
                </div>
                <div class="text-center mt-12">
                    <Link<Route> to={Route::CaseStudies} classes={classes!("px-6", "py-3", styles.button_secondary)}>
                        {"Read the case studies"}
                    </Link<Route>>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_are_clamped_to_five() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(9), "★★★★★");
        assert_eq!(stars(0), "☆☆☆☆☆");
    }
}
