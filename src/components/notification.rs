use yew::prelude::*;
use yew_hooks::use_interval;

use crate::format::inr;
use crate::theme::use_theme_styles;

const ROTATE_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemoNotification {
    pub title: &'static str,
    pub customer: &'static str,
    pub amount: u64,
    pub icon: &'static str,
}

pub static DEMO_NOTIFICATIONS: [DemoNotification; 4] = [
    DemoNotification { title: "Payment received", customer: "Sharma Electronics", amount: 18_450, icon: "💸" },
    DemoNotification { title: "Invoice viewed", customer: "Green Leaf Cafe", amount: 4_200, icon: "👀" },
    DemoNotification { title: "Reminder delivered", customer: "Patel Distributors", amount: 1_26_000, icon: "📨" },
    DemoNotification { title: "Payment received", customer: "Nova Clinics", amount: 9_999, icon: "💸" },
];

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Rotating toast that mimics what an Easibill user sees on their phone.
#[function_component]
pub fn DemoNotifications() -> Html {
    let styles = use_theme_styles();
    let index = use_state(|| 0usize);

    {
        let index = index.clone();
        use_interval(
            move || index.set(next_index(*index, DEMO_NOTIFICATIONS.len())),
            ROTATE_MS,
        );
    }

    let note = DEMO_NOTIFICATIONS[*index % DEMO_NOTIFICATIONS.len()];

    html! {
        <div class={classes!("demo-notification", "flex", "items-center", "gap-3", "p-4", "animate-slide-in", styles.card)}
             key={*index}
             role="status"
             aria-live="polite">
            <span class="text-2xl">{ note.icon }</span>
            <div>
                <div class={classes!("text-sm", "font-semibold", styles.heading)}>{ note.title }</div>
                <div class={classes!("text-sm", styles.muted)}>
                    { format!("{} · {}", note.customer, inr(note.amount)) }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_around() {
        assert_eq!(next_index(0, 4), 1);
        assert_eq!(next_index(3, 4), 0);
        assert_eq!(next_index(5, 0), 0);
    }
}
