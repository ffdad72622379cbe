use yew::prelude::*;
use yew_hooks::use_interval;

use super::reveal::use_in_view;
use crate::format::compact_indian;
use crate::theme::use_theme_styles;

const TICK_MS: u32 = 30;
const COUNT_DURATION_MS: u32 = 1_600;

/// Ease-out cubic count from 0 to `target` over `duration_ms`.
pub fn count_up_value(target: u64, elapsed_ms: u32, duration_ms: u32) -> u64 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    let t = elapsed_ms as f64 / duration_ms as f64;
    let eased = 1.0 - (1.0 - t).powi(3);
    ((target as f64) * eased).round() as u64
}

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub value: u64,
    pub label: AttrValue,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component]
pub fn MetricCard(props: &MetricCardProps) -> Html {
    let styles = use_theme_styles();
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), 0.4);
    let elapsed = use_state(|| 0u32);

    let running = visible && *elapsed < COUNT_DURATION_MS;
    {
        let elapsed = elapsed.clone();
        use_interval(
            move || elapsed.set((*elapsed + TICK_MS).min(COUNT_DURATION_MS)),
            if running { TICK_MS } else { 0 },
        );
    }

    let shown = count_up_value(props.value, *elapsed, COUNT_DURATION_MS);

    html! {
        <div ref={node} class={classes!("metric-card", "p-6", "text-center", styles.card)}>
            <div class={classes!("text-4xl", "font-extrabold", styles.accent)}>
                { &props.prefix }{ compact_indian(shown) }{ &props.suffix }
            </div>
            <div class={classes!("mt-2", "text-sm", styles.muted)}>{ &props.label }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_from_zero_to_target() {
        assert_eq!(count_up_value(1_000, 0, COUNT_DURATION_MS), 0);
        assert_eq!(count_up_value(1_000, COUNT_DURATION_MS, COUNT_DURATION_MS), 1_000);
        assert_eq!(count_up_value(1_000, COUNT_DURATION_MS * 2, COUNT_DURATION_MS), 1_000);
        assert_eq!(count_up_value(42, 10, 0), 42);
    }

    #[test]
    fn count_never_goes_backwards() {
        let mut last = 0;
        for elapsed in (0..=COUNT_DURATION_MS).step_by(TICK_MS as usize) {
            let value = count_up_value(25_000, elapsed, COUNT_DURATION_MS);
            assert!(value >= last);
            assert!(value <= 25_000);
            last = value;
        }
    }
}
