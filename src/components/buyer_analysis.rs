//! "Days to get paid" comparison chart on the home page.

use std::error::Error;

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::reveal::use_in_view;
use crate::theme::use_theme_styles;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuyerSegment {
    pub label: &'static str,
    pub days_before: u32,
    pub days_after: u32,
}

pub static SEGMENTS: [BuyerSegment; 4] = [
    BuyerSegment { label: "Retail", days_before: 24, days_after: 9 },
    BuyerSegment { label: "Wholesale", days_before: 47, days_after: 21 },
    BuyerSegment { label: "Services", days_before: 38, days_after: 14 },
    BuyerSegment { label: "Pharma", days_before: 31, days_after: 12 },
];

const CHART_WIDTH: u32 = 640;
const CHART_HEIGHT: u32 = 360;

/// Average reduction across segments with a baseline, in whole percent.
pub fn average_reduction_pct(segments: &[BuyerSegment]) -> u32 {
    let reductions: Vec<f64> = segments
        .iter()
        .filter(|s| s.days_before > 0)
        .map(|s| 1.0 - s.days_after as f64 / s.days_before as f64)
        .collect();
    if reductions.is_empty() {
        return 0;
    }
    let mean = reductions.iter().sum::<f64>() / reductions.len() as f64;
    (mean * 100.0).round().max(0.0) as u32
}

fn draw_chart(canvas: HtmlCanvasElement) -> Result<(), Box<dyn Error>> {
    canvas.set_width(CHART_WIDTH);
    canvas.set_height(CHART_HEIGHT);

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas backend unavailable")?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let max_days = SEGMENTS.iter().map(|s| s.days_before).max().unwrap_or(0);
    let n = SEGMENTS.len() as f64;

    let mut chart = ChartBuilder::on(&root)
        .margin(12)
        .caption("Average days to get paid", ("sans-serif", 20))
        .x_label_area_size(36)
        .y_label_area_size(44)
        .build_cartesian_2d(-0.5f64..(n - 0.5), 0u32..(max_days + max_days / 10 + 1))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(SEGMENTS.len())
        .x_label_formatter(&|x: &f64| {
            let i = x.round();
            if (x - i).abs() < 1e-6 && i >= 0.0 {
                SEGMENTS.get(i as usize).map(|s| s.label.to_string()).unwrap_or_default()
            } else {
                String::new()
            }
        })
        .y_desc("days")
        .draw()?;

    let before = RGBColor(148, 163, 184);
    let after = RGBColor(2, 132, 199);

    chart
        .draw_series(SEGMENTS.iter().enumerate().map(|(i, s)| {
            let x = i as f64;
            Rectangle::new([(x - 0.36, 0), (x - 0.02, s.days_before)], before.filled())
        }))?
        .label("Before Easibill")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], before.filled()));

    chart
        .draw_series(SEGMENTS.iter().enumerate().map(|(i, s)| {
            let x = i as f64;
            Rectangle::new([(x + 0.02, 0), (x + 0.36, s.days_after)], after.filled())
        }))?
        .label("With Easibill")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], after.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.9))
        .border_style(&BLACK.mix(0.2))
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    Ok(())
}

#[function_component]
pub fn BuyerAnalysis() -> Html {
    let styles = use_theme_styles();
    let section = use_node_ref();
    let canvas_ref = use_node_ref();
    let visible = use_in_view(section.clone(), 0.3);
    let failed = use_state(|| false);

    {
        let canvas_ref = canvas_ref.clone();
        let failed = failed.clone();
        use_effect_with_deps(
            move |visible| {
                if *visible {
                    if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                        if let Err(e) = draw_chart(canvas) {
                            log::warn!("Buyer analysis chart failed: {}", e);
                            failed.set(true);
                        }
                    }
                }
                || ()
            },
            visible,
        );
    }

    html! {
        <div ref={section} class={classes!("buyer-analysis", "p-6", styles.card)}>
            <h3 class={classes!("text-2xl", "mb-2", styles.heading)}>{"Get paid faster, whatever you sell"}</h3>
            <p class={classes!("mb-4", styles.text)}>
                { format!(
                    "Businesses on Easibill cut the time to collect payment by {}% on average.",
                    average_reduction_pct(&SEGMENTS)
                ) }
            </p>
            if *failed {
                <ul class={classes!("text-sm", styles.text)}>
                    { for SEGMENTS.iter().map(|s| html! {
                        <li>{ format!("{}: {} → {} days", s.label, s.days_before, s.days_after) }</li>
                    }) }
                </ul>
            } else {
                <canvas ref={canvas_ref} width={CHART_WIDTH.to_string()} height={CHART_HEIGHT.to_string()} class="w-full h-auto rounded-lg"></canvas>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_is_averaged_per_segment() {
        let segments = [
            BuyerSegment { label: "a", days_before: 10, days_after: 5 },
            BuyerSegment { label: "b", days_before: 20, days_after: 5 },
        ];
        assert_eq!(average_reduction_pct(&segments), 63);
        assert_eq!(average_reduction_pct(&[]), 0);
    }

    #[test]
    fn segments_without_a_baseline_are_left_out() {
        let segments = [
            BuyerSegment { label: "a", days_before: 10, days_after: 5 },
            BuyerSegment { label: "new", days_before: 0, days_after: 3 },
        ];
        assert_eq!(average_reduction_pct(&segments), 50);
        assert_eq!(
            average_reduction_pct(&[BuyerSegment { label: "new", days_before: 0, days_after: 0 }]),
            0
        );
    }

    #[test]
    fn demo_data_shows_improvement() {
        assert!(SEGMENTS.iter().all(|s| s.days_after < s.days_before));
        assert!(average_reduction_pct(&SEGMENTS) > 50);
    }
}
