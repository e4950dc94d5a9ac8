use leptos::prelude::*;

use crate::shared::number_format::format_number_int;

/// Plain SVG bar chart. Styling comes from the stylesheet
/// (`.chart-bar` fill); the component only computes geometry.
#[component]
pub fn BarChart(
    /// (label, value) pairs, already in display order
    points: Vec<(String, f64)>,
    #[prop(default = 180)] height: u32,
) -> impl IntoView {
    const BAR_WIDTH: f64 = 36.0;
    const BAR_GAP: f64 = 14.0;
    const LABEL_BAND: f64 = 18.0;

    let max = points
        .iter()
        .map(|(_, v)| *v)
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let plot_height = height as f64 - LABEL_BAND;
    let width = points.len() as f64 * (BAR_WIDTH + BAR_GAP) + BAR_GAP;

    let bars = points
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let x = BAR_GAP + i as f64 * (BAR_WIDTH + BAR_GAP);
            let bar_height = (value.max(0.0) / max * (plot_height - 4.0)).max(0.0);
            let y = plot_height - bar_height;
            let label_x = x + BAR_WIDTH / 2.0;
            let label_y = plot_height + 14.0;
            view! {
                <g>
                    <title>{format!("{}: {}", label, format_number_int(value))}</title>
                    <rect
                        class="chart-bar"
                        x=x
                        y=y
                        width=BAR_WIDTH
                        height=bar_height
                        rx="2"
                    />
                    <text class="chart-label" x=label_x y=label_y text-anchor="middle">
                        {label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg
            class="chart chart--bar"
            viewBox=format!("0 0 {} {}", width, height)
            preserveAspectRatio="xMinYMid meet"
        >
            {bars}
        </svg>
    }
}

/// Horizontal share bars for the cost breakdown (percent of total).
#[component]
pub fn ShareBars(parts: Vec<(&'static str, f64)>) -> impl IntoView {
    view! {
        <div class="share-bars">
            {parts.into_iter().map(|(label, share)| {
                view! {
                    <div class="share-bars__row">
                        <span class="share-bars__label">{label}</span>
                        <div class="share-bars__track">
                            <div
                                class="share-bars__fill"
                                style:width=format!("{:.1}%", share)
                            ></div>
                        </div>
                        <span class="share-bars__value">{format!("{:.1} %", share)}</span>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
