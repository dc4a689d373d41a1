use dioxus::prelude::*;

use crate::dashboard::geometry::pie_segments;
use crate::dashboard::legend::{record_fill, ChartLegend, ChartTooltip, EmptyChart};
use crate::dashboard::metrics::ChartRecord;

const PIE_SIZE: f64 = 220.0;

/// Pie chart, or a donut when `inner_radius` is positive.
#[component]
pub fn PieChart(
    records: Vec<ChartRecord>,
    #[props(default = 0.0)] inner_radius: f64,
    #[props(default = 100.0)] outer_radius: f64,
) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);

    if records.is_empty() {
        return rsx! { EmptyChart {} };
    }

    let center = PIE_SIZE / 2.0;
    let outer = outer_radius.clamp(1.0, center);
    let inner = inner_radius.clamp(0.0, outer - 1.0);
    let values: Vec<u64> = records.iter().map(|r| r.value).collect();
    let active = hovered();

    let slices: Vec<(usize, String, String, &'static str)> =
        pie_segments(&values, center, center, inner, outer)
            .into_iter()
            .map(|segment| {
                let class = if active == Some(segment.index) {
                    "chart__slice chart__slice--active"
                } else {
                    "chart__slice"
                };
                (
                    segment.index,
                    segment.path,
                    record_fill(&records[segment.index]),
                    class,
                )
            })
            .collect();

    let tooltip = active.and_then(|i| records.get(i).cloned());
    let kind = if inner > 0.0 { "chart--donut" } else { "chart--pie" };

    rsx! {
        div { class: "chart {kind}",
            svg {
                class: "chart__svg",
                view_box: "0 0 {PIE_SIZE} {PIE_SIZE}",
                for (index, d, fill, class) in slices {
                    path {
                        key: "{index}",
                        class: "{class}",
                        d: "{d}",
                        fill: "{fill}",
                        onmouseenter: move |_| hovered.set(Some(index)),
                        onmouseleave: move |_| hovered.set(None),
                    }
                }
            }
            if let Some(record) = tooltip {
                ChartTooltip { record }
            }
            ChartLegend { records: records.clone() }
        }
    }
}
