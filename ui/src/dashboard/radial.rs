use dioxus::prelude::*;

use crate::dashboard::geometry::radial_rings;
use crate::dashboard::legend::{record_fill, ChartLegend, ChartTooltip, EmptyChart};
use crate::dashboard::metrics::ChartRecord;

const SIZE: f64 = 240.0;
const INNER: f64 = 36.0;
const OUTER: f64 = 112.0;

/// Concentric rings, one per record, each sweeping its share of the total.
#[component]
pub fn RadialChart(records: Vec<ChartRecord>) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);

    if records.is_empty() {
        return rsx! { EmptyChart {} };
    }

    let center = SIZE / 2.0;
    let values: Vec<u64> = records.iter().map(|r| r.value).collect();
    let active = hovered();

    let rings: Vec<(usize, String, String, String, String, &'static str)> =
        radial_rings(&values, center, center, INNER, OUTER)
            .into_iter()
            .map(|ring| {
                let class = if active == Some(ring.index) {
                    "chart__ring chart__ring--active"
                } else {
                    "chart__ring"
                };
                (
                    ring.index,
                    ring.track_path,
                    ring.value_path,
                    format!("{:.2}", ring.thickness),
                    record_fill(&records[ring.index]),
                    class,
                )
            })
            .collect();

    let tooltip = active.and_then(|i| records.get(i).cloned());

    rsx! {
        div { class: "chart chart--radial",
            svg {
                class: "chart__svg",
                view_box: "0 0 {SIZE} {SIZE}",
                for (index, track, arc, thickness, stroke, class) in rings {
                    g {
                        key: "{index}",
                        class: "{class}",
                        onmouseenter: move |_| hovered.set(Some(index)),
                        onmouseleave: move |_| hovered.set(None),
                        path {
                            class: "chart__ring-track",
                            d: "{track}",
                            fill: "none",
                            stroke_width: "{thickness}",
                        }
                        if !arc.is_empty() {
                            path {
                                class: "chart__ring-value",
                                d: "{arc}",
                                fill: "none",
                                stroke: "{stroke}",
                                stroke_width: "{thickness}",
                                stroke_linecap: "round",
                            }
                        }
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
