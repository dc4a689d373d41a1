//! Pieces shared by every chart panel: frame, legend, tooltip, empty state.

use dioxus::prelude::*;

use crate::core::format::format_count;
use crate::core::palette::DEFAULT_FILL;
use crate::dashboard::metrics::ChartRecord;
use crate::t;

/// CSS colour for a record, falling back when it carries none.
pub(crate) fn record_fill(record: &ChartRecord) -> String {
    record
        .fill
        .as_ref()
        .map(|color| color.to_string())
        .unwrap_or_else(|| DEFAULT_FILL.to_string())
}

#[component]
pub fn ChartPanel(title: String, children: Element) -> Element {
    rsx! {
        section { class: "chart-panel",
            h2 { class: "chart-panel__title", "{title}" }
            div { class: "chart-panel__body", {children} }
        }
    }
}

#[component]
pub fn ChartLegend(records: Vec<ChartRecord>) -> Element {
    rsx! {
        ul { class: "chart-legend",
            for (i, record) in records.iter().enumerate() {
                li { key: "{i}", class: "chart-legend__item",
                    span {
                        class: "chart-legend__swatch",
                        style: "background: {record_fill(record)}",
                    }
                    span { class: "chart-legend__name", "{record.name}" }
                }
            }
        }
    }
}

/// Name and value of the hovered record.
#[component]
pub fn ChartTooltip(record: ChartRecord) -> Element {
    let value = format_count(record.value);
    rsx! {
        div { class: "chart-tooltip", role: "status",
            span {
                class: "chart-tooltip__swatch",
                style: "background: {record_fill(&record)}",
            }
            span { class: "chart-tooltip__name", "{record.name}" }
            strong { class: "chart-tooltip__value", "{value}" }
        }
    }
}

#[component]
pub fn EmptyChart() -> Element {
    rsx! {
        p { class: "chart-panel__empty", {t!("chart-empty")} }
    }
}
