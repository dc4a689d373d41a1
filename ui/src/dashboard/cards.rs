use dioxus::prelude::*;

use crate::core::palette::ThemeColor;

/// Headline figure with an accent colour.
///
/// `secondary` is rendered under the value when non-empty.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] secondary: String,
    theme: ThemeColor,
) -> Element {
    rsx! {
        article { class: "stat-card {theme.css_class()}",
            span { class: "stat-card__label", "{label}" }
            strong { class: "stat-card__value", "{value}" }
            if !secondary.is_empty() {
                span { class: "stat-card__secondary", "{secondary}" }
            }
        }
    }
}

#[component]
pub fn InsightCard(
    title: String,
    description: String,
    metric: String,
    metric_label: String,
) -> Element {
    rsx! {
        article { class: "insight-card",
            div { class: "insight-card__metric",
                strong { class: "insight-card__value", "{metric}" }
                span { class: "insight-card__metric-label", "{metric_label}" }
            }
            div { class: "insight-card__body",
                h3 { class: "insight-card__title", "{title}" }
                p { class: "insight-card__description", "{description}" }
            }
        }
    }
}
