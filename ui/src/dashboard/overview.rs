use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::format::format_count;
use crate::core::palette::{ChartTheme, ThemeColor};
use crate::core::snapshot::DashboardSnapshot;
use crate::dashboard::bars::BarChart;
use crate::dashboard::cards::{InsightCard, StatCard};
use crate::dashboard::geometry::BarOrientation;
use crate::dashboard::legend::ChartPanel;
use crate::dashboard::metrics::DashboardMetrics;
use crate::dashboard::pie::PieChart;
use crate::dashboard::radial::RadialChart;
use crate::t;

/// Stat cards, chart grid and insights for a loaded snapshot.
#[component]
pub fn DashboardOverview(snapshot: Rc<DashboardSnapshot>, theme: ChartTheme) -> Element {
    let metrics = DashboardMetrics::from_snapshot(&snapshot, &theme);

    let total = format_count(metrics.total_patients);
    let female_count = snapshot.gender_distribution.get("Female");
    let male_count = snapshot.gender_distribution.get("Male");
    let count_line = |count: Option<u64>| match count {
        Some(count) => t!("stat-count-secondary", count = format_count(count)),
        None => String::new(),
    };

    rsx! {
        div { class: "dashboard",
            p { class: "dashboard__subtitle", {t!("dashboard-subtitle", total = total.clone())} }

            div { class: "dashboard__stats",
                StatCard {
                    label: t!("stat-total-patients"),
                    value: total.clone(),
                    secondary: t!("stat-total-patients-meta"),
                    theme: ThemeColor::Cyan,
                }
                StatCard {
                    label: t!("stat-female"),
                    value: metrics.female_percent.with_sign(),
                    secondary: count_line(female_count),
                    theme: ThemeColor::Pink,
                }
                StatCard {
                    label: t!("stat-male"),
                    value: metrics.male_percent.with_sign(),
                    secondary: count_line(male_count),
                    theme: ThemeColor::Purple,
                }
                StatCard {
                    label: t!("stat-contact-rate"),
                    value: metrics.contact_rate.with_sign(),
                    secondary: t!("stat-contact-rate-meta"),
                    theme: ThemeColor::Green,
                }
            }

            div { class: "dashboard__charts",
                ChartPanel { title: t!("chart-gender"),
                    PieChart { records: metrics.gender.clone(), inner_radius: 58.0, outer_radius: 96.0 }
                }
                ChartPanel { title: t!("chart-age"),
                    BarChart { records: metrics.age.clone(), orientation: BarOrientation::Vertical }
                }
                ChartPanel { title: t!("chart-ethnicity"),
                    PieChart { records: metrics.ethnicity.clone(), outer_radius: 100.0 }
                }
                ChartPanel { title: t!("chart-prescribers"),
                    BarChart { records: metrics.prescribers.clone(), orientation: BarOrientation::Horizontal }
                }
                ChartPanel { title: t!("chart-contact"),
                    RadialChart { records: metrics.contact.clone() }
                }
            }

            section { class: "dashboard__insights",
                h2 { {t!("insight-heading")} }
                div { class: "dashboard__insight-grid",
                    InsightCard {
                        title: t!("insight-aging-title"),
                        description: t!("insight-aging-description"),
                        metric: metrics.aging_population_percent.with_sign(),
                        metric_label: t!("insight-aging-label"),
                    }
                    InsightCard {
                        title: t!("insight-no-contact-title"),
                        description: t!("insight-no-contact-description"),
                        metric: metrics.no_contact_percent.with_sign(),
                        metric_label: t!("insight-no-contact-label"),
                    }
                }
            }

            p { class: "dashboard__footnote", {t!("footer-note")} }
        }
    }
}

#[component]
pub fn LoadingPanel() -> Element {
    rsx! {
        div { class: "dashboard-loading", role: "status",
            span { class: "dashboard-loading__spinner", aria_hidden: "true" }
            p { {t!("loading-snapshot")} }
        }
    }
}

#[component]
pub fn ErrorPanel(message: String, on_retry: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "dashboard-error", role: "alert",
            h2 { class: "dashboard-error__title", {t!("error-title")} }
            p { class: "dashboard-error__message", "{message}" }
            button {
                r#type: "button",
                class: "button button--primary",
                onclick: move |evt| on_retry.call(evt),
                {t!("error-retry")}
            }
        }
    }
}
