//! Server-side renders of the dashboard states.

use std::rc::Rc;

use dioxus::prelude::*;
use ui::core::error::LoadError;
use ui::core::loader::parse_snapshot;
use ui::core::palette::ChartTheme;
use ui::dashboard::{DashboardOverview, ErrorPanel, LoadingPanel};

const FIXTURE: &str = include_str!("fixtures/dashboard.json");

const SPARSE: &str = r#"{
    "totalPatients": 0,
    "genderDistribution": {},
    "ethnicityDistribution": {},
    "ageGroups": {},
    "prescriberStats": {},
    "contactAvailability": { "homePhone": 0, "mobilePhone": 0, "noContact": 0 }
}"#;

fn render(app: fn() -> Element) -> String {
    ui::i18n::init();
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn overview_for(body: &str) -> Element {
    let snapshot = match parse_snapshot(body) {
        Ok(snapshot) => Rc::new(snapshot),
        Err(err) => panic!("snapshot should parse: {err}"),
    };
    rsx! {
        DashboardOverview { snapshot, theme: ChartTheme::default() }
    }
}

fn loading_app() -> Element {
    rsx! { LoadingPanel {} }
}

fn failed_app() -> Element {
    let err = LoadError::Status {
        code: 503,
        text: "Service Unavailable".to_string(),
    };
    rsx! {
        ErrorPanel { message: err.to_string(), on_retry: move |_| {} }
    }
}

fn loaded_app() -> Element {
    overview_for(FIXTURE)
}

fn sparse_app() -> Element {
    overview_for(SPARSE)
}

#[test]
fn loading_state_has_no_charts() {
    let html = render(loading_app);
    assert!(html.contains("dashboard-loading"));
    assert!(!html.contains("chart-panel"));
    assert!(!html.contains("stat-card"));
}

#[test]
fn failed_state_offers_retry_and_no_charts() {
    let html = render(failed_app);
    assert!(html.contains("dashboard-error"));
    assert!(html.contains("503 Service Unavailable"));
    assert!(html.contains("button--primary"));
    assert!(html.contains("<button"));
    assert!(!html.contains("chart-panel"));
    assert!(!html.contains("dashboard-loading"));
}

#[test]
fn loaded_state_renders_every_panel() {
    let html = render(loaded_app);

    assert_eq!(html.matches(r#"class="chart-panel""#).count(), 5);
    assert_eq!(html.matches("stat-card__value").count(), 4);
    assert_eq!(html.matches(r#"class="insight-card""#).count(), 2);
    assert!(html.contains("stat-card--pink"));
    assert!(html.contains("51.2%"));
    assert!(html.contains("82.8%"));
    assert!(html.contains("MacLeod"));
    assert!(!html.contains("dashboard-loading"));
}

#[test]
fn zero_total_shows_placeholders_instead_of_nan() {
    let html = render(sparse_app);

    assert!(!html.contains("NaN"));
    assert!(html.contains('—'));
    // Gender, age, ethnicity and prescribers have nothing to draw.
    assert_eq!(html.matches("chart-panel__empty").count(), 4);
}
