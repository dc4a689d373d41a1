use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::config::DashboardConfig;
use crate::core::loader::{load_snapshot, LoadState};
use crate::dashboard::{DashboardOverview, ErrorPanel, LoadingPanel};

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// The single dashboard page.
///
/// Reads [`DashboardConfig`] from context, issues one load on mount and keeps
/// the in-flight read scoped to this component so unmounting cancels it.
#[component]
pub fn Dashboard() -> Element {
    let config = use_context::<DashboardConfig>();

    // Subscribe to the global language code (if provided) so labels refresh on switch.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let source = config.source.clone();
    let timeout = config.fetch_timeout;
    let mut resource = use_resource(move || {
        let source = source.clone();
        async move { load_snapshot(&source, timeout).await.map(Rc::new) }
    });

    let state = LoadState::from_outcome(Option::as_ref(&*resource.read()));

    #[cfg(debug_assertions)]
    tracing::debug!(?lang_marker, loading = state.is_loading(), "dashboard render");

    let body = match state {
        LoadState::Loading => rsx! { LoadingPanel {} },
        LoadState::Failed(err) => rsx! {
            ErrorPanel {
                message: err.to_string(),
                on_retry: move |_| resource.restart(),
            }
        },
        LoadState::Loaded(snapshot) => rsx! {
            DashboardOverview { snapshot, theme: config.theme.clone() }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        // Hidden marker node retains reactive dependency on language signal.
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-dashboard",
            header { class: "page-dashboard__header",
                h1 { {crate::t!("dashboard-title")} }
                p { {crate::t!("dashboard-intro")} }
            }
            {body}
        }
    }
}
