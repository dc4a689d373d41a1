use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::core::config::{DashboardConfig, DataSource};
use ui::views::Dashboard;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const SNAPSHOT: Asset = asset!("/assets/data/dashboard.json");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar writes the selected locale here; the dashboard subscribes to it.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_context_provider(|| DashboardConfig::with_source(DataSource::Url(SNAPSHOT.to_string())));

    use_hook(|| tracing::info!(source = %SNAPSHOT, "web shell started"));

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppNavbar {}
        Dashboard {}
    }
}
