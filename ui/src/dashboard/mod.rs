//! The dashboard page body: metric derivation, chart geometry and the
//! components that render them.

pub mod geometry;
pub mod metrics;

mod bars;
pub use bars::BarChart;

mod cards;
pub use cards::{InsightCard, StatCard};

mod legend;
pub use legend::{ChartLegend, ChartPanel, ChartTooltip, EmptyChart};

mod overview;
pub use overview::{DashboardOverview, ErrorPanel, LoadingPanel};

mod pie;
pub use pie::PieChart;

mod radial;
pub use radial::RadialChart;
