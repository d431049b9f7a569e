//! Terminal UI: dashboard screen, wizard, and shared widgets.

pub mod dashboard;
pub mod form_field;
pub mod panels;
pub mod wizard;

pub use dashboard::Dashboard;
