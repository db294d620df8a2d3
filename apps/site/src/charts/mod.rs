// Dashboard chart construction.
// Implements: declarative pie/bar/line specs and their pure constructors.
// Specs are built once at startup; a builder error is fatal there.

pub mod builder;
pub mod spec;

// Re-export the public API consumed by other modules (render, routes, main).
pub use builder::{build_category_bar, build_category_pie, build_dashboard, build_growth_line};
pub use spec::{BarSpec, ChartKind, Dashboard, LineSpec, PieSpec};
