//! Declarative chart specifications.
//!
//! A spec carries everything the charting collaborator needs — kind, data,
//! axis titles, hover text — and nothing about how to draw it. Specs
//! serialize to JSON and are either embedded in the rendered page or served
//! from the dashboard API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
}

/// One slice per label; `proportion` is the slice's share of the summed
/// counts in the source table only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: i64,
    pub proportion: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieSpec {
    pub kind: ChartKind,
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieSpec {
    pub fn total(&self) -> i64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// One bar per label in source-table order, annotated with its literal count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub labels: Vec<String>,
    pub values: Vec<i64>,
    /// Literal count text rendered on each bar.
    pub annotations: Vec<String>,
}

/// Cumulative line series: `years` ascending, `totals` non-decreasing.
/// `hover_texts` is display-only annotation, one entry per point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub years: Vec<i32>,
    pub totals: Vec<i64>,
    pub hover_texts: Vec<String>,
}

/// The full precomputed dashboard handed to the page renderer and the
/// charts API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub title: String,
    pub category_pie: PieSpec,
    pub category_bar: BarSpec,
    pub growth_line: LineSpec,
}
