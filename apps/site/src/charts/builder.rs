//! Chart Builder — pure constructors from literal source tables to specs.
//!
//! A builder error means the compiled-in content is malformed. The test
//! suite catches it; in production `main` propagates it and the process
//! fails at startup rather than serving a broken dashboard.

use crate::charts::spec::{BarSpec, ChartKind, Dashboard, LineSpec, PieSlice, PieSpec};
use crate::content::ContentStore;
use crate::errors::InvalidDataError;
use crate::models::{CategoryCount, SkillGrowthPoint};

// ────────────────────────────────────────────────────────────────────────────
// Constructors
// ────────────────────────────────────────────────────────────────────────────

/// Builds the pie spec: one slice per label, proportion = count / total.
/// A total of zero yields all-zero proportions.
pub fn build_category_pie(
    title: &str,
    categories: &[CategoryCount],
) -> Result<PieSpec, InvalidDataError> {
    check_counts("pie", categories)?;

    let total: i64 = categories.iter().map(|c| c.count).sum();
    let slices = categories
        .iter()
        .map(|c| PieSlice {
            label: c.label.clone(),
            value: c.count,
            proportion: if total == 0 {
                0.0
            } else {
                c.count as f64 / total as f64
            },
        })
        .collect();

    Ok(PieSpec {
        kind: ChartKind::Pie,
        title: title.to_string(),
        slices,
    })
}

/// Builds the bar spec: one bar per label in input order, each annotated
/// with its literal count value.
pub fn build_category_bar(
    title: &str,
    categories: &[CategoryCount],
) -> Result<BarSpec, InvalidDataError> {
    check_counts("bar", categories)?;

    Ok(BarSpec {
        kind: ChartKind::Bar,
        title: title.to_string(),
        x_title: "Discipline".to_string(),
        y_title: "Projects".to_string(),
        labels: categories.iter().map(|c| c.label.clone()).collect(),
        values: categories.iter().map(|c| c.count).collect(),
        annotations: categories.iter().map(|c| c.count.to_string()).collect(),
    })
}

/// Builds the cumulative growth line. Years must be strictly ascending and
/// totals non-decreasing — the metric is cumulative, so a drop is an
/// authoring bug, not a data point.
pub fn build_growth_line(
    title: &str,
    points: &[SkillGrowthPoint],
) -> Result<LineSpec, InvalidDataError> {
    if points.is_empty() {
        return Err(InvalidDataError::Empty { chart: "line" });
    }
    for point in points {
        if point.cumulative_total < 0 {
            return Err(InvalidDataError::NegativeCount {
                label: point.year.to_string(),
                count: point.cumulative_total,
            });
        }
    }
    for pair in points.windows(2) {
        if pair[0].year >= pair[1].year {
            return Err(InvalidDataError::YearOrder {
                prev: pair[0].year,
                next: pair[1].year,
            });
        }
        if pair[0].cumulative_total > pair[1].cumulative_total {
            return Err(InvalidDataError::NonMonotonic {
                year: pair[1].year,
                prev: pair[0].cumulative_total,
                next: pair[1].cumulative_total,
            });
        }
    }

    Ok(LineSpec {
        kind: ChartKind::Line,
        title: title.to_string(),
        x_title: "Year".to_string(),
        y_title: "Cumulative skills".to_string(),
        years: points.iter().map(|p| p.year).collect(),
        totals: points.iter().map(|p| p.cumulative_total).collect(),
        hover_texts: points.iter().map(|p| p.learned.clone()).collect(),
    })
}

/// Builds all three dashboard specs from the store's source tables.
pub fn build_dashboard(content: &ContentStore) -> Result<Dashboard, InvalidDataError> {
    Ok(Dashboard {
        title: "Project & Skill Dashboard".to_string(),
        category_pie: build_category_pie("Projects by discipline", content.category_counts())?,
        category_bar: build_category_bar("Project counts", content.category_counts())?,
        growth_line: build_growth_line("Skills learned over time", content.growth_points())?,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

fn check_counts(chart: &'static str, categories: &[CategoryCount]) -> Result<(), InvalidDataError> {
    if categories.is_empty() {
        return Err(InvalidDataError::Empty { chart });
    }
    for row in categories {
        if row.count < 0 {
            return Err(InvalidDataError::NegativeCount {
                label: row.label.clone(),
                count: row.count,
            });
        }
    }
    Ok(())
}
