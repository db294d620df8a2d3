use serde::{Deserialize, Serialize};

/// A named skill category with its ordered skill names. Purely
/// presentational; the length doubles as the KPI count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<String>,
}

impl SkillGroup {
    pub fn kpi_count(&self) -> usize {
        self.skills.len()
    }
}

/// One (label, count) row of a categorical chart source table.
///
/// Counts are signed; the chart builders reject negative values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: i64,
}

impl CategoryCount {
    pub fn new(label: &str, count: i64) -> Self {
        Self {
            label: label.to_string(),
            count,
        }
    }
}

/// One point of the cumulative skill-growth series.
///
/// `learned` is free text surfaced on hover only — never computed on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGrowthPoint {
    pub year: i32,
    pub cumulative_total: i64,
    pub learned: String,
}

impl SkillGrowthPoint {
    pub fn new(year: i32, cumulative_total: i64, learned: &str) -> Self {
        Self {
            year,
            cumulative_total,
            learned: learned.to_string(),
        }
    }
}
