//! Education requirement distribution per recommended job title.
//!
//! Each row is the share (in percent) of postings for one title that ask for
//! each education level. Shares are taken against every non-empty `edu_req`
//! value for that title, including levels that are not charted.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::models::{JobTitleList, Posting};

/// Charted education levels, in stacking order.
pub const EDUCATION_CATEGORIES: [&str; 6] = [
    "high_school",
    "bachelor_degree",
    "associate_degree",
    "master_degree",
    "no_education",
    "vocational",
];

/// Bar color for each entry of `EDUCATION_CATEGORIES`.
pub const CATEGORY_COLORS: [&str; 6] = [
    "#66b3ff", "#ff9999", "#ffcc99", "#99ff99", "#cc99ff", "#ffa64d",
];

const SORT_CATEGORY: &str = "high_school";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationCategory {
    pub key: &'static str,
    pub label: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationRow {
    pub job_title: String,
    /// Non-empty `edu_req` values seen for this title.
    pub total: usize,
    /// Percent per charted category, aligned with `EducationDistribution::categories`.
    pub percentages: Vec<f64>,
    sort_key: f64,
}

impl EducationRow {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationDistribution {
    /// Charted categories that occur in at least one row.
    pub categories: Vec<EducationCategory>,
    /// Ascending by high-school share, titles without data last.
    pub rows: Vec<EducationRow>,
}

impl EducationDistribution {
    pub fn from_postings(postings: &[Posting], job_titles: &JobTitleList) -> Self {
        let targets: HashSet<&str> = job_titles.iter().collect();

        let mut counts: HashMap<&str, HashMap<&str, usize>> = HashMap::new();
        for p in postings {
            if let (Some(title), Some(edu)) = (p.job_title(), p.edu_req()) {
                if targets.contains(title) && !edu.is_empty() {
                    *counts.entry(title).or_default().entry(edu).or_insert(0) += 1;
                }
            }
        }

        let observed: HashSet<&str> = counts
            .values()
            .flat_map(|by_level| by_level.keys().copied())
            .collect();

        let categories: Vec<EducationCategory> = EDUCATION_CATEGORIES
            .iter()
            .zip(CATEGORY_COLORS)
            .filter(|(key, _)| observed.contains(**key))
            .map(|(&key, color)| EducationCategory {
                key,
                label: display_label(key),
                color,
            })
            .collect();

        let empty = HashMap::new();
        let mut rows: Vec<EducationRow> = job_titles
            .distinct()
            .into_iter()
            .map(|title| {
                let by_level = counts.get(title).unwrap_or(&empty);
                let total: usize = by_level.values().sum();
                let share = |key: &str| -> f64 {
                    match by_level.get(key) {
                        Some(&n) if total > 0 => n as f64 / total as f64 * 100.0,
                        _ => 0.0,
                    }
                };
                EducationRow {
                    job_title: title.to_string(),
                    total,
                    percentages: categories.iter().map(|c| share(c.key)).collect(),
                    sort_key: share(SORT_CATEGORY),
                }
            })
            .collect();

        rows.sort_by(|a, b| match (a.is_empty(), b.is_empty()) {
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            _ => a.sort_key.partial_cmp(&b.sort_key).unwrap_or(Ordering::Equal),
        });

        Self { categories, rows }
    }

    /// Percentages of one category across rows, in row order.
    pub fn column(&self, category_index: usize) -> Vec<f64> {
        self.rows
            .iter()
            .map(|r| r.percentages.get(category_index).copied().unwrap_or(0.0))
            .collect()
    }

    pub fn job_titles(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.job_title.as_str()).collect()
    }
}

/// `"bachelor_degree"` → `"Bachelor Degree"`.
pub fn display_label(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
