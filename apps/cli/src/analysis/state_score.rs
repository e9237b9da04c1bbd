#![allow(dead_code)]

//! State attractiveness — rank-weighted share of matching postings per state.
//!
//! For every state in the map the raw score is
//! `Σ weight(i) × matched[state, title_i] / total[state]` over the ranked job
//! list, then all scores are min-max rescaled to [0, 1].
//!
//! Lookups that miss contribute no term at all: a state with no matching
//! postings for a title, or with no counted postings whatsoever, is never
//! divided by. The weighting is pluggable; `LinearRankWeighting` (N − i) is
//! the default until per-job relevance scores exist.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::models::{JobTitleList, Posting, StateCode, ALL_STATES};

// ────────────────────────────────────────────────────────────────────────────
// Weighting
// ────────────────────────────────────────────────────────────────────────────

/// Maps a title's position in the ranked list to its weight.
pub trait RankWeighting {
    fn weight(&self, rank: usize, list_len: usize) -> f64;
}

/// `N − i`: the first title weighs N, the last weighs 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearRankWeighting;

impl RankWeighting for LinearRankWeighting {
    fn weight(&self, rank: usize, list_len: usize) -> f64 {
        list_len.saturating_sub(rank) as f64
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// One score per entry of the state map, in `ALL_STATES` order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateScores {
    entries: Vec<(StateCode, f64)>,
}

impl StateScores {
    pub fn get(&self, state: StateCode) -> Option<f64> {
        self.entries
            .iter()
            .find(|(s, _)| *s == state)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StateCode, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest-scoring states first, ties kept in map order.
    pub fn top(&self, n: usize) -> Vec<(StateCode, f64)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        sorted.truncate(n);
        sorted
    }

    /// Linearly rescales to [0, 1] using this call's min and max.
    /// When every score ties the values are returned unchanged.
    pub fn normalized(self) -> Self {
        let (lo, hi) = self
            .entries
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, v)| {
                (lo.min(*v), hi.max(*v))
            });

        if self.entries.is_empty() || hi == lo {
            return self;
        }

        let span = hi - lo;
        Self {
            entries: self
                .entries
                .into_iter()
                .map(|(s, v)| (s, (v - lo) / span))
                .collect(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer
// ────────────────────────────────────────────────────────────────────────────

pub struct StateAttractivenessScorer<W = LinearRankWeighting> {
    weighting: W,
}

impl Default for StateAttractivenessScorer {
    fn default() -> Self {
        Self::new(LinearRankWeighting)
    }
}

impl<W: RankWeighting> StateAttractivenessScorer<W> {
    pub fn new(weighting: W) -> Self {
        Self { weighting }
    }

    /// Normalized score for every state in the map.
    pub fn score(&self, postings: &[Posting], job_titles: &JobTitleList) -> StateScores {
        self.raw_scores(postings, job_titles).normalized()
    }

    /// Unnormalized rank-weighted ratios.
    pub fn raw_scores(&self, postings: &[Posting], job_titles: &JobTitleList) -> StateScores {
        let totals = count_by_state(postings);
        let matched = count_matches(postings, job_titles);
        debug!(
            "Grouped {} states, {} (state, title) matches",
            totals.len(),
            matched.len()
        );

        let n = job_titles.len();
        let entries = ALL_STATES
            .iter()
            .map(|&state| {
                let Some(code) = state.code() else {
                    return (state, 0.0);
                };
                let mut raw = 0.0;
                for (rank, title) in job_titles.iter().enumerate() {
                    let Some(&hits) = matched.get(&(code, title)) else {
                        continue;
                    };
                    match totals.get(code) {
                        Some(&total) if hits > 0 && total > 0 => {
                            raw += self.weighting.weight(rank, n) * hits as f64 / total as f64;
                        }
                        _ => {}
                    }
                }
                (state, raw)
            })
            .collect();

        StateScores { entries }
    }
}

/// Counted postings per raw state value, over the whole dataset.
fn count_by_state(postings: &[Posting]) -> HashMap<&str, usize> {
    let mut totals = HashMap::new();
    for p in postings.iter().filter(|p| p.is_counted()) {
        if let Some(state) = p.state() {
            *totals.entry(state).or_insert(0) += 1;
        }
    }
    totals
}

/// Counted postings per (state, title) for titles in the target list.
fn count_matches<'a>(
    postings: &'a [Posting],
    job_titles: &JobTitleList,
) -> HashMap<(&'a str, &'a str), usize> {
    let targets: HashSet<&str> = job_titles.iter().collect();
    let mut matched = HashMap::new();
    for p in postings.iter().filter(|p| p.is_counted()) {
        if let (Some(state), Some(title)) = (p.state(), p.job_title()) {
            if targets.contains(title) {
                *matched.entry((state, title)).or_insert(0) += 1;
            }
        }
    }
    matched
}
