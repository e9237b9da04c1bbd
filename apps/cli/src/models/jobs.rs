use serde::{Deserialize, Serialize};

/// Ordered target job titles. Index 0 is the highest priority.
///
/// Order is whatever the recommender produced and is never re-derived.
/// Duplicates are kept: a repeated title contributes once per position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobTitleList(Vec<String>);

impl JobTitleList {
    pub fn new(titles: Vec<String>) -> Self {
        Self(titles)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Titles in list order with later repeats removed.
    pub fn distinct(&self) -> Vec<&str> {
        let mut seen = Vec::with_capacity(self.0.len());
        for title in self.iter() {
            if !seen.contains(&title) {
                seen.push(title);
            }
        }
        seen
    }
}

impl<S: Into<String>> FromIterator<S> for JobTitleList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
