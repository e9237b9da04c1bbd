use serde::{Deserialize, Serialize};

/// One row of the postings dataset. Columns not listed here are ignored.
///
/// Every field is optional at the row level: the CSV reader maps empty cells
/// to `None`. Column presence is checked separately, before rows are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    /// Raw state cell. Kept as text so codes outside the map still group.
    pub state: Option<String>,
    #[serde(rename = "equivalent job title")]
    pub job_title: Option<String>,
    /// Count proxy: a row is counted only when this is present.
    pub job_link: Option<String>,
    pub edu_req: Option<String>,
}

impl Posting {
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }

    pub fn edu_req(&self) -> Option<&str> {
        self.edu_req.as_deref()
    }

    pub fn is_counted(&self) -> bool {
        self.job_link.is_some()
    }
}
