pub mod jobs;
pub mod posting;
pub mod state;

pub use jobs::JobTitleList;
pub use posting::Posting;
pub use state::{StateCode, ALL_STATES};
