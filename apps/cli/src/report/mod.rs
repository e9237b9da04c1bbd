//! Final report assembly: the job list page with both charts spliced in.

pub mod combine;
pub mod job_list;

pub use combine::combine_htmls;
pub use job_list::job_list_page;
