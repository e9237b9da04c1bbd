use chrono::{DateTime, Utc};
use tera::Context;

use crate::errors::AppError;
use crate::models::JobTitleList;
use crate::render::templates::JOB_LIST_TEMPLATE_NAME;
use crate::render::TemplateEngine;

/// Renders the recommended-jobs page: one ordered list entry per title,
/// in ranking order. Titles and skills are HTML-escaped.
pub fn job_list_page(
    engine: &TemplateEngine,
    jobs: &JobTitleList,
    skills: &[String],
    generated_at: DateTime<Utc>,
) -> Result<String, AppError> {
    let mut ctx = Context::new();
    ctx.insert("jobs", jobs);
    ctx.insert("skills", skills);
    ctx.insert(
        "generated_at",
        &generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    );
    engine.render(JOB_LIST_TEMPLATE_NAME, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn render(jobs: &[&str], skills: &[&str]) -> String {
        let engine = TemplateEngine::new().unwrap();
        let jobs: JobTitleList = jobs.iter().copied().collect();
        let skills: Vec<String> = skills.iter().map(|s| s.to_string()).collect();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        job_list_page(&engine, &jobs, &skills, at).unwrap()
    }

    #[test]
    fn test_lists_jobs_in_order() {
        let html = render(&["Civil Engineers", "Infantry Officers"], &[]);
        let first = html.find("<li>Civil Engineers</li>").unwrap();
        let second = html.find("<li>Infantry Officers</li>").unwrap();
        assert!(first < second);
        assert!(html.contains("<title>Job Recommendations</title>"));
        assert!(html.contains("These are recommended jobs based on your skills"));
    }

    #[test]
    fn test_escapes_markup_in_titles() {
        let html = render(&["<b>Chef</b> & Cook"], &[]);
        assert!(html.contains("<li>&lt;b&gt;Chef&lt;&#x2F;b&gt; &amp; Cook</li>"));
    }

    #[test]
    fn test_skills_line_only_when_present() {
        assert!(!render(&["A"], &[]).contains("Skills:"));
        assert!(render(&["A"], &["SQL", "Python"]).contains("Skills: SQL, Python"));
    }

    #[test]
    fn test_generated_timestamp() {
        assert!(render(&[], &[]).contains("Generated 2024-05-01 09:30 UTC"));
    }

    #[test]
    fn test_single_closing_body_tag() {
        let html = render(&["A"], &[]);
        assert_eq!(html.matches("</body>").count(), 1);
    }
}
