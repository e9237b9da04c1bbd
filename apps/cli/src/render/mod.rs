//! Tera-backed rendering of the HTML report pages.

pub mod templates;

use tera::{Context, Tera};

use crate::errors::AppError;
use templates::{
    CHART_PAGE_TEMPLATE, CHART_PAGE_TEMPLATE_NAME, JOB_LIST_TEMPLATE, JOB_LIST_TEMPLATE_NAME,
};

/// Holds the compiled page templates. Build once per run.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    pub fn new() -> Result<Self, AppError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (JOB_LIST_TEMPLATE_NAME, JOB_LIST_TEMPLATE),
            (CHART_PAGE_TEMPLATE_NAME, CHART_PAGE_TEMPLATE),
        ])?;
        Ok(Self { tera })
    }

    pub fn render(&self, template_name: &str, context: &Context) -> Result<String, AppError> {
        Ok(self.tera.render(template_name, context)?)
    }
}
