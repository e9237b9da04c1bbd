//! Chart construction — Plotly.js figures as JSON, written as standalone pages.

pub mod choropleth;
pub mod education_bar;

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tera::Context;
use tracing::info;

use crate::errors::AppError;
use crate::render::templates::{CHART_PAGE_TEMPLATE_NAME, PLOTLY_CDN};
use crate::render::TemplateEngine;

pub use choropleth::state_map;
pub use education_bar::education_bars;

/// A Plotly figure: traces plus layout, serialized exactly as Plotly.js expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

impl Figure {
    /// Figure JSON that can sit inside a `<script>` element.
    pub fn to_script_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }

    pub fn title(&self) -> &str {
        self.layout
            .pointer("/title/text")
            .and_then(Value::as_str)
            .unwrap_or("Chart")
    }

    /// Renders the figure as a complete HTML page.
    pub fn to_html(&self, engine: &TemplateEngine, div_id: &str) -> Result<String, AppError> {
        let mut ctx = Context::new();
        ctx.insert("title", self.title());
        ctx.insert("div_id", div_id);
        ctx.insert("plotly_src", PLOTLY_CDN);
        ctx.insert("figure", &self.to_script_json()?);
        engine.render(CHART_PAGE_TEMPLATE_NAME, &ctx)
    }

    pub fn write_html(
        &self,
        engine: &TemplateEngine,
        path: &Path,
        div_id: &str,
    ) -> Result<(), AppError> {
        let html = self.to_html(engine, div_id)?;
        fs::write(path, html).map_err(|e| AppError::io(path, e))?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}
