use serde_json::{json, Value};

use crate::analysis::EducationDistribution;
use crate::charts::Figure;

pub const EDUCATION_TITLE: &str = "Distribution of Education Requirements for Jobs";

/// Horizontal stacked bars: one trace per education level, one bar per job title.
pub fn education_bars(dist: &EducationDistribution) -> Figure {
    let job_titles = dist.job_titles();

    let data: Vec<Value> = dist
        .categories
        .iter()
        .enumerate()
        .map(|(i, category)| {
            json!({
                "type": "bar",
                "orientation": "h",
                "name": category.label,
                "y": job_titles,
                "x": dist.column(i),
                "marker": { "color": category.color },
            })
        })
        .collect();

    let layout = json!({
        "barmode": "stack",
        "title": {
            "text": EDUCATION_TITLE,
            "x": 0.01,
            "y": 0.98,
            "xanchor": "left",
            "yanchor": "top",
            "font": { "size": 25 },
        },
        "xaxis": { "title": { "text": "Percentage %" }, "tickformat": ".0f" },
        "yaxis": { "title": { "text": "Job Titles" }, "automargin": true },
        "legend": {
            "orientation": "h",
            "x": 0.01,
            "y": 1.1,
            "xanchor": "left",
            "traceorder": "reversed",
        },
        "margin": { "l": 100, "r": 20, "t": 90, "b": 50 },
        "height": 600,
    });

    Figure { data, layout }
}
