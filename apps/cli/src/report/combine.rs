use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::errors::AppError;

const BODY_OPEN: &str = "<body>";
const BODY_CLOSE: &str = "</body>";

/// Returns the trimmed content between the first `<body>` and the first `</body>`.
pub fn extract_body_content(html: &str) -> Result<&str, AppError> {
    let (Some(start), Some(end)) = (html.find(BODY_OPEN), html.find(BODY_CLOSE)) else {
        return Err(AppError::InvalidHtml(
            "Missing <body> or </body> tag.".to_string(),
        ));
    };
    let content_start = start + BODY_OPEN.len();
    if end < content_start {
        return Err(AppError::InvalidHtml(
            "</body> appears before <body>.".to_string(),
        ));
    }
    Ok(html[content_start..end].trim())
}

/// Inserts `bodies`, in order, immediately before the first `</body>` of `main`.
pub fn splice_bodies(main: &str, bodies: &[&str]) -> Result<String, AppError> {
    let insert_at = main
        .find(BODY_CLOSE)
        .ok_or_else(|| AppError::InvalidHtml("Main page has no </body> tag.".to_string()))?;

    let extra: usize = bodies.iter().map(|b| b.len()).sum();
    let mut combined = String::with_capacity(main.len() + extra);
    combined.push_str(&main[..insert_at]);
    for body in bodies {
        combined.push_str(body);
    }
    combined.push_str(&main[insert_at..]);
    Ok(combined)
}

/// Reads each chart page, extracts its body, splices the bodies into
/// `main_page`, and writes the result to `dest`.
pub fn combine_htmls(main_page: &str, chart_pages: &[&Path], dest: &Path) -> Result<(), AppError> {
    let contents = chart_pages
        .iter()
        .map(|path| fs::read_to_string(path).map_err(|e| AppError::io(*path, e)))
        .collect::<Result<Vec<String>, AppError>>()?;

    let bodies = contents
        .iter()
        .map(|html| extract_body_content(html))
        .collect::<Result<Vec<&str>, AppError>>()?;
    debug!("Extracted {} chart bodies", bodies.len());

    let combined = splice_bodies(main_page, &bodies)?;
    fs::write(dest, combined).map_err(|e| AppError::io(dest, e))?;
    info!("Wrote combined report to {}", dest.display());
    Ok(())
}
