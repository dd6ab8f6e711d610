use crate::html::html_to_text;
use crate::models::MacroRow;

/// Placeholder written when a row has no comment template text
pub const PLACEHOLDER: &str = "N/A";

/// Configuration for Stage 2 normalization
#[derive(Debug, Clone)]
pub struct NormalizeConfig {
    /// Value used for missing or empty comment cells
    pub placeholder: String,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            placeholder: PLACEHOLDER.to_string(),
        }
    }
}

/// Result of Stage 2 normalization
#[derive(Debug)]
pub struct NormalizeResult {
    /// Cells rendered from HTML to text
    pub cells_rendered: usize,
    /// Cells filled with the placeholder instead
    pub placeholders: usize,
}

/// Execute Stage 2: Normalize
///
/// Replaces every `comment_value_html` cell with its plain-text rendering.
/// Rows without the cell, and rows whose markup renders to nothing, get the
/// placeholder. Row order and all other cells are untouched.
pub fn execute_normalize(rows: &mut [MacroRow], config: &NormalizeConfig) -> NormalizeResult {
    let mut cells_rendered = 0;
    let mut placeholders = 0;

    for row in rows.iter_mut() {
        let rendered = match row.comment_value_html.take() {
            Some(html) => {
                let text = html_to_text(&html);
                if text.is_empty() {
                    placeholders += 1;
                    config.placeholder.clone()
                } else {
                    cells_rendered += 1;
                    text
                }
            }
            None => {
                placeholders += 1;
                config.placeholder.clone()
            }
        };
        row.comment_value_html = Some(rendered);
    }

    NormalizeResult {
        cells_rendered,
        placeholders,
    }
}
