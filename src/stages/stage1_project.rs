use anyhow::{bail, Result};

use crate::models::{MacroRow, MergePolicy, ZendeskMacro};

/// Row columns that can be filled from a macro's actions
const ACTION_COLUMNS: &[&str] = &["comment_value_html", "subject"];

/// Configuration for Stage 1 projection
#[derive(Debug, Clone, Default)]
pub struct ProjectConfig {
    /// Resolution when several actions target the same column
    pub merge_policy: MergePolicy,
}

/// Result of Stage 1 projection
#[derive(Debug)]
pub struct ProjectResult {
    /// One row per surviving record, in input order
    pub rows: Vec<MacroRow>,
    /// Records dropped for having no usable title
    pub dropped_missing_title: usize,
}

/// Execute Stage 1: Project
///
/// Flattens each macro to a row: `title` and `updated_at` copied verbatim,
/// plus the value of every action whose field names a known column as a
/// substring. Records without a usable title are dropped, not rejected.
pub fn execute_project(macros: &[ZendeskMacro], config: &ProjectConfig) -> Result<ProjectResult> {
    let mut rows = Vec::with_capacity(macros.len());
    let mut dropped_missing_title = 0;

    for record in macros {
        let Some(title) = record.title_text() else {
            dropped_missing_title += 1;
            continue;
        };

        let mut row = MacroRow::new(title, record.updated_at.as_str());
        for action in &record.actions {
            for &column in ACTION_COLUMNS {
                if !action.field.contains(column) {
                    continue;
                }
                let cell = match column {
                    "comment_value_html" => &mut row.comment_value_html,
                    _ => &mut row.subject,
                };
                match config.merge_policy {
                    MergePolicy::LastWins => *cell = Some(action.value_text()),
                    MergePolicy::FirstWins => {
                        if cell.is_none() {
                            *cell = Some(action.value_text());
                        }
                    }
                    MergePolicy::Reject => {
                        if cell.is_some() {
                            bail!(
                                "macro \"{}\" sets column `{}` more than once",
                                title,
                                column
                            );
                        }
                        *cell = Some(action.value_text());
                    }
                }
            }
        }
        rows.push(row);
    }

    Ok(ProjectResult {
        rows,
        dropped_missing_title,
    })
}
