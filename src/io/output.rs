use std::path::Path;

use anyhow::{Context, Result};

use crate::models::MacroRow;

/// The concatenated export table, ready for serialization
#[derive(Debug, Clone)]
pub struct ExportTable {
    /// Data columns present in the output, in header order
    pub columns: Vec<String>,
    /// All rows, page order then within-page order
    pub rows: Vec<MacroRow>,
}

impl ExportTable {
    /// Concatenate per-page row tables and take the column union.
    ///
    /// `title` and `updated_at` are always present; an optional column is
    /// included only if some row across all pages carries it.
    pub fn from_pages(pages: Vec<Vec<MacroRow>>) -> Self {
        let rows: Vec<MacroRow> = pages.into_iter().flatten().collect();

        let mut columns = vec!["title".to_string(), "updated_at".to_string()];
        if rows.iter().any(|r| r.comment_value_html.is_some()) {
            columns.push("comment_value_html".to_string());
        }
        if rows.iter().any(|r| r.subject.is_some()) {
            columns.push("subject".to_string());
        }

        Self { columns, rows }
    }

    /// Cell text for one row and column; absent optional cells are empty
    fn cell<'a>(&self, row: &'a MacroRow, column: &str) -> &'a str {
        match column {
            "title" => &row.title,
            "updated_at" => &row.updated_at,
            "comment_value_html" => row.comment_value_html.as_deref().unwrap_or(""),
            "subject" => row.subject.as_deref().unwrap_or(""),
            _ => "",
        }
    }

    /// Write the table as CSV, truncating any existing file.
    ///
    /// The header starts with an unnamed index column; each record is
    /// prefixed with its 0-based final position.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;

        let mut header = vec![""];
        header.extend(self.columns.iter().map(String::as_str));
        writer.write_record(&header).context("Failed to write CSV header")?;

        for (index, row) in self.rows.iter().enumerate() {
            let mut record = vec![index.to_string()];
            for column in &self.columns {
                record.push(self.cell(row, column).to_string());
            }
            writer.write_record(&record).context("Failed to write CSV record")?;
        }

        writer.flush().context("Failed to flush CSV output")?;
        Ok(())
    }
}
