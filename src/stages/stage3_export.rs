use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::io::ExportTable;
use crate::models::MacroRow;

/// Result of Stage 3 export
#[derive(Debug)]
pub struct ExportResult {
    /// Where the CSV was written
    pub path: PathBuf,
    /// Data rows written, excluding the header
    pub rows_written: usize,
    /// Data columns in the output
    pub columns: Vec<String>,
}

/// Execute Stage 3: Export
///
/// Concatenates the per-page row tables into one and serializes it to CSV
/// at the given path, overwriting any existing file.
pub fn execute_export(page_tables: Vec<Vec<MacroRow>>, output: &Path) -> Result<ExportResult> {
    let table = ExportTable::from_pages(page_tables);
    info!("Writing {} rows to {:?}", table.rows.len(), output);
    table.write_csv(output)?;

    Ok(ExportResult {
        path: output.to_path_buf(),
        rows_written: table.rows.len(),
        columns: table.columns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MacroPage;
    use crate::stages::{
        execute_normalize, execute_project, NormalizeConfig, ProjectConfig,
    };

    // Two upstream pages: one exportable macro, one record with an empty
    // title that must not survive, run through the whole projection,
    // normalization, and export chain.
    #[test]
    fn test_two_page_export_end_to_end() {
        let pages: Vec<MacroPage> = vec![
            serde_json::from_str(
                r#"{
                    "macros": [{
                        "title": "Greeting",
                        "updated_at": "2021-01-01",
                        "actions": [{"field": "comment_value_html", "value": "<p>Hi</p>"}]
                    }],
                    "next_page": "https://example.test/page2"
                }"#,
            )
            .unwrap(),
            serde_json::from_str(
                r#"{
                    "macros": [{
                        "title": "",
                        "updated_at": "2021-01-02",
                        "actions": []
                    }],
                    "next_page": null
                }"#,
            )
            .unwrap(),
        ];

        let mut page_tables = Vec::new();
        for page in &pages {
            let projected = execute_project(&page.macros, &ProjectConfig::default()).unwrap();
            let mut rows = projected.rows;
            execute_normalize(&mut rows, &NormalizeConfig::default());
            page_tables.push(rows);
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("macros_principal.csv");
        let result = execute_export(page_tables, &path).unwrap();

        assert_eq!(result.rows_written, 1);
        assert_eq!(result.columns, vec!["title", "updated_at", "comment_value_html"]);

        let mut reader = csv::Reader::from_path(&result.path).unwrap();
        let records: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get(0).unwrap(), "0");
        assert_eq!(records[0].get(1).unwrap(), "Greeting");
        assert_eq!(records[0].get(2).unwrap(), "2021-01-01");
        assert_eq!(records[0].get(3).unwrap(), "Hi");
    }

    #[test]
    fn test_rows_without_markup_action_export_the_placeholder() {
        let macros: Vec<crate::models::ZendeskMacro> = serde_json::from_str(
            r#"[{"title": "Plain", "updated_at": "2021-01-03", "actions": []}]"#,
        )
        .unwrap();

        let projected = execute_project(&macros, &ProjectConfig::default()).unwrap();
        let mut rows = projected.rows;
        execute_normalize(&mut rows, &NormalizeConfig::default());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        execute_export(vec![rows], &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let records: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(records[0].get(3).unwrap(), "N/A");
    }
}
