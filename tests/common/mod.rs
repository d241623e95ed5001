/*!
 * Common test utilities for the seasons-sync test suite
 */

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use seasons_sync::app_config::Config;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Header row of a season worksheet
pub const HEADER_ROW: [&str; 11] = [
    "#", "Episode", "Title", "Author", "Director", "Air date", "Mistress",
    "Description", "Godfather", "Music", "HBO review",
];

/// A complete data row for episode `number`
pub fn episode_row(number: &str, title: &str, air_date: &str) -> Vec<String> {
    vec![
        "1".to_string(),
        number.to_string(),
        title.to_string(),
        "David Chase".to_string(),
        "Tim Van Patten".to_string(),
        air_date.to_string(),
        String::new(),
        "Tony berättar för Carmela".to_string(),
        String::new(),
        "1\nWoke Up This Morning\n\n2\nAlabama Song".to_string(),
        "Great episode.".to_string(),
    ]
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\n', "&#10;")
}

/// Render a SpreadsheetML workbook with one worksheet per `(name, rows)` pair
pub fn workbook_xml(sheets: &[(&str, Vec<Vec<String>>)]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0"?>
<?mso-application progid="Excel.Sheet"?>
<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet"
 xmlns:o="urn:schemas-microsoft-com:office:office"
 xmlns:x="urn:schemas-microsoft-com:office:excel"
 xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
"#,
    );

    for (name, rows) in sheets {
        xml.push_str(&format!(" <Worksheet ss:Name=\"{}\">\n  <Table>\n", escape(name)));
        for row in rows {
            xml.push_str("   <Row>\n");
            for value in row {
                if value.is_empty() {
                    xml.push_str("    <Cell/>\n");
                } else {
                    xml.push_str(&format!(
                        "    <Cell><Data ss:Type=\"String\">{}</Data></Cell>\n",
                        escape(value)
                    ));
                }
            }
            xml.push_str("   </Row>\n");
        }
        xml.push_str("  </Table>\n </Worksheet>\n");
    }

    xml.push_str("</Workbook>\n");
    xml
}

/// Rows of a season sheet: header plus the given data rows
pub fn season_rows(data_rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let mut rows = vec![HEADER_ROW.iter().map(|s| s.to_string()).collect()];
    rows.extend(data_rows);
    rows
}

/// Config reading `input` and writing `seasons.json` into `dir`
pub fn config_for(dir: &Path, input: &Path) -> Config {
    Config {
        input_path: input.to_path_buf(),
        output_path: dir.join("seasons.json"),
        ..Config::default()
    }
}
