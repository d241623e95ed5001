/*!
 * SpreadsheetML 2003 reader.
 *
 * Elements are matched on their local name, so documents using the `ss:`
 * prefix and documents relying on the default namespace read the same way.
 */

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::{Path, PathBuf};

use super::model::{Cell, Row, Workbook, Worksheet};
use crate::errors::SourceError;

/// Read and parse a workbook file
///
/// # Errors
/// Returns `SourceError::Read` when the file cannot be read and
/// `SourceError::Malformed` / `SourceError::NotAWorkbook` when its content
/// is not a SpreadsheetML workbook.
pub fn read_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook, SourceError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let workbook = parse_workbook(&content).map_err(|e| e.with_path(path.to_path_buf()))?;
    debug!(
        "Read {} worksheet(s) from {:?}: {:?}",
        workbook.worksheets.len(),
        path,
        workbook.worksheet_names()
    );
    Ok(workbook)
}

/// Parse a workbook from XML text
pub fn parse_workbook(content: &str) -> Result<Workbook, SourceError> {
    let mut reader = Reader::from_str(content);
    let mut state = ParseState::default();

    loop {
        let event = reader.read_event().map_err(|e| {
            malformed(format!("{} at byte {}", e, reader.error_position()))
        })?;

        match event {
            Event::Start(e) => state.open(&e, false)?,
            Event::Empty(e) => state.open(&e, true)?,
            Event::End(e) => state.close(e.local_name().as_ref()),
            Event::Text(e) => {
                if state.capturing() {
                    let text = e
                        .unescape()
                        .map_err(|err| malformed(format!("{} at byte {}", err, reader.buffer_position())))?;
                    state.push_text(&text);
                }
            }
            Event::CData(e) => {
                if state.capturing() {
                    state.push_text(&String::from_utf8_lossy(&e));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !state.seen_root {
        return Err(malformed("document has no root element".to_string()));
    }
    if state.depth != 0 {
        return Err(malformed("unexpected end of document".to_string()));
    }

    Ok(state.workbook)
}

fn malformed(reason: String) -> SourceError {
    SourceError::Malformed {
        path: PathBuf::new(),
        reason,
    }
}

/// Cursor over the element tree while events stream past
#[derive(Default)]
struct ParseState {
    workbook: Workbook,
    seen_root: bool,
    // @field: Open element count, used to detect truncated input
    depth: usize,
    worksheet: Option<Worksheet>,
    row: Option<Row>,
    cell: Option<Cell>,
    // @field: Text collected for the current `Data` element
    data: Option<String>,
    // @field: Elements open inside `Data` (rich-text markup)
    data_depth: usize,
    // @field: Elements open inside a cell `Comment`, whose `Data` is not cell content
    comment_depth: usize,
}

impl ParseState {
    fn capturing(&self) -> bool {
        self.data.is_some() && self.comment_depth == 0
    }

    fn push_text(&mut self, text: &str) {
        if let Some(data) = self.data.as_mut() {
            data.push_str(text);
        }
    }

    fn open(&mut self, element: &BytesStart<'_>, empty: bool) -> Result<(), SourceError> {
        let local = element.local_name();
        let name = local.as_ref();

        if !self.seen_root {
            self.seen_root = true;
            if name != b"Workbook" {
                return Err(SourceError::NotAWorkbook {
                    path: PathBuf::new(),
                    root: String::from_utf8_lossy(name).into_owned(),
                });
            }
        }

        if !empty {
            self.depth += 1;
        }

        // Markup nested inside Data or a Comment is not structural
        if self.comment_depth > 0 {
            if !empty {
                self.comment_depth += 1;
            }
            return Ok(());
        }
        if self.data.is_some() {
            if !empty {
                self.data_depth += 1;
            }
            return Ok(());
        }

        match name {
            b"Worksheet" => {
                let sheet_name = attribute(element, b"Name")?.unwrap_or_default();
                let sheet = Worksheet::new(sheet_name);
                if empty {
                    self.workbook.worksheets.push(sheet);
                } else {
                    self.worksheet = Some(sheet);
                }
            }
            b"Row" if self.worksheet.is_some() => {
                if empty {
                    self.push_row(Row::default());
                } else {
                    self.row = Some(Row::default());
                }
            }
            b"Cell" if self.row.is_some() => {
                self.pad_to_index(element)?;
                if empty {
                    self.push_cell(Cell::empty());
                } else {
                    self.cell = Some(Cell::empty());
                }
            }
            b"Data" if self.cell.is_some() => {
                if empty {
                    if let Some(cell) = self.cell.as_mut() {
                        cell.text = Some(String::new());
                    }
                } else {
                    self.data = Some(String::new());
                    self.data_depth = 0;
                }
            }
            b"Comment" if self.cell.is_some() && !empty => {
                self.comment_depth = 1;
            }
            _ => {}
        }

        Ok(())
    }

    fn close(&mut self, name: &[u8]) {
        self.depth = self.depth.saturating_sub(1);

        if self.comment_depth > 0 {
            self.comment_depth -= 1;
            return;
        }
        if self.data.is_some() {
            if self.data_depth > 0 {
                self.data_depth -= 1;
                return;
            }
            // Closing the Data element itself
            let text = self.data.take();
            if let Some(cell) = self.cell.as_mut() {
                cell.text = text;
            }
            return;
        }

        match name {
            b"Cell" => {
                if let Some(cell) = self.cell.take() {
                    self.push_cell(cell);
                }
            }
            b"Row" => {
                if let Some(row) = self.row.take() {
                    self.push_row(row);
                }
            }
            b"Worksheet" => {
                if let Some(sheet) = self.worksheet.take() {
                    self.workbook.worksheets.push(sheet);
                }
            }
            _ => {}
        }
    }

    fn push_cell(&mut self, cell: Cell) {
        if let Some(row) = self.row.as_mut() {
            row.cells.push(cell);
        }
    }

    fn push_row(&mut self, row: Row) {
        if let Some(sheet) = self.worksheet.as_mut() {
            sheet.rows.push(row);
        }
    }

    /// Honor `ss:Index` (1-based) by filling skipped columns with empty cells
    fn pad_to_index(&mut self, element: &BytesStart<'_>) -> Result<(), SourceError> {
        let Some(index) = attribute(element, b"Index")? else {
            return Ok(());
        };
        let Ok(column) = index.trim().parse::<usize>() else {
            debug!("Ignoring non-numeric cell index {:?}", index);
            return Ok(());
        };

        if let Some(row) = self.row.as_mut() {
            let target = column.saturating_sub(1);
            while row.cells.len() < target {
                row.cells.push(Cell::empty());
            }
        }
        Ok(())
    }
}

/// Value of the attribute whose local name is `key`, ignoring its prefix
fn attribute(element: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, SourceError> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| malformed(format!("invalid attribute: {}", e)))?;
        if attr.key.local_name().as_ref() == key {
            let value = attr
                .unescape_value()
                .map_err(|e| malformed(format!("invalid attribute value: {}", e)))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
