/*!
 * In-memory model of a SpreadsheetML workbook.
 *
 * Only what the extractor needs is kept: worksheet names, rows, and the text
 * of each cell. Typed `Data` values (numbers, dates) are kept as their text.
 */

/// A single cell. `text` is `None` when the cell has no `Data` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: Option<String>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()) }
    }

    pub fn empty() -> Self {
        Self { text: None }
    }
}

/// An ordered sequence of cells. Positions are 0-based column offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    /// Build a row with one text cell per value
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> Self {
        Self {
            cells: values.iter().map(|v| Cell::new(v.as_ref())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Text of the cell at `index`; `None` when the column is absent or has no data
    pub fn text_at(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|cell| cell.text.as_deref())
    }
}

/// A named sheet of the workbook
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worksheet {
    pub name: String,
    pub rows: Vec<Row>,
}

impl Worksheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Append a row, returning self for chaining
    pub fn with_row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }
}

/// All worksheets of a workbook in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workbook {
    pub worksheets: Vec<Worksheet>,
}

impl Workbook {
    pub fn worksheet(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn worksheet_names(&self) -> Vec<&str> {
        self.worksheets.iter().map(|sheet| sheet.name.as_str()).collect()
    }
}
