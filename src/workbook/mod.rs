/*!
 * Source workbook loading.
 *
 * - `model`: worksheets, rows and cells held in memory
 * - `reader`: SpreadsheetML 2003 XML parser built on quick-xml
 */

pub use self::model::{Cell, Row, Workbook, Worksheet};
pub use self::reader::{parse_workbook, read_workbook};

pub mod model;
pub mod reader;
