/*!
 * Selection of the worksheets that hold season tables.
 */

use log::debug;

use crate::workbook::{Workbook, Worksheet};

/// A worksheet recognized as a season table
#[derive(Debug, Clone, Copy)]
pub struct SeasonSheet<'a> {
    pub number: u32,
    pub sheet: &'a Worksheet,
}

impl SeasonSheet<'_> {
    pub fn name(&self) -> &str {
        &self.sheet.name
    }
}

/// Parse the season number out of a worksheet name.
///
/// The name must be `prefix`, optional whitespace, then a decimal integer:
/// `Season1`, `Season 3` and `Season 0` qualify, `Season`, `Season X` and
/// `Notes` do not.
pub fn season_number(name: &str, prefix: &str) -> Option<u32> {
    let suffix = name.strip_prefix(prefix)?.trim();
    if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    suffix.parse::<u32>().ok()
}

/// Worksheets whose names denote a season, in document order
pub fn select_seasons<'a>(workbook: &'a Workbook, prefix: &str) -> Vec<SeasonSheet<'a>> {
    workbook
        .worksheets
        .iter()
        .filter_map(|sheet| match season_number(&sheet.name, prefix) {
            Some(number) => Some(SeasonSheet { number, sheet }),
            None => {
                debug!("Skipping worksheet {:?}: not a season table", sheet.name);
                None
            }
        })
        .collect()
}
