/*!
 * Column layout of a season worksheet.
 */

/// Fixed column positions of a season table (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Running number, unused
    Number = 0,
    Episode = 1,
    Title = 2,
    Writer = 3,
    Director = 4,
    AirDate = 5,
    Mistress = 6,
    Description = 7,
    Godfather = 8,
    Music = 9,
    HboReview = 10,
}

impl Column {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Rows with fewer cells than this (through `Mistress`) are skipped
pub const MIN_CELLS: usize = Column::Mistress.index() + 1;
