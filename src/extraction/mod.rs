/*!
 * Extraction of episode records from season worksheets.
 *
 * - `sections`: which worksheets are season tables
 * - `columns`: the fixed column layout
 * - `rows`: row to episode conversion and per-season extraction
 */

pub use self::columns::{Column, MIN_CELLS};
pub use self::rows::{extract_episode, extract_season, RowOutcome, SeasonExtraction, SkipReason};
pub use self::sections::{select_seasons, season_number, SeasonSheet};

pub mod columns;
pub mod rows;
pub mod sections;
