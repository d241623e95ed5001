/*!
 * Conversion of worksheet rows into episode records.
 */

use log::debug;

use super::columns::{Column, MIN_CELLS};
use super::sections::SeasonSheet;
use crate::formatting::{clean_text, normalize_air_date, split_music_tracks};
use crate::models::{Episode, NO_MISTRESS};
use crate::translation::Translator;
use crate::workbook::Row;

/// Why a row produced no episode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer cells than `MIN_CELLS`
    TooFewCells { found: usize },
    /// Episode cell missing, non-numeric or zero
    InvalidEpisodeNumber(String),
}

/// Result of extracting one row
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Extracted(Box<Episode>),
    Skipped(SkipReason),
}

/// Episodes of one season worksheet plus the number of rows dropped
#[derive(Debug, Clone)]
pub struct SeasonExtraction {
    pub number: u32,
    pub sheet_name: String,
    pub episodes: Vec<Episode>,
    pub skipped_rows: usize,
}

/// Parse a positive in-season episode number
pub fn parse_episode_number(value: Option<&str>) -> Option<u32> {
    let value = value?.trim();
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse::<u32>().ok().filter(|n| *n > 0)
}

/// Build an episode from a data row, or say why the row is skipped
pub fn extract_episode(row: &Row, season: u32, translator: &dyn Translator) -> RowOutcome {
    if row.len() < MIN_CELLS {
        return RowOutcome::Skipped(SkipReason::TooFewCells { found: row.len() });
    }

    let text = |column: Column| row.text_at(column.index());

    let Some(episode_number) = parse_episode_number(text(Column::Episode)) else {
        let raw = text(Column::Episode).unwrap_or_default().to_string();
        return RowOutcome::Skipped(SkipReason::InvalidEpisodeNumber(raw));
    };

    let title = clean_text(text(Column::Title));
    let mistress = match clean_text(text(Column::Mistress)) {
        m if m.is_empty() => NO_MISTRESS.to_string(),
        m => m,
    };

    RowOutcome::Extracted(Box::new(Episode {
        season_number: season,
        episode_number,
        global_episode_number: None,
        original_title: title.clone(),
        title,
        writer: clean_text(text(Column::Writer)),
        director: clean_text(text(Column::Director)),
        air_date: normalize_air_date(text(Column::AirDate).unwrap_or_default()),
        mistress,
        description: translator.translate(&clean_text(text(Column::Description))),
        music: split_music_tracks(text(Column::Music)),
        hbo_review: clean_text(text(Column::HboReview)),
        godfather_reference: translator.translate(&clean_text(text(Column::Godfather))),
        imdb_link: None,
        imdb_rating: None,
    }))
}

/// Extract every data row of a season sheet; the first row is the header
pub fn extract_season(season: &SeasonSheet<'_>, translator: &dyn Translator) -> SeasonExtraction {
    let mut episodes = Vec::new();
    let mut skipped_rows = 0;

    for (index, row) in season.sheet.rows.iter().enumerate().skip(1) {
        match extract_episode(row, season.number, translator) {
            RowOutcome::Extracted(episode) => episodes.push(*episode),
            RowOutcome::Skipped(reason) => {
                // Spreadsheet row numbers are 1-based
                debug!("{}: skipping row {}: {:?}", season.name(), index + 1, reason);
                skipped_rows += 1;
            }
        }
    }

    SeasonExtraction {
        number: season.number,
        sheet_name: season.name().to_string(),
        episodes,
        skipped_rows,
    }
}
