/*!
 * Assembly of per-sheet extractions into the output document.
 */

use log::debug;

use crate::app_config::NumberingMode;
use crate::extraction::SeasonExtraction;
use crate::imdb::{self, Ratings};
use crate::models::{Episode, Season, SeasonsDocument, SeriesInfo, UNKNOWN_YEAR};

/// Year of a season, taken from the last token of its first air date.
///
/// Only a four-digit token counts as a year; anything else, including a
/// missing first episode or an empty air date, gives `"Unknown"`.
pub fn derive_year(episodes: &[Episode]) -> String {
    episodes
        .first()
        .and_then(|episode| episode.air_date.split_whitespace().last())
        .filter(|token| token.len() == 4 && token.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_YEAR.to_string())
}

/// Group extractions into seasons, ordered by season number.
///
/// Seasons without episodes are dropped. Under `NumberingMode::Global`
/// episodes are numbered 1..N across the sorted seasons. When `ratings` is
/// given, every episode gets an IMDb link and rating.
pub fn build_document(
    series_info: SeriesInfo,
    extractions: Vec<SeasonExtraction>,
    numbering: NumberingMode,
    ratings: Option<&Ratings>,
) -> SeasonsDocument {
    let mut seasons: Vec<Season> = extractions
        .into_iter()
        .filter_map(|extraction| {
            if extraction.episodes.is_empty() {
                debug!("Dropping {}: no valid episodes", extraction.sheet_name);
                return None;
            }
            Some(Season {
                number: extraction.number,
                episodes: extraction.episodes.len(),
                year: derive_year(&extraction.episodes),
                episode_list: extraction.episodes,
            })
        })
        .collect();

    // Stable, so duplicate season numbers keep document order
    seasons.sort_by_key(|season| season.number);

    if numbering == NumberingMode::Global {
        let all_episodes = seasons.iter_mut().flat_map(|season| season.episode_list.iter_mut());
        for (counter, episode) in (1u32..).zip(all_episodes) {
            episode.global_episode_number = Some(counter);
        }
    }

    if let Some(ratings) = ratings {
        for season in &mut seasons {
            for (index, episode) in season.episode_list.iter_mut().enumerate() {
                let position = index + 1;
                episode.imdb_link = Some(imdb::episode_link(season.number, position).unwrap_or_default());
                episode.imdb_rating = Some(ratings.rating(season.number, position));
            }
        }
    }

    SeasonsDocument {
        series_info,
        seasons,
    }
}
