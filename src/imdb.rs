/*!
 * Optional IMDb enrichment: episode links and ratings.
 *
 * Links come from a static table of episode IDs per season, indexed by the
 * episode's position in its season. Ratings come from a JSON file shaped as
 * `{ "1": [8.1, 8.0, ...], "2": [...] }`.
 */

use anyhow::{Context, Result};
use log::{debug, warn};
use std::collections::HashMap;
use std::path::Path;

use crate::file_utils::FileManager;

const IMDB_TITLE_URL: &str = "https://www.imdb.com/title/";

/// IMDb title IDs by season, in airing order
const EPISODE_IDS: [(u32, &[&str]); 6] = [
    (1, &[
        "tt0705282", "tt0705223", "tt0705239", "tt0705263", "tt0705236", "tt0705270", "tt0705241",
        "tt0705280", "tt0705231", "tt0705224", "tt0705269", "tt0705256", "tt0705253",
    ]),
    (2, &[
        "tt0705250", "tt0705240", "tt0705288", "tt0705237", "tt0705230", "tt0705278", "tt0705238",
        "tt0705248", "tt0705247", "tt0705232", "tt0705252", "tt0705279", "tt0705249",
    ]),
    (3, &[
        "tt0705266", "tt0705273", "tt0705246", "tt0705243", "tt0705228", "tt0705291", "tt0705275",
        "tt0705251", "tt0705284", "tt0705287", "tt0705272", "tt0705227", "tt0705229",
    ]),
    (4, &[
        "tt0705245", "tt0705268", "tt0705234", "tt0705286", "tt0705271", "tt0705244", "tt0705292",
        "tt0705265", "tt0705295", "tt0705283", "tt0705233", "tt0705242", "tt0705294",
    ]),
    (5, &[
        "tt0705289", "tt0705274", "tt0705293", "tt0705226", "tt0705255", "tt0705276", "tt0705254",
        "tt0705262", "tt0705290", "tt0705235", "tt0705285", "tt0705260", "tt0705225",
    ]),
    (6, &[
        "tt0705264", "tt0705258", "tt0763238", "tt0705277", "tt0705267", "tt0705259", "tt0705261",
        "tt0705257", "tt0705281", "tt0756404", "tt0790351", "tt0793256", "tt0979770", "tt0979771",
        "tt0979769", "tt0995834", "tt0995835", "tt0995836", "tt0995837", "tt0995838", "tt0995839",
    ]),
];

/// Link to the IMDb page of the episode at `position` (1-based) in `season`
pub fn episode_link(season: u32, position: usize) -> Option<String> {
    let index = position.checked_sub(1)?;
    EPISODE_IDS
        .iter()
        .find(|(number, _)| *number == season)
        .and_then(|(_, ids)| ids.get(index))
        .map(|id| format!("{}{}/", IMDB_TITLE_URL, id))
}

/// Episode ratings keyed by season, in airing order
#[derive(Debug, Clone, Default)]
pub struct Ratings {
    by_season: HashMap<u32, Vec<f64>>,
}

impl Ratings {
    /// Parse ratings from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<f64>> =
            serde_json::from_str(content).context("Failed to parse IMDb ratings JSON")?;

        let mut by_season = HashMap::with_capacity(raw.len());
        for (key, ratings) in raw {
            match key.trim().parse::<u32>() {
                Ok(season) => {
                    by_season.insert(season, ratings);
                }
                Err(_) => debug!("Ignoring ratings for non-numeric season key {:?}", key),
            }
        }
        Ok(Self { by_season })
    }

    /// Load ratings from a file. A missing or unreadable file yields no
    /// ratings and a warning; enrichment is never fatal.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let loaded = FileManager::read_to_string(path).and_then(|content| Self::from_json(&content));
        match loaded {
            Ok(ratings) => ratings,
            Err(e) => {
                warn!("Could not load IMDb ratings from {:?}: {:#}", path, e);
                Self::default()
            }
        }
    }

    /// Rating of the episode at `position` (1-based); 0.0 when unknown
    pub fn rating(&self, season: u32, position: usize) -> f64 {
        position
            .checked_sub(1)
            .and_then(|index| self.by_season.get(&season)?.get(index).copied())
            .unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.by_season.is_empty()
    }
}
