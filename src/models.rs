/*!
 * Records produced by the pipeline and serialized into the output document.
 *
 * Field order in these structs is the key order in the JSON output.
 */

use serde::{Deserialize, Serialize};

/// Sentinel stored in `mistress` when the cell is empty
pub const NO_MISTRESS: &str = "None";

/// Year reported for a season whose first air date carries no year
pub const UNKNOWN_YEAR: &str = "Unknown";

/// One episode, normalized and glossed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub season_number: u32,
    /// Episode number within the season
    pub episode_number: u32,
    /// Running number across all seasons, only under global numbering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_episode_number: Option<u32>,
    pub title: String,
    pub original_title: String,
    pub writer: String,
    pub director: String,
    pub air_date: String,
    pub mistress: String,
    pub description: String,
    pub music: Vec<String>,
    pub hbo_review: String,
    pub godfather_reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_rating: Option<f64>,
}

/// All episodes of one season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub number: u32,
    /// Number of episodes in `episode_list`
    pub episodes: usize,
    pub year: String,
    pub episode_list: Vec<Episode>,
}

/// Static description of the series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesInfo {
    pub title: String,
    pub description: String,
    pub seasons: u32,
    pub total_episodes: u32,
    pub original_run: String,
    pub network: String,
}

impl Default for SeriesInfo {
    fn default() -> Self {
        Self {
            title: "The Sopranos".to_string(),
            description: "The Sopranos is an American crime drama television series created by David Chase. \
                The story revolves around Tony Soprano, a New Jersey-based Italian-American mobster, \
                portraying the difficulties that he faces as he tries to balance his family life with \
                his role as the leader of a criminal organization."
                .to_string(),
            seasons: 6,
            total_episodes: 86,
            original_run: "1999-2007".to_string(),
            network: "HBO".to_string(),
        }
    }
}

/// The document written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonsDocument {
    pub series_info: SeriesInfo,
    pub seasons: Vec<Season>,
}

impl SeasonsDocument {
    pub fn total_episodes(&self) -> usize {
        self.seasons.iter().map(|season| season.episodes).sum()
    }
}
