use log::{info, debug};
use std::path::PathBuf;

use crate::aggregation;
use crate::app_config::Config;
use crate::errors::AppError;
use crate::extraction::{self, SeasonExtraction};
use crate::imdb::Ratings;
use crate::models::SeasonsDocument;
use crate::output;
use crate::translation;
use crate::workbook::{self, Workbook};

// @module: Application controller for the workbook to JSON sync

/// Per-season line of the run summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonSummary {
    pub number: u32,
    pub year: String,
    pub episodes: usize,
}

/// What a run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub seasons: Vec<SeasonSummary>,
    pub total_episodes: usize,
    pub skipped_rows: usize,
    pub output_path: PathBuf,
}

/// Main application controller for the sync pipeline
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config
            .validate()
            .map_err(|e| AppError::Config(format!("{:#}", e)))?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load, extract, aggregate and write. Progress goes to stdout.
    ///
    /// # Errors
    /// `AppError::Source` when the workbook cannot be loaded and
    /// `AppError::Write` when the document cannot be written.
    pub fn run(&self) -> Result<RunSummary, AppError> {
        let input = &self.config.input_path;
        println!("Parsing {}...", input.display());

        let book = workbook::read_workbook(input)?;
        let (document, skipped_rows) = self.build_document(&book);

        let output_path = self.config.output_path.clone();
        println!("\nWriting to {}...", output_path.display());
        output::write_document(&document, &output_path)?;

        let summary = Self::summarize(&document, skipped_rows, output_path);
        Self::print_summary(&summary);
        Ok(summary)
    }

    /// Transform a loaded workbook into the output document; also returns
    /// the number of skipped rows
    pub fn build_document(&self, workbook: &Workbook) -> (SeasonsDocument, usize) {
        let translator = translation::translator_for(self.config.translate);
        debug!("Using {} translator", translator.name());

        let seasons = extraction::select_seasons(workbook, &self.config.season_prefix);
        info!("Found {} season worksheet(s)", seasons.len());

        let extractions: Vec<SeasonExtraction> = seasons
            .iter()
            .map(|season| {
                println!("Processing {}...", season.name());
                let extraction = extraction::extract_season(season, translator.as_ref());
                println!("  Found {} episodes", extraction.episodes.len());
                extraction
            })
            .collect();
        let skipped_rows = extractions.iter().map(|e| e.skipped_rows).sum();

        let ratings = self.load_ratings();
        let document = aggregation::build_document(
            self.config.series.clone(),
            extractions,
            self.config.numbering,
            ratings.as_ref(),
        );

        (document, skipped_rows)
    }

    // @returns: Ratings when IMDb enrichment is enabled
    fn load_ratings(&self) -> Option<Ratings> {
        if !self.config.imdb.enabled {
            return None;
        }
        Some(match &self.config.imdb.ratings_path {
            Some(path) => Ratings::load_or_default(path),
            None => Ratings::default(),
        })
    }

    fn summarize(document: &SeasonsDocument, skipped_rows: usize, output_path: PathBuf) -> RunSummary {
        RunSummary {
            seasons: document
                .seasons
                .iter()
                .map(|season| SeasonSummary {
                    number: season.number,
                    year: season.year.clone(),
                    episodes: season.episodes,
                })
                .collect(),
            total_episodes: document.total_episodes(),
            skipped_rows,
            output_path,
        }
    }

    fn print_summary(summary: &RunSummary) {
        println!("\n✓ Successfully extracted {} seasons", summary.seasons.len());
        println!("✓ Total episodes: {}", summary.total_episodes);
        for season in &summary.seasons {
            println!(
                "  Season {} ({}): {} episodes",
                season.number, season.year, season.episodes
            );
        }
        if summary.skipped_rows > 0 {
            info!("Skipped {} row(s) with missing columns or no valid episode number", summary.skipped_rows);
        }
    }
}
