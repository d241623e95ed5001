/*!
 * # seasons-sync
 *
 * Converts the SpreadsheetML export of the series episode guide into the
 * JSON document consumed by the front-end.
 *
 * ## Features
 *
 * - Read SpreadsheetML 2003 workbooks (one worksheet per season)
 * - Extract episodes from a fixed column layout, skipping malformed rows
 * - Normalize text and Excel date-times
 * - Gloss Swedish descriptions into English with a static word table
 * - Optional running episode numbers and IMDb links/ratings
 * - Atomic JSON output
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `workbook`: Source document model and XML reader
 * - `extraction`: Season worksheet selection and row extraction
 * - `formatting`: Text cleanup and date normalization
 * - `translation`: Heuristic Swedish to English gloss
 * - `aggregation`: Season assembly and ordering
 * - `imdb`: IMDb link and rating enrichment
 * - `output`: JSON serialization and writing
 * - `app_controller`: Pipeline driver
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod aggregation;
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod extraction;
pub mod file_utils;
pub mod formatting;
pub mod imdb;
pub mod models;
pub mod output;
pub mod translation;
pub mod workbook;

// Re-export main types for easier usage
pub use app_config::{Config, NumberingMode};
pub use app_controller::{Controller, RunSummary};
pub use errors::{AppError, SourceError, WriteError};
pub use models::{Episode, Season, SeasonsDocument, SeriesInfo};
pub use translation::{GlossTranslator, Translator};
