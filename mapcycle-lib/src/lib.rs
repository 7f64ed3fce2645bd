//! Build a TF2 `mapcycle_matchmaking.txt` from `items_game.txt`.
//!
//! [`MapCycleGenerator`] is the entry point; [`extract`] and [`emit`] expose
//! the two halves of the pipeline for callers that already hold a parsed
//! document or a map list.

pub mod emit;
pub mod error;
pub mod extract;
pub mod generator;
pub mod options;
pub mod settings;

pub use emit::{MAPCYCLE_FILE_NAME, write_mapcycle, write_mapcycle_file};
pub use error::{GeneratorError, SettingsError};
pub use extract::extract_maps;
pub use generator::{GenerateReport, MapCycleGenerator};
pub use options::GeneratorOptions;

pub use mapcycle_core::{GameType, MapList, MapRecord, MatchmakingCategory};
