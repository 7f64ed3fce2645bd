//! Run the full read, filter, write pipeline.

use std::path::PathBuf;

use mapcycle_core::MapList;
use mapcycle_kv::KvError;

use crate::emit::{MAPCYCLE_FILE_NAME, write_mapcycle_file};
use crate::error::GeneratorError;
use crate::extract::extract_maps;
use crate::options::GeneratorOptions;

/// What happened during a [`MapCycleGenerator::generate`] run.
///
/// A run never fails as a whole; stage failures are recorded here.
#[derive(Debug)]
pub struct GenerateReport {
    /// Maps that passed the filter.
    pub maps_found: usize,
    /// Map lines written to the output file.
    pub maps_written: usize,
    /// Path of the written mapcycle, if the output stage succeeded.
    pub output: Option<PathBuf>,
    pub input_error: Option<GeneratorError>,
    pub output_error: Option<GeneratorError>,
}

impl GenerateReport {
    /// True when both stages completed.
    pub fn is_clean(&self) -> bool {
        self.input_error.is_none() && self.output_error.is_none()
    }
}

/// Turns one `items_game.txt` into one `mapcycle_matchmaking.txt`.
#[derive(Debug, Clone)]
pub struct MapCycleGenerator {
    input: PathBuf,
    output_dir: Option<PathBuf>,
    options: GeneratorOptions,
}

impl MapCycleGenerator {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: None,
            options: GeneratorOptions::default(),
        }
    }

    pub fn options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Write into `dir` instead of the current working directory.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Read and filter the input document.
    pub fn load_maps(&self) -> Result<MapList, GeneratorError> {
        let root = mapcycle_kv::parse_file(&self.input).map_err(|e| match e {
            KvError::Io(source) => GeneratorError::InputUnavailable {
                path: self.input.clone(),
                source,
            },
            source => GeneratorError::InvalidDocument {
                path: self.input.clone(),
                source,
            },
        })?;

        Ok(extract_maps(&root, &self.options))
    }

    /// Extract, then write.
    ///
    /// If the input can't be loaded the mapcycle is still written from an
    /// empty list, so the output always reflects the latest run.
    pub fn generate(&self) -> GenerateReport {
        let (maps, input_error) = match self.load_maps() {
            Ok(maps) => {
                log::debug!("Found {} maps in {}", maps.len(), self.input.display());
                (maps, None)
            }
            Err(e) => {
                log::error!("{e}");
                (MapList::new(), Some(e))
            }
        };

        let mut report = GenerateReport {
            maps_found: maps.len(),
            maps_written: 0,
            output: None,
            input_error,
            output_error: None,
        };

        let written = self
            .resolve_output_dir()
            .and_then(|dir| write_mapcycle_file(&dir, &maps, &self.options));

        match written {
            Ok((path, lines)) => {
                report.maps_written = lines;
                report.output = Some(path);
            }
            Err(e) => {
                log::error!("{e}");
                report.output_error = Some(e);
            }
        }

        report
    }

    fn resolve_output_dir(&self) -> Result<PathBuf, GeneratorError> {
        match &self.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(|source| GeneratorError::OutputUnavailable {
                path: PathBuf::from(MAPCYCLE_FILE_NAME),
                source,
            }),
        }
    }
}
