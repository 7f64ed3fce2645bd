//! Write a map list out as `mapcycle_matchmaking.txt`.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use mapcycle_core::{GameType, MapList};

use crate::error::GeneratorError;
use crate::options::GeneratorOptions;

/// File name of the generated mapcycle.
pub const MAPCYCLE_FILE_NAME: &str = "mapcycle_matchmaking.txt";

/// Write the mapcycle, grouped by game type in [`GameType::all`] order.
///
/// Every group gets its `// <game type>` header when comments are on, even
/// if no map landed in it. Returns the number of map lines written.
pub fn write_mapcycle<W: Write>(
    writer: &mut W,
    maps: &MapList,
    options: &GeneratorOptions,
) -> std::io::Result<usize> {
    let mut written: HashSet<&str> = HashSet::new();
    let mut lines = 0;

    for &game_type in GameType::all() {
        if options.add_comments {
            writeln!(writer, "// {}", game_type.name())?;
        }

        for record in maps.of_type(game_type) {
            if options.no_duplicates && written.contains(record.name.as_str()) {
                continue;
            }
            writeln!(writer, "{}", record.name)?;
            written.insert(&record.name);
            lines += 1;
        }
    }

    Ok(lines)
}

/// Create (or truncate) [`MAPCYCLE_FILE_NAME`] in `dir` and write the
/// mapcycle into it.
///
/// Returns the output path and the number of map lines written.
pub fn write_mapcycle_file(
    dir: &Path,
    maps: &MapList,
    options: &GeneratorOptions,
) -> Result<(PathBuf, usize), GeneratorError> {
    let path = dir.join(MAPCYCLE_FILE_NAME);

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(source) => return Err(GeneratorError::OutputUnavailable { path, source }),
    };

    let mut writer = BufWriter::new(file);
    let lines = write_mapcycle(&mut writer, maps, options)
        .and_then(|lines| writer.flush().map(|()| lines));

    match lines {
        Ok(lines) => Ok((path, lines)),
        Err(source) => Err(GeneratorError::WriteFailed { path, source }),
    }
}

#[cfg(test)]
#[path = "tests/emit_tests.rs"]
mod tests;
