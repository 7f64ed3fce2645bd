//! Pull the enabled maps out of a parsed `items_game.txt`.

use mapcycle_core::{GameType, MapList, MapRecord, MatchmakingCategory};
use mapcycle_kv::KvSection;

use crate::options::GeneratorOptions;

const SECTION_MAPS: &str = "maps";
const SECTION_MAPLIST: &str = "maplist";
const KEY_NAME: &str = "name";
const KEY_ENABLED: &str = "enabled";
const KEY_MM_TYPE: &str = "mm_type";

/// Names shorter than this are treated as unset.
const MIN_MAP_NAME_LEN: usize = 3;

/// Walk `maps` under the document root and collect every enabled map whose
/// bucket passes the filter.
///
/// Only the first `maps` section is read. A document without one yields an
/// empty list.
pub fn extract_maps(root: &KvSection, options: &GeneratorOptions) -> MapList {
    let mut maps = MapList::new();

    let Some(buckets) = root.child(SECTION_MAPS) else {
        log::warn!("No '{SECTION_MAPS}' section in '{}'", root.name());
        return maps;
    };

    for bucket in buckets.children() {
        if let Some(game_type) = accept_bucket(bucket, options) {
            extract_bucket(bucket, game_type, &mut maps);
        }
    }

    maps
}

/// Decide whether a bucket is read, returning its game type if so.
fn accept_bucket(bucket: &KvSection, options: &GeneratorOptions) -> Option<GameType> {
    let game_type = GameType::from_name(bucket.name())?;

    if options.excludes_season(game_type) {
        log::debug!("Skipping seasonal bucket '{game_type}' ({})", game_type.display_name());
        return None;
    }

    // Last mm_type wins if a bucket declares more than one.
    let category =
        MatchmakingCategory::from_attribute(bucket.attributes_named(KEY_MM_TYPE).last());
    if options.excludes_category(category) {
        log::debug!(
            "Skipping {} bucket '{game_type}' (mm_type {category})",
            game_type.display_name()
        );
        return None;
    }

    Some(game_type)
}

fn extract_bucket(bucket: &KvSection, game_type: GameType, maps: &mut MapList) {
    for maplist in bucket.children_named(SECTION_MAPLIST) {
        for entry in maplist.children() {
            let Some(name) = entry.attributes_named(KEY_NAME).last() else {
                continue;
            };
            let enabled = entry
                .attributes_named(KEY_ENABLED)
                .last()
                .is_some_and(|value| is_enabled(value, name));

            if enabled && name.chars().count() >= MIN_MAP_NAME_LEN {
                maps.push(MapRecord::new(game_type, name));
            }
        }
    }
}

/// Interpret an `enabled` value. Anything that doesn't start with an
/// integer counts as disabled.
fn is_enabled(value: &str, map_name: &str) -> bool {
    match leading_int_is_nonzero(value) {
        Some(enabled) => enabled,
        None => {
            log::debug!("Treating '{map_name}' as disabled: enabled = {value:?}");
            false
        }
    }
}

/// Read an optional sign and the digits that follow, ignoring leading
/// whitespace and any trailing text (`"1 "` and `"1abc"` both read as 1),
/// and report whether that integer is non-zero. `None` if there are no
/// digits. The digit run is never converted, so it can be any length.
fn leading_int_is_nonzero(value: &str) -> Option<bool> {
    let trimmed = value.trim_start();
    let unsigned = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);

    let digits = &unsigned[..unsigned.bytes().take_while(u8::is_ascii_digit).count()];
    if digits.is_empty() {
        return None;
    }

    Some(digits.bytes().any(|d| d != b'0'))
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
