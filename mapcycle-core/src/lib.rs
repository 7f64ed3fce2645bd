pub mod category;
pub mod game_type;

pub use category::MatchmakingCategory;
pub use game_type::{GameType, GameTypeParseError, UNKNOWN_GAME_TYPE_NAME, game_type_name};

/// A map that survived filtering, tagged with the bucket it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapRecord {
    pub game_type: GameType,
    pub name: String,
}

impl MapRecord {
    pub fn new(game_type: GameType, name: impl Into<String>) -> Self {
        Self {
            game_type,
            name: name.into(),
        }
    }
}

/// Maps in the order they were found in the source document.
///
/// Records are only ever appended; nothing reorders or removes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapList {
    records: Vec<MapRecord>,
}

impl MapList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MapRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MapRecord> {
        self.records.iter()
    }

    /// Records belonging to one game type, in stored order.
    pub fn of_type(&self, game_type: GameType) -> impl Iterator<Item = &MapRecord> {
        self.records
            .iter()
            .filter(move |record| record.game_type == game_type)
    }
}

impl<'a> IntoIterator for &'a MapList {
    type Item = &'a MapRecord;
    type IntoIter = std::slice::Iter<'a, MapRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<MapRecord> for MapList {
    fn from_iter<I: IntoIterator<Item = MapRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
