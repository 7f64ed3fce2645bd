/// Game type identifiers for the `maps` buckets in `items_game.txt`.
///
/// This enum is the closed set of buckets a map can be written under.
/// Declaration order is the order groups appear in the generated mapcycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameType {
    AttackDefense,
    Ctf,
    CapturePoint,
    Koth,
    Payload,
    PayloadRace,
    Other,
    Arena,
    Featured,
    Halloween,
    Christmas,
    Powerup,
    Passtime,
    Competitive6v6,
}

/// Placeholder name for a game type that could not be resolved.
pub const UNKNOWN_GAME_TYPE_NAME: &str = "UNKNOWN-GAME-TYPE";

/// Section names that are known to `items_game.txt` but do not map to a
/// bucket we write out.
const IGNORED_NAMES: &[&str] = &["specialevent_placeholder"];

/// All game type variants in output order.
const ALL_GAME_TYPES: &[GameType] = &[
    GameType::AttackDefense,
    GameType::Ctf,
    GameType::CapturePoint,
    GameType::Koth,
    GameType::Payload,
    GameType::PayloadRace,
    GameType::Other,
    GameType::Arena,
    GameType::Featured,
    GameType::Halloween,
    GameType::Christmas,
    GameType::Powerup,
    GameType::Passtime,
    GameType::Competitive6v6,
];

impl GameType {
    /// Canonical section name, as it appears under `maps` and in the
    /// `// <name>` header lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AttackDefense => "attack_defense",
            Self::Ctf => "ctf",
            Self::CapturePoint => "capture_point",
            Self::Koth => "koth",
            Self::Payload => "payload",
            Self::PayloadRace => "payload_race",
            Self::Other => "other",
            Self::Arena => "arena",
            Self::Featured => "featured",
            Self::Halloween => "halloween",
            Self::Christmas => "christmas",
            Self::Powerup => "powerup",
            Self::Passtime => "passtime",
            Self::Competitive6v6 => "competitive_6v6",
        }
    }

    /// Human readable name, used for log output only.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AttackDefense => "Attack/Defense",
            Self::Ctf => "Capture the Flag",
            Self::CapturePoint => "Control Point",
            Self::Koth => "King of the Hill",
            Self::Payload => "Payload",
            Self::PayloadRace => "Payload Race",
            Self::Other => "Other",
            Self::Arena => "Arena",
            Self::Featured => "Featured",
            Self::Halloween => "Halloween",
            Self::Christmas => "Christmas",
            Self::Powerup => "Mannpower",
            Self::Passtime => "PASS Time",
            Self::Competitive6v6 => "Competitive 6v6",
        }
    }

    /// Whether this bucket is only populated during a seasonal event.
    pub fn is_seasonal(&self) -> bool {
        matches!(self, Self::Halloween | Self::Christmas)
    }

    /// Resolve a section name to a game type.
    ///
    /// Matching is exact. Unknown names and ignored placeholders return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        if IGNORED_NAMES.contains(&name) {
            return None;
        }
        ALL_GAME_TYPES.iter().copied().find(|gt| gt.name() == name)
    }

    /// All 14 game types in output order.
    pub fn all() -> &'static [GameType] {
        ALL_GAME_TYPES
    }
}

/// Name for an optional game type, falling back to [`UNKNOWN_GAME_TYPE_NAME`].
pub fn game_type_name(game_type: Option<GameType>) -> &'static str {
    game_type.map_or(UNKNOWN_GAME_TYPE_NAME, |gt| gt.name())
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a string cannot be parsed into a `GameType`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown game type: '{0}'")]
pub struct GameTypeParseError(pub String);

impl std::str::FromStr for GameType {
    type Err = GameTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| GameTypeParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/game_type_tests.rs"]
mod tests;
