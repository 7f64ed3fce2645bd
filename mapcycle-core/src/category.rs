/// Matchmaking pool a `maps` bucket belongs to, taken from its `mm_type`
/// attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchmakingCategory {
    Core,
    Alternative,
    SpecialEvents,
    Competitive,
    /// No `mm_type`, or a value we don't recognize.
    #[default]
    Unlisted,
}

impl MatchmakingCategory {
    /// Resolve an `mm_type` value. Matching is exact; anything unknown is
    /// `Unlisted`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "core" => Self::Core,
            "alternative" => Self::Alternative,
            "special_events" => Self::SpecialEvents,
            "competitive_6v6" => Self::Competitive,
            _ => Self::Unlisted,
        }
    }

    /// Resolve an optional `mm_type` value; an absent attribute is `Unlisted`.
    pub fn from_attribute(value: Option<&str>) -> Self {
        value.map(Self::from_name).unwrap_or_default()
    }

    /// The `mm_type` string for this category, if it has one.
    pub fn mm_type(&self) -> Option<&'static str> {
        match self {
            Self::Core => Some("core"),
            Self::Alternative => Some("alternative"),
            Self::SpecialEvents => Some("special_events"),
            Self::Competitive => Some("competitive_6v6"),
            Self::Unlisted => None,
        }
    }
}

impl std::fmt::Display for MatchmakingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mm_type().unwrap_or("unlisted"))
    }
}
