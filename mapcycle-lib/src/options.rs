use serde::Deserialize;

use mapcycle_core::{GameType, MatchmakingCategory};

/// Switches that decide which maps end up in the mapcycle and how the file
/// is laid out.
///
/// Defaults match a stock server: seasonal and unlisted maps are left out,
/// competitive maps are left out, and group headers are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Include the `halloween` bucket.
    pub halloween: bool,
    /// Include the `christmas` bucket.
    pub christmas: bool,
    /// Include buckets with no (or an unknown) `mm_type`.
    pub unlisted: bool,
    /// Exclude buckets tagged `alternative`.
    pub no_alternatives: bool,
    /// Write each map name at most once across the whole file.
    pub no_duplicates: bool,
    /// Write a `// <game type>` line before each group.
    pub add_comments: bool,
    /// Exclude buckets tagged `competitive_6v6`.
    pub no_comp: bool,
    /// Exclude buckets tagged `core`.
    pub no_core: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            halloween: false,
            christmas: false,
            unlisted: false,
            no_alternatives: false,
            no_duplicates: false,
            add_comments: true,
            no_comp: true,
            no_core: false,
        }
    }
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn halloween(mut self, include: bool) -> Self {
        self.halloween = include;
        self
    }

    pub fn christmas(mut self, include: bool) -> Self {
        self.christmas = include;
        self
    }

    pub fn unlisted(mut self, include: bool) -> Self {
        self.unlisted = include;
        self
    }

    pub fn no_alternatives(mut self, exclude: bool) -> Self {
        self.no_alternatives = exclude;
        self
    }

    pub fn no_duplicates(mut self, no_duplicates: bool) -> Self {
        self.no_duplicates = no_duplicates;
        self
    }

    pub fn add_comments(mut self, add_comments: bool) -> Self {
        self.add_comments = add_comments;
        self
    }

    pub fn no_comp(mut self, exclude: bool) -> Self {
        self.no_comp = exclude;
        self
    }

    pub fn no_core(mut self, exclude: bool) -> Self {
        self.no_core = exclude;
        self
    }

    /// Whether a seasonal bucket is switched off. Non-seasonal buckets are
    /// never excluded here.
    pub fn excludes_season(&self, game_type: GameType) -> bool {
        match game_type {
            GameType::Halloween => !self.halloween,
            GameType::Christmas => !self.christmas,
            _ => false,
        }
    }

    /// Whether buckets in this matchmaking category are left out.
    pub fn excludes_category(&self, category: MatchmakingCategory) -> bool {
        match category {
            MatchmakingCategory::Core => self.no_core,
            MatchmakingCategory::Alternative => self.no_alternatives,
            MatchmakingCategory::Competitive => self.no_comp,
            MatchmakingCategory::Unlisted => !self.unlisted,
            MatchmakingCategory::SpecialEvents => false,
        }
    }
}
