use super::season::{Season, ALL_SEASONS_LABEL};

/// Category or rarity selection: everything, or one exact value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    /// Parse a select-box value; `"all"` means no restriction.
    pub fn parse(value: &str) -> Choice {
        if value == "all" {
            Choice::All
        } else {
            Choice::Only(value.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(expected) => expected == value,
        }
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Choice::parse(value)
    }
}

/// Season selection. Labels that name no season are kept so that they can
/// match nothing instead of silently widening the filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SeasonChoice {
    #[default]
    All,
    Season(Season),
    Unrecognized(String),
}

impl SeasonChoice {
    pub fn parse(label: &str) -> SeasonChoice {
        let label = label.trim();
        if label == ALL_SEASONS_LABEL || label == "all" {
            return SeasonChoice::All;
        }
        match Season::from_label(label) {
            Some(season) => SeasonChoice::Season(season),
            None => SeasonChoice::Unrecognized(label.to_string()),
        }
    }

    /// Substring the record's season text must contain; `""` for unknown labels.
    pub fn months(&self) -> Option<&'static str> {
        match self {
            SeasonChoice::All => None,
            SeasonChoice::Season(season) => Some(season.months()),
            SeasonChoice::Unrecognized(_) => Some(""),
        }
    }

    pub fn matches(&self, season_text: &str) -> bool {
        match self.months() {
            None => true,
            Some("") => false,
            Some(months) => season_text.contains(months),
        }
    }
}

impl From<&str> for SeasonChoice {
    fn from(label: &str) -> Self {
        SeasonChoice::parse(label)
    }
}

impl From<Season> for SeasonChoice {
    fn from(season: Season) -> Self {
        SeasonChoice::Season(season)
    }
}

/// Combined search and filter parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub kind: Choice,
    pub rarity: Choice,
    pub season: SeasonChoice,
}

impl FilterCriteria {
    /// Criteria that keep every record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_kind(mut self, kind: impl Into<Choice>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_rarity(mut self, rarity: impl Into<Choice>) -> Self {
        self.rarity = rarity.into();
        self
    }

    pub fn with_season(mut self, season: impl Into<SeasonChoice>) -> Self {
        self.season = season.into();
        self
    }
}
