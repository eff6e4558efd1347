use std::fmt;
use std::str::FromStr;

/// Label of the "every season" button.
pub const ALL_SEASONS_LABEL: &str = "Все";

/// Season filter buttons, in display order.
pub const SEASON_LABELS: [&str; 5] = [ALL_SEASONS_LABEL, "Весна", "Лето", "Осень", "Зима"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Весна",
            Season::Summer => "Лето",
            Season::Autumn => "Осень",
            Season::Winter => "Зима",
        }
    }

    /// Month range a record's season text must contain to match.
    pub fn months(self) -> &'static str {
        match self {
            Season::Spring => "Март-Май",
            Season::Summer => "Июнь-Август",
            Season::Autumn => "Сентябрь-Ноябрь",
            Season::Winter => "Декабрь-Февраль",
        }
    }

    /// Parse a button label; English names are accepted as aliases.
    pub fn from_label(label: &str) -> Option<Season> {
        let label = label.trim();
        Season::ALL.into_iter().find(|season| {
            season.label() == label || season.english_name().eq_ignore_ascii_case(label)
        })
    }

    fn english_name(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Season::from_label(s).ok_or_else(|| format!("unknown season: {}", s))
    }
}
