//! The entry catalog — the fixed, ordered list of teams on the wheel.
//!
//! Catalog order is the only ordering relation: it decides slice placement
//! around the wheel.  Labels and colours are not required to be unique.

use std::fmt;

// ───────────────────────────────────────── colour ────────────

/// A 24-bit display colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::from_u32(0xFFFFFF);
    pub const BLACK: Rgb = Rgb::from_u32(0x000000);
    pub const RED: Rgb = Rgb::from_u32(0xFF0000);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_u32(packed: u32) -> Self {
        Self::new(
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
        )
    }
}

/// Upper-case `#RRGGBB`, the way team colours are usually written.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// ───────────────────────────────────────── entries ───────────

/// One selectable item: a team name and its display colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    pub color: Rgb,
}

impl Entry {
    pub fn new(label: impl Into<String>, color: Rgb) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// Immutable ordered list of entries, built once at startup and shared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// The thirty NBA teams in alphabetical order by city.
    pub fn nba() -> Self {
        Self::new(
            NBA_TEAMS
                .iter()
                .map(|&(label, color)| Entry::new(label, Rgb::from_u32(color)))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
impl Catalog {
    pub fn contains(&self, entry: &Entry) -> bool {
        self.entries.iter().any(|e| e == entry)
    }
}

const NBA_TEAMS: &[(&str, u32)] = &[
    ("Atlanta Hawks", 0xE03A3E),
    ("Boston Celtics", 0x007A33),
    ("Brooklyn Nets", 0x000000),
    ("Charlotte Hornets", 0x1D1160),
    ("Chicago Bulls", 0xCE1141),
    ("Cleveland Cavaliers", 0x860038),
    ("Dallas Mavericks", 0x00538C),
    ("Denver Nuggets", 0x0E2240),
    ("Detroit Pistons", 0xC8102E),
    ("Golden State Warriors", 0x1D428A),
    ("Houston Rockets", 0xCE1141),
    ("Indiana Pacers", 0x002D62),
    ("Los Angeles Clippers", 0xC8102E),
    ("Los Angeles Lakers", 0x552583),
    ("Memphis Grizzlies", 0x5D76A9),
    ("Miami Heat", 0x98002E),
    ("Milwaukee Bucks", 0x00471B),
    ("Minnesota Timberwolves", 0x0C2340),
    ("New Orleans Pelicans", 0x0C2340),
    ("New York Knicks", 0x006BB6),
    ("Oklahoma City Thunder", 0x007AC1),
    ("Orlando Magic", 0x0077C0),
    ("Philadelphia 76ers", 0x006BB6),
    ("Phoenix Suns", 0x1D1160),
    ("Portland Trail Blazers", 0xE03A3E),
    ("Sacramento Kings", 0x5A2D81),
    ("San Antonio Spurs", 0xC4CED4),
    ("Toronto Raptors", 0xCE1141),
    ("Utah Jazz", 0x002B5C),
    ("Washington Wizards", 0x002B5C),
];
