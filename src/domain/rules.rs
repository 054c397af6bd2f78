use std::fmt;
use std::str::FromStr;

use super::Cell;
use crate::error::{LifeError, Result};

/// Trait for cellular automaton rules
/// Lets the grid evolve under any birth/survival scheme
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &str;

    /// Apply rule to compute next cell state
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// Number of distinct digits a rule string can carry (0-9).
/// Only 0-8 can ever match a Moore neighbourhood count.
const COUNT_SLOTS: usize = 10;

/// Outer-totalistic life-like rule in `B<digits>/S<digits>` notation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LifeRule {
    name: String,
    birth: [bool; COUNT_SLOTS],
    survive: [bool; COUNT_SLOTS],
}

impl LifeRule {
    /// Build a rule from explicit neighbour counts. Counts above 9 are ignored.
    pub fn from_counts(name: &str, birth: &[u8], survive: &[u8]) -> Self {
        let mut rule = Self {
            name: name.to_owned(),
            birth: [false; COUNT_SLOTS],
            survive: [false; COUNT_SLOTS],
        };
        for &n in birth.iter().filter(|&&n| (n as usize) < COUNT_SLOTS) {
            rule.birth[n as usize] = true;
        }
        for &n in survive.iter().filter(|&&n| (n as usize) < COUNT_SLOTS) {
            rule.survive[n as usize] = true;
        }
        rule
    }

    /// Parse `B<digits>/S<digits>`. The `B`/`S` prefixes are case-insensitive,
    /// each digit is one neighbour count and either group may be empty.
    pub fn parse(notation: &str) -> Result<Self> {
        let invalid = |reason: &'static str| LifeError::InvalidRule {
            rule: notation.to_owned(),
            reason,
        };

        let (birth, survive) = notation
            .trim()
            .split_once('/')
            .ok_or_else(|| invalid("missing '/' separator"))?;

        let birth = parse_group(birth, 'B').map_err(invalid)?;
        let survive = parse_group(survive, 'S').map_err(invalid)?;

        let mut rule = Self::from_counts("", &birth, &survive);
        rule.name = rule.to_string();
        log::debug!("parsed rule {notation:?} as {rule}");
        Ok(rule)
    }

    /// Neighbour counts at which a dead cell is born, ascending
    pub fn birth(&self) -> Vec<u8> {
        counts(&self.birth)
    }

    /// Neighbour counts at which a live cell survives, ascending
    pub fn survive(&self) -> Vec<u8> {
        counts(&self.survive)
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_owned();
        self
    }
}

fn parse_group(group: &str, prefix: char) -> std::result::Result<Vec<u8>, &'static str> {
    let mut chars = group.chars();
    match chars.next() {
        Some(c) if c.eq_ignore_ascii_case(&prefix) => {}
        _ if prefix == 'B' => return Err("birth group must start with 'B'"),
        _ => return Err("survival group must start with 'S'"),
    }
    chars
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or("neighbour counts must be single digits")
        })
        .collect()
}

fn counts(slots: &[bool; COUNT_SLOTS]) -> Vec<u8> {
    (0..COUNT_SLOTS as u8)
        .filter(|&n| slots[n as usize])
        .collect()
}

impl Rule for LifeRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        let n = neighbors as usize;
        let alive = match current {
            Cell::Dead => self.birth.get(n).copied().unwrap_or(false),
            Cell::Alive => self.survive.get(n).copied().unwrap_or(false),
        };
        Cell::from_alive(alive)
    }
}

impl FromStr for LifeRule {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LifeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for n in self.birth() {
            write!(f, "{n}")?;
        }
        write!(f, "/S")?;
        for n in self.survive() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

/// Well-known life-like rules
pub mod presets {
    use super::LifeRule;

    /// Conway's Game of Life (B3/S23)
    pub fn conway() -> LifeRule {
        LifeRule::from_counts("Conway", &[3], &[2, 3])
    }

    /// HighLife (B36/S23), known for its replicator
    pub fn highlife() -> LifeRule {
        LifeRule::from_counts("HighLife", &[3, 6], &[2, 3])
    }

    /// Seeds (B2/S), every live cell dies each generation
    pub fn seeds() -> LifeRule {
        LifeRule::from_counts("Seeds", &[2], &[])
    }

    /// Day & Night (B3678/S34678), symmetric under inversion
    pub fn day_and_night() -> LifeRule {
        LifeRule::from_counts("Day&Night", &[3, 6, 7, 8], &[3, 4, 6, 7, 8])
    }

    /// Get all available rules
    pub fn all_rules() -> Vec<LifeRule> {
        vec![conway(), highlife(), seeds(), day_and_night()]
    }
}
