//! Algorithm enum for selecting the step implementation.
//!
//! Both strategies compute the next generation from an immutable view of
//! the current one, so they always produce identical boards.

use std::str::FromStr;

use super::{Grid, Rule};
use crate::error::LifeError;

/// Available evolution strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell on the calling thread
    #[default]
    Serial,
    /// Cells evaluated on the rayon thread pool
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for logs and the viewer panel
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "serial",
            Algorithm::Parallel => "parallel",
        }
    }

    /// Compute the generation after `grid`
    pub fn evolve(self, grid: &Grid, rule: &dyn Rule) -> Grid {
        match self {
            Algorithm::Serial => grid.evolve(rule),
            Algorithm::Parallel => grid.evolve_parallel(rule),
        }
    }
}

impl FromStr for Algorithm {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::all()
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LifeError::InvalidConfig(format!("unknown algorithm {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Serial);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_parse_by_name() {
        assert_eq!("Parallel".parse::<Algorithm>().unwrap(), Algorithm::Parallel);
        assert_eq!("serial".parse::<Algorithm>().unwrap(), Algorithm::Serial);
        assert!("simd".parse::<Algorithm>().is_err());
    }
}
