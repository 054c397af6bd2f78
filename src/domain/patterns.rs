use super::{Grid, rle};
use crate::error::Result;

/// A named pattern stored in RLE form
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rle: &'static str,
}

impl Pattern {
    pub const fn new(name: &'static str, description: &'static str, rle: &'static str) -> Self {
        Self { name, description, rle }
    }

    /// Decode into a standalone matrix (bounding box of the pattern)
    pub fn decode(&self) -> Result<rle::PatternMatrix> {
        rle::decode_to_matrix(self.rle)
    }

    /// Place pattern on grid with its top-left cell at (row, col)
    pub fn place_on(&self, grid: &mut Grid, offset: (usize, usize)) -> Result<()> {
        rle::decode_and_place(self.rle, grid, offset)
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub const fn glider() -> Pattern {
        Pattern::new("Glider", "Moves diagonally (period 4)", "bob$2bo$3o!")
    }

    /// Blinker - period 2 oscillator
    pub const fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", "3o!")
    }

    /// Toad - period 2 oscillator
    pub const fn toad() -> Pattern {
        Pattern::new("Toad", "Oscillator (period 2)", "b3o$3o!")
    }

    /// Beacon - period 2 oscillator
    pub const fn beacon() -> Pattern {
        Pattern::new("Beacon", "Oscillator (period 2)", "2o$o$3bo$2b2o!")
    }

    /// Pulsar - period 3 oscillator
    pub const fn pulsar() -> Pattern {
        Pattern::new(
            "Pulsar",
            "Oscillator (period 3)",
            "2b3o3b3o2$o4bobo4bo$o4bobo4bo$o4bobo4bo$2b3o3b3o2$\
             2b3o3b3o$o4bobo4bo$o4bobo4bo$o4bobo4bo2$2b3o3b3o!",
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub const fn lwss() -> Pattern {
        Pattern::new("LWSS", "Lightweight Spaceship (period 4)", "bo2bo$o$o3bo$4o!")
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub const fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            "24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o$\
             2o8bo3bob2o4bobo$10bo5bo7bo$11bo3bo$12b2o!",
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub const fn r_pentomino() -> Pattern {
        Pattern::new("R-pentomino", "Methuselah - stabilizes at gen 1103", "b2o$2o$bo!")
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub const fn acorn() -> Pattern {
        Pattern::new("Acorn", "Methuselah - stabilizes at gen 5206", "bo$3bo$2o2b3o!")
    }

    /// Block - simple still life
    pub const fn block() -> Pattern {
        Pattern::new("Block", "Still life", "2o$2o!")
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }

    /// Look a pattern up by name, ignoring case, spaces and dashes
    pub fn find(name: &str) -> Option<Pattern> {
        let key = |s: &str| {
            s.chars()
                .filter(|&c| !matches!(c, ' ' | '-' | '_'))
                .flat_map(char::to_lowercase)
                .collect::<String>()
        };
        let wanted = key(name);
        all_patterns().into_iter().find(|p| key(p.name) == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::presets::*;
    use crate::domain::{Cell, rules::presets::conway};

    #[test]
    fn test_every_preset_decodes() {
        for pattern in all_patterns() {
            let matrix = pattern
                .decode()
                .unwrap_or_else(|e| panic!("{} failed to decode: {e}", pattern.name));
            assert!(matrix.alive_cells().count() > 0, "{} is empty", pattern.name);
        }
    }

    #[test]
    fn test_glider_gun_bounding_box() {
        let matrix = glider_gun().decode().unwrap();
        assert_eq!((matrix.height(), matrix.width()), (9, 36));
        assert_eq!(matrix.alive_cells().count(), 36);
    }

    #[test]
    fn test_pulsar_is_square() {
        let matrix = pulsar().decode().unwrap();
        assert_eq!((matrix.height(), matrix.width()), (13, 13));
        assert_eq!(matrix.alive_cells().count(), 48);
    }

    #[test]
    fn test_pulsar_has_period_three() {
        let mut grid = crate::domain::Grid::new(20);
        pulsar().place_on(&mut grid, (3, 3)).unwrap();
        let start = grid.clone();
        let rule = conway();
        grid = grid.evolve(&rule);
        assert_ne!(grid, start);
        grid = grid.evolve(&rule).evolve(&rule);
        assert_eq!(grid, start);
    }

    #[test]
    fn test_block_place_on() {
        let mut grid = crate::domain::Grid::new(10);
        block().place_on(&mut grid, (4, 4)).unwrap();
        assert_eq!(grid.population(), 4);
        assert_eq!(grid.get(5, 5), Some(Cell::Alive));
    }

    #[test]
    fn test_find_is_forgiving() {
        assert_eq!(find("gosper glider gun").map(|p| p.name), Some("Gosper Glider Gun"));
        assert_eq!(find("r_pentomino").map(|p| p.name), Some("R-pentomino"));
        assert_eq!(find("LWSS").map(|p| p.name), Some("LWSS"));
        assert!(find("spaceship").is_none());
    }
}
