//! Run-length encoded pattern decoding.
//!
//! A pattern body is a stream of runs terminated by `!`:
//! `b` is a dead cell, `o` a live cell, `$` ends a row, and any of them
//! may be prefixed by a one or two digit repeat count (`3o`, `12b`, `2$`).
//! Whitespace between runs is skipped so bodies may be wrapped over lines.
//!
//! Both entry points share the same tokenizer, so a stream is either
//! rejected everywhere or accepted everywhere. Placement bounds are the
//! extent of the encoded cells: blank rows added by a trailing `n$` show up
//! in the decoded matrix but never count towards fitting on a grid.

use super::{Cell, Grid};
use crate::error::{LifeError, Result};

/// Longest run count prefix the decoder accepts
const MAX_COUNT_DIGITS: usize = 2;

/// One `<count><tag>` item of the stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Run {
    Dead(usize),
    Alive(usize),
    NewRow(usize),
}

impl Run {
    fn from_tag(tag: u8, count: usize) -> Option<Self> {
        match tag {
            b'b' => Some(Run::Dead(count)),
            b'o' => Some(Run::Alive(count)),
            b'$' => Some(Run::NewRow(count)),
            _ => None,
        }
    }
}

fn malformed(position: usize, reason: &'static str) -> LifeError {
    LifeError::MalformedRle { position, reason }
}

/// Split the stream into runs, stopping at `!`
fn tokenize(rle: &str) -> Result<Vec<Run>> {
    let bytes = rle.as_bytes();
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(malformed(0, "empty pattern"));
    }

    let mut runs = Vec::new();
    let mut pos = 0;
    loop {
        let Some(&byte) = bytes.get(pos) else {
            return Err(malformed(pos, "missing '!' terminator"));
        };
        match byte {
            b'!' => return Ok(runs),
            b if b.is_ascii_whitespace() => pos += 1,
            b'0'..=b'9' => {
                let start = pos;
                let mut count = 0;
                while pos - start < MAX_COUNT_DIGITS {
                    match bytes.get(pos) {
                        Some(d) if d.is_ascii_digit() => {
                            count = count * 10 + usize::from(d - b'0');
                            pos += 1;
                        }
                        _ => break,
                    }
                }
                let run = match bytes.get(pos) {
                    None => return Err(malformed(pos, "missing '!' terminator")),
                    Some(d) if d.is_ascii_digit() => {
                        return Err(malformed(pos, "run count longer than two digits"));
                    }
                    Some(&tag) => Run::from_tag(tag, count)
                        .ok_or_else(|| malformed(pos, "run count not followed by 'b', 'o' or '$'"))?,
                };
                runs.push(run);
                pos += 1;
            }
            tag => {
                let run = Run::from_tag(tag, 1).ok_or_else(|| malformed(pos, "unexpected character"))?;
                runs.push(run);
                pos += 1;
            }
        }
    }
}

/// Walk the runs, reporting every encoded cell at its (row, col) relative to
/// the pattern's top-left corner
fn for_each_cell(runs: &[Run], mut visit: impl FnMut(usize, usize, Cell)) {
    let (mut row, mut col) = (0, 0);
    for &run in runs {
        match run {
            Run::Dead(n) | Run::Alive(n) => {
                let cell = Cell::from_alive(matches!(run, Run::Alive(_)));
                for _ in 0..n {
                    visit(row, col, cell);
                    col += 1;
                }
            }
            Run::NewRow(n) => {
                if n > 0 {
                    row += n;
                    col = 0;
                }
            }
        }
    }
}

/// Rectangular matrix of cells decoded from one pattern
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternMatrix {
    rows: Vec<Vec<Cell>>,
    /// Rows up to and including the last one that holds an encoded cell
    filled: usize,
}

impl PatternMatrix {
    /// Number of rows, including all-dead filler rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of every row after padding
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Matrix as nested rows of 0/255 values
    pub fn to_values(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.value()).collect())
            .collect()
    }

    /// Positions of live cells relative to the top-left corner
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_alive())
                .map(move |(c, _)| (r, c))
        })
    }

    /// Stamp the matrix onto `grid` with its top-left cell at `(row, col)`.
    /// Trailing blank rows from a final `n$` are neither checked nor written,
    /// matching `decode_and_place`. Fails with `OutOfBounds` before writing
    /// anything if it does not fit.
    pub fn place_on(&self, grid: &mut Grid, (row, col): (usize, usize)) -> Result<()> {
        check_fits(grid.size(), (row, col), self.filled, self.width())?;
        for (r, line) in self.rows[..self.filled].iter().enumerate() {
            for (c, &cell) in line.iter().enumerate() {
                grid.set(row + r, col + c, cell);
            }
        }
        Ok(())
    }
}

fn check_fits(size: usize, (row, col): (usize, usize), height: usize, width: usize) -> Result<()> {
    let fits = height == 0
        || width == 0
        || (row <= size && height <= size - row && col <= size && width <= size - col);
    if fits {
        Ok(())
    } else {
        Err(LifeError::OutOfBounds {
            row,
            col,
            height,
            width,
            size,
        })
    }
}

/// Decode a pattern into a standalone matrix.
///
/// `n$` closes the current row and adds `n - 1` blank rows. Once `!` is
/// reached every row shorter than the widest is right-padded with dead cells.
pub fn decode_to_matrix(rle: &str) -> Result<PatternMatrix> {
    let runs = tokenize(rle)?;

    let mut rows = Vec::new();
    let mut current = Vec::new();
    for run in runs {
        match run {
            Run::Dead(n) => current.extend(std::iter::repeat_n(Cell::Dead, n)),
            Run::Alive(n) => current.extend(std::iter::repeat_n(Cell::Alive, n)),
            Run::NewRow(0) => {}
            Run::NewRow(n) => {
                rows.push(std::mem::take(&mut current));
                rows.extend((1..n).map(|_| Vec::new()));
            }
        }
    }
    rows.push(current);

    let filled = rows.iter().rposition(|row| !row.is_empty()).map_or(0, |last| last + 1);
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, Cell::Dead);
    }
    Ok(PatternMatrix { rows, filled })
}

/// Decode a pattern straight onto `grid` with its top-left cell at `(row, col)`.
///
/// Dead runs only advance the column, so cells already alive underneath
/// them are left alone. The stream and the placement are validated before
/// the first write, so on error `grid` is unchanged.
pub fn decode_and_place(rle: &str, grid: &mut Grid, (row, col): (usize, usize)) -> Result<()> {
    let runs = tokenize(rle)?;

    let (mut height, mut width) = (0, 0);
    for_each_cell(&runs, |r, c, _| {
        height = height.max(r + 1);
        width = width.max(c + 1);
    });
    check_fits(grid.size(), (row, col), height, width)?;

    let mut placed = 0usize;
    for_each_cell(&runs, |r, c, cell| {
        if cell.is_alive() {
            grid.set(row + r, col + c, Cell::Alive);
            placed += 1;
        }
    });
    log::debug!("placed {height}x{width} pattern with {placed} live cells at ({row}, {col})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const D: u8 = 0;
    const A: u8 = 255;

    fn malformed_reason(rle: &str) -> &'static str {
        match decode_to_matrix(rle) {
            Err(LifeError::MalformedRle { reason, .. }) => reason,
            other => panic!("expected MalformedRle for {rle:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_glider_matrix() {
        let matrix = decode_to_matrix("bob$2bo$3o!").unwrap();
        assert_eq!(matrix.to_values(), vec![vec![D, A, D], vec![D, D, A], vec![A, A, A]]);
        assert_eq!((matrix.height(), matrix.width()), (3, 3));
    }

    #[test]
    fn test_short_last_row_is_padded() {
        let matrix = decode_to_matrix("3o$o!").unwrap();
        assert_eq!(matrix.to_values(), vec![vec![A, A, A], vec![A, D, D]]);
    }

    #[test]
    fn test_short_middle_row_is_padded() {
        let matrix = decode_to_matrix("2o$o$2o!").unwrap();
        assert_eq!(matrix.to_values(), vec![vec![A, A], vec![A, D], vec![A, A]]);
    }

    #[test]
    fn test_row_run_inserts_blank_rows() {
        let matrix = decode_to_matrix("o2bo3$obo!").unwrap();
        assert_eq!(
            matrix.to_values(),
            vec![vec![A, D, D, A], vec![D; 4], vec![D; 4], vec![A, D, A, D]]
        );
    }

    #[test]
    fn test_two_digit_count() {
        let matrix = decode_to_matrix("12o!").unwrap();
        assert_eq!(matrix.width(), 12);
        assert_eq!(matrix.alive_cells().count(), 12);
    }

    #[test]
    fn test_zero_count_repeats_nothing() {
        let matrix = decode_to_matrix("o0b0$o!").unwrap();
        assert_eq!(matrix.to_values(), vec![vec![A, A]]);
    }

    #[test]
    fn test_whitespace_between_runs() {
        let matrix = decode_to_matrix("bob$\n2bo$\r\n3o !").unwrap();
        assert_eq!(matrix, decode_to_matrix("bob$2bo$3o!").unwrap());
    }

    #[test]
    fn test_text_after_terminator_is_ignored() {
        let matrix = decode_to_matrix("2o! trailing comment").unwrap();
        assert_eq!(matrix.to_values(), vec![vec![A, A]]);
    }

    #[test]
    fn test_missing_terminator() {
        assert_eq!(malformed_reason("bob$2bo$3o"), "missing '!' terminator");
        assert_eq!(malformed_reason("3"), "missing '!' terminator");
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(malformed_reason(""), "empty pattern");
        assert_eq!(malformed_reason("  \n"), "empty pattern");
    }

    #[test]
    fn test_three_digit_count_is_rejected() {
        assert_eq!(malformed_reason("123o!"), "run count longer than two digits");
    }

    #[test]
    fn test_count_without_tag() {
        assert_eq!(malformed_reason("3!"), "run count not followed by 'b', 'o' or '$'");
        assert_eq!(malformed_reason("2 o!"), "run count not followed by 'b', 'o' or '$'");
    }

    #[test]
    fn test_unknown_character_reports_position() {
        match decode_to_matrix("bo$x!") {
            Err(LifeError::MalformedRle { position, .. }) => assert_eq!(position, 3),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_place_glider_at_offset() {
        let mut grid = Grid::new(10);
        decode_and_place("bob$2bo$3o!", &mut grid, (2, 5)).unwrap();
        let alive: Vec<_> = grid.iter_cells().filter(|(_, _, c)| c.is_alive()).map(|(r, c, _)| (r, c)).collect();
        assert_eq!(alive, vec![(2, 6), (3, 7), (4, 5), (4, 6), (4, 7)]);
    }

    #[test]
    fn test_place_matches_matrix() {
        let rle = "2o$o2$3bo!";
        let matrix = decode_to_matrix(rle).unwrap();
        let mut streamed = Grid::new(12);
        decode_and_place(rle, &mut streamed, (1, 1)).unwrap();
        let mut stamped = Grid::new(12);
        matrix.place_on(&mut stamped, (1, 1)).unwrap();
        assert_eq!(streamed, stamped);
    }

    #[test]
    fn test_place_flush_with_edge() {
        let mut grid = Grid::new(10);
        decode_and_place("3o!", &mut grid, (9, 7)).unwrap();
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn test_place_out_of_bounds_leaves_grid_untouched() {
        let mut grid = Grid::new(10);
        grid.set(0, 0, Cell::Alive);
        let before = grid.clone();
        let err = decode_and_place("3o!", &mut grid, (9, 8)).unwrap_err();
        assert!(matches!(
            err,
            LifeError::OutOfBounds { row: 9, col: 8, height: 1, width: 3, size: 10 }
        ));
        assert_eq!(grid, before);

        assert!(matches!(
            decode_and_place("o$o$o!", &mut grid, (8, 0)),
            Err(LifeError::OutOfBounds { .. })
        ));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_trailing_rows_do_not_count_towards_bounds() {
        let mut grid = Grid::new(10);
        decode_and_place("o5$!", &mut grid, (9, 0)).unwrap();
        assert_eq!(grid.get(9, 0), Some(Cell::Alive));
    }

    #[test]
    fn test_trailing_rows_are_kept_in_matrix_but_not_placed() {
        let matrix = decode_to_matrix("o5$!").unwrap();
        assert_eq!(matrix.height(), 6);

        let mut stamped = Grid::new(10);
        matrix.place_on(&mut stamped, (9, 0)).unwrap();
        let mut streamed = Grid::new(10);
        decode_and_place("o5$!", &mut streamed, (9, 0)).unwrap();
        assert_eq!(stamped, streamed);
    }

    #[test]
    fn test_huge_offset_is_out_of_bounds() {
        let mut grid = Grid::new(10);
        assert!(matches!(
            decode_and_place("o!", &mut grid, (usize::MAX, 0)),
            Err(LifeError::OutOfBounds { row: usize::MAX, col: 0, .. })
        ));
        assert!(matches!(
            decode_and_place("2o!", &mut grid, (0, usize::MAX)),
            Err(LifeError::OutOfBounds { .. })
        ));
        let matrix = decode_to_matrix("2o!").unwrap();
        assert!(matches!(
            matrix.place_on(&mut grid, (usize::MAX - 1, usize::MAX - 1)),
            Err(LifeError::OutOfBounds { .. })
        ));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_malformed_place_leaves_grid_untouched() {
        let mut grid = Grid::new(10);
        assert!(matches!(
            decode_and_place("3o$2o", &mut grid, (0, 0)),
            Err(LifeError::MalformedRle { .. })
        ));
        assert_eq!(grid.population(), 0);
    }
}
