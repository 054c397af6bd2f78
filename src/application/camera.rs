use std::ops::Range;

/// Viewport over the board: pixel offset of the top-left cell plus a zoom
/// factor applied on top of the fitted cell size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32, // 1.0 = whole board fits the viewport
}

const MIN_ZOOM: f32 = 0.25;
const MAX_ZOOM: f32 = 20.0;

/// Largest cell size (in pixels) at which a `board_size` board fits the viewport
pub fn fit_cell_size(board_size: usize, viewport_width: f32, viewport_height: f32) -> f32 {
    (viewport_width.min(viewport_height) / board_size.max(1) as f32).max(1.0)
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
        }
    }

    /// Multiply zoom by `factor`, clamped to a sane range
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Screen position of the top-left corner of cell (row, col)
    pub fn cell_to_screen(&self, row: usize, col: usize, cell_size: f32) -> (f32, f32) {
        let step = cell_size * self.zoom;
        (col as f32 * step + self.offset_x, row as f32 * step + self.offset_y)
    }

    /// Rows and columns of a `board_size` board that intersect the viewport
    pub fn visible_cells(
        &self,
        viewport_width: f32,
        viewport_height: f32,
        cell_size: f32,
        board_size: usize,
    ) -> (Range<usize>, Range<usize>) {
        let step = cell_size * self.zoom;
        let span = |offset: f32, extent: f32| {
            let first = (-offset / step).floor().max(0.0) as usize;
            let last = ((extent - offset) / step).ceil().max(0.0) as usize;
            first.min(board_size)..last.min(board_size)
        };
        (
            span(self.offset_y, viewport_height),
            span(self.offset_x, viewport_width),
        )
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
