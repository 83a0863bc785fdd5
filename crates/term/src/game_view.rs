//! GameView: maps the game state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::catalog::{tile_name, tile_palette};
use crate::core::{GameState, Grid};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Tile;

const HINTS: &str = "arrows/wasd move  space labels  i info  r restart  q quit";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// What to print inside a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelMode {
    /// The tile value.
    #[default]
    Numbers,
    /// The catalog name, falling back to the value for unnamed tiles.
    Names,
}

impl LabelMode {
    pub fn toggled(self) -> Self {
        match self {
            LabelMode::Numbers => LabelMode::Names,
            LabelMode::Names => LabelMode::Numbers,
        }
    }

    pub fn label(self, value: Tile) -> String {
        match self {
            LabelMode::Names => tile_name(value)
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string()),
            LabelMode::Numbers => value.to_string(),
        }
    }
}

/// Everything the board view reads for one frame.
#[derive(Debug, Clone, Copy)]
pub struct BoardFrame<'a> {
    pub grid: &'a Grid,
    pub score: u64,
    /// Cell to highlight (the last spawned tile).
    pub spawned: Option<(usize, usize)>,
    pub labels: LabelMode,
}

impl<'a> BoardFrame<'a> {
    pub fn from_state(state: &'a GameState, labels: LabelMode) -> Self {
        Self {
            grid: state.grid(),
            score: state.score(),
            spawned: state.last_spawn().map(|s| (s.row, s.col)),
            labels,
        }
    }
}

/// Renders the board, the score line and key hints.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide enough for the longest catalog name.
        Self {
            cell_w: 11,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Board frame size including the border.
    pub fn frame_size(&self, grid: &Grid) -> (u16, u16) {
        (
            grid.cols() as u16 * self.cell_w + 2,
            grid.rows() as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, frame: &BoardFrame<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size(frame.grid);
        // Score line above the board, hints below.
        let total_h = frame_h + 3;
        if viewport.width < frame_w || viewport.height < total_h {
            fb.put_str_centered(
                0,
                viewport.height / 2,
                viewport.width,
                "terminal too small",
                CellStyle::default().bold(),
            );
            return;
        }

        let start_x = (viewport.width - frame_w) / 2;
        let start_y = (viewport.height - total_h) / 2;

        self.draw_score(fb, frame.score, start_x, start_y, frame_w);

        let board_y = start_y + 2;
        let border = CellStyle::new(Rgb::new(187, 173, 160), Rgb::new(0, 0, 0));
        draw_border(fb, start_x, board_y, frame_w, frame_h, border);

        for row in 0..frame.grid.rows() {
            for col in 0..frame.grid.cols() {
                let value = frame.grid.get(row, col).unwrap_or(0);
                let highlight = frame.spawned == Some((row, col));
                self.draw_tile(fb, start_x, board_y, row, col, value, frame.labels, highlight);
            }
        }

        let hint_style = CellStyle::default().dim();
        fb.put_str_centered(0, board_y + frame_h, viewport.width, HINTS, hint_style);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &BoardFrame<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    fn draw_score(&self, fb: &mut FrameBuffer, score: u64, x: u16, y: u16, w: u16) {
        let title = CellStyle::new(Rgb::new(237, 194, 46), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::default().bold();
        fb.put_str(x, y, "2048", title);

        let text = score.to_string();
        let label = "SCORE ";
        let len = (label.len() + text.len()) as u16;
        let sx = x + w.saturating_sub(len);
        let vx = fb.put_str(sx, y, label, CellStyle::default());
        fb.put_str(vx, y, &text, value);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: usize,
        col: usize,
        value: Tile,
        labels: LabelMode,
        highlight: bool,
    ) {
        let px = start_x + 1 + col as u16 * self.cell_w;
        let py = start_y + 1 + row as u16 * self.cell_h;
        let (bg, fg) = tile_palette(value);
        let mut style = CellStyle::new(fg, bg);
        if highlight {
            style = style.bold();
        }

        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        let mid = py + self.cell_h / 2;
        if value == 0 {
            fb.put_str_centered(px, mid, self.cell_w, "·", style.dim());
        } else {
            // Leave a one-column margin on each side when there is room.
            let (lx, lw) = if self.cell_w > 2 {
                (px + 1, self.cell_w - 2)
            } else {
                (px, self.cell_w)
            };
            fb.put_str_centered(lx, mid, lw, &labels.label(value), style.bold());
        }
    }
}

/// Box-drawing border; shared with the info view.
pub(crate) fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[Tile]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    fn frame(grid: &Grid) -> BoardFrame<'_> {
        BoardFrame {
            grid,
            score: 0,
            spawned: None,
            labels: LabelMode::Numbers,
        }
    }

    #[test]
    fn frame_size_accounts_for_border() {
        let view = GameView::new(4, 1);
        let g = Grid::new(4, 4);
        assert_eq!(view.frame_size(&g), (18, 6));
    }

    #[test]
    fn label_modes() {
        assert_eq!(LabelMode::Numbers.label(128), "128");
        assert_eq!(LabelMode::Names.label(128), "cleopatra");
        assert_eq!(LabelMode::Names.label(32768), "32768");
        assert_eq!(LabelMode::Numbers.toggled(), LabelMode::Names);
        assert_eq!(LabelMode::Names.toggled(), LabelMode::Numbers);
    }

    #[test]
    fn tiles_render_at_expected_cells() {
        let g = grid(&[&[2, 0], &[0, 1024]]);
        let view = GameView::new(6, 1);
        // frame 14 x 4, plus 3 rows of chrome.
        let fb = view.render(&frame(&g), Viewport::new(14, 7));

        // Board top border at y = 2; first tile row at y = 3.
        assert_eq!(fb.get(0, 2).unwrap().ch, '┌');
        assert_eq!(fb.get(13, 5).unwrap().ch, '┘');
        assert_eq!(fb.row_text(3), "│  2     ·   │");
        assert!(fb.row_text(4).contains("1024"));
    }

    #[test]
    fn spawned_tile_is_bold() {
        let g = grid(&[&[2, 0], &[0, 0]]);
        let view = GameView::new(6, 1);
        let mut f = frame(&g);
        f.spawned = Some((0, 0));
        let fb = view.render(&f, Viewport::new(14, 7));
        assert!(fb.get(1, 3).unwrap().style.bold);
        assert!(!fb.get(7, 3).unwrap().style.bold);
    }

    #[test]
    fn small_viewport_shows_message() {
        let g = Grid::new(4, 4);
        let fb = GameView::default().render(&frame(&g), Viewport::new(20, 5));
        assert!(fb.to_text().contains("terminal too small"));
    }
}
