//! InfoView: the tile catalog gallery.
//!
//! One entry per named tile: a colour swatch, the value and the name,
//! flowed into as many columns as the viewport allows.

use crate::catalog::{tile_palette, TILE_NAMES};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::game_view::{draw_border, Viewport};

/// Width of one catalog entry: swatch(4) + gap + value(5) + gap + name(9).
const ENTRY_W: u16 = 21;
const COLUMN_GAP: u16 = 3;

#[derive(Debug, Default)]
pub struct InfoView;

impl InfoView {
    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let entries = TILE_NAMES.len() as u16;
        // Title + blank line above, blank line + hint below, border around.
        let avail_h = viewport.height.saturating_sub(6);
        if avail_h == 0 || viewport.width < ENTRY_W + 4 {
            fb.put_str_centered(
                0,
                viewport.height / 2,
                viewport.width,
                "terminal too small",
                CellStyle::default().bold(),
            );
            return;
        }

        let max_cols = ((viewport.width - 4 + COLUMN_GAP) / (ENTRY_W + COLUMN_GAP)).max(1);
        let cols = entries.div_ceil(avail_h).clamp(1, max_cols);
        let rows = entries.div_ceil(cols).min(avail_h);

        let inner_w = cols * ENTRY_W + (cols - 1) * COLUMN_GAP;
        let frame_w = inner_w + 4;
        let frame_h = rows + 4;
        let x0 = (viewport.width - frame_w) / 2;
        let y0 = viewport.height.saturating_sub(frame_h + 2) / 2;

        let title = CellStyle::new(Rgb::new(237, 194, 46), Rgb::new(0, 0, 0)).bold();
        fb.put_str_centered(x0, y0, frame_w, "TILE CATALOG", title);

        let border = CellStyle::new(Rgb::new(187, 173, 160), Rgb::new(0, 0, 0));
        draw_border(fb, x0, y0 + 1, frame_w, frame_h, border);

        let text = CellStyle::default();
        for (i, (value, name)) in TILE_NAMES.iter().enumerate() {
            let (col, row) = (i as u16 / rows, i as u16 % rows);
            if col >= cols {
                break;
            }
            let x = x0 + 2 + col * (ENTRY_W + COLUMN_GAP);
            let y = y0 + 3 + row;

            let (bg, fg) = tile_palette(*value);
            fb.fill_rect(x, y, 4, 1, ' ', CellStyle::new(fg, bg));
            fb.put_str(x + 5, y, &format!("{:>5}", value), text.bold());
            fb.put_str(x + 11, y, name, text);
        }

        fb.put_str_centered(
            0,
            y0 + 1 + frame_h,
            viewport.width,
            "i / esc  back to game",
            CellStyle::default().dim(),
        );
    }

    pub fn render(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(viewport, &mut fb);
        fb
    }
}
