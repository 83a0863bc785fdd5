//! Tile catalog: display names and colours per tile value.
//!
//! Presentation only; the core never reads this.

use crate::fb::Rgb;
use crate::types::Tile;

/// Named tiles, 2 through 16384.
pub const TILE_NAMES: [(Tile, &str); 14] = [
    (2, "coconut"),
    (4, "naha"),
    (8, "ginger"),
    (16, "yunyun"),
    (32, "whiskers"),
    (64, "fluffy"),
    (128, "cleopatra"),
    (256, "parsley"),
    (512, "huihui"),
    (1024, "zelda"),
    (2048, "artemis"),
    (4096, "marakuya"),
    (8192, "bee"),
    (16384, "tim"),
];

/// Catalog name of `value`, if it has one.
pub fn tile_name(value: Tile) -> Option<&'static str> {
    TILE_NAMES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, name)| *name)
}

/// (background, foreground) for a tile.
///
/// Values 2..=4096 each get their own colour; everything larger shares one.
pub fn tile_palette(value: Tile) -> (Rgb, Rgb) {
    const DARK: Rgb = Rgb::new(119, 110, 101);
    const LIGHT: Rgb = Rgb::new(249, 246, 242);
    match value {
        0 => (Rgb::new(60, 58, 50), Rgb::new(110, 104, 96)),
        2 => (Rgb::new(238, 228, 218), DARK),
        4 => (Rgb::new(237, 224, 200), DARK),
        8 => (Rgb::new(242, 177, 121), LIGHT),
        16 => (Rgb::new(245, 149, 99), LIGHT),
        32 => (Rgb::new(246, 124, 95), LIGHT),
        64 => (Rgb::new(246, 94, 59), LIGHT),
        128 => (Rgb::new(237, 207, 114), LIGHT),
        256 => (Rgb::new(237, 204, 97), LIGHT),
        512 => (Rgb::new(237, 200, 80), LIGHT),
        1024 => (Rgb::new(237, 197, 63), LIGHT),
        2048 => (Rgb::new(237, 194, 46), LIGHT),
        4096 => (Rgb::new(129, 214, 116), LIGHT),
        _ => (Rgb::new(60, 58, 50), LIGHT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_cover_powers_of_two_in_order() {
        for (i, (value, name)) in TILE_NAMES.iter().enumerate() {
            assert_eq!(*value, 2 << i);
            assert!(!name.is_empty());
        }
        assert_eq!(tile_name(2048), Some("artemis"));
        assert_eq!(tile_name(32768), None);
        assert_eq!(tile_name(0), None);
    }

    #[test]
    fn large_tiles_share_a_palette() {
        assert_eq!(tile_palette(8192), tile_palette(1 << 20));
        assert_ne!(tile_palette(4096), tile_palette(8192));
        assert_ne!(tile_palette(2), tile_palette(4));
    }
}
