//! Procedurally generated puzzle art.
//!
//! The puzzle image is a radial gradient across the whole solved board,
//! blue in the middle shading toward warm purple at the corners. Each tile
//! shows the slice of that image belonging to its home cell, so a solved
//! board reassembles the gradient. Sampling at the tile's center keeps the
//! per-tile fill flat, which reads cleanly at small tile sizes.

use crate::Color;
use tile_slide_core::{GridCoord, GridSize};

/// Fill for the tile whose home is the provided cell.
///
/// `t` is the distance from the image center normalised by the corner
/// distance: channels follow `r = 100 + 120t`, `g = 50 + 100(1 - t)`,
/// `b = 200 - 50t`.
#[must_use]
pub fn tile_fill(home_cell: GridCoord, size: GridSize) -> Color {
    let n = size.get() as f32;
    // Tile center in units of the full image edge, relative to its center.
    let u = (home_cell.column() as f32 + 0.5) / n - 0.5;
    let v = (home_cell.row() as f32 + 0.5) / n - 0.5;
    let corner_distance = (0.5_f32 * 0.5 + 0.5 * 0.5).sqrt();
    let t = (u * u + v * v).sqrt() / corner_distance;

    let red = 100.0 + 120.0 * t;
    let green = 50.0 + 100.0 * (1.0 - t);
    let blue = 200.0 - 50.0 * t;
    Color::from_rgb_u8(
        red.round() as u8,
        green.round() as u8,
        blue.round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::tile_fill;
    use tile_slide_core::{GridCoord, GridSize};

    #[test]
    fn two_by_two_tiles_sit_halfway_up_the_gradient() {
        // Every tile center is half the corner distance from the middle.
        let size = GridSize::new(2);
        let fill = tile_fill(GridCoord::new(0, 0), size);
        assert!((fill.red - 160.0 / 255.0).abs() < 1e-2);
        assert!((fill.green - 100.0 / 255.0).abs() < 1e-2);
        assert!((fill.blue - 175.0 / 255.0).abs() < 1e-2);
    }

    #[test]
    fn center_tiles_are_cooler_than_corner_tiles() {
        let size = GridSize::new(4);
        let center = tile_fill(GridCoord::new(1, 1), size);
        let corner = tile_fill(GridCoord::new(3, 3), size);
        assert!(center.red < corner.red);
        assert!(center.green > corner.green);
        assert!(center.blue > corner.blue);
    }

    #[test]
    fn the_gradient_is_radially_symmetric() {
        let size = GridSize::new(4);
        let top_left = tile_fill(GridCoord::new(0, 0), size);
        assert_eq!(top_left, tile_fill(GridCoord::new(3, 0), size));
        assert_eq!(top_left, tile_fill(GridCoord::new(0, 3), size));
        assert_eq!(top_left, tile_fill(GridCoord::new(3, 3), size));
    }
}
