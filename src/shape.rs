//! Geometric gradient shapes.
//!
//! Each shape maps a pixel coordinate to an interpolation fraction `t`,
//! generally in [0,1]: 0 selects the gradient's low endpoint, 1 the high
//! one. Evaluators are pure functions of the coordinate and the grid
//! dimensions.

use std::f64::consts::PI;

use crate::render::RenderConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ShapeKind {
    Horizontal,
    Vertical,
    Diamond,
    Radial,
    Conic,
}

impl ShapeKind {
    /// Interpolation fraction for the pixel at (`row`, `col`).
    ///
    /// Linear shapes divide by the grid *height* on both axes, so on a
    /// non-square grid the horizontal sweep over- or undershoots 1.0 at the
    /// far edge. That ratio is kept as-is for output compatibility with
    /// existing renders; blending saturates at the pixel cast anyway.
    pub fn fraction_at(self, row: u32, col: u32, config: &RenderConfig) -> f64 {
        let height = config.height as f64;
        let row = row as f64;
        let col = col as f64;

        match self {
            ShapeKind::Horizontal => col / height,
            ShapeKind::Vertical => row / height,
            ShapeKind::Diamond => {
                let center = height / 2.0;
                let fold = |v: f64| center - (v - center).abs();
                (fold(row) / center + fold(col) / center) / 2.0
            }
            ShapeKind::Radial => {
                let center = height / 2.0;
                let radius = center;
                let d = (row - center).hypot(col - center);
                if d > radius {
                    // Saturating policy: everything beyond the disc is the
                    // low endpoint exactly.
                    0.0
                } else {
                    (radius - d) / radius
                }
            }
            ShapeKind::Conic => {
                let half = height / 2.0;
                let angle = (row - half).atan2(col - half) + PI;
                angle / (2.0 * PI)
            }
        }
    }

    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Horizontal,
        ShapeKind::Vertical,
        ShapeKind::Diamond,
        ShapeKind::Radial,
        ShapeKind::Conic,
    ];
}
