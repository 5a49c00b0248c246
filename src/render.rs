//! The raster compositor: one parameterized pipeline over shape and
//! interpolation space.

use rayon::prelude::*;

use crate::{
    color::Hsv,
    error::{AudiogradError, AudiogradResult},
    features::AudioFeatures,
    palette::GradientPalette,
    shape::ShapeKind,
};

pub const DEFAULT_SIZE: u32 = 300;

/// Which color space the per-pixel blend runs in.
///
/// Direct-component blends integer RGB channels between two pre-converted
/// endpoints and can pass through muddy intermediate hues. HSV-space blends
/// hue, saturation and value first and converts per pixel, giving smoother
/// hue transitions (including deliberate wraparound when the high endpoint's
/// hue winds past 1.0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InterpolationSpace {
    DirectComponent,
    HsvSpace,
}

/// Grid dimensions threaded through every render call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
        }
    }
}

impl RenderConfig {
    pub fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    pub fn validate(&self) -> AudiogradResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(AudiogradError::invalid_input(
                "render dimensions must be > 0",
            ));
        }
        Ok(())
    }
}

/// A fully determined rendering: identical specs always produce
/// byte-identical pixel buffers.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientSpec {
    pub shape: ShapeKind,
    pub space: InterpolationSpace,
    pub c1: Hsv,
    pub c2: Hsv,
}

/// Row-major RGB8 grid, `width * height * 3` bytes. Exclusively owned by
/// the render call that fills it; the encoder treats it as read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// RGB triple at (`row`, `col`). Coordinates must lie inside the grid;
    /// out-of-bounds access panics.
    pub fn pixel(&self, row: u32, col: u32) -> [u8; 3] {
        debug_assert!(
            row < self.height && col < self.width,
            "pixel ({row},{col}) out of bounds for {}x{} buffer",
            self.width,
            self.height
        );
        let i = (row as usize * self.width as usize + col as usize) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

impl GradientSpec {
    /// Fill a whole pixel grid. Rows are independent, so they are filled in
    /// parallel; the result is identical to the serial loop.
    pub fn render(&self, config: &RenderConfig) -> AudiogradResult<PixelBuffer> {
        config.validate()?;

        let stride = config.width as usize * 3;
        let mut data = vec![0u8; stride * config.height as usize];

        match self.space {
            InterpolationSpace::DirectComponent => {
                // Endpoints convert once, outside the pixel loop.
                let c1 = self.c1.to_rgb();
                let c2 = self.c2.to_rgb();
                self.fill_rows(&mut data, config, |t| c1.lerp(c2, t));
            }
            InterpolationSpace::HsvSpace => {
                let (c1, c2) = (self.c1, self.c2);
                self.fill_rows(&mut data, config, |t| c1.lerp(c2, t).to_rgb());
            }
        }

        Ok(PixelBuffer {
            width: config.width,
            height: config.height,
            data,
        })
    }

    fn fill_rows<F>(&self, data: &mut [u8], config: &RenderConfig, pixel: F)
    where
        F: Fn(f64) -> crate::color::Rgb + Sync,
    {
        let stride = config.width as usize * 3;
        let shape = self.shape;
        data.par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(|(row, line)| {
                for (col, px) in line.chunks_exact_mut(3).enumerate() {
                    let t = shape.fraction_at(row as u32, col as u32, config);
                    let rgb = pixel(t);
                    px[0] = rgb.r;
                    px[1] = rgb.g;
                    px[2] = rgb.b;
                }
            });
    }
}

/// The unified entry point: descriptors in, pixel buffer out.
#[tracing::instrument]
pub fn synthesize(
    features: &AudioFeatures,
    shape: ShapeKind,
    space: InterpolationSpace,
    config: &RenderConfig,
) -> AudiogradResult<PixelBuffer> {
    let palette = GradientPalette::from_features(features);
    tracing::debug!(?palette, "derived gradient endpoints");

    GradientSpec {
        shape,
        space,
        c1: palette.c1,
        c2: palette.c2,
    }
    .render(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(shape: ShapeKind, space: InterpolationSpace) -> GradientSpec {
        GradientSpec {
            shape,
            space,
            c1: Hsv::new(0.85, 0.9, 0.74),
            c2: Hsv::new(1.25, 0.9, 0.74),
        }
    }

    #[test]
    fn render_fills_the_whole_grid() {
        let cfg = RenderConfig::default();
        let buf = spec(ShapeKind::Horizontal, InterpolationSpace::HsvSpace)
            .render(&cfg)
            .unwrap();
        assert_eq!(buf.width, 300);
        assert_eq!(buf.height, 300);
        assert_eq!(buf.data.len(), 300 * 300 * 3);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let cfg = RenderConfig {
            width: 0,
            height: 300,
        };
        let err = spec(ShapeKind::Vertical, InterpolationSpace::DirectComponent)
            .render(&cfg)
            .unwrap_err();
        assert!(err.to_string().contains("invalid input:"));
    }

    #[test]
    fn direct_mode_endpoints_match_converted_colors() {
        let cfg = RenderConfig::default();
        let s = spec(ShapeKind::Vertical, InterpolationSpace::DirectComponent);
        let buf = s.render(&cfg).unwrap();
        let c1 = s.c1.to_rgb();
        assert_eq!(buf.pixel(0, 0), [c1.r, c1.g, c1.b]);
    }

    #[test]
    fn radial_center_is_c2_and_corner_is_c1() {
        let cfg = RenderConfig::default();
        let s = spec(ShapeKind::Radial, InterpolationSpace::DirectComponent);
        let buf = s.render(&cfg).unwrap();
        let c1 = s.c1.to_rgb();
        let c2 = s.c2.to_rgb();
        assert_eq!(buf.pixel(150, 150), [c2.r, c2.g, c2.b]);
        assert_eq!(buf.pixel(0, 0), [c1.r, c1.g, c1.b]);
        assert_eq!(buf.pixel(299, 299), [c1.r, c1.g, c1.b]);
    }

    #[test]
    fn interpolation_spaces_diverge_mid_gradient() {
        let cfg = RenderConfig::default();
        let s1 = GradientSpec {
            shape: ShapeKind::Horizontal,
            space: InterpolationSpace::DirectComponent,
            c1: Hsv::new(0.0, 1.0, 1.0),
            c2: Hsv::new(0.5, 1.0, 1.0),
        };
        let s2 = GradientSpec {
            space: InterpolationSpace::HsvSpace,
            ..s1
        };
        let direct = s1.render(&cfg).unwrap();
        let hsv = s2.render(&cfg).unwrap();
        assert_ne!(direct.pixel(0, 150), hsv.pixel(0, 150));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn pixel_accessor_rejects_out_of_bounds_coordinates() {
        let cfg = RenderConfig::square(8);
        let buf = spec(ShapeKind::Horizontal, InterpolationSpace::HsvSpace)
            .render(&cfg)
            .unwrap();
        buf.pixel(8, 0);
    }

    #[test]
    fn render_is_deterministic() {
        let cfg = RenderConfig::default();
        let s = spec(ShapeKind::Conic, InterpolationSpace::HsvSpace);
        assert_eq!(s.render(&cfg).unwrap(), s.render(&cfg).unwrap());
    }

    #[test]
    fn parallel_fill_matches_serial_reference() {
        let cfg = RenderConfig::square(32);
        let s = spec(ShapeKind::Diamond, InterpolationSpace::HsvSpace);
        let buf = s.render(&cfg).unwrap();

        for row in 0..32 {
            for col in 0..32 {
                let t = s.shape.fraction_at(row, col, &cfg);
                let rgb = s.c1.lerp(s.c2, t).to_rgb();
                assert_eq!(buf.pixel(row, col), [rgb.r, rgb.g, rgb.b]);
            }
        }
    }
}
