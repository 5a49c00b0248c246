//! Cylindrical (HSV) and additive (RGB) color types and the conversion
//! between them.
//!
//! Hue has period 1.0, so `h = 0.0` and `h = 1.0` name the same color.
//! Components arrive here raw: the palette mapper deliberately emits hues
//! outside [0,1] (the gradient's far endpoint can wind multiple times around
//! the wheel), and out-of-range song descriptors propagate into saturation
//! and value unvalidated. Conversion therefore never fails; it wraps hue
//! modulo 1.0 and clamps saturation/value into [0,1].

/// A color in hue/saturation/value space, components nominally in [0,1].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// An 8-bit-per-channel additive color. Derived from [`Hsv`] only at the
/// point a pixel is written, never stored as primary state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Linear blend of each component at fraction `t`. The result is raw:
    /// hue is not re-wrapped here, so a blend across the wheel's seam keeps
    /// its winding until [`Hsv::to_rgb`] normalizes it.
    pub fn lerp(self, other: Hsv, t: f64) -> Hsv {
        Hsv {
            h: (other.h - self.h) * t + self.h,
            s: (other.s - self.s) * t + self.s,
            v: (other.v - self.v) * t + self.v,
        }
    }

    /// Sector-based cylindrical-to-additive conversion.
    ///
    /// Hue wraps with `rem_euclid(1.0)`, saturation and value clamp to
    /// [0,1]. Each output channel is `floor(c * 255)` via the truncating
    /// float-to-int cast; rounding instead would shift every gradient by up
    /// to one unit per channel.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(1.0);
        let s = self.s.clamp(0.0, 1.0);
        let v = self.v.clamp(0.0, 1.0);

        if s == 0.0 {
            let grey = channel_u8(v);
            return Rgb {
                r: grey,
                g: grey,
                b: grey,
            };
        }

        let sector = h * 6.0;
        let i = sector.floor();
        let f = sector - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match (i as i64).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgb {
            r: channel_u8(r),
            g: channel_u8(g),
            b: channel_u8(b),
        }
    }
}

impl Rgb {
    /// Per-channel linear blend in integer RGB space at fraction `t`,
    /// truncated toward zero at the cast (the `as u8` cast also saturates
    /// into [0,255] for fractions outside [0,1]).
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let blend = |a: u8, b: u8| ((b as i64 - a as i64) as f64 * t + a as f64) as u8;
        Rgb {
            r: blend(self.r, other.r),
            g: blend(self.g, other.g),
            b: blend(self.b, other.b),
        }
    }
}

/// Truncating unit-interval-to-byte conversion: `floor(c * 255)`, not
/// rounded.
fn channel_u8(c: f64) -> u8 {
    (c * 255.0) as u8
}
