#![forbid(unsafe_code)]

pub mod color;
pub mod encode;
pub mod error;
pub mod features;
pub mod palette;
pub mod render;
pub mod shape;

pub use color::{Hsv, Rgb};
pub use encode::encode_png;
pub use error::{AudiogradError, AudiogradResult};
pub use features::{AudioFeatures, average_features};
pub use palette::GradientPalette;
pub use render::{
    DEFAULT_SIZE, GradientSpec, InterpolationSpace, PixelBuffer, RenderConfig, synthesize,
};
pub use shape::ShapeKind;
