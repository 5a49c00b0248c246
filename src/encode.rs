//! Pixel-buffer serialization to PNG.
//!
//! PNG is the transport format because it is lossless; gradient smoothness
//! is the whole point of the output, so chroma subsampling or quantization
//! would defeat it.

use std::io::Cursor;

use crate::{
    error::{AudiogradError, AudiogradResult},
    render::PixelBuffer,
};

/// Encode a rendered buffer into PNG bytes.
pub fn encode_png(buffer: &PixelBuffer) -> AudiogradResult<Vec<u8>> {
    let expected = buffer.width as usize * buffer.height as usize * 3;
    if buffer.data.len() != expected {
        return Err(AudiogradError::encode(format!(
            "pixel buffer holds {} bytes, expected {} for {}x{} rgb8",
            buffer.data.len(),
            expected,
            buffer.width,
            buffer.height
        )));
    }

    let img = image::ImageBuffer::<image::Rgb<u8>, &[u8]>::from_raw(
        buffer.width,
        buffer.height,
        buffer.data.as_slice(),
    )
    .ok_or_else(|| AudiogradError::encode("pixel buffer does not match its dimensions"))?;

    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| AudiogradError::encode(format!("png encode failed: {e}")))?;

    tracing::debug!(bytes = out.get_ref().len(), "encoded png");
    Ok(out.into_inner())
}
