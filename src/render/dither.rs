//! Floyd-Steinberg error diffusion over a pixel frame.

use super::scale::PixelFrame;
use super::Rgb;

/// Levels per channel after quantization.
pub const DITHER_LEVELS: i16 = 6;

/// Quantize a channel value to the nearest of `DITHER_LEVELS` evenly spaced levels.
#[inline]
fn quantize_channel(v: i16) -> i16 {
    let v = v.clamp(0, 255);
    let step = 255 / (DITHER_LEVELS - 1);
    ((v + step / 2) / step * step).min(255)
}

/// Reduce every channel of `frame` to `DITHER_LEVELS` levels, diffusing the
/// quantization error to unprocessed neighbours.
///
/// Pattern (per channel):
/// ```text
///        [*] 7/16
/// 3/16  5/16 1/16
/// ```
pub fn floyd_steinberg(frame: &PixelFrame) -> PixelFrame {
    let w = frame.width as usize;
    let h = frame.height as usize;
    if w == 0 || h == 0 {
        return frame.clone();
    }

    // Signed work buffer, three channels per pixel
    let mut buffer: Vec<[i16; 3]> = frame
        .pixels
        .iter()
        .map(|p| [p.r as i16, p.g as i16, p.b as i16])
        .collect();
    let mut out = Vec::with_capacity(w * h);

    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            let old = buffer[idx];
            let new = old.map(quantize_channel);
            out.push(Rgb::new(new[0] as u8, new[1] as u8, new[2] as u8));

            for c in 0..3 {
                let error = old[c].clamp(0, 255) - new[c];
                if error == 0 {
                    continue;
                }
                if x + 1 < w {
                    buffer[idx + 1][c] += error * 7 / 16;
                }
                if y + 1 < h {
                    if x > 0 {
                        buffer[idx + w - 1][c] += error * 3 / 16;
                    }
                    buffer[idx + w][c] += error * 5 / 16;
                    if x + 1 < w {
                        buffer[idx + w + 1][c] += error / 16;
                    }
                }
            }
        }
    }

    PixelFrame {
        width: frame.width,
        height: frame.height,
        pixels: out,
    }
}
