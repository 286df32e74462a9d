//! Hue derivation and terminal color helpers
//!
//! Every activity gets a stable pastel tint derived from its code. The hash
//! is FNV-1a so the tint survives restarts; the reduction to a percentage
//! keeps collisions harmless (two codes sharing a hue is fine, the value is
//! presentation-only).

use ratatui::style::Color;

/// Saturation used for activity tints and the gradient band.
pub const TINT_SATURATION: f32 = 0.10;

/// Brightness used for activity tints and the gradient band.
pub const TINT_VALUE: f32 = 1.0;

/// FNV-1a 64-bit hash.
pub const fn fnv1a_64(data: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;

    let mut hash = FNV_OFFSET;
    let mut i = 0;
    while i < data.len() {
        hash ^= data[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// Derive the display hue for an activity code, in `[0.0, 1.0)`.
pub fn hue_for_code(code: &str) -> f64 {
    (fnv1a_64(code.as_bytes()) % 100) as f64 / 100.0
}

/// Convert HSV to RGB (h in degrees, s and v in 0-1).
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}

/// Terminal color for an activity tile background.
pub fn tile_color(hue: f64) -> Color {
    let (r, g, b) = hsv_to_rgb(hue as f32 * 360.0, TINT_SATURATION, TINT_VALUE);
    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// Gradient band colors, from the hue tint at the top to white at the bottom.
///
/// Mirrors the screen background: a short fade from the selection's tint
/// into plain white.
pub fn gradient_colors(hue: f64, rows: usize) -> Vec<Color> {
    let (tr, tg, tb) = hsv_to_rgb(hue as f32 * 360.0, TINT_SATURATION, TINT_VALUE);
    let steps = rows.max(1);

    (0..steps)
        .map(|row| {
            let t = if steps == 1 {
                0.0
            } else {
                row as f32 / (steps - 1) as f32
            };
            let r = tr + (1.0 - tr) * t;
            let g = tg + (1.0 - tg) * t;
            let b = tb + (1.0 - tb) * t;
            Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
        })
        .collect()
}
