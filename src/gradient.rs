// Copyright (c) 2026 rezky_nightky

pub type Rgb = [u8; 3];

/// Fixed color of the bright lead glyph, independent of the gradient.
pub const HEAD_COLOR: Rgb = [0xFF, 0xFF, 0xFF];

/// Fade `base` by distance from the trail head. Position 0 is the cell
/// closest to the head (full intensity); `trail_len - 1` is the faintest.
/// Channels are floored, so the result is already encodable as-is.
pub fn gradient(base: Rgb, trail_len: u16, at: u16) -> Rgb {
    let intensity = 1.0 - (at as f32 / trail_len.max(1) as f32);
    base.map(|c| (c as f32 * intensity) as u8)
}

pub fn to_hex(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color[0], color[1], color[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_zero_is_full_intensity() {
        assert_eq!(gradient([0x41, 0xFF, 0x00], 12, 0), [0x41, 0xFF, 0x00]);
    }

    #[test]
    fn intensity_never_increases_along_the_trail() {
        let base = [0x41, 0xFF, 0x00];
        for len in 1u16..=24 {
            let mut prev = gradient(base, len, 0);
            for at in 1..len {
                let cur = gradient(base, len, at);
                for ch in 0..3 {
                    assert!(cur[ch] <= prev[ch], "len {} at {}", len, at);
                }
                prev = cur;
            }
        }
    }

    #[test]
    fn channels_are_floored() {
        // 255 * 0.5 = 127.5 floors to 127
        assert_eq!(gradient([0, 255, 0], 2, 1), [0, 127, 0]);
    }

    #[test]
    fn to_hex_is_zero_padded_lowercase() {
        assert_eq!(to_hex([0, 255, 0]), "#00ff00");
        assert_eq!(to_hex([0, 127, 0]), "#007f00");
        assert_eq!(to_hex([0x41, 0xFF, 0x00]), "#41ff00");
    }
}
