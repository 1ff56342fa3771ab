use rand::{Rng, RngCore};

use super::declaration::split_top_level;

pub type Rgb = [u8; 3];
pub type Rgba = [u8; 4];

/// Parses `#rgb` or `#rrggbb` (case-insensitive).
pub fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.trim().strip_prefix('#')?;
    if !digits.is_ascii() {
        return None;
    }
    match digits.len() {
        6 => Some([
            u8::from_str_radix(&digits[0..2], 16).ok()?,
            u8::from_str_radix(&digits[2..4], 16).ok()?,
            u8::from_str_radix(&digits[4..6], 16).ok()?,
        ]),
        3 => {
            let mut rgb = [0u8; 3];
            for (channel, c) in rgb.iter_mut().zip(digits.chars()) {
                let v = c.to_digit(16)? as u8;
                *channel = v * 16 + v;
            }
            Some(rgb)
        }
        _ => None,
    }
}

/// Formats a color as lowercase `#rrggbb`.
pub fn to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// True for exactly `#` followed by six hex digits.
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7 && value.starts_with('#') && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// A uniformly random `#RRGGBB` color.
pub fn random_hex(rng: &mut dyn RngCore) -> String {
    format!("#{:06X}", rng.random_range(0..=0xFF_FFFF_u32))
}

/// Linear interpolation between two colors, `t` in `[0, 1]`.
pub fn mix(from: Rgb, to: Rgb, t: f32) -> Rgb {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8;
    [lerp(from[0], to[0]), lerp(from[1], to[1]), lerp(from[2], to[2])]
}

/// Perceived brightness, `(299R + 587G + 114B) / 1000`.
pub fn brightness(rgb: Rgb) -> f32 {
    (rgb[0] as f32 * 299.0 + rgb[1] as f32 * 587.0 + rgb[2] as f32 * 114.0) / 1000.0
}

/// Black text on bright swatches, white text on dark ones.
pub fn contrast_color(hex: &str) -> &'static str {
    match parse_hex(hex) {
        Some(rgb) if brightness(rgb) > 128.0 => "#000000",
        _ => "#ffffff",
    }
}

/// Parses the color syntaxes the generators produce: hex, `rgb()`, `rgba()`
/// and a handful of keywords.
pub fn parse_css_color(value: &str) -> Option<Rgba> {
    let value = value.trim();
    if let Some(rgb) = parse_hex(value) {
        return Some([rgb[0], rgb[1], rgb[2], 255]);
    }
    let lower = value.to_ascii_lowercase();
    match lower.as_str() {
        "transparent" => return Some([0, 0, 0, 0]),
        "white" => return Some([255, 255, 255, 255]),
        "black" => return Some([0, 0, 0, 255]),
        _ => {}
    }

    let inner = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let parts = split_top_level(inner, ',');
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let mut rgba = [0u8, 0, 0, 255];
    for (i, part) in parts.iter().take(3).enumerate() {
        let channel: f32 = part.trim().parse().ok()?;
        rgba[i] = channel.round().clamp(0.0, 255.0) as u8;
    }
    if let Some(alpha) = parts.get(3) {
        let alpha: f32 = alpha.trim().parse().ok()?;
        rgba[3] = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
    Some(rgba)
}

/// The alpha channel of an `rgba()` color as a whole percentage.
pub fn alpha_percent(value: &str) -> Option<u8> {
    let lower = value.trim().to_ascii_lowercase();
    let inner = lower.strip_prefix("rgba(")?.strip_suffix(')')?;
    let alpha: f32 = split_top_level(inner, ',').get(3)?.trim().parse().ok()?;
    Some((alpha.clamp(0.0, 1.0) * 100.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(parse_hex("#3490dc"), Some([0x34, 0x90, 0xdc]));
        assert_eq!(parse_hex("#FFF"), Some([255, 255, 255]));
        assert_eq!(to_hex([0x34, 0x90, 0xdc]), "#3490dc");
        assert_eq!(parse_hex("3490dc"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_random_hex_is_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let color = random_hex(&mut rng);
            assert!(is_hex_color(&color), "{color}");
        }
    }

    #[test]
    fn test_mix_midpoint() {
        assert_eq!(mix([0, 0, 0], [255, 255, 255], 0.5), [128, 128, 128]);
        assert_eq!(mix([10, 20, 30], [10, 20, 30], 0.3), [10, 20, 30]);
    }

    #[test]
    fn test_contrast() {
        assert_eq!(contrast_color("#ffffff"), "#000000");
        assert_eq!(contrast_color("#1e293b"), "#ffffff");
    }

    #[test]
    fn test_parse_rgba() {
        assert_eq!(parse_css_color("rgba(0, 0, 0, 0.2)"), Some([0, 0, 0, 51]));
        assert_eq!(parse_css_color("rgb(255,0,0)"), Some([255, 0, 0, 255]));
        assert_eq!(alpha_percent("rgba(31, 38, 135, 0.37)"), Some(37));
        assert_eq!(alpha_percent("#ffffff"), None);
    }
}
