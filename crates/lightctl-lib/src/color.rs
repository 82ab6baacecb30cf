//! Color handling — luma-weighted brightness and CLI color parsing.
//!
//! Colors are packed `0x00RRGGBB`; the top byte is ignored everywhere.

/// True if the color has any nonzero RGB component.
pub fn is_lit(color: u32) -> bool {
    color & 0x00FF_FFFF != 0
}

/// Map a 24-bit color to a single hardware brightness level.
///
/// Perceptual-luminance approximation `(77*R + 150*G + 29*B) >> 8`, integer
/// and truncating. The weights sum to 256, so `0xFFFFFF` maps to 255.
pub fn rgb_to_brightness(color: u32) -> u8 {
    let r = (color >> 16) & 0xFF;
    let g = (color >> 8) & 0xFF;
    let b = color & 0xFF;
    ((77 * r + 150 * g + 29 * b) >> 8) as u8
}

/// Parse a color string into `0x00RRGGBB`.
///
/// Accepts:
/// - Hex: `"#FF0000"`, `"FF0000"`, `"#ff0000"`
/// - Named: `"red"`, `"green"`, `"blue"`, `"white"`, `"orange"`, `"yellow"`,
///   `"purple"`, `"cyan"`, `"off"`/`"black"`
pub fn parse_color(s: &str) -> Result<u32, String> {
    let s = s.trim();

    // Named colors
    match s.to_lowercase().as_str() {
        "red" => return Ok(0x00FF_0000),
        "green" => return Ok(0x0000_FF00),
        "blue" => return Ok(0x0000_00FF),
        "white" => return Ok(0x00FF_FFFF),
        "orange" => return Ok(0x00FF_8000),
        "yellow" => return Ok(0x00FF_FF00),
        "purple" => return Ok(0x0080_00FF),
        "cyan" => return Ok(0x0000_FFFF),
        "off" | "black" => return Ok(0x0000_0000),
        _ => {}
    }

    // Hex color
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 {
        return Err(format!("invalid color: {s} (use #RRGGBB or a color name)"));
    }
    u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {s}"))
}

/// Format a color value as `#RRGGBB`.
pub fn format_color(color: u32) -> String {
    format!("#{:06X}", color & 0x00FF_FFFF)
}
