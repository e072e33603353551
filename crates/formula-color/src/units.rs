//! Token-level parsing for the numeric and boolean attribute values used by
//! DrawingML and SpreadsheetML color markup.

/// Thousandths of a percent per percent (`ST_Percentage`: 100% = 100000).
pub const PERCENT_SCALE: f64 = 1000.0;

/// 60000ths of a degree per degree (`ST_Angle` / `ST_PositiveFixedAngle`).
pub const ANGLE_SCALE: f64 = 60_000.0;

/// Parse an `ST_Percentage` value into thousandths of a percent.
///
/// Accepts both the transitional integer form (`"50000"`) and the strict
/// form with a percent sign (`"50%"`, `"23.5%"`).
pub fn parse_percentage(val: &str) -> Option<i32> {
    let val = val.trim();
    if let Some(pct) = val.strip_suffix('%') {
        let pct = pct.trim().parse::<f64>().ok()?;
        if !pct.is_finite() {
            return None;
        }
        return Some(percent_to_raw(pct));
    }
    val.parse::<i64>()
        .ok()
        .map(|raw| raw.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

/// Parse an angle attribute expressed in 60000ths of a degree.
pub fn parse_angle(val: &str) -> Option<i32> {
    let val = val.trim();
    match val.parse::<i64>() {
        Ok(raw) => Some(raw.clamp(i32::MIN as i64, i32::MAX as i64) as i32),
        // Some producers write fractional angles; keep the nearest unit.
        Err(_) => val
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v.round() as i32),
    }
}

pub fn parse_bool(val: &str) -> Option<bool> {
    let val = val.trim();
    if val == "1" || val.eq_ignore_ascii_case("true") || val.eq_ignore_ascii_case("on") {
        Some(true)
    } else if val == "0" || val.eq_ignore_ascii_case("false") || val.eq_ignore_ascii_case("off") {
        Some(false)
    } else {
        None
    }
}

/// Parse a hex color into `0xAARRGGBB`.
///
/// Six digits are treated as opaque RGB, eight digits as ARGB.
pub fn parse_hex_rgb(val: &str) -> Option<u32> {
    let hex = val.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => u32::from_str_radix(hex, 16)
            .ok()
            .map(|rgb| 0xFF00_0000 | rgb),
        8 => u32::from_str_radix(hex, 16).ok(),
        _ => None,
    }
}

pub fn format_hex_rgb(argb: u32) -> String {
    format!("{:06X}", argb & 0x00FF_FFFF)
}

pub fn format_hex_argb(argb: u32) -> String {
    format!("{argb:08X}")
}

pub(crate) fn percent_to_raw(pct: f64) -> i32 {
    (pct * PERCENT_SCALE).round() as i32
}

pub(crate) fn raw_to_percent(raw: i32) -> f64 {
    raw as f64 / PERCENT_SCALE
}

pub(crate) fn degrees_to_raw(degrees: f64) -> i32 {
    (degrees * ANGLE_SCALE).round() as i32
}

pub(crate) fn raw_to_degrees(raw: i32) -> f64 {
    raw as f64 / ANGLE_SCALE
}
