//! Display formatting shared by every renderer. Absent values format as an
//! em-dash placeholder, never as an error.

/// Placeholder for missing numeric values.
pub const MISSING: &str = "—";

/// Fixed 2-decimal rendering for the [0,1] V-Dem indices.
pub fn fmt_index(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => MISSING.to_string(),
    }
}

/// 1-decimal "/10" rendering for the BTI governance score.
pub fn fmt_bti(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}/10", v),
        None => MISSING.to_string(),
    }
}

/// Decorative flag glyph from an ISO 3166-1 alpha-2 code via regional
/// indicator symbols. Short or non-alphabetic codes degrade to a neutral
/// glyph.
pub fn flag_glyph(iso2: &str) -> String {
    let code: Vec<char> = iso2.trim().to_uppercase().chars().collect();
    if code.len() != 2 || !code.iter().all(|c| c.is_ascii_uppercase()) {
        return "🏳".to_string();
    }
    code.iter()
        .map(|&c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)).unwrap_or('🏳'))
        .collect()
}
