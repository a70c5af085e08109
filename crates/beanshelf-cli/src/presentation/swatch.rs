/// Parse `#rgb` or `#rrggbb` into RGB components.
///
/// Anything else (named colours, `rgb(...)`, stray text) is shown as plain
/// text by the callers.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let mut digits = hex.chars().filter_map(|c| c.to_digit(16)).map(|d| (d * 17) as u8);
            Some((digits.next()?, digits.next()?, digits.next()?))
        }
        6 => Some((
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )),
        _ => None,
    }
}
