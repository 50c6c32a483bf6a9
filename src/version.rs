// src/version.rs
// Release metadata, taken from the package manifest at build time.

pub const MAJOR: u32 = parse_u32(env!("CARGO_PKG_VERSION_MAJOR"));
pub const MINOR: u32 = parse_u32(env!("CARGO_PKG_VERSION_MINOR"));
pub const PATCH: u32 = parse_u32(env!("CARGO_PKG_VERSION_PATCH"));

pub fn string() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

const fn parse_u32(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut value = 0u32;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_match_string() {
        assert_eq!(string(), format!("{MAJOR}.{MINOR}.{PATCH}"));
    }
}
