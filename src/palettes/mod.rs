//! Built-in confetti palettes.
//!
//! Any palette can be referenced by name (optionally prefixed with `@`)
//! from `confetti.toml` or the `--palette` flag instead of listing colors.

use serde::Serialize;

use crate::constants::COLORS;

/// An ordered list of colors; particles cycle through it by index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub name: String,
    pub colors: Vec<String>,
}

impl Palette {
    fn from_static(name: &str, colors: &[&str]) -> Self {
        Self { name: name.to_string(), colors: colors.iter().map(|c| c.to_string()).collect() }
    }
}

/// List of all available built-in palette names.
const BUILTIN_NAMES: &[&str] = &["default", "rainbow", "pastel", "gold", "pico8", "mono"];

/// Returns a list of all available built-in palette names.
pub fn list_builtins() -> Vec<&'static str> {
    BUILTIN_NAMES.to_vec()
}

/// Returns a built-in palette by name, or None if not found.
pub fn get_builtin(name: &str) -> Option<Palette> {
    let name = name.strip_prefix('@').unwrap_or(name);
    match name {
        "default" => Some(Palette::from_static("default", &COLORS)),
        "rainbow" => Some(rainbow()),
        "pastel" => Some(pastel()),
        "gold" => Some(gold()),
        "pico8" => Some(pico8()),
        "mono" => Some(mono()),
        _ => None,
    }
}

fn rainbow() -> Palette {
    Palette::from_static(
        "rainbow",
        &["#E40303", "#FF8C00", "#FFED00", "#008026", "#004DFF", "#750787"],
    )
}

fn pastel() -> Palette {
    Palette::from_static(
        "pastel",
        &["#FFB3BA", "#FFDFBA", "#FFFFBA", "#BAFFC9", "#BAE1FF", "#E0BBE4"],
    )
}

/// Metallic golds for celebratory bursts
fn gold() -> Palette {
    Palette::from_static("gold", &["#FFD700", "#DAA520", "#B8860B", "#FFF8DC"])
}

/// Bright half of the PICO-8 palette.
/// Reference: https://lospec.com/palette-list/pico-8
fn pico8() -> Palette {
    Palette::from_static(
        "pico8",
        &["#FF004D", "#FFA300", "#FFEC27", "#00E436", "#29ADFF", "#83769C", "#FF77A8", "#FFCCAA"],
    )
}

fn mono() -> Palette {
    Palette::from_static("mono", &["#FFFFFF", "#BFBFBF", "#7F7F7F", "#000000"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::is_valid_color;

    #[test]
    fn test_all_builtins_resolve() {
        for name in list_builtins() {
            let palette = get_builtin(name).expect("builtin should resolve");
            assert_eq!(palette.name, name);
            assert!(!palette.colors.is_empty());
            for color in &palette.colors {
                assert!(is_valid_color(color), "{} in @{} should parse", color, name);
            }
        }
    }

    #[test]
    fn test_default_matches_constants() {
        let palette = get_builtin("@default").unwrap();
        assert_eq!(palette.colors, crate::constants::default_colors());
    }

    #[test]
    fn test_unknown_palette() {
        assert!(get_builtin("neon").is_none());
    }
}
