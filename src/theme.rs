//! Theme data model: built-in palettes and resolution from config.
//!
//! Two built-in palettes (dark and light) plus custom color overrides from the
//! config file.

use ratatui::style::Color;

use crate::config::{ThemeColorsConfig, ThemeConfig};

// ── Runtime theme colors ─────────────────────────────────────────────────────

/// All runtime colors used in the UI.
///
/// Constructed from a config-level `ThemeConfig` via `resolve_theme()`.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Tree rows
    pub cursor_bg: Color,
    pub cursor_fg: Color,
    pub dir_fg: Color,
    pub file_fg: Color,
    pub checked_fg: Color,

    // Chrome
    pub title_fg: Color,
    pub status_fg: Color,

    // Semantic colors (not configurable, consistent across themes)
    pub warning_fg: Color,
    pub accent_fg: Color,
    pub dim_fg: Color,
}

// ── Built-in palettes ────────────────────────────────────────────────────────

/// Dark theme using Catppuccin Mocha palette.
pub fn dark_theme() -> ThemeColors {
    ThemeColors {
        cursor_bg: Color::Rgb(69, 71, 90),    // #45475a (surface1)
        cursor_fg: Color::Rgb(205, 214, 244), // #cdd6f4 (text)
        dir_fg: Color::Rgb(137, 180, 250),    // #89b4fa (blue)
        file_fg: Color::Rgb(205, 214, 244),   // #cdd6f4
        checked_fg: Color::Rgb(166, 227, 161), // #a6e3a1 (green)

        title_fg: Color::Rgb(203, 166, 247),  // #cba6f7 (mauve)
        status_fg: Color::Rgb(186, 194, 222), // #bac2de (subtext1)

        warning_fg: Color::Rgb(249, 226, 175), // #f9e2af (yellow)
        accent_fg: Color::Rgb(203, 166, 247),  // #cba6f7
        dim_fg: Color::Rgb(108, 112, 134),     // #6c7086 (overlay0)
    }
}

/// Light theme using Catppuccin Latte palette.
pub fn light_theme() -> ThemeColors {
    ThemeColors {
        cursor_bg: Color::Rgb(204, 208, 218), // #ccd0da (surface0)
        cursor_fg: Color::Rgb(76, 79, 105),   // #4c4f69 (text)
        dir_fg: Color::Rgb(30, 102, 245),     // #1e66f5 (blue)
        file_fg: Color::Rgb(76, 79, 105),     // #4c4f69
        checked_fg: Color::Rgb(64, 160, 43),  // #40a02b (green)

        title_fg: Color::Rgb(136, 57, 239),   // #8839ef (mauve)
        status_fg: Color::Rgb(92, 95, 119),   // #5c5f77 (subtext1)

        warning_fg: Color::Rgb(223, 142, 29), // #df8e1d (yellow)
        accent_fg: Color::Rgb(136, 57, 239),  // #8839ef
        dim_fg: Color::Rgb(140, 143, 161),    // #8c8fa1 (overlay1)
    }
}

// ── Color parsing ────────────────────────────────────────────────────────────

/// Parse a hex color string like `"#aabbcc"` into a `ratatui::style::Color`.
/// Returns `None` for malformed input.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Overwrite `slot` with the parsed color when `hex` is present and valid.
fn apply(slot: &mut Color, hex: &Option<String>) {
    if let Some(color) = hex.as_deref().and_then(parse_hex_color) {
        *slot = color;
    }
}

// ── Theme resolution ─────────────────────────────────────────────────────────

/// Resolve the final `ThemeColors` from config.
///
/// - `"dark"` (default): dark Catppuccin palette
/// - `"light"`: light Catppuccin palette
/// - `"custom"`: start from dark palette, then override with custom hex values
pub fn resolve_theme(config: &ThemeConfig) -> ThemeColors {
    let scheme = config.scheme.as_deref().unwrap_or("dark");
    match scheme {
        "light" => light_theme(),
        "custom" => {
            let mut theme = dark_theme();
            if let Some(custom) = &config.custom {
                apply_custom_colors(&mut theme, custom);
            }
            theme
        }
        _ => dark_theme(),
    }
}

fn apply_custom_colors(theme: &mut ThemeColors, custom: &ThemeColorsConfig) {
    apply(&mut theme.cursor_bg, &custom.cursor_bg);
    apply(&mut theme.cursor_fg, &custom.cursor_fg);
    apply(&mut theme.dir_fg, &custom.dir_fg);
    apply(&mut theme.file_fg, &custom.file_fg);
    apply(&mut theme.checked_fg, &custom.checked_fg);
    apply(&mut theme.title_fg, &custom.title_fg);
    apply(&mut theme.status_fg, &custom.status_fg);
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_valid() {
        assert_eq!(parse_hex_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("#1a1b26"), Some(Color::Rgb(26, 27, 38)));
        assert_eq!(parse_hex_color("00ff00"), Some(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn test_resolve_light_theme() {
        let config = ThemeConfig {
            scheme: Some("light".to_string()),
            custom: None,
        };
        assert_eq!(resolve_theme(&config).dir_fg, Color::Rgb(30, 102, 245));
    }

    #[test]
    fn test_resolve_default_and_unknown_are_dark() {
        assert_eq!(
            resolve_theme(&ThemeConfig::default()).dir_fg,
            Color::Rgb(137, 180, 250)
        );
        let neon = ThemeConfig {
            scheme: Some("neon".to_string()),
            custom: None,
        };
        assert_eq!(resolve_theme(&neon).dir_fg, Color::Rgb(137, 180, 250));
    }

    #[test]
    fn test_resolve_custom_overrides() {
        let config = ThemeConfig {
            scheme: Some("custom".to_string()),
            custom: Some(ThemeColorsConfig {
                cursor_bg: Some("#1a1b26".to_string()),
                dir_fg: Some("#zzzzzz".to_string()),
                ..Default::default()
            }),
        };
        let theme = resolve_theme(&config);
        assert_eq!(theme.cursor_bg, Color::Rgb(26, 27, 38));
        // Invalid hex keeps the dark default.
        assert_eq!(theme.dir_fg, Color::Rgb(137, 180, 250));
    }

    #[test]
    fn test_dark_and_light_different() {
        let dark = dark_theme();
        let light = light_theme();
        assert_ne!(dark.file_fg, light.file_fg);
        assert_ne!(dark.cursor_bg, light.cursor_bg);
        assert_ne!(dark.dir_fg, light.dir_fg);
    }
}
