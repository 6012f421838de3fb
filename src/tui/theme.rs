use ratatui::style::Color;

use crate::model::{Role, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
    pub leader: Color,
    pub member: Color,
    pub guest: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            selection_border: Color::Rgb(0xFB, 0x41, 0x96),
            leader: Color::Rgb(0xFF, 0xD7, 0x00),
            member: Color::Rgb(0x44, 0xDD, 0xFF),
            guest: Color::Rgb(0xCC, 0x66, 0xFF),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    // Byte slicing below needs six ASCII hex digits
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring invalid color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "yellow" => theme.yellow = color,
                "green" => theme.green = color,
                "selection_bg" => theme.selection_bg = color,
                "selection_border" => theme.selection_border = color,
                _ => tracing::warn!(key = %key, "unknown theme color"),
            }
        }

        for (role, value) in &ui.role_colors {
            let (Ok(role), Some(color)) = (role.parse::<Role>(), parse_hex_color(value)) else {
                tracing::warn!(role = %role, value = %value, "ignoring invalid role color");
                continue;
            };
            match role {
                Role::Leader => theme.leader = color,
                Role::Member => theme.member = color,
                Role::Guest => theme.guest = color,
            }
        }

        theme
    }

    /// Avatar and badge color for a role
    pub fn role_color(&self, role: Role) -> Color {
        match role {
            Role::Leader => self.leader,
            Role::Member => self.member,
            Role::Guest => self.guest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None);
        // Six bytes, but not six characters
        assert_eq!(parse_hex_color("#a\u{e9}123"), None);
        assert_eq!(parse_hex_color("#+1+2+3"), None);
    }

    #[test]
    fn non_ascii_color_is_ignored() {
        let mut ui = UiConfig::default();
        ui.colors.insert("highlight".into(), "#a\u{e9}123".into());
        ui.role_colors.insert("guest".into(), "#\u{e9}\u{e9}\u{e9}".into());
        let theme = Theme::from_config(&ui);
        assert_eq!(theme.highlight, Theme::default().highlight);
        assert_eq!(theme.guest, Theme::default().guest);
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.role_colors.insert("Guest".into(), "#112233".into());
        ui.role_colors.insert("admin".into(), "#445566".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        assert_eq!(theme.role_color(Role::Guest), Color::Rgb(0x11, 0x22, 0x33));
        // Unchanged defaults still present
        assert_eq!(theme.text, Color::Rgb(0xB0, 0xAA, 0xFF));
        assert_eq!(theme.role_color(Role::Leader), Theme::default().leader);
    }

    #[test]
    fn test_role_colors_distinct() {
        let theme = Theme::default();
        assert_ne!(theme.role_color(Role::Leader), theme.role_color(Role::Member));
        assert_ne!(theme.role_color(Role::Member), theme.role_color(Role::Guest));
    }
}
