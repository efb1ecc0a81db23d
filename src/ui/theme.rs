//! Theme and styling for the TUI.
//!
//! Card fills come from the marker colors and never change with the
//! theme; the theme covers everything around the cards.

use ratatui::style::{Color, Modifier, Style};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub primary: Color,
    pub accent: Color,

    pub success: Color,
    pub warning: Color,

    pub bg_dark: Color,
    pub bg_panel: Color,

    pub text_dim: Color,

    /// Text on a card, whatever its marker.
    pub card_text: Color,
}

/// Available theme names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeName {
    Default,
    Kanagawa,
}

impl ThemeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Default => "default",
            ThemeName::Kanagawa => "kanagawa",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeName::Default => "Default",
            ThemeName::Kanagawa => "Kanagawa",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "kanagawa" | "kanagawa-wave" | "kanagawa_wave" => ThemeName::Kanagawa,
            _ => ThemeName::Default,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ThemeName::Default => ThemeName::Kanagawa,
            ThemeName::Kanagawa => ThemeName::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: ThemeName,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn new(name: ThemeName) -> Self {
        let colors = match name {
            ThemeName::Default => Self::default_colors(),
            ThemeName::Kanagawa => Self::kanagawa_colors(),
        };
        Self { name, colors }
    }

    pub fn from_name(name: &str) -> Self {
        Self::new(ThemeName::parse(name))
    }

    // Green primary after the board's refresh button, yellow cursor.
    fn default_colors() -> ThemeColors {
        ThemeColors {
            primary: Color::Rgb(76, 175, 80),
            accent: Color::Rgb(250, 204, 21),
            success: Color::Rgb(34, 197, 94),
            warning: Color::Rgb(251, 146, 60),
            bg_dark: Color::Rgb(24, 24, 27),
            bg_panel: Color::Rgb(39, 39, 42),
            text_dim: Color::Rgb(113, 113, 122),
            card_text: Color::Black,
        }
    }

    /// kanagawa.nvim: springGreen, roninYellow, springBlue, samuraiRed,
    /// then sumiInk0, sumiInk2 and sumiInk4 for backgrounds and dim text.
    fn kanagawa_colors() -> ThemeColors {
        ThemeColors {
            primary: Color::Rgb(0x98, 0xBB, 0x6C),
            accent: Color::Rgb(0xFF, 0x9E, 0x3B),
            success: Color::Rgb(0x7F, 0xB4, 0xCA),
            warning: Color::Rgb(0xE8, 0x24, 0x24),
            bg_dark: Color::Rgb(0x16, 0x16, 0x1D),
            bg_panel: Color::Rgb(0x2A, 0x2A, 0x37),
            text_dim: Color::Rgb(0x54, 0x54, 0x6D),
            card_text: Color::Black,
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Styles
    // ══════════════════════════════════════════════════════════════════════

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.colors.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card(&self, fill: Color) -> Style {
        Style::default()
            .bg(fill)
            .fg(self.colors.card_text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.colors.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.colors.bg_panel)
        }
    }

    pub fn status(&self, warning: bool) -> Style {
        let color = if warning {
            self.colors.warning
        } else {
            self.colors.success
        };
        Style::default().fg(color)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.colors.text_dim)
    }

    pub fn key_highlight(&self) -> Style {
        Style::default()
            .fg(self.colors.accent)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeName::Default)
    }
}
