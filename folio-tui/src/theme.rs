//! Night-sky theme module.
//!
//! Black background, purple accents and star-yellow highlights.

use ratatui::style::Color;

/// Night-sky color palette
pub mod colors {
    use super::Color;

    // === Background Colors ===
    /// Page background
    pub const BG_DARK: Color = Color::Rgb(0x05, 0x03, 0x0A);
    /// Nav bar and card background
    pub const BG_MEDIUM: Color = Color::Rgb(0x14, 0x0E, 0x22);
    /// Focused inputs and selected rows
    pub const BG_HIGHLIGHT: Color = Color::Rgb(0x2A, 0x1C, 0x44);

    // === Foreground Colors ===
    pub const FG_PRIMARY: Color = Color::Rgb(0xF4, 0xF4, 0xF5);
    /// Body copy
    pub const FG_DIM: Color = Color::Rgb(0xA1, 0xA1, 0xAA);
    /// Placeholders and hints
    pub const FG_HINT: Color = Color::Rgb(0x5C, 0x5C, 0x66);

    // === Accent Colors ===
    pub const YELLOW: Color = Color::Rgb(0xFA, 0xCC, 0x15);
    pub const PURPLE: Color = Color::Rgb(0xA8, 0x55, 0xF7);
    pub const PURPLE_LIGHT: Color = Color::Rgb(0xC0, 0x84, 0xFC);
    pub const GREEN: Color = Color::Rgb(0x4A, 0xDE, 0x80);

    // === UI Element Colors ===
    pub const BORDER: Color = Color::Rgb(0x58, 0x2C, 0x87);
    pub const BORDER_DIM: Color = Color::Rgb(0x2E, 0x1A, 0x47);
    pub const BORDER_ACCENT: Color = YELLOW;

    // === Background animation ===
    pub const STAR: Color = Color::Rgb(0xFA, 0xCC, 0x15);
    pub const SPARKLE: Color = Color::Rgb(0xD8, 0xB4, 0xFE);
    /// Cursor follower
    pub const CURSOR: Color = YELLOW;
}

/// Badge colors alternate between these, like the project cards on the web page
pub const BADGE_COLORS: &[Color] = &[colors::YELLOW, colors::PURPLE_LIGHT];

/// Badge color for the n-th technology of a card
pub fn badge_color(index: usize) -> Color {
    BADGE_COLORS[index % BADGE_COLORS.len()]
}

/// Scale an RGB color by a brightness factor in `0.0..=1.0`
pub fn dim(color: Color, factor: f32) -> Color {
    let factor = factor.clamp(0.0, 1.0);
    if let Color::Rgb(r, g, b) = color {
        Color::Rgb(
            (r as f32 * factor) as u8,
            (g as f32 * factor) as u8,
            (b as f32 * factor) as u8,
        )
    } else {
        color
    }
}

/// Semantic styling helpers
pub mod styles {
    use ratatui::style::{Modifier, Style};
    use super::colors;

    pub fn text() -> Style {
        Style::default().fg(colors::FG_PRIMARY)
    }

    pub fn text_dim() -> Style {
        Style::default().fg(colors::FG_DIM)
    }

    pub fn text_hint() -> Style {
        Style::default().fg(colors::FG_HINT)
    }

    /// Links and URLs
    pub fn link() -> Style {
        Style::default()
            .fg(colors::PURPLE_LIGHT)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn border() -> Style {
        Style::default().fg(colors::BORDER)
    }

    pub fn border_dim() -> Style {
        Style::default().fg(colors::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors::BORDER_ACCENT)
    }

    /// Section headings
    pub fn heading() -> Style {
        Style::default()
            .fg(colors::YELLOW)
            .add_modifier(Modifier::BOLD)
    }

    /// Card titles
    pub fn title() -> Style {
        Style::default()
            .fg(colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Card subtitles
    pub fn subtitle() -> Style {
        Style::default().fg(colors::PURPLE_LIGHT)
    }

    /// Active nav item
    pub fn nav_active() -> Style {
        Style::default()
            .fg(colors::YELLOW)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_inactive() -> Style {
        Style::default().fg(colors::FG_DIM)
    }

    /// Owner name in the nav bar
    pub fn brand() -> Style {
        Style::default()
            .fg(colors::YELLOW)
            .add_modifier(Modifier::BOLD)
    }

    pub fn form_label() -> Style {
        Style::default().fg(colors::FG_DIM)
    }

    pub fn form_input_focused() -> Style {
        Style::default()
            .fg(colors::FG_PRIMARY)
            .bg(colors::BG_HIGHLIGHT)
    }

    pub fn form_input() -> Style {
        Style::default()
            .fg(colors::FG_PRIMARY)
            .bg(colors::BG_MEDIUM)
    }

    pub fn button() -> Style {
        Style::default()
            .fg(colors::FG_PRIMARY)
            .bg(colors::BG_HIGHLIGHT)
    }

    pub fn button_focused() -> Style {
        Style::default()
            .fg(colors::BG_DARK)
            .bg(colors::YELLOW)
            .add_modifier(Modifier::BOLD)
    }

    /// Menu row under the selection
    pub fn selected() -> Style {
        Style::default()
            .fg(colors::BG_DARK)
            .bg(colors::PURPLE)
            .add_modifier(Modifier::BOLD)
    }
}
