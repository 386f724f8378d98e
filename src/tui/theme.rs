//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;
use serde::{Deserialize, Serialize};

use crate::scoring::Cue;

/// User-facing theme choice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Auto,
    Dark,
    Light,
}

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Band cue colors (deep green, green, yellow, red)
    pub cue_strong: Color,
    pub cue_positive: Color,
    pub cue_caution: Color,
    pub cue_alert: Color,

    // Slider and range bar colors
    pub slider_filled: Color,
    pub slider_selected: Color,
    pub bar_empty: Color,

    // Panel styles
    pub panel_border: Color,
    pub panel_border_selected: Color,
    pub title_style: Style,
    pub row_selected: Style,

    // General colors
    pub muted: Color,
    pub title_color: Color,
    pub advice_index: Color,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
    pub popup_bg: Color,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            cue_strong: Color::Rgb(5, 150, 105),
            cue_positive: Color::Rgb(16, 185, 129),
            cue_caution: Color::Rgb(234, 179, 8),
            cue_alert: Color::Rgb(239, 68, 68),
            slider_filled: Color::Rgb(59, 130, 246),
            slider_selected: Color::Cyan,
            bar_empty: Color::DarkGray,
            panel_border: Color::Indexed(238),
            panel_border_selected: Color::Cyan,
            title_style: Style::new().bold(),
            row_selected: Style::new().fg(Color::Cyan).bold(),
            muted: Color::Gray,
            title_color: Color::Cyan,
            advice_index: Color::Rgb(59, 130, 246),
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
            popup_bg: Color::Indexed(234),
        }
    }

    pub fn light() -> Self {
        Self {
            cue_strong: Color::Rgb(4, 120, 87),
            cue_positive: Color::Rgb(5, 150, 105),
            cue_caution: Color::Rgb(161, 98, 7),
            cue_alert: Color::Rgb(185, 28, 28),
            slider_filled: Color::Rgb(37, 99, 235),
            slider_selected: Color::Blue,
            bar_empty: Color::Indexed(250),
            panel_border: Color::Indexed(250),
            panel_border_selected: Color::Blue,
            title_style: Style::new().bold(),
            row_selected: Style::new().fg(Color::Blue).bold(),
            muted: Color::Indexed(243),
            title_color: Color::Blue,
            advice_index: Color::Rgb(37, 99, 235),
            status_bar_bg: Color::Indexed(254),
            status_key_color: Color::Blue,
            flash_success: Color::Rgb(21, 128, 61),
            flash_error: Color::Rgb(185, 28, 28),
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
            popup_bg: Color::Indexed(255),
        }
    }

    /// Color for a band cue
    pub fn cue_color(&self, cue: Cue) -> Color {
        match cue {
            Cue::Strong => self.cue_strong,
            Cue::Positive => self.cue_positive,
            Cue::Caution => self.cue_caution,
            Cue::Alert => self.cue_alert,
        }
    }
}

/// Pick a palette. `Auto` asks the terminal for its background luma and
/// falls back to dark when the terminal does not answer.
pub fn resolve_theme(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Dark => ThemeColors::dark(),
        Theme::Light => ThemeColors::light(),
        Theme::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => ThemeColors::light(),
            _ => ThemeColors::dark(),
        },
    }
}
