//! TUI theme and styling constants.

use crate::core::wheel::Rgb;
use ratatui::style::{Color, Modifier, Style};

/// Application color scheme.
pub struct Theme {
    pub root: Style,
    pub title: Style,
    pub selected: Style,
    pub normal: Style,
    pub tab: Style,
    pub status_bar: Style,
    pub status_success: Style,
    pub status_error: Style,
    pub status_info: Style,
    pub key: Style,
    pub key_desc: Style,
    pub popup_border: Style,
    pub popup_title: Style,
    pub drink_name: Style,
    pub drink_tag: Style,
    pub breadcrumb: Style,
    pub card_border: Style,
    pub card_entering: Style,
    pub pointer: Style,
}

/// Default dark theme.
pub static THEME: Theme = Theme {
    root: Style::new().bg(Color::Indexed(234)),
    title: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    selected: Style::new()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    normal: Style::new().fg(Color::White),
    tab: Style::new().fg(Color::Gray),
    status_bar: Style::new().fg(Color::White).bg(Color::Indexed(236)),
    status_success: Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
    status_error: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
    status_info: Style::new().fg(Color::Yellow),
    key: Style::new()
        .fg(Color::Black)
        .bg(Color::Indexed(240))
        .add_modifier(Modifier::BOLD),
    key_desc: Style::new().fg(Color::White).bg(Color::Indexed(236)),
    popup_border: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    popup_title: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    drink_name: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    drink_tag: Style::new().fg(Color::Magenta),
    breadcrumb: Style::new().fg(Color::Gray),
    card_border: Style::new().fg(Color::Indexed(244)),
    card_entering: Style::new().fg(Color::Indexed(240)),
    pointer: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
};

/// Terminal color for a wedge
pub fn wedge_color(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}
