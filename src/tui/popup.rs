//! Popup overlays: the roulette modal and status messages.

use crate::core::presenter::DrinkSummary;
use crate::core::session::RouletteSession;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tokio::time::Instant;

use super::screens::wheel::WheelWidget;
use super::theme::THEME;

/// Types of popup overlays.
pub enum Popup {
    /// Roulette modal owning the open session.
    Roulette(Box<RouletteSession>),
    /// Simple message popup (success/error/info).
    Message { text: String, level: MessageLevel },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Error,
    Info,
}

impl Popup {
    /// Render the popup as an overlay.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();

        match self {
            Popup::Roulette(session) => {
                let popup_area = centered_rect(80, 80, area);
                frame.render_widget(Clear, popup_area);
                render_roulette(frame, popup_area, session);
            }
            Popup::Message { text, level } => {
                let popup_area = centered_rect(60, 30, area);
                frame.render_widget(Clear, popup_area);
                render_message(frame, popup_area, text, *level);
            }
        }
    }
}

fn render_roulette(frame: &mut ratatui::Frame, area: Rect, session: &RouletteSession) {
    let block = Block::default()
        .title(" 🎡 Drink Roulette ")
        .title_style(THEME.popup_title)
        .borders(Borders::ALL)
        .border_style(THEME.popup_border);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    match session.wheel() {
        Some(wheel) => {
            let rotation = session
                .animation()
                .map(|animation| animation.angle_at(Instant::now()))
                .unwrap_or_else(|| session.angle());
            frame.render_widget(WheelWidget { wheel, rotation }, layout[0]);
        }
        None => {
            let empty = Paragraph::new("No drinks match this filter")
                .style(THEME.status_info)
                .centered();
            frame.render_widget(empty, layout[0]);
        }
    }

    let side = Layout::vertical([
        Constraint::Length(3), // Filter
        Constraint::Length(2), // Trigger
        Constraint::Min(0),    // Result
        Constraint::Length(2), // Help
    ])
    .split(layout[1]);

    let filter_label = session
        .filter_options()
        .iter()
        .find(|option| &option.filter == session.filter())
        .map(|option| option.label.clone())
        .unwrap_or_else(|| session.filter().to_string());
    let filter = Paragraph::new(vec![
        Line::styled("Filter", THEME.title),
        Line::from(vec![Span::raw("◀ "), Span::styled(filter_label, THEME.normal), Span::raw(" ▶")]),
    ]);
    frame.render_widget(filter, side[0]);

    let trigger = session.trigger();
    let trigger_style = if trigger.enabled {
        THEME.selected
    } else {
        THEME.status_info
    };
    frame.render_widget(
        Paragraph::new(Line::styled(format!(" {} ", trigger.label), trigger_style)),
        side[1],
    );

    if let Some(result) = session.result() {
        frame.render_widget(result_panel(&result.summary), side[2]);
    }

    let help = Line::from(vec![
        Span::styled(" Space ", THEME.key),
        Span::styled(" Spin ", THEME.key_desc),
        Span::styled(" f ", THEME.key),
        Span::styled(" Filter ", THEME.key_desc),
        Span::styled(" Esc ", THEME.key),
        Span::styled(" Close ", THEME.key_desc),
    ]);
    frame.render_widget(Paragraph::new(help).centered(), side[3]);
}

fn result_panel(summary: &DrinkSummary) -> Paragraph<'static> {
    let mut lines = vec![
        Line::styled(summary.headline.clone(), THEME.status_success),
        Line::raw(""),
        Line::styled(summary.name.clone(), THEME.drink_name),
    ];
    if !summary.description.is_empty() {
        lines.push(Line::raw(summary.description.clone()));
    }
    if !summary.tags.is_empty() {
        lines.push(Line::from(
            summary
                .tags
                .iter()
                .map(|tag| Span::styled(format!("[{tag}] "), THEME.drink_tag))
                .collect::<Vec<_>>(),
        ));
    }
    lines.push(Line::styled(summary.breadcrumb.clone(), THEME.breadcrumb));

    Paragraph::new(lines).wrap(Wrap { trim: true })
}

fn render_message(frame: &mut ratatui::Frame, area: Rect, text: &str, level: MessageLevel) {
    let (title, style) = match level {
        MessageLevel::Success => (" ✓ Success ", THEME.status_success),
        MessageLevel::Error => (" ✗ Error ", THEME.status_error),
        MessageLevel::Info => (" ℹ Info ", THEME.status_info),
    };

    let block = Block::default()
        .title(title)
        .title_style(style)
        .borders(Borders::ALL)
        .border_style(style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::raw(text),
        Line::raw(""),
        Line::from(vec![
            Span::styled(" Enter ", THEME.key),
            Span::styled(" OK ", THEME.key_desc),
        ]),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// Calculate a centered rectangle with percentage-based sizing.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
