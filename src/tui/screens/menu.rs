//! Menu screen: category tabs, subcategory tabs and the card grid.

use crate::catalog::MenuDocument;
use crate::core::browser::{MenuBrowser, Tab};
use crate::core::presenter::{DrinkCard, Layout as CardLayout};
use crate::tui::theme::THEME;
use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Widget, Wrap},
};
use std::sync::Arc;
use std::time::Instant;

const CARD_HEIGHT: u16 = 6;

/// Menu screen state.
#[derive(Debug)]
pub struct MenuScreen {
    pub browser: MenuBrowser,
    shown_at: Instant,
}

impl MenuScreen {
    pub fn new(document: Arc<MenuDocument>) -> Self {
        Self {
            browser: MenuBrowser::new(document),
            shown_at: Instant::now(),
        }
    }

    /// Restart the card entrance after the visible items changed
    pub fn replay_entrance(&mut self) {
        self.shown_at = Instant::now();
    }

    pub fn step_category(&mut self, step: isize) {
        if self.browser.step_category(step) {
            self.replay_entrance();
        }
    }

    pub fn step_subcategory(&mut self, step: isize) {
        if self.browser.step_subcategory(step) {
            self.replay_entrance();
        }
    }
}

fn tab_row(tabs: &[Tab]) -> Tabs<'static> {
    let selected = tabs.iter().position(|tab| tab.active);
    Tabs::new(tabs.iter().map(|tab| tab.label.clone()).collect::<Vec<_>>())
        .style(THEME.tab)
        .highlight_style(THEME.selected)
        .select(selected)
        .divider("│")
}

fn render_card(card: &DrinkCard, progress: f64, area: Rect, buf: &mut Buffer) {
    let (border, name) = if progress < 1.0 {
        (THEME.card_entering, THEME.card_entering)
    } else {
        (THEME.card_border, THEME.drink_name)
    };

    let block = Block::default().borders(Borders::ALL).border_style(border);
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines = vec![Line::styled(card.name.clone(), name)];
    if !card.description.is_empty() {
        lines.push(Line::raw(card.description.clone()));
    }
    if !card.tags.is_empty() {
        lines.push(Line::styled(
            card.tags.iter().map(|tag| format!("#{tag}")).join(" "),
            THEME.drink_tag,
        ));
    }
    if !card.image.is_empty() {
        lines.push(Line::styled(
            card.image.clone(),
            THEME.breadcrumb.add_modifier(Modifier::ITALIC),
        ));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

impl Widget for &MenuScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let subcategory_tabs = self.browser.subcategory_tabs();
        let sub_height = if subcategory_tabs.is_some() { 1 } else { 0 };

        let layout = Layout::vertical([
            Constraint::Length(1),          // Category tabs
            Constraint::Length(sub_height), // Subcategory tabs
            Constraint::Length(1),          // Spacing
            Constraint::Min(0),             // Cards
            Constraint::Length(2),          // Help text
        ])
        .split(area);

        let categories = self.browser.category_tabs();
        if categories.is_empty() {
            Paragraph::new("No menu loaded")
                .style(THEME.status_info)
                .centered()
                .render(layout[3], buf);
        } else {
            tab_row(&categories).render(layout[0], buf);
        }
        if let Some(tabs) = subcategory_tabs {
            tab_row(&tabs).render(layout[1], buf);
        }

        let card_layout = CardLayout::for_width(area.width);
        let columns: usize = match card_layout {
            CardLayout::Desktop => 3,
            CardLayout::Compact => 1,
        };
        let elapsed = self.shown_at.elapsed();
        let cards = self.browser.visible_cards(card_layout);
        let grid = layout[3];

        for (row, chunk) in cards.chunks(columns).enumerate() {
            let y = grid.y + row as u16 * CARD_HEIGHT;
            if y + CARD_HEIGHT > grid.bottom() {
                break;
            }
            let row_area = Rect::new(grid.x, y, grid.width, CARD_HEIGHT);
            let cells =
                Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(row_area);

            for (card, cell) in chunk.iter().zip(cells.iter()) {
                let progress = card.entrance_progress(elapsed, card_layout);
                // Not yet entered
                if progress <= 0.0 {
                    continue;
                }
                render_card(card, progress, *cell, buf);
            }
        }

        let help = Line::from(vec![
            Span::styled(" ←/→ ", THEME.key),
            Span::styled(" Category ", THEME.key_desc),
            Span::styled(" Tab ", THEME.key),
            Span::styled(" Subcategory ", THEME.key_desc),
            Span::styled(" r ", THEME.key),
            Span::styled(" Roulette ", THEME.key_desc),
            Span::styled(" a ", THEME.key),
            Span::styled(" All drinks ", THEME.key_desc),
            Span::styled(" L ", THEME.key),
            Span::styled(" Reload ", THEME.key_desc),
            Span::styled(" q ", THEME.key),
            Span::styled(" Quit ", THEME.key_desc),
        ]);
        Paragraph::new(help).centered().render(layout[4], buf);
    }
}
