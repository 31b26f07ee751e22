//! Every drink on the menu in one table.

use crate::catalog::MenuDocument;
use crate::core::aggregator::{FlattenedDrink, flatten_all};
use crate::tui::theme::THEME;
use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    prelude::Widget,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, StatefulWidget, Table, TableState},
};

/// Flattened drink list screen state.
#[derive(Debug, Default)]
pub struct DrinksScreen {
    pub drinks: Vec<FlattenedDrink>,
    pub table_state: TableState,
}

impl DrinksScreen {
    pub fn new(document: &MenuDocument) -> Self {
        Self {
            drinks: flatten_all(document),
            table_state: TableState::default(),
        }
    }

    pub fn next(&mut self) {
        if self.drinks.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => (i + 1) % self.drinks.len(),
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.drinks.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => self.drinks.len() - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" 🍹 All drinks ({}) ", self.drinks.len()))
            .title_style(THEME.title)
            .borders(Borders::ALL);

        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).split(inner);

        if self.drinks.is_empty() {
            Paragraph::new("The menu is empty")
                .style(THEME.status_info)
                .centered()
                .render(layout[0], buf);
        } else {
            if self.table_state.selected().is_none() {
                self.table_state.select(Some(0));
            }

            let rows: Vec<Row> = self
                .drinks
                .iter()
                .map(|drink| {
                    Row::new(vec![
                        drink.name().to_string(),
                        drink.category_name.clone(),
                        drink.subcategory_name.clone().unwrap_or_default(),
                        drink.item.tags().iter().join(", "),
                    ])
                })
                .collect();

            let widths = [
                Constraint::Percentage(30),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
                Constraint::Percentage(30),
            ];

            let table = Table::new(rows, widths)
                .header(
                    Row::new(vec!["Drink", "Category", "Subcategory", "Tags"])
                        .style(THEME.title)
                        .bottom_margin(1),
                )
                .row_highlight_style(THEME.selected)
                .highlight_symbol("▶ ");

            StatefulWidget::render(table, layout[0], buf, &mut self.table_state);
        }

        let help = Line::from(vec![
            Span::styled(" ↑/k ", THEME.key),
            Span::styled(" Up ", THEME.key_desc),
            Span::styled(" ↓/j ", THEME.key),
            Span::styled(" Down ", THEME.key_desc),
            Span::styled(" a ", THEME.key),
            Span::styled(" Menu ", THEME.key_desc),
            Span::styled(" r ", THEME.key),
            Span::styled(" Roulette ", THEME.key_desc),
        ]);
        Paragraph::new(help).centered().render(layout[1], buf);
    }
}
