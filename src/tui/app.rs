//! Main TUI application with async event loop.

use crate::catalog::{CatalogStore, MenuDocument};
use crate::config::RouletteConfig;
use crate::core::session::RouletteSession;
use crate::error::MenuError;
use crate::source::open_source;

use super::popup::{MessageLevel, Popup};
use super::screens::{Screen, drinks::DrinksScreen, menu::MenuScreen};
use super::theme::THEME;

use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::sync::Arc;
use std::time::Duration;

/// Main TUI application state.
pub struct App {
    // Mode
    should_quit: bool,
    reload_requested: bool,
    screen: Screen,

    // Menu
    source: String,
    config: RouletteConfig,
    store: CatalogStore,

    // Popup overlay
    popup: Option<Popup>,

    // Screen states
    menu: MenuScreen,
    drinks: DrinksScreen,

    // Status message
    status_message: Option<(String, MessageLevel)>,
}

impl App {
    /// Create a new App instance with an empty menu.
    pub fn new(source: String, config: RouletteConfig) -> Self {
        let store = CatalogStore::new();
        let document = store.document();

        Self {
            should_quit: false,
            reload_requested: false,
            screen: Screen::default(),
            source,
            config,
            menu: MenuScreen::new(document.clone()),
            drinks: DrinksScreen::new(&document),
            store,
            popup: None,
            status_message: None,
        }
    }

    /// Run the TUI application.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.reload().await;

        // Short enough for a smooth wheel
        let tick_rate = Duration::from_millis(33);

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            self.poll_roulette();

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }

            if self.reload_requested {
                self.reload_requested = false;
                self.reload().await;
            }
        }

        if let Some(Popup::Roulette(mut session)) = self.popup.take() {
            session.close();
        }

        Ok(())
    }

    /// Load the menu, keeping the current one on failure.
    async fn reload(&mut self) {
        let source = open_source(&self.source);
        match self.store.load(source.as_ref()).await {
            Ok(document) => {
                self.show_document(document.clone());
                self.status_message = Some((
                    format!("Loaded {} categories", document.categories.len()),
                    MessageLevel::Success,
                ));
            }
            Err(e) => {
                let text = format!("Could not load menu from {}: {}", source.describe(), e);
                self.status_message = Some(("Menu failed to load".into(), MessageLevel::Error));
                self.popup = Some(Popup::Message {
                    text,
                    level: MessageLevel::Error,
                });
            }
        }
    }

    fn show_document(&mut self, document: Arc<MenuDocument>) {
        self.drinks = DrinksScreen::new(&document);
        self.menu = MenuScreen::new(document);
    }

    /// Collect a finished spin, if any.
    fn poll_roulette(&mut self) {
        let Some(Popup::Roulette(session)) = &mut self.popup else {
            return;
        };
        if let Some(result) = session.poll_outcome() {
            self.status_message = Some((
                format!("The roulette picked {}", result.drink.name()),
                MessageLevel::Success,
            ));
        }
    }

    /// Handle key press.
    fn handle_key(&mut self, key: KeyCode) {
        // Popup takes priority
        if self.popup.is_some() {
            self.handle_popup_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('a') => self.screen = self.screen.next(),
            KeyCode::Char('r') => self.open_roulette(),
            KeyCode::Char('L') => self.reload_requested = true,
            _ => match self.screen {
                Screen::Menu => self.handle_menu_key(key),
                Screen::Drinks => self.handle_drinks_key(key),
            },
        }
    }

    fn open_roulette(&mut self) {
        let session = RouletteSession::open(self.store.document(), self.config.clone());
        self.popup = Some(Popup::Roulette(Box::new(session)));
    }

    fn handle_popup_key(&mut self, key: KeyCode) {
        match &mut self.popup {
            Some(Popup::Roulette(session)) => match key {
                KeyCode::Esc | KeyCode::Char('q') => {
                    session.close();
                    self.popup = None;
                }
                KeyCode::Char(' ') | KeyCode::Enter => match session.spin() {
                    Ok(Some(_)) => {
                        self.status_message = Some(("Spinning...".into(), MessageLevel::Info));
                    }
                    Ok(None) => {}
                    Err(MenuError::NoWheel) => {
                        self.status_message = Some((
                            "No drinks in this category, pick another one".into(),
                            MessageLevel::Error,
                        ));
                    }
                    Err(e) => {
                        self.status_message = Some((e.to_string(), MessageLevel::Error));
                    }
                },
                KeyCode::Char('f') | KeyCode::Right => {
                    // Filter changes are ignored mid-spin
                    let _ = session.next_filter();
                }
                _ => {}
            },
            Some(Popup::Message { .. }) => {
                if matches!(key, KeyCode::Enter | KeyCode::Esc) {
                    self.popup = None;
                }
            }
            None => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.menu.step_category(-1),
            KeyCode::Right | KeyCode::Char('l') => self.menu.step_category(1),
            KeyCode::Tab => self.menu.step_subcategory(1),
            KeyCode::BackTab => self.menu.step_subcategory(-1),
            _ => {}
        }
    }

    fn handle_drinks_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.screen = Screen::Menu,
            KeyCode::Up | KeyCode::Char('k') => self.drinks.previous(),
            KeyCode::Down | KeyCode::Char('j') => self.drinks.next(),
            _ => {}
        }
    }

    /// Render the TUI.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Main layout: header, content, status bar
        let layout = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        self.render_header(frame, layout[0]);

        match self.screen {
            Screen::Menu => frame.render_widget(&self.menu, layout[1]),
            Screen::Drinks => self.drinks.render(layout[1], frame.buffer_mut()),
        }

        self.render_status_bar(frame, layout[2]);

        // Popup overlay (if any)
        if let Some(ref popup) = self.popup {
            popup.render(frame);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().style(THEME.root).borders(Borders::BOTTOM);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::horizontal([Constraint::Min(0), Constraint::Length(20)]).split(inner);

        let title = Line::from(vec![
            Span::styled(" 🍹 Drinks Menu ", THEME.title),
            Span::raw("| "),
            Span::styled(self.screen.to_string(), THEME.normal),
        ]);
        frame.render_widget(Paragraph::new(title), layout[0]);

        let hint = Line::from(vec![
            Span::styled(" r ", THEME.key),
            Span::styled(" Roulette ", THEME.key_desc),
        ]);
        frame.render_widget(Paragraph::new(hint).right_aligned(), layout[1]);
    }

    fn render_status_bar(&mut self, frame: &mut Frame, area: Rect) {
        let drinks = self.drinks.drinks.len();

        let mut spans = vec![
            Span::styled(format!(" 🍹 {} drinks ", drinks), THEME.status_bar),
            Span::raw("| "),
            Span::styled(format!("📄 {} ", self.source), THEME.status_bar),
        ];

        if let Some((ref msg, level)) = self.status_message {
            spans.push(Span::raw("| "));
            let style = match level {
                MessageLevel::Success => THEME.status_success,
                MessageLevel::Error => THEME.status_error,
                MessageLevel::Info => THEME.status_info,
            };
            spans.push(Span::styled(msg.clone(), style));
        }

        let line = Line::from(spans);
        frame.render_widget(Paragraph::new(line).style(THEME.status_bar), area);
    }
}

/// Main entry point for the TUI.
pub async fn run_tui(source: String, config: RouletteConfig) -> Result<()> {
    color_eyre::install()?;

    let terminal = ratatui::init();
    let app_result = App::new(source, config).run(terminal).await;
    ratatui::restore();

    app_result
}
