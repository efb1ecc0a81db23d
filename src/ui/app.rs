//! Main application state and event wiring.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use rand::RngCore;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use super::theme::Theme;
use super::widgets::{CardWidget, KeyHints, MarkerBar};
use crate::config::Config;
use crate::error::BoardError;
use crate::models::{Marker, Position, GRID_SIZE};
use crate::session::{Command, Outcome, Session};

const STATUS_TTL: Duration = Duration::from_secs(5);

/// A temporary message under the board.
#[derive(Debug, Clone)]
pub struct Status {
    pub text: String,
    pub warning: bool,
    pub shown_at: Instant,
}

pub struct App {
    pub running: bool,

    // Config and theme
    pub config: Config,
    // None when the config file could not be read; it is then left alone.
    config_path: Option<PathBuf>,
    pub theme: Theme,

    pub session: Session,
    rng: Box<dyn RngCore>,

    pub cursor: Position,
    pub status: Option<Status>,

    // Screen areas from the last draw, for mouse hit-testing
    cell_areas: Vec<(Position, Rect)>,
    marker_areas: Vec<(Marker, Rect)>,
}

impl App {
    pub fn new(
        session: Session,
        config: Config,
        config_path: Option<PathBuf>,
        rng: Box<dyn RngCore>,
    ) -> Self {
        let theme = Theme::from_name(&config.theme);

        Self {
            running: true,
            config,
            config_path,
            theme,
            session,
            rng,
            cursor: Position::default(),
            status: None,
            cell_areas: Vec::new(),
            marker_areas: Vec::new(),
        }
    }

    /// Run a command against the session and report the result.
    pub fn run(&mut self, command: Command) {
        match self.session.dispatch(command, &mut *self.rng) {
            Ok(Outcome::Redrawn) => {
                tracing::info!("board reshuffled");
                self.set_status("New board drawn".to_string(), false);
            }
            Ok(Outcome::Replaced(replacement)) => {
                self.set_status(
                    format!(
                        "Replaced {} with {}",
                        replacement.removed.front, replacement.added.front
                    ),
                    false,
                );
            }
            Ok(Outcome::MarkerSelected(_)) | Ok(Outcome::MarkerApplied { .. }) => {}
            Err(BoardError::Exhausted) => {
                self.set_status(
                    "No unused words left. Reshuffle the board to free some.".to_string(),
                    true,
                );
            }
            Err(err) => {
                tracing::warn!(?command, "command failed: {err}");
                self.set_status(err.to_string(), true);
            }
        }
    }

    pub fn cycle_theme(&mut self) {
        let new_theme_name = self.theme.name.next();
        self.theme = Theme::new(new_theme_name);
        self.config.theme = new_theme_name.as_str().to_string();
        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(err) = self.config.save_to(path) {
            tracing::warn!("failed to save config: {err:#}");
        }
    }

    pub fn set_status(&mut self, text: String, warning: bool) {
        self.status = Some(Status {
            text,
            warning,
            shown_at: Instant::now(),
        });
    }

    // ══════════════════════════════════════════════════════════════════════
    // Event Handling
    // ══════════════════════════════════════════════════════════════════════

    pub fn handle_events(&mut self) -> anyhow::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key.code),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.up(),
            KeyCode::Down | KeyCode::Char('j') => self.cursor = self.cursor.down(),
            KeyCode::Left | KeyCode::Char('h') => self.cursor = self.cursor.left(),
            KeyCode::Right | KeyCode::Char('l') => self.cursor = self.cursor.right(),
            KeyCode::Enter | KeyCode::Char(' ') => self.run(Command::ApplyMarker(self.cursor)),
            KeyCode::Char('r') => self.run(Command::ReplaceOne(self.cursor)),
            KeyCode::Char('R') | KeyCode::F(5) => self.run(Command::FullDraw),
            KeyCode::Char(c) => {
                if let Some(marker) = Marker::from_key(c) {
                    self.run(Command::SetMarker(marker));
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let MouseEventKind::Down(button) = mouse.kind else {
            return;
        };
        let (x, y) = (mouse.column, mouse.row);

        if let Some(position) = hit(&self.cell_areas, x, y) {
            self.cursor = position;
            match button {
                MouseButton::Left => self.run(Command::ApplyMarker(position)),
                MouseButton::Right => self.run(Command::ReplaceOne(position)),
                MouseButton::Middle => {}
            }
        } else if let Some(marker) = hit(&self.marker_areas, x, y) {
            if button == MouseButton::Left {
                self.run(Command::SetMarker(marker));
            }
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Rendering
    // ══════════════════════════════════════════════════════════════════════

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Clear with background
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.colors.bg_dark)),
            area,
        );

        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Marker selector
            Constraint::Length(1), // Spacing
            Constraint::Min(10),   // Board
            Constraint::Length(1), // Status
            Constraint::Length(1), // Hints
        ])
        .split(area);

        let title = Paragraph::new(self.config.title.as_str())
            .alignment(Alignment::Center)
            .style(self.theme.title());
        frame.render_widget(title, chunks[0]);

        self.marker_areas = Marker::ALL
            .iter()
            .copied()
            .zip(MarkerBar::slots(chunks[2]).iter().copied())
            .collect();
        frame.render_widget(MarkerBar::new(self.session.selected_marker()), chunks[2]);

        self.render_board(frame, chunks[4]);

        if let Some(status) = &self.status {
            if status.shown_at.elapsed() < STATUS_TTL {
                let line = Paragraph::new(status.text.as_str())
                    .alignment(Alignment::Center)
                    .style(self.theme.status(status.warning));
                frame.render_widget(line, chunks[5]);
            }
        }

        let theme_hint = format!("[{}]", self.theme.name.display_name());
        let left_hint = format!("{} unused", self.session.available_count());
        let hints_data: [(&str, &str); 8] = [
            ("←↑↓→", "move"),
            ("Enter", "mark"),
            ("1-5", "marker"),
            ("r", "replace"),
            ("R", "reshuffle"),
            ("t", &theme_hint),
            ("q", "quit"),
            ("pool", &left_hint),
        ];
        frame.render_widget(KeyHints::new(&hints_data, &self.theme), chunks[6]);
    }

    fn render_board(&mut self, frame: &mut Frame, area: Rect) {
        let ratios = [Constraint::Ratio(1, GRID_SIZE as u32); GRID_SIZE];
        let rows = Layout::vertical(ratios).split(area);
        let areas = rows
            .iter()
            .flat_map(|row| Layout::horizontal(ratios).split(*row).to_vec());
        self.cell_areas = Position::all().zip(areas).collect();

        for (position, pair) in self.session.board().cells() {
            let (_, cell_area) = self.cell_areas[position.index()];
            let card = CardWidget::new(
                pair,
                self.session.marker(position),
                position == self.cursor,
                &self.theme,
            );
            frame.render_widget(card, cell_area);
        }
    }
}

fn hit<T: Copy>(areas: &[(T, Rect)], x: u16, y: u16) -> Option<T> {
    areas
        .iter()
        .find(|(_, r)| x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height)
        .map(|(item, _)| *item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::WordPair;
    use crossterm::event::KeyModifiers;
    use std::fs;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::{backend::TestBackend, Terminal};

    fn app(words: usize) -> (App, tempfile::TempDir) {
        let catalog = Catalog::from_pairs(
            (0..words)
                .map(|i| WordPair::new(format!("word{i}"), format!("단어{i}")))
                .collect(),
        )
        .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let session = Session::new(catalog, &mut rng);
        let dir = tempfile::tempdir().unwrap();
        let config_path = Some(dir.path().join("config.toml"));
        let app = App::new(session, Config::default(), config_path, Box::new(rng));
        (app, dir)
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn click(button: MouseButton, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(button),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn keys_move_the_cursor_within_the_board() {
        let (mut app, _dir) = app(30);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.cursor, Position::default());
        app.handle_key(KeyCode::Char('j'));
        app.handle_key(KeyCode::Right);
        assert_eq!(app.cursor, Position::new(1, 1).unwrap());
    }

    #[test]
    fn number_keys_select_and_enter_applies() {
        let (mut app, _dir) = app(30);
        app.handle_key(KeyCode::Char('3'));
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session.selected_marker(), Marker::Red);
        assert_eq!(app.session.marker(Position::default()), Marker::Red);
    }

    #[test]
    fn replace_key_swaps_the_card_under_the_cursor() {
        let (mut app, _dir) = app(30);
        let before = app.session.board().cell(app.cursor).cloned();
        app.handle_key(KeyCode::Char('r'));
        assert_ne!(app.session.board().cell(app.cursor).cloned(), before);
        assert!(app.status.as_ref().is_some_and(|s| !s.warning));
    }

    #[test]
    fn exhausted_replacement_warns() {
        let (mut app, _dir) = app(25);
        app.handle_key(KeyCode::Char('r'));
        let status = app.status.as_ref().unwrap();
        assert!(status.warning);
        assert!(status.text.contains("No unused words"));
    }

    #[test]
    fn reshuffle_clears_markers() {
        let (mut app, _dir) = app(30);
        app.handle_key(KeyCode::Char('2'));
        app.handle_key(KeyCode::Char(' '));
        app.handle_key(KeyCode::Char('R'));
        assert_eq!(app.session.marker(Position::default()), Marker::None);
        assert_eq!(app.session.selected_marker(), Marker::Blue);
    }

    #[test]
    fn quit_stops_the_loop() {
        let (mut app, _dir) = app(30);
        app.handle_key(KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn theme_cycle_is_persisted() {
        let (mut app, dir) = app(30);
        app.handle_key(KeyCode::Char('t'));
        let saved = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(saved.theme, "kanagawa");
    }

    #[test]
    fn theme_cycle_leaves_an_unreadable_config_alone() {
        let (mut app, dir) = app(30);
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [").unwrap();
        let (config, config_path) = Config::load_or_default(path.clone());
        app.config = config;
        app.config_path = config_path;

        app.handle_key(KeyCode::Char('t'));

        assert_eq!(app.theme.name.as_str(), "kanagawa");
        assert_eq!(fs::read_to_string(&path).unwrap(), "theme = [");
    }

    #[test]
    fn render_shows_every_front_word() {
        let (mut app, _dir) = app(30);
        let screen = draw(&mut app);
        assert!(screen.contains("Codenames"));
        for (_, pair) in app.session.board().cells() {
            assert!(screen.contains(&pair.front), "missing {}", pair.front);
        }
    }

    #[test]
    fn mouse_clicks_mark_and_replace_cells() {
        let (mut app, _dir) = app(30);
        draw(&mut app);
        let target = Position::new(3, 2).unwrap();
        let (_, area) = app.cell_areas[target.index()];
        let (x, y) = center(area);

        app.run(Command::SetMarker(Marker::Bomb));
        app.handle_mouse(click(MouseButton::Left, x, y));
        assert_eq!(app.cursor, target);
        assert_eq!(app.session.marker(target), Marker::Bomb);

        let before = app.session.board().cell(target).cloned();
        app.handle_mouse(click(MouseButton::Right, x, y));
        assert_ne!(app.session.board().cell(target).cloned(), before);
        assert_eq!(app.session.marker(target), Marker::None);
    }

    #[test]
    fn mouse_click_on_selector_picks_marker() {
        let (mut app, _dir) = app(30);
        draw(&mut app);
        let (marker, area) = app.marker_areas[4];
        let (x, y) = center(area);
        app.handle_mouse(click(MouseButton::Left, x, y));
        assert_eq!(marker, Marker::Bomb);
        assert_eq!(app.session.selected_marker(), Marker::Bomb);
    }
}
