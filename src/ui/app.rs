//! Main UI Application
//!
//! Menu, controls screen, maze view, inventory overlay and end banner.
//! Reads the game only through its snapshot.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::{Game, GameState, Snapshot};
use crate::items::ItemKind;
use crate::world::{Direction, Position, TileKind};

const WALL_COLOR: Color = Color::Rgb(130, 110, 90);
const FLOOR_COLOR: Color = Color::Rgb(60, 60, 60);
const HERO_COLOR: Color = Color::Rgb(255, 255, 200);

/// Which screen the front end is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Controls,
    Playing,
    /// Session over, banner shown until Enter
    Ended(GameState),
}

/// Main UI application
pub struct App {
    screen: Screen,
    /// Inventory overlay toggled with Tab
    show_inventory: bool,
    /// Last setup failure, shown on the menu
    error: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::Menu,
            show_inventory: false,
            error: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Handle a key press. Returns true when the player wants to quit.
    pub fn handle_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return Ok(true);
        }

        match self.screen {
            Screen::Menu | Screen::Controls => self.handle_menu_input(key, game),
            Screen::Playing => {
                self.handle_playing_input(key, game);
                Ok(false)
            }
            Screen::Ended(_) => {
                if key.code == KeyCode::Enter {
                    self.screen = Screen::Menu;
                }
                Ok(false)
            }
        }
    }

    fn handle_menu_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        match key.code {
            KeyCode::Enter => match game.start_session_from_file() {
                Ok(()) => {
                    self.error = None;
                    self.show_inventory = false;
                    self.screen = Screen::Playing;
                }
                Err(e) => {
                    log::warn!("Session setup failed: {}", e);
                    self.error = Some(e.to_string());
                }
            },
            KeyCode::Char(' ') => {
                self.screen = if self.screen == Screen::Controls {
                    Screen::Menu
                } else {
                    Screen::Controls
                };
            }
            KeyCode::Char('q') => return Ok(true),
            _ => {}
        }
        Ok(false)
    }

    fn handle_playing_input(&mut self, key: KeyEvent, game: &mut Game) {
        if key.code == KeyCode::Tab {
            self.show_inventory = !self.show_inventory;
            return;
        }

        let state = game.handle_input(direction_for(key.code));
        if state.is_over() {
            self.screen = Screen::Ended(state);
        }
    }

    pub fn render(&self, frame: &mut Frame, game: &Game) {
        frame.render_widget(Clear, frame.area());

        match self.screen {
            Screen::Menu => self.render_menu(frame),
            Screen::Controls => self.render_controls(frame),
            Screen::Playing => self.render_playing(frame, game),
            Screen::Ended(state) => {
                self.render_playing(frame, game);
                self.render_banner(frame, state);
            }
        }
    }

    fn render_menu(&self, frame: &mut Frame) {
        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GUARDIAN MAZE",
                Style::default().fg(Color::Rgb(180, 50, 50)).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Find the ether, the needle and the tube,"),
            Line::from("then put the guardian to sleep."),
            Line::from(""),
            Line::from(Span::styled(
                "[Enter] Play   [Space] Controls   [Esc] Quit",
                Style::default().fg(Color::Gray),
            )),
        ];
        if let Some(error) = &self.error {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red))));
        }

        let para = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(para, frame.area());
    }

    fn render_controls(&self, frame: &mut Frame) {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled("CONTROLS", Style::default().add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from("Arrow keys  move"),
            Line::from("Tab         inventory"),
            Line::from("Esc         quit"),
            Line::from(""),
            Line::from(Span::styled("[Space] Back", Style::default().fg(Color::Gray))),
        ];
        let para = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Controls "));
        frame.render_widget(para, frame.area());
    }

    fn render_playing(&self, frame: &mut Frame, game: &Game) {
        let Some(snapshot) = game.snapshot() else {
            return;
        };

        let map_width = (snapshot.grid.width() as u16) * 2 + 2;
        let chunks = Layout::horizontal([Constraint::Length(map_width), Constraint::Min(20)])
            .split(frame.area());

        let map = Paragraph::new(map_lines(&snapshot))
            .block(Block::default().borders(Borders::ALL).title(" Maze "));
        frame.render_widget(map, chunks[0]);

        let status = Paragraph::new(checklist_lines(&snapshot))
            .block(Block::default().borders(Borders::ALL).title(" Items "));
        frame.render_widget(status, chunks[1]);

        if self.show_inventory {
            self.render_inventory(frame, &snapshot);
        }
    }

    fn render_inventory(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let area = centered_rect(40, 30, frame.area());
        let cells: Vec<Span> = inventory_slots(snapshot)
            .into_iter()
            .map(|slot| match slot {
                Some(kind) => {
                    let meta = kind.meta();
                    let (r, g, b) = meta.color;
                    Span::styled(format!(" [{}] ", meta.glyph), Style::default().fg(Color::Rgb(r, g, b)))
                }
                None => Span::raw(" [ ] "),
            })
            .collect();

        let text = vec![Line::from(""), Line::from(cells)];
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(" Inventory ")),
            area,
        );
    }

    fn render_banner(&self, frame: &mut Frame, state: GameState) {
        let (label, color) = match state {
            GameState::Won => ("YOU WIN!", Color::Green),
            _ => ("YOU LOSE!", Color::Red),
        };
        let area = centered_rect(50, 30, frame.area());
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(Span::styled("Press [Enter] to continue", Style::default().fg(Color::Gray))),
        ];
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Map an arrow key to a move
pub fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// One line per grid row, two terminal cells per tile
fn map_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    snapshot
        .grid
        .rows()
        .enumerate()
        .map(|(y, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(x, &symbol)| {
                    let pos = Position::new(x as i32, y as i32);
                    let (glyph, color) = cell_glyph(snapshot, pos, symbol);
                    Span::styled(format!("{} ", glyph), Style::default().fg(color))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn cell_glyph(snapshot: &Snapshot, pos: Position, symbol: char) -> (char, Color) {
    if pos == snapshot.character {
        return ('@', HERO_COLOR);
    }
    if pos == snapshot.guardian {
        let kind = snapshot.guardian_kind;
        let (r, g, b) = kind.color();
        return (kind.glyph(), Color::Rgb(r, g, b));
    }
    if let Some(item) = snapshot.item_at(pos) {
        let meta = item.kind.meta();
        let (r, g, b) = meta.color;
        return (meta.glyph, Color::Rgb(r, g, b));
    }
    match snapshot.grid.symbols().kind(symbol) {
        TileKind::Wall => ('#', WALL_COLOR),
        _ => ('.', FLOOR_COLOR),
    }
}

/// One slot per required item in configured order, filled once held.
/// Held items that were never required get slots after those.
fn inventory_slots(snapshot: &Snapshot) -> Vec<Option<ItemKind>> {
    let mut slots: Vec<Option<ItemKind>> = snapshot
        .required
        .iter()
        .map(|kind| snapshot.inventory.contains(kind).then_some(*kind))
        .collect();
    slots.extend(
        snapshot
            .inventory
            .iter()
            .filter(|kind| !snapshot.required.contains(kind))
            .map(|&kind| Some(kind)),
    );
    slots
}

fn checklist_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = snapshot
        .required
        .iter()
        .map(|kind: &ItemKind| {
            let held = snapshot.inventory.contains(kind);
            let mark = if held { "[x]" } else { "[ ]" };
            let style = if held {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(format!("{} {}", mark, kind.name()), style))
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "{}/{} collected",
        snapshot.inventory.len(),
        snapshot.required.len()
    )));
    lines
}

/// Create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GameConfig;
    use crate::test_support::bordered_map;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn playing_game() -> Game {
        let config = GameConfig {
            start: Position::new(1, 1),
            ..GameConfig::default()
        };
        let mut game = Game::with_seed(config, 17);
        game.start_session(&bordered_map(15)).unwrap();
        game
    }

    #[test]
    fn test_arrow_keys_map_to_directions() {
        assert_eq!(direction_for(KeyCode::Left), Some(Direction::Left));
        assert_eq!(direction_for(KeyCode::Down), Some(Direction::Down));
        assert_eq!(direction_for(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_map_lines_show_entities() {
        let game = playing_game();
        let snapshot = game.snapshot().unwrap();
        let lines = map_lines(&snapshot);
        assert_eq!(lines.len(), 15);

        let glyph_at = |pos: Position| {
            line_text(&lines[pos.y as usize]).chars().nth(pos.x as usize * 2).unwrap()
        };
        assert_eq!(glyph_at(Position::new(0, 0)), '#');
        assert_eq!(glyph_at(snapshot.character), '@');
        assert_eq!(glyph_at(snapshot.guardian), snapshot.guardian_kind.glyph());
        for item in &snapshot.items {
            if item.position != snapshot.character {
                assert_eq!(glyph_at(item.position), item.kind.meta().glyph);
            }
        }
    }

    #[test]
    fn test_checklist_counts() {
        let game = playing_game();
        let snapshot = game.snapshot().unwrap();
        let lines = checklist_lines(&snapshot);
        assert_eq!(line_text(&lines[0]), "[ ] Ether");
        assert_eq!(line_text(lines.last().unwrap()), "0/3 collected");
    }

    #[test]
    fn test_inventory_slots_follow_required_order() {
        let config = GameConfig {
            start: Position::new(1, 1),
            required_items: vec![ItemKind::Tube, ItemKind::Ether],
            ..GameConfig::default()
        };
        let mut game = Game::with_seed(config, 9);
        game.start_session(&bordered_map(15)).unwrap();
        let mut snapshot = game.snapshot().unwrap();
        assert_eq!(inventory_slots(&snapshot), vec![None, None]);

        let held = [ItemKind::Ether, ItemKind::Tube];
        snapshot.inventory = &held;
        assert_eq!(
            inventory_slots(&snapshot),
            vec![Some(ItemKind::Tube), Some(ItemKind::Ether)]
        );

        let held = [ItemKind::Ether];
        snapshot.inventory = &held;
        assert_eq!(inventory_slots(&snapshot), vec![None, Some(ItemKind::Ether)]);
    }

    #[test]
    fn test_tab_does_not_move() {
        let mut game = playing_game();
        let mut app = App::new();
        app.screen = Screen::Playing;
        let before = game.snapshot().unwrap().character;

        let mut tab = key(KeyCode::Tab);
        tab.kind = KeyEventKind::Press;
        assert!(!app.handle_input(tab, &mut game).unwrap());
        assert!(app.show_inventory);
        assert_eq!(game.snapshot().unwrap().character, before);
    }

    #[test]
    fn test_escape_quits() {
        let mut game = playing_game();
        let mut app = App::new();
        assert!(app.handle_input(key(KeyCode::Esc), &mut game).unwrap());
    }

    #[test]
    fn test_space_toggles_controls() {
        let mut game = playing_game();
        let mut app = App::new();
        app.handle_input(key(KeyCode::Char(' ')), &mut game).unwrap();
        assert_eq!(app.screen(), Screen::Controls);
        app.handle_input(key(KeyCode::Char(' ')), &mut game).unwrap();
        assert_eq!(app.screen(), Screen::Menu);
    }
}
