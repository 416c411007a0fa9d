//! Interactive terminal game
//!
//! Renders the playfield with ratatui and drives a [`Session`] from
//! keyboard input. The stack rises automatically on a timer, as in the
//! original game.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block as UiBlock, Borders, Paragraph},
    Frame, Terminal,
};

use crate::config::defaults;
use crate::core::grid::{Block, BlockColor};
use crate::core::session::Session;

/// Input poll interval
const TICK: Duration = Duration::from_millis(100);

/// Terminal game application state
pub struct GameTui {
    session: Session,
    rise_interval: Duration,
    last_rise: Instant,
}

impl GameTui {
    /// Create a new game over the given session
    pub fn new(session: Session) -> Self {
        Self {
            session,
            rise_interval: Duration::from_secs(defaults::DEFAULT_RISE_INTERVAL_SECS),
            last_rise: Instant::now(),
        }
    }

    /// Run the game until the player quits
    pub fn run(&mut self) -> anyhow::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Main event loop
    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if !self.session.is_game_over() && self.last_rise.elapsed() >= self.rise_interval {
                self.session.raise();
                self.last_rise = Instant::now();
            }

            if !event::poll(TICK)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Left => {
                        self.session.move_cursor(-1, 0);
                    }
                    KeyCode::Right => {
                        self.session.move_cursor(1, 0);
                    }
                    KeyCode::Up => {
                        self.session.move_cursor(0, 1);
                    }
                    KeyCode::Down => {
                        self.session.move_cursor(0, -1);
                    }
                    KeyCode::Char(' ') => {
                        self.session.swap();
                    }
                    KeyCode::Char('r') => {
                        self.session.raise();
                        self.last_rise = Instant::now();
                    }
                    _ => {}
                }
            }
        }
    }

    /// Draw one frame
    fn draw(&self, f: &mut Frame) {
        let grid = self.session.grid();
        let field_width = (grid.width() as u16) * 2 + 2;

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(field_width), Constraint::Min(24)])
            .split(f.area());

        f.render_widget(self.playfield(), chunks[0]);
        f.render_widget(self.sidebar(), chunks[1]);
    }

    /// The playfield widget, top row first
    fn playfield(&self) -> Paragraph<'_> {
        let grid = self.session.grid();
        let cursor = self.session.cursor();

        let mut lines = Vec::with_capacity(grid.height());
        for y in (0..grid.height()).rev() {
            let mut spans = Vec::with_capacity(grid.width());
            for x in 0..grid.width() {
                let under_cursor = y == cursor.y && (x == cursor.x || x == cursor.x + 1);
                let (glyph, mut style) = cell_appearance(grid.get(x, y));
                if under_cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(glyph, style));
            }
            lines.push(Line::from(spans));
        }

        let title = if self.session.is_game_over() {
            " GAME OVER "
        } else {
            " tetanus "
        };
        Paragraph::new(lines).block(UiBlock::default().borders(Borders::ALL).title(title))
    }

    /// The score/help sidebar widget
    fn sidebar(&self) -> Paragraph<'_> {
        let summary = self.session.summary();
        let until_rise = self
            .rise_interval
            .saturating_sub(self.last_rise.elapsed())
            .as_secs();

        let mut lines = vec![
            Line::from(format!("Score:     {}", summary.score)),
            Line::from(format!("Cleared:   {}", summary.cleared_total)),
            Line::from(format!("Max chain: {}", summary.max_chain)),
            Line::from(format!("Rises:     {}", summary.rises)),
            Line::from(format!("Seed:      {}", summary.seed)),
            Line::from(""),
        ];
        if summary.game_over {
            lines.push(Line::styled(
                "Stack topped out!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        } else {
            lines.push(Line::from(format!("Next rise in {until_rise}s")));
        }
        lines.push(Line::from(""));
        lines.push(Line::from("←↑↓→ move   space swap"));
        lines.push(Line::from("r raise     q quit"));

        Paragraph::new(lines).block(UiBlock::default().borders(Borders::ALL).title(" status "))
    }
}

/// Glyph and style for one cell
fn cell_appearance(block: Option<Block>) -> (&'static str, Style) {
    match block {
        None => ("  ", Style::default()),
        Some(Block::Normal { color }) => ("██", Style::default().fg(block_color(color))),
        Some(Block::Garbage { cracked: false }) => ("▓▓", Style::default().fg(Color::DarkGray)),
        Some(Block::Garbage { cracked: true }) => ("░░", Style::default().fg(Color::Gray)),
    }
}

fn block_color(color: BlockColor) -> Color {
    match color {
        BlockColor::Red => Color::Red,
        BlockColor::Green => Color::Green,
        BlockColor::Blue => Color::Blue,
        BlockColor::Yellow => Color::Yellow,
        BlockColor::Purple => Color::Magenta,
    }
}
