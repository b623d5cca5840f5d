mod direction;
mod engine;
mod food;
mod geometry;
mod obstacle;
mod party;
mod session;
mod snake;
use self::direction::{Direction, Steer};
use self::engine::{Engine, Phase};
use self::party::Collision;
use crate::app::Screen;
use crate::command::Command;
use crate::config::GameConfig;
use crate::consts;
use crate::util::center_rect;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::time::Instant;

/// The playing screen: the engine plus the input sampling and tick pacing
/// around it.
#[derive(Clone, Debug)]
pub(crate) struct GameScreen<R = rand::rngs::ThreadRng> {
    engine: Engine<R>,
    pending: InputFrame,
    next_tick: Option<Instant>,
}

impl GameScreen<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: &GameConfig) -> Self {
        GameScreen::new_with_rng(config, rand::rng())
    }
}

impl<R: Rng> GameScreen<R> {
    pub(crate) fn new_with_rng(config: &GameConfig, rng: R) -> GameScreen<R> {
        GameScreen {
            engine: Engine::with_rng(config, rng),
            pending: InputFrame::default(),
            next_tick: None,
        }
    }

    /// Wait for the next tick boundary, accumulating direction presses into
    /// the per-tick input frame as they arrive.  At the boundary the frame is
    /// collapsed into a single steer and the simulation advances.  While a
    /// prompt is up there is no boundary to wait for and reads block.
    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.running() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + consts::TICK_PERIOD);
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                let steer = std::mem::take(&mut self.pending).resolve();
                self.engine.tick(steer);
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        if cmd == Command::Quit {
            return Some(Screen::Quit);
        }
        match self.engine.phase() {
            Phase::Running => self.pending.press(cmd),
            Phase::RoundOver { .. } => match cmd {
                Command::Continue => self.engine.choose(true),
                Command::Q => self.engine.choose(false),
                _ => (),
            },
            Phase::SessionOver { .. } => {
                if cmd == Command::Q {
                    return Some(Screen::Quit);
                }
            }
        }
        None
    }

    fn running(&self) -> bool {
        self.engine.phase() == Phase::Running
    }
}

impl<R> GameScreen<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }
}

/// Direction keys seen since the last tick boundary.
///
/// The frame is a snapshot, not a queue: it only remembers which keys were
/// seen, and [`resolve`][InputFrame::resolve] collapses it into at most one
/// steer with the fixed precedence left, right, up, down, random.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct InputFrame {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    random: bool,
}

impl InputFrame {
    fn press(&mut self, cmd: Command) {
        match cmd {
            Command::Left => self.left = true,
            Command::Right => self.right = true,
            Command::Up => self.up = true,
            Command::Down => self.down = true,
            Command::Random => self.random = true,
            _ => (),
        }
    }

    fn resolve(self) -> Option<Steer> {
        if self.left {
            Some(Steer::Fixed(Direction::Left))
        } else if self.right {
            Some(Steer::Fixed(Direction::Right))
        } else if self.up {
            Some(Steer::Fixed(Direction::Up))
        } else if self.down {
            Some(Steer::Fixed(Direction::Down))
        } else if self.random {
            Some(Steer::Random)
        } else {
            None
        }
    }
}

impl<R> Widget for &GameScreen<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let engine = &self.engine;
        let [status_area, field_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Line::styled(
            format!(
                " Party {}/{}   Score: {}",
                engine.party_index(),
                engine.party_budget(),
                engine.round().score(),
            ),
            consts::STATUS_BAR_STYLE,
        )
        .render(status_area, buf);

        let field = engine.field();
        let cols = to_u16(field.width / consts::BLOCK_SIZE);
        let rows = to_u16(field.height / consts::BLOCK_SIZE);
        let block_area = center_rect(
            field_area,
            Size {
                width: cols.saturating_add(2),
                height: rows.saturating_add(2),
            },
        );
        Block::bordered().render(block_area, buf);

        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for ob in engine.obstacles().iter() {
            canvas.draw_block(
                ob.x,
                ob.y,
                consts::OBSTACLE_SYMBOL,
                Style::new().fg(ob.color),
            );
        }
        let food = engine.round().food();
        canvas.draw_block(food.x, food.y, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        let snake = engine.round().snake();
        for &cell in snake.body().iter().skip(1) {
            canvas.draw_block(cell.x, cell.y, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        // Draw the head last so that, if the party ended on a collision, the
        // marker overwrites whatever was hit.
        let head = snake.head();
        if matches!(engine.phase(), Phase::RoundOver { .. }) {
            canvas.draw_block(
                head.x,
                head.y,
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            canvas.draw_block(head.x, head.y, head_symbol(snake.heading()), consts::SNAKE_STYLE);
        }

        match engine.phase() {
            Phase::Running => (),
            Phase::RoundOver { score, collision } => {
                Span::from(format!(
                    " PARTY OVER — {} — Score: {score}",
                    collision_phrase(collision)
                ))
                .render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Choose One: Continue ("),
                    Span::styled("c", consts::KEY_STYLE),
                    Span::raw(") — Stop ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
            Phase::SessionOver { score, high_score } => {
                Span::from(format!(
                    " SESSION OVER — Final Score: {score} — High Score: {high_score}"
                ))
                .render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
        }
    }
}

fn collision_phrase(collision: Collision) -> &'static str {
    match collision {
        Collision::Wall => "Hit the wall",
        Collision::Body => "Bit yourself",
        Collision::Obstacle => "Hit an obstacle",
    }
}

fn head_symbol(heading: Direction) -> char {
    match heading {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw one glyph at the terminal cell holding the pixel `(x, y)`.
    /// Positions outside the field (a head that went through a wall) are
    /// silently skipped.
    fn draw_block(&mut self, x: i32, y: i32, symbol: char, style: Style) {
        let Ok(col) = u16::try_from(x.div_euclid(consts::BLOCK_SIZE)) else {
            return;
        };
        let Ok(row) = u16::try_from(y.div_euclid(consts::BLOCK_SIZE)) else {
            return;
        };
        if col >= self.area.width || row >= self.area.height {
            return;
        }
        let Some(x) = self.area.x.checked_add(col) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

fn to_u16(value: i32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
