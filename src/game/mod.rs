mod chain;
mod collision;
mod direction;
mod food;
mod point;
mod trail;
use self::chain::SnakeChain;
use self::direction::Direction;
use self::food::Food;
use self::point::{Bounds, Point};
use crate::app::Screen;
use crate::command::Command;
use crate::config::Tuning;
use crate::consts;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle},
        Block, Widget,
    },
    Frame,
};
use std::time::Instant;

/// The whole simulation: the segment chain, the food, the facing direction,
/// and the per-tick state machine that ties them together.
///
/// All mutation happens through [`Game::tick()`] and the two input entry
/// points ([`Game::set_direction()`] and [`Game::request_start()`]); the
/// terminal driver in [`Game::process_input()`] only decides when to call
/// them, so the simulation is fully deterministic under a seeded RNG.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    tuning: Tuning,
    phase: Phase,
    direction: Direction,
    chain: SnakeChain,
    food: Food,
    score: u32,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(tuning: Tuning) -> Self {
        Game::new_with_rng(tuning, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(tuning: Tuning, rng: R) -> Game<R> {
        let bounds = Bounds {
            width: tuning.area_width,
            height: tuning.area_height,
        };
        let food = Food::new(
            Point::new(tuning.area_width * 0.75, tuning.area_height * 0.75),
            tuning.food_diameter,
        );
        Game {
            rng,
            tuning,
            phase: Phase::AwaitingStart,
            direction: Direction::Up,
            chain: SnakeChain::new(bounds.center(), tuning.trail_capacity),
            food,
            score: 0,
            next_tick: None,
        }
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.running() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + self.tuning.tick_period());
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.tick();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Advance the simulation by one tick: move the head in the current
    /// facing direction, relay positions down the chain, then run the wall,
    /// food, and self-collision checks in that order.  Collisions latch the
    /// terminal [`Phase::GameOver`]; the remaining checks of the tick still
    /// run, matching the latch semantics of the state machine.  Outside
    /// [`Phase::Running`] this is a no-op.
    pub(crate) fn tick(&mut self) {
        if !self.running() {
            return;
        }
        self.chain.advance(self.direction, self.tuning.speed);
        let head = self.chain.head();
        if collision::hits_wall(head, self.tuning.snake_diameter, self.bounds()) {
            self.phase = Phase::GameOver;
        }
        if self.food.consumed_by(head, self.tuning.snake_diameter) {
            let bounds = self.bounds();
            self.food.respawn(&mut self.rng, bounds);
            self.score += 1;
            self.chain.grow(self.tuning.chunk_size);
        }
        if collision::hits_self(&self.chain, self.tuning.snake_diameter, self.tuning.self_skip()) {
            self.phase = Phase::GameOver;
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// Change the facing direction.  The new direction takes effect at the
    /// start of the next tick; multiple changes between ticks are
    /// last-writer-wins.  Reversing straight into the snake's own neck is
    /// not prevented.
    fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    fn request_start(&mut self) {
        if self.phase == Phase::AwaitingStart {
            self.phase = Phase::Running;
        }
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        let command = Command::from_key_event(event.as_key_press_event()?)?;
        match self.phase {
            Phase::AwaitingStart => match command {
                Command::Quit | Command::Q => return Some(Screen::Quit),
                Command::Space | Command::Enter => self.request_start(),
                Command::Up => self.set_direction(Direction::Up),
                Command::Down => self.set_direction(Direction::Down),
                Command::Left => self.set_direction(Direction::Left),
                Command::Right => self.set_direction(Direction::Right),
            },
            Phase::Running => match command {
                Command::Quit => return Some(Screen::Quit),
                Command::Up => self.set_direction(Direction::Up),
                Command::Down => self.set_direction(Direction::Down),
                Command::Left => self.set_direction(Direction::Left),
                Command::Right => self.set_direction(Direction::Right),
                _ => (),
            },
            // Terminal: the only way out is quitting
            Phase::GameOver => match command {
                Command::Quit | Command::Q | Command::Enter => return Some(Screen::Quit),
                _ => (),
            },
        }
        None
    }

    fn running(&self) -> bool {
        self.phase == Phase::Running
    }

    fn bounds(&self) -> Bounds {
        Bounds {
            width: self.tuning.area_width,
            height: self.tuning.area_height,
        }
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(format!(" Score: {}", self.score), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);

        let block_area = center_rect(block_area, consts::CANVAS_SIZE);
        let height = self.tuning.area_height;
        Canvas::default()
            .block(Block::bordered())
            .marker(Marker::Braille)
            .x_bounds([0.0, self.tuning.area_width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                let radius = self.tuning.snake_diameter / 2.0;
                // The simulation's y axis points down; the canvas's points up
                for segment in self.chain.segments().iter().skip(1) {
                    ctx.draw(&Circle {
                        x: segment.position.x,
                        y: height - segment.position.y,
                        radius,
                        color: consts::SNAKE_COLOR,
                    });
                }
                let head = self.chain.head();
                ctx.draw(&Circle {
                    x: head.x,
                    y: height - head.y,
                    radius,
                    color: consts::SNAKE_COLOR,
                });
                let food = self.food.position();
                ctx.draw(&Circle {
                    x: food.x,
                    y: height - food.y,
                    radius: self.tuning.food_diameter / 2.0,
                    color: consts::FOOD_COLOR,
                });
            })
            .render(block_area, buf);

        match self.phase {
            Phase::AwaitingStart => {
                Line::from_iter([
                    Span::raw(" Press "),
                    Span::styled("SPACE", consts::KEY_STYLE),
                    Span::raw(" to start"),
                ])
                .render(msg1_area, buf);
            }
            Phase::Running => (),
            Phase::GameOver => {
                Line::styled(" — GAME OVER —", consts::GAME_OVER_STYLE).render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Press "),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(" to quit"),
                ])
                .render(msg2_area, buf);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    AwaitingStart,
    Running,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_game(tuning: Tuning) -> Game<ChaCha12Rng> {
        Game::new_with_rng(tuning, ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    fn started_game(tuning: Tuning) -> Game<ChaCha12Rng> {
        let mut game = new_game(tuning);
        game.request_start();
        game
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(code.into())
    }

    #[test]
    fn new_game_awaits_start() {
        let mut game = new_game(Tuning::default());
        assert_eq!(game.phase, Phase::AwaitingStart);
        assert_eq!(game.chain.head(), Point::new(150.0, 150.0));
        assert_eq!(game.direction, Direction::Up);
        for _ in 0..3 {
            game.tick();
        }
        assert_eq!(game.chain.head(), Point::new(150.0, 150.0));
        assert_eq!(game.phase, Phase::AwaitingStart);
    }

    #[test]
    fn space_starts_the_game() {
        let mut game = new_game(Tuning::default());
        assert!(game.handle_event(key(KeyCode::Char(' '))).is_none());
        assert_eq!(game.phase, Phase::Running);
        game.tick();
        assert_eq!(game.chain.head(), Point::new(150.0, 147.0));
    }

    #[test]
    fn direction_applies_at_next_tick_last_writer_wins() {
        let mut game = started_game(Tuning::default());
        assert!(game.handle_event(key(KeyCode::Left)).is_none());
        assert!(game.handle_event(key(KeyCode::Down)).is_none());
        game.tick();
        assert_eq!(game.chain.head(), Point::new(150.0, 153.0));
    }

    #[test]
    fn reversal_into_own_neck_is_not_blocked() {
        let mut game = started_game(Tuning::default());
        game.tick();
        assert_eq!(game.chain.head(), Point::new(150.0, 147.0));
        game.set_direction(Direction::Down);
        game.tick();
        assert_eq!(game.chain.head(), Point::new(150.0, 150.0));
        assert_eq!(game.phase, Phase::Running);
    }

    #[test]
    fn heading_up_hits_the_top_wall() {
        // Head at (150, 150) moving up at speed 3 in a 300x300 area: the top
        // edge of the head crosses y=0 on the 47th tick and not before.
        let mut game = started_game(Tuning::default());
        let mut over_at = None;
        for i in 1..=50 {
            game.tick();
            if game.phase == Phase::GameOver {
                over_at = Some(i);
                break;
            }
        }
        assert_eq!(over_at, Some(47));
        assert_eq!(game.chain.head(), Point::new(150.0, 9.0));
    }

    #[test]
    fn game_over_is_terminal() {
        let mut game = started_game(Tuning::default());
        game.phase = Phase::GameOver;
        let head = game.chain.head();
        game.tick();
        assert_eq!(game.chain.head(), head);
        assert!(game.handle_event(key(KeyCode::Char(' '))).is_none());
        assert_eq!(game.phase, Phase::GameOver);
        assert!(matches!(
            game.handle_event(key(KeyCode::Char('q'))),
            Some(Screen::Quit)
        ));
    }

    #[test]
    fn consuming_food_grows_by_a_chunk() {
        let mut game = started_game(Tuning::default());
        game.food.position = Point::new(150.0, 140.0);
        game.tick();
        assert_eq!(game.score, 1);
        assert_eq!(game.chain.len(), 6);
        // The fresh chunk is stacked on the tail but falls inside the
        // self-collision exclusion window
        assert_eq!(game.phase, Phase::Running);
        for segment in game.chain.segments().iter().skip(1) {
            assert_eq!(segment.position, Point::new(150.0, 147.0));
        }
        // Food relocated away from the walls
        let food = game.food.position();
        assert!((15.0..=285.0).contains(&food.x));
        assert!((15.0..=285.0).contains(&food.y));
        assert_ne!(food, Point::new(150.0, 140.0));
    }

    #[test]
    fn chain_length_after_repeated_consumption() {
        let tuning = Tuning::default();
        let mut game = started_game(tuning);
        for k in 1..=3 {
            game.food.position = Point::new(game.chain.head().x, game.chain.head().y - 10.0);
            game.tick();
            assert_eq!(game.chain.len(), 1 + k * tuning.chunk_size);
        }
        assert_eq!(game.score, 3);
    }

    #[test]
    fn new_tail_segment_moves_twice_in_ten_ticks() {
        let tuning = Tuning {
            chunk_size: 1,
            ..Tuning::default()
        };
        let mut game = started_game(tuning);
        for _ in 0..6 {
            game.tick();
        }
        // Put the food right on the head's path so the next tick consumes it
        game.food.position = Point::new(150.0, 129.0);
        game.tick();
        assert_eq!(game.chain.len(), 2);
        assert_eq!(game.chain.segments()[1].position, Point::new(150.0, 129.0));
        let mut moves = 0;
        let mut last = game.chain.segments()[1].position;
        for _ in 0..10 {
            game.tick();
            if game.chain.segments()[1].position != last {
                moves += 1;
                last = game.chain.segments()[1].position;
            }
        }
        assert_eq!(moves, 2);
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer.cell((x, y)).unwrap().symbol())
            .collect()
    }

    #[test]
    fn draw_awaiting_start() {
        let game = new_game(Tuning::default());
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        game.render(area, &mut buffer);
        assert_eq!(row_text(&buffer, 0).trim_end(), " Score: 0");
        assert!(row_text(&buffer, 22).contains("Press SPACE to start"));
        let all: String = (0..24).map(|y| row_text(&buffer, y)).collect();
        assert!(all.contains('┌'), "play-area border not drawn");
    }

    #[test]
    fn draw_game_over() {
        let mut game = new_game(Tuning::default());
        game.phase = Phase::GameOver;
        game.score = 3;
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        game.render(area, &mut buffer);
        assert_eq!(row_text(&buffer, 0).trim_end(), " Score: 3");
        assert!(row_text(&buffer, 22).contains("GAME OVER"));
        assert!(row_text(&buffer, 23).contains("Press q to quit"));
    }
}
