use std::{
    cell::Cell,
    rc::Rc,
    time::{Duration, Instant},
};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use donkdle_engine::{PuzzleMode, SessionState};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position},
    style::Style,
    text::{Line, Span},
    widgets::{Block as BlockWidget, Padding, Paragraph},
};

use crate::{
    game::GameContext,
    tui::{Runtime, Screen, ScreenTransition},
    view::widgets::{GuessBoard, KeyBinding, KeyBindingDisplay, SuggestionList, style},
};

use super::{GameOverScreen, HelpScreen, StatsScreen};

const TICK_INTERVAL: Duration = Duration::from_millis(250);
const MESSAGE_DURATION: Duration = Duration::from_secs(3);
const MAX_VISIBLE_SUGGESTIONS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Type(char),
    Erase,
    Prev,
    Next,
    Complete,
    Submit,
    PlayAgain,
    Help,
    Stats,
    Quit,
}

impl Action {
    fn from_key_event(event: &KeyEvent, is_over: bool) -> Option<Self> {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return (event.code == KeyCode::Char('c')).then_some(Self::Quit);
        }
        match event.code {
            KeyCode::Esc => Some(Self::Quit),
            KeyCode::F(1) => Some(Self::Help),
            KeyCode::F(2) => Some(Self::Stats),
            KeyCode::Char('n') if is_over => Some(Self::PlayAgain),
            KeyCode::Char('s') if is_over => Some(Self::Stats),
            KeyCode::Char('q') if is_over => Some(Self::Quit),
            _ if is_over => None,
            KeyCode::Char(c) => Some(Self::Type(c)),
            KeyCode::Backspace => Some(Self::Erase),
            KeyCode::Up => Some(Self::Prev),
            KeyCode::Down => Some(Self::Next),
            KeyCode::Tab => Some(Self::Complete),
            KeyCode::Enter => Some(Self::Submit),
            _ => None,
        }
    }

    fn bindings(state: SessionState, mode: PuzzleMode) -> &'static [KeyBinding<'static>] {
        match (state, mode) {
            (SessionState::Playing, _) => &[
                (&["Enter"], "Guess"),
                (&["↑", "↓"], "Select"),
                (&["Tab"], "Complete"),
                (&["F1"], "Help"),
                (&["F2"], "Stats"),
                (&["Esc"], "Quit"),
            ],
            (_, PuzzleMode::Random) => &[
                (&["n"], "New Game"),
                (&["s", "F2"], "Stats"),
                (&["F1"], "Help"),
                (&["q", "Esc"], "Quit"),
            ],
            (_, PuzzleMode::Daily) => &[
                (&["s", "F2"], "Stats"),
                (&["F1"], "Help"),
                (&["q", "Esc"], "Quit"),
            ],
        }
    }
}

#[derive(Debug)]
struct Message {
    text: String,
    style: Style,
    expires_at: Instant,
}

/// The main screen: guess board, input line, and suggestions.
#[derive(Debug)]
pub struct BoardScreen<'a> {
    game: &'a mut GameContext,
    input: String,
    selected: Option<usize>,
    message: Option<Message>,
    /// Set by the game-over screen when the player asks for another round.
    play_again_requested: Rc<Cell<bool>>,
}

impl<'a> BoardScreen<'a> {
    pub fn new(game: &'a mut GameContext) -> Self {
        Self {
            game,
            input: String::new(),
            selected: None,
            message: None,
            play_again_requested: Rc::default(),
        }
    }

    pub fn game_over_screen(&self) -> GameOverScreen {
        let is_random = self.game.puzzle().mode() == PuzzleMode::Random;
        let play_again = is_random.then(|| Rc::clone(&self.play_again_requested));
        GameOverScreen::new(&*self.game, play_again)
    }

    fn stats_screen(&mut self) -> Option<StatsScreen> {
        match self.game.load_stats() {
            Ok(stats) => {
                let share_text = self.game.state().is_over().then(|| self.game.share_text());
                Some(StatsScreen::new(stats, share_text))
            }
            Err(e) => {
                self.show_error(format!("Could not load statistics: {e:#}"));
                None
            }
        }
    }

    fn show_message(&mut self, text: String, style: Style) {
        self.message = Some(Message {
            text,
            style,
            expires_at: Instant::now() + MESSAGE_DURATION,
        });
    }

    fn show_error(&mut self, text: String) {
        self.show_message(text, style::ERROR);
    }

    fn suggestion_count(&self) -> usize {
        self.game.catalog().search(&self.input).len()
    }

    fn move_selection(&mut self, forward: bool) {
        let count = self.suggestion_count();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match (self.selected, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(n), true) => (n + 1) % count,
            (Some(n), false) => n.checked_sub(1).unwrap_or(count - 1),
        });
    }

    /// The selected suggestion, or the first one.
    fn complete(&mut self) {
        let hits = self.game.catalog().search(&self.input);
        let hit = self.selected.and_then(|n| hits.get(n)).or(hits.first());
        if let Some(hit) = hit {
            self.input = hit.location.name().to_owned();
        }
        self.selected = None;
    }

    fn submit(&mut self) -> ScreenTransition {
        let hits = self.game.catalog().search(&self.input);
        let guess = match self.selected.and_then(|n| hits.get(n)) {
            Some(hit) => hit.location.name().to_owned(),
            None => self.input.clone(),
        };

        let outcome = match self.game.submit_guess(&guess) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.show_error(capitalize(&e.to_string()));
                return ScreenTransition::Stay;
            }
        };
        self.input.clear();
        self.selected = None;

        if let Some(e) = outcome.persist_error {
            self.show_error(format!("Could not save progress: {e:#}"));
        } else if outcome.state.is_playing() {
            let count = self.game.guesses().len();
            let noun = if count == 1 { "guess" } else { "guesses" };
            self.show_message(format!("{count} {noun} made. Keep trying!"), style::TEXT);
        }

        if outcome.state.is_over() {
            return ScreenTransition::Push(Box::new(self.game_over_screen()));
        }
        ScreenTransition::Stay
    }

    fn play_again(&mut self) {
        if self.game.restart() {
            self.input.clear();
            self.selected = None;
            self.show_message("New location picked. Good luck!".to_owned(), style::SUCCESS);
        } else {
            self.show_message(
                "That was today's puzzle. Come back tomorrow!".to_owned(),
                style::TEXT,
            );
        }
    }

    fn title(&self) -> Line<'static> {
        let puzzle = self.game.puzzle();
        let mode = match puzzle.mode() {
            PuzzleMode::Daily => format!("Daily {}", puzzle.date()),
            PuzzleMode::Random => "Random".to_owned(),
        };
        let limit = self
            .game
            .max_guesses()
            .map_or_else(|| "∞".to_owned(), |limit| limit.to_string());
        Line::from(vec![
            Span::styled("DONKDLE", style::TITLE),
            Span::styled(
                format!("  {mode}  {}/{limit}", self.game.guesses().len()),
                style::DIM,
            ),
        ])
        .centered()
    }
}

impl Screen for BoardScreen<'_> {
    fn on_active(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_interval(Some(TICK_INTERVAL));
        if self.play_again_requested.take() {
            self.play_again();
        }
    }

    fn on_inactive(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_interval(None);
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
        let is_over = self.game.state().is_over();
        let Some(action) = event
            .as_key_press_event()
            .and_then(|key| Action::from_key_event(&key, is_over))
        else {
            return ScreenTransition::Stay;
        };

        match action {
            Action::Type(c) => {
                self.input.push(c);
                self.selected = None;
            }
            Action::Erase => {
                self.input.pop();
                self.selected = None;
            }
            Action::Prev => self.move_selection(false),
            Action::Next => self.move_selection(true),
            Action::Complete => self.complete(),
            Action::Submit => return self.submit(),
            Action::PlayAgain => self.play_again(),
            Action::Help => return ScreenTransition::Push(Box::new(HelpScreen)),
            Action::Stats => {
                if let Some(screen) = self.stats_screen() {
                    return ScreenTransition::Push(Box::new(screen));
                }
            }
            Action::Quit => return ScreenTransition::Exit,
        }
        ScreenTransition::Stay
    }

    fn update(&mut self, _runtime: &mut Runtime) {
        if self
            .message
            .as_ref()
            .is_some_and(|message| message.expires_at <= Instant::now())
        {
            self.message = None;
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let state = self.game.state();
        let hits = if state.is_playing() {
            self.game.catalog().search(&self.input)
        } else {
            vec![]
        };
        let suggestions_height = if hits.is_empty() {
            0
        } else {
            hits.len().min(MAX_VISIBLE_SUGGESTIONS) + 2
        };

        let viewport = frame.area().centered_horizontally(Constraint::Max(110));
        let [
            title_area,
            board_area,
            message_area,
            input_area,
            suggestions_area,
            help_area,
        ] = viewport.layout(&Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(u16::try_from(suggestions_height).unwrap_or(u16::MAX)),
            Constraint::Length(1),
        ]));

        frame.render_widget(self.title(), title_area);

        let board = GuessBoard::new(self.game.guesses())
            .show_pending(state.is_playing())
            .block(BlockWidget::bordered().padding(Padding::horizontal(1)));
        frame.render_widget(board, board_area);

        if let Some(message) = &self.message {
            let line = Line::styled(message.text.as_str(), message.style).centered();
            frame.render_widget(line, message_area);
        }

        let input_block = BlockWidget::bordered().title(" Guess a location ");
        let input_inner = input_block.inner(input_area);
        match state {
            SessionState::Playing => {
                let input = Paragraph::new(self.input.as_str()).block(input_block);
                frame.render_widget(input, input_area);
                let width = u16::try_from(self.input.chars().count()).unwrap_or(u16::MAX);
                let x = input_inner
                    .x
                    .saturating_add(width)
                    .min(input_inner.right().saturating_sub(1));
                frame.set_cursor_position(Position::new(x, input_inner.y));
            }
            SessionState::Won | SessionState::Lost => {
                let guess_count = self.game.guesses().len();
                let text = outcome_text(state, guess_count, self.game.target().name());
                let style = if state.is_won() {
                    style::SUCCESS
                } else {
                    style::ERROR
                };
                let outcome = Paragraph::new(Line::styled(text, style).centered()).block(input_block);
                frame.render_widget(outcome, input_area);
            }
        }

        if !hits.is_empty() {
            let list = SuggestionList::new(&hits, self.selected)
                .block(BlockWidget::bordered().border_style(style::DIM));
            frame.render_widget(list, suggestions_area);
        }

        let help = KeyBindingDisplay::new(Action::bindings(state, self.game.puzzle().mode()));
        frame.render_widget(help, help_area);
    }
}

fn outcome_text(state: SessionState, guess_count: usize, answer: &str) -> String {
    let noun = if guess_count == 1 { "guess" } else { "guesses" };
    match state {
        SessionState::Won => format!("You found the location in {guess_count} {noun}!"),
        SessionState::Lost => format!("Out of guesses. The answer was {answer}."),
        SessionState::Playing => String::new(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
