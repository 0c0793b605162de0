use std::{cell::Cell, rc::Rc};

use crossterm::event::{Event, KeyCode};
use donkdle_engine::{Location, PuzzleMode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Line,
    widgets::{Block as BlockWidget, Clear, Padding},
};

use crate::{
    game::GameContext,
    tui::{Runtime, Screen, ScreenTransition},
    view::widgets::{KeyBinding, KeyBindingDisplay, LocationDetails, style},
};

use super::is_key_press;

/// Reveals the answer once the game has ended.
#[derive(Debug)]
pub struct GameOverScreen {
    answer: Location,
    won: bool,
    guess_count: usize,
    mode: PuzzleMode,
    /// Present in random mode, where another round can be started from here.
    play_again: Option<Rc<Cell<bool>>>,
}

impl GameOverScreen {
    pub fn new(game: &GameContext, play_again: Option<Rc<Cell<bool>>>) -> Self {
        Self {
            answer: game.target().clone(),
            won: game.state().is_won(),
            guess_count: game.guesses().len(),
            mode: game.puzzle().mode(),
            play_again,
        }
    }

    fn bindings(&self) -> &'static [KeyBinding<'static>] {
        if self.play_again.is_some() {
            &[
                (&["n"], "Play Again"),
                (&["Enter", "Esc"], "Board"),
                (&["q"], "Quit"),
            ]
        } else {
            &[(&["Enter", "Esc"], "Board"), (&["q"], "Quit")]
        }
    }

    fn headline(&self) -> (&'static str, String) {
        if self.won {
            let noun = if self.guess_count == 1 { "guess" } else { "guesses" };
            (
                "🎉 Congratulations! 🎉",
                format!("You found the location in {} {noun}!", self.guess_count),
            )
        } else {
            let when = match self.mode {
                PuzzleMode::Daily => "tomorrow",
                PuzzleMode::Random => "next time",
            };
            ("😢 Game Over", format!("Better luck {when}!"))
        }
    }
}

impl Screen for GameOverScreen {
    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
        if let Some(play_again) = &self.play_again
            && is_key_press(event, &[KeyCode::Char('n')])
        {
            play_again.set(true);
            return ScreenTransition::Pop;
        }
        if is_key_press(event, &[KeyCode::Enter, KeyCode::Esc]) {
            return ScreenTransition::Pop;
        }
        if is_key_press(event, &[KeyCode::Char('q')]) {
            return ScreenTransition::Exit;
        }
        ScreenTransition::Stay
    }

    fn draw(&self, frame: &mut Frame) {
        let (title, message) = self.headline();
        let heading = match self.mode {
            PuzzleMode::Daily => " Today's Location ",
            PuzzleMode::Random => " The Location ",
        };

        let dialog = frame
            .area()
            .centered(Constraint::Max(64), Constraint::Length(14));
        let [message_area, details_area, help_area] = dialog.layout(&Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(10),
            Constraint::Length(1),
        ]));

        frame.render_widget(Clear, dialog);
        let message_block =
            BlockWidget::bordered().title(Line::styled(title, style::TITLE).centered());
        frame.render_widget(
            Line::styled(message, style::TEXT).centered(),
            message_block.inner(message_area),
        );
        frame.render_widget(message_block, message_area);

        let details = LocationDetails::new(&self.answer).block(
            BlockWidget::bordered()
                .title(heading)
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(details, details_area);
        frame.render_widget(KeyBindingDisplay::new(self.bindings()), help_area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;
    use donkdle_engine::{LocationId, LocationRecord};

    use super::*;

    fn screen(
        won: bool,
        guess_count: usize,
        play_again: Option<Rc<Cell<bool>>>,
    ) -> GameOverScreen {
        let answer = Location::try_from(LocationRecord {
            id: LocationId::Number(7),
            name: Some("Tiny Temple Bonus".to_owned()),
            hint_region: Some("Templeinterior".to_owned()),
            level: Some("Aztec".to_owned()),
            kong: Some("Tiny".to_owned()),
            moves: Some(vec!["Mini Monkey".to_owned()]),
        })
        .unwrap();
        let mode = if play_again.is_some() {
            PuzzleMode::Random
        } else {
            PuzzleMode::Daily
        };
        GameOverScreen {
            answer,
            won,
            guess_count,
            mode,
            play_again,
        }
    }

    fn press(screen: &mut GameOverScreen, code: KeyCode) -> ScreenTransition {
        screen.handle_event(&mut Runtime::new(), &Event::Key(KeyEvent::from(code)))
    }

    #[test]
    fn test_headline() {
        assert_eq!(
            screen(true, 1, None).headline().1,
            "You found the location in 1 guess!"
        );
        assert_eq!(
            screen(true, 4, None).headline().1,
            "You found the location in 4 guesses!"
        );
        assert_eq!(screen(false, 6, None).headline().1, "Better luck tomorrow!");
        let random = screen(false, 6, Some(Rc::default()));
        assert_eq!(random.headline().1, "Better luck next time!");
    }

    #[test]
    fn test_play_again_only_in_random_mode() {
        let mut daily = screen(true, 2, None);
        assert!(matches!(press(&mut daily, KeyCode::Char('n')), ScreenTransition::Stay));

        let requested = Rc::new(Cell::new(false));
        let mut random = screen(true, 2, Some(Rc::clone(&requested)));
        assert!(matches!(press(&mut random, KeyCode::Char('n')), ScreenTransition::Pop));
        assert!(requested.get());
    }

    #[test]
    fn test_back_and_quit() {
        let mut screen = screen(false, 3, None);
        assert!(matches!(press(&mut screen, KeyCode::Esc), ScreenTransition::Pop));
        assert!(matches!(press(&mut screen, KeyCode::Char('q')), ScreenTransition::Exit));
    }
}
