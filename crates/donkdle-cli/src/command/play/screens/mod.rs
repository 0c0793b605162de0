pub use self::{board::*, game_over::*, help::*, stats::*};

mod board;
mod game_over;
mod help;
mod stats;

use crossterm::event::{Event, KeyCode};

/// Returns whether `event` is a press of one of `keys`.
fn is_key_press(event: &Event, keys: &[KeyCode]) -> bool {
    event
        .as_key_press_event()
        .is_some_and(|key| keys.contains(&key.code))
}
