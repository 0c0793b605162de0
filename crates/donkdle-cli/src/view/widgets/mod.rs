pub use self::{
    guess_board::*, key_binding_display::*, location_details::*, stats_display::*,
    suggestion_list::*,
};

mod guess_board;
mod key_binding_display;
mod location_details;
mod stats_display;
mod suggestion_list;

pub mod style {
    use donkdle_engine::Status;
    use ratatui::style::{Color, Modifier, Style};

    const CORRECT: Color = Color::Rgb(83, 141, 78);
    const PRESENT: Color = Color::Rgb(181, 159, 59);
    const ABSENT: Color = Color::Rgb(58, 58, 60);

    pub const TEXT: Style = Style::new().fg(Color::White);
    pub const DIM: Style = Style::new().fg(Color::DarkGray);
    pub const TITLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    pub const GUESS_NAME: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
    pub const SELECTED: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
    pub const ERROR: Style = Style::new().fg(Color::Red);
    pub const SUCCESS: Style = Style::new().fg(Color::Green);

    #[must_use]
    pub const fn status(status: Status) -> Style {
        let bg = match status {
            Status::Correct => CORRECT,
            Status::Present => PRESENT,
            Status::Absent => ABSENT,
        };
        Style::new().fg(Color::White).bg(bg)
    }
}
