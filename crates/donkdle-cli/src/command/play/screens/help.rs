use crossterm::event::{Event, KeyCode};
use donkdle_engine::{Channel, Status, status_marker};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::{Line, Span, Text},
    widgets::{Block as BlockWidget, Clear, Padding, Paragraph, Wrap},
};

use crate::{
    tui::{Runtime, Screen, ScreenTransition},
    view::widgets::{KeyBindingDisplay, style},
};

use super::is_key_press;

/// How to play.
#[derive(Debug)]
pub struct HelpScreen;

fn channel_rules(channel: Channel) -> [(Status, &'static str); 2] {
    match channel {
        Channel::Region => [
            (Status::Correct, "same hint region"),
            (Status::Present, "different region in the same level"),
        ],
        Channel::Kong => [
            (Status::Correct, "same kongs"),
            (Status::Present, "some kongs in common, or any kong"),
        ],
        Channel::Requirement => [
            (Status::Correct, "same number of required moves"),
            (Status::Absent, "the arrow points towards the answer's count"),
        ],
        Channel::Moves => [
            (Status::Correct, "exactly the same moves"),
            (Status::Present, "some moves in common (marked ✓)"),
        ],
    }
}

fn help_text() -> Text<'static> {
    let mut lines = vec![
        Line::from("Find the hidden location."),
        Line::from("Type a name, pick it from the list and press Enter."),
        Line::from("Each guess is compared with the answer in four columns:"),
        Line::default(),
    ];
    for channel in Channel::ALL {
        lines.push(Line::styled(channel.label(), style::TITLE));
        for (status, rule) in channel_rules(channel) {
            lines.push(Line::from(vec![
                Span::raw(format!("  {} ", status_marker(status))),
                Span::styled(rule, style::TEXT),
            ]));
        }
    }
    lines.extend([
        Line::default(),
        Line::styled(
            "A daily puzzle is the same for everyone and changes at midnight.",
            style::DIM,
        ),
    ]);
    Text::from(lines)
}

impl Screen for HelpScreen {
    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
        let close = [KeyCode::Esc, KeyCode::Enter, KeyCode::F(1), KeyCode::Char('q')];
        if is_key_press(event, &close) {
            return ScreenTransition::Pop;
        }
        ScreenTransition::Stay
    }

    fn draw(&self, frame: &mut Frame) {
        let dialog = frame
            .area()
            .centered(Constraint::Max(90), Constraint::Length(22));
        let [body_area, help_area] =
            dialog.layout(&Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]));

        let body = Paragraph::new(help_text()).wrap(Wrap { trim: false }).block(
            BlockWidget::bordered()
                .title(Line::styled(" How to Play ", style::TITLE).centered())
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(Clear, dialog);
        frame.render_widget(body, body_area);
        frame.render_widget(
            KeyBindingDisplay::new(&[(&["Esc", "F1"], "Close")]),
            help_area,
        );
    }
}
