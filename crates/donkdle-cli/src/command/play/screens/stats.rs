use crossterm::event::{Event, KeyCode};
use donkdle_engine::PlayerStats;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Line,
    widgets::{Block as BlockWidget, Clear, Padding, Paragraph},
};

use crate::{
    tui::{Runtime, Screen, ScreenTransition},
    view::widgets::{KeyBindingDisplay, StatsDisplay, style},
};

use super::is_key_press;

/// Player statistics, plus the share text once the game is over.
#[derive(Debug)]
pub struct StatsScreen {
    stats: PlayerStats,
    share_text: Option<String>,
}

impl StatsScreen {
    pub fn new(stats: PlayerStats, share_text: Option<String>) -> Self {
        Self { stats, share_text }
    }
}

impl Screen for StatsScreen {
    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
        let close = [KeyCode::Esc, KeyCode::Enter, KeyCode::F(2), KeyCode::Char('q')];
        if is_key_press(event, &close) {
            return ScreenTransition::Pop;
        }
        ScreenTransition::Stay
    }

    fn draw(&self, frame: &mut Frame) {
        let stats = StatsDisplay::new(&self.stats).block(
            BlockWidget::bordered()
                .title(Line::styled(" Statistics ", style::TITLE).centered())
                .padding(Padding::vertical(1)),
        );
        let share_height = self
            .share_text
            .as_ref()
            .map_or(0, |text| u16::try_from(text.lines().count()).unwrap_or(u16::MAX) + 2);

        let dialog = frame.area().centered(
            Constraint::Max(64),
            Constraint::Length(stats.height() + share_height + 1),
        );
        let [stats_area, share_area, help_area] = dialog.layout(&Layout::vertical([
            Constraint::Length(stats.height()),
            Constraint::Length(share_height),
            Constraint::Length(1),
        ]));

        frame.render_widget(Clear, dialog);
        frame.render_widget(stats, stats_area);
        if let Some(text) = &self.share_text {
            let share = Paragraph::new(text.as_str())
                .centered()
                .block(BlockWidget::bordered().title(" Share "));
            frame.render_widget(share, share_area);
        }
        frame.render_widget(
            KeyBindingDisplay::new(&[(&["Esc", "F2"], "Close")]),
            help_area,
        );
    }
}
