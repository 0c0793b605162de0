use donkdle_engine::PlayerStats;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::style;

/// Four big numbers with their labels underneath.
pub struct StatsDisplay<'a> {
    stats: &'a PlayerStats,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(stats: &'a PlayerStats) -> Self {
        Self { stats, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn height(&self) -> u16 {
        let block_height = self
            .block
            .as_ref()
            .map_or(0, |block| 4 - block.inner(Rect::new(0, 0, 4, 4)).height);
        2 + block_height
    }
}

const COLUMNS: [(&str, fn(&PlayerStats) -> u32); 4] = [
    ("Played", PlayerStats::played),
    ("Win %", PlayerStats::win_percentage),
    ("Current Streak", PlayerStats::current_streak),
    ("Max Streak", PlayerStats::max_streak),
];

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let columns = area.layout_vec(&Layout::horizontal(
            COLUMNS.map(|_| Constraint::Fill(1)),
        ));
        for ((label, value), area) in COLUMNS.into_iter().zip(columns) {
            let [value_area, label_area] =
                area.layout(&Layout::vertical([Constraint::Length(1); 2]));
            Line::styled(value(self.stats).to_string(), style::TITLE)
                .centered()
                .render(value_area, buf);
            Line::styled(label, style::DIM)
                .centered()
                .render(label_area, buf);
        }
    }
}
