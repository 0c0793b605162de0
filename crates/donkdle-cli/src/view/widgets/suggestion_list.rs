use donkdle_engine::{SearchHit, region_display_name};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::style;

/// Ranked autocomplete candidates with one of them highlighted.
pub struct SuggestionList<'a> {
    hits: &'a [SearchHit<'a>],
    selected: Option<usize>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> SuggestionList<'a> {
    pub fn new(hits: &'a [SearchHit<'a>], selected: Option<usize>) -> Self {
        Self {
            hits,
            selected,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

impl Widget for SuggestionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let rows = usize::from(area.height);
        // keep the selection visible
        let first = self
            .selected
            .map_or(0, |selected| (selected + 1).saturating_sub(rows));

        for (row, (index, hit)) in self.hits.iter().enumerate().skip(first).take(rows).enumerate() {
            let location = hit.location;
            let name_style = if self.selected == Some(index) {
                style::SELECTED
            } else {
                style::TEXT
            };
            let line = Line::from(vec![
                Span::styled(location.name(), name_style),
                Span::styled(
                    format!("  {}", region_display_name(location.hint_region())),
                    style::DIM,
                ),
            ]);
            #[expect(clippy::cast_possible_truncation)]
            let y = area.y + row as u16;
            line.render(Rect { y, height: 1, ..area }, buf);
        }
    }
}
