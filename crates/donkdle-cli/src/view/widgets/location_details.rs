use donkdle_engine::{Location, region_display_name};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::style;

/// Everything known about a location, one labelled field per line.
pub struct LocationDetails<'a> {
    location: &'a Location,
    block: Option<BlockWidget<'a>>,
}

impl<'a> LocationDetails<'a> {
    pub fn new(location: &'a Location) -> Self {
        Self {
            location,
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

fn moves_text(location: &Location) -> String {
    if location.moves().is_empty() {
        "None".to_owned()
    } else {
        location.moves().iter().collect::<Vec<_>>().join(", ")
    }
}

impl Widget for LocationDetails<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let location = self.location;
        let field = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{label:>8}: "), style::DIM),
                Span::styled(value, style::TEXT),
            ])
        };
        let text = Text::from(vec![
            Line::styled(location.name(), style::TITLE),
            Line::default(),
            field(
                "Region",
                region_display_name(location.hint_region()).to_owned(),
            ),
            field("Level", location.level().to_owned()),
            field("Kong", location.kong().raw().to_owned()),
            field("Count", location.requirement_count().to_string()),
            field("Moves", moves_text(location)),
        ]);
        text.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use donkdle_engine::{LocationId, LocationRecord};

    use super::*;

    fn location(moves: Option<Vec<String>>) -> Location {
        Location::try_from(LocationRecord {
            id: LocationId::Number(1),
            name: Some("Bonus Barrel".to_owned()),
            hint_region: Some("Hillside".to_owned()),
            level: Some("Japes".to_owned()),
            kong: Some("Lanky".to_owned()),
            moves,
        })
        .unwrap()
    }

    #[test]
    fn test_moves_text() {
        assert_eq!(moves_text(&location(None)), "None");
        let moves = vec!["Orangstand".to_owned(), "Trombone".to_owned()];
        assert_eq!(moves_text(&location(Some(moves))), "Orangstand, Trombone");
    }
}
