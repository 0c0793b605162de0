use donkdle_engine::{Channel, Feedback, Guess, region_display_name};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Paragraph, Widget, Wrap},
};

use super::style;

const NAME_HEIGHT: u16 = 1;
const CELL_HEIGHT: u16 = 2;
const ROW_HEIGHT: u16 = NAME_HEIGHT + CELL_HEIGHT;

/// Guesses so far, newest at the bottom, each as a name line over four
/// coloured channel cells.
///
/// When the guesses do not fit, the oldest ones are hidden.
pub struct GuessBoard<'a> {
    guesses: &'a [Guess],
    show_pending: bool,
    block: Option<BlockWidget<'a>>,
}

impl<'a> GuessBoard<'a> {
    pub fn new(guesses: &'a [Guess]) -> Self {
        Self {
            guesses,
            show_pending: false,
            block: None,
        }
    }

    /// Appends an empty row for the next guess.
    pub fn show_pending(self, show_pending: bool) -> Self {
        Self {
            show_pending,
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

/// Text shown in the cell of `channel`.
pub fn cell_text(feedback: &Feedback, channel: Channel) -> String {
    match channel {
        Channel::Region => region_display_name(&feedback.region.value).to_owned(),
        Channel::Kong => feedback.kong.value.clone(),
        Channel::Requirement => {
            let requirement = &feedback.requirement;
            match requirement.direction {
                Some(direction) => format!("{} {}", requirement.value, direction.arrow()),
                None => requirement.value.to_string(),
            }
        }
        Channel::Moves => {
            let moves = &feedback.moves;
            if moves.is_blank() {
                return "None".to_owned();
            }
            moves
                .common
                .iter()
                .map(|name| format!("✓ {name}"))
                .chain(moves.extra.iter().cloned())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

fn cell_columns() -> Layout {
    Layout::horizontal(Channel::ALL.map(|_| Constraint::Fill(1))).spacing(1)
}

impl Widget for GuessBoard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        if area.is_empty() {
            return;
        }

        let [header_area, rows_area] =
            area.layout(&Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]));
        let header_areas = header_area.layout_vec(&cell_columns());
        for (channel, area) in Channel::ALL.iter().zip(header_areas) {
            Line::styled(channel.label(), style::DIM)
                .centered()
                .render(area, buf);
        }

        let capacity = usize::from(rows_area.height / ROW_HEIGHT);
        let pending = usize::from(self.show_pending);
        let hidden = (self.guesses.len() + pending).saturating_sub(capacity);
        let visible = self.guesses.iter().skip(hidden);

        let mut row_area = Rect {
            height: ROW_HEIGHT,
            ..rows_area
        };
        for guess in visible {
            render_guess(guess, row_area, buf);
            row_area.y += ROW_HEIGHT;
        }
        if self.show_pending && capacity > 0 {
            render_pending(row_area, buf);
        }
    }
}

fn render_guess(guess: &Guess, area: Rect, buf: &mut Buffer) {
    let [name_area, cells_area] = area.layout(&Layout::vertical([
        Constraint::Length(NAME_HEIGHT),
        Constraint::Length(CELL_HEIGHT),
    ]));
    Line::styled(guess.location().name(), style::GUESS_NAME).render(name_area, buf);

    let feedback = guess.feedback();
    let cell_areas = cells_area.layout_vec(&cell_columns());
    for (channel, area) in Channel::ALL.into_iter().zip(cell_areas) {
        let style = style::status(feedback.status(channel));
        Paragraph::new(cell_text(feedback, channel))
            .style(style)
            .centered()
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

fn render_pending(area: Rect, buf: &mut Buffer) {
    let [name_area, cells_area] = area.layout(&Layout::vertical([
        Constraint::Length(NAME_HEIGHT),
        Constraint::Length(CELL_HEIGHT),
    ]));
    Line::styled("?", style::DIM).render(name_area, buf);
    for area in cells_area.layout_vec(&cell_columns()) {
        BlockWidget::bordered().border_style(style::DIM).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use donkdle_engine::{
        Direction, KongFeedback, MovesFeedback, RegionFeedback, RequirementFeedback, Status,
    };

    use super::*;

    fn feedback(common: &[&str], extra: &[&str], direction: Option<Direction>) -> Feedback {
        let strings = |names: &[&str]| -> Vec<String> {
            names.iter().map(|&name| name.to_owned()).collect()
        };
        Feedback {
            region: RegionFeedback {
                status: Status::Present,
                value: "Hivetunnel".to_owned(),
            },
            kong: KongFeedback {
                status: Status::Absent,
                value: "Donkey, Tiny".to_owned(),
            },
            requirement: RequirementFeedback {
                status: if direction.is_some() {
                    Status::Absent
                } else {
                    Status::Correct
                },
                value: common.len() + extra.len(),
                direction,
            },
            moves: MovesFeedback {
                status: Status::Present,
                common: strings(common),
                extra: strings(extra),
            },
        }
    }

    #[test]
    fn test_cell_text() {
        let feedback = feedback(&["Grab"], &["Strong Kong"], Some(Direction::Lower));
        assert_eq!(cell_text(&feedback, Channel::Region), "Hive Tunnel");
        assert_eq!(cell_text(&feedback, Channel::Kong), "Donkey, Tiny");
        assert_eq!(cell_text(&feedback, Channel::Requirement), "2 ↓");
        assert_eq!(cell_text(&feedback, Channel::Moves), "✓ Grab, Strong Kong");
    }

    #[test]
    fn test_cell_text_without_moves() {
        let feedback = feedback(&[], &[], None);
        assert_eq!(cell_text(&feedback, Channel::Requirement), "0");
        assert_eq!(cell_text(&feedback, Channel::Moves), "None");
    }
}
