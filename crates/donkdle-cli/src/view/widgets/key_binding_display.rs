use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Keys (alternatives) and what they do.
pub type KeyBinding<'a> = (&'a [&'a str], &'a str);

const KEY: Style = Style::new().fg(Color::Cyan);
const SEPARATOR: Style = Style::new().fg(Color::DarkGray);

/// One centred line such as `Enter Guess | F1 Help | Esc Quit`.
#[derive(Debug)]
pub struct KeyBindingDisplay<'a> {
    bindings: &'a [KeyBinding<'a>],
}

impl<'a> KeyBindingDisplay<'a> {
    pub fn new(bindings: &'a [KeyBinding<'a>]) -> Self {
        Self { bindings }
    }
}

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![];
        for (n, (keys, action)) in self.bindings.iter().enumerate() {
            if n > 0 {
                spans.push(Span::styled(" | ", SEPARATOR));
            }
            let keys = keys.join("/");
            spans.push(Span::styled(keys, KEY));
            spans.push(Span::raw(format!(" {action}")));
        }
        Line::from(spans).centered().render(area, buf);
    }
}
