use std::fmt;

use crossterm::event::Event;
use ratatui::Frame;

use super::Runtime;

/// One full-terminal view.
///
/// Only the top screen of a [`ScreenStack`] receives input and ticks and is
/// drawn. A screen is told when it reaches the top ([`on_active`]) and when
/// another screen covers it or it is removed ([`on_inactive`]); that is the
/// place to set the tick interval it needs.
///
/// [`on_active`]: Self::on_active
/// [`on_inactive`]: Self::on_inactive
pub trait Screen: fmt::Debug {
    fn on_active(&mut self, _runtime: &mut Runtime) {}

    fn on_inactive(&mut self, _runtime: &mut Runtime) {}

    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event) -> ScreenTransition;

    fn update(&mut self, _runtime: &mut Runtime) {}

    fn draw(&self, frame: &mut Frame);
}

/// What the stack does after a screen handled an event.
#[derive(Debug)]
pub enum ScreenTransition {
    Stay,
    /// Covers the current screen with a new one.
    Push(Box<dyn Screen>),
    /// Removes the current screen and returns to the one below.
    Pop,
    /// Removes every screen.
    Exit,
}

#[derive(Debug)]
pub struct ScreenStack<'a> {
    screens: Vec<Box<dyn Screen + 'a>>,
    exited: bool,
}

impl<'a> ScreenStack<'a> {
    #[must_use]
    pub fn new(initial: Box<dyn Screen + 'a>) -> Self {
        Self {
            screens: vec![initial],
            exited: false,
        }
    }

    /// Puts `screen` on top before the runtime starts.
    pub fn push(&mut self, screen: Box<dyn Screen + 'a>) {
        self.screens.push(screen);
    }

    pub fn should_exit(&self) -> bool {
        self.exited || self.screens.is_empty()
    }

    pub(super) fn activate(&mut self, runtime: &mut Runtime) {
        if let Some(screen) = self.screens.last_mut() {
            screen.on_active(runtime);
        }
    }

    pub(super) fn handle_event(&mut self, runtime: &mut Runtime, event: &Event) {
        if let Some(current) = self.screens.last_mut() {
            let transition = current.handle_event(runtime, event);
            self.apply(runtime, transition);
        }
    }

    pub(super) fn update(&mut self, runtime: &mut Runtime) {
        if let Some(current) = self.screens.last_mut() {
            current.update(runtime);
        }
    }

    pub(super) fn draw(&self, frame: &mut Frame) {
        if let Some(current) = self.screens.last() {
            current.draw(frame);
        }
    }

    fn apply(&mut self, runtime: &mut Runtime, transition: ScreenTransition) {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::Push(mut screen) => {
                if let Some(current) = self.screens.last_mut() {
                    current.on_inactive(runtime);
                }
                screen.on_active(runtime);
                self.screens.push(screen);
            }
            ScreenTransition::Pop => {
                if let Some(mut removed) = self.screens.pop() {
                    removed.on_inactive(runtime);
                }
                self.activate(runtime);
            }
            ScreenTransition::Exit => {
                while let Some(mut removed) = self.screens.pop() {
                    removed.on_inactive(runtime);
                }
                self.exited = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, mem, rc::Rc};

    use crossterm::event::{KeyCode, KeyEvent};

    use super::*;

    type Log = Rc<RefCell<Vec<String>>>;

    #[derive(Debug)]
    struct Recorder {
        name: &'static str,
        log: Log,
        next: ScreenTransition,
    }

    impl Recorder {
        fn boxed(name: &'static str, log: &Log, next: ScreenTransition) -> Box<Self> {
            Box::new(Self {
                name,
                log: Rc::clone(log),
                next,
            })
        }

        fn record(&self, what: &str) {
            self.log.borrow_mut().push(format!("{} {what}", self.name));
        }
    }

    impl Screen for Recorder {
        fn on_active(&mut self, _runtime: &mut Runtime) {
            self.record("active");
        }

        fn on_inactive(&mut self, _runtime: &mut Runtime) {
            self.record("inactive");
        }

        fn handle_event(&mut self, _runtime: &mut Runtime, _event: &Event) -> ScreenTransition {
            self.record("event");
            mem::replace(&mut self.next, ScreenTransition::Stay)
        }

        fn update(&mut self, _runtime: &mut Runtime) {
            self.record("update");
        }

        fn draw(&self, _frame: &mut Frame) {}
    }

    fn key() -> Event {
        Event::Key(KeyEvent::from(KeyCode::Enter))
    }

    fn take(log: &Log) -> Vec<String> {
        mem::take(&mut *log.borrow_mut())
    }

    #[test]
    fn test_push_then_pop_reactivates_lower_screen() {
        let log = Log::default();
        let mut runtime = Runtime::new();
        let mut stack = ScreenStack::new(Recorder::boxed(
            "play",
            &log,
            ScreenTransition::Push(Recorder::boxed("help", &log, ScreenTransition::Pop)),
        ));
        stack.activate(&mut runtime);
        assert_eq!(take(&log), ["play active"]);

        stack.handle_event(&mut runtime, &key());
        assert_eq!(
            take(&log),
            ["play event", "play inactive", "help active"]
        );

        stack.update(&mut runtime);
        assert_eq!(take(&log), ["help update"]);

        stack.handle_event(&mut runtime, &key());
        assert_eq!(
            take(&log),
            ["help event", "help inactive", "play active"]
        );
        assert!(!stack.should_exit());
    }

    #[test]
    fn test_pushed_screen_is_on_top_at_start() {
        let log = Log::default();
        let mut runtime = Runtime::new();
        let mut stack = ScreenStack::new(Recorder::boxed("play", &log, ScreenTransition::Stay));
        stack.push(Recorder::boxed("over", &log, ScreenTransition::Pop));
        stack.activate(&mut runtime);
        assert_eq!(take(&log), ["over active"]);

        stack.handle_event(&mut runtime, &key());
        assert_eq!(take(&log), ["over event", "over inactive", "play active"]);
    }

    #[test]
    fn test_exit_removes_every_screen() {
        let log = Log::default();
        let mut runtime = Runtime::new();
        let mut stack = ScreenStack::new(Recorder::boxed("play", &log, ScreenTransition::Stay));
        stack.push(Recorder::boxed("stats", &log, ScreenTransition::Exit));
        stack.activate(&mut runtime);
        take(&log);

        stack.handle_event(&mut runtime, &key());
        assert_eq!(
            take(&log),
            ["stats event", "stats inactive", "play inactive"]
        );
        assert!(stack.should_exit());
    }

    #[test]
    fn test_popping_last_screen_exits() {
        let log = Log::default();
        let mut runtime = Runtime::new();
        let mut stack = ScreenStack::new(Recorder::boxed("play", &log, ScreenTransition::Pop));
        stack.activate(&mut runtime);
        stack.handle_event(&mut runtime, &key());
        assert!(stack.should_exit());
    }
}
