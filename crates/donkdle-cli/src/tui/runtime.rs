use std::{io, time::Duration};

use super::{
    ScreenStack,
    event_loop::{EventLoop, LoopEvent},
};

/// Owns the event loop and hands its events to the active screen.
#[derive(Default, Debug)]
pub struct Runtime {
    events: EventLoop,
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how often [`Screen::update`](super::Screen::update) is called.
    ///
    /// `None` disables ticks; the screen then only reacts to input.
    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.set_tick_interval(interval);
    }

    /// Takes over the terminal and runs `stack` until it exits.
    pub fn run(mut self, stack: &mut ScreenStack<'_>) -> io::Result<()> {
        stack.activate(&mut self);

        ratatui::run(|terminal| {
            while !stack.should_exit() {
                match self.events.next()? {
                    LoopEvent::Tick => stack.update(&mut self),
                    LoopEvent::Render => {
                        terminal.draw(|frame| stack.draw(frame))?;
                    }
                    LoopEvent::Input(event) => stack.handle_event(&mut self, &event),
                }
            }
            Ok(())
        })
    }
}
