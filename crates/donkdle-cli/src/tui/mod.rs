//! Minimal terminal runtime: an event loop that ticks, redraws after
//! changes, and drives a stack of screens.

pub use self::{
    runtime::Runtime,
    screen::{Screen, ScreenStack, ScreenTransition},
};

mod event_loop;
mod runtime;
mod screen;
