mod command;
mod game;
mod store;
mod tui;
mod util;
mod view;

fn main() -> anyhow::Result<()> {
    command::run()
}
