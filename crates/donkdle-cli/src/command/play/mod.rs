use anyhow::Context as _;

use crate::{
    command::{CatalogArg, PuzzleArg, StoreArg},
    game::GameContext,
    tui::{Runtime, ScreenStack},
    util,
};

use self::screens::BoardScreen;

mod screens;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    catalog: CatalogArg,
    #[clap(flatten)]
    store: StoreArg,
    #[clap(flatten)]
    puzzle: PuzzleArg,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        catalog,
        store,
        puzzle,
    } = arg;

    let catalog = util::read_catalog_file(&catalog.locations)?;
    let mut game = GameContext::open(catalog, store.open(), &puzzle.options());

    {
        let already_over = game.state().is_over();
        let board = BoardScreen::new(&mut game);
        let game_over = already_over.then(|| board.game_over_screen());
        let mut stack = ScreenStack::new(Box::new(board));
        if let Some(screen) = game_over {
            stack.push(Box::new(screen));
        }
        Runtime::new()
            .run(&mut stack)
            .context("Failed to run the terminal UI")?;
    }

    if game.state().is_over() {
        print!("{}", game.share_text());
    }
    Ok(())
}
