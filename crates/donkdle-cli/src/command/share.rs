use anyhow::bail;
use donkdle_engine::PuzzleMode;

use crate::{
    command::{CatalogArg, PuzzleArg, StoreArg},
    game::GameContext,
    util,
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ShareArg {
    #[clap(flatten)]
    catalog: CatalogArg,
    #[clap(flatten)]
    store: StoreArg,
    #[clap(flatten)]
    puzzle: PuzzleArg,
}

pub(crate) fn run(arg: &ShareArg) -> anyhow::Result<()> {
    let ShareArg {
        catalog,
        store,
        puzzle,
    } = arg;
    if puzzle.mode != PuzzleMode::Daily {
        bail!("only daily games are saved and can be shared");
    }

    let catalog = util::read_catalog_file(&catalog.locations)?;
    let options = puzzle.options();
    let game = GameContext::open(catalog, store.open(), &options);
    if !game.state().is_over() {
        bail!("the game of {} is not finished yet", options.date);
    }
    print!("{}", game.share_text());
    Ok(())
}
