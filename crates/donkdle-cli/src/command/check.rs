use anyhow::Context as _;
use donkdle_engine::{Catalog, Location};

use crate::{command::CatalogArg, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CheckArg {
    #[clap(flatten)]
    catalog: CatalogArg,
    /// Name of the guessed location
    guess: String,
    /// Name of the location to find
    target: String,
}

pub(crate) fn run(arg: &CheckArg) -> anyhow::Result<()> {
    let CheckArg {
        catalog,
        guess,
        target,
    } = arg;

    let catalog = util::read_catalog_file(&catalog.locations)?;
    let guess = find(&catalog, guess)?;
    let target = find(&catalog, target)?;
    util::print_json(&donkdle_engine::evaluate(guess, target))
}

fn find<'a>(catalog: &'a Catalog, name: &str) -> anyhow::Result<&'a Location> {
    catalog
        .find_by_name(name)
        .with_context(|| format!("Location not found: {name}"))
}
