use donkdle_engine::PlayerStats;

use crate::{command::StoreArg, store::STATS_KEY};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct StatsArg {
    #[clap(flatten)]
    store: StoreArg,
    /// Print the statistics as JSON
    #[clap(long)]
    json: bool,
}

pub(crate) fn run(arg: &StatsArg) -> anyhow::Result<()> {
    let StatsArg { store, json } = arg;
    let store = store.open();

    let Some(stats) = store.get::<PlayerStats>(STATS_KEY)? else {
        eprintln!("No statistics in {} yet", store.dir().display());
        return Ok(());
    };

    if *json {
        return crate::util::print_json(&stats);
    }
    println!("Played:         {}", stats.played());
    println!("Win %:          {}", stats.win_percentage());
    println!("Current Streak: {}", stats.current_streak());
    println!("Max Streak:     {}", stats.max_streak());
    if let Some(date) = stats.last_played() {
        println!("Last Played:    {date}");
    }
    Ok(())
}
