// File: crates/physviz-scripts/src/bin/relic_density.rs
// Summary: Renders the thermal relic density scan and prints the freeze-out prediction.

use anyhow::Result;
use physviz_scripts::{logging, relic};

fn main() -> Result<()> {
    logging::init();
    let fig = relic::run(&relic::Config::default())?;
    physviz_scripts::show(&fig, "Relic density")
}
