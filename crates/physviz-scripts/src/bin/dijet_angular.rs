// File: crates/physviz-scripts/src/bin/dijet_angular.rs
// Summary: Renders the dijet angular distribution with the W′/QCD inset.

use anyhow::Result;
use physviz_scripts::{dijet, logging};

fn main() -> Result<()> {
    logging::init();
    let fig = dijet::run(&dijet::Config::default())?;
    physviz_scripts::show(&fig, "Dijet angular distribution")
}
