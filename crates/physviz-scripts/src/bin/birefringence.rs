// File: crates/physviz-scripts/src/bin/birefringence.rs
// Summary: Renders the cosmic birefringence prediction figure and prints the predicted rotation.

use anyhow::Result;
use physviz_scripts::{birefringence, logging};

fn main() -> Result<()> {
    logging::init();
    let fig = birefringence::run(&birefringence::Config::default())?;
    physviz_scripts::show(&fig, "Cosmic birefringence")
}
