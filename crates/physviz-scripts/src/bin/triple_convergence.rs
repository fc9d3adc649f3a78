// File: crates/physviz-scripts/src/bin/triple_convergence.rs
// Summary: Renders the three-constraint overlap in (M, α_d) and prints the reach at the prediction point.

use anyhow::Result;
use physviz_scripts::{convergence, logging};

fn main() -> Result<()> {
    logging::init();
    let fig = convergence::run(&convergence::Config::default())?;
    physviz_scripts::show(&fig, "Triple convergence")
}
