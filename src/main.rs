//! FossilSleuth: exploratory analysis of a dinosaur fossil dataset.
//!
//! Thin binary entry point. All logic lives in the `fossilsleuth-core`
//! and `fossilsleuth-render` crates.

use fossilsleuth_core::config::ConfigPaths;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("FossilSleuth starting");

    let paths = ConfigPaths::resolve()?;
    fossilsleuth_render::run(&paths)?;

    Ok(())
}
