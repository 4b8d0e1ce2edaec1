//! magdock demo - a row of coloured tiles that magnify under the pointer
//! while dragging and can be reordered by dragging across the row.

use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use magdock::cli::CliArgs;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    magdock::tracing::init();

    let startup = CliArgs::parse()
        .into_config()
        .context("Failed to load configuration")?;
    tracing::info!(
        items = startup.item_count,
        "starting dock demo with {:?}",
        startup.dock.layout
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(startup)?;

    event_loop.run_app(&mut app)?;

    Ok(())
}
