#![windows_subsystem = "windows"]

use anyhow::Context;
use cp3::kernel::config::load_app_config;
use cp3::store::Store;
use cp3_desktop::{App, DesktopApp};
use cp3_logger::Logger;

fn main() -> anyhow::Result<()> {
    let config = load_app_config(std::env::args_os().nth(1)).context("Loading configuration")?;

    let _logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .with_config(&config.logging)?
        .init()?;

    let store = Store::builder().config(&config.store).init().context("Building store client")?;
    tracing::info!(rest_url = %store.rest_url(), "Launching desktop shell");

    DesktopApp::new().with_config(&config.window).launch(store, App);

    Ok(())
}
