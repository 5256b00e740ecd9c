//! nopo TUI: ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use anyhow::Context;
use app::AppState;
use nopo_core::{config::Config, Catalog};

/// Start the interactive search screen over an already loaded catalog.
pub fn run(catalog: Catalog, config: &Config) -> anyhow::Result<()> {
    let field = config
        .ui
        .default_field()
        .context("invalid [ui] default_field in config")?;
    let theme = theme::Theme::by_name(&config.ui.theme);
    tracing::info!(
        restaurants = catalog.len(),
        field = %field,
        theme = %config.ui.theme,
        "starting tui"
    );
    let state = AppState::new(catalog, field, theme, config.ui.separator_width);
    App::new(state).run()
}
