//! Ratatui widgets for the nopo TUI.

pub mod command_bar;
pub mod help;
pub mod results;
pub mod search_form;
pub mod text_input;
pub mod title_bar;
