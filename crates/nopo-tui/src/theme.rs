//! Colour theme for the nopo TUI.
//!
//! Themes are defined as TOML files. The built-in themes are embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk. Resolve one with [`Theme::by_name`] at startup and pass the result
//! through the application as a shared reference.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use std::str::FromStr;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types, mirroring the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let modifiers = [
            (self.bold, Modifier::BOLD),
            (self.dim, Modifier::DIM),
            (self.italic, Modifier::ITALIC),
            (self.underlined, Modifier::UNDERLINED),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .fold(Modifier::empty(), |acc, (_, m)| acc | m);

        let mut style = Style::default().add_modifier(modifiers);
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    command_bar: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawResults {
    name: RawStyle,
    address: RawStyle,
    menu: RawStyle,
    price: RawStyle,
    separator: RawStyle,
    empty: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawForm {
    field: RawStyle,
    error: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    highlight: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    borders: RawBorders,
    results: RawResults,
    form: RawForm,
    search: RawSearch,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme. All styles are pre-resolved ratatui [`Style`]
/// values, so rendering does not allocate.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Border style for the currently focused pane.
    pub border_focused: Style,
    /// Border style for the command bar pane
    pub border_command_bar: Style,
    /// Border style for unfocused panes.
    pub border_unfocused: Style,

    pub result_name: Style,
    pub result_address: Style,
    pub result_menu: Style,
    pub result_price: Style,
    pub result_separator: Style,
    /// The "no results" line.
    pub result_empty: Style,

    /// The field selector label in the search form.
    pub form_field: Style,
    /// Inline validation errors.
    pub form_error: Style,

    /// Inline highlight applied to the matched keyword.
    pub search_highlight: Style,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed, which the unit tests rule out.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded Gruvbox Dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Resolve a built-in theme by name. Unknown names fall back to the
    /// default theme.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Self::load_gruvbox_dark(),
            "default" => Self::load_default(),
            other => {
                tracing::warn!(theme = other, "unknown theme, using default");
                Self::load_default()
            }
        }
    }

    /// Parse a theme from a TOML string.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            border_focused: raw.borders.focused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            result_name: raw.results.name.into_style(),
            result_address: raw.results.address.into_style(),
            result_menu: raw.results.menu.into_style(),
            result_price: raw.results.price.into_style(),
            result_separator: raw.results.separator.into_style(),
            result_empty: raw.results.empty.into_style(),
            form_field: raw.form.field.into_style(),
            form_error: raw.form.error.into_style(),
            search_highlight: raw.search.highlight.into_style(),
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour value from a theme file.
///
/// Anything ratatui's [`Color`] parser accepts works: terminal colour names
/// in any case with `_`, `-` or spaces (`dark_gray`, `light-red`), `#rrggbb`
/// hex and bare 256-colour indices. `indexed:N` is also accepted.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    let s = s.strip_prefix("indexed:").unwrap_or(s);
    match Color::from_str(s) {
        Ok(c) => Some(c),
        Err(_) => {
            tracing::warn!(colour = s, "unrecognised theme colour, ignoring");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
