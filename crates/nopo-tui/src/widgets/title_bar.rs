//! Title bar widget: the one-line strip at the top of the screen.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

/// Application title and catalogue size on the left, keybinding hints
/// (`q:quit  ?:help`) right-aligned in the same row.
pub struct TitleBar<'a> {
    catalog_len: usize,
    theme: &'a Theme,
}

impl<'a> TitleBar<'a> {
    pub fn new(catalog_len: usize, theme: &'a Theme) -> Self {
        Self { catalog_len, theme }
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" 노포식당 검색기 · {} restaurants ", self.catalog_len);
        buf.set_stringn(area.x, area.y, title, area.width as usize, self.theme.result_name);

        let hint = " q:quit  ?:help ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(hint_x, area.y, hint, Style::default().add_modifier(Modifier::DIM));
    }
}
