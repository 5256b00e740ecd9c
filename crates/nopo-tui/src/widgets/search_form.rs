//! Search form widget: field selector, keyword input and the optional price
//! input, docked at the bottom of the screen.
//!
//! # Editing
//!
//! - On the field selector, `←`/`→` (or `h`/`l`) cycle through the four
//!   search fields.
//! - On the keyword and price inputs, characters are inserted at the cursor.
//! - The price input is only shown, and only validated, for menu searches.
//! - Validation errors are shown on the second row until the next submit.

use super::text_input::TextInput;
use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use nopo_core::{InputError, Query, SearchField, SearchForm};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

const FIELD_WIDTH: u16 = 12;
const PRICE_WIDTH: u16 = 22;
const KEYWORD_LABEL: &str = "keyword: ";
const PRICE_LABEL: &str = "price: ";

/// Which part of the form holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSlot {
    Field,
    Keyword,
    Price,
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SearchFormState {
    pub field: SearchField,
    pub keyword: TextInput,
    pub price: TextInput,
    /// Message from the last rejected submit.
    pub error: Option<String>,
}

impl SearchFormState {
    pub fn new(field: SearchField) -> Self {
        Self { field, ..Default::default() }
    }

    /// Snapshot of the raw form contents.
    pub fn to_form(&self) -> SearchForm {
        SearchForm::new(self.field, self.keyword.value.clone()).with_price(self.price.value.clone())
    }

    /// Validate the current input, recording any error for display.
    pub fn submit(&mut self) -> Result<Query, InputError> {
        let result = self.to_form().submit();
        match &result {
            Ok(_) => self.error = None,
            Err(e) => {
                tracing::debug!(error = %e, "form: rejected");
                self.error = Some(e.to_string());
            }
        }
        result
    }

    pub fn set_field(&mut self, field: SearchField) {
        tracing::debug!(from = %self.field, to = %field, "form: field changed");
        self.field = field;
    }

    /// Handle an event routed to `slot`.
    pub fn handle(&mut self, slot: FormSlot, event: &AppEvent) {
        match slot {
            FormSlot::Field => match event {
                AppEvent::Nav(Direction::Left) => self.set_field(self.field.prev()),
                AppEvent::Nav(Direction::Right) => self.set_field(self.field.next()),
                _ => {}
            },
            FormSlot::Keyword => {
                if self.keyword.handle(event) {
                    tracing::debug!(keyword = %self.keyword.value, "form: keyword edited");
                }
            }
            FormSlot::Price => {
                if self.price.handle(event) {
                    tracing::debug!(price = %self.price.value, "form: price edited");
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SearchFormBar<'a> {
    state: &'a SearchFormState,
    focus: Option<FormSlot>,
    theme: &'a Theme,
}

impl<'a> SearchFormBar<'a> {
    pub fn new(state: &'a SearchFormState, focus: Option<FormSlot>, theme: &'a Theme) -> Self {
        Self { state, focus, theme }
    }

    /// Split the inner area into (field, keyword, price) cells on the first
    /// row. The price cell has zero width unless the field takes a price.
    fn cells(&self, inner: Rect) -> [Rect; 3] {
        let row = Rect { height: 1.min(inner.height), ..inner };
        let price_width = if self.state.field.takes_price() { PRICE_WIDTH } else { 0 };
        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([
                Constraint::Length(FIELD_WIDTH),
                Constraint::Fill(1),
                Constraint::Length(price_width),
            ])
            .split(row);
        [chunks[0], chunks[1], chunks[2]]
    }

    /// Absolute terminal position of the text cursor for a text slot.
    /// Returns `None` for the field selector.
    pub fn cursor_position(&self, area: Rect) -> Option<(u16, u16)> {
        let inner = Block::bordered().inner(area);
        let [_, keyword, price] = self.cells(inner);
        let (cell, label, input) = match self.focus? {
            FormSlot::Field => return None,
            FormSlot::Keyword => (keyword, KEYWORD_LABEL, &self.state.keyword),
            FormSlot::Price => (price, PRICE_LABEL, &self.state.price),
        };
        let x = cell.x + label.len() as u16 + input.cursor_width();
        Some((x.min(cell.right().saturating_sub(1)), cell.y))
    }
}

impl Widget for SearchFormBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focus.is_some() {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().title("Search").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let [field_cell, keyword_cell, price_cell] = self.cells(inner);
        let dim = Style::default().add_modifier(Modifier::DIM);

        // Field selector:  ◂ 메뉴 ▸
        let mut field_style = self.theme.form_field;
        if self.focus == Some(FormSlot::Field) {
            field_style = field_style.add_modifier(Modifier::REVERSED);
        }
        Paragraph::new(Line::from(Span::styled(
            format!("◂ {} ▸", self.state.field.label()),
            field_style,
        )))
        .render(field_cell, buf);

        // Keyword input
        let keyword = if self.state.keyword.value.is_empty() && self.focus.is_none() {
            Span::styled("press / to search", dim)
        } else {
            Span::raw(self.state.keyword.value.as_str())
        };
        Paragraph::new(Line::from(vec![Span::styled(KEYWORD_LABEL, dim), keyword]))
            .render(keyword_cell, buf);

        // Price input (menu search only)
        if self.state.field.takes_price() {
            let price = if self.state.price.value.is_empty() && self.focus != Some(FormSlot::Price) {
                Span::styled("optional", dim)
            } else {
                Span::raw(self.state.price.value.as_str())
            };
            Paragraph::new(Line::from(vec![Span::styled(PRICE_LABEL, dim), price]))
                .render(price_cell, buf);
        }

        // Second row: validation error or a hint
        if inner.height > 1 {
            let row = Rect { y: inner.y + 1, height: 1, ..inner };
            let line = match &self.state.error {
                Some(err) => Line::from(Span::styled(err.as_str(), self.theme.form_error)),
                None if self.focus == Some(FormSlot::Field) => {
                    Line::from(Span::styled("←/→ change field · Enter search", dim))
                }
                None => Line::default(),
            };
            Paragraph::new(line).render(row, buf);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
