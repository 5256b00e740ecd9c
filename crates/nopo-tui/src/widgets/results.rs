//! Results pane: the scrollable list of matches above the search form.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Scroll up one line |
//! | `↓` / `j` | Scroll down one line |
//! | `PageUp` / `Ctrl+u` | Scroll up one page |
//! | `PageDown` / `Ctrl+d` | Scroll down one page |
//! | `g` / `G` | Jump to top / bottom |
//!
//! Each match renders as its name, decoded address, one line per menu item
//! with the price as stored, and a separator. The searched keyword is
//! highlighted on the line it matched.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use nopo_core::{normalizer, render::NO_RESULTS, Query, Restaurant, SearchField};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// The outcome of the last accepted search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub query: Query,
    /// Owned copies of the matches; menu searches hold reshaped records.
    pub records: Vec<Restaurant>,
}

impl SearchResults {
    /// Rendered line count: name, address, menu items, separator.
    pub fn line_count(&self) -> usize {
        self.records.iter().map(|r| r.menu.len() + 3).sum()
    }
}

#[derive(Debug)]
pub struct ResultsState {
    /// `None` until the first search has run.
    pub results: Option<SearchResults>,
    /// Index of the first visible line.
    pub scroll: usize,
    /// Width of the `=` separator between matches.
    pub separator_width: usize,
    /// Cached from the last render so `handle()` can page.
    last_height: Cell<usize>,
}

impl Default for ResultsState {
    fn default() -> Self {
        Self::new(nopo_core::render::DEFAULT_SEPARATOR_WIDTH)
    }
}

impl ResultsState {
    pub fn new(separator_width: usize) -> Self {
        Self {
            results: None,
            scroll: 0,
            separator_width,
            last_height: Cell::new(20),
        }
    }

    /// Replace the displayed results and scroll back to the top.
    pub fn show(&mut self, results: SearchResults) {
        tracing::debug!(hits = results.records.len(), "results: replaced");
        self.results = Some(results);
        self.scroll = 0;
    }

    pub fn clear(&mut self) {
        self.results = None;
        self.scroll = 0;
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    fn max_scroll(&self) -> usize {
        let total = self.results.as_ref().map_or(0, SearchResults::line_count);
        total.saturating_sub(self.height())
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        let max = self.max_scroll();
        let page = self.height();
        self.scroll = match event {
            AppEvent::Nav(Direction::Up) => self.scroll.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => (self.scroll + 1).min(max),
            AppEvent::ScrollUp => self.scroll.saturating_sub(page),
            AppEvent::ScrollDown => (self.scroll + page).min(max),
            AppEvent::ScrollToTop => 0,
            AppEvent::ScrollToBottom => max,
            _ => return,
        };
        tracing::debug!(scroll = self.scroll, max, "results: scrolled");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultsPane<'a> {
    state: &'a ResultsState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ResultsPane<'a> {
    pub fn new(state: &'a ResultsState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }
}

impl Widget for ResultsPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let title = match &self.state.results {
            Some(r) => format!("Results ({})", r.records.len()),
            None => "Results".to_string(),
        };
        let block = Block::bordered().title(title).border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        self.state.last_height.set(height);

        let Some(results) = &self.state.results else {
            Paragraph::new(Line::from(Span::styled(
                "choose a field, type a keyword, press Enter",
                Style::default().add_modifier(Modifier::DIM),
            )))
            .render(inner, buf);
            return;
        };

        if results.records.is_empty() {
            Paragraph::new(Line::from(Span::styled(NO_RESULTS, self.theme.result_empty)))
                .render(inner, buf);
            return;
        }

        let lines = result_lines(results, self.state.separator_width, self.theme);
        let total = lines.len();
        let start = self.state.scroll.min(total);
        let end = (start + height).min(total);
        let visible: Vec<Line<'static>> = lines[start..end].to_vec();

        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect { x: inner.right().saturating_sub(1), width: 1, ..inner };

        Paragraph::new(visible).render(text_area, buf);

        if total > height {
            let mut sb_state = ScrollbarState::new(total)
                .position(start)
                .viewport_content_length(height);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Line building
// ---------------------------------------------------------------------------

fn result_lines(results: &SearchResults, separator_width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let query = &results.query;
    let keyword = query.keyword.as_str();
    let target_price = (query.field == SearchField::Price).then(|| normalizer::normalize_text(keyword));
    let hl = theme.search_highlight;

    let mut lines = Vec::with_capacity(results.line_count());
    for r in &results.records {
        let name_kw = if query.field == SearchField::Name { keyword } else { "" };
        lines.push(Line::from(highlight(&r.name, name_kw, theme.result_name, hl)));

        let address = r.decoded_address();
        let addr_kw = if query.field == SearchField::Address { keyword } else { "" };
        let mut spans = vec![Span::raw("  ")];
        spans.extend(highlight(&address, addr_kw, theme.result_address, hl));
        lines.push(Line::from(spans));

        for item in &r.menu {
            let menu_kw = if query.field == SearchField::MenuName { keyword } else { "" };
            let price_style = match target_price {
                Some(p) if normalizer::normalize_price(&item.price) == p => hl,
                _ => theme.result_price,
            };
            let mut spans = vec![Span::raw("  - ")];
            spans.extend(highlight(&item.name, menu_kw, theme.result_menu, hl));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(item.price.to_string(), price_style));
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(Span::styled("=".repeat(separator_width), theme.result_separator)));
    }
    lines
}

/// Split `text` into spans, styling every occurrence of `keyword` with
/// `highlight`. An empty keyword highlights nothing.
fn highlight(text: &str, keyword: &str, base: Style, highlight: Style) -> Vec<Span<'static>> {
    if keyword.is_empty() {
        return vec![Span::styled(text.to_string(), base)];
    }
    let mut spans = Vec::new();
    let mut last = 0;
    for (i, m) in text.match_indices(keyword) {
        if i > last {
            spans.push(Span::styled(text[last..i].to_string(), base));
        }
        spans.push(Span::styled(m.to_string(), highlight));
        last = i + m.len();
    }
    if last < text.len() {
        spans.push(Span::styled(text[last..].to_string(), base));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
