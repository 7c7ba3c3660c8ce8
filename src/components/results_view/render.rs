// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! UI rendering logic for the results view.
//!
//! Rows are drawn one per line from the row and tag descriptors, with the
//! utility classes interpreted for a terminal: `opacity-50` dims the row,
//! `uppercase` and `font-medium` shape the tag. Every frame records the drawn
//! rows in the viewport so the results list can find them afterwards.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    components::{
        ResultsView,
        results_list::{
            ContextAction, ResultsListProps, classify,
            presentation::{StyleProperty, has_class},
            tag_of,
        },
        results_view::MenuLayout,
    },
    highlight::{escape_markup, parse_markup},
    model::SearchItem,
    render::icons::{ROW_EDGE, SPINNER, WARNING},
    theme::Theme,
    util::format::display_url,
};

const TAG_WIDTH: u16 = 16;
const URL_SHARE: u16 = 35;
const RETRY_LABEL: &str = " Retry (r) ";

impl ResultsView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, props: &ResultsListProps, theme: &Theme, tick: usize) {
        self.retry_button = None;
        self.menu = None;

        if let Some(error) = props.error {
            self.viewport.set_rows(area, vec![]);
            self.draw_error(f, area, error, theme);
            return;
        }

        if props.items.is_empty() {
            self.viewport.set_rows(area, vec![]);
            let message = if props.is_loading {
                format!("{} Loading\u{2026}", SPINNER[tick % SPINNER.len()])
            } else {
                "No results".to_string()
            };
            draw_centred(f, area, Line::from(message).style(Style::default().fg(theme.text_muted)));
            return;
        }

        self.viewport.set_rows(area, (0..props.items.len()).collect());

        for (line, &index) in self.viewport.visible_rows().iter().enumerate() {
            let row_area = Rect::new(area.x, area.y + line as u16, area.width, 1);
            self.draw_row(f, row_area, props, index, theme);
        }

        if let Some(item) = self.list.context_menu().item().cloned() {
            let (x, y) = (self.list.context_menu().x(), self.list.context_menu().y());
            self.menu = Some(draw_menu(f, x, y, &item, theme));
        }
    }

    fn draw_row(&self, f: &mut Frame, area: Rect, props: &ResultsListProps, index: usize, theme: &Theme) {
        let item = &props.items[index];
        let row = classify(item, index, props.selected_index);

        let mut row_style = Style::default().fg(theme.text_colour);
        if let Some(bg) = row.style.get(&StyleProperty::BackgroundColor).and_then(|v| theme.resolve(*v)) {
            row_style = row_style.bg(bg);
        }
        if has_class(&row.classes, "opacity-50") {
            row_style = row_style.add_modifier(Modifier::DIM);
        }

        let edge = match row.style.get(&StyleProperty::BorderColor).and_then(|v| theme.resolve(*v)) {
            Some(colour) => Span::styled(ROW_EDGE, Style::default().fg(colour)),
            None => Span::raw(" "),
        };

        let mut spans = vec![edge, Span::raw(self.icon_glyph(&item.key())), Span::raw(" ")];
        spans.extend(self.title_spans(item, props.search_query, theme));

        let [main, url, tag] = Layout::horizontal([
            Constraint::Min(10),
            Constraint::Percentage(URL_SHARE),
            Constraint::Length(TAG_WIDTH),
        ])
        .areas(area);

        f.render_widget(Paragraph::new(Line::from(spans)).style(row_style), main);
        f.render_widget(
            Paragraph::new(display_url(item.url(), url.width as usize))
                .style(row_style.fg(theme.text_muted)),
            url,
        );
        f.render_widget(Paragraph::new(tag_line(item, theme)).alignment(Alignment::Right).style(row_style), tag);
    }

    fn title_spans(&self, item: &SearchItem, query: Option<&str>, theme: &Theme) -> Vec<Span<'static>> {
        let markup = match query {
            Some(query) if !query.is_empty() => self.list.highlight(item.title(), Some(query)),
            _ => escape_markup(item.title()),
        };
        let match_style = Style::default().fg(theme.match_colour).add_modifier(Modifier::BOLD);

        parse_markup(&markup)
            .into_iter()
            .map(|fragment| {
                let text = fragment.text.into_owned();
                if fragment.matched { Span::styled(text, match_style) } else { Span::raw(text) }
            })
            .collect()
    }

    fn draw_error(&mut self, f: &mut Frame, area: Rect, error: &str, theme: &Theme) {
        let [message, button] = Layout::vertical([Constraint::Length(2), Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);

        let text = Line::from(format!("{WARNING} {error}")).style(Style::default().fg(theme.error_colour));
        f.render_widget(Paragraph::new(text).alignment(Alignment::Center), message);

        let width = RETRY_LABEL.chars().count() as u16;
        let button = Rect::new(button.x + button.width.saturating_sub(width) / 2, button.y, width.min(button.width), 1);
        let style = Style::default().fg(theme.background_colour).bg(theme.primary_colour);
        f.render_widget(Paragraph::new(RETRY_LABEL).style(style), button);

        self.retry_button = Some(button);
    }
}

fn tag_line(item: &SearchItem, theme: &Theme) -> Line<'static> {
    let tag = tag_of(item);

    let text = if has_class(&tag.classes, "uppercase") { tag.text.to_uppercase() } else { tag.text.to_string() };

    let mut style = Style::default();
    if let Some(bg) = tag.style.get(&StyleProperty::BackgroundColor).and_then(|v| theme.resolve(*v)) {
        style = style.bg(bg);
    }
    if let Some(fg) = tag.style.get(&StyleProperty::Color).and_then(|v| theme.resolve(*v)) {
        style = style.fg(fg);
    }
    if has_class(&tag.classes, "font-medium") {
        style = style.add_modifier(Modifier::BOLD);
    }

    Line::from(Span::styled(format!(" {text} "), style))
}

fn draw_centred(f: &mut Frame, area: Rect, line: Line) {
    let [middle] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), middle);
}

/// Draws the context menu with its top-left corner at the pointer, moved back
/// inside the frame if it would overflow.
fn draw_menu(f: &mut Frame, x: u16, y: u16, item: &SearchItem, theme: &Theme) -> MenuLayout {
    let actions = ContextAction::available_for(item);
    let labels: Vec<String> = actions
        .iter()
        .enumerate()
        .map(|(n, action)| format!(" {} {} ", n + 1, action.label()))
        .collect();

    let frame = f.area();
    let width = (labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16 + 2).min(frame.width);
    let height = (actions.len() as u16 + 2).min(frame.height);

    let area = Rect::new(
        x.min(frame.right().saturating_sub(width)),
        y.min(frame.bottom().saturating_sub(height)),
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .style(Style::default().bg(theme.background_secondary).fg(theme.text_colour));

    let lines: Vec<Line> = labels.into_iter().map(Line::from).collect();

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);

    MenuLayout { area, actions }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{
        components::results_list::{Highlighter, PointerEvent, ResultsList},
        highlight::SmartHighlighter,
        model::fixtures::{bookmark, tab},
    };

    struct Marks;

    impl Highlighter for Marks {
        fn highlight(&self, text: &str, query: &str) -> String {
            text.replace(query, &format!("<mark>{query}</mark>"))
        }
    }

    fn render(view: &mut ResultsView, props: &ResultsListProps, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                view.draw(f, area, props, &Theme::default(), 0);
            })
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn props<'a>(items: &'a [SearchItem]) -> ResultsListProps<'a> {
        ResultsListProps {
            items,
            selected_index: 0,
            is_loading: false,
            error: None,
            search_query: None,
        }
    }

    #[test]
    fn draws_rows_with_tags() {
        let items = vec![tab(1, true, false), bookmark(2, false), tab(3, false, true)];
        let mut view = ResultsView::new(ResultsList::new(Box::new(Marks), None));

        let screen = render(&mut view, &props(&items), 100, 5);
        let rows: Vec<&str> = screen.lines().collect();

        assert!(rows[0].contains("Tab 1") && rows[0].contains("CURRENT PAGE"));
        assert!(rows[1].contains("Bookmark 2") && rows[1].contains("SAVED"));
        assert!(rows[2].contains("CLOSED"));
        assert_eq!(view.viewport.visible_rows(), &[0, 1, 2]);
    }

    #[test]
    fn loading_and_error_states() {
        let mut view = ResultsView::new(ResultsList::new(Box::new(Marks), None));

        let mut loading = props(&[]);
        loading.is_loading = true;
        assert!(render(&mut view, &loading, 40, 5).contains("Loading"));

        let mut failed = props(&[]);
        failed.error = Some("Items file is not valid");
        let screen = render(&mut view, &failed, 60, 6);
        assert!(screen.contains("Items file is not valid"));
        assert!(screen.contains("Retry"));
        assert!(view.retry_button.is_some());
    }

    #[test]
    fn open_menu_is_drawn_and_recorded() {
        let items = vec![tab(1, false, false)];
        let mut view = ResultsView::new(ResultsList::new(Box::new(Marks), None));
        view.list.handle_context_menu(&mut PointerEvent::new(70, 3), &items[0]);

        let screen = render(&mut view, &props(&items), 80, 6);
        assert!(screen.contains("Close tab"));

        let menu = view.menu.clone().unwrap();
        assert_eq!(menu.actions, vec![ContextAction::Navigate, ContextAction::Close]);
        assert!(menu.area.right() <= 80 && menu.area.bottom() <= 6);
    }

    #[test]
    fn title_containing_markup_is_drawn_verbatim() {
        let mut item = bookmark(4, false);
        if let SearchItem::Bookmark(bookmark) = &mut item {
            bookmark.title = "<mark>: The Mark Text element - HTML".to_string();
        }
        let items = vec![item];

        let mut view = ResultsView::new(ResultsList::new(Box::new(SmartHighlighter), None));
        let screen = render(&mut view, &props(&items), 100, 2);
        assert!(screen.lines().next().unwrap().contains("<mark>: The Mark Text element - HTML"));

        let mut with_query = props(&items);
        with_query.search_query = Some("html");
        let screen = render(&mut view, &with_query, 100, 2);
        assert!(screen.lines().next().unwrap().contains("<mark>: The Mark Text element - HTML"));
        assert!(!screen.contains("&lt;"));
    }

    #[test]
    fn highlighted_title_keeps_its_text() {
        let items = vec![bookmark(2, false)];
        let mut view = ResultsView::new(ResultsList::new(Box::new(Marks), None));
        let mut with_query = props(&items);
        with_query.search_query = Some("mark");

        let screen = render(&mut view, &with_query, 100, 3);
        assert!(screen.lines().next().unwrap().contains("Bookmark 2"));
        assert!(!screen.contains("<mark>"));
    }
}
