use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState, Tabs, Wrap},
};

use super::app::{GRID_COLUMNS, InputMode, TuiApp};
use crate::presentation::{parse_hex_color, truncate};
use beanshelf_runtime::views::LOADING_MESSAGE;
use beanshelf_runtime::{DetailView, GalleryView, ListView, Screen};
use beanshelf_types::{Bean, Origin, stable_id};

const CARD_HEIGHT: u16 = 6;
const IMAGE_PANE_WIDTH: u16 = 26;
const PLACEHOLDER: &str = "no image";

pub(crate) fn draw(f: &mut Frame, app: &TuiApp) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(f.area());

    render_tabs(f, header, app);

    match app.browser.screen() {
        Screen::List(view) => render_list(f, body, view, app),
        Screen::Gallery(view) => render_gallery(f, body, view, app.selected),
        Screen::Detail(view) => render_detail(f, body, view),
        Screen::NotFound(path) => render_not_found(f, body, path),
    }

    render_footer(f, footer, app);
}

fn render_tabs(f: &mut Frame, area: Rect, app: &TuiApp) {
    let selected: usize = match app.browser.screen() {
        Screen::Gallery(_) => 1,
        Screen::Detail(view) if view.origin() == Some(Origin::Gallery) => 1,
        _ => 0,
    };

    let tabs = Tabs::new(vec!["List", "Gallery"])
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(tabs, area);
}

fn render_list(f: &mut Frame, area: Rect, view: &ListView, app: &TuiApp) {
    let [search_area, table_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let cursor = if app.mode == InputMode::Search { "_" } else { "" };
    let search = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}{}", view.search, cursor)),
        Span::styled(
            format!("   sort: {} {}", view.sort_key, view.sort_dir),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(search), search_area);

    if view.load.is_loading() {
        render_message(f, table_area, LOADING_MESSAGE);
        return;
    }

    let beans = view.visible();
    if beans.is_empty() {
        render_message(f, table_area, "No beans match.");
        return;
    }

    let rows: Vec<Row> = beans
        .iter()
        .enumerate()
        .map(|(index, bean)| {
            Row::new(vec![
                stable_id(bean, index),
                bean.name.clone(),
                bean.group.clone(),
                truncate(&bean.description, 80),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(24),
        Constraint::Length(24),
        Constraint::Length(14),
        Constraint::Min(10),
    ];
    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["ID", "NAME", "GROUP", "DESCRIPTION"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .row_highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(table, table_area, &mut state);
}

fn render_gallery(f: &mut Frame, area: Rect, view: &GalleryView, selected: usize) {
    let [chips_area, grid_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

    let chips: Vec<Span> = view
        .buckets()
        .iter()
        .enumerate()
        .map(|(index, bucket)| {
            let label = if index < 9 {
                format!("[{}] {}  ", index + 1, bucket)
            } else {
                format!("{}  ", bucket)
            };
            let style = if view.is_active(bucket) {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(label, style)
        })
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(chips)).wrap(Wrap { trim: true }),
        chips_area,
    );

    if view.load.is_loading() {
        render_message(f, grid_area, LOADING_MESSAGE);
        return;
    }

    let beans = view.visible();
    if beans.is_empty() {
        render_message(f, grid_area, "No buckets selected.");
        return;
    }

    let rows_fit = (grid_area.height / CARD_HEIGHT).max(1) as usize;
    let first_row = (selected / GRID_COLUMNS).saturating_sub(rows_fit - 1);

    for row in 0..rows_fit {
        let y = grid_area.y + (row as u16) * CARD_HEIGHT;
        if y + CARD_HEIGHT > grid_area.bottom() {
            break;
        }
        let row_area = Rect::new(grid_area.x, y, grid_area.width, CARD_HEIGHT);
        let cells = Layout::horizontal([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(row_area);

        for (column, cell) in cells.iter().enumerate() {
            let index = (first_row + row) * GRID_COLUMNS + column;
            if let Some(bean) = beans.get(index) {
                render_card(f, *cell, bean, index == selected);
            }
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, bean: &Bean, selected: bool) {
    let width = area.width.saturating_sub(2) as usize;
    let border = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let image = if bean.has_image() {
        Line::from(truncate(&bean.image_url, width))
    } else {
        Line::styled(
            format!("[ {} ]", PLACEHOLDER),
            Style::default().fg(Color::DarkGray),
        )
    };

    let lines = vec![
        Line::styled(bean.bucket(), Style::default().fg(Color::Cyan)),
        image,
        Line::from(truncate(&bean.description, width * 2)),
    ];

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::bordered()
            .title(truncate(&bean.name, width))
            .border_style(border),
    );
    f.render_widget(card, area);
}

fn render_detail(f: &mut Frame, area: Rect, view: &DetailView) {
    let Some(bean) = view.bean() else {
        render_message(f, area, view.message().unwrap_or_default());
        return;
    };

    let [content, nav] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let [image_area, info_area] =
        Layout::horizontal([Constraint::Length(IMAGE_PANE_WIDTH), Constraint::Min(0)])
            .areas(content);

    let image = if bean.has_image() {
        Paragraph::new(bean.image_url.as_str()).wrap(Wrap { trim: false })
    } else {
        Paragraph::new(PLACEHOLDER)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
    };
    f.render_widget(image.block(Block::bordered().title("Image")), image_area);

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::styled(bean.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Line::default(),
        Line::from(vec![Span::styled("Id:     ", label), Span::raw(view.id())]),
    ];
    if !bean.group.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Group:  ", label),
            Span::raw(bean.group.as_str()),
        ]));
    }
    if !bean.color.is_empty() {
        let mut spans = vec![Span::styled("Color:  ", label)];
        if let Some((r, g, b)) = parse_hex_color(&bean.color) {
            spans.push(Span::styled("    ", Style::default().bg(Color::Rgb(r, g, b))));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw(bean.color.as_str()));
        lines.push(Line::from(spans));
    }
    if let Some(context) = view.context().filter(|ctx| !ctx.ids.is_empty()) {
        lines.push(Line::from(vec![
            Span::styled("Item:   ", label),
            Span::raw(format!("{} of {}", context.index + 1, context.ids.len())),
        ]));
    }
    if !bean.description.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(bean.description.as_str()));
    }

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::NONE)),
        info_area.inner(Margin::new(1, 0)),
    );

    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);
    let nav_line = Line::from(vec![
        Span::styled("← Prev", if view.has_prev() { enabled } else { disabled }),
        Span::raw("   "),
        Span::styled("Next →", if view.has_next() { enabled } else { disabled }),
    ]);
    f.render_widget(Paragraph::new(nav_line).alignment(Alignment::Center), nav);
}

fn render_not_found(f: &mut Frame, area: Rect, path: &str) {
    render_message(f, area, &format!("Nothing at {}", path));
}

fn render_message(f: &mut Frame, area: Rect, message: &str) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    f.render_widget(
        Paragraph::new(message).alignment(Alignment::Center),
        middle,
    );
}

fn render_footer(f: &mut Frame, area: Rect, app: &TuiApp) {
    let (source, hints) = match app.browser.screen() {
        Screen::List(view) => (
            view.load.source(),
            if app.mode == InputMode::Search {
                "type to filter  Enter/Esc done"
            } else {
                "↑↓ select  Enter open  / search  s sort  d direction  Tab gallery  q quit"
            },
        ),
        Screen::Gallery(view) => (
            view.load.source(),
            "arrows select  Enter open  1-9 buckets  Tab list  q quit",
        ),
        Screen::Detail(_) => (None, "←/h prev  →/l next  Esc back  Tab switch  q quit"),
        Screen::NotFound(_) => (None, "Esc back  Tab list  q quit"),
    };

    let mut spans = Vec::new();
    if let Some(source) = source {
        spans.push(Span::styled(
            format!("source: {}  ", source),
            Style::default().fg(Color::Cyan),
        ));
    }
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}
