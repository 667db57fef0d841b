use super::app::{App, Focus};
use moviedesk::{EMPTY_LIST, MovieApi, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

pub fn draw<A: MovieApi>(f: &mut Frame, app: &mut App<A>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with stats
            Constraint::Min(10),   // Form | list
            Constraint::Length(1), // Key help
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    let genre_rect = draw_form(f, app, body[0]);
    draw_movies(f, app, body[1]);
    draw_help(f, app, chunks[2]);

    if app.popup_open && !app.suggestions.is_empty() {
        draw_suggestions(f, app, genre_rect);
    }

    if let Some(id) = app.controller.pending_delete() {
        let title = app
            .controller
            .find(id)
            .map(|movie| movie.title.clone())
            .unwrap_or_else(|| format!("#{}", id));
        draw_confirm_delete(f, &title);
    }
}

fn draw_header<A: MovieApi>(f: &mut Frame, app: &App<A>, area: Rect) {
    let stats = app.controller.stats();
    let line = Line::from(vec![
        Span::styled(
            " Movies CRUD ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Movies: "),
        Span::styled(
            stats.count.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Avg rating: "),
        Span::styled(
            stats.average_label(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    f.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

/// Returns the genre input area, where the suggestion popup anchors
fn draw_form<A: MovieApi>(f: &mut Frame, app: &App<A>, area: Rect) -> Rect {
    let mode = app.controller.mode();
    let border = if mode.is_editing() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} ", mode.heading()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Edit badge
            Constraint::Length(3), // Title
            Constraint::Length(3), // Year
            Constraint::Length(3), // Genre
            Constraint::Length(3), // Rating
            Constraint::Length(1), // Buttons
            Constraint::Min(1),    // Status
        ])
        .split(inner);

    if let Some(id) = mode.editing_id() {
        f.render_widget(
            Paragraph::new(Span::styled(
                format!(" Editing #{} ", id),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            rows[0],
        );
    }

    for (idx, input) in app.inputs.iter().enumerate() {
        f.render_widget(input, rows[idx + 1]);
    }

    let buttons = Line::from(vec![
        Span::styled("[Ctrl+S] ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            mode.submit_label(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("   [Ctrl+R] ", Style::default().fg(Color::DarkGray)),
        Span::raw(mode.reset_label()),
    ]);
    f.render_widget(Paragraph::new(buttons), rows[5]);

    if let Some(status) = app.controller.status() {
        f.render_widget(
            Paragraph::new(Span::styled(status.to_string(), status_style(status)))
                .wrap(Wrap { trim: true }),
            rows[6],
        );
    }

    rows[3]
}

fn status_style(status: &Status) -> Style {
    if status.is_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Yellow)
    }
}

fn draw_movies<A: MovieApi>(f: &mut Frame, app: &mut App<A>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let filters = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(rows[0]);

    f.render_widget(&app.search, filters[0]);

    let selector = |title: &str, value: String| {
        Paragraph::new(value).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
    };
    let current = app.controller.filters();
    f.render_widget(selector("Genre [g]", current.genre.to_string()), filters[1]);
    f.render_widget(selector("Sort [s]", current.sort.to_string()), filters[2]);

    let border = if app.focus == Focus::List {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(" Movies ");

    let visible = app.controller.visible();
    if visible.is_empty() {
        f.render_widget(
            Paragraph::new(EMPTY_LIST)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .block(block),
            rows[1],
        );
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|movie| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    movie.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" ({})", movie.year),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::styled(
                    format!(" {} ", movie.genre),
                    Style::default().bg(Color::DarkGray),
                ),
                Span::raw(format!("  ★ {}", movie.rating_label())),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, rows[1], &mut app.list_state);
}

fn draw_help<A: MovieApi>(f: &mut Frame, app: &App<A>, area: Rect) {
    let help = match app.focus {
        Focus::List => "↑/↓ select  e edit  d delete  g genre  s sort  r refresh  Tab focus  Esc quit",
        _ => "Tab focus  Ctrl+S submit  Ctrl+R clear/cancel  F5 refresh  Esc quit",
    };
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn draw_suggestions<A: MovieApi>(f: &mut Frame, app: &App<A>, anchor: Rect) {
    let width = 30.min(f.area().width);
    let height = (app.suggestions.len() as u16 + 2).min(7);

    let area = Rect::new(
        (anchor.x + 1).min(f.area().width.saturating_sub(width)),
        (anchor.y + anchor.height).min(f.area().height.saturating_sub(height)),
        width,
        height.min(f.area().height),
    );

    f.render_widget(Clear, area); // Clear underlying text

    let items: Vec<ListItem> = app
        .suggestions
        .iter()
        .map(|s| ListItem::new(s.as_str()))
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.suggestion_index));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Genres"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut state);
}

fn draw_confirm_delete(f: &mut Frame, title: &str) {
    let area = centered(f.area(), 44, 5);
    f.render_widget(Clear, area);

    let text = vec![
        Line::from(format!("Delete \"{}\"?", title)),
        Line::from(Span::styled(
            "y: delete   n: keep",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Delete this movie? "),
        ),
        area,
    );
}

fn centered(outer: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    Rect::new(
        outer.x + (outer.width - width) / 2,
        outer.y + (outer.height - height) / 2,
        width,
        height,
    )
}
