//! Dashboard screen: stat cards, two distribution panels, search controls,
//! and the filtered product table.

use crate::app::{DashboardState, FetchState};
use crate::views::{block_bar, rating_text, truncate_for_display};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use storelens_engine::{category_histogram, price_histogram, summarize};
use storelens_types::Product;

const CHART_BAR_WIDTH: usize = 16;

pub fn render(frame: &mut Frame, state: &DashboardState) {
    match &state.fetch {
        FetchState::Idle | FetchState::Loading => {
            render_notice(frame, "Loading products...", Style::default().add_modifier(Modifier::DIM));
        }
        FetchState::Failed(message) => {
            render_notice(frame, message, Style::default().fg(Color::Red));
        }
        FetchState::Loaded(items) => render_loaded(frame, state, items),
    }
}

fn render_notice(frame: &mut Frame, text: &str, style: Style) {
    let block = Block::default().title("storelens").borders(Borders::ALL);
    let paragraph = Paragraph::new(text.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, frame.area());
}

fn render_loaded(frame: &mut Frame, state: &DashboardState, items: &[Product]) {
    // Charts are skipped entirely for an empty catalog.
    let constraints = if items.is_empty() {
        vec![
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ]
    } else {
        vec![
            Constraint::Length(5),
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ]
    };
    let chunks = Layout::vertical(constraints).split(frame.area());

    let mut next = 0;
    render_stat_cards(frame, chunks[next], items);
    next += 1;
    if !items.is_empty() {
        render_charts(frame, chunks[next], items);
        next += 1;
    }
    render_controls(frame, chunks[next], state);
    render_table(frame, chunks[next + 1], state);
    render_footer(frame, chunks[next + 2], state);
}

fn render_stat_cards(frame: &mut Frame, area: Rect, items: &[Product]) {
    let stats = summarize(items);
    let cards = [
        ("Total products", stats.total.to_string()),
        ("Average price", format!("${:.2}", stats.avg_price)),
        ("Median price", format!("${:.2}", stats.median_price)),
        ("Average rating", format!("{:.2}", stats.avg_rating)),
    ];

    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    for (column, (label, value)) in columns.iter().zip(cards) {
        let block = Block::default().title(label).borders(Borders::ALL);
        let paragraph = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(paragraph, *column);
    }
}

fn render_charts(frame: &mut Frame, area: Rect, items: &[Product]) {
    let halves = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(area);

    let buckets = price_histogram(items);
    let price_max = buckets.iter().map(|b| b.count).max().unwrap_or(0);
    let price_lines: Vec<Line> = buckets
        .iter()
        .map(|bucket| {
            Line::from(vec![
                Span::raw(format!("{:<8} ", bucket.label)),
                Span::styled(
                    block_bar(bucket.count, price_max, CHART_BAR_WIDTH),
                    Style::default().fg(Color::Magenta),
                ),
                Span::raw(format!(" {}", bucket.count)),
            ])
        })
        .collect();
    let price_panel = Paragraph::new(price_lines)
        .block(Block::default().title("Price Distribution").borders(Borders::ALL));
    frame.render_widget(price_panel, halves[0]);

    let counts = category_histogram(items);
    let label_width = counts
        .iter()
        .map(|c| c.category.chars().count())
        .max()
        .unwrap_or(0)
        .min(18);
    let category_lines: Vec<Line> = counts
        .iter()
        .map(|entry| {
            let share = entry.count as f64 / items.len() as f64 * 100.0;
            Line::from(vec![
                Span::raw(format!(
                    "{:<width$} ",
                    truncate_for_display(&entry.category, label_width),
                    width = label_width
                )),
                Span::styled(
                    block_bar(entry.count, items.len(), CHART_BAR_WIDTH),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!(" {} ({:.0}%)", entry.count, share)),
            ])
        })
        .collect();
    let category_panel = Paragraph::new(category_lines)
        .block(Block::default().title("Category Distribution").borders(Borders::ALL));
    frame.render_widget(category_panel, halves[1]);
}

fn render_controls(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let halves = Layout::horizontal([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)]).split(area);

    let search = Paragraph::new(Line::from(vec![
        Span::raw(state.query.clone()),
        Span::styled("▏", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]))
    .block(Block::default().title("Search (type to filter)").borders(Borders::ALL));
    frame.render_widget(search, halves[0]);

    let options = state.category_options();
    let category = Paragraph::new(Line::from(vec![
        Span::raw("◀ "),
        Span::styled(
            state.current_category(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" ▶  {}/{}", state.category_index + 1, options.len())),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().title("Category").borders(Borders::ALL));
    frame.render_widget(category, halves[1]);
}

fn render_table(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let filtered = state.filtered();

    let block = Block::default()
        .title(format!("Products ({})", filtered.len()))
        .borders(Borders::ALL);

    if filtered.is_empty() {
        let empty = Paragraph::new("No products match your query")
            .style(Style::default().add_modifier(Modifier::DIM))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let title_width = (area.width as usize).saturating_sub(50).clamp(20, 70);
    let rows: Vec<Row> = filtered
        .iter()
        .map(|product| {
            Row::new(vec![
                Cell::from(product.id.to_string()),
                Cell::from(truncate_for_display(&product.title, title_width)),
                Cell::from(product.category.clone()),
                Cell::from(format!("${:.2}", product.price)),
                Cell::from(rating_text(product.rating.as_ref())),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Min(20),
            Constraint::Length(18),
            Constraint::Length(9),
            Constraint::Length(11),
        ],
    )
    .header(Row::new(["ID", "TITLE", "CATEGORY", "PRICE", "RATING"]).style(
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
    .row_highlight_style(Style::default().bg(Color::Rgb(30, 40, 60)).add_modifier(Modifier::BOLD))
    .block(block);

    let mut table_state = TableState::default();
    table_state.select(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let mut spans = vec![Span::styled(
        "type to search  ←/→ category  ↑/↓ select  Enter detail  Esc quit",
        Style::default().add_modifier(Modifier::DIM),
    )];
    if let Some(fetched_at) = state.fetched_at {
        spans.push(Span::styled(
            format!("  |  fetched {}", fetched_at.format("%H:%M:%S")),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
