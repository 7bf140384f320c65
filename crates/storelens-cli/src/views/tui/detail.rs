//! Product detail screen.

use crate::app::{DetailState, FetchState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use storelens_types::Product;

pub fn render(frame: &mut Frame, state: &DetailState) {
    match &state.fetch {
        FetchState::Idle | FetchState::Loading => {
            render_notice(frame, state, "Loading product details...", Style::default().add_modifier(Modifier::DIM));
        }
        FetchState::Failed(message) => {
            render_notice(frame, state, message, Style::default().fg(Color::Red));
        }
        FetchState::Loaded(None) => {
            let text = format!("Product {} not found", state.id);
            render_notice(frame, state, &text, Style::default().fg(Color::Yellow));
        }
        FetchState::Loaded(Some(product)) => render_product(frame, product),
    }
}

fn render_notice(frame: &mut Frame, state: &DetailState, text: &str, style: Style) {
    let block = Block::default()
        .title(format!("Product {}", state.id))
        .borders(Borders::ALL);
    let paragraph = Paragraph::new(format!("{}\n\nEsc: back to dashboard", text))
        .style(style)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, frame.area());
}

fn render_product(frame: &mut Frame, product: &Product) {
    let block = Block::default()
        .title(format!("Product {}", product.id))
        .borders(Borders::ALL);
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::vertical([Constraint::Length(5), Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let rating_line = match &product.rating {
        Some(rating) => format!("★ {} ({} reviews)", rating.rate, rating.count),
        None => "not yet rated".to_string(),
    };
    let header_lines = vec![
        Line::from(Span::styled(
            product.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            product.category.clone(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(vec![
            Span::styled(
                format!("${:.2}", product.price),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::raw(rating_line),
        ]),
        Line::from(Span::styled(
            product.image.clone(),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(header_lines), chunks[0]);

    let description = Paragraph::new(product.description.clone()).wrap(Wrap { trim: false });
    frame.render_widget(description, chunks[1]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Esc: back to dashboard  q: quit",
            Style::default().add_modifier(Modifier::DIM),
        )),
        chunks[2],
    );
}
