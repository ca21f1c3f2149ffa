use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::state::{AppState, FETCH_ERROR_MESSAGE};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let spinner = SPINNER_FRAMES[(state.frame_tick as usize) % SPINNER_FRAMES.len()];
    let city = state.active_city.as_deref().unwrap_or("…");

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{spinner} "), Style::default().fg(Color::Cyan)),
            Span::raw(format!("Fetching weather for {city}")),
        ]),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Loading"));
    frame.render_widget(panel, area);
}

pub fn render_error(frame: &mut Frame, area: Rect, state: &AppState) {
    let message = state.last_error.as_deref().unwrap_or(FETCH_ERROR_MESSAGE);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::LightRed),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Ctrl-R to retry",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    "Error",
                    Style::default()
                        .fg(Color::LightRed)
                        .add_modifier(Modifier::BOLD),
                ))
                .border_style(Style::default().fg(Color::LightRed)),
        );
    frame.render_widget(panel, area);
}

pub fn render_idle(frame: &mut Frame, area: Rect) {
    let panel = Paragraph::new("Type a city name and press Enter.")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(panel, area);
}
