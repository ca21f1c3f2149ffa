use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    cli::IconMode,
    domain::forecast::{DailySummary, ForecastSample, Units, icon_glyph, summarize},
};

/// Summaries are derived from the sample collection on every render, never
/// stored on the state.
pub fn render(frame: &mut Frame, area: Rect, samples: &[ForecastSample], units: Units, icons: IconMode) {
    let block = Block::default().borders(Borders::ALL).title("3-Day Forecast");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let summaries = summarize(samples);
    if summaries.is_empty() {
        let placeholder = Paragraph::new("No forecast data for this location.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    }

    let constraints: Vec<Constraint> = summaries
        .iter()
        .map(|_| Constraint::Ratio(1, summaries.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (summary, column) in summaries.iter().zip(columns.iter()) {
        render_card(frame, *column, summary, units, icons);
    }
}

fn render_card(frame: &mut Frame, area: Rect, summary: &DailySummary, units: Units, icons: IconMode) {
    let lines = vec![
        Line::from(Span::styled(
            summary.day_label.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            summary.date_label.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            icon_glyph(&summary.icon, icons).to_string(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            format!("{}{}", summary.mean_temperature, units.temp_suffix()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("H: {}°", summary.max_temperature),
                Style::default().fg(Color::LightBlue),
            ),
            Span::raw("  "),
            Span::styled(
                format!("L: {}°", summary.min_temperature),
                Style::default().fg(Color::Blue),
            ),
        ]),
        Line::from(Span::styled(
            summary.description.clone(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}
