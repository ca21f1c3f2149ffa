use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    cli::IconMode,
    domain::{
        advice::{humidity_label, wind_label},
        forecast::{CurrentWeather, Units, icon_glyph},
    },
};

pub fn render(frame: &mut Frame, area: Rect, current: &CurrentWeather, units: Units, icons: IconMode) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Current Weather in {}", current.location));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 4 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(inner);

    let glyph = current
        .icon
        .as_deref()
        .map_or("·", |token| icon_glyph(token, icons));
    let headline = Line::from(vec![
        Span::styled(format!("{glyph} "), Style::default().fg(Color::Yellow)),
        Span::styled(
            current.description.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(headline).alignment(Alignment::Center), rows[0]);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    highlight(
        frame,
        cells[0],
        "Temperature",
        &format!("{}{}", current.temperature, units.temp_suffix()),
        "Feels like normal",
    );
    highlight(
        frame,
        cells[1],
        "Humidity",
        &format!("{}%", current.humidity),
        humidity_label(current.humidity),
    );
    highlight(
        frame,
        cells[2],
        "Wind Speed",
        &format!("{} {}", current.wind_speed, units.wind_suffix()),
        wind_label(current.wind_speed, units),
    );
}

fn highlight(frame: &mut Frame, area: Rect, title: &str, value: &str, label: &str) {
    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            value.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
