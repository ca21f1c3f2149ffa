use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::domain::{
    advice::weather_tips,
    forecast::{CurrentWeather, Units},
};

pub fn render(frame: &mut Frame, area: Rect, current: &CurrentWeather, units: Units) {
    let block = Block::default().borders(Borders::ALL).title("Weather Tips");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = weather_tips(current, units)
        .into_iter()
        .map(|tip| {
            Line::from(vec![
                Span::styled(format!("{} ", tip.icon), Style::default().fg(Color::Cyan)),
                Span::styled(tip.title, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!(": {}", tip.message), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
