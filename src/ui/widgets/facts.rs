use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

// The default-city trivia shown on the original page, kept verbatim.
const FUN_FACTS: [&str; 4] = [
    "Nairobi means 'cool water' in the Maasai language",
    "The city sits at 1,795 meters above sea level",
    "July is typically the coolest month in Nairobi",
    "Nairobi National Park is the only wildlife park in a capital city",
];

pub fn render(frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Did You Know?");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = FUN_FACTS
        .iter()
        .map(|fact| Line::from(format!("• {fact}")))
        .collect();

    let body = Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(body, inner);
}
