pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::{AppMode, AppState},
    cli::Cli,
};

pub fn render(frame: &mut Frame, state: &AppState, cli: &Cli) {
    let area = frame.area();

    if area.width < 40 || area.height < 18 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 40x18.")
            .block(Block::default().borders(Borders::ALL).title("skycast"));
        frame.render_widget(warning, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(1),
        ])
        .split(area);

    widgets::search::render(frame, chunks[0], state);

    match state.mode {
        AppMode::Loading => {
            widgets::status::render_loading(frame, centered_rect(60, 30, chunks[1]), state);
        }
        AppMode::Error => {
            widgets::status::render_error(frame, centered_rect(60, 40, chunks[1]), state);
        }
        AppMode::Ready => render_ready(frame, chunks[1], state, cli),
        AppMode::Idle | AppMode::Quit => {
            widgets::status::render_idle(frame, centered_rect(60, 30, chunks[1]));
        }
    }

    render_footer(frame, chunks[2], state);
}

fn render_ready(frame: &mut Frame, area: Rect, state: &AppState, cli: &Cli) {
    let Some(snapshot) = state.snapshot.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Min(5),
        ])
        .split(area);

    widgets::current::render(frame, chunks[0], &snapshot.current, state.units, cli.icon_mode());
    widgets::daily::render(
        frame,
        chunks[1],
        &snapshot.samples,
        state.units,
        cli.icon_mode(),
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    widgets::tips::render(frame, bottom[0], &snapshot.current, state.units);
    widgets::facts::render(frame, bottom[1]);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = "Enter search · Tab units · Ctrl-R retry · Esc quit";
    frame.render_widget(
        Paragraph::new(Line::from(hints)).style(Style::default().fg(Color::DarkGray)),
        area,
    );

    if let Some(snapshot) = state.snapshot.as_ref() {
        let stamp = format!("updated {}", snapshot.fetched_at.format("%H:%M UTC"));
        let width = (stamp.chars().count() as u16).min(area.width);
        let badge_area = Rect {
            x: area.right().saturating_sub(width),
            y: area.y,
            width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(stamp)).style(Style::default().fg(Color::DarkGray)),
            badge_area,
        );
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
