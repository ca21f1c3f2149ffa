use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::{
    app::events::{AppEvent, start_frame_task},
    cli::{Cli, UnitsArg},
    data::client::WeatherClient,
    domain::forecast::{Units, WeatherSnapshot},
};

/// Every failure mode collapses into this one message; the service does not
/// distinguish "city not found" from transport or decode errors.
pub const FETCH_ERROR_MESSAGE: &str = "Unable to load weather data. Please try again.";

const MAX_INPUT_LEN: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Loading,
    Ready,
    Error,
    Quit,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub input: String,
    pub active_city: Option<String>,
    pub units: Units,
    pub snapshot: Option<WeatherSnapshot>,
    pub last_error: Option<String>,
    pub request_seq: u64,
    pub fetch_in_flight: bool,
    pub frame_tick: u64,
    base_url: String,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        let units = match cli.units {
            UnitsArg::Metric => Units::Metric,
            UnitsArg::Imperial => Units::Imperial,
        };

        Self {
            mode: AppMode::Idle,
            running: true,
            input: cli.default_city(),
            active_city: None,
            units,
            snapshot: None,
            last_error: None,
            request_seq: 0,
            fetch_in_flight: false,
            frame_tick: 0,
            base_url: cli.api_base_url().unwrap_or_default(),
        }
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                cli.validate()?;
                start_frame_task(tx.clone(), cli.fps);
                self.start_search(tx, cli.default_city());
            }
            AppEvent::TickFrame => {
                self.frame_tick = self.frame_tick.saturating_add(1);
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::FetchSucceeded { seq, snapshot } => {
                if seq != self.request_seq {
                    return Ok(());
                }
                self.fetch_in_flight = false;
                self.snapshot = Some(snapshot);
                self.last_error = None;
                self.mode = AppMode::Ready;
            }
            AppEvent::FetchFailed { seq } => {
                if seq != self.request_seq {
                    return Ok(());
                }
                self.fetch_in_flight = false;
                self.snapshot = None;
                self.last_error = Some(FETCH_ERROR_MESSAGE.to_string());
                self.mode = AppMode::Error;
            }
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => {
                tx.send(AppEvent::Quit).await?;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                tx.send(AppEvent::Quit).await?;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(city) = self.active_city.clone() {
                    self.start_search(tx, city);
                }
            }
            KeyCode::Tab => {
                self.units = self.units.toggled();
                if let Some(city) = self.active_city.clone() {
                    self.start_search(tx, city);
                }
            }
            KeyCode::Enter => {
                self.start_search(tx, self.input.clone());
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.input.chars().count() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Clears any previous result and spawns one task that fetches current
    /// conditions and forecast concurrently (all-or-nothing).
    pub fn start_search(&mut self, tx: &mpsc::Sender<AppEvent>, city: String) {
        let city = city.trim().to_string();
        if city.is_empty() {
            return;
        }

        self.request_seq = self.request_seq.wrapping_add(1);
        let seq = self.request_seq;
        self.active_city = Some(city.clone());
        self.snapshot = None;
        self.last_error = None;
        self.mode = AppMode::Loading;
        self.fetch_in_flight = true;

        let client = WeatherClient::with_base_url(self.base_url.clone());
        let units = self.units;
        let tx = tx.clone();
        tokio::spawn(async move {
            match client.fetch_snapshot(&city, units).await {
                Ok(snapshot) => {
                    let _ = tx.send(AppEvent::FetchSucceeded { seq, snapshot }).await;
                }
                Err(_) => {
                    let _ = tx.send(AppEvent::FetchFailed { seq }).await;
                }
            }
        });
    }
}
