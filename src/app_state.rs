use crate::commands::{split_args, AppCommand};
use crate::storage::entity::{chambre, client, hotel, type_chambre};
use crate::storage::repository::{
    DashboardCounts, EvaluationRow, HotelPrestationRow, ReservationRow,
};
use crate::storage::SeedReport;
use serde::Serialize;

/// Result of one command, handed to the renderer.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum AppEvent {
    Message(String),
    Warning(String),
    Error(String),
    Hotels(Vec<hotel::Model>),
    Clients(Vec<client::Model>),
    RoomTypes(Vec<type_chambre::Model>),
    Prestations(Vec<HotelPrestationRow>),
    Rooms(Vec<chambre::Model>),
    Reservations(Vec<ReservationRow>),
    Evaluations(Vec<EvaluationRow>),
    Stats(DashboardCounts),
    Seeded(SeedReport),
    Created { entity: &'static str, id: i32 },
    Quit,
}

impl AppEvent {
    pub fn is_failure(&self) -> bool {
        matches!(self, AppEvent::Error(_))
    }
}

/// Console-side state: output mode and history. Nothing here touches the database.
pub struct App {
    pub json_output: bool,
    pub command_history: Vec<String>,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> App {
        App {
            json_output: false,
            command_history: Vec::new(),
            should_quit: false,
        }
    }

    /// Parses a console line. Commands that only change console state are applied
    /// here and yield `Err(event)`; everything else goes to the service.
    pub fn handle_line(&mut self, line: &str) -> Option<Result<AppCommand, AppEvent>> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        self.command_history.push(line.to_string());
        let cmd = AppCommand::from_args(&split_args(line));
        Some(self.apply(cmd))
    }

    pub fn apply(&mut self, cmd: AppCommand) -> Result<AppCommand, AppEvent> {
        match cmd {
            AppCommand::Json(on) => {
                self.json_output = on;
                Err(AppEvent::Message(format!(
                    "sortie JSON {}",
                    if on { "activée" } else { "désactivée" }
                )))
            }
            AppCommand::Quit => {
                self.should_quit = true;
                Err(AppEvent::Quit)
            }
            other => Ok(other),
        }
    }
}
