use crate::app_state::AppEvent;
use crate::commands::{AppCommand, FormFields, HELP_TEXT};
use crate::error::{HotelError, Result};
use crate::storage;
use crate::storage::repository::{
    ClientRepository, EvaluationRepository, HotelRepository, NewClient, NewEvaluation,
    NewReservation, ReservationRepository, RoomRepository, StatsRepository,
};
use chrono::NaiveDate;
use log::{error, warn};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

fn required<'a>(fields: &'a FormFields, key: &str) -> Result<&'a str> {
    fields
        .get(key)
        .map(|v| v.as_str())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| HotelError::InvalidInput(format!("champ manquant: {}", key)))
}

fn optional(fields: &FormFields, key: &str) -> Option<String> {
    fields.get(key).cloned().filter(|v| !v.is_empty())
}

fn parse_int(key: &str, raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| HotelError::InvalidInput(format!("{} n'est pas un entier: {}", key, raw)))
}

fn parse_date(key: &str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        HotelError::InvalidInput(format!("{} n'est pas une date AAAA-MM-JJ: {}", key, raw))
    })
}

/// Resolves a picker value: a numeric id, or a label matching exactly one choice.
fn resolve_choice(key: &str, raw: &str, choices: &[(String, i32)]) -> Result<i32> {
    if let Ok(id) = raw.trim().parse::<i32>() {
        return Ok(id);
    }
    let matches: Vec<i32> = choices
        .iter()
        .filter(|(label, _)| label.eq_ignore_ascii_case(raw.trim()))
        .map(|(_, id)| *id)
        .collect();
    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(HotelError::InvalidInput(format!("{} inconnu: {}", key, raw))),
        ids => Err(HotelError::InvalidInput(format!(
            "{} ambigu: {} correspond aux ids {:?}",
            key, raw, ids
        ))),
    }
}

/// Waits for the command worker. False, after logging, when it panicked or was cancelled.
pub async fn join_worker(handle: JoinHandle<()>) -> bool {
    match handle.await {
        Ok(()) => true,
        Err(e) => {
            error!("Command worker ended abnormally: {}", e);
            false
        }
    }
}

/// Runs console commands against the database, one at a time.
pub struct AdminService {
    db: Arc<DatabaseConnection>,
}

impl AdminService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Moves the service onto a background task that answers each command with one event.
    /// The task ends when the command channel closes or nobody reads events any more.
    pub fn spawn(
        self,
        mut cmd_rx: UnboundedReceiver<AppCommand>,
        evt_tx: UnboundedSender<AppEvent>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            while let Some(cmd) = cmd_rx.recv().await {
                let event = self.execute(cmd).await;
                if evt_tx.send(event).is_err() {
                    break;
                }
            }
        })
    }

    /// Never fails: rejections become warnings and other errors become error events.
    pub async fn execute(&self, cmd: AppCommand) -> AppEvent {
        match self.try_execute(cmd).await {
            Ok(event) => event,
            Err(e) if e.is_rejection() => {
                warn!("Command rejected: {}", e);
                AppEvent::Warning(e.to_string())
            }
            Err(e) => {
                error!("Command failed: {}", e);
                AppEvent::Error(e.to_string())
            }
        }
    }

    async fn try_execute(&self, cmd: AppCommand) -> Result<AppEvent> {
        let db = self.db.as_ref();
        let event = match cmd {
            AppCommand::Home => AppEvent::Message(
                "Bienvenue. Tapez `help` pour la liste des commandes.".to_string(),
            ),
            AppCommand::Reservations { client: None } => {
                AppEvent::Reservations(ReservationRepository::reservations_with_names(db).await?)
            }
            AppCommand::Reservations { client: Some(nom) } => AppEvent::Reservations(
                ReservationRepository::reservations_for_client(db, &nom).await?,
            ),
            AppCommand::Clients => AppEvent::Clients(ClientRepository::list_clients(db).await?),
            AppCommand::Hotels => AppEvent::Hotels(HotelRepository::list_hotels(db).await?),
            AppCommand::RoomTypes { hotel_id } => {
                AppEvent::RoomTypes(RoomRepository::room_types_for_hotel(db, hotel_id).await?)
            }
            AppCommand::Prestations { hotel_id } => AppEvent::Prestations(
                HotelRepository::prestations_for_hotel(db, hotel_id).await?,
            ),
            AppCommand::Available { start, end } => {
                AppEvent::Rooms(RoomRepository::available_rooms(db, start, end).await?)
            }
            AppCommand::AddClient(fields) => {
                let id = ClientRepository::add_client(db, Self::client_form(&fields)?).await?;
                AppEvent::Created { entity: "client", id }
            }
            AppCommand::AddReservation(fields) => {
                let new = self.reservation_form(&fields).await?;
                let id = ReservationRepository::add_reservation(db, new).await?;
                AppEvent::Created {
                    entity: "réservation",
                    id,
                }
            }
            AppCommand::Evaluations => {
                AppEvent::Evaluations(EvaluationRepository::evaluations_with_names(db).await?)
            }
            AppCommand::AddEvaluation(fields) => {
                let new = self.evaluation_form(&fields).await?;
                let id = EvaluationRepository::add_evaluation(db, new).await?;
                AppEvent::Created {
                    entity: "évaluation",
                    id,
                }
            }
            AppCommand::Stats => AppEvent::Stats(StatsRepository::counts(db).await?),
            AppCommand::Seed => AppEvent::Seeded(storage::seed(db).await?),
            AppCommand::Help => AppEvent::Message(HELP_TEXT.to_string()),
            AppCommand::Quit => AppEvent::Quit,
            AppCommand::Json(_) => {
                AppEvent::Message("le mode JSON se règle dans la console".to_string())
            }
            AppCommand::Unknown(msg) => AppEvent::Error(msg),
        };
        Ok(event)
    }

    fn client_form(fields: &FormFields) -> Result<NewClient> {
        Ok(NewClient {
            nom: required(fields, "nom")?.to_string(),
            prenom: required(fields, "prenom")?.to_string(),
            adresse: optional(fields, "adresse"),
            ville: optional(fields, "ville"),
            code_postal: optional(fields, "code_postal")
                .map(|v| parse_int("code_postal", &v))
                .transpose()?,
            // Submitted as typed, an empty `email=` included.
            email: fields.get("email").cloned(),
            telephone: fields.get("telephone").cloned(),
        })
    }

    async fn reservation_form(&self, fields: &FormFields) -> Result<NewReservation> {
        let db = self.db.as_ref();
        let id_client = resolve_choice(
            "client",
            required(fields, "client")?,
            &ClientRepository::choices(db).await?,
        )?;
        let id_hotel = resolve_choice(
            "hotel",
            required(fields, "hotel")?,
            &HotelRepository::choices(db).await?,
        )?;

        // Only the room types this hotel actually has can be booked.
        let types = RoomRepository::room_types_for_hotel(db, id_hotel).await?;
        if types.is_empty() {
            return Err(HotelError::InvalidInput(format!(
                "pas de types de chambres disponibles pour l'hôtel {}",
                id_hotel
            )));
        }
        let type_choices: Vec<(String, i32)> =
            types.iter().map(|t| (t.nom.clone(), t.id)).collect();
        let id_type_chambre = resolve_choice("type", required(fields, "type")?, &type_choices)?;
        if !types.iter().any(|t| t.id == id_type_chambre) {
            return Err(HotelError::InvalidInput(format!(
                "type {} absent de l'hôtel {}",
                id_type_chambre, id_hotel
            )));
        }

        let nb_chambres = match optional(fields, "chambres") {
            Some(v) => parse_int("chambres", &v)?,
            None => 1,
        };

        Ok(NewReservation {
            id_client,
            id_hotel,
            id_type_chambre,
            date_debut: parse_date("debut", required(fields, "debut")?)?,
            date_fin: parse_date("fin", required(fields, "fin")?)?,
            nb_chambres,
        })
    }

    async fn evaluation_form(&self, fields: &FormFields) -> Result<NewEvaluation> {
        let db = self.db.as_ref();
        let id_client = resolve_choice(
            "client",
            required(fields, "client")?,
            &ClientRepository::choices(db).await?,
        )?;
        let id_hotel = resolve_choice(
            "hotel",
            required(fields, "hotel")?,
            &HotelRepository::choices(db).await?,
        )?;
        Ok(NewEvaluation {
            id_client,
            id_hotel,
            date_arrivee: parse_date("date", required(fields, "date")?)?,
            note: parse_int("note", required(fields, "note")?)?,
            commentaire: optional(fields, "commentaire"),
        })
    }
}
