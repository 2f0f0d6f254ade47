use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::str::FromStr;

/// `key=value` pairs of an insert form, keys lower-cased.
pub type FormFields = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Home,
    Reservations { client: Option<String> },
    Clients,
    Hotels,
    RoomTypes { hotel_id: i32 },
    Prestations { hotel_id: i32 },
    Available { start: NaiveDate, end: NaiveDate },
    AddClient(FormFields),
    AddReservation(FormFields),
    Evaluations,
    AddEvaluation(FormFields),
    Stats,
    Seed,
    Json(bool),
    Help,
    Quit,
    Unknown(String),
}

pub const HELP_TEXT: &str = "Commandes: home | reservations [nom] | clients | hotels | types <id_hotel> | prestations <id_hotel> | available <AAAA-MM-JJ> <AAAA-MM-JJ> | add-client nom=.. prenom=.. [adresse=..] [ville=..] [code_postal=..] [email=..] [telephone=..] | add-reservation client=<id|nom> hotel=<id|ville, pays> type=<id|nom> debut=<date> fin=<date> [chambres=1] | evaluations | add-evaluation client=.. hotel=.. date=<date> note=<0-5> [commentaire=..] | stats | seed | json on|off | help | quit";

/// Splits a command line on whitespace; double quotes group words and are removed.
pub fn split_args(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut has_token = false;
    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut cur));
                    has_token = false;
                }
            }
            c => {
                cur.push(c);
                has_token = true;
            }
        }
    }
    if has_token {
        args.push(cur);
    }
    args
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn parse_form(args: &[String]) -> Result<FormFields, String> {
    let mut fields = FormFields::new();
    for arg in args {
        match arg.split_once('=') {
            Some((k, v)) if !k.trim().is_empty() => {
                fields.insert(k.trim().to_ascii_lowercase(), v.trim().to_string());
            }
            _ => return Err(format!("champ invalide (attendu clé=valeur): {}", arg)),
        }
    }
    Ok(fields)
}

impl AppCommand {
    /// Builds a command from already split arguments (e.g. the process arguments).
    pub fn from_args(args: &[String]) -> AppCommand {
        let Some(head) = args.first() else {
            return AppCommand::Unknown("commande vide".to_string());
        };
        let rest = &args[1..];

        match head.to_ascii_lowercase().as_str() {
            "home" | "accueil" => AppCommand::Home,
            "reservations" | "réservations" => {
                let client = if rest.is_empty() {
                    None
                } else {
                    Some(rest.join(" "))
                };
                // "Tous" is the "no filter" entry of the client selector.
                let client = client.filter(|c| !c.eq_ignore_ascii_case("tous"));
                AppCommand::Reservations { client }
            }
            "clients" => AppCommand::Clients,
            "hotels" | "hôtels" => AppCommand::Hotels,
            "types" => match rest.first().and_then(|s| s.parse::<i32>().ok()) {
                Some(hotel_id) => AppCommand::RoomTypes { hotel_id },
                None => AppCommand::Unknown("usage: types <id_hotel>".to_string()),
            },
            "prestations" => match rest.first().and_then(|s| s.parse::<i32>().ok()) {
                Some(hotel_id) => AppCommand::Prestations { hotel_id },
                None => AppCommand::Unknown("usage: prestations <id_hotel>".to_string()),
            },
            "available" | "disponibles" => {
                match (
                    rest.first().and_then(|s| parse_date(s)),
                    rest.get(1).and_then(|s| parse_date(s)),
                ) {
                    (Some(start), Some(end)) => AppCommand::Available { start, end },
                    _ => AppCommand::Unknown(
                        "usage: available <AAAA-MM-JJ> <AAAA-MM-JJ>".to_string(),
                    ),
                }
            }
            "add-client" => match parse_form(rest) {
                Ok(fields) => AppCommand::AddClient(fields),
                Err(msg) => AppCommand::Unknown(msg),
            },
            "add-reservation" => match parse_form(rest) {
                Ok(fields) => AppCommand::AddReservation(fields),
                Err(msg) => AppCommand::Unknown(msg),
            },
            "evaluations" | "évaluations" => AppCommand::Evaluations,
            "add-evaluation" => match parse_form(rest) {
                Ok(fields) => AppCommand::AddEvaluation(fields),
                Err(msg) => AppCommand::Unknown(msg),
            },
            "stats" | "statistiques" => AppCommand::Stats,
            "seed" => AppCommand::Seed,
            "json" => match rest.first().map(|s| s.to_ascii_lowercase()).as_deref() {
                Some("on") | Some("1") | Some("true") => AppCommand::Json(true),
                Some("off") | Some("0") | Some("false") => AppCommand::Json(false),
                _ => AppCommand::Unknown("usage: json on|off".to_string()),
            },
            "help" | "h" | "?" => AppCommand::Help,
            "quit" | "q" | "exit" => AppCommand::Quit,
            other => AppCommand::Unknown(format!("commande inconnue: {}", other)),
        }
    }
}

impl FromStr for AppCommand {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AppCommand::from_args(&split_args(s)))
    }
}
