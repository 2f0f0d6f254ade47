use crate::app_state::AppEvent;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};

const NO_ROWS: &str = "(aucune ligne)";

fn table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    if rows.is_empty() {
        return NO_ROWS.to_string();
    }
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(headers.to_vec());
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}

fn opt<T: ToString>(v: &Option<T>) -> String {
    v.as_ref().map(|x| x.to_string()).unwrap_or_default()
}

pub fn render(event: &AppEvent, json: bool) -> String {
    if json {
        return serde_json::to_string_pretty(event)
            .unwrap_or_else(|e| format!("✗ sérialisation JSON impossible: {}", e));
    }

    match event {
        AppEvent::Message(msg) => msg.clone(),
        AppEvent::Warning(msg) => format!("⚠ {}", msg),
        AppEvent::Error(msg) => format!("✗ {}", msg),
        AppEvent::Created { entity, id } => format!("✓ {} ajouté(e) [ID: {}]", entity, id),
        AppEvent::Quit => "Au revoir.".to_string(),
        AppEvent::Hotels(hotels) => table(
            &["ID", "Nom", "Ville", "Pays", "Code postal"],
            hotels
                .iter()
                .map(|h| {
                    vec![
                        h.id.to_string(),
                        h.nom.clone(),
                        h.ville.clone(),
                        h.pays.clone(),
                        h.code_postal.to_string(),
                    ]
                })
                .collect(),
        ),
        AppEvent::Clients(clients) => table(
            &["ID", "Nom", "Prénom", "Ville", "Email", "Téléphone"],
            clients
                .iter()
                .map(|c| {
                    vec![
                        c.id.to_string(),
                        c.nom.clone(),
                        c.prenom.clone(),
                        opt(&c.ville),
                        opt(&c.email),
                        opt(&c.telephone),
                    ]
                })
                .collect(),
        ),
        AppEvent::RoomTypes(types) => table(
            &["ID", "Type", "Prix", "Description"],
            types
                .iter()
                .map(|t| {
                    vec![
                        t.id.to_string(),
                        t.nom.clone(),
                        format!("{} €", t.prix),
                        opt(&t.description),
                    ]
                })
                .collect(),
        ),
        AppEvent::Prestations(rows) => table(
            &["ID", "Prestation", "Prix", "Description"],
            rows.iter()
                .map(|p| {
                    vec![
                        p.id_prestation.to_string(),
                        p.nom.clone(),
                        format!("{} €", p.prix),
                        opt(&p.description),
                    ]
                })
                .collect(),
        ),
        AppEvent::Rooms(rooms) if rooms.is_empty() => {
            "Aucune chambre disponible pour cette période.".to_string()
        }
        AppEvent::Rooms(rooms) => table(
            &["ID", "Numéro", "Étage", "Hôtel", "Type"],
            rooms
                .iter()
                .map(|r| {
                    vec![
                        r.id.to_string(),
                        r.numero.to_string(),
                        r.etage.to_string(),
                        r.id_hotel.to_string(),
                        r.id_type.to_string(),
                    ]
                })
                .collect(),
        ),
        AppEvent::Reservations(rows) => table(
            &["ID", "Client", "Hôtel", "Type", "Début", "Fin", "Chambres"],
            rows.iter()
                .map(|r| {
                    vec![
                        r.id.to_string(),
                        r.client.clone(),
                        r.hotel.clone(),
                        r.type_chambre.clone(),
                        r.date_debut.to_string(),
                        r.date_fin.to_string(),
                        r.nb_chambres.to_string(),
                    ]
                })
                .collect(),
        ),
        AppEvent::Evaluations(rows) => table(
            &["ID", "Client", "Hôtel", "Arrivée", "Note", "Commentaire"],
            rows.iter()
                .map(|e| {
                    vec![
                        e.id.to_string(),
                        e.client.clone(),
                        e.hotel.clone(),
                        e.date_arrivee.to_string(),
                        format!("{}/5", e.note),
                        opt(&e.commentaire),
                    ]
                })
                .collect(),
        ),
        AppEvent::Stats(c) => format!(
            "Clients: {}\nRéservations: {}\nChambres: {}\nHôtels: {}",
            c.clients, c.reservations, c.rooms, c.hotels
        ),
        AppEvent::Seeded(r) => format!(
            "✓ Base réinitialisée: {} hôtels, {} clients, {} prestations ({} tarifs), {} types, {} chambres, {} réservations, {} évaluations",
            r.hotels,
            r.clients,
            r.prestations,
            r.hotel_prestations,
            r.room_types,
            r.rooms,
            r.reservations,
            r.evaluations
        ),
    }
}
