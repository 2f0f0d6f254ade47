use crate::storage::entity::{
    chambre, client, evaluation, hotel, hotel_prestation, prestation, reservation, type_chambre,
};
use crate::storage::schema;
use chrono::NaiveDate;
use log::info;
use sea_orm::NotSet;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Set, TransactionTrait};
use serde::Serialize;

// (id, nom, ville, pays, code_postal)
const HOTELS: [(i32, &str, &str, &str, i32); 2] = [
    (1, "Hôtel Paris Centre", "Paris", "France", 75001),
    (2, "Hôtel Lyon Lumière", "Lyon", "France", 69002),
];

// (id, prenom, nom, adresse, ville, code_postal, email, telephone)
const CLIENTS: [(i32, &str, &str, &str, &str, i32, &str, &str); 5] = [
    (1, "Jean", "Dupont", "12 Rue de Paris", "Paris", 75001, "jean.dupont@email.fr", "0612345678"),
    (2, "Marie", "Leroy", "5 Avenue Victor Hugo", "Lyon", 69002, "marie.leroy@email.fr", "0623456789"),
    (3, "Paul", "Moreau", "8 Boulevard Saint-Michel", "Marseille", 13005, "paul.moreau@email.fr", "0634567890"),
    (4, "Lucie", "Martin", "27 Rue Nationale", "Lille", 59800, "lucie.martin@email.fr", "0645678901"),
    (5, "Emma", "Giraud", "3 Rue des Fleurs", "Nice", 6000, "emma.giraud@email.fr", "0656789012"),
];

const PRESTATIONS: [(i32, &str, &str); 5] = [
    (1, "Petit-déjeuner", "Petit-déjeuner continental servi tous les matins."),
    (2, "Navette aéroport", "Service de navette entre l'aéroport et l'hôtel."),
    (3, "Wi-Fi gratuit", "Accès internet sans fil dans tout l'hôtel."),
    (4, "Spa et bien-être", "Accès au spa et centre de bien-être."),
    (5, "Parking sécurisé", "Parking privé et sécurisé pour les clients."),
];

// (id_hotel, id_prestation, prix)
const HOTEL_PRESTATIONS: [(i32, i32, i32); 10] = [
    (1, 1, 15),
    (1, 2, 30),
    (1, 3, 0),
    (1, 4, 50),
    (1, 5, 20),
    (2, 1, 10),
    (2, 2, 25),
    (2, 3, 0),
    (2, 4, 45),
    (2, 5, 18),
];

const ROOM_TYPES: [(i32, &str, &str, i32); 3] = [
    (1, "Standard", "Chambre standard avec les équipements de base.", 80),
    (2, "Deluxe", "Chambre plus spacieuse avec vue.", 120),
    (3, "Suite", "Suite luxueuse avec salon séparé.", 200),
];

// (id, numero, etage, fumeur, id_type, id_hotel)
const ROOMS: [(i32, i32, i32, bool, i32, i32); 8] = [
    (1, 201, 2, false, 1, 1),
    (2, 502, 5, true, 1, 2),
    (3, 305, 3, false, 2, 1),
    (4, 410, 4, false, 2, 2),
    (5, 104, 1, true, 2, 2),
    (6, 202, 2, false, 1, 1),
    (7, 307, 3, true, 1, 2),
    (8, 101, 1, false, 1, 1),
];

// (id_client, id_hotel, id_type_chambre, date_debut, date_fin, nb_chambres)
const RESERVATIONS: [(i32, i32, i32, &str, &str, i32); 8] = [
    (1, 1, 1, "2025-06-15", "2025-06-18", 1),
    (2, 2, 1, "2025-07-01", "2025-07-05", 2),
    (2, 2, 2, "2025-11-12", "2025-11-14", 1),
    (2, 2, 3, "2026-02-01", "2026-02-05", 1),
    (3, 1, 2, "2025-08-10", "2025-08-14", 1),
    (4, 2, 3, "2025-09-05", "2025-09-07", 1),
    (4, 2, 1, "2026-01-15", "2026-01-18", 1),
    (5, 2, 2, "2025-09-20", "2025-09-25", 1),
];

// (id_client, id_hotel, date_arrivee, note, commentaire)
const EVALUATIONS: [(i32, i32, &str, i32, &str); 5] = [
    (1, 1, "2025-06-15", 5, "Excellent séjour, personnel très accueillant."),
    (2, 2, "2025-07-01", 4, "Chambre propre, bon rapport qualité/prix."),
    (3, 1, "2025-08-10", 3, "Séjour correct mais bruyant la nuit."),
    (4, 2, "2025-09-05", 5, "Service impeccable, je recommande."),
    (5, 2, "2025-09-20", 4, "Très bon petit-déjeuner, hôtel bien situé."),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub hotels: usize,
    pub clients: usize,
    pub prestations: usize,
    pub hotel_prestations: usize,
    pub room_types: usize,
    pub rooms: usize,
    pub reservations: usize,
    pub evaluations: usize,
}

fn fixture_date(raw: &str) -> Result<NaiveDate, DbErr> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| DbErr::Custom(format!("bad fixture date {}: {}", raw, e)))
}

/// Drops and recreates every table, then loads the fixture set.
/// Runs in one transaction: any failure leaves the previous database untouched.
pub async fn seed(db: &DatabaseConnection) -> Result<SeedReport, DbErr> {
    let txn = db.begin().await?;
    schema::reset_schema(&txn).await?;
    let report = insert_fixtures(&txn).await?;
    txn.commit().await?;

    info!("Seed complete: {:?}", report);
    Ok(report)
}

async fn insert_fixtures<C: ConnectionTrait>(db: &C) -> Result<SeedReport, DbErr> {
    hotel::Entity::insert_many(HOTELS.iter().map(|&(id, nom, ville, pays, cp)| {
        hotel::ActiveModel {
            id: Set(id),
            nom: Set(nom.to_string()),
            ville: Set(ville.to_string()),
            pays: Set(pays.to_string()),
            code_postal: Set(cp),
        }
    }))
    .exec(db)
    .await?;

    client::Entity::insert_many(CLIENTS.iter().map(
        |&(id, prenom, nom, adresse, ville, cp, email, telephone)| client::ActiveModel {
            id: Set(id),
            prenom: Set(prenom.to_string()),
            nom: Set(nom.to_string()),
            adresse: Set(Some(adresse.to_string())),
            ville: Set(Some(ville.to_string())),
            code_postal: Set(Some(cp)),
            email: Set(Some(email.to_string())),
            telephone: Set(Some(telephone.to_string())),
        },
    ))
    .exec(db)
    .await?;

    prestation::Entity::insert_many(PRESTATIONS.iter().map(|&(id, nom, description)| {
        prestation::ActiveModel {
            id: Set(id),
            nom: Set(nom.to_string()),
            description: Set(Some(description.to_string())),
        }
    }))
    .exec(db)
    .await?;

    hotel_prestation::Entity::insert_many(HOTEL_PRESTATIONS.iter().map(
        |&(id_hotel, id_prestation, prix)| hotel_prestation::ActiveModel {
            id: NotSet,
            id_hotel: Set(id_hotel),
            id_prestation: Set(id_prestation),
            prix: Set(prix),
        },
    ))
    .exec(db)
    .await?;

    type_chambre::Entity::insert_many(ROOM_TYPES.iter().map(|&(id, nom, description, prix)| {
        type_chambre::ActiveModel {
            id: Set(id),
            nom: Set(nom.to_string()),
            description: Set(Some(description.to_string())),
            prix: Set(prix),
        }
    }))
    .exec(db)
    .await?;

    chambre::Entity::insert_many(ROOMS.iter().map(
        |&(id, numero, etage, fumeur, id_type, id_hotel)| chambre::ActiveModel {
            id: Set(id),
            numero: Set(numero),
            etage: Set(etage),
            fumeur: Set(fumeur),
            id_type: Set(id_type),
            id_hotel: Set(id_hotel),
        },
    ))
    .exec(db)
    .await?;

    let mut reservations = Vec::with_capacity(RESERVATIONS.len());
    for &(id_client, id_hotel, id_type_chambre, debut, fin, nb_chambres) in RESERVATIONS.iter() {
        reservations.push(reservation::ActiveModel {
            id: NotSet,
            id_client: Set(id_client),
            id_hotel: Set(id_hotel),
            id_type_chambre: Set(id_type_chambre),
            date_debut: Set(fixture_date(debut)?),
            date_fin: Set(fixture_date(fin)?),
            nb_chambres: Set(nb_chambres),
        });
    }
    reservation::Entity::insert_many(reservations).exec(db).await?;

    let mut evaluations = Vec::with_capacity(EVALUATIONS.len());
    for &(id_client, id_hotel, arrivee, note, commentaire) in EVALUATIONS.iter() {
        evaluations.push(evaluation::ActiveModel {
            id: NotSet,
            id_client: Set(id_client),
            id_hotel: Set(id_hotel),
            date_arrivee: Set(fixture_date(arrivee)?),
            note: Set(note),
            commentaire: Set(Some(commentaire.to_string())),
        });
    }
    evaluation::Entity::insert_many(evaluations).exec(db).await?;

    Ok(SeedReport {
        hotels: HOTELS.len(),
        clients: CLIENTS.len(),
        prestations: PRESTATIONS.len(),
        hotel_prestations: HOTEL_PRESTATIONS.len(),
        room_types: ROOM_TYPES.len(),
        rooms: ROOMS.len(),
        reservations: RESERVATIONS.len(),
        evaluations: EVALUATIONS.len(),
    })
}
