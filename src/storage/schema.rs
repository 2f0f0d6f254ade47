//! Table definitions for the hotel database.
//!
//! The DDL is written by hand rather than derived from the entities: SQLite
//! only accepts CHECK and multi-column UNIQUE constraints at creation time.

use log::info;
use sea_orm::{ConnectionTrait, DbErr, Statement};

/// Parents first. Dropping walks this list backwards.
pub const TABLES: [&str; 8] = [
    "Hotel",
    "Client",
    "TypeChambre",
    "Chambre",
    "Prestation",
    "HotelPrestation",
    "Reservation",
    "Evaluation",
];

const CREATE_STATEMENTS: [&str; 8] = [
    r#"
    CREATE TABLE IF NOT EXISTS Hotel (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nom TEXT NOT NULL,
        ville TEXT NOT NULL,
        pays TEXT NOT NULL,
        code_postal INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Client (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        prenom TEXT NOT NULL,
        nom TEXT NOT NULL,
        adresse TEXT,
        ville TEXT,
        code_postal INTEGER,
        email TEXT,
        telephone TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS TypeChambre (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nom TEXT NOT NULL,
        description TEXT,
        prix INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Chambre (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        numero INTEGER NOT NULL,
        etage INTEGER NOT NULL,
        fumeur INTEGER NOT NULL CHECK (fumeur IN (0, 1)),
        id_type INTEGER NOT NULL,
        id_hotel INTEGER NOT NULL,
        FOREIGN KEY (id_type) REFERENCES TypeChambre(id),
        FOREIGN KEY (id_hotel) REFERENCES Hotel(id),
        UNIQUE (id_hotel, numero)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Prestation (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nom TEXT NOT NULL,
        description TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS HotelPrestation (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        id_hotel INTEGER NOT NULL,
        id_prestation INTEGER NOT NULL,
        prix INTEGER NOT NULL,
        FOREIGN KEY (id_hotel) REFERENCES Hotel(id),
        FOREIGN KEY (id_prestation) REFERENCES Prestation(id),
        UNIQUE (id_hotel, id_prestation)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Reservation (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        id_client INTEGER NOT NULL,
        id_hotel INTEGER NOT NULL,
        id_type_chambre INTEGER NOT NULL,
        date_debut TEXT NOT NULL,
        date_fin TEXT NOT NULL,
        nb_chambres INTEGER NOT NULL CHECK (nb_chambres > 0),
        FOREIGN KEY (id_client) REFERENCES Client(id),
        FOREIGN KEY (id_hotel) REFERENCES Hotel(id),
        FOREIGN KEY (id_type_chambre) REFERENCES TypeChambre(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Evaluation (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        id_client INTEGER NOT NULL,
        id_hotel INTEGER NOT NULL,
        date_arrivee TEXT NOT NULL,
        note INTEGER NOT NULL CHECK (note >= 0 AND note <= 5),
        commentaire TEXT,
        FOREIGN KEY (id_client) REFERENCES Client(id),
        FOREIGN KEY (id_hotel) REFERENCES Hotel(id)
    )
    "#,
];

/// Creates any missing table. Existing data is left alone.
pub async fn ensure_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    for ddl in CREATE_STATEMENTS {
        db.execute(Statement::from_string(backend, ddl.to_string()))
            .await?;
    }
    Ok(())
}

/// Drops every table (children first) and recreates them empty.
pub async fn reset_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    for table in TABLES.iter().rev() {
        db.execute(Statement::from_string(
            backend,
            format!("DROP TABLE IF EXISTS {}", table),
        ))
        .await?;
    }
    ensure_schema(db).await?;
    info!("Schema reset: {} tables recreated.", TABLES.len());
    Ok(())
}
