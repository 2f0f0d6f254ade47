mod helpers;

use helpers::{date, TestDb};
use hotel_admin::storage;
use hotel_admin::storage::entity::{chambre, hotel_prestation, Chambre, Reservation};
use hotel_admin::storage::repository::{
    ClientRepository, NewClient, NewReservation, ReservationRepository, RoomRepository,
    StatsRepository, StayPeriod,
};
use hotel_admin::HotelError;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, Set, Statement};
use std::collections::HashSet;

fn reservation(debut: &str, fin: &str) -> NewReservation {
    NewReservation {
        id_client: 3,
        id_hotel: 2,
        id_type_chambre: 2,
        date_debut: date(debut),
        date_fin: date(fin),
        nb_chambres: 1,
    }
}

#[tokio::test]
async fn test_seeded_counts() {
    let t = TestDb::seeded().await;
    let counts = StatsRepository::counts(&t.db).await.unwrap();
    assert_eq!(counts.clients, 5);
    assert_eq!(counts.reservations, 8);
    assert_eq!(counts.rooms, 8);
    assert_eq!(counts.hotels, 2);
}

#[tokio::test]
async fn test_valid_dates_are_accepted_inverted_rejected() {
    let t = TestDb::seeded().await;
    let cases = [
        ("2026-03-01", "2026-03-02", true),
        ("2026-03-01", "2026-04-15", true),
        ("2026-12-31", "2027-01-01", true),
        ("2026-03-02", "2026-03-02", false),
        ("2026-03-05", "2026-03-01", false),
    ];

    for (debut, fin, ok) in cases {
        let before = StatsRepository::counts(&t.db).await.unwrap().reservations;
        let result = ReservationRepository::add_reservation(&t.db, reservation(debut, fin)).await;
        let after = StatsRepository::counts(&t.db).await.unwrap().reservations;

        if ok {
            assert!(result.is_ok(), "{} -> {} should be accepted", debut, fin);
            assert_eq!(after, before + 1);
        } else {
            assert!(
                matches!(result, Err(HotelError::InvalidDateRange { .. })),
                "{} -> {} should be rejected",
                debut,
                fin
            );
            assert_eq!(after, before);
        }
    }
}

#[tokio::test]
async fn test_duplicate_contact_leaves_store_unchanged() {
    let t = TestDb::seeded().await;
    let before = ClientRepository::list_clients(&t.db).await.unwrap();

    let dup_email = NewClient {
        nom: "Petit".to_string(),
        prenom: "Anne".to_string(),
        email: Some("emma.giraud@email.fr".to_string()),
        ..Default::default()
    };
    let dup_phone = NewClient {
        nom: "Petit".to_string(),
        prenom: "Anne".to_string(),
        telephone: Some("0612345678".to_string()),
        ..Default::default()
    };
    for new in [dup_email, dup_phone] {
        let err = ClientRepository::add_client(&t.db, new).await.unwrap_err();
        assert!(matches!(err, HotelError::DuplicateClient { .. }));
    }

    assert_eq!(ClientRepository::list_clients(&t.db).await.unwrap(), before);
}

#[tokio::test]
async fn test_july_window_excludes_lyon_standard_rooms() {
    let t = TestDb::seeded().await;
    let rooms = RoomRepository::available_rooms(&t.db, date("2025-07-02"), date("2025-07-03"))
        .await
        .unwrap();

    // (hotel 2, type 1) is booked 2025-07-01 -> 2025-07-05.
    assert!(rooms
        .iter()
        .all(|r| !(r.id_hotel == 2 && r.id_type == 1)));
    assert!(rooms.iter().any(|r| r.id_hotel == 1 && r.id_type == 1));
    assert!(rooms.iter().any(|r| r.id_hotel == 2 && r.id_type == 2));
    assert!(rooms.iter().any(|r| r.id_hotel == 1 && r.id_type == 2));
}

#[tokio::test]
async fn test_available_rooms_matches_pairwise_overlap() {
    let t = TestDb::seeded().await;
    let all_rooms = Chambre::find().all(&t.db).await.unwrap();
    let reservations = Reservation::find().all(&t.db).await.unwrap();

    let windows = [
        ("2025-06-01", "2025-06-15"),
        ("2025-06-17", "2025-06-20"),
        ("2025-06-18", "2025-07-01"),
        ("2025-07-04", "2025-08-11"),
        ("2025-09-01", "2025-12-31"),
        ("2026-01-18", "2026-02-01"),
        ("2024-01-01", "2027-01-01"),
    ];

    for (d1, d2) in windows {
        let window = StayPeriod::new(date(d1), date(d2)).unwrap();
        let booked: HashSet<(i32, i32)> = reservations
            .iter()
            .filter(|r| {
                StayPeriod::new(r.date_debut, r.date_fin)
                    .map(|p| p.overlaps(&window))
                    .unwrap_or(false)
            })
            .map(|r| (r.id_hotel, r.id_type_chambre))
            .collect();
        let expected: Vec<i32> = all_rooms
            .iter()
            .filter(|c| !booked.contains(&(c.id_hotel, c.id_type)))
            .map(|c| c.id)
            .collect();

        let got: Vec<i32> = RoomRepository::available_rooms(&t.db, date(d1), date(d2))
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(got, expected, "window {} -> {}", d1, d2);
    }
}

#[tokio::test]
async fn test_new_reservation_is_listed_with_names() {
    let t = TestDb::seeded().await;
    let id = ReservationRepository::add_reservation(
        &t.db,
        NewReservation {
            id_client: 4,
            id_hotel: 1,
            id_type_chambre: 2,
            date_debut: date("2026-05-10"),
            date_fin: date("2026-05-12"),
            nb_chambres: 2,
        },
    )
    .await
    .unwrap();

    let rows = ReservationRepository::reservations_with_names(&t.db)
        .await
        .unwrap();
    assert_eq!(rows.len(), 9);
    let row = rows.iter().find(|r| r.id == id).expect("new row listed");
    assert_eq!(row.client, "Martin");
    assert_eq!(row.hotel, "Paris, France");
    assert_eq!(row.type_chambre, "Deluxe");
    assert_eq!(row.date_debut, date("2026-05-10"));
    assert_eq!(row.date_fin, date("2026-05-12"));
    assert_eq!(row.nb_chambres, 2);
}

#[tokio::test]
async fn test_empty_store_lists_nothing() {
    let t = TestDb::empty().await;
    assert!(ReservationRepository::reservations_with_names(&t.db)
        .await
        .unwrap()
        .is_empty());
    assert!(RoomRepository::available_rooms(&t.db, date("2025-01-01"), date("2025-01-02"))
        .await
        .unwrap()
        .is_empty());
    assert_eq!(
        StatsRepository::counts(&t.db).await.unwrap(),
        Default::default()
    );
}

fn room(numero: i32, id_hotel: i32) -> chambre::ActiveModel {
    chambre::ActiveModel {
        id: NotSet,
        numero: Set(numero),
        etage: Set(2),
        fumeur: Set(false),
        id_type: Set(1),
        id_hotel: Set(id_hotel),
    }
}

#[tokio::test]
async fn test_room_number_unique_within_hotel() {
    let t = TestDb::seeded().await;

    // Room 201 already exists in Paris.
    let err = room(201, 1).insert(&t.db).await.unwrap_err();
    assert!(err.to_string().contains("UNIQUE"), "{}", err);

    // The same number in another hotel is fine.
    room(201, 2).insert(&t.db).await.unwrap();
    assert_eq!(StatsRepository::counts(&t.db).await.unwrap().rooms, 9);
}

#[tokio::test]
async fn test_one_price_per_hotel_and_prestation() {
    let t = TestDb::seeded().await;
    let second_price = hotel_prestation::ActiveModel {
        id: NotSet,
        id_hotel: Set(1),
        id_prestation: Set(1),
        prix: Set(99),
    };
    let err = second_price.insert(&t.db).await.unwrap_err();
    assert!(err.to_string().contains("UNIQUE"), "{}", err);

    let prices = hotel_prestation::Entity::find().all(&t.db).await.unwrap();
    assert_eq!(prices.len(), 10);
    let breakfast = prices
        .iter()
        .find(|p| p.id_hotel == 1 && p.id_prestation == 1)
        .unwrap();
    assert_eq!(breakfast.prix, 15);
}

#[tokio::test]
async fn test_failed_seed_keeps_previous_data() {
    let t = TestDb::seeded().await;
    ClientRepository::add_client(
        &t.db,
        NewClient {
            nom: "Petit".to_string(),
            prenom: "Anne".to_string(),
            email: Some("anne.petit@email.fr".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // A table outside the schema still points at a client, so Client cannot be dropped.
    let backend = t.db.get_database_backend();
    for sql in [
        "CREATE TABLE Fidelite (id INTEGER PRIMARY KEY, id_client INTEGER NOT NULL REFERENCES Client(id))",
        "INSERT INTO Fidelite (id, id_client) VALUES (1, 6)",
    ] {
        t.db.execute(Statement::from_string(backend, sql.to_string()))
            .await
            .unwrap();
    }

    let err = storage::seed(&t.db).await.unwrap_err();
    assert!(err.to_string().contains("FOREIGN KEY"), "{}", err);

    let counts = StatsRepository::counts(&t.db).await.unwrap();
    assert_eq!(counts.clients, 6);
    assert_eq!(counts.reservations, 8);
    assert_eq!(counts.rooms, 8);
    assert_eq!(counts.hotels, 2);
}
