use super::reservation_repo::StayPeriod;
use crate::error::Result;
use crate::storage::entity::chambre::{self, Model as ChambreModel};
use crate::storage::entity::type_chambre::{self, Model as TypeChambreModel};
use crate::storage::entity::{reservation, Chambre, TypeChambre};
use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, Query, SelectStatement};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

pub struct RoomRepository;

impl RoomRepository {
    /// Distinct room types among the rooms of one hotel.
    pub async fn room_types_for_hotel(
        db: &DatabaseConnection,
        hotel_id: i32,
    ) -> Result<Vec<TypeChambreModel>> {
        Ok(TypeChambre::find()
            .join(JoinType::InnerJoin, chambre::Relation::TypeChambre.def().rev())
            .filter(chambre::Column::IdHotel.eq(hotel_id))
            .distinct()
            .order_by_asc(type_chambre::Column::Id)
            .all(db)
            .await?)
    }

    /// Ids of rooms whose (hotel, room type) pair carries a reservation overlapping `period`.
    ///
    /// Reservations name a room type, not a room, so one overlapping booking blocks
    /// every room of that type in that hotel.
    fn booked_rooms(period: &StayPeriod) -> SelectStatement {
        Query::select()
            .column((Chambre, chambre::Column::Id))
            .from(Chambre)
            .inner_join(
                reservation::Entity,
                Expr::col((Chambre, chambre::Column::IdHotel))
                    .equals((reservation::Entity, reservation::Column::IdHotel))
                    .and(
                        Expr::col((Chambre, chambre::Column::IdType))
                            .equals((reservation::Entity, reservation::Column::IdTypeChambre)),
                    ),
            )
            // NOT (date_fin <= start OR date_debut >= end)
            .and_where(
                Expr::col((reservation::Entity, reservation::Column::DateFin)).gt(period.start()),
            )
            .and_where(
                Expr::col((reservation::Entity, reservation::Column::DateDebut)).lt(period.end()),
            )
            .to_owned()
    }

    /// Rooms free for `[start, end)`. Fails with `InvalidDateRange` when `end <= start`.
    pub async fn available_rooms(
        db: &DatabaseConnection,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ChambreModel>> {
        let period = StayPeriod::new(start, end)?;
        Ok(Chambre::find()
            .filter(chambre::Column::Id.not_in_subquery(Self::booked_rooms(&period)))
            .order_by_asc(chambre::Column::Id)
            .all(db)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HotelError;
    use crate::storage::testing::seeded_db;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn ids(rooms: &[ChambreModel]) -> Vec<i32> {
        rooms.iter().map(|r| r.id).collect()
    }

    #[tokio::test]
    async fn room_types_are_distinct_per_hotel() {
        let (_dir, db) = seeded_db().await;
        let paris = RoomRepository::room_types_for_hotel(&db, 1).await.unwrap();
        let names: Vec<&str> = paris.iter().map(|t| t.nom.as_str()).collect();
        // Paris has three Standard rooms and one Deluxe.
        assert_eq!(names, vec!["Standard", "Deluxe"]);

        let lyon = RoomRepository::room_types_for_hotel(&db, 2).await.unwrap();
        assert_eq!(lyon.len(), 2);
        assert!(RoomRepository::room_types_for_hotel(&db, 42)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn lyon_standard_booking_blocks_every_lyon_standard_room() {
        let (_dir, db) = seeded_db().await;
        // Seeded: client 2, hotel 2, type 1, 2025-07-01 -> 2025-07-05.
        let free = RoomRepository::available_rooms(&db, d(2025, 7, 2), d(2025, 7, 3))
            .await
            .unwrap();
        let free = ids(&free);

        // Lyon Standard rooms are 2 and 7.
        assert!(!free.contains(&2));
        assert!(!free.contains(&7));
        assert_eq!(free, vec![1, 3, 4, 5, 6, 8]);
    }

    #[tokio::test]
    async fn checkout_day_is_free_again() {
        let (_dir, db) = seeded_db().await;
        let free = RoomRepository::available_rooms(&db, d(2025, 7, 5), d(2025, 7, 6))
            .await
            .unwrap();
        assert_eq!(free.len(), 8);

        let free = RoomRepository::available_rooms(&db, d(2025, 6, 30), d(2025, 7, 1))
            .await
            .unwrap();
        assert_eq!(free.len(), 8);
    }

    #[tokio::test]
    async fn wide_window_blocks_several_pairs() {
        let (_dir, db) = seeded_db().await;
        // Overlaps Paris/Standard (06-15), Lyon/Standard (07-01), Paris/Deluxe (08-10).
        let free = RoomRepository::available_rooms(&db, d(2025, 6, 1), d(2025, 8, 31))
            .await
            .unwrap();
        assert_eq!(ids(&free), vec![4, 5]);
    }

    #[tokio::test]
    async fn inverted_window_is_rejected() {
        let (_dir, db) = seeded_db().await;
        let err = RoomRepository::available_rooms(&db, d(2025, 7, 3), d(2025, 7, 3))
            .await
            .unwrap_err();
        assert!(matches!(err, HotelError::InvalidDateRange { .. }));
    }
}
