use crate::error::Result;
use crate::storage::entity::hotel::{self, Model as HotelModel};
use crate::storage::entity::{hotel_prestation, prestation, Hotel, HotelPrestation};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use serde::{Deserialize, Serialize};

/// A service offered by one hotel, with that hotel's price.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct HotelPrestationRow {
    pub id_prestation: i32,
    pub nom: String,
    pub description: Option<String>,
    pub prix: i32,
}

pub struct HotelRepository;

impl HotelRepository {
    pub async fn list_hotels(db: &DatabaseConnection) -> Result<Vec<HotelModel>> {
        Ok(Hotel::find()
            .order_by_asc(hotel::Column::Id)
            .all(db)
            .await?)
    }

    /// `("ville, pays", id)` pairs in id order.
    pub async fn choices(db: &DatabaseConnection) -> Result<Vec<(String, i32)>> {
        let hotels = Self::list_hotels(db).await?;
        Ok(hotels.into_iter().map(|h| (h.label(), h.id)).collect())
    }

    pub async fn prestations_for_hotel(
        db: &DatabaseConnection,
        hotel_id: i32,
    ) -> Result<Vec<HotelPrestationRow>> {
        Ok(HotelPrestation::find()
            .select_only()
            .column_as(prestation::Column::Id, "id_prestation")
            .column_as(prestation::Column::Nom, "nom")
            .column_as(prestation::Column::Description, "description")
            .column(hotel_prestation::Column::Prix)
            .join(
                JoinType::InnerJoin,
                hotel_prestation::Relation::Prestation.def(),
            )
            .filter(hotel_prestation::Column::IdHotel.eq(hotel_id))
            .order_by_asc(prestation::Column::Id)
            .into_model::<HotelPrestationRow>()
            .all(db)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::testing::{fresh_db, seeded_db};

    #[tokio::test]
    async fn lists_both_fixture_hotels() {
        let (_dir, db) = seeded_db().await;
        let hotels = HotelRepository::list_hotels(&db).await.unwrap();
        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0].nom, "Hôtel Paris Centre");
        assert_eq!(hotels[1].code_postal, 69002);

        let choices = HotelRepository::choices(&db).await.unwrap();
        assert_eq!(
            choices,
            vec![("Paris, France".to_string(), 1), ("Lyon, France".to_string(), 2)]
        );
    }

    #[tokio::test]
    async fn prestations_carry_the_hotel_price() {
        let (_dir, db) = seeded_db().await;
        let lyon = HotelRepository::prestations_for_hotel(&db, 2).await.unwrap();
        assert_eq!(lyon.len(), 5);
        assert_eq!(lyon[0].nom, "Petit-déjeuner");
        assert_eq!(lyon[0].prix, 10);
        assert_eq!(lyon[3].prix, 45);

        let paris = HotelRepository::prestations_for_hotel(&db, 1).await.unwrap();
        assert_eq!(paris[0].prix, 15);
    }

    #[tokio::test]
    async fn empty_database_lists_nothing() {
        let (_dir, db) = fresh_db().await;
        assert!(HotelRepository::list_hotels(&db).await.unwrap().is_empty());
        assert!(HotelRepository::prestations_for_hotel(&db, 1)
            .await
            .unwrap()
            .is_empty());
    }
}
