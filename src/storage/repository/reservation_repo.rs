use crate::error::{HotelError, Result};
use crate::storage::entity::reservation::{self, ActiveModel as ReservationActiveModel};
use crate::storage::entity::{client, type_chambre, Reservation};
use chrono::NaiveDate;
use log::{info, warn};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    NotSet, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
};
use serde::{Deserialize, Serialize};

/// SQL for the hotel display label ("ville, pays") once `Hotel` is joined in.
pub(crate) const HOTEL_LABEL_SQL: &str = r#""Hotel"."ville" || ', ' || "Hotel"."pays""#;

/// Half-open stay interval `[start, end)`; construction guarantees `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl StayPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end <= start {
            return Err(HotelError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Two stays overlap unless one ends on or before the day the other starts.
    pub fn overlaps(&self, other: &StayPeriod) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReservation {
    pub id_client: i32,
    pub id_hotel: i32,
    pub id_type_chambre: i32,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub nb_chambres: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct ReservationRow {
    pub id: i32,
    pub client: String,
    pub hotel: String,
    pub type_chambre: String,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub nb_chambres: i32,
}

pub struct ReservationRepository;

impl ReservationRepository {
    fn joined() -> Select<Reservation> {
        Reservation::find()
            .select_only()
            .column(reservation::Column::Id)
            .column_as(client::Column::Nom, "client")
            .column_as(Expr::cust(HOTEL_LABEL_SQL), "hotel")
            .column_as(type_chambre::Column::Nom, "type_chambre")
            .column(reservation::Column::DateDebut)
            .column(reservation::Column::DateFin)
            .column(reservation::Column::NbChambres)
            .join(JoinType::InnerJoin, reservation::Relation::Client.def())
            .join(JoinType::InnerJoin, reservation::Relation::Hotel.def())
            .join(JoinType::InnerJoin, reservation::Relation::TypeChambre.def())
            .order_by_asc(reservation::Column::DateDebut)
            .order_by_asc(reservation::Column::Id)
    }

    /// Every reservation with client, hotel and room type names, earliest stay first.
    pub async fn reservations_with_names(db: &DatabaseConnection) -> Result<Vec<ReservationRow>> {
        Ok(Self::joined().into_model::<ReservationRow>().all(db).await?)
    }

    /// Same listing restricted to clients whose `nom` matches exactly.
    pub async fn reservations_for_client(
        db: &DatabaseConnection,
        nom: &str,
    ) -> Result<Vec<ReservationRow>> {
        Ok(Self::joined()
            .filter(client::Column::Nom.eq(nom))
            .into_model::<ReservationRow>()
            .all(db)
            .await?)
    }

    /// Rejects `date_fin <= date_debut` before touching the database.
    pub async fn add_reservation(db: &DatabaseConnection, new: NewReservation) -> Result<i32> {
        let period = match StayPeriod::new(new.date_debut, new.date_fin) {
            Ok(p) => p,
            Err(e) => {
                warn!("Reservation rejected: {}", e);
                return Err(e);
            }
        };

        let active_model = ReservationActiveModel {
            id: NotSet,
            id_client: Set(new.id_client),
            id_hotel: Set(new.id_hotel),
            id_type_chambre: Set(new.id_type_chambre),
            date_debut: Set(period.start()),
            date_fin: Set(period.end()),
            nb_chambres: Set(new.nb_chambres),
        };
        let model = active_model.insert(db).await?;
        info!(
            "Reservation {} saved: client {} hotel {} type {} ({} nights)",
            model.id,
            model.id_client,
            model.id_hotel,
            model.id_type_chambre,
            period.nights()
        );
        Ok(model.id)
    }
}
