use crate::error::Result;
use crate::storage::entity::{Chambre, Client, Hotel, Reservation};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCounts {
    pub clients: u64,
    pub reservations: u64,
    pub rooms: u64,
    pub hotels: u64,
}

pub struct StatsRepository;

impl StatsRepository {
    pub async fn counts(db: &DatabaseConnection) -> Result<DashboardCounts> {
        Ok(DashboardCounts {
            clients: Client::find().count(db).await?,
            reservations: Reservation::find().count(db).await?,
            rooms: Chambre::find().count(db).await?,
            hotels: Hotel::find().count(db).await?,
        })
    }
}
