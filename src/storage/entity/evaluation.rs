use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Evaluation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_client: i32,
    pub id_hotel: i32,
    pub date_arrivee: Date,
    pub note: i32, // 0..=5, checked by the table
    #[sea_orm(nullable)]
    pub commentaire: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::IdClient",
        to = "super::client::Column::Id"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::hotel::Entity",
        from = "Column::IdHotel",
        to = "super::hotel::Column::Id"
    )]
    Hotel,
}

impl ActiveModelBehavior for ActiveModel {}
