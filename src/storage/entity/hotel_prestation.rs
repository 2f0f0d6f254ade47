use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// (id_hotel, id_prestation) is unique: one price per service and hotel.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "HotelPrestation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_hotel: i32,
    pub id_prestation: i32,
    pub prix: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hotel::Entity",
        from = "Column::IdHotel",
        to = "super::hotel::Column::Id"
    )]
    Hotel,
    #[sea_orm(
        belongs_to = "super::prestation::Entity",
        from = "Column::IdPrestation",
        to = "super::prestation::Column::Id"
    )]
    Prestation,
}

impl ActiveModelBehavior for ActiveModel {}
