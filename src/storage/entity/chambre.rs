use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Chambre")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub numero: i32, // unique within a hotel
    pub etage: i32,
    pub fumeur: bool,
    pub id_type: i32,
    pub id_hotel: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::type_chambre::Entity",
        from = "Column::IdType",
        to = "super::type_chambre::Column::Id"
    )]
    TypeChambre,
    #[sea_orm(
        belongs_to = "super::hotel::Entity",
        from = "Column::IdHotel",
        to = "super::hotel::Column::Id"
    )]
    Hotel,
}

impl ActiveModelBehavior for ActiveModel {}
