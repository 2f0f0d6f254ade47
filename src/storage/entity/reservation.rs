use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_client: i32,
    pub id_hotel: i32,
    pub id_type_chambre: i32,
    pub date_debut: Date,
    pub date_fin: Date,
    pub nb_chambres: i32,
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
    #[sea_orm(
        belongs_to = "super::type_chambre::Entity",
        from = "Column::IdTypeChambre",
        to = "super::type_chambre::Column::Id"
    )]
    TypeChambre,
}

impl ActiveModelBehavior for ActiveModel {}
