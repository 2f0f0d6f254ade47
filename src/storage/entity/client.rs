use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Client")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub prenom: String,
    pub nom: String,
    #[sea_orm(nullable)]
    pub adresse: Option<String>,
    #[sea_orm(nullable)]
    pub ville: Option<String>,
    #[sea_orm(nullable)]
    pub code_postal: Option<i32>,
    #[sea_orm(nullable)]
    pub email: Option<String>,
    #[sea_orm(nullable)]
    pub telephone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
