use super::reservation_repo::HOTEL_LABEL_SQL;
use crate::error::Result;
use crate::storage::entity::evaluation::{self, ActiveModel as EvaluationActiveModel};
use crate::storage::entity::{client, Evaluation};
use chrono::NaiveDate;
use log::info;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, NotSet,
    QueryOrder, QuerySelect, RelationTrait, Set,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvaluation {
    pub id_client: i32,
    pub id_hotel: i32,
    pub date_arrivee: NaiveDate,
    pub note: i32,
    pub commentaire: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct EvaluationRow {
    pub id: i32,
    pub client: String,
    pub hotel: String,
    pub date_arrivee: NaiveDate,
    pub note: i32,
    pub commentaire: Option<String>,
}

pub struct EvaluationRepository;

impl EvaluationRepository {
    /// Most recent arrival first.
    pub async fn evaluations_with_names(db: &DatabaseConnection) -> Result<Vec<EvaluationRow>> {
        Ok(Evaluation::find()
            .select_only()
            .column(evaluation::Column::Id)
            .column_as(client::Column::Nom, "client")
            .column_as(Expr::cust(HOTEL_LABEL_SQL), "hotel")
            .column(evaluation::Column::DateArrivee)
            .column(evaluation::Column::Note)
            .column(evaluation::Column::Commentaire)
            .join(JoinType::InnerJoin, evaluation::Relation::Client.def())
            .join(JoinType::InnerJoin, evaluation::Relation::Hotel.def())
            .order_by_desc(evaluation::Column::DateArrivee)
            .order_by_desc(evaluation::Column::Id)
            .into_model::<EvaluationRow>()
            .all(db)
            .await?)
    }

    /// No validation here: the table's CHECK rejects notes outside 0..=5.
    pub async fn add_evaluation(db: &DatabaseConnection, new: NewEvaluation) -> Result<i32> {
        let active_model = EvaluationActiveModel {
            id: NotSet,
            id_client: Set(new.id_client),
            id_hotel: Set(new.id_hotel),
            date_arrivee: Set(new.date_arrivee),
            note: Set(new.note),
            commentaire: Set(new.commentaire),
        };
        let model = active_model.insert(db).await?;
        info!(
            "Evaluation {} saved: client {} hotel {} note {}",
            model.id, model.id_client, model.id_hotel, model.note
        );
        Ok(model.id)
    }
}
