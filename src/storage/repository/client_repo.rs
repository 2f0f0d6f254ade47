use crate::error::{HotelError, Result};
use crate::storage::entity::client::{self, ActiveModel as ClientActiveModel, Model as ClientModel};
use crate::storage::entity::Client;
use log::{info, warn};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewClient {
    pub nom: String,
    pub prenom: String,
    pub adresse: Option<String>,
    pub ville: Option<String>,
    pub code_postal: Option<i32>,
    pub email: Option<String>,
    pub telephone: Option<String>,
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

pub struct ClientRepository;

impl ClientRepository {
    pub async fn list_clients(db: &DatabaseConnection) -> Result<Vec<ClientModel>> {
        Ok(Client::find()
            .order_by_asc(client::Column::Id)
            .all(db)
            .await?)
    }

    /// `(nom, id)` pairs in id order, as offered by the client pickers.
    pub async fn choices(db: &DatabaseConnection) -> Result<Vec<(String, i32)>> {
        let clients = Self::list_clients(db).await?;
        Ok(clients.into_iter().map(|c| (c.nom, c.id)).collect())
    }

    /// True when some client already uses this email or this phone number.
    pub async fn exists_by_contact(
        db: &DatabaseConnection,
        email: Option<&str>,
        telephone: Option<&str>,
    ) -> Result<bool> {
        let mut cond = Condition::any();
        let mut has_key = false;
        if let Some(e) = email {
            cond = cond.add(client::Column::Email.eq(e));
            has_key = true;
        }
        if let Some(t) = telephone {
            cond = cond.add(client::Column::Telephone.eq(t));
            has_key = true;
        }
        if !has_key {
            return Ok(false);
        }
        let n = Client::find().filter(cond).count(db).await?;
        Ok(n > 0)
    }

    /// Contacts are compared and stored exactly as submitted, so an empty string
    /// collides with an earlier empty string. `None` is stored as NULL and never collides.
    pub async fn add_client(db: &DatabaseConnection, new: NewClient) -> Result<i32> {
        let email = new.email;
        let telephone = new.telephone;

        if Self::exists_by_contact(db, email.as_deref(), telephone.as_deref()).await? {
            warn!(
                "Client rejected, contact already registered: email={:?} telephone={:?}",
                email, telephone
            );
            return Err(HotelError::DuplicateClient { email, telephone });
        }

        let active_model = ClientActiveModel {
            id: NotSet,
            prenom: Set(new.prenom),
            nom: Set(new.nom),
            adresse: Set(non_blank(new.adresse)),
            ville: Set(non_blank(new.ville)),
            code_postal: Set(new.code_postal),
            email: Set(email),
            telephone: Set(telephone),
        };
        let model = active_model.insert(db).await?;
        info!("Client {} saved: {} {}", model.id, model.prenom, model.nom);
        Ok(model.id)
    }
}
