use chrono::NaiveDate;

pub type Result<T> = std::result::Result<T, HotelError>;

#[derive(thiserror::Error, Debug)]
pub enum HotelError {
    #[error("client already registered (email: {email:?}, telephone: {telephone:?})")]
    DuplicateClient {
        email: Option<String>,
        telephone: Option<String>,
    },
    #[error("end date {end} must be after start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl HotelError {
    /// Rejections are surfaced to the operator as warnings; everything else is a failure.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            HotelError::DuplicateClient { .. } | HotelError::InvalidDateRange { .. }
        )
    }
}
