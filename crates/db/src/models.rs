use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: i32,
    pub nome: String,
    pub data: NaiveDate,
    pub hora: String,
    pub descricao: Option<String>,
}
