use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i32,
    pub nome: String,
    pub data: NaiveDate,
    pub hora: String,
    pub descricao: Option<String>,
}

/// Fields a client may supply when creating an appointment. `id` is
/// assigned by the store and is never part of the request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub nome: String,
    pub data: NaiveDate,
    pub hora: String,
    pub descricao: Option<String>,
}

/// Partial update: fields left out of the body keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub nome: Option<String>,
    pub data: Option<NaiveDate>,
    pub hora: Option<String>,
    pub descricao: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub id: i32,
    pub nome: String,
    pub data: NaiveDate,
    pub hora: String,
    pub descricao: Option<String>,
}
