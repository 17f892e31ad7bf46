use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use agenda_core::{
    errors::AgendaError,
    models::appointment::{
        AppointmentResponse, CreateAppointmentRequest, UpdateAppointmentRequest,
    },
};
use agenda_db::models::DbAppointment;

use crate::{middleware::error_handling::AppError, ApiState};

fn to_response(appointment: DbAppointment) -> AppointmentResponse {
    AppointmentResponse {
        id: appointment.id,
        nome: appointment.nome,
        data: appointment.data,
        hora: appointment.hora,
        descricao: appointment.descricao,
    }
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let appointments = agenda_db::repositories::appointment::list_appointments(&state.db_pool)
        .await
        .map_err(AgendaError::Database)?;

    Ok(Json(appointments.into_iter().map(to_response).collect()))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let appointment =
        agenda_db::repositories::appointment::get_appointment_by_id(&state.db_pool, id)
            .await
            .map_err(AgendaError::Database)?
            .ok_or(AgendaError::NotFound)?;

    Ok(Json(to_response(appointment)))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<CreateAppointmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AppointmentResponse>), AppError> {
    // A malformed body is a client error and shares the { error } shape
    let Json(payload) =
        payload.map_err(|rejection| AgendaError::Validation(rejection.body_text()))?;

    let appointment = agenda_db::repositories::appointment::create_appointment(
        &state.db_pool,
        &payload.nome,
        payload.data,
        &payload.hora,
        payload.descricao.as_deref(),
    )
    .await
    .map_err(|e| AgendaError::Validation(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(to_response(appointment))))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateAppointmentRequest>, JsonRejection>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let Json(payload) =
        payload.map_err(|rejection| AgendaError::Validation(rejection.body_text()))?;

    // Fields omitted from the body keep their stored values
    let appointment = agenda_db::repositories::appointment::update_appointment(
        &state.db_pool,
        id,
        payload.nome.as_deref(),
        payload.data,
        payload.hora.as_deref(),
        payload.descricao.as_deref(),
    )
    .await
    .map_err(|e| AgendaError::Validation(e.to_string()))?
    .ok_or(AgendaError::NotFound)?;

    Ok(Json(to_response(appointment)))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let deleted = agenda_db::repositories::appointment::delete_appointment(&state.db_pool, id)
        .await
        .map_err(AgendaError::Database)?;

    if !deleted {
        return Err(AppError(AgendaError::NotFound));
    }

    Ok(StatusCode::NO_CONTENT)
}
