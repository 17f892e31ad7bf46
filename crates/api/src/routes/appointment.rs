use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/agendamentos", get(handlers::appointment::list_appointments))
        .route("/agendamentos", post(handlers::appointment::create_appointment))
        .route("/agendamentos/:id", get(handlers::appointment::get_appointment))
        .route("/agendamentos/:id", put(handlers::appointment::update_appointment))
        .route(
            "/agendamentos/:id",
            delete(handlers::appointment::delete_appointment),
        )
}
