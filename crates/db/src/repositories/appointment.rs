use crate::models::DbAppointment;
use chrono::NaiveDate;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn list_appointments(pool: &Pool<Postgres>) -> Result<Vec<DbAppointment>> {
    tracing::debug!("Listing all appointments");

    // Store-default row order, no ORDER BY
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, nome, data, hora, descricao
        FROM agendamentos
        "#,
    )
    .fetch_all(pool)
    .await?;

    tracing::debug!("Found {} appointments", appointments.len());
    Ok(appointments)
}

pub async fn get_appointment_by_id(
    pool: &Pool<Postgres>,
    id: i32,
) -> Result<Option<DbAppointment>> {
    tracing::debug!("Getting appointment by id: {}", id);

    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, nome, data, hora, descricao
        FROM agendamentos
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if let Some(a) = &appointment {
        tracing::debug!("Appointment found: id={}, nome={}", a.id, a.nome);
    } else {
        tracing::debug!("Appointment not found: id={}", id);
    }

    Ok(appointment)
}

pub async fn create_appointment(
    pool: &Pool<Postgres>,
    nome: &str,
    data: NaiveDate,
    hora: &str,
    descricao: Option<&str>,
) -> Result<DbAppointment> {
    tracing::debug!(
        "Creating appointment: nome={}, data={}, hora={}, has_descricao={}",
        nome,
        data,
        hora,
        descricao.is_some()
    );

    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO agendamentos (nome, data, hora, descricao)
        VALUES ($1, $2, $3, $4)
        RETURNING id, nome, data, hora, descricao
        "#,
    )
    .bind(nome)
    .bind(data)
    .bind(hora)
    .bind(descricao)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Appointment created successfully: id={}", appointment.id);
    Ok(appointment)
}

/// Overlays the provided fields on the stored row. Returns `Ok(None)` when
/// no row matches `id`; fields passed as `None` keep their stored values.
pub async fn update_appointment(
    pool: &Pool<Postgres>,
    id: i32,
    nome: Option<&str>,
    data: Option<NaiveDate>,
    hora: Option<&str>,
    descricao: Option<&str>,
) -> Result<Option<DbAppointment>> {
    let Some(appointment) = get_appointment_by_id(pool, id).await? else {
        return Ok(None);
    };

    let nome = nome.unwrap_or(&appointment.nome);
    let data = data.unwrap_or(appointment.data);
    let hora = hora.unwrap_or(&appointment.hora);
    let descricao = match descricao {
        Some(descricao) => Some(descricao),
        None => appointment.descricao.as_deref(),
    };

    let updated_appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        UPDATE agendamentos
        SET nome = $2, data = $3, hora = $4, descricao = $5
        WHERE id = $1
        RETURNING id, nome, data, hora, descricao
        "#,
    )
    .bind(id)
    .bind(nome)
    .bind(data)
    .bind(hora)
    .bind(descricao)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Appointment updated successfully: id={}", id);
    Ok(Some(updated_appointment))
}

/// Returns whether a row was removed, so callers can tell a missing id
/// apart from a successful delete.
pub async fn delete_appointment(pool: &Pool<Postgres>, id: i32) -> Result<bool> {
    tracing::debug!("Deleting appointment: id={}", id);

    let result = sqlx::query(
        r#"
        DELETE FROM agendamentos
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
