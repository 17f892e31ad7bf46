use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Agendamento não encontrado")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Database(#[from] eyre::Report),

    #[error("{0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type AgendaResult<T> = Result<T, AgendaError>;
