use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Ordem de serviço não encontrada")]
    OrderNotFound,

    #[error("Agendamento não encontrado")]
    AppointmentNotFound,

    #[error("Item de estoque não encontrado")]
    ItemNotFound,

    #[error("Despesa não encontrada")]
    ExpenseNotFound,

    #[error("Registro de histórico não encontrado")]
    ServiceEntryNotFound,

    // Transição de status rejeitada pela máquina de estados da OS
    #[error("Transição inválida: {0}")]
    InvalidTransition(String),

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::InvalidTransition(reason) => {
                let body = Json(json!({ "error": reason }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }
            AppError::OrderNotFound => {
                (StatusCode::NOT_FOUND, "Ordem de serviço não encontrada.")
            }
            AppError::AppointmentNotFound => (StatusCode::NOT_FOUND, "Agendamento não encontrado."),
            AppError::ItemNotFound => (StatusCode::NOT_FOUND, "Item de estoque não encontrado."),
            AppError::ExpenseNotFound => (StatusCode::NOT_FOUND, "Despesa não encontrada."),
            AppError::ServiceEntryNotFound => {
                (StatusCode::NOT_FOUND, "Registro de histórico não encontrado.")
            }

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            // O `tracing` vai logar a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
