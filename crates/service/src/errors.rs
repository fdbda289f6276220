use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("duplicate resource: {0}")]
    DuplicateResource(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn customer_not_found(id: i64) -> Self {
        Self::NotFound(format!("customer with id [{}] not found", id))
    }

    pub fn email_taken() -> Self { Self::DuplicateResource("email already taken".into()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::DuplicateResource(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Db(_) => 1200,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::Conflict(_) => ServiceError::email_taken(),
            ModelError::NotFound(msg) => ServiceError::NotFound(msg),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_map_to_service_kinds() {
        let e: ServiceError = ModelError::Conflict("uniq_customer_email".into()).into();
        assert!(matches!(e, ServiceError::DuplicateResource(ref m) if m == "email already taken"));

        let e: ServiceError = ModelError::Validation("name required".into()).into();
        assert_eq!(e.code(), 1001);

        let e: ServiceError = ModelError::Db("connection reset".into()).into();
        assert!(matches!(e, ServiceError::Db(_)));
    }

    #[test]
    fn not_found_message_names_the_id() {
        assert_eq!(
            ServiceError::customer_not_found(42).to_string(),
            "not found: customer with id [42] not found"
        );
    }
}
