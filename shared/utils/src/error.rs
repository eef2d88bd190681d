use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Error taxonomy of the master data operations.
///
/// Every store operation either fully applies or fails with one of these;
/// none of them is fatal to the process, and a failed operation leaves
/// prior state untouched.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum MasterDataError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: Uuid },

    #[error("{entity} already exists: {id}")]
    DuplicateId { entity: String, id: Uuid },

    #[error("invalid reference to product {product_id}: {message}")]
    InvalidReference { product_id: Uuid, message: String },

    #[error("a bill of materials must contain at least one component")]
    EmptyComponents,

    #[error("duplicate component line for product {product_id}")]
    DuplicateComponent { product_id: Uuid },

    #[error("product {id} is in use: {message}")]
    ProductInUse { id: Uuid, message: String },

    #[error("validation error: {field} - {message}")]
    Validation { field: String, message: String },
}

impl MasterDataError {
    pub fn not_found(entity: impl Into<String>, id: Uuid) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id,
        }
    }

    pub fn duplicate_id(entity: impl Into<String>, id: Uuid) -> Self {
        Self::DuplicateId {
            entity: entity.into(),
            id,
        }
    }

    pub fn invalid_reference(product_id: Uuid, message: impl Into<String>) -> Self {
        Self::InvalidReference {
            product_id,
            message: message.into(),
        }
    }

    pub fn product_in_use(id: Uuid, message: impl Into<String>) -> Self {
        Self::ProductInUse {
            id,
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::DuplicateId { .. } => "DUPLICATE_ID",
            Self::InvalidReference { .. } => "INVALID_REFERENCE",
            Self::EmptyComponents => "EMPTY_COMPONENTS",
            Self::DuplicateComponent { .. } => "DUPLICATE_COMPONENT",
            Self::ProductInUse { .. } => "PRODUCT_IN_USE",
            Self::Validation { .. } => "VALIDATION_ERROR",
        }
    }

    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::DuplicateId { .. } => 409,
            Self::InvalidReference { .. } => 422,
            Self::EmptyComponents => 422,
            Self::DuplicateComponent { .. } => 422,
            Self::ProductInUse { .. } => 409,
            Self::Validation { .. } => 400,
        }
    }
}

pub type MasterDataResult<T> = Result<T, MasterDataError>;

/// Wire shape for a failed operation, consumed by the view layer.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl From<MasterDataError> for ErrorResponse {
    fn from(error: MasterDataError) -> Self {
        Self {
            error: error.error_code().to_string(),
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }
}
