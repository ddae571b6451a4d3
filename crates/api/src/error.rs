// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use safeguard_domain::DomainError;
use safeguard_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The request field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A resource with the same unique key already exists.
    DuplicateResource {
        /// The type of resource that collided.
        resource_type: String,
        /// A human-readable description of the collision.
        message: String,
    },
    /// A reference to another resource is dangling, or a resource that is
    /// still referenced was about to be removed.
    ReferenceViolation {
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DuplicateResource {
                resource_type,
                message,
            } => {
                write!(f, "Duplicate {resource_type}: {message}")
            }
            Self::ReferenceViolation { message } => {
                write!(f, "Reference violation: {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// The field name reported is the request field the client sent, not the
/// domain attribute name.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let field: &str = match &err {
        DomainError::InvalidName(_) => "nome",
        DomainError::InvalidCpf(_) => "cpf",
        DomainError::InvalidDescription(_) => "descrição",
        DomainError::InvalidExpiry(_) => "validade",
        DomainError::InvalidDeliveryDate(_) => "data_de_entrega",
        DomainError::InvalidApprovalCode { .. } => "ca",
        DomainError::InvalidPeriod { .. } => "periodo",
    };

    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

/// Translates a persistence error into an API error.
///
/// # Arguments
///
/// * `err` - The persistence error
/// * `resource_type` - The resource the failed operation acted on
#[must_use]
pub fn translate_persistence_error(err: PersistenceError, resource_type: &str) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: resource_type.to_string(),
            message,
        },
        PersistenceError::UniqueViolation(message) => ApiError::DuplicateResource {
            resource_type: resource_type.to_string(),
            message,
        },
        PersistenceError::ForeignKeyViolation(message) => ApiError::ReferenceViolation { message },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
