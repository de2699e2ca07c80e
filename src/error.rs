use thiserror::Error;
use unit_registry::RegistryError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// No category with this name.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The from/to unit is not part of the category.
    #[error("Unknown unit '{unit}' in category {category}")]
    UnknownUnit { category: String, unit: String },

    /// Linear‑only operation requested on a custom category.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Undefined arithmetic (reciprocal of zero, non‑finite input, …).
    #[error("Domain error: {0}")]
    DomainError(String),

    /// Bad value in the environment / `.env` configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A catalog entry breaks the registry invariants.
    #[error("Invalid registry definition: {0}")]
    InvalidRegistry(String),
}

impl From<RegistryError> for ConvertError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::UnknownCategory(name) => Self::UnknownCategory(name),
            RegistryError::UnknownUnit { category, unit } => Self::UnknownUnit { category, unit },
            RegistryError::UnsupportedOperation(msg) => Self::UnsupportedOperation(msg),
            RegistryError::InvalidDefinition(msg) => Self::InvalidRegistry(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
