use std::io;

use thiserror::Error;

use pintpass_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

pub use pintpass_core::repositories;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    R2d2(#[from] r2d2::Error),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

impl From<pintpass_entities::password::ParseError> for AppError {
    fn from(_: pintpass_entities::password::ParseError) -> Self {
        BError::Parameter(ParameterError::Password).into()
    }
}

impl From<pintpass_entities::email::EmailAddressParseError> for AppError {
    fn from(_: pintpass_entities::email::EmailAddressParseError) -> Self {
        BError::Parameter(ParameterError::EmailAddress).into()
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for BError {
    fn from(s: String) -> Self {
        Self::Internal(s)
    }
}
