//! Payment Error Types

use std::time::Duration;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Checkout initiation errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Amount missing, non-positive or not representable in minor units
    #[error("Invalid amount")]
    InvalidAmount,

    /// Cause or donor fields absent or empty
    #[error("Missing required fields: {0}")]
    MissingFields(String),

    /// Request body is not a donation payload
    #[error("Invalid request payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// Provider rejected the request, failed to answer, or answered badly
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider did not answer in time
    #[error("Provider timed out after {0:?}")]
    Timeout(Duration),

    /// Provider credentials not configured
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Failures of the external call rather than of the request
    pub const fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            Self::Provider(_) | Self::Timeout(_) | Self::Config(_)
        )
    }

    /// Get user-friendly message
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "Montant invalide",
            Self::MissingFields(_) => "Informations manquantes",
            Self::InvalidPayload(_) => "Requête invalide",
            Self::Timeout(_) => "Le service de paiement ne répond pas. Veuillez réessayer.",
            Self::Provider(_) | Self::Config(_) => {
                "Une erreur est survenue lors de la création du paiement"
            }
        }
    }
}
