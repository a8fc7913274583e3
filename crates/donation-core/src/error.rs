//! Error Types for the donation domain

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DonationError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DonationError {
    #[error("Cause not found: {0}")]
    CauseNotFound(String),

    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Missing required donor fields")]
    MissingFields,

    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("Missing query parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid query parameter {name}: {value:?}")]
    InvalidParameter { name: &'static str, value: String },
}

impl DonationError {
    /// Short notification title
    pub const fn title(&self) -> &'static str {
        match self {
            Self::CauseNotFound(_) => "Cause non trouvée",
            Self::InvalidAmount(_) => "Montant invalide",
            Self::MissingFields => "Informations manquantes",
            Self::InvalidEmail(_) => "Email invalide",
            Self::MissingParameter(_) | Self::InvalidParameter { .. } => "Lien invalide",
        }
    }

    /// User-facing description
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::CauseNotFound(_) => "Cette cause n'existe pas ou n'est plus disponible.",
            Self::InvalidAmount(_) => "Veuillez entrer un montant valide",
            Self::MissingFields => "Veuillez remplir tous les champs",
            Self::InvalidEmail(_) => "Veuillez entrer une adresse email valide",
            Self::MissingParameter(_) | Self::InvalidParameter { .. } => {
                "Ce lien de confirmation est incomplet."
            }
        }
    }
}
