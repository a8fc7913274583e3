//! Install Prompt decisions
//!
//! The browser side captures the platform's install signal; what to show
//! and what to tell the user is decided here.

use std::str::FromStr;

/// What the install page displays
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstallView {
    /// Running as an installed app already
    AlreadyInstalled,
    /// A deferred platform prompt is stored and can be replayed
    PromptAvailable,
    /// No prompt available; show manual steps
    ManualInstructions,
}

impl InstallView {
    pub const fn resolve(standalone: bool, prompt_stored: bool) -> Self {
        if standalone {
            Self::AlreadyInstalled
        } else if prompt_stored {
            Self::PromptAvailable
        } else {
            Self::ManualInstructions
        }
    }
}

/// The user's answer to the replayed prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstallOutcome {
    Accepted,
    Dismissed,
}

impl FromStr for InstallOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accepted" => Ok(Self::Accepted),
            "dismissed" => Ok(Self::Dismissed),
            other => Err(format!("unknown install outcome: {other}")),
        }
    }
}

impl InstallOutcome {
    pub const fn notification(self) -> &'static str {
        match self {
            Self::Accepted => "Application installée avec succès !",
            Self::Dismissed => "Installation annulée",
        }
    }
}

/// Shown when the install button is used without a stored prompt
pub const NO_PROMPT_NOTICE: &str =
    "Utilisez le menu de votre navigateur pour installer l'application";

pub const INSTALL_BENEFITS: [&str; 5] = [
    "Accès instantané depuis votre écran d'accueil",
    "Fonctionne hors ligne",
    "Notifications pour vos dons",
    "Expérience d'application native",
    "Pas de place perdue dans votre mémoire",
];

/// Manual "add to home screen" steps for one platform
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManualInstallStep {
    pub platform: &'static str,
    pub instructions: &'static str,
}

pub const MANUAL_STEPS: [ManualInstallStep; 2] = [
    ManualInstallStep {
        platform: "Sur iPhone/iPad (Safari) :",
        instructions: "Appuyez sur Partager puis Sur l'écran d'accueil",
    },
    ManualInstallStep {
        platform: "Sur Android (Chrome) :",
        instructions: "Menu ⋮ puis Installer l'application ou Ajouter à l'écran d'accueil",
    },
];
