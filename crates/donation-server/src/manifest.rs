//! Web App Manifest
//!
//! Declares the app identity so browsers offer "add to home screen"
//! and the installed app opens standalone.

use serde::Serialize;

use crate::config::ShellConfig;

#[derive(Debug, Serialize)]
pub struct ManifestIcon {
    pub src: &'static str,
    pub sizes: &'static str,
    #[serde(rename = "type")]
    pub mime_type: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WebManifest {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub description: &'static str,
    pub lang: &'static str,
    pub start_url: &'static str,
    pub scope: &'static str,
    pub display: &'static str,
    pub background_color: &'static str,
    pub theme_color: &'static str,
    pub icons: Vec<ManifestIcon>,
}

impl From<&ShellConfig> for WebManifest {
    fn from(shell: &ShellConfig) -> Self {
        Self {
            id: shell.app_id.clone(),
            name: shell.app_name.clone(),
            short_name: shell.app_name.clone(),
            description: "Soutenez les causes qui vous tiennent à cœur",
            lang: "fr",
            start_url: "/",
            scope: "/",
            display: "standalone",
            background_color: "#ffffff",
            theme_color: "#e11d48",
            icons: vec![
                ManifestIcon {
                    src: "/icons/icon-192.png",
                    sizes: "192x192",
                    mime_type: "image/png",
                },
                ManifestIcon {
                    src: "/icons/icon-512.png",
                    sizes: "512x512",
                    mime_type: "image/png",
                },
            ],
        }
    }
}
