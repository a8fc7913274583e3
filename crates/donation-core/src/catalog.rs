//! Cause Catalog
//!
//! The single canonical list of fundraising causes. Every view and the
//! HTTP API reference causes by id through this module.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::error::{DonationError, Result};
use crate::money;

/// Stable cause identifier
pub type CauseId = u32;

/// Visual theme of a cause (icon and gradient)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CauseTheme {
    Children,
    Food,
    Education,
    Environment,
}

impl CauseTheme {
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Children => "❤️",
            Self::Food => "🍲",
            Self::Education => "🎓",
            Self::Environment => "🌳",
        }
    }

    pub const fn gradient_class(self) -> &'static str {
        match self {
            Self::Children => "gradient-rose",
            Self::Food => "gradient-amber",
            Self::Education => "gradient-cyan",
            Self::Environment => "gradient-emerald",
        }
    }
}

/// A fundraising cause
///
/// `raised_amount` is informational; donations made through the app do
/// not update it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cause {
    pub id: CauseId,
    pub title: &'static str,
    pub description: &'static str,
    pub raised_amount: Decimal,
    pub goal_amount: Decimal,
    pub image_url: &'static str,
    pub video_url: &'static str,
    pub theme: CauseTheme,
}

impl Cause {
    /// Raised / goal as a percentage, unbounded.
    pub fn progress_percent(&self) -> Decimal {
        if self.goal_amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.raised_amount / self.goal_amount * Decimal::ONE_HUNDRED
    }

    /// Width of the progress bar, clamped to 0..=100.
    pub fn progress_bar_percent(&self) -> Decimal {
        self.progress_percent().clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    }

    /// `"62% atteint"`
    pub fn progress_label(&self) -> String {
        let percent = self
            .progress_percent()
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        format!("{percent}% atteint")
    }

    pub fn raised_display(&self) -> String {
        money::format_eur_grouped(self.raised_amount)
    }

    pub fn goal_display(&self) -> String {
        format!("sur {}", money::format_eur_grouped(self.goal_amount))
    }

    /// Route of the donation form for this cause
    pub fn donate_path(&self) -> String {
        format!("/donate/{}", self.id)
    }
}

static CAUSES: [Cause; 4] = [
    Cause {
        id: 1,
        title: "Aide aux enfants défavorisés",
        description: "Soutenez l'éducation et la santé des enfants dans le besoin",
        raised_amount: dec!(12450),
        goal_amount: dec!(20000),
        image_url: "https://images.unsplash.com/photo-1488521787991-ed7bbaae773c?w=800&q=80",
        video_url: "https://cdn.pixabay.com/video/2023/03/19/154564-808896033_large.mp4",
        theme: CauseTheme::Children,
    },
    Cause {
        id: 2,
        title: "Aide alimentaire",
        description: "Fournir des repas aux familles dans la précarité",
        raised_amount: dec!(8900),
        goal_amount: dec!(15000),
        image_url: "https://images.unsplash.com/photo-1593113598332-cd288d649433?w=800&q=80",
        video_url: "https://cdn.pixabay.com/video/2020/06/16/42588-432770654_large.mp4",
        theme: CauseTheme::Food,
    },
    Cause {
        id: 3,
        title: "Bourses scolaires",
        description: "Financer l'éducation des jeunes talents",
        raised_amount: dec!(15600),
        goal_amount: dec!(25000),
        image_url: "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?w=800&q=80",
        video_url: "https://cdn.pixabay.com/video/2019/06/15/24008-342166236_large.mp4",
        theme: CauseTheme::Education,
    },
    Cause {
        id: 4,
        title: "Protection de l'environnement",
        description: "Projets de reforestation et préservation",
        raised_amount: dec!(6200),
        goal_amount: dec!(10000),
        image_url: "https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?w=800&q=80",
        video_url: "https://cdn.pixabay.com/video/2022/06/09/119754-719686106_large.mp4",
        theme: CauseTheme::Environment,
    },
];

/// All causes, in display order
pub fn all() -> &'static [Cause] {
    &CAUSES
}

pub fn find(id: CauseId) -> Option<&'static Cause> {
    CAUSES.iter().find(|cause| cause.id == id)
}

pub fn get(id: CauseId) -> Result<&'static Cause> {
    find(id).ok_or_else(|| DonationError::CauseNotFound(id.to_string()))
}

/// Resolve a route parameter such as `"2"`.
pub fn get_by_param(param: &str) -> Result<&'static Cause> {
    param
        .trim()
        .parse()
        .ok()
        .and_then(find)
        .ok_or_else(|| DonationError::CauseNotFound(param.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<_> = all().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn test_amounts_valid() {
        for cause in all() {
            assert!(cause.goal_amount > Decimal::ZERO, "{}", cause.title);
            assert!(cause.raised_amount >= Decimal::ZERO, "{}", cause.title);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(find(2).map(|c| c.title), Some("Aide alimentaire"));
        assert!(find(99).is_none());
        assert_eq!(get(99), Err(DonationError::CauseNotFound("99".into())));
        assert_eq!(get_by_param(" 3 ").map(|c| c.id), Ok(3));
        assert_eq!(get_by_param("abc"), Err(DonationError::CauseNotFound("abc".into())));
        assert_eq!(get_by_param("42"), Err(DonationError::CauseNotFound("42".into())));
    }

    #[test]
    fn test_not_found_message() {
        let err = get_by_param("7").unwrap_err();
        assert_eq!(err.title(), "Cause non trouvée");
        assert_eq!(err.to_string(), "Cause not found: 7");
    }

    #[test]
    fn test_progress() {
        let cause = find(1).unwrap();
        assert_eq!(cause.progress_percent(), dec!(62.25));
        assert_eq!(cause.progress_label(), "62% atteint");
        assert_eq!(cause.donate_path(), "/donate/1");
    }

    #[test]
    fn test_progress_bar_capped() {
        let mut cause = *find(4).unwrap();
        cause.raised_amount = dec!(15000);
        assert_eq!(cause.progress_percent(), dec!(150));
        assert_eq!(cause.progress_bar_percent(), dec!(100));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(find(2).unwrap()).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["theme"], "food");
        assert!(json.get("goalAmount").is_some());
    }
}
