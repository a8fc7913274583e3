//! # donation-core
//!
//! Domain types for the DonateNow donation flow, shared by the HTTP server
//! and the WASM front-end.
//!
//! ```text
//! ┌──────────┐   ┌─────────────┐   ┌──────────────────┐   ┌──────────────┐
//! │ Catalog  │──▶│ Intake form │──▶│ Checkout session │──▶│ Confirmation │
//! │ (causes) │   │ (validate)  │   │   (provider)     │   │  (receipt)   │
//! └──────────┘   └─────────────┘   └──────────────────┘   └──────────────┘
//! ```
//!
//! Nothing in this crate performs I/O, so it compiles unchanged for the
//! native server and for `wasm32-unknown-unknown`.
//! Uses `rust_decimal` for all monetary values.

pub mod api;
pub mod catalog;
pub mod confirmation;
pub mod error;
pub mod install;
pub mod intake;
pub mod money;

pub use api::{CheckoutResponse, DonationRequest};
pub use catalog::{Cause, CauseId, CauseTheme};
pub use confirmation::Confirmation;
pub use error::{DonationError, Result};
pub use install::{InstallOutcome, InstallView};
