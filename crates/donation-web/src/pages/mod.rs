//! Page Components

mod causes;
mod confirmation;
mod donate;
mod home;
mod install;
mod not_found;

pub use causes::CausesPage;
pub use confirmation::ConfirmationPage;
pub use donate::DonatePage;
pub use home::HomePage;
pub use install::InstallPage;
pub use not_found::NotFoundPage;
