//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{provide_toaster, ToastRegion};
use crate::install::provide_install_prompt;
use crate::pages::{
    CausesPage, ConfirmationPage, DonatePage, HomePage, InstallPage, NotFoundPage,
};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_toaster();
    // The platform fires its install signal once, usually before /install is open.
    provide_install_prompt();

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/causes") view=CausesPage />
                    <Route path=path!("/donate/:id") view=DonatePage />
                    <Route path=path!("/confirmation") view=ConfirmationPage />
                    <Route path=path!("/install") view=InstallPage />
                </Routes>
            </main>
            <ToastRegion />
        </Router>
    }
}
