//! Causes Page

use donation_core::catalog;
use leptos::prelude::*;

use crate::components::{BackLink, CauseCard};

#[component]
pub fn CausesPage() -> impl IntoView {
    view! {
        <div class="causes">
            <BackLink href="/" label="Retour" />

            <header class="page-header">
                <h1>"Nos causes"</h1>
                <p class="subtitle">
                    "Choisissez une cause qui vous tient à cœur et faites la différence aujourd'hui"
                </p>
            </header>

            <div class="cause-grid">
                {catalog::all()
                    .iter()
                    .map(|cause| view! { <CauseCard cause=cause /> })
                    .collect_view()}
            </div>
        </div>
    }
}
