//! Confirmation Page

use donation_core::confirmation::Confirmation;
use leptos::prelude::*;
use leptos_router::{components::Redirect, hooks::use_query_map};

/// Thank-you summary after the hosted checkout redirects back.
///
/// Any missing or unusable parameter sends the visitor to `/`.
#[component]
pub fn ConfirmationPage() -> impl IntoView {
    let query = use_query_map();
    let confirmation = Memo::new(move |_| {
        query.with(|params| Confirmation::from_lookup(|key| params.get(key)))
    });

    move || match confirmation.get() {
        Ok(confirmation) => view! { <Receipt confirmation=confirmation /> }.into_any(),
        Err(err) => {
            leptos::logging::warn!("invalid confirmation visit, redirecting home: {err}");
            view! { <Redirect path="/" /> }.into_any()
        }
    }
}

#[component]
fn Receipt(confirmation: Confirmation) -> impl IntoView {
    view! {
        <div class="confirmation">
            <section class="card">
                <div class="success-badge">"✓"</div>
                <h1>{confirmation.greeting()}</h1>

                <div class="summary">
                    <p class="muted">"Votre don de"</p>
                    <p class="amount">{confirmation.amount_display()}</p>
                    <p class="muted">
                        "pour " <span class="cause">{confirmation.cause.clone()}</span>
                    </p>
                    <p class="muted">"a été reçu avec succès !"</p>
                </div>

                <div class="note">
                    <span class="heart">"❤️"</span>
                    <p>
                        "Votre générosité va changer des vies. Un reçu fiscal vous sera envoyé par email dans les prochaines heures."
                    </p>
                </div>

                <div class="actions">
                    <a href="/causes" class="btn btn-primary">"Voir d'autres causes"</a>
                    <a href="/" class="btn btn-outline">"🏠 Retour à l'accueil"</a>
                </div>
            </section>
        </div>
    }
}
