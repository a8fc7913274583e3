use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <p>"Page introuvable"</p>
            <a href="/" class="btn">"Retour à l'accueil"</a>
        </div>
    }
}
