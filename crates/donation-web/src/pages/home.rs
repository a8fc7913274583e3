//! Home Page

use leptos::prelude::*;

const STATS: [(&str, &str, &str); 3] = [
    ("👥", "2,500+", "Donateurs actifs"),
    ("❤️", "43,150€", "Dons collectés"),
    ("✨", "12", "Causes soutenues"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="hero">
                <a href="/install" class="btn btn-outline install-link">"📱 Installer l'app"</a>
                <h1>"Ensemble, changeons des vies"</h1>
                <p class="tagline">
                    "Votre générosité peut faire la différence. Soutenez les causes qui vous tiennent à cœur."
                </p>
                <div class="cta">
                    <a href="/causes" class="btn btn-primary">"Faire un don"</a>
                    <a href="/causes" class="btn btn-outline">"Découvrir les causes"</a>
                </div>
            </header>

            <section class="stats">
                {STATS
                    .iter()
                    .map(|(icon, value, label)| view! {
                        <div class="stat">
                            <span class="stat-icon">{*icon}</span>
                            <div class="stat-value">{*value}</div>
                            <div class="stat-label">{*label}</div>
                        </div>
                    })
                    .collect_view()}
            </section>

            <section class="closing-cta">
                <h2>"Prêt à faire la différence ?"</h2>
                <p>"Chaque don compte. Rejoignez notre communauté de généreux donateurs."</p>
                <a href="/causes" class="btn btn-primary">"Voir toutes les causes"</a>
            </section>
        </div>
    }
}
