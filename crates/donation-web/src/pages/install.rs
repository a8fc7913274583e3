//! Install Page

use donation_core::install::{
    InstallView, INSTALL_BENEFITS, MANUAL_STEPS, NO_PROMPT_NOTICE,
};
use leptos::prelude::*;

use crate::components::{use_toaster, BackLink, Toast};
use crate::install::{is_standalone, replay_prompt, use_install_prompt};

#[component]
pub fn InstallPage() -> impl IntoView {
    let toaster = use_toaster();
    let prompt = use_install_prompt();
    let standalone = is_standalone();

    let view_state = move || InstallView::resolve(standalone, prompt.deferred.with(Option::is_some));

    let install = move |_| {
        let Some(event) = prompt.deferred.get_untracked() else {
            toaster.show(Toast::info(NO_PROMPT_NOTICE));
            return;
        };

        leptos::task::spawn_local(async move {
            match replay_prompt(&event).await {
                Ok(outcome) => {
                    // A prompt event can only be shown once.
                    prompt.set_deferred.set(None);
                    toaster.show(Toast::success(outcome.notification()));
                }
                Err(err) => {
                    leptos::logging::warn!("install prompt failed: {err:?}");
                    prompt.set_deferred.set(None);
                    toaster.show(Toast::info(NO_PROMPT_NOTICE));
                }
            }
        });
    };

    move || match view_state() {
        InstallView::AlreadyInstalled => view! { <AlreadyInstalled /> }.into_any(),
        state => view! {
            <div class="install">
                <BackLink href="/" label="Retour" />

                <header class="page-header">
                    <div class="app-icon">"📱"</div>
                    <h1>"Installer DonateNow"</h1>
                    <p class="subtitle">
                        "Installez notre application pour une expérience optimale et un accès rapide depuis votre écran d'accueil"
                    </p>
                </header>

                <section class="card">
                    <h2>"⬇ Avantages de l'installation"</h2>
                    <ul class="benefits">
                        {INSTALL_BENEFITS
                            .iter()
                            .map(|benefit| view! { <li>"✓ " {*benefit}</li> })
                            .collect_view()}
                    </ul>

                    {if state == InstallView::PromptAvailable {
                        view! {
                            <button class="btn btn-primary btn-large" on:click=install>
                                "Installer maintenant"
                            </button>
                        }
                        .into_any()
                    } else {
                        view! { <ManualInstructions /> }.into_any()
                    }}
                </section>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn AlreadyInstalled() -> impl IntoView {
    view! {
        <div class="install installed">
            <section class="card">
                <div class="success-badge">"✓"</div>
                <h1>"Application installée !"</h1>
                <p class="muted">"DonateNow est déjà installé sur votre appareil."</p>
                <a href="/" class="btn btn-primary">"← Retour à l'accueil"</a>
            </section>
        </div>
    }
}

#[component]
fn ManualInstructions() -> impl IntoView {
    view! {
        <div class="manual-install">
            <p class="muted">
                "Pour installer l'application, utilisez le menu de votre navigateur :"
            </p>
            {MANUAL_STEPS
                .iter()
                .map(|step| view! {
                    <div class="manual-step">
                        <p class="platform">{step.platform}</p>
                        <p class="muted">{step.instructions}</p>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
