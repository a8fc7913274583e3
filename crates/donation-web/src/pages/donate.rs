//! Donate Page

use donation_core::{catalog::{self, Cause}, intake, money};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::components::{use_toaster, BackLink, Toast};

#[component]
pub fn DonatePage() -> impl IntoView {
    let params = use_params_map();
    let cause = move || catalog::get_by_param(&params.read().get("id").unwrap_or_default());

    move || match cause() {
        Ok(cause) => view! { <DonationForm cause=cause /> }.into_any(),
        Err(err) => view! {
            <div class="not-found">
                <h1>{err.title()}</h1>
                <p>{err.user_message()}</p>
                <BackLink href="/causes" label="Retour aux causes" />
            </div>
        }
        .into_any(),
    }
}

fn new_key() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[component]
fn DonationForm(cause: &'static Cause) -> impl IntoView {
    let toaster = use_toaster();
    let (amount, set_amount) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let submission_key = StoredValue::new(intake::SubmissionKey::default());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let request = match intake::validate_form(
            cause,
            &amount.get_untracked(),
            &name.get_untracked(),
            &email.get_untracked(),
        ) {
            Ok(request) => request,
            Err(err) => {
                toaster.show(Toast::error(err.title(), err.user_message()));
                return;
            }
        };

        set_loading.set(true);
        let key = submission_key
            .try_update_value(|keys| keys.key_for(&request, new_key))
            .unwrap_or_else(new_key);
        leptos::task::spawn_local(async move {
            let result = match api::create_payment_intent(&request, &key).await {
                Ok(url) => api::redirect_to(&url),
                Err(message) => Err(message),
            };
            if let Err(message) = result {
                toaster.show(Toast::error("Erreur", message));
                set_loading.set(false);
            }
        });
    };

    let submit_label = move || {
        if loading.get() {
            "Traitement en cours...".to_string()
        } else {
            let value = intake::parse_amount(&amount.get()).unwrap_or_default();
            format!("Donner {}", money::format_eur(value))
        }
    };

    view! {
        <div class="donate">
            <BackLink href="/causes" label="Retour aux causes" />

            <section class="card">
                <header class="card-header">
                    <span class="cause-icon">{cause.theme.icon()}</span>
                    <h1>{cause.title}</h1>
                    <p class="description">{cause.description}</p>
                </header>

                <form on:submit=submit>
                    <fieldset disabled=move || loading.get()>
                        <label class="section-label">"Montant de votre don"</label>
                        <div class="suggested-amounts">
                            {intake::SUGGESTED_AMOUNTS
                                .iter()
                                .map(|&suggested| {
                                    let value = suggested.to_string();
                                    let selected = {
                                        let value = value.clone();
                                        move || amount.get() == value
                                    };
                                    view! {
                                        <button
                                            type="button"
                                            class="btn amount"
                                            class:selected=selected
                                            on:click=move |_| set_amount.set(value.clone())
                                        >
                                            {format!("{suggested}€")}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="custom-amount">
                            <input
                                type="number"
                                min="1"
                                step="0.01"
                                placeholder="Montant personnalisé"
                                prop:value=move || amount.get()
                                on:input=move |ev| set_amount.set(event_target_value(&ev))
                            />
                            <span class="currency">"€"</span>
                        </div>

                        <div class="field">
                            <label for="name">"Nom complet"</label>
                            <input
                                id="name"
                                placeholder="Jean Dupont"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="field">
                            <label for="email">"Email"</label>
                            <input
                                id="email"
                                type="email"
                                placeholder="jean@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>

                        <button type="submit" class="btn btn-primary btn-large">
                            {submit_label}
                        </button>
                    </fieldset>

                    <p class="secure-note">
                        "Paiement sécurisé par Stripe. Vos informations sont protégées."
                    </p>
                </form>
            </section>
        </div>
    }
}
