//! Deferred install prompt
//!
//! Captures the platform's `beforeinstallprompt` event so the install
//! page can replay it on demand.

use donation_core::install::InstallOutcome;
use leptos::{ev, prelude::*, reactive::owner::LocalStorage};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// The stored prompt event, if the platform offered one
#[derive(Clone, Copy)]
pub struct InstallPrompt {
    pub deferred: ReadSignal<Option<web_sys::Event>, LocalStorage>,
    pub set_deferred: WriteSignal<Option<web_sys::Event>, LocalStorage>,
}

pub fn provide_install_prompt() {
    let (deferred, set_deferred) = signal_local(None::<web_sys::Event>);

    let handle = window_event_listener(
        ev::Custom::<web_sys::Event>::new("beforeinstallprompt"),
        move |event| {
            // Keep the browser's own mini-infobar from showing.
            event.prevent_default();
            set_deferred.set(Some(event));
        },
    );
    on_cleanup(move || handle.remove());

    provide_context(InstallPrompt {
        deferred,
        set_deferred,
    });
}

pub fn use_install_prompt() -> InstallPrompt {
    expect_context::<InstallPrompt>()
}

/// Already running as an installed app (display-mode or iOS standalone)
pub fn is_standalone() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    let display_mode = window
        .match_media("(display-mode: standalone)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches());

    let ios_standalone = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("standalone"))
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false);

    display_mode || ios_standalone
}

/// Show the stored prompt and wait for the user's choice.
///
/// An unrecognised choice counts as dismissed.
pub async fn replay_prompt(event: &web_sys::Event) -> Result<InstallOutcome, JsValue> {
    let prompt: js_sys::Function =
        js_sys::Reflect::get(event, &JsValue::from_str("prompt"))?.dyn_into()?;
    prompt.call0(event)?;

    let choice: js_sys::Promise =
        js_sys::Reflect::get(event, &JsValue::from_str("userChoice"))?.dyn_into()?;
    let result = JsFuture::from(choice).await?;

    let outcome = js_sys::Reflect::get(&result, &JsValue::from_str("outcome"))?
        .as_string()
        .and_then(|outcome| outcome.parse().ok())
        .unwrap_or(InstallOutcome::Dismissed);

    Ok(outcome)
}
