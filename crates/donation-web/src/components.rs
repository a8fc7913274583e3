//! UI Components

use std::time::Duration;

use donation_core::catalog::Cause;
use leptos::prelude::*;

const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Info => "toast toast-info",
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
        }
    }
}

/// A transient, non-blocking notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            title: title.into(),
            description: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: None,
        }
    }
}

/// Handle for showing toasts, shared through context
#[derive(Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<Toast>>,
}

impl Toaster {
    /// Show `toast`, replacing any visible one; it hides itself later.
    pub fn show(self, toast: Toast) {
        self.current.set(Some(toast.clone()));
        let current = self.current;
        set_timeout(
            move || {
                if current.with_untracked(|shown| shown.as_ref() == Some(&toast)) {
                    current.set(None);
                }
            },
            TOAST_DURATION,
        );
    }
}

pub fn provide_toaster() {
    provide_context(Toaster {
        current: RwSignal::new(None),
    });
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastRegion() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-region" role="status" aria-live="polite">
            {move || toaster.current.get().map(|toast| view! {
                <div class=toast.kind.class()>
                    <strong>{toast.title}</strong>
                    {toast.description.map(|description| view! { <p>{description}</p> })}
                </div>
            })}
        </div>
    }
}

/// "← Retour" link
#[component]
pub fn BackLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a href=href class="btn btn-ghost back-link">"← " {label}</a>
    }
}

/// Cause card for the catalog grid
#[component]
pub fn CauseCard(cause: &'static Cause) -> impl IntoView {
    let progress_style = format!("width: {}%", cause.progress_bar_percent().round());

    view! {
        <article class="cause-card">
            <div class="cause-media">
                <video autoplay=true loop=true muted=true playsinline=true preload="metadata" poster=cause.image_url>
                    <source src=cause.video_url type="video/mp4" />
                </video>
                <div class=format!("cause-overlay {}", cause.theme.gradient_class())></div>
                <span class="cause-icon">{cause.theme.icon()}</span>
            </div>

            <header>
                <h2>{cause.title}</h2>
                <p class="description">{cause.description}</p>
            </header>

            <div class="progress">
                <div class="progress-amounts">
                    <span class="raised">{cause.raised_display()}</span>
                    <span class="goal">{cause.goal_display()}</span>
                </div>
                <div class="progress-track">
                    <div class=format!("progress-bar {}", cause.theme.gradient_class()) style=progress_style></div>
                </div>
                <p class="progress-label">{cause.progress_label()}</p>
            </div>

            <a href=cause.donate_path() class="btn btn-primary">"Faire un don"</a>
        </article>
    }
}
