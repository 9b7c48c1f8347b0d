//! Transient toast notifications for non-blocking feedback.

use leptos::prelude::*;

/// Show `message` until it is cleared. The host auto-dismisses after a few
/// seconds in the browser; on the server it renders nothing.
#[component]
pub fn ToastHost(message: RwSignal<Option<String>>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if message.get().is_none() {
            return;
        }
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
            message.set(None);
        });
    });

    view! {
        <Show when=move || message.get().is_some()>
            <div class="toast" role="status">
                <span class="toast__text">{move || message.get().unwrap_or_default()}</span>
                <button class="toast__dismiss" on:click=move |_| message.set(None)>
                    "✕"
                </button>
            </div>
        </Show>
    }
}
