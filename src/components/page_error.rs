//! Blocking page-level error state.
//!
//! Peripheral fetch failures (lists, detail records) promote to this screen
//! instead of rendering stale or partial data; form submit failures stay
//! inline and never end up here.

use leptos::prelude::*;

#[component]
pub fn PageError(
    #[prop(default = "Something went wrong.".to_owned())] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="page-error">
            <p class="page-error__message">{message}</p>
            {on_retry
                .map(|cb| {
                    view! {
                        <button class="page-error__retry" on:click=move |_| cb.run(())>
                            "Try again"
                        </button>
                    }
                })}
        </div>
    }
}
