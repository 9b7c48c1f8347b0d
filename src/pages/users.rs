//! Household members: a read-only roster with role flags.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::data_table::{DataTable, TableRow};
use crate::components::page_error::PageError;
use crate::net::types::User;
use crate::pages::guard_page;
use crate::state::menu::Section;

pub(crate) fn role_label(user: &User) -> &'static str {
    match (user.is_owner, user.is_admin) {
        (true, _) => "Owner",
        (false, true) => "Admin",
        (false, false) => "Member",
    }
}

pub(crate) fn user_rows(users: &[User]) -> Vec<TableRow> {
    users
        .iter()
        .map(|user| {
            TableRow::new(
                &user.id,
                vec![
                    user.name.clone(),
                    user.email.clone(),
                    role_label(user).to_owned(),
                ],
            )
        })
        .collect()
}

#[component]
pub fn UsersPage() -> impl IntoView {
    guard_page(Section::Users);

    let users = RwSignal::new(Vec::<User>::new());
    let loading = RwSignal::new(true);
    let page_error = RwSignal::new(None::<String>);

    let load = move || {
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api;

            match api::list_users().await {
                Ok(items) => {
                    users.set(items);
                    page_error.set(None);
                }
                Err(e) => {
                    leptos::logging::warn!("user list fetch failed: {e}");
                    page_error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    };

    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if fetched.get() {
            return;
        }
        fetched.set(true);
        load();
    });

    view! {
        <div class="page users-page">
            <header class="page__header">
                <h1>"Members"</h1>
            </header>
            <Show
                when=move || page_error.get().is_none()
                fallback=move || {
                    view! {
                        <PageError
                            message=page_error.get().unwrap_or_default()
                            on_retry=Callback::new(move |()| load())
                        />
                    }
                }
            >
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="page__loading">"Loading..."</p> }
                >
                    {move || {
                        let rows = user_rows(&users.get());
                        view! {
                            <DataTable
                                headers=vec![
                                    "Name".to_owned(),
                                    "Email".to_owned(),
                                    "Role".to_owned(),
                                ]
                                rows=rows
                                empty_label="No members yet.".to_owned()
                            />
                        }
                    }}
                </Show>
            </Show>
        </div>
    }
}
