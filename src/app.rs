use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::api;
use crate::components::user_form::UserForm;
use crate::components::users_panel::UsersPanel;
use crate::state::{PageState, UserFormFields};

const PAGE_SIZE: u32 = 10;

fn load_users(state: PageState, page: u32) {
    state.loading.set(true);
    state.clear_error();

    leptos::task::spawn_local(async move {
        match api::fetch_users(page, PAGE_SIZE).await {
            Ok(resp) => {
                state.users.set(resp.users);
                state.meta.set(Some(resp.meta));
            }
            Err(err) => {
                web_sys::console::error_1(&JsValue::from(format!("fetch users failed: {err}")));
                state.set_error("Failed to fetch users");
            }
        }
        state.loading.set(false);
    });
}

#[component]
pub fn App() -> impl IntoView {
    let state = PageState::new();
    let form = UserFormFields::new();

    // Runs once on mount for the page-1 fetch, then again on every
    // current_page change.
    Effect::new({
        let state = state.clone();
        move |_| {
            let page = state.current_page.get();
            load_users(state.clone(), page);
        }
    });

    let on_refresh = Callback::new({
        let state = state.clone();
        move |_| {
            let page = state.current_page.get();
            load_users(state.clone(), page);
        }
    });

    let body_state = state.clone();
    let panel_state = state.clone();
    let form_state = state;

    view! {
        <main class="page">
            <section class="container">
                {move || {
                    if body_state.loading.get() {
                        view! { <p>"Loading users..."</p> }.into_any()
                    } else if let Some(message) = body_state.error.get() {
                        view! { <p>"Error: " {message}</p> }.into_any()
                    } else {
                        view! {
                            <h1>"Users"</h1>
                            <UsersPanel state=panel_state.clone() />
                            <UserForm state=form_state.clone() fields=form on_refresh=on_refresh />
                        }
                            .into_any()
                    }
                }}
            </section>
        </main>
    }
}
