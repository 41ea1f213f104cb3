use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::api;
use crate::state::{PageState, UserFormFields};

#[component]
pub(crate) fn UserForm(
    state: PageState,
    fields: UserFormFields,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let on_submit = Callback::new({
        let state = state.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            state.clear_error();

            let request = fields.to_request();

            state.loading.set(true);
            let state2 = state.clone();
            spawn_local(async move {
                match api::create_user(&request).await {
                    Ok(()) => {
                        // Refresh picks the loading flag straight back up.
                        state2.loading.set(false);
                        on_refresh.run(());
                    }
                    Err(err) => {
                        web_sys::console::error_1(&JsValue::from(format!(
                            "create user failed: {err}"
                        )));
                        state2.set_error("Failed to create user");
                        state2.loading.set(false);
                    }
                }
            });
        }
    });

    view! {
        <h2>"Add New User"</h2>
        <form on:submit=move |ev| on_submit.run(ev)>
            <label>
                "Name"
                <input
                    name="name"
                    type="text"
                    required=true
                    prop:value=move || fields.name.get()
                    on:input=move |ev| fields.name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Surname"
                <input
                    name="surname"
                    type="text"
                    required=true
                    prop:value=move || fields.surname.get()
                    on:input=move |ev| fields.surname.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Email"
                <input
                    name="email"
                    type="email"
                    required=true
                    prop:value=move || fields.email.get()
                    on:input=move |ev| fields.email.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Nickname"
                <input
                    name="nickname"
                    type="text"
                    prop:value=move || fields.nickname.get()
                    on:input=move |ev| fields.nickname.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Password"
                <input
                    name="password"
                    type="password"
                    required=true
                    prop:value=move || fields.password.get()
                    on:input=move |ev| fields.password.set(event_target_value(&ev))
                />
            </label>
            <button type="submit">"Add User"</button>
        </form>
    }
}
