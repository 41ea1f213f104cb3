use leptos::prelude::*;

use crate::pagination;
use crate::state::PageState;

#[component]
pub(crate) fn UsersPanel(state: PageState) -> impl IntoView {
    let has_meta = Signal::derive({
        let state = state.clone();
        move || state.meta.get().is_some()
    });

    let page_label = Signal::derive({
        let state = state.clone();
        move || {
            state
                .meta
                .get()
                .map(|meta| format!("Page {} of {}", meta.page, meta.total_pages))
                .unwrap_or_default()
        }
    });

    let prev_disabled = Signal::derive({
        let state = state.clone();
        move || pagination::is_first_page(state.current_page.get())
    });

    let next_disabled = Signal::derive({
        let state = state.clone();
        move || {
            state
                .meta
                .get()
                .is_some_and(|meta| pagination::is_last_page(state.current_page.get(), meta.total_pages))
        }
    });

    let on_prev = Callback::new({
        let state = state.clone();
        move |_| {
            state
                .current_page
                .update(|page| *page = pagination::prev_page(*page));
        }
    });

    let on_next = Callback::new({
        let state = state.clone();
        move |_| {
            let Some(meta) = state.meta.get() else {
                return;
            };
            state
                .current_page
                .update(|page| *page = pagination::next_page(*page, meta.total_pages));
        }
    });

    view! {
        <ul class="user-list">
            <For
                each=move || state.users.get()
                key=|user| user.id
                children=|user| {
                    view! {
                        <li>
                            <span>{user.name}</span>
                            <span class="user-email">" (" {user.email} ")"</span>
                        </li>
                    }
                }
            />
        </ul>

        <Show when=move || has_meta.get()>
            <div class="pagination">
                <span>{move || page_label.get()}</span>
                <button on:click=move |_| on_prev.run(()) disabled=move || prev_disabled.get()>
                    "Previous"
                </button>
                <button on:click=move |_| on_next.run(()) disabled=move || next_disabled.get()>
                    "Next"
                </button>
            </div>
        </Show>
    }
}
