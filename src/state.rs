use leptos::prelude::*;

use crate::models::{CreateUserRequest, User};
use crate::pagination::PaginationMeta;

#[derive(Debug, Clone)]
pub(crate) struct PageState {
    pub(crate) users: RwSignal<Vec<User>>,
    pub(crate) meta: RwSignal<Option<PaginationMeta>>,
    pub(crate) current_page: RwSignal<u32>,
    pub(crate) loading: RwSignal<bool>,
    pub(crate) error: RwSignal<Option<String>>,
}

impl PageState {
    pub(crate) fn new() -> Self {
        Self {
            users: RwSignal::new(Vec::new()),
            meta: RwSignal::new(None),
            current_page: RwSignal::new(1),
            // The first paint happens before the initial fetch effect runs;
            // starting raised keeps the loading view up until then.
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
        }
    }

    pub(crate) fn set_error(&self, message: impl Into<String>) {
        self.error.set(Some(message.into()));
    }

    pub(crate) fn clear_error(&self) {
        self.error.set(None);
    }
}

/// Create-form inputs. Owned by the page root, not the form component: the
/// loading and error views unmount the form subtree, and signals scoped
/// there would lose their contents on every fetch cycle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UserFormFields {
    pub(crate) name: RwSignal<String>,
    pub(crate) surname: RwSignal<String>,
    pub(crate) email: RwSignal<String>,
    pub(crate) nickname: RwSignal<String>,
    pub(crate) password: RwSignal<String>,
}

impl UserFormFields {
    pub(crate) fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            surname: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            nickname: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
        }
    }

    pub(crate) fn to_request(&self) -> CreateUserRequest {
        CreateUserRequest::from_fields(
            self.name.get(),
            self.surname.get(),
            self.email.get(),
            self.nickname.get(),
            self.password.get(),
        )
    }
}
