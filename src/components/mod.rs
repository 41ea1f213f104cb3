pub(crate) mod user_form;
pub(crate) mod users_panel;
