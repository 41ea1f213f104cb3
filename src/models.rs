use serde::{Deserialize, Serialize};

use crate::pagination::PaginationMeta;

/// A user record as returned by `GET /api/users`. The server row also
/// carries a password column; it is never deserialized into page state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) surname: String,
    pub(crate) email: String,
    #[serde(default)]
    pub(crate) nickname: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UsersResponse {
    pub(crate) users: Vec<User>,
    pub(crate) meta: PaginationMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct CreateUserRequest {
    pub(crate) name: String,
    pub(crate) surname: String,
    pub(crate) email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) nickname: Option<String>,
    pub(crate) password: String,
}

impl CreateUserRequest {
    /// Required fields go on the wire verbatim; a blank nickname collapses
    /// to `None` and the key is omitted from the body.
    pub(crate) fn from_fields(
        name: String,
        surname: String,
        email: String,
        nickname: String,
        password: String,
    ) -> Self {
        let nickname = if nickname.trim().is_empty() {
            None
        } else {
            Some(nickname)
        };

        Self {
            name,
            surname,
            email,
            nickname,
            password,
        }
    }
}
