//! Admin session: authentication flag, user profile and the persisted
//! bearer token.
//!
//! The token and a mirrored user record live in `localStorage` under fixed
//! keys. Rehydration at startup requires both — a token without its user
//! record (or vice versa) is treated as no session. Logout removes both
//! keys and is idempotent.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use web_sys::window;
use yew::prelude::*;

const TOKEN_KEY: &str = "va:auth:token";
const USER_KEY: &str = "va:auth:user";

/// Minimal user record mirrored next to the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
}

/// Authentication state published through a [`ContextProvider`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub user: Option<UserProfile>,
}

impl SessionState {
    /// Rebuild the session from persisted storage. Both the token and the
    /// user record must be present, otherwise the visitor stays signed out.
    pub fn rehydrate() -> Self {
        match (stored_token(), stored_user()) {
            (Some(_), Some(user)) => SessionState {
                is_authenticated: true,
                user: Some(user),
            },
            _ => SessionState {
                is_authenticated: false,
                user: None,
            },
        }
    }
}

/// Actions on the session state.
pub enum SessionAction {
    /// A login call succeeded; credentials are already persisted.
    LogIn(UserProfile),
    /// Sign out, or tear down after a 401.
    LogOut,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::LogIn(user) => Rc::new(SessionState {
                is_authenticated: true,
                user: Some(user),
            }),
            SessionAction::LogOut => {
                clear_credentials();
                Rc::new(SessionState {
                    is_authenticated: false,
                    user: None,
                })
            },
        }
    }
}

/// Handle to the session context.
pub type SessionContext = UseReducerHandle<SessionState>;

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

/// The persisted bearer token, attached to privileged API calls.
pub fn stored_token() -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
}

fn stored_user() -> Option<UserProfile> {
    local_storage()
        .and_then(|storage| storage.get_item(USER_KEY).ok().flatten())
        .and_then(|raw| serde_json::from_str(&raw).ok())
}

/// Persist a fresh token and its user record after a successful login.
pub fn store_credentials(token: &str, user: &UserProfile) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(serialized) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &serialized);
        }
    }
}

/// Remove every piece of credential material. Safe to call repeatedly;
/// also invoked by the API layer when a call comes back 401.
pub fn clear_credentials() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Html,
}

/// Provides the session context, rehydrated from storage at startup.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_reducer(SessionState::rehydrate);
    html! {
        <ContextProvider<SessionContext> context={state}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
