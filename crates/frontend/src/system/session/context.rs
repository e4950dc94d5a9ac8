use contracts::system::auth::AuthUser;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// Reactive session state. Components subscribe to this signal instead
/// of talking to the provider directly; every sign-in/out flows through
/// it, which doubles as the auth-state-change notification.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub user: Option<AuthUser>,
}

impl SessionState {
    pub fn user_id(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.id.to_string())
    }

    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .and_then(|u| u.display_name.clone().or_else(|| u.email.clone()))
            .unwrap_or_else(|| "Guest".to_string())
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(SessionState::default());

    // Try to restore the session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                return;
            };
            // Validate the stored token by fetching the current user
            match api::get_current_user(&access_token).await {
                Ok(user) => {
                    storage::save_user_id(&user.id.to_string());
                    set_session.set(SessionState {
                        access_token: Some(access_token),
                        user: Some(user),
                    });
                }
                Err(_) => {
                    // Token invalid, try the refresh token
                    let Some(refresh_token) = storage::get_refresh_token() else {
                        storage::clear_session();
                        return;
                    };
                    match api::refresh_session(refresh_token).await {
                        Ok(new_session) => {
                            storage::save_access_token(&new_session.access_token);
                            storage::save_refresh_token(&new_session.refresh_token);
                            storage::save_user_id(&new_session.user.id.to_string());
                            set_session.set(SessionState {
                                access_token: Some(new_session.access_token),
                                user: Some(new_session.user),
                            });
                        }
                        Err(_) => {
                            storage::clear_session();
                        }
                    }
                }
            }
        });
    });

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access session state
pub fn use_session() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session = use_context::<ReadSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");
    (session, set_session)
}

/// Sign in and publish the new session state.
pub async fn do_sign_in(
    email: String,
    password: String,
    set_session: WriteSignal<SessionState>,
) -> Result<(), String> {
    let auth = api::sign_in(email, password).await?;

    storage::save_access_token(&auth.access_token);
    storage::save_refresh_token(&auth.refresh_token);
    storage::save_user_id(&auth.user.id.to_string());

    set_session.set(SessionState {
        access_token: Some(auth.access_token),
        user: Some(auth.user),
    });
    Ok(())
}

/// Create an account, then publish the session it returns.
pub async fn do_sign_up(
    email: String,
    password: String,
    display_name: Option<String>,
    set_session: WriteSignal<SessionState>,
) -> Result<(), String> {
    let auth = api::sign_up(email, password, display_name).await?;

    storage::save_access_token(&auth.access_token);
    storage::save_refresh_token(&auth.refresh_token);
    storage::save_user_id(&auth.user.id.to_string());

    set_session.set(SessionState {
        access_token: Some(auth.access_token),
        user: Some(auth.user),
    });
    Ok(())
}

/// Sign out, revoking server-side and clearing local state.
pub async fn do_sign_out(set_session: WriteSignal<SessionState>) -> Result<(), String> {
    if let Some(token) = storage::get_access_token() {
        // Best effort; local state is cleared regardless
        let _ = api::sign_out(&token).await;
    }

    storage::clear_session();
    set_session.set(SessionState::default());
    Ok(())
}
