use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::session::context::{do_sign_in, do_sign_up, use_session};
use crate::system::session::api;

#[derive(Clone, Copy, PartialEq)]
enum LoginMode {
    SignIn,
    SignUp,
    ResetPassword,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (mode, set_mode) = signal(LoginMode::SignIn);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (display_name, set_display_name) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (info_message, set_info_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_session) = use_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();
        let display_name_val = display_name.get();
        let current_mode = mode.get();

        set_is_loading.set(true);
        set_error_message.set(None);
        set_info_message.set(None);

        spawn_local(async move {
            let result = match current_mode {
                LoginMode::SignIn => do_sign_in(email_val, password_val, set_session).await,
                LoginMode::SignUp => {
                    let name = if display_name_val.trim().is_empty() {
                        None
                    } else {
                        Some(display_name_val)
                    };
                    do_sign_up(email_val, password_val, name, set_session).await
                }
                LoginMode::ResetPassword => match api::reset_password(email_val).await {
                    Ok(()) => {
                        set_info_message
                            .set(Some("Check your inbox for the reset link.".to_string()));
                        Ok(())
                    }
                    Err(e) => Err(e),
                },
            };

            if let Err(e) = result {
                set_error_message.set(Some(e));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Brigade"</h1>
                <h2>
                    {move || match mode.get() {
                        LoginMode::SignIn => "Sign in",
                        LoginMode::SignUp => "Create your account",
                        LoginMode::ResetPassword => "Reset your password",
                    }}
                </h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>
                <Show when=move || info_message.get().is_some()>
                    <div class="info-message">
                        {move || info_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Show when=move || mode.get() == LoginMode::SignUp>
                        <div class="form-group">
                            <label for="display_name">"Name"</label>
                            <input
                                type="text"
                                id="display_name"
                                value=move || display_name.get()
                                on:input=move |ev| set_display_name.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <Show when=move || mode.get() != LoginMode::ResetPassword>
                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <input
                                type="password"
                                id="password"
                                value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>
                    </Show>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || {
                            if is_loading.get() {
                                "Please wait..."
                            } else {
                                match mode.get() {
                                    LoginMode::SignIn => "Sign in",
                                    LoginMode::SignUp => "Create account",
                                    LoginMode::ResetPassword => "Send reset link",
                                }
                            }
                        }}
                    </button>
                </form>

                <div class="login-links">
                    <Show when=move || mode.get() != LoginMode::SignIn>
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            set_mode.set(LoginMode::SignIn);
                        }>"Back to sign-in"</a>
                    </Show>
                    <Show when=move || mode.get() == LoginMode::SignIn>
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            set_mode.set(LoginMode::SignUp);
                        }>"Create an account"</a>
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            set_mode.set(LoginMode::ResetPassword);
                        }>"Forgot password?"</a>
                    </Show>
                </div>
            </div>
        </div>
    }
}
