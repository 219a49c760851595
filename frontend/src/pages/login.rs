use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::{
    api,
    i18n::login as t,
    lang::use_lang,
    router::Route,
    session,
    session::{SessionAction, SessionContext},
};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let lang = use_lang();
    let session_ctx = match use_context::<SessionContext>() {
        Some(ctx) => ctx,
        None => return html! {},
    };
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(target.value());
            }
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(target.value());
            }
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let session_ctx = session_ctx.clone();
        let navigator = navigator.clone();
        let failed_message = lang.pick(t::FAILED).to_string();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let session_ctx = session_ctx.clone();
            let navigator = navigator.clone();
            let failed_message = failed_message.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::login(&email_value, &password_value).await {
                    Ok(response) => {
                        session::store_credentials(&response.access_token, &response.user);
                        session_ctx.dispatch(SessionAction::LogIn(response.user));
                        error.set(None);
                        if let Some(nav) = navigator.as_ref() {
                            nav.push(&Route::Admin);
                        }
                    },
                    Err(e) => {
                        web_sys::console::error_1(&format!("Login failed: {}", e).into());
                        error.set(Some(failed_message));
                    },
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <main class="page page-login">
            <h1>{ lang.pick(t::TITLE) }</h1>
            <form class="login-form" onsubmit={on_submit}>
                <label for="login-email">{ lang.pick(t::EMAIL_LABEL) }</label>
                <input
                    id="login-email"
                    type="email"
                    value={(*email).clone()}
                    oninput={on_email_input}
                    required=true
                />
                <label for="login-password">{ lang.pick(t::PASSWORD_LABEL) }</label>
                <input
                    id="login-password"
                    type="password"
                    value={(*password).clone()}
                    oninput={on_password_input}
                    required=true
                />
                {
                    if let Some(message) = error.as_ref() {
                        html! { <p class="form-error" role="alert">{ message }</p> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="btn-primary" disabled={*submitting}>
                    { lang.pick(t::SUBMIT) }
                </button>
            </form>
        </main>
    }
}
