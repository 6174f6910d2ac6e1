//! Sign-in page.

use dioxus::{logger::tracing, prelude::*};

use common::account::Credentials;

use crate::api::browse_api::validate_login;
use crate::data_definitions::session::SessionState;
use crate::routes::Route;

const INPUT_STYLE: &str = "
    border: 1px solid #D1D5DB;
    border-radius: 8px;
    padding: 10px 12px;
    font-size: 16px;
    color: #111827;
    outline-color: #4F46E5;
";

#[component]
pub fn LoginPage() -> Element {
    rsx! {
        Title { "Get Me A Roommate - Sign in" }
        LoginPageRootComponent {}
    }
}

#[component]
fn LoginPageRootComponent() -> Element {
    let session = use_context::<SessionState>();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);

    let submit = use_callback(move |_: ()| {
        let credentials = Credentials {
            email: email.read().trim().to_string(),
            password: password.read().clone(),
        };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            error_message.set(Some("Enter both email and password".to_string()));
            return;
        }
        spawn(async move {
            match validate_login(credentials.clone()).await {
                Ok(()) => {
                    session.login.call(credentials.email.clone());
                    navigator().push(Route::BrowsePage {});
                }
                Err(e) => {
                    tracing::error!("sign in failed: {e}");
                    error_message.set(Some(server_error_text(&e)));
                }
            }
        });
    });

    let error_line = match error_message.read().clone() {
        Some(message) => rsx! {
            p {
                style: "color: #B91C1C; margin: 0; font-size: 15px;",
                "{message}"
            }
        },
        None => rsx! {},
    };

    rsx! {
        div {
            id: "x-login-page-root",
            style: "
                height: 100%;
                width: 100%;
                display: flex;
                align-items: center;
                justify-content: center;
                background-color: #F5F6F8;
            ",
            div {
                id: "x-login-card",
                style: "
                    width: 420px;
                    background: white;
                    border: 1px solid #E5E7EB;
                    border-radius: 12px;
                    box-shadow: 0 10px 25px rgba(17, 24, 39, 0.08);
                    padding: 32px;
                    display: flex;
                    flex-direction: column;
                    gap: 14px;
                ",
                h3 {
                    style: "margin: 0; font-size: 26px; color: #111827;",
                    "Sign "
                    span { style: "color: #4F46E5;", "in" }
                }
                input {
                    id: "x-login-email",
                    style: INPUT_STYLE,
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |e| {
                        email.set(e.value());
                    },
                }
                input {
                    id: "x-login-password",
                    style: INPUT_STYLE,
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |e| {
                        password.set(e.value());
                    },
                    onkeypress: move |e| {
                        if e.key() == Key::Enter {
                            e.prevent_default();
                            submit.call(());
                        }
                    },
                }
                {error_line}
                button {
                    id: "x-login-submit",
                    style: "
                        height: 42px;
                        border: none;
                        border-radius: 8px;
                        background: #4F46E5;
                        color: white;
                        font-size: 16px;
                        font-weight: 500;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        submit.call(());
                    },
                    "Sign in"
                }
                p {
                    style: "margin: 0; font-size: 13px; color: #6B7280;",
                    "Demo account: demo@getmearoommate.com / test@123"
                }
            }
        }
    }
}

fn server_error_text(e: &ServerFnError) -> String {
    match e {
        ServerFnError::ServerError { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
