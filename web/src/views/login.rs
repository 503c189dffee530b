use crate::{Route, enforce_guard, use_session, use_verifier};
use dioxus::document::eval;
use dioxus::prelude::*;
use secrecy::SecretString;
use types::{
    DEMO_ACCOUNTS, Page, redact_identifier,
    login::{AuthMethod, DESCRIPTION, FEATURES, HEADLINE},
};

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let verifier = use_verifier();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut auth_method = use_signal(AuthMethod::default);
    let mut error = use_signal(|| None::<String>);

    if let Some(redirect) = enforce_guard(Page::Login, &session.current()) {
        return redirect;
    }

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let identifier = email.read().clone();
        let secret = SecretString::from(password.read().clone());
        match verifier.verify(&identifier, &secret) {
            Ok(user) => {
                error.set(None);
                session.login(user);
                navigator().replace(Route::Dashboard {});
            }
            Err(err) => {
                tracing::warn!(identifier = %redact_identifier(&identifier), "login rejected");
                let message = err.to_string();
                eval(&format!("alert({message:?})"));
                error.set(Some(message));
            }
        }
    };

    rsx! {
        div { class: "login-container",
            div { class: "login-left",
                ui::Logo {}
                h1 { class: "hero-title", "{HEADLINE}" }
                p { class: "hero-description", "{DESCRIPTION}" }
                div { class: "features-grid",
                    for feature in FEATURES {
                        ui::FeatureCard { key: "{feature.tone}", feature }
                    }
                }
            }
            div { class: "login-right",
                div { class: "login-form-container",
                    form { class: "login-form", onsubmit: on_submit,
                        h2 { class: "login-title", "Login" }
                        p { class: "login-subtitle", "Welcome back to HarvestNet" }

                        div { class: "auth-toggle",
                            for method in [AuthMethod::Email, AuthMethod::Phone] {
                                button {
                                    key: "{method.label()}",
                                    r#type: "button",
                                    class: if *auth_method.read() == method { "auth-toggle-btn active" } else { "auth-toggle-btn" },
                                    onclick: move |_| auth_method.set(method),
                                    ui::Icon { glyph: ui::Glyph::for_auth_method(method) }
                                    "{method.label()}"
                                }
                            }
                        }

                        if let Some(err) = error.read().as_ref() {
                            div { class: "alert alert-error", "{err}" }
                        }

                        div { class: "form-group",
                            label { class: "label", r#for: "email", "Email" }
                            input {
                                id: "email",
                                class: "input",
                                r#type: "email",
                                placeholder: "your@email.com",
                                required: true,
                                value: "{email}",
                                oninput: move |e| email.set(e.value()),
                            }
                        }
                        div { class: "form-group",
                            label { class: "label", r#for: "password", "Password" }
                            div { class: "password-field",
                                input {
                                    id: "password",
                                    class: "input",
                                    r#type: if *show_password.read() { "text" } else { "password" },
                                    placeholder: "Enter your password",
                                    required: true,
                                    value: "{password}",
                                    oninput: move |e| password.set(e.value()),
                                }
                                button {
                                    r#type: "button",
                                    class: "password-toggle",
                                    title: if *show_password.read() { "Hide password" } else { "Show password" },
                                    onclick: move |_| {
                                        let shown = show_password();
                                        show_password.set(!shown);
                                    },
                                    if *show_password.read() {
                                        ui::Icon { glyph: ui::Glyph::EyeOff }
                                    } else {
                                        ui::Icon { glyph: ui::Glyph::Eye }
                                    }
                                }
                            }
                        }

                        button { r#type: "submit", class: "btn btn-primary w-full", "Login" }

                        a {
                            href: "#",
                            class: "forgot-password",
                            onclick: move |e| e.prevent_default(),
                            "Forgot Password?"
                        }
                        div { class: "register-link",
                            "Don't have an account? "
                            a { href: "#", onclick: move |e| e.prevent_default(), "Register" }
                        }

                        div { class: "demo-credentials",
                            h4 { "Demo Credentials:" }
                            for account in DEMO_ACCOUNTS {
                                p { key: "{account.email}",
                                    "{account.label}: {account.email} / {account.password}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
