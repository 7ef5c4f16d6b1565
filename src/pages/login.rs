//! Login and registration page.
//!
//! Both forms trim their inputs (passwords excepted) and refuse to submit while a field is blank.
//! A successful attempt raises a notice and navigates to the role's landing
//! page; an attempt superseded by a newer one is dropped quietly.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SessionContext;
use crate::net::auth::{AuthError, LoginCredentials, RegisterData};
use crate::routing::landing_path;
use crate::state::session::Role;
use crate::util::notify::Notifier;

/// A required form field was left blank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0} is required")]
pub struct MissingField(pub &'static str);

fn required(label: &'static str, value: &str) -> Result<String, MissingField> {
    let trimmed = value.trim();
    if trimmed.is_empty() { Err(MissingField(label)) } else { Ok(trimmed.to_owned()) }
}

/// Passwords are checked for blankness but reach the service verbatim.
fn required_secret(label: &'static str, value: &str) -> Result<String, MissingField> {
    if value.trim().is_empty() { Err(MissingField(label)) } else { Ok(value.to_owned()) }
}

/// Validate the login form.
pub fn login_form(email: &str, password: &str, role: Role) -> Result<LoginCredentials, MissingField> {
    Ok(LoginCredentials { email: required("Email", email)?, password: required_secret("Password", password)?, role })
}

/// Validate the registration form. The candidate id is only read for candidates.
pub fn register_form(
    name: &str,
    email: &str,
    password: &str,
    role: Role,
    candidate_id: &str,
) -> Result<RegisterData, MissingField> {
    let candidate_id = match role {
        Role::Candidate => Some(required("Candidate ID", candidate_id)?),
        Role::Admin => None,
    };
    Ok(RegisterData {
        name: required("Full Name", name)?,
        email: required("Email", email)?,
        password: required_secret("Password", password)?,
        role,
        candidate_id,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Login,
    Register,
}

#[component]
fn RoleToggle(role: RwSignal<Role>) -> impl IntoView {
    let button = move |value: Role| {
        view! {
            <button
                type="button"
                class=move || if role.get() == value { "btn btn--sm btn--primary" } else { "btn btn--sm btn--outline" }
                on:click=move |_| role.set(value)
            >
                {value.label()}
            </button>
        }
    };
    view! { <div class="role-toggle">{button(Role::Candidate)} {button(Role::Admin)}</div> }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notifier = expect_context::<Notifier>();
    let navigate = use_navigate();

    let tab = RwSignal::new(Tab::Login);
    let busy = RwSignal::new(false);

    let login_role = RwSignal::new(Role::Candidate);
    let login_email = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());

    let register_role = RwSignal::new(Role::Candidate);
    let register_name = RwSignal::new(String::new());
    let register_email = RwSignal::new(String::new());
    let register_password = RwSignal::new(String::new());
    let register_candidate_id = RwSignal::new(String::new());

    let on_login = {
        let session = session.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let credentials = match login_form(&login_email.get(), &login_password.get(), login_role.get()) {
                Ok(credentials) => credentials,
                Err(missing) => {
                    notifier.error("Login Failed", missing.to_string());
                    return;
                }
            };
            busy.set(true);
            let store = session.store();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let role = credentials.role;
                match store.login(credentials).await {
                    Ok(identity) => {
                        log!("login succeeded for {}", identity.email());
                        notifier.success(
                            "Login Successful",
                            format!("Welcome back! Redirecting to your {} dashboard.", role.as_str()),
                        );
                        navigate(landing_path(role), NavigateOptions::default());
                    }
                    Err(AuthError::Superseded) => log!("login superseded by a newer attempt"),
                    Err(err) => {
                        warn!("login failed: {err}");
                        notifier.error("Login Failed", "Please check your credentials and try again.");
                    }
                }
                busy.set(false);
            });
        }
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let data = match register_form(
            &register_name.get(),
            &register_email.get(),
            &register_password.get(),
            register_role.get(),
            &register_candidate_id.get(),
        ) {
            Ok(data) => data,
            Err(missing) => {
                notifier.error("Registration Failed", missing.to_string());
                return;
            }
        };
        busy.set(true);
        let store = session.store();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let role = data.role;
            match store.register(data).await {
                Ok(identity) => {
                    log!("registered {} as {}", identity.email(), role.as_str());
                    notifier.success(
                        "Registration Successful",
                        format!("Account created successfully! Redirecting to your {} dashboard.", role.as_str()),
                    );
                    navigate(landing_path(role), NavigateOptions::default());
                }
                Err(AuthError::Superseded) => log!("registration superseded by a newer attempt"),
                Err(err) => {
                    warn!("registration failed: {err}");
                    notifier.error("Registration Failed", "Please check your information and try again.");
                }
            }
            busy.set(false);
        });
    };

    let tab_class = move |value: Tab| {
        move || if tab.get() == value { "tabs__trigger tabs__trigger--active" } else { "tabs__trigger" }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__header">
                    <div class="login-card__logo" aria-hidden="true">"⛨"</div>
                    <h1>"PM Internship Portal"</h1>
                    <p class="login-card__subtitle">"Government of India Initiative"</p>
                </div>

                <div class="tabs" role="tablist">
                    <button type="button" class=tab_class(Tab::Login) on:click=move |_| tab.set(Tab::Login)>
                        "Login"
                    </button>
                    <button type="button" class=tab_class(Tab::Register) on:click=move |_| tab.set(Tab::Register)>
                        "Register"
                    </button>
                </div>

                <form class="login-form" hidden=move || tab.get() != Tab::Login on:submit=on_login>
                    <label>"Login As"</label>
                    <RoleToggle role=login_role/>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        required
                        prop:value=move || login_email.get()
                        on:input=move |ev| login_email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        required
                        prop:value=move || login_password.get()
                        on:input=move |ev| login_password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary btn--lg login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>

                <form class="login-form" hidden=move || tab.get() != Tab::Register on:submit=on_register>
                    <label>"Register As"</label>
                    <RoleToggle role=register_role/>
                    <label for="name">"Full Name"</label>
                    <input
                        id="name"
                        class="login-input"
                        required
                        prop:value=move || register_name.get()
                        on:input=move |ev| register_name.set(event_target_value(&ev))
                    />
                    <Show when=move || register_role.get() == Role::Candidate>
                        <label for="candidateId">"Candidate ID"</label>
                        <input
                            id="candidateId"
                            class="login-input"
                            placeholder="e.g., CAND001"
                            required
                            prop:value=move || register_candidate_id.get()
                            on:input=move |ev| register_candidate_id.set(event_target_value(&ev))
                        />
                    </Show>
                    <label for="registerEmail">"Email"</label>
                    <input
                        id="registerEmail"
                        class="login-input"
                        type="email"
                        required
                        prop:value=move || register_email.get()
                        on:input=move |ev| register_email.set(event_target_value(&ev))
                    />
                    <label for="registerPassword">"Password"</label>
                    <input
                        id="registerPassword"
                        class="login-input"
                        type="password"
                        required
                        prop:value=move || register_password.get()
                        on:input=move |ev| register_password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--accent btn--lg login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Create Account" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
