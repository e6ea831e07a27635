//! Account creation for investigators, admins, and plain users.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form::{AuthCard, PasswordField, SelectField, TextField};
use crate::net::api;
use crate::net::types::SignupRequest;
use crate::util::validation::{passwords_match, require, valid_email, valid_password};

const GENDER_OPTIONS: [(&str, &str); 2] = [("Male", "Male"), ("Female", "Female")];
const ROLE_OPTIONS: [(&str, &str); 3] = [
    ("investigator", "Investigator"),
    ("admin", "Admin"),
    ("user", "User"),
];

/// Per-field validation outcome for the signup form.
#[derive(Debug, Default, PartialEq, Eq)]
struct SignupErrors {
    firstname: Option<&'static str>,
    lastname: Option<&'static str>,
    email: Option<&'static str>,
    gender: Option<&'static str>,
    user_type: Option<&'static str>,
    password: Option<&'static str>,
    confirm: Option<&'static str>,
}

impl SignupErrors {
    fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

fn validate_signup(
    firstname: &str,
    lastname: &str,
    email: &str,
    gender: &str,
    user_type: &str,
    password: &str,
    confirm: &str,
) -> SignupErrors {
    SignupErrors {
        firstname: require(firstname).err(),
        lastname: require(lastname).err(),
        email: valid_email(email).err(),
        gender: require(gender).err(),
        user_type: require(user_type).err(),
        password: valid_password(password).err(),
        confirm: passwords_match(password, confirm).err(),
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let firstname = RwSignal::new(String::new());
    let lastname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let user_type = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let firstname_error = RwSignal::new(None::<&'static str>);
    let lastname_error = RwSignal::new(None::<&'static str>);
    let email_error = RwSignal::new(None::<&'static str>);
    let gender_error = RwSignal::new(None::<&'static str>);
    let user_type_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let confirm_error = RwSignal::new(None::<&'static str>);

    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate = use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let errors = validate_signup(
            &firstname.get(),
            &lastname.get(),
            &email.get(),
            &gender.get(),
            &user_type.get(),
            &password.get(),
            &confirm.get(),
        );
        firstname_error.set(errors.firstname);
        lastname_error.set(errors.lastname);
        email_error.set(errors.email);
        gender_error.set(errors.gender);
        user_type_error.set(errors.user_type);
        password_error.set(errors.password);
        confirm_error.set(errors.confirm);
        if !errors.is_clean() {
            return;
        }
        let request = SignupRequest {
            firstname: firstname.get().trim().to_owned(),
            lastname: lastname.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            gender: gender.get(),
            user_type: user_type.get(),
            password: password.get(),
            password_confirm: confirm.get(),
        };
        busy.set(true);
        info.set(String::new());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::signup(&request).await {
                Ok(()) => navigate("/verify", NavigateOptions::default()),
                Err(err) => {
                    info.set(err.to_string());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <AuthCard title="Sign Up" subtitle="Create your account">
            <form class="auth__form" on:submit=on_submit>
                <div class="auth__row">
                    <TextField label="First Name" value=firstname error=firstname_error/>
                    <TextField label="Last Name" value=lastname error=lastname_error/>
                </div>
                <TextField
                    label="Email"
                    value=email
                    input_type="email"
                    placeholder="you@example.com"
                    error=email_error
                />
                <div class="auth__row">
                    <SelectField
                        label="Gender"
                        value=gender
                        options=GENDER_OPTIONS.to_vec()
                        error=gender_error
                    />
                    <SelectField
                        label="Role"
                        value=user_type
                        options=ROLE_OPTIONS.to_vec()
                        error=user_type_error
                    />
                </div>
                <PasswordField label="Password" value=password error=password_error/>
                <PasswordField label="Re-Enter Password" value=confirm error=confirm_error/>
                <button
                    class="btn btn--primary btn--block"
                    type="submit"
                    disabled=move || busy.get()
                >
                    {move || if busy.get() { "Signing Up..." } else { "Sign Up" }}
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="auth__message">{move || info.get()}</p>
            </Show>
            <p class="auth__footer">
                "Already have an account? "
                <a class="auth__link" href="/login">"Log In"</a>
            </p>
        </AuthCard>
    }
}
