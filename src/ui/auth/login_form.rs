//! Login form component
//!
//! Collects email and password, validates them, and drives one submission
//! through the single-flight lifecycle in [`crate::core::submit`].

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::submit::{SubmissionState, SubmitAttempt, start};
use crate::core::validation::{self, FieldSpec, LoginInput, fields};
use crate::ui::auth::{Social, client};
use crate::ui::common::{FormFeedback, FormField};
use crate::ui::icon::{Icon, icons};

static EMAIL_FIELD: FieldSpec = FieldSpec {
    name: fields::EMAIL,
    kind: "email",
    label: "Email",
    placeholder: "john.doe@example.com",
    autocomplete: "email",
};

static PASSWORD_FIELD: FieldSpec = FieldSpec {
    name: fields::PASSWORD,
    kind: "password",
    label: "Password",
    placeholder: "******",
    autocomplete: "current-password",
};

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback to switch to the register page
    #[prop(optional, into)]
    on_register_click: Option<Callback<()>>,
) -> impl IntoView {
    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    // Submission lifecycle
    let state = RwSignal::new(SubmissionState::new());
    let submitting = Signal::derive(move || state.with(|s| s.is_submitting()));
    let feedback = Signal::derive(move || state.with(|s| s.outcome().cloned()));

    // A response landing after teardown must not touch discarded state.
    on_cleanup(move || {
        let _ = state.try_update(|s| s.reset());
    });

    let validate_email_field = move || {
        email_error.set(validation::validate_email(&email.get()).err());
    };
    let validate_password_field = move || {
        password_error.set(validation::validate_login_password(&password.get()).err());
    };

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let raw = LoginInput {
            email: email.get(),
            password: password.get(),
        };
        let attempt = state
            .try_update(|s| start(s, validation::validate_login(&raw)))
            .unwrap_or(SubmitAttempt::InFlight);

        match attempt {
            SubmitAttempt::Rejected(errors) => {
                email_error.set(errors.get(fields::EMAIL).map(str::to_string));
                password_error.set(errors.get(fields::PASSWORD).map(str::to_string));
            }
            // A submission is already pending; the disabled controls make
            // this unreachable from the UI, but the guard holds regardless.
            SubmitAttempt::InFlight => {}
            SubmitAttempt::Started { input, token } => {
                email_error.set(None);
                password_error.set(None);
                spawn_local(async move {
                    let outcome = client::login(&input).await;
                    let _ = state.try_update(|s| s.resolve(token, outcome));
                });
            }
        }
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
            <form on:submit=on_submit class="space-y-6">
                // Header
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-theme-primary">
                        "Welcome back"
                    </h2>
                    <p class="mt-2 text-sm text-theme-secondary">
                        "Sign in to your account to continue"
                    </p>
                </div>

                // Outcome banner
                <FormFeedback outcome=feedback/>

                <div class="space-y-4">
                    <FormField
                        spec=EMAIL_FIELD
                        value=email
                        error=email_error
                        disabled=submitting
                        on_blur=Callback::new(move |_| validate_email_field())
                    />
                    <FormField
                        spec=PASSWORD_FIELD
                        value=password
                        error=password_error
                        disabled=submitting
                        on_blur=Callback::new(move |_| validate_password_field())
                    />
                </div>

                // Submit button
                <button
                    type="submit"
                    class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                           text-white font-medium rounded-lg
                           focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-accent-primary
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors"
                    disabled=move || submitting.get()
                >
                    {move || {
                        if submitting.get() {
                            view! {
                                <span class="flex items-center justify-center">
                                    <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4 text-white" />
                                    "Signing in..."
                                </span>
                            }.into_any()
                        } else {
                            view! { <span class="block">"Login"</span> }.into_any()
                        }
                    }}
                </button>
            </form>

            // Alternative providers
            <div class="mt-4">
                <Social/>
            </div>

            // Register link
            <div class="mt-6 text-center text-sm text-theme-secondary">
                "Don't have an account? "
                <button
                    type="button"
                    class="text-accent-primary hover:text-accent-primary-hover font-medium"
                    on:click=move |_| {
                        if let Some(callback) = on_register_click.as_ref() {
                            callback.run(());
                        }
                    }
                >
                    "Sign up"
                </button>
            </div>
        </div>
    }
}
