//! Register form component
//!
//! Collects name, email, and password for a new account. Shares the
//! submission lifecycle with the login form: one attempt in flight at a
//! time, one terminal banner per resolution.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::submit::{SubmissionState, SubmitAttempt, start};
use crate::core::validation::{self, FieldSpec, RegisterInput, fields};
use crate::ui::auth::{Social, client};
use crate::ui::common::{FormFeedback, FormField};
use crate::ui::icon::{Icon, icons};

static NAME_FIELD: FieldSpec = FieldSpec {
    name: fields::NAME,
    kind: "text",
    label: "Name",
    placeholder: "John Doe",
    autocomplete: "name",
};

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
    autocomplete: "new-password",
};

/// Register form component
#[component]
pub fn RegisterForm(
    /// Callback to switch to the login page
    #[prop(optional, into)]
    on_login_click: Option<Callback<()>>,
) -> impl IntoView {
    // Form state
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    // Submission lifecycle
    let state = RwSignal::new(SubmissionState::new());
    let submitting = Signal::derive(move || state.with(|s| s.is_submitting()));
    let feedback = Signal::derive(move || state.with(|s| s.outcome().cloned()));

    on_cleanup(move || {
        let _ = state.try_update(|s| s.reset());
    });

    let validate_name_field = move || {
        name_error.set(validation::validate_name(&name.get()).err());
    };
    let validate_email_field = move || {
        email_error.set(validation::validate_email(&email.get()).err());
    };
    let validate_password_field = move || {
        password_error.set(validation::validate_new_password(&password.get()).err());
    };

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let raw = RegisterInput {
            name: name.get(),
            email: email.get(),
            password: password.get(),
        };
        let attempt = state
            .try_update(|s| start(s, validation::validate_registration(&raw)))
            .unwrap_or(SubmitAttempt::InFlight);

        match attempt {
            SubmitAttempt::Rejected(errors) => {
                name_error.set(errors.get(fields::NAME).map(str::to_string));
                email_error.set(errors.get(fields::EMAIL).map(str::to_string));
                password_error.set(errors.get(fields::PASSWORD).map(str::to_string));
            }
            SubmitAttempt::InFlight => {}
            SubmitAttempt::Started { input, token } => {
                name_error.set(None);
                email_error.set(None);
                password_error.set(None);
                spawn_local(async move {
                    let outcome = client::register(&input).await;
                    let _ = state.try_update(|s| s.resolve(token, outcome));
                });
            }
        }
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
            <form on:submit=on_submit class="space-y-5">
                // Header
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-theme-primary">
                        "Create an account"
                    </h2>
                    <p class="mt-2 text-sm text-theme-secondary">
                        "Join Vestibule to get started"
                    </p>
                </div>

                // Outcome banner
                <FormFeedback outcome=feedback/>

                <div class="space-y-4">
                    <FormField
                        spec=NAME_FIELD
                        value=name
                        error=name_error
                        disabled=submitting
                        on_blur=Callback::new(move |_| validate_name_field())
                    />
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
                                    "Creating account..."
                                </span>
                            }.into_any()
                        } else {
                            view! { <span class="block">"Create an account"</span> }.into_any()
                        }
                    }}
                </button>
            </form>

            // Alternative providers
            <div class="mt-4">
                <Social/>
            </div>

            // Login link
            <div class="mt-6 text-center text-sm text-theme-secondary">
                "Already have an account? "
                <button
                    type="button"
                    class="text-accent-primary hover:text-accent-primary-hover font-medium"
                    on:click=move |_| {
                        if let Some(callback) = on_login_click.as_ref() {
                            callback.run(());
                        }
                    }
                >
                    "Sign in"
                </button>
            </div>
        </div>
    }
}
