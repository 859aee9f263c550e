//! Entry point control for the auth flow.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// How the login affordance presents the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginButtonMode {
    /// Navigate to the login page.
    #[default]
    Redirect,
    /// Open the form in a modal. Not implemented: there is no agreed modal
    /// design for the auth flow yet.
    Modal,
}

/// Wraps its children in a clickable element that starts the login flow.
#[component]
pub fn LoginButton(
    /// Presentation mode
    #[prop(default = LoginButtonMode::Redirect)]
    mode: LoginButtonMode,
    children: Children,
) -> impl IntoView {
    match mode {
        LoginButtonMode::Modal => view! {
            <span>"IMPLEMENT MODAL"</span>
        }
        .into_any(),
        LoginButtonMode::Redirect => {
            let navigate = use_navigate();
            view! {
                <span
                    class="cursor-pointer"
                    on:click=move |_| navigate("/auth/login", Default::default())
                >
                    {children()}
                </span>
            }
            .into_any()
        }
    }
}
