//! Landing page component
//!
//! The public home page: product name, a short pitch, and the entry points
//! into the auth flow.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::ui::auth::LoginButton;

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text="Vestibule"/>
        <Meta name="description" content="One account for everything. Sign in to continue or create an account in seconds."/>

        <div class="min-h-screen bg-theme-primary flex flex-col">
            // Header
            <header class="border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        <span class="text-xl font-bold text-theme-primary">"Vestibule"</span>
                        <LoginButton>
                            <span class="text-sm font-medium text-accent-primary hover:text-accent-primary-hover">
                                "Sign in"
                            </span>
                        </LoginButton>
                    </div>
                </div>
            </header>

            // Hero
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="text-center px-4 max-w-2xl mx-auto">
                    <h1 class="text-5xl sm:text-6xl font-bold text-theme-primary mb-6 tracking-tight">
                        "Vestibule"
                    </h1>
                    <p class="text-xl text-theme-secondary max-w-xl mx-auto mb-10 leading-relaxed">
                        "One account for everything. Sign in to continue, or create an account in seconds."
                    </p>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <LoginButton>
                            <span class="inline-block px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors">
                                "Sign in"
                            </span>
                        </LoginButton>
                        <A
                            href="/auth/register"
                            attr:class="inline-block px-6 py-3 border border-theme text-theme-primary hover:bg-theme-secondary font-medium rounded-lg transition-colors"
                        >
                            "Create an account"
                        </A>
                    </div>
                </div>
            </main>

            // Footer
            <footer class="py-4 border-t border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <p class="text-center text-sm text-theme-tertiary">
                        "© 2026 Vestibule. All rights reserved."
                    </p>
                </div>
            </footer>
        </div>
    }
}
