//! Social sign-in button row.

use leptos::prelude::*;

use crate::ui::common::{Button, ButtonSize, ButtonVariant};
use crate::ui::icon::icons;

/// Alternative provider buttons shown under both auth forms.
///
/// Which providers ship, and what pressing one does, is still an open
/// product decision; the buttons render but are deliberately inert.
#[component]
pub fn Social() -> impl IntoView {
    view! {
        <div class="flex items-center w-full gap-x-2">
            <Button
                variant=ButtonVariant::Secondary
                size=ButtonSize::Large
                class="w-full"
                icon=icons::GOOGLE
                title="Continue with Google"
            >
                <span class="sr-only">"Continue with Google"</span>
            </Button>
            <Button
                variant=ButtonVariant::Secondary
                size=ButtonSize::Large
                class="w-full"
                icon=icons::GITHUB
                title="Continue with GitHub"
            >
                <span class="sr-only">"Continue with GitHub"</span>
            </Button>
        </div>
    }
}
