//! Feedback banner for a form's submission outcome.

use leptos::prelude::*;

use crate::core::submit::SubmissionOutcome;
use crate::ui::icon::{Icon, icons};

/// Renders the terminal outcome of the last submission.
///
/// Nothing while there is none; otherwise a single banner, styled for the
/// error or success variant. The enum guarantees at most one message exists.
#[component]
pub fn FormFeedback(
    /// Outcome signal - shows a banner when Some, hidden when None
    #[prop(into)]
    outcome: Signal<Option<SubmissionOutcome>>,
) -> impl IntoView {
    move || {
        outcome.get().map(|outcome| match outcome {
            SubmissionOutcome::Error(message) => view! {
                <div class="flex items-center gap-2 p-3 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                    <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                    <p class="text-sm text-red-700 dark:text-red-300">{message}</p>
                </div>
            }
            .into_any(),
            SubmissionOutcome::Success(message) => view! {
                <div class="flex items-center gap-2 p-3 bg-emerald-100 dark:bg-emerald-900/30 border border-emerald-300 dark:border-emerald-700 rounded-lg">
                    <Icon name=icons::CHECK class="icon-text"/>
                    <p class="text-sm text-emerald-700 dark:text-emerald-300">{message}</p>
                </div>
            }
            .into_any(),
        })
    }
}
