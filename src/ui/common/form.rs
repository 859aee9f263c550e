use leptos::prelude::*;

use crate::core::validation::FieldSpec;
use crate::ui::icon::{Icon, icons};

/// Labeled form input driven by a static [`FieldSpec`].
///
/// Typing into the field clears its error; the error is re-established by the
/// blur callback or the next submit. The field is disabled for the whole span
/// of a pending submission.
#[component]
pub fn FormField(
    /// Static descriptor: field name, input kind, label, placeholder
    spec: FieldSpec,
    /// Current value signal
    value: RwSignal<String>,
    /// Validation error for this field
    error: RwSignal<Option<String>>,
    /// Whether the field is disabled
    #[prop(into)]
    disabled: Signal<bool>,
    /// Called when the field loses focus
    #[prop(optional, into)]
    on_blur: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=spec.name class="label">{spec.label}</label>
            <input
                type=spec.kind
                id=spec.name
                name=spec.name
                autocomplete=spec.autocomplete
                placeholder=spec.placeholder
                class="input-base"
                class:border-red-500=move || error.get().is_some()
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    error.set(None);
                }
                on:blur=move |_| {
                    if let Some(callback) = on_blur.as_ref() {
                        callback.run(());
                    }
                }
                disabled=move || disabled.get()
            />
            {move || {
                error.get().map(|err| view! {
                    <div class="flex items-center text-sm text-theme-error">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}
