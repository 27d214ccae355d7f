use dioxus::prelude::*;

/// Labeled form control with a help line and an optional validation message.
#[component]
pub fn FormField(
    label: String,
    description: String,
    /// Message shown under the control, styled as an error
    #[props(default = None)]
    error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-2",
            label {
                class: "label",
                span { class: "label-text font-semibold", "{label}" }
            }
            {children}
            p { class: "text-sm opacity-70", "{description}" }
            if let Some(error) = error {
                p { class: "text-sm text-error", "{error}" }
            }
        }
    }
}
