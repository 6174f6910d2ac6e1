use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            // While any child component is suspended the fallback is rendered
            // in place of the children
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    height: "100%",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "color: #374151; font-size: 22px; border: 1px solid #D1D5DB; padding: 10px; border-radius: 8px; margin: 15px;",
            "Loading..."
        }
    }
}
