//! Error boundary components for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    h1 {
                        style: "color: #B91C1C; font-size: 44px; border: 1px solid #B91C1C; padding: 10px; border-radius: 8px; margin: 15px;",
                        "Something went wrong",
                    }
                    p {
                        style: "color: #7F1D1D; font-size: 22px; border: 1px solid #B91C1C; padding: 10px; border-radius: 8px; margin: 15px;",
                        "Boundary: {boundary_name}"
                    }
                    a {
                        href: "/",
                        style: "color: #4F46E5; font-size: 22px; border: 1px solid #4F46E5; padding: 10px; border-radius: 8px; margin: 15px;",
                        "Back to the home page"
                    }
                    pre {
                        style: "color: #111827; border: 1px solid #B91C1C; padding: 10px; border-radius: 8px; margin: 15px; text-wrap: auto;",
                        "{_err:#?}"
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_err: ErrorContext| {
                let error = _err.error();
                let error_txt = if let Some(err) = error {
                    format!("{:#?}", err.0)
                } else {
                    "Unknown error".to_string()
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: #4F46E5; font-size: 22px; border: 1px solid #4F46E5; background: white; padding: 10px; border-radius: 8px; margin: 15px; cursor: pointer;",
                            onclick: move |_| {
                                _err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",

            h1 {
                style: "color: #B91C1C; font-size: 30px; border: 1px solid #B91C1C; padding: 10px; border-radius: 8px; margin: 5px;",
                "Something broke here",
            }

            pre {
                style: "color: #7F1D1D; border: 1px solid #B91C1C; padding: 10px; border-radius: 8px; margin: 5px; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
