use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::session::SessionState;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let mut current_user = use_signal(|| None::<String>);

    use_context_provider(move || SessionState {
        current_user: current_user.into(),
        login: Callback::new(move |email: String| {
            current_user.set(Some(email));
        }),
        logout: Callback::new(move |_: ()| {
            current_user.set(None);
        }),
    });

    rsx! {
        // TODO: replace google fonts with local fonts
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: "https://fonts.googleapis.com/css2?family=Roboto:ital,wght@0,100..900;1,100..900&display=swap" }


        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}
