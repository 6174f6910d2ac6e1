//! Sidebar navigation component.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::session::SessionState;
use crate::routes::Route;

use dioxus_free_icons::icons::md_action_icons::MdHome;
use dioxus_free_icons::icons::md_social_icons::MdPeople;
use dioxus_free_icons::icons::md_social_icons::MdPerson;
use dioxus_free_icons::{Icon, IconShape};

/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",


            div {
                id:"x-nav-sidebar",
                style:"
                    display:flex;
                    flex-direction: column;
                    gap: 40px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px;
                ",

                // top part
                NavbarTopLogo{},
                NavbarTopIconLinks{},

                // empty space
                div {
                    style: "flex-grow:1;"
                }
                // bottom part
                NavbarBottomIconLinks{},
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn NavbarTopLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage { },
            div {
                style: "
                    width: 38px;
                    height: 38px;
                    border-radius: 10px;
                    background-color: #4F46E5;
                    color: white;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 22px;
                    font-weight: bold;
                ",
                "R"
            }
        }
    }
}

#[component]
fn NavbarTopIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",
            IconLink { to: Route::HomePage { }, icon: MdHome, label: "Home" }
            IconLink { to: Route::BrowsePage { }, icon: MdPeople, label: "Browse Roommates" }
        }
    }
}


#[component]
fn NavbarBottomIconLinks() -> Element {
    let session = use_context::<SessionState>();

    rsx! {

        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",

            if session.is_logged_in() {
                button {
                    style: "background: none; border: none; padding: 0; cursor: pointer;",
                    title: "Sign out",
                    onclick: move |_| {
                        session.logout.call(());
                        navigator().push(Route::HomePage { });
                    },
                    span {
                        style: "color:white;",
                        Icon { icon: MdPerson, style: "width: 26px; height: 26px;" }
                    }
                }
            } else {
                IconLink { to: Route::LoginPage { }, icon: MdPerson, label: "Sign in" }
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                style: "color:white;",
                title: "{label}",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
