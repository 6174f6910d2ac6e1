//! Modal overlay showing one user's full profile.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::components::browse_components::profile_view::ProfileView;
use crate::pages::browse_page::BrowseState;

#[component]
pub fn ProfileModal() -> Element {
    let browse_state = use_context::<BrowseState>();
    let modal_show = browse_state.modal_show;
    let selected_user = browse_state.selected_user;
    let close_profile = browse_state.close_profile;

    if !modal_show() {
        return rsx! {};
    }

    // The profile stays empty until the details call has answered; closing
    // and reopening keeps the last loaded profile until a new one arrives.
    let body = match selected_user.read().as_ref() {
        Some(user) => rsx! {
            ProfileView { user: user.clone() }
        },
        None => rsx! {
            p {
                style: "font-size: 18px; color: #6B7280; margin: 0;",
                "Loading profile..."
            }
        },
    };

    rsx! {
        div {
            id: "x-profile-modal-backdrop",
            style: "
                position: fixed;
                top: 0px;
                left: 0px;
                width: 100vw;
                height: 100vh;
                padding: 0px;
                margin: 0px;
                overflow: hidden;
                background: rgba(0, 0, 0, 0.4);
                z-index: 1000;
            ",
            onclick: move |_e| {
                _e.prevent_default();
                _e.stop_propagation();
                close_profile.call(());
            },
        }
        div {
            id: "x-profile-modal-panel",
            style: "
                position: fixed;
                top: 50%;
                left: 50%;
                transform: translate(-50%, -50%);
                width: min(640px, calc(100vw - 40px));
                max-height: calc(100vh - 80px);
                overflow-y: auto;
                background-color: white;
                border: 1px solid rgba(0, 0, 0, 0.5);
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.5);
                border-radius: 8px;
                z-index: 1001;
            ",
            // header: title + close
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    border-bottom: 1px solid #E5E7EB;
                    padding: 14px 20px;
                ",
                h4 {
                    style: "margin: 0; font-size: 22px; color: #111827;",
                    "Profile"
                }
                button {
                    style: "
                        width: 34px;
                        height: 34px;
                        cursor: pointer;
                        border: none;
                        border-radius: 8px;
                        background: transparent;
                        color: black;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    ",
                    title: "Close",
                    onclick: move |_e| {
                        _e.prevent_default();
                        _e.stop_propagation();
                        close_profile.call(());
                    },
                    Icon {
                        icon: MdClose,
                        style: "width: 22px; height: 22px;"
                    }
                }
            }
            div {
                style: "padding: 20px;",
                {body}
            }
        }
    }
}
