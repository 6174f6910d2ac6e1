//! Roommate card action buttons component.

use common::roommate::{Roster, RoommateCard};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdVisibility, md_communication_icons::MdChat, md_toggle_icons::{MdStar, MdStarBorder}}};

use crate::pages::browse_page::BrowseState;

const ACTION_BUTTON_STYLE: &str = "
    width: 40px;
    height: 40px;
    cursor: pointer;
    border: 1px solid #000;
    border-radius: 8px;
    background: white;
    color: black;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 24px;
    padding: 1px;
    margin: 1px;
";

/// The action row under each listing: favourite toggle, message, view
/// profile.
#[component]
pub fn CardActionButtons(roommate: ReadSignal<RoommateCard>, roster: Roster) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                flex-shrink: 0;
            ",
            FavouriteButton { roommate, roster }
            MessageButton {}
            ViewProfileButton { roommate }
        }
    }
}

#[component]
fn FavouriteButton(roommate: ReadSignal<RoommateCard>, roster: Roster) -> Element {
    let browse_state = use_context::<BrowseState>();
    let is_fav = roommate.read().is_fav;
    let title_label = if is_fav { "Remove favourite" } else { "Add favourite" };

    rsx! {
        button {
            style: ACTION_BUTTON_STYLE,
            title: "{title_label}",
            onclick: move |_e| {
                _e.prevent_default();
                _e.stop_propagation();
                // the two lists key their records differently
                let key = match roster {
                    Roster::TopSuggestions => roommate.read().email.clone(),
                    Roster::Directory => roommate.read().name.clone(),
                };
                browse_state.mark_as_favourite.call((key, roster));
            },
            if is_fav {
                Icon {
                    icon: MdStar,
                    style: "width: 24px; height: 24px; color: #F59E0B;"
                }
            } else {
                Icon {
                    icon: MdStarBorder,
                    style: "width: 24px; height: 24px;"
                }
            }
        }
    }
}

#[component]
fn MessageButton() -> Element {
    rsx! {
        button {
            style: ACTION_BUTTON_STYLE,
            title: "Message",
            Icon {
                icon: MdChat,
                style: "width: 24px; height: 24px;"
            }
        }
    }
}

#[component]
fn ViewProfileButton(roommate: ReadSignal<RoommateCard>) -> Element {
    let browse_state = use_context::<BrowseState>();

    rsx! {
        button {
            style: ACTION_BUTTON_STYLE,
            title: "View profile",
            onclick: move |_e| {
                _e.prevent_default();
                _e.stop_propagation();
                browse_state.view_profile.call(roommate.read().email.clone());
            },
            Icon {
                icon: MdVisibility,
                style: "width: 24px; height: 24px;"
            }
        }
    }
}
