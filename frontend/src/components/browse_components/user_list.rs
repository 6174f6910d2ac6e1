//! Directory listing of every user profile.

use common::roommate::{Roster, RoommateCard};
use dioxus::prelude::*;

use crate::components::browse_components::card_action_buttons::CardActionButtons;

#[component]
pub fn UserList(users: ReadSignal<Vec<RoommateCard>>) -> Element {
    let list = users.read().clone();

    rsx! {
        h3 {
            style: "
                font-size: 28px;
                font-weight: 600;
                color: #111827;
                margin: 0 0 16px 0;
            ",
            "All "
            span { style: "color: #4F46E5;", "Roommates" }
        }
        div {
            id: "x-user-list",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                width: 100%;
            ",
            for user in list.iter().cloned() {
                UserListRow { key: "{user.email}", user }
            }
        }
    }
}

#[component]
fn UserListRow(user: ReadSignal<RoommateCard>) -> Element {
    let RoommateCard {
        name,
        age,
        title,
        locations,
        photo_url,
        ..
    } = user.read().clone();
    let locations_line = locations.join(", ");

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 14px;
                background: white;
                border: 1px solid #AAAAAA55;
                border-radius: 8px;
                padding: 10px 16px;
                width: 100%;
                box-sizing: border-box;
            ",
            img {
                style: "
                    width: 56px;
                    height: 56px;
                    border-radius: 50%;
                    object-fit: cover;
                    flex-shrink: 0;
                    background-color: #E5E7EB;
                ",
                src: "{photo_url}",
                alt: "{name}",
            }
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 2px;
                    flex: 1;
                    min-width: 0;
                ",
                span {
                    style: "
                        font-size: 18px;
                        font-weight: 500;
                        color: rgb(0, 0, 0);
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    "{name} | {age}"
                }
                span {
                    style: "font-size: 15px; color: rgba(0, 0, 0, 0.6);",
                    "{title}"
                }
                if !locations_line.is_empty() {
                    span {
                        style: "font-size: 14px; color: rgba(0, 0, 0, 0.45); font-style: italic;",
                        "{locations_line}"
                    }
                }
            }
            CardActionButtons { roommate: user, roster: Roster::Directory }
        }
    }
}
