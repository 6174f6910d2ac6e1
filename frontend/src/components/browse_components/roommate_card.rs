//! Suggestion card component.

use common::roommate::{Roster, RoommateCard};
use dioxus::prelude::*;

use crate::components::browse_components::card_action_buttons::CardActionButtons;

#[component]
pub fn RoommateCardView(roommate: ReadSignal<RoommateCard>, roster: Roster) -> Element {
    let RoommateCard {
        name,
        age,
        title,
        photo_url,
        ..
    } = roommate.read().clone();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: stretch;
                gap: 7px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                width: 250px;
                box-sizing: border-box;
            ",
            // Row 1: PHOTO
            img {
                style: "
                    width: 100%;
                    height: 170px;
                    object-fit: cover;
                    border-radius: 8px;
                    background-color: #E5E7EB;
                ",
                src: "{photo_url}",
                alt: "{name}",
            }
            // Row 2: NAME | AGE
            h5 {
                style: "
                    font-size: 20px;
                    line-height: 28px;
                    font-weight: 400;
                    color: rgb(0, 0, 0);
                    margin: 0;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{name} | {age}"
            }
            // Row 3: TITLE
            p {
                style: "
                    font-size: 16px;
                    line-height: 23px;
                    font-weight: 400;
                    color: rgba(0, 0, 0, 0.6);
                    margin: 0;
                ",
                "{title}"
            }
            // SPACER
            div {
                style: "flex: 1 1 auto;",
            }
            // Row 4: ACTIONS
            CardActionButtons { roommate, roster }
        }
    }
}
