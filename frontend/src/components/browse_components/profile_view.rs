//! Full profile details shown inside the modal body.

use common::user_details::UserDetails;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_communication_icons::{MdEmail, MdPhone}};

#[component]
pub fn ProfileView(user: ReadSignal<UserDetails>) -> Element {
    let UserDetails {
        email,
        name,
        age,
        start_date,
        title,
        locations,
        gender,
        smoke,
        drink,
        budget,
        dietary_preference,
        phone,
        photo_url,
    } = user.read().clone();

    let locations_line = if locations.is_empty() {
        "Anywhere".to_string()
    } else {
        locations.join(", ")
    };
    let move_in = if start_date.is_empty() {
        "Flexible".to_string()
    } else {
        start_date
    };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
            ",
            // Row 1: PHOTO - NAME - TITLE
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 16px;
                ",
                img {
                    style: "
                        width: 96px;
                        height: 96px;
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
                        gap: 4px;
                        min-width: 0;
                    ",
                    h5 {
                        style: "margin: 0; font-size: 24px; font-weight: 500; color: #111827;",
                        "{name} | {age}"
                    }
                    p {
                        style: "margin: 0; font-size: 17px; color: rgba(0, 0, 0, 0.6);",
                        "{title}"
                    }
                    span {
                        style: "font-size: 14px; color: rgba(0, 0, 0, 0.45); text-transform: capitalize;",
                        "{gender}"
                    }
                }
            }
            // Row 2: DETAILS
            div {
                style: "
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 10px 24px;
                ",
                ProfileDetailRow { label: "Moving in", value: move_in }
                ProfileDetailRow { label: "Preferred areas", value: locations_line }
                ProfileDetailRow { label: "Budget", value: format!("${budget} / month") }
                ProfileDetailRow { label: "Dietary preference", value: dietary_preference }
                ProfileDetailRow { label: "Smokes", value: yes_no(smoke) }
                ProfileDetailRow { label: "Drinks", value: yes_no(drink) }
            }
            // Row 3: CONTACT
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 6px;
                    border-top: 1px solid #E5E7EB;
                    padding-top: 12px;
                ",
                div {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                    Icon {
                        icon: MdEmail,
                        style: "width: 18px; height: 18px; color: rgba(0, 0, 0, 0.5);"
                    }
                    span { style: "font-size: 16px; color: #111827;", "{email}" }
                }
                div {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                    Icon {
                        icon: MdPhone,
                        style: "width: 18px; height: 18px; color: rgba(0, 0, 0, 0.5);"
                    }
                    span { style: "font-size: 16px; color: #111827;", "{phone}" }
                }
            }
        }
    }
}

#[component]
fn ProfileDetailRow(label: String, value: String) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 2px;",
            span {
                style: "
                    font-size: 13px;
                    color: rgba(0, 0, 0, 0.5);
                    text-transform: uppercase;
                    letter-spacing: 0.04em;
                ",
                "{label}"
            }
            span {
                style: "font-size: 17px; color: rgb(0, 0, 0);",
                "{value}"
            }
        }
    }
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes".to_string() } else { "No".to_string() }
}
