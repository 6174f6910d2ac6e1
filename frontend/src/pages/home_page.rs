use dioxus::prelude::*;
use dioxus_free_icons::icons::md_communication_icons::MdChat;
use dioxus_free_icons::icons::md_social_icons::MdPeople;
use dioxus_free_icons::Icon;

use crate::data_definitions::session::SessionState;
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Get Me A Roommate - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}

            // Cards Row
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                BrowseCard {}
                SuggestionsCard {}
            }

            // Feedback Row
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                ",
                FeedbackCard {}
            }
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Welcome to" }
            span { style: "color:#4F46E5;", "Get Me A Roommate!" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 30px;
                line-height: 1.6;
                max-width: 620px;
                font-weight: 500;
            ",
            "Find people you can actually live with. Browse profiles, shortlist your favourites, and let the matcher surface the five people closest to your budget, habits and move-in plans."
        }
    }
}

#[component]
fn BrowseCard() -> Element {

    rsx! {
        div {
            id: "x-card-browse",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                min-height: 280px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",

            // Title
            div {
                style: "
                    font-size: 30px;
                    font-weight: 500;
                ",
                "Browse Roommates"
            }

            // Description
            div {
                style: "
                    font-size: 20px;
                    font-weight: 500;
                    line-height: 1.5;
                    color: rgba(255,255,255,0.92);
                ",
                "Every profile on the site in one place: who they are, where they want to live and when they want to move. Star the ones worth a second look and open any profile for the full picture."
            }

            // Divider spacing
            div { style: "height: 8px; padding-top: 7px; margin-top:7px; border-top: 1px solid white; width: 100%; " }

            div {
                style: "
                    font-size: 16px;
                    color: rgba(255,255,255,0.9);
                    width: 100%;
                ",
                "*Sign in first so your favourites and suggestions follow you around."
            }
            BrowseCtaRow {}
        }
    }
}

#[component]
fn BrowseCtaRow() -> Element {
    let session = use_context::<SessionState>();
    let n2 = navigator();
    let cta_label = if session.is_logged_in() {
        "Browse roommates now"
    } else {
        "Sign in to see your matches"
    };
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                color: #111827;
                cursor: pointer;
            ",
            onclick: move |_| {
                if session.is_logged_in() {
                    n2.push(Route::BrowsePage {});
                } else {
                    n2.push(Route::LoginPage {});
                }
            },
            Icon { icon: MdPeople, style: "width: 20px; height: 20px; color:#6B7280;" }
            span {
                style: "font-size: 14px;",
                "{cta_label}"
            }
        }
    }
}

#[component]
fn SuggestionsCard() -> Element {
    rsx! {
        div {
            id: "x-card-suggestions",
            style: "
                display:flex;
                flex-direction: column;
                gap: 12px;
                width: 520px;
                min-height: 280px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #0B7A2B 0%, #23A340 60%, #178E35 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",

            div {
                style: "
                    font-size: 26px;
                    font-weight: 500;
                ",
                "Your Top 5 Suggestions"
            }

            div {
                style: "
                    font-size: 20px;
                    font-weight: 500;
                    line-height: 1.6;
                    color: rgba(255,255,255,0.96);
                    max-width: 510px;
                ",
                "The matcher compares budgets, lifestyles and move-in dates across everyone on the site and keeps a shortlist of the five people most compatible with you. It sits at the top of the browse page and updates as new people join."
            }
        }
    }
}

#[component]
fn FeedbackCard() -> Element {
    rsx! {
        div {
            id: "x-card-feedback",
            style: "
                display:flex;
                flex-direction: row;
                align-items: flex-start;
                gap: 14px;
                width: 520px;
                min-height: 140px;
                border-radius: 16px;
                padding: 18px;
                background: white;
                color: #111827;
                border: 1px solid #E5E7EB;
                box-shadow: 0 6px 16px rgba(0,0,0,0.06);
            ",

            // Icon box
            div {
                style: "
                    display:flex;
                    align-items:center;
                    justify-content:center;
                    width: 36px;
                    height: 36px;
                    border-radius: 10px;
                    background: #EEF2FF;
                    border: 1px solid #C7D2FE;
                    color: #4F46E5;
                ",
                Icon { icon: MdChat, style: "width: 20px; height: 20px;" }
            }

            // Text and button
            div {
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 16px;
                ",
                div { style: "font-size: 20px; font-weight: 500;", "We'd love to hear from you. Tell us what worked, what didn't, and what would make finding a roommate easier." }

                div {
                    style: "display:flex; flex-direction:row;",
                    button {
                        style: "
                            height: 34px;
                            padding: 0 12px;
                            font-size: 14px;
                            border-radius: 8px;
                            background: white;
                            color: #111827;
                            border: 1px solid #D1D5DB;
                            cursor: pointer;
                        ",
                        "Feedback Form",
                    }
                }
            }
        }
    }
}
