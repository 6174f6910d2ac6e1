//! Browse page: top suggestions, the full directory, and the profile modal.

use dioxus::{logger::tracing, prelude::*};

use common::favourite::FavouriteUpdate;
use common::roommate::{self, Roster, RoommateCard};
use common::user_details::UserDetails;

use crate::{
    api::browse_api::{get_directory_users, get_top_matches, get_user_details, update_favourite},
    components::{browse_components::{profile_modal::ProfileModal, roommate_card::RoommateCardView, user_list::UserList}, suspend_boundary::SuspendWrapper},
    data_definitions::session::SessionState,
};

#[derive(Copy, Clone)]
pub struct BrowseState {
    pub top_roommates: ReadSignal<Vec<RoommateCard>>,
    pub directory_users: ReadSignal<Option<Vec<RoommateCard>>>,
    pub selected_user: ReadSignal<Option<UserDetails>>,
    pub modal_show: ReadSignal<bool>,
    pub mark_as_favourite: Callback<(String, Roster)>,
    pub view_profile: Callback<String>,
    pub close_profile: Callback<()>,
}

#[component]
pub fn BrowsePage() -> Element {
    rsx! {
        Title { "Get Me A Roommate - Browse" }
        BrowsePageRootComponent {}
    }
}

#[component]
fn BrowsePageRootComponent() -> Element {
    let session = use_context::<SessionState>();

    let mut top_roommates = use_signal(Vec::<RoommateCard>::new);
    let mut directory_users = use_signal(|| None::<Vec<RoommateCard>>);
    let mut selected_user = use_signal(|| None::<UserDetails>);
    let mut modal_show = use_signal(|| false);

    // The two fetches are independent: each section fills in (or logs its
    // failure) on its own.
    let mut top_matches_resource = use_resource(move || {
        let email = session.user_email();
        get_top_matches(email)
    });
    // when the signed-in user changes, we need to restart the suggestions resource
    use_effect(move || {
        let _ = session.current_user.read();
        top_matches_resource.clear();
        top_matches_resource.restart();
    });
    use_effect(move || match top_matches_resource.read().as_ref() {
        Some(Ok(cards)) => top_roommates.set(cards.clone()),
        Some(Err(e)) => tracing::error!("fetching top matches failed: {e}"),
        None => {}
    });

    let directory_resource = use_resource(move || get_directory_users());
    use_effect(move || match directory_resource.read().as_ref() {
        Some(Ok(users)) => directory_users.set(Some(users.clone())),
        Some(Err(e)) => tracing::error!("loading the user directory failed: {e}"),
        None => {}
    });

    let mark_as_favourite = Callback::new(move |(key, roster): (String, Roster)| {
        let listing = match roster {
            Roster::TopSuggestions => top_roommates.read().clone(),
            Roster::Directory => directory_users.read().clone().unwrap_or_default(),
        };
        // unknown keys are dropped without a request
        let Some(found) = roommate::find_roommate(&listing, &key, roster) else {
            return;
        };
        let update = FavouriteUpdate::toggle(&session.user_email(), found);
        let flip_email = found.email.clone();
        spawn(async move {
            match update_favourite(update).await {
                Ok(()) => match roster {
                    Roster::TopSuggestions => {
                        let flipped =
                            roommate::with_favourite_toggled(&top_roommates.read(), &flip_email);
                        top_roommates.set(flipped);
                    }
                    Roster::Directory => {
                        let current = directory_users.read().clone();
                        if let Some(users) = current {
                            let flipped = roommate::with_favourite_toggled(&users, &flip_email);
                            directory_users.set(Some(flipped));
                        }
                    }
                },
                // the lists stay as they are when the server said no
                Err(e) => tracing::error!("favourite update failed: {e}"),
            }
        });
    });

    let view_profile = Callback::new(move |email: String| {
        spawn(async move {
            match get_user_details(email).await {
                Ok(details) => {
                    selected_user.set(Some(details));
                    modal_show.set(true);
                }
                Err(e) => tracing::error!("fetching user details failed: {e}"),
            }
        });
    });

    let close_profile = Callback::new(move |_: ()| {
        modal_show.set(false);
    });

    use_context_provider(move || BrowseState {
        top_roommates: top_roommates.into(),
        directory_users: directory_users.into(),
        selected_user: selected_user.into(),
        modal_show: modal_show.into(),
        mark_as_favourite,
        view_profile,
        close_profile,
    });

    rsx! {
        div {
            id: "x-browse-page-root",
            style: "
                height: 100%;
                width: 100%;
                overflow-y: auto;
                background-color: #F5F6F8;
                box-sizing: border-box;
            ",
            if session.is_logged_in() {
                SuspendWrapper {
                    TopSuggestionsSection {}
                    DirectorySection {}
                }
            }
            ProfileModal {}
        }
    }
}

#[component]
fn TopSuggestionsSection() -> Element {
    let browse_state = use_context::<BrowseState>();
    let cards = browse_state.top_roommates.read().clone();

    rsx! {
        section {
            id: "x-top-suggestions",
            style: "padding: 24px 32px;",
            h3 {
                style: "
                    font-size: 28px;
                    font-weight: 600;
                    color: #111827;
                    margin: 0 0 16px 0;
                ",
                "Top 5 "
                span { style: "color: #4F46E5;", "Suggestions" }
            }
            if cards.is_empty() {
                div {
                    style: "font-size: 18px; color: #6B7280; padding: 12px 0;",
                    "No recommended roommates found"
                }
            } else {
                div {
                    id: "x-top-suggestions-cards",
                    style: "
                        display: flex;
                        flex-direction: row;
                        flex-wrap: wrap;
                        gap: 16px;
                        align-items: stretch;
                    ",
                    for card in cards.iter().cloned() {
                        RoommateCardView {
                            key: "{card.email}",
                            roommate: card,
                            roster: Roster::TopSuggestions,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DirectorySection() -> Element {
    let browse_state = use_context::<BrowseState>();
    let users = browse_state.directory_users.read().clone();

    let body = match users {
        Some(users) => rsx! {
            UserList { users }
        },
        None => rsx! {
            p {
                style: "font-size: 18px; color: #6B7280; margin: 0;",
                "Loading users..."
            }
        },
    };

    rsx! {
        section {
            id: "x-user-directory",
            style: "padding: 24px 32px;",
            {body}
        }
    }
}
