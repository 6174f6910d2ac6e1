pub(crate) mod card_action_buttons;
pub(crate) mod profile_modal;
pub(crate) mod profile_view;
pub(crate) mod roommate_card;
pub(crate) mod user_list;
