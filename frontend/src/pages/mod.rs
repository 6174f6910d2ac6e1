pub(crate) mod browse_page;
pub(crate) mod home_page;
pub(crate) mod login_page;
