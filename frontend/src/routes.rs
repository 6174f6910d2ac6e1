use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::browse_page::BrowsePage;
use crate::pages::home_page::HomePage;
use crate::pages::login_page::LoginPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/login")]
    LoginPage {  },

    #[route("/browse")]
    BrowsePage {  },

}
