use dioxus::prelude::*;

use crate::client::{
    components::AppLayout,
    routes::{
        Dashboard, Documents, Equipment, Facilities, Farms, Login, Maintenance, NotFound, Orders,
        Projects, Quotes, Reports, Settings,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},

    #[layout(AppLayout)]

        #[route("/")]
        Dashboard {},

        #[route("/farms")]
        Farms {},

        #[route("/equipment")]
        Equipment {},

        #[route("/facilities")]
        Facilities {},

        #[route("/maintenance")]
        Maintenance {},

        #[route("/reports")]
        Reports {},

        #[route("/projects")]
        Projects {},

        #[route("/quotes")]
        Quotes {},

        #[route("/orders?:quote")]
        Orders { quote: String },

        #[route("/documents")]
        Documents {},

        #[route("/settings")]
        Settings {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
