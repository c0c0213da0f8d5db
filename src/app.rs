use dioxus::prelude::*;

use crate::{
    domain::Session,
    infra::storage::open_store,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{CalculatorPage, HistoryPage},
        shell::Shell,
    },
    util::{assets, config::AppConfig},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
    #[route("/history")]
    History {},
}

#[component]
pub fn App() -> Element {
    let mut session = use_signal(|| {
        let config = AppConfig::from_env();
        let store = open_store(&config);
        Session::load_initial(store, &config)
    });
    use_context_provider(|| session);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    use_drop(move || {
        if let Ok(mut session) = session.try_write() {
            session.shutdown();
        }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn History() -> Element {
    rsx! { Shell { HistoryPage {} } }
}
