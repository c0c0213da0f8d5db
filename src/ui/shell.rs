use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{Accent, Session};
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let session = use_context::<Signal<Session>>();
    let (current_theme, accent, saved) =
        session.with(|s| (s.theme(), s.accent(), s.history().len()));

    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let mut session_mut = session;

    rsx! {
        div {
            class: "{theme::root_class(current_theme)}",
            style: "{theme::accent_style(accent)}",
            header { class: "app-header",
                div { class: "header-inner",
                    div { class: "brand",
                        span { class: "brand-dot" }
                        h1 { class: "brand-title", "{APP_NAME}" }
                    }

                    nav { class: "header-nav",
                        NavButton {
                            active: matches!(current_route, Route::Calculator {}),
                            onclick: move |_| { nav.push(Route::Calculator {}); },
                            label: "🧮 Calculator".to_string(),
                        }
                        NavButton {
                            active: matches!(current_route, Route::History {}),
                            onclick: move |_| { nav.push(Route::History {}); },
                            label: format!("🕘 History ({saved})"),
                        }
                    }

                    div { class: "header-controls",
                        div { class: "accent-switch",
                            for option in Accent::ALL {
                                button {
                                    class: theme::accent_button(option == accent),
                                    title: "{option}",
                                    onclick: move |_| session_mut.with_mut(|s| s.set_accent(option)),
                                    "{option.hex()}"
                                }
                            }
                        }
                        button {
                            class: "btn",
                            onclick: move |_| session_mut.with_mut(|s| s.toggle_theme()),
                            "{theme::theme_toggle_label(current_theme)}"
                        }
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
            footer { class: "app-footer", "{APP_NAME} {version_label()}" }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: String) -> Element {
    rsx! {
        button {
            class: theme::nav_button(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
