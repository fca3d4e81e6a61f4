use crate::store::ChatStore;
use crate::views::{ChatView, SettingsView, Sidebar};
use dioxus::prelude::*;

const GOLDFINCH_CSS: Asset = asset!("/assets/goldfinch.css");

#[component]
pub fn App() -> Element {
    let store = use_signal(ChatStore::load);

    rsx! {
        document::Link { rel: "stylesheet", href: GOLDFINCH_CSS }
        div { class: "app-shell",
            div { class: "side-panel",
                div { class: "side-panel-header",
                    h1 { class: "app-title", "Goldfinch" }
                }
                Sidebar { store }
                SettingsView { store }
            }
            div { class: "main-pane",
                ChatView { store }
            }
        }
    }
}
