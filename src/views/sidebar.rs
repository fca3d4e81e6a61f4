use crate::store::ChatStore;
use dioxus::prelude::*;

#[component]
pub fn Sidebar(store: Signal<ChatStore>) -> Element {
    let mut store = store;
    let history = store.with(|s| s.chat_history.clone());
    let current_id = store.with(|s| s.current_chat.as_ref().map(|chat| chat.id));

    rsx! {
        div { class: "sidebar",
            div { class: "sidebar-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| store.with_mut(|s| s.create_chat()),
                    "New Chat"
                }
                if current_id.is_some() {
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        title: "Clear current chat",
                        onclick: move |_| store.with_mut(|s| s.set_current_chat(None)),
                        "Clear"
                    }
                }
            }
            div { class: "history-list",
                for chat in history.iter() {
                    button {
                        key: "{chat.id}",
                        class: format_args!(
                            "history-entry {}",
                            if Some(chat.id) == current_id { "active" } else { "" }
                        ),
                        r#type: "button",
                        onclick: {
                            let chat = chat.clone();
                            move |_| store.with_mut(|s| s.set_current_chat(Some(chat.clone())))
                        },
                        div { class: "history-entry-title", "{chat.title}" }
                        div { class: "history-entry-preview",
                            {
                                chat.last_message()
                                    .map(|msg| msg.content.clone())
                                    .unwrap_or_else(|| "No messages yet".to_string())
                            }
                        }
                    }
                }
            }
        }
    }
}
