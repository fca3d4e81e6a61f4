use crate::ai::{ModelGateway, chat_reply};
use crate::store::ChatStore;
use crate::types::{Message, Role};
use crate::views::shared::{format_message_time, markdown_to_html};
use dioxus::events::Key;
use dioxus::prelude::*;

#[component]
pub fn ChatView(store: Signal<ChatStore>) -> Element {
    let mut input = use_signal(String::new);
    let pending = use_signal(|| 0usize);

    let mut send_message = {
        let mut store = store;
        let mut pending = pending;
        let mut input_signal = input;
        move |text: String| {
            let trimmed = text.trim().to_string();
            if trimmed.is_empty() || store.with(|s| s.current_chat.is_none()) {
                return;
            }

            store.with_mut(|s| s.append_message(Message::new(Role::User, trimmed.clone())));
            input_signal.set(String::new());

            let settings = store.with(|s| s.settings.clone());
            let files = store.with(|s| s.uploaded_files.clone());
            pending.with_mut(|count| *count += 1);

            // Overlapping sends are allowed; replies land in completion
            // order, not submission order.
            spawn(async move {
                let gateway = ModelGateway::from_env();
                let reply = chat_reply(&gateway, &trimmed, &settings, &files).await;
                store.with_mut(|s| s.append_message(Message::new(Role::Assistant, reply)));
                pending.with_mut(|count| *count -= 1);
            });
        }
    };

    let current = store.with(|s| s.current_chat.clone());
    let in_flight = pending() > 0;

    rsx! {
        div { class: "chat-pane",
            if let Some(chat) = current {
                div { class: "chat-list",
                    for msg in chat.messages.iter() {
                        MessageRow { key: "{msg.id}", message: msg.clone() }
                    }
                    if in_flight {
                        div { class: "message-row assistant",
                            div { class: "shimmer-line",
                                span { class: "shimmer-text", "Processing…" }
                            }
                        }
                    }
                }
                div { class: "composer",
                    input {
                        class: "composer-input",
                        placeholder: "Type your message...",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter {
                                ev.prevent_default();
                                let text = input();
                                send_message(text);
                            }
                        },
                        autofocus: true,
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: input().trim().is_empty(),
                        onclick: move |_| {
                            let text = input();
                            send_message(text);
                        },
                        "Send"
                    }
                }
            } else {
                div { class: "welcome",
                    h2 { class: "welcome-title", "Welcome to Goldfinch" }
                    p { class: "text-muted", "Select or create a new chat to begin" }
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: Message) -> Element {
    let role_class = match message.role {
        Role::User => "user",
        Role::Assistant => "assistant",
    };
    let author = match message.role {
        Role::User => "You",
        Role::Assistant => "Assistant",
    };

    rsx! {
        div { class: "message-row {role_class}",
            div { class: "message-meta",
                span { class: "message-author", "{author}" }
                if let Some(ts) = format_message_time(message.timestamp) {
                    span { class: "message-timestamp", "{ts}" }
                }
            }
            if matches!(message.role, Role::Assistant) {
                AssistantBubble { content: message.content.clone() }
            } else {
                div { class: "bubble user", "{message.content}" }
            }
        }
    }
}

#[component]
fn AssistantBubble(content: String) -> Element {
    let content_html = markdown_to_html(&content);
    let copy_payload = content.clone();
    let on_copy = move |_| {
        let raw = copy_payload.clone();
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                if let Ok(mut cb) = arboard::Clipboard::new() {
                    let _ = cb.set_text(raw);
                }
            }
        });
    };

    rsx! {
        div { class: "bubble assistant",
            div { class: "bubble-controls",
                button { class: "action-btn", title: "Copy markdown", onclick: on_copy, "Copy" }
            }
            div { class: "md", dangerous_inner_html: "{content_html}" }
        }
    }
}
