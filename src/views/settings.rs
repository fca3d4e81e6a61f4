use crate::ai::ModelGateway;
use crate::ingest::{PdfExtractor, ingest_file};
use crate::store::ChatStore;
use crate::types::{FileKind, ModelBackend, SettingsPatch};
use dioxus::events::FormEvent;
use dioxus::prelude::*;
use uuid::Uuid;

#[component]
pub fn SettingsView(store: Signal<ChatStore>) -> Element {
    let mut store = store;
    let file_kind = use_signal(|| FileKind::Text);
    let selected_file = use_signal(|| Option::<Uuid>::None);
    let summary = use_signal(String::new);
    let summarizing = use_signal(|| false);

    let models = use_resource(move || async move {
        let gateway = ModelGateway::from_env();
        gateway.list_local_models().await
    });

    let settings = store.with(|s| s.settings.clone());
    let uploaded_files = store.with(|s| s.uploaded_files.clone());
    let has_current_chat = store.with(|s| s.current_chat.is_some());

    let accept = match file_kind() {
        FileKind::Text => ".txt",
        FileKind::Pdf => ".pdf",
    };
    let api_key = settings.api_key.clone().unwrap_or_default();
    let backend_value = match settings.backend {
        ModelBackend::Ollama => "ollama",
        ModelBackend::Hosted => "hosted",
    };

    rsx! {
        div { class: "settings-panel",
            h2 { class: "section-title", "Settings" }

            div { class: "settings-section",
                div { class: "settings-row",
                    label { class: "control-label", "File type" }
                    select {
                        value: match file_kind() { FileKind::Text => "text", FileKind::Pdf => "pdf" },
                        onchange: {
                            let mut file_kind = file_kind;
                            move |evt: FormEvent| {
                                let kind = match evt.value().as_str() {
                                    "pdf" => FileKind::Pdf,
                                    _ => FileKind::Text,
                                };
                                file_kind.set(kind);
                            }
                        },
                        option { value: "text", "Text" }
                        option { value: "pdf", "PDF" }
                    }
                }
                div { class: "settings-row",
                    label { class: "btn btn-outline upload-label",
                        input {
                            r#type: "file",
                            class: "hidden-input",
                            accept: accept,
                            onchange: move |evt| {
                                let kind = file_kind();
                                if let Some(file_engine) = evt.files() {
                                    spawn(async move {
                                        for name in file_engine.files() {
                                            let Some(bytes) = file_engine.read_file(&name).await else {
                                                tracing::warn!("failed to read uploaded file {name}");
                                                continue;
                                            };
                                            match ingest_file(&name, &bytes, kind, &PdfExtractor).await {
                                                Ok(file) => store.with_mut(|s| s.add_uploaded_file(file)),
                                                Err(err) => tracing::warn!("failed to ingest {name}: {err}"),
                                            }
                                        }
                                    });
                                }
                            },
                        }
                        "Upload"
                    }
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
                        disabled: !has_current_chat,
                        onclick: move |_| {
                            #[cfg(not(target_arch = "wasm32"))]
                            if let Some(chat) = store.with(|s| s.current_chat.clone()) {
                                match crate::export::download_transcript(&chat) {
                                    Ok(path) => tracing::info!("transcript written to {}", path.display()),
                                    Err(err) => tracing::warn!("failed to export transcript: {err:#}"),
                                }
                            }
                        },
                        "Download"
                    }
                }
            }

            if !uploaded_files.is_empty() {
                div { class: "settings-section",
                    h3 { class: "section-subtitle", "Uploaded Files" }
                    for file in uploaded_files.iter() {
                        div { key: "{file.id}", class: "file-row",
                            div { class: "file-row-header",
                                span { class: "file-name", "{file.name}" }
                                div { class: "file-actions",
                                    button {
                                        class: "btn btn-outline btn-sm",
                                        r#type: "button",
                                        disabled: summarizing() && selected_file() == Some(file.id),
                                        onclick: {
                                            let file = file.clone();
                                            let mut selected_file = selected_file;
                                            let mut summary = summary;
                                            let mut summarizing = summarizing;
                                            move |_| {
                                                let file = file.clone();
                                                let settings = store.with(|s| s.settings.clone());
                                                selected_file.set(Some(file.id));
                                                summarizing.set(true);
                                                summary.set(String::new());
                                                spawn(async move {
                                                    let gateway = ModelGateway::from_env();
                                                    let result = match gateway.summarize(&file, &settings).await {
                                                        Ok(text) => text,
                                                        Err(err) => {
                                                            tracing::error!("failed to summarize {}: {err}", file.name);
                                                            "Error generating summary".to_string()
                                                        }
                                                    };
                                                    summary.set(result);
                                                    summarizing.set(false);
                                                });
                                            }
                                        },
                                        if summarizing() && selected_file() == Some(file.id) {
                                            "Summarizing..."
                                        } else {
                                            "Summarize"
                                        }
                                    }
                                    button {
                                        class: "btn btn-outline btn-sm",
                                        r#type: "button",
                                        onclick: {
                                            let id = file.id;
                                            move |_| store.with_mut(|s| s.remove_uploaded_file(&id))
                                        },
                                        "Remove"
                                    }
                                }
                            }
                            if selected_file() == Some(file.id) && !summary().is_empty() {
                                div { class: "file-summary", "{summary}" }
                            }
                        }
                    }
                }
            }

            div { class: "settings-section",
                div { class: "settings-row",
                    label { class: "control-label", "Model" }
                    select {
                        value: backend_value,
                        onchange: move |evt: FormEvent| {
                            let backend = match evt.value().as_str() {
                                "hosted" => ModelBackend::Hosted,
                                _ => ModelBackend::Ollama,
                            };
                            store.with_mut(|s| s.update_settings(SettingsPatch {
                                backend: Some(backend),
                                ..Default::default()
                            }));
                        },
                        option { value: "ollama", "Ollama" }
                        option { value: "hosted", "Hosted API" }
                    }
                }
                if settings.backend == ModelBackend::Ollama {
                    div { class: "settings-row",
                        label { class: "control-label", "Ollama model" }
                        select {
                            value: "{settings.ollama_model}",
                            onchange: move |evt: FormEvent| {
                                store.with_mut(|s| s.update_settings(SettingsPatch {
                                    ollama_model: Some(evt.value()),
                                    ..Default::default()
                                }));
                            },
                            if let Some(models) = models() {
                                if models.is_empty() {
                                    option { value: "", "No models found" }
                                } else {
                                    for model in models.iter() {
                                        option { key: "{model}", value: "{model}", "{model}" }
                                    }
                                }
                            } else {
                                option { "Loading models..." }
                            }
                        }
                    }
                }
                if settings.backend == ModelBackend::Hosted {
                    div { class: "settings-row",
                        label { class: "control-label", "API Key" }
                        input {
                            r#type: "password",
                            value: "{api_key}",
                            placeholder: "Enter your API key",
                            oninput: move |evt| {
                                store.with_mut(|s| s.update_settings(SettingsPatch {
                                    api_key: Some(evt.value()),
                                    ..Default::default()
                                }));
                            },
                        }
                    }
                }
                div { class: "settings-row",
                    label { class: "control-label", "Temperature" }
                    input {
                        r#type: "range",
                        min: "0",
                        max: "1",
                        step: "0.1",
                        value: "{settings.temperature}",
                        oninput: move |evt| {
                            if let Ok(temperature) = evt.value().parse::<f32>() {
                                store.with_mut(|s| s.update_settings(SettingsPatch {
                                    temperature: Some(temperature.clamp(0.0, 1.0)),
                                    ..Default::default()
                                }));
                            }
                        },
                    }
                    span { class: "control-value", "{settings.temperature}" }
                }
                div { class: "settings-row",
                    label { class: "control-label", "Max Tokens" }
                    input {
                        r#type: "number",
                        min: "1",
                        max: "4096",
                        value: "{settings.max_tokens}",
                        oninput: move |evt| {
                            if let Ok(max_tokens) = evt.value().parse::<u32>() {
                                store.with_mut(|s| s.update_settings(SettingsPatch {
                                    max_tokens: Some(max_tokens.clamp(1, 4096)),
                                    ..Default::default()
                                }));
                            }
                        },
                    }
                }
            }
        }
    }
}
