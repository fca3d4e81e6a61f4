//! Prompt templates.
//!
//! Composition is deterministic: identical inputs must yield byte-identical
//! prompts, so tests can pin the exact strings sent to a backend.

use crate::types::UploadedFile;

/// Labeled context block for every uploaded file, in upload order.
fn files_context(files: &[UploadedFile]) -> String {
    files
        .iter()
        .map(|file| format!("[{}]:\n{}\n", file.name, file.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The grounding prompt for a chat turn: all uploaded documents, the user's
/// raw input, and a directive allowing fallback to general knowledge.
pub fn answer_prompt(input: &str, files: &[UploadedFile]) -> String {
    format!(
        "\nContext from uploaded files:\n{}\n\nBased on the above context, please answer the following:\n{}\n\nIf the question is not related to the context, you can answer based on your general knowledge.\n",
        files_context(files),
        input
    )
}

/// Fixed summarization template embedding the document's kind and content.
pub fn summary_prompt(file: &UploadedFile) -> String {
    format!(
        "Please provide a concise summary of the following {} content:\n\n{}",
        file.kind.as_str(),
        file.content
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileKind;
    use uuid::Uuid;

    fn file(name: &str, content: &str) -> UploadedFile {
        UploadedFile {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind: FileKind::Text,
            content: content.to_string(),
        }
    }

    #[test]
    fn answer_prompt_is_deterministic() {
        let files = vec![file("a.txt", "X")];
        let first = answer_prompt("Q", &files);
        let second = answer_prompt("Q", &files);
        assert_eq!(first, second);
    }

    #[test]
    fn answer_prompt_matches_template() {
        let files = vec![file("a.txt", "X")];
        assert_eq!(
            answer_prompt("Q", &files),
            "\nContext from uploaded files:\n[a.txt]:\nX\n\n\nBased on the above context, please answer the following:\nQ\n\nIf the question is not related to the context, you can answer based on your general knowledge.\n"
        );
    }

    #[test]
    fn context_blocks_are_joined_in_upload_order() {
        let files = vec![file("a.txt", "X"), file("b.txt", "Y")];
        let prompt = answer_prompt("Q", &files);
        let a = prompt.find("[a.txt]:").unwrap();
        let b = prompt.find("[b.txt]:").unwrap();
        assert!(a < b);
    }

    #[test]
    fn summary_prompt_names_the_kind() {
        let mut doc = file("doc.pdf", "body text");
        doc.kind = FileKind::Pdf;
        assert_eq!(
            summary_prompt(&doc),
            "Please provide a concise summary of the following pdf content:\n\nbody text"
        );
    }
}
