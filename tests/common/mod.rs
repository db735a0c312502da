//! Test utilities shared by the integration tests

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use std::path::{Path, PathBuf};

/// Standard Type1 Courier font dictionary
pub fn courier() -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    }
}

/// Build a one-page PDF showing `lines` in Courier, one per text row
pub fn build_pdf(lines: &[&str]) -> Document {
    build_pdf_with_font(courier(), "F1", lines)
}

/// Build a one-page PDF registering `font` as `/F1` and selecting `/{selected}`
pub fn build_pdf_with_font(font: Dictionary, selected: &str, lines: &[&str]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(font);
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut operations = Vec::new();
    if !lines.is_empty() {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![Object::Name(selected.as_bytes().to_vec()), 24.into()],
        ));
        operations.push(Operation::new("TL", vec![30.into()]));
        operations.push(Operation::new("Td", vec![72.into(), 720.into()]));
        for line in lines {
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("T*", vec![]));
        }
        operations.push(Operation::new("ET", vec![]));
    }
    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("encode content stream"),
    ));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Write a PDF with `lines` into `dir` and return its path
pub fn write_pdf(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    save_pdf(dir, name, build_pdf(lines))
}

/// Write an already built document into `dir` and return its path
pub fn save_pdf(dir: &Path, name: &str, mut doc: Document) -> PathBuf {
    let path = dir.join(name);
    doc.save(&path).expect("save test pdf");
    path
}

/// PDF bytes with `lines` as text
pub fn pdf_bytes(lines: &[&str]) -> Vec<u8> {
    let mut doc = build_pdf(lines);
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("serialize test pdf");
    buffer
}

/// Collapse all whitespace so layout differences don't matter
pub fn squash(text: &str) -> String {
    text.split_whitespace().collect()
}

/// Chat completion envelope whose message content is `content`
pub fn envelope(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "meta-llama/llama-4-scout-17b-16e-instruct",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    })
    .to_string()
}
