use std::collections::HashMap;

use tinyserve::http::mime::{MimeTable, extension};

#[test]
fn test_builtin_html_types() {
    let table = MimeTable::builtin();
    assert_eq!(table.lookup(".html"), Some("text/html; charset=utf-8"));
    assert_eq!(table.lookup(".htm"), Some("text/html; charset=utf-8"));
}

#[test]
fn test_builtin_common_types() {
    let table = MimeTable::builtin();
    let expected = [
        (".css", "text/css; charset=utf-8"),
        (".js", "text/javascript; charset=utf-8"),
        (".json", "application/json"),
        (".png", "image/png"),
        (".jpg", "image/jpeg"),
        (".jpeg", "image/jpeg"),
        (".gif", "image/gif"),
        (".svg", "image/svg+xml"),
        (".pdf", "application/pdf"),
        (".wasm", "application/wasm"),
        (".txt", "text/plain; charset=utf-8"),
    ];
    for (ext, ty) in expected {
        assert_eq!(table.lookup(ext), Some(ty), "lookup of {ext}");
    }
}

#[test]
fn test_lookup_falls_back_to_lowercase() {
    let table = MimeTable::builtin();
    assert_eq!(table.lookup(".HTML"), Some("text/html; charset=utf-8"));
    assert_eq!(table.lookup(".Png"), Some("image/png"));
}

#[test]
fn test_unregistered_and_missing_extensions() {
    let table = MimeTable::builtin();
    assert_eq!(table.lookup(".xyz"), None);
    assert_eq!(table.lookup(""), None);
    assert_eq!(table.lookup("."), None);
    assert_eq!(table.lookup("html"), None);
}

#[test]
fn test_content_type_for_paths() {
    let table = MimeTable::builtin();
    assert_eq!(table.content_type_for("./index.html"), Some("text/html; charset=utf-8"));
    assert_eq!(table.content_type_for("./data.xyz"), None);
    assert_eq!(table.content_type_for("./Makefile"), None);
    assert_eq!(table.content_type_for("./assets.v2/logo"), None);
}

#[test]
fn test_extension_helper() {
    assert_eq!(extension("./a.b.c"), ".c");
    assert_eq!(extension("no-slash.png"), ".png");
    assert_eq!(extension(""), "");
}

#[test]
fn test_with_extra_adds_and_overrides() {
    let mut extra = HashMap::new();
    extra.insert(".md".to_string(), "text/markdown".to_string());
    extra.insert("xyz".to_string(), "chemical/x-xyz".to_string());
    extra.insert(".html".to_string(), "text/html".to_string());

    let table = MimeTable::with_extra(&extra);

    assert_eq!(table.lookup(".md"), Some("text/markdown"));
    assert_eq!(table.lookup(".xyz"), Some("chemical/x-xyz"));
    assert_eq!(table.lookup(".html"), Some("text/html"));
    assert_eq!(table.lookup(".png"), Some("image/png"));

    // Built-in table is untouched.
    assert_eq!(MimeTable::builtin().lookup(".md"), None);
    assert_eq!(table.len(), MimeTable::builtin().len() + 2);
}

#[test]
fn test_default_is_builtin() {
    let table = MimeTable::default();
    assert_eq!(table.len(), MimeTable::builtin().len());
    assert!(!table.is_empty());
}
