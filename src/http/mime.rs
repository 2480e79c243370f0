//! MIME type lookup by file extension.
//!
//! The built-in table is created once per process and never mutated. A
//! server instance may extend it with configured entries; the merged table
//! is likewise fixed once built.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

const BUILTIN_TYPES: &[(&str, &str)] = &[
    (".avif", "image/avif"),
    (".css", "text/css; charset=utf-8"),
    (".gif", "image/gif"),
    (".htm", "text/html; charset=utf-8"),
    (".html", "text/html; charset=utf-8"),
    (".jpeg", "image/jpeg"),
    (".jpg", "image/jpeg"),
    (".js", "text/javascript; charset=utf-8"),
    (".json", "application/json"),
    (".mjs", "text/javascript; charset=utf-8"),
    (".pdf", "application/pdf"),
    (".png", "image/png"),
    (".svg", "image/svg+xml"),
    (".txt", "text/plain; charset=utf-8"),
    (".wasm", "application/wasm"),
    (".webp", "image/webp"),
    (".xml", "text/xml; charset=utf-8"),
];

static BUILTIN: LazyLock<MimeTable> = LazyLock::new(|| MimeTable {
    types: BUILTIN_TYPES
        .iter()
        .map(|(ext, ty)| (ext.to_string(), ty.to_string()))
        .collect(),
});

#[derive(Debug, Clone)]
pub struct MimeTable {
    types: HashMap<String, String>,
}

impl MimeTable {
    /// The shared built-in table.
    pub fn builtin() -> &'static MimeTable {
        &BUILTIN
    }

    /// Built-in table plus `extra`, with `extra` winning on conflicts.
    ///
    /// Keys without a leading `.` get one, so `md` and `.md` are equivalent.
    pub fn with_extra<'a, I>(extra: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut types = BUILTIN.types.clone();
        for (ext, ty) in extra {
            let ext = if ext.starts_with('.') {
                ext.clone()
            } else {
                format!(".{ext}")
            };
            types.insert(ext, ty.clone());
        }
        Self { types }
    }

    /// Looks up the type for an extension including its leading dot.
    ///
    /// Tries the extension as given, then lowercased. Returns `None` for an
    /// empty or unregistered extension.
    ///
    /// ```
    /// # use tinyserve::http::mime::MimeTable;
    /// let table = MimeTable::builtin();
    /// assert_eq!(table.lookup(".png"), Some("image/png"));
    /// assert_eq!(table.lookup(".PNG"), Some("image/png"));
    /// assert_eq!(table.lookup(".xyz"), None);
    /// assert_eq!(table.lookup(""), None);
    /// ```
    pub fn lookup(&self, ext: &str) -> Option<&str> {
        if ext.is_empty() {
            return None;
        }
        self.types
            .get(ext)
            .or_else(|| self.types.get(&ext.to_ascii_lowercase()))
            .map(String::as_str)
    }

    /// Resolves the content type of a filesystem path by its extension.
    ///
    /// Invalid UTF-8 in the path is replaced before the lookup, so such bytes
    /// in the extension never match a table entry.
    pub fn content_type_for(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref().to_string_lossy();
        self.lookup(extension(&path))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for MimeTable {
    fn default() -> Self {
        MimeTable::builtin().clone()
    }
}

/// Extension of a `/`-separated path, including the dot.
///
/// This is everything from the last `.` in the final segment, or `""` when
/// that segment has no dot. Unlike `Path::extension`, dotfiles count:
/// `./.profile` yields `.profile`.
pub fn extension(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(i) => &name[i..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_of_nested_paths() {
        assert_eq!(extension("./index.html"), ".html");
        assert_eq!(extension("./a/b/archive.tar.gz"), ".gz");
        assert_eq!(extension("./dir.d/file"), "");
        assert_eq!(extension("./.profile"), ".profile");
        assert_eq!(extension("./trailing."), ".");
    }
}
