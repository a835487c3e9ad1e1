//! Browser file inputs to `FileMeta`.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use loans::validation::FileMeta;

/// First file of a file input, if any was picked.
#[cfg(feature = "csr")]
pub fn selected_file(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    input.files()?.get(0)
}

#[cfg(feature = "csr")]
pub fn file_meta(file: &web_sys::File) -> FileMeta {
    FileMeta::new(file.name(), file.type_(), size_bytes(file.size()))
}

/// `Blob.size` arrives as an `f64`; negative or non-finite values count as 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn size_bytes(size: f64) -> u64 {
    if size.is_finite() && size > 0.0 { size.round() as u64 } else { 0 }
}

/// "nombre.pdf (1.2 MB)" style label for a picked file.
#[allow(clippy::cast_precision_loss)]
pub fn describe(meta: &FileMeta) -> String {
    const KB: f64 = 1024.0;
    let bytes = meta.size as f64;
    let size = if bytes >= KB * KB {
        format!("{:.1} MB", bytes / (KB * KB))
    } else if bytes >= KB {
        format!("{:.0} KB", bytes / KB)
    } else {
        format!("{} B", meta.size)
    };
    format!("{} ({size})", meta.name)
}
