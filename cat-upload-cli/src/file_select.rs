use anyhow::{Context, Result};
use cat_upload_core::UploadFile;
use image::ImageFormat;
use std::fs;
use std::path::Path;

/// Build the upload selection for a local file.
///
/// An explicit content type wins; otherwise it is detected from the
/// extension, and left unset when the extension is not a known image format.
pub fn select_file(path: &Path, content_type: Option<String>) -> Result<UploadFile> {
    let bytes = fs::read(path).context(format!("Failed to read {}", path.display()))?;

    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let content_type = content_type.or_else(|| detect_content_type(path));
    tracing::debug!(
        "Selected {}: {} bytes, content_type={:?}",
        path.display(),
        bytes.len(),
        content_type
    );

    Ok(UploadFile::new(name, content_type, bytes))
}

pub fn detect_content_type(path: &Path) -> Option<String> {
    ImageFormat::from_path(path)
        .ok()
        .map(|format| format.to_mime_type().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detects_common_image_types() {
        assert_eq!(detect_content_type(Path::new("cat.png")).as_deref(), Some("image/png"));
        assert_eq!(detect_content_type(Path::new("cat.JPG")).as_deref(), Some("image/jpeg"));
        assert_eq!(detect_content_type(Path::new("cat.webp")).as_deref(), Some("image/webp"));
    }

    #[test]
    fn unknown_extension_has_no_type() {
        assert_eq!(detect_content_type(Path::new("notes.txt")), None);
        assert_eq!(detect_content_type(Path::new("no_extension")), None);
    }

    #[test]
    fn reads_name_and_bytes() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let file = select_file(&path, None).unwrap();

        assert_eq!(file.name, "Cargo.toml");
        assert_eq!(file.content_type, None);
        assert_eq!(file.effective_content_type(), "application/octet-stream");
        assert_eq!(file.bytes, fs::read(&path).unwrap());
    }

    #[test]
    fn explicit_type_wins() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let file = select_file(&path, Some("image/gif".into())).unwrap();

        assert_eq!(file.effective_content_type(), "image/gif");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = select_file(Path::new("/definitely/not/here.png"), None).unwrap_err();
        assert!(format!("{err:#}").starts_with("Failed to read /definitely/not/here.png"));
    }
}
