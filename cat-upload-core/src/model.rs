use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";
pub const FALLBACK_ALT: &str = "cat";
pub const EMPTY_GALLERY_TEXT: &str = "No cats yet.";

/// One entry of the backend's image listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageEntry {
    PlainUrl(String),
    KeyedUrl { url: String, key: Option<String> },
}

impl ImageEntry {
    /// Returns `None` for entries without a usable URL.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(url) if !url.is_empty() => Some(Self::PlainUrl(url.clone())),
            Value::Object(fields) => {
                let url = fields.get("url")?.as_str().filter(|url| !url.is_empty())?;
                let key = fields.get("key").and_then(Value::as_str).map(str::to_string);

                Some(Self::KeyedUrl {
                    url: url.to_string(),
                    key,
                })
            }
            _ => None,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::PlainUrl(url) | Self::KeyedUrl { url, .. } => url,
        }
    }

    pub fn alt(&self) -> &str {
        match self {
            Self::KeyedUrl { key: Some(key), .. } => key,
            _ => FALLBACK_ALT,
        }
    }
}

/// Parsed `{ images: [...] }` listing body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub images: Vec<ImageEntry>,
}

impl Listing {
    /// Anything other than an object with an `images` array is an empty listing.
    pub fn from_value(body: &Value) -> Self {
        let images = body
            .get("images")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(ImageEntry::from_value).collect())
            .unwrap_or_default();

        Self { images }
    }

    pub fn from_json(json: &[u8]) -> serde_json::Result<Self> {
        let body: Value = serde_json::from_slice(json)?;
        Ok(Self::from_value(&body))
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub filename: String,
    pub content_type: String,
}

/// Success body of the upload-URL request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadResponse {
    pub upload_url: Option<String>,
}

impl UploadResponse {
    /// A missing, null, non-string or empty `uploadUrl` counts as absent.
    pub fn from_value(body: &Value) -> Self {
        Self {
            upload_url: non_empty_str(body, "uploadUrl"),
        }
    }

    pub fn from_json(json: &[u8]) -> serde_json::Result<Self> {
        let body: Value = serde_json::from_slice(json)?;
        Ok(Self::from_value(&body))
    }
}

/// Error payload the backend may attach to a non-success response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: Option<String>,
}

impl ErrorBody {
    /// Unparseable bodies read as an empty payload.
    pub fn from_json_lossy(json: &[u8]) -> Self {
        serde_json::from_slice::<Value>(json)
            .map(|body| Self {
                error: non_empty_str(&body, "error"),
            })
            .unwrap_or_default()
    }
}

fn non_empty_str(body: &Value, field: &str) -> Option<String> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// A file the user picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type,
            bytes,
        }
    }

    pub fn effective_content_type(&self) -> &str {
        self.content_type
            .as_deref()
            .filter(|content_type| !content_type.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    pub fn upload_request(&self) -> UploadRequest {
        UploadRequest {
            filename: self.name.clone(),
            content_type: self.effective_content_type().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tile {
    Image { src: String, alt: String },
    Placeholder { text: String },
}

impl From<&ImageEntry> for Tile {
    fn from(entry: &ImageEntry) -> Self {
        Self::Image {
            src: entry.url().to_string(),
            alt: entry.alt().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusKind {
    #[default]
    Info,
    Ok,
    Err,
}

impl StatusKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Ok => "ok",
            Self::Err => "err",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self::with_kind(text, StatusKind::Info)
    }

    pub fn ok(text: impl Into<String>) -> Self {
        Self::with_kind(text, StatusKind::Ok)
    }

    pub fn err(text: impl Into<String>) -> Self {
        Self::with_kind(text, StatusKind::Err)
    }

    fn with_kind(text: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_plain_and_keyed_entries() {
        assert_eq!(
            ImageEntry::from_value(&json!("https://x/a.jpg")),
            Some(ImageEntry::PlainUrl("https://x/a.jpg".into()))
        );
        assert_eq!(
            ImageEntry::from_value(&json!({"url": "https://x/c.jpg", "key": "c"})),
            Some(ImageEntry::KeyedUrl {
                url: "https://x/c.jpg".into(),
                key: Some("c".into()),
            })
        );
    }

    #[test]
    fn rejects_entries_without_url() {
        for value in [
            json!({"key": "b"}),
            json!({"url": ""}),
            json!({"url": 42}),
            json!(""),
            json!(null),
            json!(7),
            json!(["https://x/a.jpg"]),
        ] {
            assert_eq!(ImageEntry::from_value(&value), None, "{value}");
        }
    }

    #[test]
    fn alt_falls_back_to_cat() {
        let plain = ImageEntry::PlainUrl("https://x/a.jpg".into());
        let unkeyed = ImageEntry::from_value(&json!({"url": "https://x/b.jpg", "key": 3})).unwrap();
        let keyed = ImageEntry::from_value(&json!({"url": "https://x/c.jpg", "key": "images/c.jpg"})).unwrap();

        assert_eq!(plain.alt(), "cat");
        assert_eq!(unkeyed.alt(), "cat");
        assert_eq!(keyed.alt(), "images/c.jpg");
    }

    #[test]
    fn listing_without_images_array_is_empty() {
        for body in [json!({}), json!({"images": "nope"}), json!({"images": null}), json!([]), json!(null)] {
            assert!(Listing::from_value(&body).images.is_empty(), "{body}");
        }
    }

    #[test]
    fn listing_keeps_encounter_order() {
        let listing = Listing::from_json(
            br#"{"images":["https://x/a.jpg",{"key":"b"},{"url":"https://x/c.jpg","key":"c"}]}"#,
        )
        .unwrap();

        let urls: Vec<_> = listing.images.iter().map(ImageEntry::url).collect();
        assert_eq!(urls, ["https://x/a.jpg", "https://x/c.jpg"]);
    }

    #[test]
    fn upload_request_serializes_camel_case() {
        let file = UploadFile::new("cat.png", Some("image/png".into()), vec![1, 2, 3]);
        let body = serde_json::to_value(file.upload_request()).unwrap();

        assert_eq!(body, json!({"filename": "cat.png", "contentType": "image/png"}));
    }

    #[test]
    fn content_type_defaults_to_octet_stream() {
        let unknown = UploadFile::new("blob", None, Vec::new());
        let empty = UploadFile::new("blob", Some(String::new()), Vec::new());

        assert_eq!(unknown.effective_content_type(), DEFAULT_CONTENT_TYPE);
        assert_eq!(empty.effective_content_type(), DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn upload_response_requires_non_empty_string() {
        let parse = |json: &str| UploadResponse::from_json(json.as_bytes()).unwrap().upload_url;

        assert_eq!(parse(r#"{"uploadUrl":"https://s/put"}"#).as_deref(), Some("https://s/put"));
        assert_eq!(parse(r#"{"uploadUrl":""}"#), None);
        assert_eq!(parse(r#"{"uploadUrl":null}"#), None);
        assert_eq!(parse(r#"{"key":"images/x.jpg"}"#), None);
        assert_eq!(parse(r#""https://s/put""#), None);
        assert!(UploadResponse::from_json(b"<html>").is_err());
    }

    #[test]
    fn error_body_is_lossy() {
        let parse = |json: &str| ErrorBody::from_json_lossy(json.as_bytes()).error;

        assert_eq!(parse(r#"{"error":"quota exceeded"}"#).as_deref(), Some("quota exceeded"));
        assert_eq!(parse(r#"{"error":""}"#), None);
        assert_eq!(parse("{}"), None);
        assert_eq!(parse("Internal Server Error"), None);
    }
}
