/// Client configuration, built once at startup and passed into the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: String,
}

impl ClientConfig {
    /// Trailing slashes are stripped; an empty value is accepted as-is.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let raw = api_base_url.into();
        let api_base_url = raw.trim_end_matches('/').to_string();

        Self { api_base_url }
    }

    /// Endpoint used for both the listing GET and the upload-URL POST.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}
