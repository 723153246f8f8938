use cat_upload_core::{ClientConfig, GalleryClient, MemorySurface};

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: ClientConfig,
}

impl AppState {
    pub fn new(api_base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: ClientConfig::new(api_base_url),
        }
    }

    /// Each page render gets its own display, sharing the connection pool.
    pub fn client(&self) -> GalleryClient<MemorySurface> {
        GalleryClient::with_http(self.http.clone(), self.config.clone(), MemorySurface::new())
    }
}
