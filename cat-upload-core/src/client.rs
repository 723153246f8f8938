use reqwest::header::CONTENT_TYPE;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::model::{
    ErrorBody, Listing, StatusKind, StatusMessage, Tile, UploadFile, UploadResponse,
    EMPTY_GALLERY_TEXT,
};
use crate::surface::GallerySurface;

const LOADING: &str = "Loading images…";
const NO_IMAGES: &str = "No images found.";
const NO_FILE: &str = "Pick an image first.";
const REQUESTING_URL: &str = "Requesting upload URL…";
const UPLOADING: &str = "Uploading to S3…";
const UPLOAD_COMPLETE: &str = "Upload complete. Refreshing gallery…";

/// Lists the gallery and uploads images through a presigned URL, rendering
/// into a [`GallerySurface`].
///
/// Neither operation returns an error: every failure ends up as an `err`
/// status on the surface.
#[derive(Clone)]
pub struct GalleryClient<S> {
    http: reqwest::Client,
    config: ClientConfig,
    surface: S,
}

impl<S: GallerySurface> GalleryClient<S> {
    pub fn new(config: ClientConfig, surface: S) -> Self {
        Self::with_http(reqwest::Client::new(), config, surface)
    }

    /// Reuse an existing connection pool.
    pub fn with_http(http: reqwest::Client, config: ClientConfig, surface: S) -> Self {
        Self {
            http,
            config,
            surface,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Replace the displayed tiles with the backend's current listing.
    pub async fn load_images(&self) {
        self.surface.clear_tiles();
        self.set_status(StatusMessage::info(LOADING));

        if let Err(e) = self.render_listing().await {
            self.set_status(StatusMessage::err(format!("Failed to load images: {e}")));
        }
    }

    /// Request an upload URL, PUT the file to it, then reload the gallery.
    pub async fn submit_upload(&self, file: Option<UploadFile>) {
        let Some(file) = file else {
            self.set_status(StatusMessage::err(NO_FILE));
            return;
        };

        tracing::info!(
            "Uploading {} ({} bytes, {})",
            file.name,
            file.bytes.len(),
            file.effective_content_type()
        );

        if let Err(e) = self.upload(file).await {
            self.set_status(StatusMessage::err(e.to_string()));
        }
    }

    async fn render_listing(&self) -> Result<()> {
        let url = self.config.api_base_url();
        tracing::debug!("Listing GET: url={}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Listing returned {}, parsing body anyway", status);
        }

        let body = response.bytes().await?;
        let listing = Listing::from_json(&body)?;

        if listing.images.is_empty() {
            self.surface.push_tile(Tile::Placeholder {
                text: EMPTY_GALLERY_TEXT.to_string(),
            });
            self.set_status(StatusMessage::ok(NO_IMAGES));
            return Ok(());
        }

        for entry in &listing.images {
            self.surface.push_tile(Tile::from(entry));
        }

        tracing::info!("Listing success: {} image(s)", listing.images.len());
        self.set_status(StatusMessage::ok(format!(
            "Loaded {} image(s).",
            listing.images.len()
        )));
        Ok(())
    }

    async fn upload(&self, file: UploadFile) -> Result<()> {
        self.set_status(StatusMessage::info(REQUESTING_URL));
        let upload_url = self.request_upload_url(&file).await?;

        self.set_status(StatusMessage::info(UPLOADING));
        self.put_object(&upload_url, file).await?;

        self.set_status(StatusMessage::ok(UPLOAD_COMPLETE));
        self.surface.clear_selection();
        self.load_images().await;
        Ok(())
    }

    async fn request_upload_url(&self, file: &UploadFile) -> Result<String> {
        let url = self.config.api_base_url();
        let request = file.upload_request();
        tracing::debug!(
            "Upload URL POST: url={}, filename={}, content_type={}",
            url,
            request.filename,
            request.content_type
        );

        let response = self.http.post(url).json(&request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .bytes()
                .await
                .map(|bytes| ErrorBody::from_json_lossy(&bytes))
                .unwrap_or_default();

            return Err(match body.error {
                Some(message) => ClientError::Backend(message),
                None => ClientError::BackendStatus(status.as_u16()),
            });
        }

        let body = response.bytes().await?;
        UploadResponse::from_json(&body)?
            .upload_url
            .ok_or(ClientError::MissingUploadUrl)
    }

    async fn put_object(&self, upload_url: &str, file: UploadFile) -> Result<()> {
        let content_type = file.effective_content_type().to_string();
        tracing::debug!(
            "Storage PUT: size={} bytes, content_type={}",
            file.bytes.len(),
            content_type
        );

        let response = self
            .http
            .put(upload_url)
            .header(CONTENT_TYPE, content_type)
            .body(file.bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::StorageStatus(status.as_u16()));
        }

        tracing::debug!("Storage PUT success: status={}", status);
        Ok(())
    }

    fn set_status(&self, status: StatusMessage) {
        match status.kind {
            StatusKind::Err => tracing::warn!("{}", status.text),
            StatusKind::Ok => tracing::info!("{}", status.text),
            StatusKind::Info => tracing::debug!("{}", status.text),
        }
        self.surface.set_status(status);
    }
}
