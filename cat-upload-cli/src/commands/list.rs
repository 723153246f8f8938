use cat_upload_core::GalleryClient;

use crate::terminal::TerminalSurface;

pub async fn execute(client: &GalleryClient<TerminalSurface>) {
    tracing::info!("Listing images from {}", client.config().api_base_url());
    client.load_images().await;
}
