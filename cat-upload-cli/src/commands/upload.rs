use cat_upload_core::{GalleryClient, GallerySurface, StatusMessage};
use std::path::PathBuf;

use crate::file_select::select_file;
use crate::terminal::TerminalSurface;

pub async fn execute(
    client: &GalleryClient<TerminalSurface>,
    path: Option<PathBuf>,
    content_type: Option<String>,
) {
    let file = match path {
        Some(path) => match select_file(&path, content_type) {
            Ok(file) => Some(file),
            Err(e) => {
                let message = format!("{e:#}");
                tracing::warn!("{}", message);
                client.surface().set_status(StatusMessage::err(message));
                return;
            }
        },
        None => None,
    };

    client.submit_upload(file).await;
}
