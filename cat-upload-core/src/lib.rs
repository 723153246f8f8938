pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod surface;

pub use client::GalleryClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use model::{ImageEntry, StatusKind, StatusMessage, Tile, UploadFile};
pub use surface::{GallerySurface, MemorySurface, SurfaceSnapshot};
