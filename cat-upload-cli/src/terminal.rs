use cat_upload_core::{
    GallerySurface, MemorySurface, StatusKind, StatusMessage, SurfaceSnapshot, Tile,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Terminal rendition of the gallery page.
///
/// `info` statuses ride a spinner on stderr; `ok`/`err` statuses are printed
/// as they happen. Tiles are kept in memory and printed by [`render_tiles`].
pub struct TerminalSurface {
    display: MemorySurface,
    spinner: ProgressBar,
}

impl TerminalSurface {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("Invalid spinner template"),
        );

        Self {
            display: MemorySurface::new(),
            spinner,
        }
    }

    /// Stop the spinner and hand back the final display.
    pub fn finish(&self) -> SurfaceSnapshot {
        self.spinner.finish_and_clear();
        self.display.snapshot()
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl GallerySurface for TerminalSurface {
    fn clear_tiles(&self) {
        self.display.clear_tiles();
    }

    fn push_tile(&self, tile: Tile) {
        self.display.push_tile(tile);
    }

    fn set_status(&self, status: StatusMessage) {
        match status.kind {
            StatusKind::Info => {
                self.spinner.set_message(status.text.clone());
                self.spinner.enable_steady_tick(Duration::from_millis(100));
            }
            StatusKind::Ok | StatusKind::Err => {
                let line = format_status(&status);
                self.spinner.disable_steady_tick();
                self.spinner.set_message("");
                self.spinner.suspend(|| eprintln!("{line}"));
            }
        }
        self.display.set_status(status);
    }

    fn clear_selection(&self) {
        self.display.clear_selection();
    }
}

pub fn format_status(status: &StatusMessage) -> String {
    match status.kind {
        StatusKind::Info => format!("… {}", status.text),
        StatusKind::Ok => format!("✓ {}", status.text),
        StatusKind::Err => format!("✗ {}", status.text),
    }
}

/// One line per tile: `alt<TAB>src` for images, the text for placeholders.
pub fn render_tiles(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|tile| match tile {
            Tile::Image { src, alt } => format!("{alt}\t{src}"),
            Tile::Placeholder { text } => text.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
