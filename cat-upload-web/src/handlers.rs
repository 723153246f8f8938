use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::Html,
};
use cat_upload_core::{SurfaceSnapshot, Tile, UploadFile};

use crate::state::AppState;

/// Gallery page
pub async fn index(State(state): State<AppState>) -> Html<String> {
    tracing::info!("Gallery page request");

    let client = state.client();
    client.load_images().await;

    Html(generate_page_html(&client.surface().snapshot()))
}

/// Upload form submission
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, StatusCode> {
    let file = read_selection(&mut multipart).await.map_err(|e| {
        tracing::error!("Failed to read upload form: {:?}", e);
        StatusCode::BAD_REQUEST
    })?;

    tracing::info!(
        "Upload form request: file={}",
        file.as_ref().map_or("<none>", |file| file.name.as_str())
    );

    let client = state.client();
    client.submit_upload(file).await;

    Ok(Html(generate_page_html(&client.surface().snapshot())))
}

/// The `file` field, or `None` when the form was sent without a selection.
async fn read_selection(multipart: &mut Multipart) -> Result<Option<UploadFile>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let name = field.file_name().unwrap_or_default().to_string();
        if name.is_empty() {
            return Ok(None);
        }

        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        return Ok(Some(UploadFile::new(name, content_type, bytes.to_vec())));
    }

    Ok(None)
}

fn generate_page_html(snapshot: &SurfaceSnapshot) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Cat Upload</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            max-width: 960px;
            margin: 40px auto;
            padding: 0 20px;
            color: #333;
        }}

        .controls {{
            display: flex;
            gap: 10px;
            align-items: center;
            margin-bottom: 10px;
        }}

        .status {{
            color: #666;
        }}

        .status.ok {{
            color: #2e7d32;
        }}

        .status.err {{
            color: #c62828;
        }}

        #gallery {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
            gap: 12px;
        }}

        .tile {{
            background: #f5f5f5;
            border-radius: 4px;
            padding: 8px;
            text-align: center;
        }}

        .tile img {{
            width: 100%;
            height: 180px;
            object-fit: cover;
            border-radius: 4px;
        }}
    </style>
</head>
<body>
    <h1>Cat Upload</h1>

    <div class="controls">
        <form id="uploadForm" method="post" action="/upload" enctype="multipart/form-data">
            <input id="fileInput" type="file" name="file" accept="image/*">
            <button type="submit">Upload</button>
        </form>
        <a id="refreshBtn" href="/">Refresh</a>
    </div>

    <p id="status" class="status {status_kind}">{status_text}</p>

    <div id="gallery">
        {tiles}
    </div>
</body>
</html>"#,
        status_kind = snapshot.status.kind.as_str(),
        status_text = html_escape(&snapshot.status.text),
        tiles = generate_tiles_html(&snapshot.tiles),
    )
}

fn generate_tiles_html(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|tile| match tile {
            Tile::Image { src, alt } => format!(
                r#"<div class="tile"><img alt="{alt}" src="{src}" loading="lazy"></div>"#,
                alt = html_escape(alt),
                src = html_escape(src),
            ),
            Tile::Placeholder { text } => {
                format!(r#"<div class="tile">{}</div>"#, html_escape(text))
            }
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
