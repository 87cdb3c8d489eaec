use std::io::Cursor;

use base64::Engine as _;
use image::{ImageFormat, RgbaImage};

use crate::config::StudioConfig;
use crate::error::StudioResult;
use crate::mode::ArtMode;

/// `<mode>-art-<timestamp>.png`, timestamp in milliseconds since the epoch.
pub fn file_name(mode: ArtMode, timestamp_ms: u64) -> String {
    format!("{}-art-{}.png", mode.slug(), timestamp_ms)
}

pub fn encode_png(image: &RgbaImage) -> StudioResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

pub fn to_data_url(png: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    )
}

/// Where an exported image ended up.
#[derive(Debug, Clone, PartialEq)]
pub enum SavedTo {
    File(std::path::PathBuf),
    /// Handed to the browser as a download with this file name
    Download(String),
}

impl std::fmt::Display for SavedTo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SavedTo::File(path) => write!(f, "{}", path.display()),
            SavedTo::Download(name) => write!(f, "{} (download)", name),
        }
    }
}

/// Write the PNG into the configured export directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_png(file_name: &str, png: &[u8], config: &StudioConfig) -> StudioResult<SavedTo> {
    std::fs::create_dir_all(&config.export_dir)?;
    let path = config.export_dir.join(file_name);
    std::fs::write(&path, png)?;
    log::info!("Exported {} bytes to {}", png.len(), path.display());
    Ok(SavedTo::File(path))
}

/// Offer the PNG as a browser download through a data-URL link.
#[cfg(target_arch = "wasm32")]
pub fn save_png(file_name: &str, png: &[u8], _config: &StudioConfig) -> StudioResult<SavedTo> {
    use crate::error::StudioError;
    use eframe::wasm_bindgen::JsCast as _;

    let js_err = |err: eframe::wasm_bindgen::JsValue| StudioError::Web(format!("{:?}", err));
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| StudioError::Web("no document".to_owned()))?;
    let link = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| StudioError::Web("not an anchor element".to_owned()))?;
    link.set_download(file_name);
    link.set_href(&to_data_url(png));
    link.click();
    log::info!("Offered {} ({} bytes) as a download", file_name, png.len());
    Ok(SavedTo::Download(file_name.to_owned()))
}
