use super::{is_supported_image, LoadError, LoadedPhoto};
use std::path::Path;

/// Load a photo for annotation. Accepts the drag-and-drop extension set
/// (.png/.jpg/.jpeg/.bmp, case-insensitive) and decodes to RGB.
pub fn load<P: AsRef<Path>>(path: P) -> Result<LoadedPhoto, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }
    if !is_supported_image(path) {
        return Err(LoadError::UnsupportedFormat(path.display().to_string()));
    }

    let image = image::open(path)
        .map_err(|e| LoadError::Decode(e.to_string()))?
        .to_rgb8();

    Ok(LoadedPhoto {
        image,
        source: path.to_path_buf(),
    })
}
