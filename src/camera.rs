use crate::metadata_view::MetadataView;
use crate::tags::{CAMERA, LOCALIZED_CAMERA_MODEL, MAKE, MODEL, UNIQUE_CAMERA_MODEL};

/// Camera name tags, most specific first.
pub const CAMERA_NAME_TAGS: [&str; 3] = [LOCALIZED_CAMERA_MODEL, UNIQUE_CAMERA_MODEL, CAMERA];

/// Resolves a display name for the camera.
///
/// Manufacturers fill different subsets of the name tags, so the explicit model names in
/// [`CAMERA_NAME_TAGS`] win over the generic `Make` + `Model` pair.
pub fn resolve_camera(view: &MetadataView) -> Option<String> {
    for tag in CAMERA_NAME_TAGS {
        if let Some(name) = view.get_str(tag) {
            log::trace!("camera resolved from {tag}");
            return Some(name.into_owned());
        }
    }

    let make = view.get_str(MAKE).unwrap_or_default();
    let model = view.get_str(MODEL).unwrap_or_default();
    let combined = format!("{make} {model}");
    let combined = combined.trim();
    if combined.is_empty() {
        return None;
    }

    log::trace!("camera resolved from {MAKE} and {MODEL}");
    Some(combined.to_string())
}
