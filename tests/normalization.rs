use exif_facts::{ExifFactsError, GpsError, MetadataView, RationalError, TimeError};
use serde_json::{Value, json};

fn gps(lat_ref: &str, lat: Value, lon_ref: &str, lon: Value) -> MetadataView {
    MetadataView::from(json!({
        "GPSLatitudeRef": lat_ref,
        "GPSLatitude": lat,
        "GPSLongitudeRef": lon_ref,
        "GPSLongitude": lon,
    }))
}

#[test]
fn location_requires_all_four_gps_tags() {
    let partials = [
        json!({}),
        json!({ "GPSLatitudeRef": "N", "GPSLatitude": ["10/1", "30/1", "0/1"] }),
        json!({
            "GPSLatitudeRef": "N",
            "GPSLatitude": ["10/1", "30/1", "0/1"],
            "GPSLongitudeRef": "E"
        }),
        json!({
            "GPSLatitude": ["10/1", "30/1", "0/1"],
            "GPSLongitudeRef": "E",
            "GPSLongitude": ["1/1", "0/1", "0/1"]
        }),
    ];
    for exif in partials {
        assert_eq!(MetadataView::from(exif.clone()).location(), Ok(None), "{exif}");
    }
}

#[test]
fn northern_latitude_is_positive() {
    let view = gps("N", json!(["10/1", "30/1", "0/1"]), "E", json!(["1/1", "0/1", "0/1"]));
    let location = view.location().unwrap().unwrap();
    assert_eq!(location.latitude, 10.5);
    assert_eq!(location.longitude, 1.0);
}

#[test]
fn southern_latitude_is_negative() {
    let view = gps("S", json!(["10/1", "30/1", "0/1"]), "E", json!(["1/1", "0/1", "0/1"]));
    assert_eq!(view.location().unwrap().unwrap().latitude, -10.5);
}

#[test]
fn western_longitude_is_negative() {
    let view = gps("N", json!(["10/1", "30/1", "0/1"]), "W", json!(["1/1", "0/1", "0/1"]));
    assert_eq!(view.location().unwrap().unwrap().longitude, -1.0);
}

#[test]
fn unknown_reference_stays_positive() {
    let view = gps("X", json!(["10/1", "30/1", "0/1"]), "?", json!(["1/1", "0/1", "0/1"]));
    let location = view.location().unwrap().unwrap();
    assert_eq!(location.latitude, 10.5);
    assert_eq!(location.longitude, 1.0);
}

#[test]
fn hemisphere_letters_match_exactly() {
    let view = gps("s", json!(["10/1", "30/1", "0/1"]), " W ", json!(["1/1", "0/1", "0/1"]));
    let location = view.location().unwrap().unwrap();
    assert_eq!(location.latitude, 10.5);
    assert_eq!(location.longitude, 1.0);
}

#[test]
fn malformed_component_fails_location() {
    let view = gps("N", json!(["ten", "30/1", "0/1"]), "E", json!(["1/1", "0/1", "0/1"]));
    assert_eq!(
        view.location(),
        Err(GpsError::InvalidComponent {
            tag: "GPSLatitude".to_string(),
            source: RationalError::Malformed("ten".to_string()),
        })
    );
}

#[test]
fn camera_name_tag_beats_make_and_model() {
    let view = MetadataView::from(json!({
        "UniqueCameraModel": "UniqueModelX",
        "Make": "Acme",
        "Model": "9000"
    }));
    assert_eq!(view.camera().as_deref(), Some("UniqueModelX"));
}

#[test]
fn camera_falls_back_to_make_and_model() {
    let view = MetadataView::from(json!({ "Make": "Acme", "Model": "9000" }));
    assert_eq!(view.camera().as_deref(), Some("Acme 9000"));
}

#[test]
fn camera_absent_without_any_tag() {
    let view = MetadataView::from(json!({
        "LocalizedCameraModel": "",
        "Make": "",
        "Model": null
    }));
    assert!(view.camera().is_none());
}

#[test]
fn created_renders_calendar_date() {
    let view = MetadataView::from(json!({ "DateTimeOriginal": "2023:01:05 14:30:00" }));
    assert_eq!(view.created(), Ok(Some("Jan 5, 2023".to_string())));
}

#[test]
fn created_fails_loudly_on_wrong_separators() {
    let view = MetadataView::from(json!({ "DateTimeOriginal": "2023-01-05" }));
    assert_eq!(
        view.created(),
        Err(TimeError::MalformedDateTime {
            tag: "DateTimeOriginal".to_string(),
            value: "2023-01-05".to_string(),
        })
    );
}

#[test]
fn created_rejects_loosely_shaped_datetimes() {
    for bad in [
        "2023:01:0514:30:00",
        "2023: 1: 5 14:30:00",
        "2023:01:05   14:30:00",
        "2023:1:5 1:2:3",
    ] {
        let view = MetadataView::from(json!({ "DateTimeOriginal": bad }));
        assert_eq!(
            view.created(),
            Err(TimeError::MalformedDateTime {
                tag: "DateTimeOriginal".to_string(),
                value: bad.to_string(),
            }),
            "{bad:?} should not parse"
        );
    }
}

#[test]
fn passthrough_tags_are_untouched() {
    let view = MetadataView::from(json!({
        "CameraOwnerName": "Jane Doe",
        "Artist": "© Jane Doe 2023",
        "MimeType": "image/x-canon-cr2"
    }));
    assert_eq!(view.owner().as_deref(), Some("Jane Doe"));
    assert_eq!(view.artist().as_deref(), Some("© Jane Doe 2023"));
    assert_eq!(view.mimetype().as_deref(), Some("image/x-canon-cr2"));

    let view = MetadataView::from(json!({ "CameraOwnerName": " " }));
    assert_eq!(view.owner().as_deref(), Some(" "));

    let view = MetadataView::from(json!({}));
    assert_eq!((view.owner(), view.artist(), view.mimetype()), (None, None, None));
}

#[test]
fn summary_reports_gps_errors() {
    let view = gps("N", json!(["10/1", "30/1"]), "E", json!(["1/1", "0/1", "0/1"]));
    assert_eq!(
        view.summary(),
        Err(ExifFactsError::Gps(GpsError::WrongComponentCount {
            tag: "GPSLatitude".to_string(),
            found: 2,
        }))
    );
}

#[test]
fn views_can_be_shared_across_threads() {
    let view = std::sync::Arc::new(MetadataView::from(json!({ "Make": "Acme", "Model": "9000" })));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let view = std::sync::Arc::clone(&view);
            std::thread::spawn(move || view.camera())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("Acme 9000"));
    }
}
