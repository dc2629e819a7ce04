use exif_facts::MetadataView;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Tags as an EXIF decoder would hand them over.
    let exif = json!({
        "Make": "Canon",
        "Model": "EOS R5",
        "CameraOwnerName": "Jane Doe",
        "GPSLatitudeRef": "N",
        "GPSLatitude": ["52/1", "22/1", "3036/100"],
        "GPSLongitudeRef": "E",
        "GPSLongitude": ["4/1", "53/1", "5795/100"],
        "DateTimeOriginal": "2023:01:05 14:30:00",
        "MimeType": "image/jpeg"
    });

    let view = MetadataView::builder()
        .tags(exif)
        .date_format("%B %-d, %Y")
        .build();
    let summary = view.summary()?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
