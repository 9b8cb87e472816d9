//! Read the fixture track and transpose it.

#![cfg(feature = "gpx")]

use gps_transposer::{Calibration, GeoPoint, PixelPoint, Transposer, gpx};

fn fixture() -> String {
    std::fs::read_to_string("tests/data/track.gpx").unwrap()
}

fn calibration() -> Calibration {
    Calibration::new(
        PixelPoint::new(219., 686., None),
        PixelPoint::new(1167., 64., None),
        GeoPoint::new(2.42463, 39.57731, None),
        GeoPoint::new(3.07493, 39.90439, None),
        1000,
    )
    .unwrap()
}

#[test]
fn reads_every_segment() {
    let points = gpx::parse(&fixture()).unwrap();
    assert_eq!(6, points.len());
    assert_eq!(GeoPoint::new(2.42463, 39.57731, Some(12.4)), points[0]);
    assert_eq!(GeoPoint::new(2.58, 39.65, None), points[2]);
    assert_eq!(GeoPoint::new(2.71, 39.72, Some(103.5)), points[3]);
    assert_eq!(GeoPoint::new(3.07493, 39.90439, Some(5.)), points[5]);
}

#[test]
fn lenient_parsing_matches_strict_parsing() {
    assert_eq!(gpx::parse(&fixture()).unwrap(), gpx::parse_lenient(&fixture()));
}

#[test]
fn truncated_document() {
    let fixture = fixture();
    let truncated = fixture.replace("</trkseg>", "");
    assert!(gpx::parse(&truncated).is_err());
    assert!(gpx::parse_lenient(&truncated).is_empty());
    assert!(Transposer::new(calibration()).transpose_gpx(&truncated).is_err());
}

#[test]
fn transpose_document() {
    let points = Transposer::new(calibration()).transpose_gpx(&fixture()).unwrap();
    assert_eq!(PixelPoint::new(1167., 64., Some(5.)), *points.last().unwrap());
    assert_eq!(Some(12.4), points[0].elevation);
    // Fillers inherit the elevation of the point they start from.
    assert_eq!(Some(12.4), points[1].elevation);
}

#[cfg(feature = "serde")]
#[test]
fn transpose_document_to_json() {
    let transposer = Transposer::new(calibration());
    let json = transposer.transpose_gpx_to_json(&fixture()).unwrap();
    let read = gps_transposer::json::from_str(&json).unwrap();
    let points = transposer.transpose_gpx(&fixture()).unwrap();
    assert_eq!(points.len(), read.len());
    for (expected, actual) in points.iter().zip(&read) {
        assert!(expected.distance(actual) < 1e-9);
        assert_eq!(expected.elevation, actual.elevation);
    }
    assert!(json.ends_with(r#"{"x":1167.0,"y":64.0,"elevation":5.0}]"#));
}
