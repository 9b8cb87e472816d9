//! Read track points from [GPX](https://www.topografix.com/gpx.asp) documents.
//!
//! Only track points are read: every `trkpt` inside a `trkseg` inside a `trk`, across all tracks
//! and segments, in document order. Waypoints and route points are ignored, as are namespace
//! prefixes.
//!
//! ```
//! let xml = r#"<?xml version="1.0"?>
//! <gpx xmlns="http://www.topografix.com/GPX/1/1" version="1.1">
//!   <trk><trkseg>
//!     <trkpt lat="39.57731" lon="2.42463"><ele>12.5</ele></trkpt>
//!     <trkpt lat="39.58" lon="2.43"/>
//!   </trkseg></trk>
//! </gpx>"#;
//! let points = gps_transposer::gpx::parse(xml).unwrap();
//! assert_eq!(2, points.len());
//! assert_eq!(Some(12.5), points[0].elevation);
//! assert_eq!(None, points[1].elevation);
//! ```

use crate::{Error, GeoPoint, Result};
use log::{Level, log};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

/// Parses the track points of a GPX document.
///
/// Returns an error if the document is not well-formed xml, its root is not `gpx`, or a track
/// point has a missing or unparseable coordinate or elevation. A missing or empty `ele` element is
/// not an error; the point just has no elevation.
pub fn parse(xml: &str) -> Result<Vec<GeoPoint>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut points = Vec::new();
    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut pending: Option<GeoPoint> = None;
    let mut seen_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = start.local_name().as_ref().to_vec();
                if !seen_root {
                    check_root(&name)?;
                    seen_root = true;
                }
                path.push(name);
                if in_track_point(&path) {
                    pending = Some(track_point(&start)?);
                }
            }
            Event::Empty(start) => {
                let name = start.local_name().as_ref().to_vec();
                if !seen_root {
                    check_root(&name)?;
                    seen_root = true;
                }
                path.push(name);
                if in_track_point(&path) {
                    points.push(track_point(&start)?);
                }
                let _ = path.pop();
            }
            Event::Text(text) => {
                if in_elevation(&path) {
                    let text = text.unescape().map_err(quick_xml::Error::from)?;
                    if let Some(point) = pending.as_mut() {
                        point.elevation = parse_elevation(&text)?;
                    }
                }
            }
            Event::CData(data) => {
                if in_elevation(&path) {
                    if let Some(point) = pending.as_mut() {
                        point.elevation = parse_elevation(&String::from_utf8_lossy(&data))?;
                    }
                }
            }
            Event::End(_) => {
                if in_track_point(&path) {
                    if let Some(point) = pending.take() {
                        points.push(point);
                    }
                }
                let _ = path.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(Error::UnexpectedRoot(String::new()));
    }
    Ok(points)
}

/// Parses the track points of a GPX document, returning an empty track on failure.
///
/// The failure is logged as a warning.
///
/// # Examples
///
/// ```
/// assert!(gps_transposer::gpx::parse_lenient("not a gpx document").is_empty());
/// ```
pub fn parse_lenient(xml: &str) -> Vec<GeoPoint> {
    match parse(xml) {
        Ok(points) => points,
        Err(err) => {
            log!(Level::Warn, "unable to parse gpx document, using an empty track: {}", err);
            Vec::new()
        }
    }
}

fn check_root(name: &[u8]) -> Result<()> {
    if name == b"gpx" {
        Ok(())
    } else {
        Err(Error::UnexpectedRoot(
            String::from_utf8_lossy(name).into_owned(),
        ))
    }
}

fn in_track_point(path: &[Vec<u8>]) -> bool {
    matches!(
        path,
        [root, trk, trkseg, trkpt]
            if root == b"gpx" && trk == b"trk" && trkseg == b"trkseg" && trkpt == b"trkpt"
    )
}

fn in_elevation(path: &[Vec<u8>]) -> bool {
    match path.split_last() {
        Some((ele, parent)) => ele == b"ele" && in_track_point(parent),
        None => false,
    }
}

fn track_point(start: &BytesStart<'_>) -> Result<GeoPoint> {
    let mut latitude = None;
    let mut longitude = None;
    for attribute in start.attributes() {
        let attribute = attribute.map_err(quick_xml::Error::from)?;
        match attribute.key.local_name().as_ref() {
            b"lat" => latitude = Some(parse_coordinate("lat", &attribute.unescape_value()?)?),
            b"lon" => longitude = Some(parse_coordinate("lon", &attribute.unescape_value()?)?),
            _ => {}
        }
    }
    Ok(GeoPoint {
        longitude: longitude.ok_or(Error::MissingAttribute("lon"))?,
        latitude: latitude.ok_or(Error::MissingAttribute("lat"))?,
        elevation: None,
    })
}

fn parse_coordinate(field: &'static str, value: &str) -> Result<f64> {
    let value = value.trim();
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(Error::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}

fn parse_elevation(value: &str) -> Result<Option<f64>> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        parse_coordinate("ele", value).map(Some)
    }
}
