// Geodetic coordinate conversion for embedded GPS tags

use serde::{Deserialize, Serialize};

/// A position in decimal degrees, as carried by sidecar JSON.
/// Values are passed through without range validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Degree/minute/second representation required by the embedded-GPS
/// convention. Seconds are a rational scaled to 1/100 s precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SexagesimalAngle {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds_num: u32,
    pub seconds_den: u32,
    pub hemisphere: char,
}

/// Convert a latitude to degrees/minutes/seconds with an 'N'/'S' reference.
pub fn latitude_to_sexagesimal(latitude: f64) -> SexagesimalAngle {
    let hemisphere = if latitude >= 0.0 { 'N' } else { 'S' };
    to_sexagesimal(latitude, hemisphere)
}

/// Convert a longitude to degrees/minutes/seconds with an 'E'/'W' reference.
pub fn longitude_to_sexagesimal(longitude: f64) -> SexagesimalAngle {
    let hemisphere = if longitude >= 0.0 { 'E' } else { 'W' };
    to_sexagesimal(longitude, hemisphere)
}

fn to_sexagesimal(value: f64, hemisphere: char) -> SexagesimalAngle {
    let value = value.abs();
    let degrees = value.trunc();
    let minutes = ((value - degrees) * 60.0).trunc();
    let seconds = (value - degrees - minutes / 60.0) * 3600.0;

    SexagesimalAngle {
        degrees: degrees as u32,
        minutes: minutes as u32,
        seconds_num: (seconds * 100.0).round() as u32,
        seconds_den: 100,
        hemisphere,
    }
}
