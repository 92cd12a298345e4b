//! Qibla bearing: initial great-circle bearing toward the Kaaba.

use crate::types::Coordinate;

const KAABA_LATITUDE: f64 = 21.4224779;
const KAABA_LONGITUDE: f64 = 39.8251832;

/// Initial bearing from `coordinate` to the Kaaba, in degrees clockwise
/// from true north, normalized to [0, 360).
pub fn qibla(coordinate: Coordinate) -> f64 {
    let lat1 = coordinate.latitude.to_radians();
    let lng1 = coordinate.longitude.to_radians();
    let lat2 = KAABA_LATITUDE.to_radians();
    let lng2 = KAABA_LONGITUDE.to_radians();

    let dlng = lng2 - lng1;
    let y = dlng.sin();
    let x = lat1.cos() * lat2.tan() - lat1.sin() * dlng.cos();

    crate::solar::normalize_angle(y.atan2(x).to_degrees())
}
