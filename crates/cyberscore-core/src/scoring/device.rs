//! Device/network score.

use super::compute_score;
use super::weights::{
    BIOMETRIC_NOT_ENROLLED, CAMERA_PERMISSION_GRANTED, DEVICE_ROOTED, LOCATION_PERMISSION_GRANTED,
    NOT_ON_WIFI,
};
use crate::types::{DeviceObservations, Observation, ScoreResult, SignalSet};

/// Build the device signal set in evaluation order.
#[must_use]
pub fn device_signals(obs: &DeviceObservations) -> SignalSet {
    // Both "no hardware" and "hardware but nothing enrolled" count as not enrolled
    let biometric_missing = obs.biometric.map(|b| !b.is_enrolled());

    SignalSet::new()
        .with(
            NOT_ON_WIFI,
            Observation::from_flag(obs.network.map(|n| !n.is_wifi())),
        )
        .with(DEVICE_ROOTED, Observation::from_flag(obs.rooted))
        .with(BIOMETRIC_NOT_ENROLLED, Observation::from_flag(biometric_missing))
        .with(
            CAMERA_PERMISSION_GRANTED,
            Observation::from_flag(obs.camera_granted),
        )
        .with(
            LOCATION_PERMISSION_GRANTED,
            Observation::from_flag(obs.location_granted),
        )
}

/// Score the device and its network connection.
#[must_use]
pub fn score_device(obs: &DeviceObservations) -> ScoreResult {
    compute_score(&device_signals(obs))
}
