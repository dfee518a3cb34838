//! Playback speed preference

use super::SettingsStore;
use crate::error::{Error, Result};
use serde_json::Value;
use tracing::warn;

pub const SPEED_KEY: &str = "playback_speed";

pub const DEFAULT_SPEED: f64 = 1.0;

/// Speeds offered by the player, slowest first
pub const SPEED_OPTIONS: [f64; 6] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

pub fn is_valid_speed(speed: f64) -> bool {
    SPEED_OPTIONS
        .iter()
        .any(|option| (option - speed).abs() < f64::EPSILON)
}

/// Saved speed, or [`DEFAULT_SPEED`]
pub fn load_speed(store: &dyn SettingsStore) -> f64 {
    match store.get(SPEED_KEY).as_ref().and_then(Value::as_f64) {
        Some(speed) if is_valid_speed(speed) => speed,
        Some(speed) => {
            warn!("Ignoring unsupported saved speed {}", speed);
            DEFAULT_SPEED
        }
        None => DEFAULT_SPEED,
    }
}

pub fn save_speed(store: &mut dyn SettingsStore, speed: f64) -> Result<()> {
    if !is_valid_speed(speed) {
        return Err(Error::settings(format!(
            "unsupported playback speed {}",
            speed
        )));
    }
    store.set(SPEED_KEY, Value::from(speed))
}

/// Next faster option, staying at the fastest
pub fn faster(speed: f64) -> f64 {
    SPEED_OPTIONS
        .iter()
        .copied()
        .find(|&option| option > speed + f64::EPSILON)
        .unwrap_or(SPEED_OPTIONS[SPEED_OPTIONS.len() - 1])
}

/// Next slower option, staying at the slowest
pub fn slower(speed: f64) -> f64 {
    SPEED_OPTIONS
        .iter()
        .rev()
        .copied()
        .find(|&option| option < speed - f64::EPSILON)
        .unwrap_or(SPEED_OPTIONS[0])
}
