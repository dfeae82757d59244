// --- File: config.rs ---
use crate::color::ColorScale;
use crate::constants::*;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_CELL_SIZE: &str = "CHROMALIFE_CELL_SIZE";
pub const ENV_LIFE_PROBABILITY: &str = "CHROMALIFE_LIFE_PROBABILITY";
pub const ENV_FRAME_RATE: &str = "CHROMALIFE_FRAME_RATE";
pub const ENV_EXPORT_DIR: &str = "CHROMALIFE_EXPORT_DIR";

#[derive(Debug, Clone)]
pub struct LifeConfig {
    pub cell_size: f64,
    pub life_probability: f64,
    pub color_scale: ColorScale,
    pub color_fade: f32,
    pub lightness_threshold: f32,
    pub initial_frame_rate: u32,
    pub export_dir: PathBuf,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            life_probability: DEFAULT_LIFE_PROBABILITY,
            color_scale: ColorScale::default(),
            color_fade: COLOR_FADE,
            lightness_threshold: COLOR_LIGHTNESS_THRESHOLD,
            initial_frame_rate: INITIAL_FRAME_RATE,
            export_dir: PathBuf::from(EXPORT_DIR),
        }
    }
}

impl LifeConfig {
    /// Defaults, overridden by any `CHROMALIFE_*` environment variables.
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(cell_size) = parse_var::<f64, _>(&lookup, ENV_CELL_SIZE) {
            if cell_size.is_finite() && cell_size >= 1.0 {
                config.cell_size = cell_size;
            } else {
                log::warn!("Ignoring {}={}: must be at least 1", ENV_CELL_SIZE, cell_size);
            }
        }
        if let Some(probability) = parse_var::<f64, _>(&lookup, ENV_LIFE_PROBABILITY) {
            if probability.is_nan() {
                log::warn!("Ignoring {}: not a number", ENV_LIFE_PROBABILITY);
            } else {
                config.life_probability = probability.clamp(0.0, 1.0);
            }
        }
        if let Some(frame_rate) = parse_var::<u32, _>(&lookup, ENV_FRAME_RATE) {
            config.initial_frame_rate = frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE);
        }
        if let Some(dir) = lookup(ENV_EXPORT_DIR).filter(|d| !d.trim().is_empty()) {
            config.export_dir = PathBuf::from(dir);
        }

        config
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring {}={:?}: could not parse", key, raw);
            None
        }
    }
}
// --- End of File: config.rs ---

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn no_overrides_gives_defaults() {
        let config = LifeConfig::from_lookup(|_| None);
        assert_eq!(config.cell_size, CELL_SIZE);
        assert_eq!(config.life_probability, DEFAULT_LIFE_PROBABILITY);
        assert_eq!(config.initial_frame_rate, INITIAL_FRAME_RATE);
        assert_eq!(config.export_dir, PathBuf::from(EXPORT_DIR));
    }

    #[test]
    fn overrides_are_parsed_and_clamped() {
        let config = LifeConfig::from_lookup(lookup_from(&[
            (ENV_CELL_SIZE, "10"),
            (ENV_LIFE_PROBABILITY, "1.7"),
            (ENV_FRAME_RATE, "500"),
            (ENV_EXPORT_DIR, "/tmp/frames"),
        ]));
        assert_eq!(config.cell_size, 10.0);
        assert_eq!(config.life_probability, 1.0);
        assert_eq!(config.initial_frame_rate, MAX_FRAME_RATE);
        assert_eq!(config.export_dir, PathBuf::from("/tmp/frames"));
    }

    #[test]
    fn bad_values_are_ignored() {
        let config = LifeConfig::from_lookup(lookup_from(&[
            (ENV_CELL_SIZE, "0.2"),
            (ENV_LIFE_PROBABILITY, "lots"),
            (ENV_FRAME_RATE, "-3"),
        ]));
        assert_eq!(config.cell_size, CELL_SIZE);
        assert_eq!(config.life_probability, DEFAULT_LIFE_PROBABILITY);
        assert_eq!(config.initial_frame_rate, INITIAL_FRAME_RATE);
    }
}
