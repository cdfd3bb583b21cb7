use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub wave: WaveConfig,
    #[serde(default)]
    pub swipe: SwipeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Joke endpoint URL, expected to serve a JSON array of jokes
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
    /// Background palette as hex strings, cycled on each swipe
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            colors: default_colors(),
        }
    }
}

/// Wave shape parameters, in logical units shared with [`crate::slider::Screen`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveConfig {
    /// Resting distance of the wave edge from the screen edge
    #[serde(default = "default_min_ledge")]
    pub min_ledge: f64,
    /// Horizontal radius of the wave bulge at rest
    #[serde(default = "default_min_horizontal_radius")]
    pub min_horizontal_radius: f64,
    /// Vertical radius of the wave bulge at rest
    #[serde(default = "default_min_vertical_radius")]
    pub min_vertical_radius: f64,
    /// Radius of the swipe button
    #[serde(default = "default_button_radius")]
    pub button_radius: f64,
    /// Gap between the button and the wave edge
    #[serde(default = "default_button_margin")]
    pub button_margin: f64,
    /// Resting vertical center of the left wave (right wave mirrors from the bottom)
    #[serde(default = "default_rest_y")]
    pub rest_y: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            min_ledge: default_min_ledge(),
            min_horizontal_radius: default_min_horizontal_radius(),
            min_vertical_radius: default_min_vertical_radius(),
            button_radius: default_button_radius(),
            button_margin: default_button_margin(),
            rest_y: default_rest_y(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeConfig {
    /// Gain applied to the drag distance when computing progress
    #[serde(default = "default_velocity")]
    pub velocity: f64,
    /// Progress below which a released drag snaps back instead of committing
    #[serde(default = "default_cancel_threshold")]
    pub cancel_threshold: f64,
    /// Duration of the commit glide to full progress
    #[serde(default = "default_commit_duration")]
    pub commit_duration_ms: u64,
    /// Pause between the commit glide and the deck advance
    #[serde(default = "default_commit_delay")]
    pub commit_delay_ms: u64,
    /// Starting offset of the post-advance settle animation
    #[serde(default = "default_settle_offset")]
    pub settle_offset: f64,
    /// Duration of the settle animation
    #[serde(default = "default_settle_duration")]
    pub settle_duration_ms: u64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            velocity: default_velocity(),
            cancel_threshold: default_cancel_threshold(),
            commit_duration_ms: default_commit_duration(),
            commit_delay_ms: default_commit_delay(),
            settle_offset: default_settle_offset(),
            settle_duration_ms: default_settle_duration(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_endpoint() -> String {
    "https://example.com/jokes.json".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_tick_rate() -> u64 {
    250
}

fn default_animation_fps() -> u16 {
    60
}

fn default_colors() -> Vec<String> {
    vec![
        "#9400D3".to_string(),
        "#FF1493".to_string(),
        "#0094D3".to_string(),
    ]
}

fn default_min_ledge() -> f64 {
    15.0
}

fn default_min_horizontal_radius() -> f64 {
    48.0
}

fn default_min_vertical_radius() -> f64 {
    82.0
}

fn default_button_radius() -> f64 {
    24.0
}

fn default_button_margin() -> f64 {
    8.0
}

fn default_rest_y() -> f64 {
    200.0
}

fn default_velocity() -> f64 {
    0.45
}

fn default_cancel_threshold() -> f64 {
    0.15
}

fn default_commit_duration() -> u64 {
    300
}

fn default_commit_delay() -> u64 {
    300
}

fn default_settle_offset() -> f64 {
    100.0
}

fn default_settle_duration() -> u64 {
    600
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/dadjokes/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("dadjokes")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_swipe_config() {
        let config = SwipeConfig::default();
        assert!((config.velocity - 0.45).abs() < f64::EPSILON);
        assert!((config.cancel_threshold - 0.15).abs() < f64::EPSILON);
        assert_eq!(config.commit_delay_ms, 300);
        assert!((config.settle_offset - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_wave_config() {
        let config = WaveConfig::default();
        assert!((config.min_ledge - 15.0).abs() < f64::EPSILON);
        assert!((config.min_horizontal_radius - 48.0).abs() < f64::EPSILON);
        assert!((config.min_vertical_radius - 82.0).abs() < f64::EPSILON);
        assert!((config.rest_y - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [swipe]
            velocity = 0.6
            "#,
        )
        .unwrap();
        assert!((config.swipe.velocity - 0.6).abs() < f64::EPSILON);
        assert!((config.swipe.cancel_threshold - 0.15).abs() < f64::EPSILON);
        assert_eq!(config.ui.colors.len(), 3);
    }
}
