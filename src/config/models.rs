use serde::Deserialize;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_arabic_font_size")]
    pub arabic_font_size: u32,
    #[serde(default = "crate::config::defaults::default_translation_font_size")]
    pub translation_font_size: u32,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "crate::config::defaults::default_text_edition")]
    pub text_edition: String,
    #[serde(default = "crate::config::defaults::default_translation_edition")]
    pub translation_edition: String,
    #[serde(default = "crate::config::defaults::default_audio_edition")]
    pub audio_edition: String,
    #[serde(default = "crate::config::defaults::default_search_edition")]
    pub search_edition: String,
    #[serde(default = "crate::config::defaults::default_playback_gap_secs")]
    pub playback_gap_secs: f32,
    #[serde(default = "crate::config::defaults::default_volume")]
    pub volume: f32,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::default(),
            arabic_font_size: crate::config::defaults::default_arabic_font_size(),
            translation_font_size: crate::config::defaults::default_translation_font_size(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            api_base_url: crate::config::defaults::default_api_base_url(),
            text_edition: crate::config::defaults::default_text_edition(),
            translation_edition: crate::config::defaults::default_translation_edition(),
            audio_edition: crate::config::defaults::default_audio_edition(),
            search_edition: crate::config::defaults::default_search_edition(),
            playback_gap_secs: crate::config::defaults::default_playback_gap_secs(),
            volume: crate::config::defaults::default_volume(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Day
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
