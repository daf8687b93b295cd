pub(crate) fn default_arabic_font_size() -> u32 {
    32
}

pub(crate) fn default_translation_font_size() -> u32 {
    18
}

pub(crate) fn default_window_width() -> f32 {
    1024.0
}

pub(crate) fn default_window_height() -> f32 {
    768.0
}

pub(crate) fn default_api_base_url() -> String {
    "https://api.alquran.cloud/v1".to_string()
}

pub(crate) fn default_text_edition() -> String {
    "quran-uthmani".to_string()
}

pub(crate) fn default_translation_edition() -> String {
    "en.asad".to_string()
}

pub(crate) fn default_audio_edition() -> String {
    "ar.alafasy".to_string()
}

pub(crate) fn default_search_edition() -> String {
    "en".to_string()
}

pub(crate) fn default_playback_gap_secs() -> f32 {
    0.5
}

pub(crate) fn default_volume() -> f32 {
    1.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
