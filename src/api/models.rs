//! Serde models for the alquran.cloud REST payloads.
//!
//! Every endpoint wraps its payload in the same `{ code, status, data }`
//! envelope. Field names on the wire are camelCase. Optional fields are
//! `#[serde(default)]` because the API omits them on editions that do not
//! carry them (text editions have no `audio`, search hits have no `page`).

use serde::Deserialize;

/// Common response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub status: String,
    pub data: T,
}

/// One chapter (surah) as listed by `GET /surah`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub number: u32,
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub number_of_ayahs: u32,
    pub revelation_type: String,
}

/// Surah back-reference attached to verses in juz and search payloads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahRef {
    pub number: u32,
    pub name: String,
    #[serde(default)]
    pub english_name: String,
}

/// A single ayah. `number` is the global ayah number (1..=6236) and is the
/// identity used to correlate text and audio editions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    pub number: u32,
    pub text: String,
    pub number_in_surah: u32,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub surah: Option<SurahRef>,
}

/// Payload of `GET /juz/{n}/{edition}`.
#[derive(Debug, Clone, Deserialize)]
pub struct JuzData {
    pub number: u32,
    pub ayahs: Vec<Verse>,
}

/// Payload of `GET /surah/{n}` and each element of the editions variant.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahData {
    pub number: u32,
    pub name: String,
    pub english_name: String,
    #[serde(default)]
    pub english_name_translation: String,
    pub ayahs: Vec<Verse>,
}

/// Payload of `GET /search/{keyword}/all/{edition}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchData {
    pub count: u32,
    pub matches: Vec<Verse>,
}
