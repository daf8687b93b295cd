//! Async client for the alquran.cloud content API.
//!
//! Thin typed wrapper over `reqwest`. Every method unwraps the common
//! response envelope and returns just the payload. The client is `Clone`
//! (reqwest clients share their connection pool) so async tasks can own one.

pub mod models;

use anyhow::{Context, Result, anyhow};
use models::{Chapter, Envelope, JuzData, SearchData, SurahData, Verse};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

/// A juz fetched in two editions at once: the text verses to display and the
/// matching audio-edition verses carrying recitation URLs.
#[derive(Debug, Clone)]
pub struct JuzBundle {
    pub number: u32,
    pub verses: Vec<Verse>,
    pub audio_verses: Vec<Verse>,
}

/// The three editions of a surah the reader needs, fetched in one call.
#[derive(Debug, Clone)]
pub struct SurahBundle {
    pub arabic: SurahData,
    pub translation: SurahData,
    pub audio: SurahData,
}

#[derive(Debug, Clone)]
pub struct QuranClient {
    http: reqwest::Client,
    base_url: String,
}

impl QuranClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        QuranClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Build an endpoint URL from path segments. Segments are appended with
    /// `Url` so user-entered values (search keywords) get percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid API base URL: {}", self.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("API base URL cannot take path segments: {}", self.base_url))?
            .extend(segments);
        Ok(url)
    }

    async fn get_data<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "GET");
        let envelope: Envelope<T> = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Requesting {url}"))?
            .error_for_status()
            .with_context(|| format!("Requesting {url}"))?
            .json()
            .await
            .with_context(|| format!("Decoding response from {url}"))?;
        if envelope.code != 200 {
            return Err(anyhow!(
                "API returned {} {} for {url}",
                envelope.code,
                envelope.status
            ));
        }
        Ok(envelope.data)
    }

    /// All 114 chapters.
    pub async fn chapters(&self) -> Result<Vec<Chapter>> {
        self.get_data(self.endpoint(&["surah"])?).await
    }

    /// One juz in a single edition.
    pub async fn juz(&self, number: u32, edition: &str) -> Result<JuzData> {
        let url = self.endpoint(&["juz", &number.to_string(), edition])?;
        self.get_data(url).await
    }

    /// One juz in a text edition and an audio edition, fetched in parallel.
    pub async fn juz_with_audio(
        &self,
        number: u32,
        text_edition: &str,
        audio_edition: &str,
    ) -> Result<JuzBundle> {
        let (text, audio) = tokio::try_join!(
            self.juz(number, text_edition),
            self.juz(number, audio_edition)
        )?;
        Ok(JuzBundle {
            number,
            verses: text.ayahs,
            audio_verses: audio.ayahs,
        })
    }

    /// One surah in three editions: Arabic text, a translation, recitation.
    pub async fn surah_editions(
        &self,
        number: u32,
        text_edition: &str,
        translation_edition: &str,
        audio_edition: &str,
    ) -> Result<SurahBundle> {
        let editions = format!("{text_edition},{translation_edition},{audio_edition}");
        let url = self.endpoint(&["surah", &number.to_string(), "editions", &editions])?;
        let payload: Vec<SurahData> = self.get_data(url).await?;
        let count = payload.len();
        let mut editions = payload.into_iter();
        match (editions.next(), editions.next(), editions.next()) {
            (Some(arabic), Some(translation), Some(audio)) => Ok(SurahBundle {
                arabic,
                translation,
                audio,
            }),
            _ => Err(anyhow!("Expected 3 editions for surah {number}, got {count}")),
        }
    }

    /// Keyword search across the whole text of one edition or language.
    pub async fn search(&self, keyword: &str, edition: &str) -> Result<SearchData> {
        let url = self.endpoint(&["search", keyword, "all", edition])?;
        self.get_data(url).await
    }

    /// Download one recitation file. The URL comes from an audio-edition
    /// verse, not from this API's base.
    pub async fn audio_bytes(&self, url: &str) -> Result<Vec<u8>> {
        debug!(%url, "GET audio");
        let bytes = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Requesting {url}"))?
            .error_for_status()
            .with_context(|| format!("Requesting {url}"))?
            .bytes()
            .await
            .with_context(|| format!("Downloading {url}"))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_segments() {
        let client = QuranClient::new("https://api.alquran.cloud/v1");
        let url = client.endpoint(&["juz", "30", "quran-uthmani"]).unwrap();
        assert_eq!(url.as_str(), "https://api.alquran.cloud/v1/juz/30/quran-uthmani");
    }

    #[test]
    fn endpoint_percent_encodes_keywords() {
        let client = QuranClient::new("https://api.alquran.cloud/v1");
        let url = client.endpoint(&["search", "abraham lot", "all", "en"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.alquran.cloud/v1/search/abraham%20lot/all/en"
        );
    }
}
