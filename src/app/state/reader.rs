use crate::api::models::Verse;
use crate::pagination::PageGroup;

/// Juz reader model: the fetched juz split into mushaf pages, plus the
/// matching audio-edition verses for recitation lookups.
#[derive(Default)]
pub struct ReaderState {
    pub(in crate::app) juz: Option<u32>,
    pub(in crate::app) pages: Vec<PageGroup>,
    pub(in crate::app) audio_verses: Vec<Verse>,
    pub(in crate::app) current_page: usize,
    pub(in crate::app) loading: bool,
    pub(in crate::app) error: Option<String>,
    pub(in crate::app) request_id: u64,
}

impl ReaderState {
    pub(in crate::app) fn set_page_clamped(&mut self, page: usize) {
        if self.pages.is_empty() {
            self.current_page = 0;
        } else {
            self.current_page = page.min(self.pages.len().saturating_sub(1));
        }
    }

    pub(in crate::app) fn current_group(&self) -> Option<&PageGroup> {
        self.pages.get(self.current_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader_with_pages(count: usize) -> ReaderState {
        let mut reader = ReaderState::default();
        reader.pages = (0..count)
            .map(|i| PageGroup {
                page: 500 + i as u32,
                verses: Vec::new(),
            })
            .collect();
        reader
    }

    #[test]
    fn clamps_past_the_last_page() {
        let mut reader = reader_with_pages(3);
        reader.set_page_clamped(99);
        assert_eq!(reader.current_page, 2);
    }

    #[test]
    fn empty_pages_pin_index_to_zero() {
        let mut reader = reader_with_pages(0);
        reader.set_page_clamped(5);
        assert_eq!(reader.current_page, 0);
        assert!(reader.current_group().is_none());
    }
}
