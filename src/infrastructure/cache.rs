use parking_lot::RwLock;

use crate::domain::content::HomePayload;

/// One-slot cache for the assembled home document. Content writes clear
/// it, so the next read rebuilds from storage.
#[derive(Default)]
pub struct HomeCache {
    inner: RwLock<Option<HomePayload>>,
}

impl HomeCache {
    pub fn get(&self) -> Option<HomePayload> {
        self.inner.read().clone()
    }

    pub fn store(&self, payload: HomePayload) {
        *self.inner.write() = Some(payload);
    }

    pub fn invalidate(&self) {
        *self.inner.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content;
    use chrono::Utc;

    fn payload() -> HomePayload {
        HomePayload {
            profile: content::profile(),
            about: content::about(),
            skills: content::skills(),
            contact: content::contact(),
            technology_options: content::technology_options(),
            experience: Vec::new(),
            projects: Vec::new(),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn starts_empty_and_remembers_a_payload() {
        let cache = HomeCache::default();
        assert!(cache.get().is_none());
        cache.store(payload());
        assert!(cache.get().is_some());
    }

    #[test]
    fn invalidate_clears_the_slot() {
        let cache = HomeCache::default();
        cache.store(payload());
        cache.invalidate();
        assert!(cache.get().is_none());
    }
}
