// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Guild display names, fetched once per guild

use crate::platform::PlatformError;
use em_core::SpaceId;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub(crate) struct SpaceNames {
    names: Arc<Mutex<HashMap<SpaceId, String>>>,
}

impl SpaceNames {
    pub fn insert(&self, space: &SpaceId, name: &str) {
        self.names
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(space.clone(), name.to_string());
    }

    fn get(&self, space: &SpaceId) -> Option<String> {
        self.names
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(space)
            .cloned()
    }

    /// Cached name of `space`, running `fetch` only on a miss
    pub async fn get_or_fetch<F, Fut>(
        &self,
        space: &SpaceId,
        fetch: F,
    ) -> Result<String, PlatformError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, PlatformError>>,
    {
        if let Some(name) = self.get(space) {
            return Ok(name);
        }
        let name = fetch().await?;
        self.insert(space, &name);
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn fetches_each_space_once() {
        let names = SpaceNames::default();
        let fetches = AtomicUsize::new(0);
        let space = SpaceId::new("G1");

        for _ in 0..3 {
            let name = names
                .get_or_fetch(&space, || async {
                    fetches.fetch_add(1, Ordering::SeqCst);
                    Ok("Guild One".to_string())
                })
                .await
                .unwrap();
            assert_eq!(name, "Guild One");
        }

        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_fetch_is_not_cached() {
        let names = SpaceNames::default();
        let space = SpaceId::new("G1");

        let err = names
            .get_or_fetch(&space, || async {
                Err(PlatformError::NotFound("space G1".to_string()))
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let name = names
            .get_or_fetch(&space, || async { Ok("Guild One".to_string()) })
            .await
            .unwrap();
        assert_eq!(name, "Guild One");
    }

    #[tokio::test]
    async fn resolved_space_lookups_prime_the_cache() {
        let names = SpaceNames::default();
        let space = SpaceId::new("G1");
        names.insert(&space, "Guild One");

        let name = names
            .get_or_fetch(&space, || async {
                Err(PlatformError::Transport("unexpected fetch".to_string()))
            })
            .await
            .unwrap();
        assert_eq!(name, "Guild One");
    }
}
