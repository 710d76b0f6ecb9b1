//! On-disk response cache with read-through-on-miss semantics.
//!
//! Each cache entry is one JSON file, `<key>.json`, under the cache
//! directory. [`load_or_fetch`] is the single read-through point: a hit
//! decodes the stored bytes, a miss awaits the fetch, writes the result
//! through, and returns it. There is no staleness or TTL handling; the only
//! way to discard an entry is [`Cache::remove`].

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::{Serialize, de::DeserializeOwned};

use crate::ScbError;

/// A directory of JSON-encoded cache entries, one file per key.
#[derive(Debug, Clone)]
pub struct Cache {
    dir: PathBuf,
}

impl Cache {
    /// Creates a cache rooted at `dir`.
    ///
    /// The directory does not have to exist yet; it is created on the first
    /// [`Cache::store`].
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the cache directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Loads the entry for `key`, or `None` if no entry exists.
    ///
    /// # Errors
    ///
    /// Returns [`ScbError::Io`] for read failures other than a missing file,
    /// and [`ScbError::Decode`] when the stored bytes are not valid JSON for
    /// `T`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ScbError> {
        let path = self.entry_path(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Writes the entry for `key`, creating the cache directory if needed.
    ///
    /// An existing entry is overwritten, so a fresh write is always the value
    /// served by subsequent loads.
    ///
    /// # Errors
    ///
    /// Returns [`ScbError::Io`] for write failures and [`ScbError::Decode`]
    /// if the value cannot be encoded.
    pub fn store<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ScbError> {
        fs::create_dir_all(&self.dir)?;
        let bytes = serde_json::to_vec(value)?;
        fs::write(self.entry_path(key), bytes)?;
        Ok(())
    }

    /// Removes the entry for `key`. Removing an absent entry is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ScbError::Io`] for removal failures other than a missing
    /// file.
    pub fn remove(&self, key: &str) -> Result<(), ScbError> {
        match fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Serves `key` from the cache, fetching and writing through on a miss.
///
/// With a populated cache the fetch is never invoked, so two consecutive
/// calls against the same entry produce identical values without touching
/// the data source.
///
/// # Errors
///
/// Propagates cache I/O and decode errors, and whatever the fetch returns on
/// a miss.
pub async fn load_or_fetch<T, F, Fut>(cache: &Cache, key: &str, fetch: F) -> Result<T, ScbError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ScbError>>,
{
    if let Some(value) = cache.load(key)? {
        debug!(key; "Cache hit");
        return Ok(value);
    }

    info!(key; "Cache miss, fetching from data source");
    let value = fetch().await?;
    cache.store(key, &value)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use futures::executor::block_on;
    use tempfile::tempdir;

    use super::*;
    use crate::SeatTable;

    fn sample_table() -> SeatTable {
        let mut year = BTreeMap::new();
        year.insert("S".to_string(), "100".to_string());
        let mut table = SeatTable::new();
        table.insert("2018".to_string(), year);
        table
    }

    #[test]
    fn test_load_missing_entry_returns_none() {
        let dir = tempdir().expect("Failed to create temp directory");
        let cache = Cache::new(dir.path());

        let loaded: Option<SeatTable> = cache.load("riksdagsmandat").expect("load succeeds");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_store_then_load_roundtrips() {
        let dir = tempdir().expect("Failed to create temp directory");
        let cache = Cache::new(dir.path());
        let table = sample_table();

        cache.store("riksdagsmandat", &table).expect("store succeeds");
        let loaded: Option<SeatTable> = cache.load("riksdagsmandat").expect("load succeeds");

        assert_eq!(loaded, Some(table));
    }

    #[test]
    fn test_store_creates_missing_directory() {
        let dir = tempdir().expect("Failed to create temp directory");
        let cache = Cache::new(dir.path().join("nested").join("cache"));

        cache.store("key", &sample_table()).expect("store succeeds");
        let loaded: Option<SeatTable> = cache.load("key").expect("load succeeds");
        assert!(loaded.is_some());
    }

    #[test]
    fn test_store_overwrites_previous_entry() {
        let dir = tempdir().expect("Failed to create temp directory");
        let cache = Cache::new(dir.path());

        cache.store("key", &sample_table()).expect("store succeeds");
        let fresh = SeatTable::new();
        cache.store("key", &fresh).expect("store succeeds");

        let loaded: Option<SeatTable> = cache.load("key").expect("load succeeds");
        assert_eq!(loaded, Some(fresh));
    }

    #[test]
    fn test_load_corrupt_entry_is_decode_error() {
        let dir = tempdir().expect("Failed to create temp directory");
        let cache = Cache::new(dir.path());
        fs::write(dir.path().join("key.json"), b"not json").expect("write succeeds");

        let err = cache.load::<SeatTable>("key").expect_err("corrupt entry fails");
        assert!(matches!(err, ScbError::Decode(_)));
    }

    #[test]
    fn test_remove_missing_entry_is_ok() {
        let dir = tempdir().expect("Failed to create temp directory");
        let cache = Cache::new(dir.path());

        cache.remove("absent").expect("remove succeeds");
    }

    #[test]
    fn test_load_or_fetch_miss_fetches_and_writes_through() {
        let dir = tempdir().expect("Failed to create temp directory");
        let cache = Cache::new(dir.path());
        let table = sample_table();

        let fetched = block_on(load_or_fetch(&cache, "key", || {
            let table = table.clone();
            async move { Ok(table) }
        }))
        .expect("fetch succeeds");

        assert_eq!(fetched, table);
        // the miss wrote through
        let loaded: Option<SeatTable> = cache.load("key").expect("load succeeds");
        assert_eq!(loaded, Some(table));
    }

    #[test]
    fn test_load_or_fetch_hit_never_invokes_fetch() {
        let dir = tempdir().expect("Failed to create temp directory");
        let cache = Cache::new(dir.path());
        let table = sample_table();
        cache.store("key", &table).expect("store succeeds");

        // a fetch that fails loudly proves the hit path never runs it
        let served: SeatTable = block_on(load_or_fetch(&cache, "key", || async {
            panic!("fetch must not be invoked on a cache hit")
        }))
        .expect("hit succeeds");

        assert_eq!(served, table);
    }

    #[test]
    fn test_load_or_fetch_propagates_fetch_error() {
        let dir = tempdir().expect("Failed to create temp directory");
        let cache = Cache::new(dir.path());

        let err = block_on(load_or_fetch::<SeatTable, _, _>(&cache, "key", || async {
            Err(ScbError::Status { code: 500 })
        }))
        .expect_err("fetch error propagates");

        assert!(matches!(err, ScbError::Status { code: 500 }));
        // nothing was written for the failed fetch
        let loaded: Option<SeatTable> = cache.load("key").expect("load succeeds");
        assert!(loaded.is_none());
    }
}
