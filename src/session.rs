//! Stateful coordinator for interactive file loads and limit edits
//!
//! This module reimplements the original application's reactive-observer
//! arrangement as an explicit state machine. Two input streams feed one
//! owner of the published statistics:
//! - file loads ([`Session::load`]), each of which parses the file and
//!   computes a full [`ModelInfo`];
//! - limit edits ([`Session::set_limit`]), each of which re-derives only
//!   the over-limit count from the already-published area sequence.
//!
//! Publication is last-writer-wins by claim order. A newer file selection
//! supersedes an older in-flight parse even when the older one finishes
//! later; a superseded result is discarded, never published. There is no
//! cancellation token. The published value is always a whole, internally
//! consistent `ModelInfo`; nothing partial is ever observable, and a failed
//! load leaves the previous publication untouched.
//!
//! # Example
//!
//! ```
//! use objinfo::Session;
//! use std::io::Cursor;
//!
//! # fn main() -> objinfo::Result<()> {
//! let session = Session::new();
//! let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
//!
//! let info = session.load(Cursor::new(obj))?.unwrap();
//! assert_eq!(info.total, 1);
//!
//! // Only the over-limit count changes; no re-parse happens.
//! let info = session.set_limit(Some(10.0)).unwrap();
//! assert_eq!(info.more_than_limit, 0);
//! # Ok(())
//! # }
//! ```

use crate::area_ops;
use crate::error::Result;
use crate::model::{ModelInfo, ParserConfig};
use crate::parser;
use log::{debug, warn};
use std::io::Read;
use std::sync::{Arc, Mutex, MutexGuard};

struct SessionState {
    /// Current limit; `None` means unset (every polygon counts)
    limit: Option<f64>,
    /// Sequence number of the latest limit edit
    limit_seq: u64,
    /// Generation of the latest load claim
    load_generation: u64,
    /// Generation of the load whose result is currently published
    published_generation: u64,
    /// Limit sequence the current publication was computed against
    published_limit_seq: u64,
    /// The currently published statistics, if any load has succeeded
    info: Option<Arc<ModelInfo>>,
}

/// Coordinator owning the currently published [`ModelInfo`]
///
/// `Session` is `Send + Sync`; all methods take `&self`, so one session can
/// be shared across the thread doing file loads and the thread handling
/// limit edits. The internal lock is held only to snapshot state and to
/// publish results, never across parsing or area computation.
pub struct Session {
    state: Mutex<SessionState>,
}

impl Session {
    /// Create a new session with no publication and the limit unset
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SessionState {
                limit: None,
                limit_seq: 0,
                load_generation: 0,
                published_generation: 0,
                published_limit_seq: 0,
                info: None,
            }),
        }
    }

    /// Load a new file: parse, compute areas, and publish the aggregate
    ///
    /// Runs the full pipeline with the default parser configuration. See
    /// [`Session::load_with_config`].
    pub fn load<R: Read>(&self, reader: R) -> Result<Option<Arc<ModelInfo>>> {
        self.load_with_config(reader, &ParserConfig::new())
    }

    /// Load a new file with a custom parser configuration
    ///
    /// The load claims a new model generation up front, then parses and
    /// computes areas outside the lock. The parsed model is dropped as soon
    /// as the area sequence exists; only the aggregate is retained. The
    /// result is published against the limit current at publish time.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(info))` - the load was published
    /// - `Ok(None)` - a newer load claimed a later generation while this
    ///   one was running; the result was discarded as stale
    /// - `Err(_)` - parsing or area computation failed; the previous
    ///   publication is untouched
    pub fn load_with_config<R: Read>(
        &self,
        reader: R,
        config: &ParserConfig,
    ) -> Result<Option<Arc<ModelInfo>>> {
        let generation = {
            let mut state = self.lock_state();
            state.load_generation += 1;
            state.load_generation
        };

        // The long work happens without the lock.
        let areas = parser::parse_obj_with_config(reader, config)
            .and_then(|model| area_ops::compute_polygon_areas(&model))
            .map_err(|e| {
                warn!("load failed: {}", e);
                e
            })?;

        let (limit, limit_seq) = {
            let state = self.lock_state();
            if state.load_generation != generation {
                debug!("discarding stale load (generation {})", generation);
                return Ok(None);
            }
            (state.limit, state.limit_seq)
        };

        let info = area_ops::model_info_from_areas(areas, limit).map_err(|e| {
            warn!("load failed: {}", e);
            e
        })?;

        let mut state = self.lock_state();
        if state.load_generation != generation {
            debug!("discarding stale load (generation {})", generation);
            return Ok(None);
        }

        // A limit edit may have landed between snapshot and publish; the
        // publication must reflect the newest limit.
        let info = if state.limit_seq != limit_seq {
            Arc::new(area_ops::recompute_with_limit(&info, state.limit))
        } else {
            Arc::new(info)
        };

        state.published_generation = generation;
        state.published_limit_seq = state.limit_seq;
        state.info = Some(Arc::clone(&info));
        Ok(Some(info))
    }

    /// Set or clear the area limit and re-derive the over-limit count
    ///
    /// The limit is recorded immediately, so it applies to any later load
    /// even when nothing is published yet. When a publication exists, its
    /// over-limit count is re-derived from the stored area sequence via
    /// [`area_ops::recompute_with_limit`]; the parser and the area formula
    /// are never re-invoked.
    ///
    /// # Returns
    ///
    /// The statistics reflecting the new limit, or `None` when no load has
    /// published yet.
    pub fn set_limit(&self, limit: Option<f64>) -> Option<Arc<ModelInfo>> {
        let (seq, snapshot) = {
            let mut state = self.lock_state();
            state.limit = limit;
            state.limit_seq += 1;
            let snapshot = state
                .info
                .as_ref()
                .map(|info| (state.published_generation, Arc::clone(info)));
            (state.limit_seq, snapshot)
        };

        let (generation, current) = snapshot?;
        let recomputed = Arc::new(area_ops::recompute_with_limit(&current, limit));

        let mut state = self.lock_state();
        if state.published_generation != generation || state.published_limit_seq >= seq {
            // A newer load or a newer limit edit has published meanwhile;
            // this result is stale.
            debug!("discarding stale limit recompute (seq {})", seq);
            return state.info.clone();
        }

        state.published_limit_seq = seq;
        state.info = Some(Arc::clone(&recomputed));
        Some(recomputed)
    }

    /// Get the currently published statistics, if any
    pub fn model_info(&self) -> Option<Arc<ModelInfo>> {
        self.lock_state().info.clone()
    }

    /// Get the current limit (`None` when unset)
    pub fn limit(&self) -> Option<f64> {
        self.lock_state().limit
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        // A panic while holding the lock cannot leave partial state behind,
        // since every publish writes whole values; recover the guard.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TRIANGLE_AND_SQUARE: &str = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
f 1 2 3
f 1 2 4 3
";

    #[test]
    fn test_load_publishes_full_aggregate() {
        let session = Session::new();
        let info = session.load(Cursor::new(TRIANGLE_AND_SQUARE)).unwrap().unwrap();

        assert_eq!(info.total, 2);
        assert_eq!(info.more_than_limit, 2);
        assert!((info.min - 0.5).abs() < 1e-12);
        assert!((info.max - 1.0).abs() < 1e-12);
        assert_eq!(session.model_info().as_deref(), Some(&*info));
    }

    #[test]
    fn test_set_limit_before_any_load() {
        let session = Session::new();
        assert!(session.set_limit(Some(0.75)).is_none());
        assert_eq!(session.limit(), Some(0.75));

        // The recorded limit applies to the next load.
        let info = session.load(Cursor::new(TRIANGLE_AND_SQUARE)).unwrap().unwrap();
        assert_eq!(info.more_than_limit, 1);
    }

    #[test]
    fn test_set_limit_recomputes_from_stored_areas() {
        let session = Session::new();
        session.load(Cursor::new(TRIANGLE_AND_SQUARE)).unwrap();

        let info = session.set_limit(Some(0.75)).unwrap();
        assert_eq!(info.more_than_limit, 1);
        assert_eq!(info.total, 2);

        let info = session.set_limit(None).unwrap();
        assert_eq!(info.more_than_limit, 2);
    }

    #[test]
    fn test_failed_load_keeps_previous_publication() {
        let session = Session::new();
        let first = session.load(Cursor::new(TRIANGLE_AND_SQUARE)).unwrap().unwrap();

        assert!(session.load(Cursor::new("f\n")).is_err());
        assert_eq!(session.model_info().as_deref(), Some(&*first));
    }

    #[test]
    fn test_load_replaces_previous_publication() {
        let session = Session::new();
        session.load(Cursor::new(TRIANGLE_AND_SQUARE)).unwrap();

        let second = "v 0 0 0\nv 2 0 0\nv 0 2 0\nf 1 2 3\n";
        let info = session.load(Cursor::new(second)).unwrap().unwrap();
        assert_eq!(info.total, 1);
        assert!((info.max - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_model_load_fails() {
        let session = Session::new();
        let err = session.load(Cursor::new("v 1 2 3\n")).unwrap_err();
        assert!(matches!(err, crate::Error::EmptyAggregate));
        assert!(session.model_info().is_none());
    }

    #[test]
    fn test_session_is_shareable_across_threads() {
        let session = Arc::new(Session::new());
        session.load(Cursor::new(TRIANGLE_AND_SQUARE)).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let session = Arc::clone(&session);
                std::thread::spawn(move || {
                    session.set_limit(Some(i as f64 * 0.25));
                    session.model_info()
                })
            })
            .collect();

        for handle in handles {
            let info = handle.join().unwrap().unwrap();
            // Whatever interleaving happened, every observed publication
            // is whole.
            assert_eq!(info.total, 2);
            assert_eq!(info.polygon_areas.len(), 2);
        }

        // The final publication reflects the last recorded limit.
        let last = session.model_info().unwrap();
        assert_eq!(
            last.more_than_limit,
            area_ops::count_over_limit(&last.polygon_areas, session.limit())
        );
    }
}
