//! Mock store and recording executor for tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use iterm2gnome::store::mock::{MockStore, RecordingExecutor};
//!
//! let store = MockStore::with_profiles(vec![/* ... */]);
//! let executor = RecordingExecutor::new();
//! // run the pipeline, then:
//! assert_eq!(executor.applied().len(), 7);
//! ```

use std::sync::Mutex;

use super::{Executor, ProfileStore};
use crate::dconf::WriteOperation;
use crate::error::{ConvertError, Result};
use crate::profile::ProfileRecord;

/// Profile store with a canned listing.
#[derive(Debug, Default)]
pub struct MockStore {
    profiles: Vec<ProfileRecord>,
    failing: bool,
}

impl MockStore {
    /// A store with no profiles at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store whose listing returns the given profiles, in order.
    #[must_use]
    pub fn with_profiles(profiles: Vec<ProfileRecord>) -> Self {
        Self {
            profiles,
            failing: false,
        }
    }

    /// A store whose listing read always fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            profiles: Vec::new(),
            failing: true,
        }
    }
}

impl ProfileStore for MockStore {
    fn list_profiles(&self) -> Result<Vec<ProfileRecord>> {
        if self.failing {
            return Err(ConvertError::StoreRead("mock store failure".to_string()));
        }
        Ok(self.profiles.clone())
    }
}

/// Executor that records every applied operation for later assertions.
///
/// Can be configured to fail partway through, to test that earlier writes
/// stay applied and later ones are never attempted.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    applied: Mutex<Vec<WriteOperation>>,
    fail_after: Option<usize>,
}

impl RecordingExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the operation at index `n` (0-based); operations before it
    /// are recorded normally.
    #[must_use]
    pub fn failing_at(n: usize) -> Self {
        Self {
            applied: Mutex::new(Vec::new()),
            fail_after: Some(n),
        }
    }

    /// Operations applied so far, in order.
    #[must_use]
    pub fn applied(&self) -> Vec<WriteOperation> {
        self.applied.lock().unwrap().clone()
    }

    /// Applied operations rendered as `dconf` command lines.
    #[must_use]
    pub fn rendered(&self) -> Vec<String> {
        self.applied().iter().map(WriteOperation::render).collect()
    }
}

impl Executor for RecordingExecutor {
    fn apply(&self, op: &WriteOperation) -> Result<()> {
        let mut applied = self.applied.lock().unwrap();
        if self.fail_after == Some(applied.len()) {
            return Err(ConvertError::ExternalCommandFailed {
                command: op.render(),
            });
        }
        applied.push(op.clone());
        Ok(())
    }
}
