//! External collaborator seams for the dconf store.
//!
//! The pipeline itself is pure; everything that touches the real store
//! goes through these two traits. `DconfStore`/`DconfExecutor` shell out
//! to the `dconf` CLI, `PrintingExecutor` implements simulate mode, and
//! the mock module provides doubles for tests without a dconf install.

pub mod mock;
mod real;

pub use real::{DconfExecutor, DconfStore};

use crate::dconf::WriteOperation;
use crate::error::Result;
use crate::profile::ProfileRecord;

/// Read access to the store's profile listing.
pub trait ProfileStore {
    /// Enumerate the profiles currently in the store, in listing order.
    ///
    /// # Errors
    ///
    /// Returns `StoreRead` if the store cannot be queried.
    fn list_profiles(&self) -> Result<Vec<ProfileRecord>>;
}

/// Applies write operations, for real or otherwise.
///
/// Implementations must handle operations strictly in the order given
/// and stop at the first failure; there is no rollback of earlier writes.
pub trait Executor {
    /// Apply a single write operation.
    ///
    /// # Errors
    ///
    /// Returns `ExternalCommandFailed` if a real write does not succeed.
    fn apply(&self, op: &WriteOperation) -> Result<()>;
}

/// Type alias for a boxed executor, selected once at startup.
pub type BoxedExecutor = Box<dyn Executor>;

/// Simulate-mode executor: prints each operation as a `dconf` command
/// line instead of applying it. Output is byte-identical across runs
/// given identical inputs, which is what golden tests rely on.
#[derive(Debug, Default)]
pub struct PrintingExecutor;

impl Executor for PrintingExecutor {
    fn apply(&self, op: &WriteOperation) -> Result<()> {
        println!("{}", op.render());
        Ok(())
    }
}
