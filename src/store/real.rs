//! Real dconf store access via the `dconf` command-line tool.

use std::process::Command;

use tracing::{debug, trace};

use super::{Executor, ProfileStore};
use crate::dconf::{PROFILES_ROOT, WriteOperation, profile_key};
use crate::error::{ConvertError, Result};
use crate::profile::ProfileRecord;

/// Profile store backed by `dconf list` / `dconf read`.
#[derive(Debug, Default)]
pub struct DconfStore;

impl ProfileStore for DconfStore {
    fn list_profiles(&self) -> Result<Vec<ProfileRecord>> {
        let listing = dconf_query(&["list", &format!("{PROFILES_ROOT}/")])?;

        let mut profiles = Vec::new();
        for line in listing.lines() {
            // Profile entries look like ":<uuid>/"; anything else under the
            // root (e.g. the "list" key itself) is skipped.
            let Some(entry) = line.strip_prefix(':') else {
                continue;
            };
            let id = entry.trim_end_matches('/').to_string();

            let raw = dconf_query(&["read", &profile_key(&id, "visible-name")])?;
            let name = unquote(raw.trim()).to_string();
            trace!(id, name, "read profile");

            profiles.push(ProfileRecord { name, id });
        }

        debug!(count = profiles.len(), "enumerated store profiles");
        Ok(profiles)
    }
}

/// Run a read-only dconf subcommand and return its stdout.
fn dconf_query(args: &[&str]) -> Result<String> {
    let output = Command::new("dconf")
        .args(args)
        .output()
        .map_err(|e| ConvertError::StoreRead(format!("dconf {}: {e}", args.join(" "))))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ConvertError::StoreRead(format!(
            "dconf {} exited with {}: {}",
            args.join(" "),
            output.status,
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Strip the single quotes dconf wraps around string values.
fn unquote(s: &str) -> &str {
    s.strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(s)
}

/// Executor that performs writes through the `dconf` CLI.
#[derive(Debug, Default)]
pub struct DconfExecutor;

impl Executor for DconfExecutor {
    fn apply(&self, op: &WriteOperation) -> Result<()> {
        trace!(path = op.path, value = op.value, "applying write");

        // The rendered form wraps the value in shell quotes; the direct
        // invocation passes it as a single argument instead.
        let status = Command::new("dconf")
            .args(["write", &op.path, &op.value])
            .status()
            .map_err(|_| ConvertError::ExternalCommandFailed {
                command: op.render(),
            })?;

        if !status.success() {
            return Err(ConvertError::ExternalCommandFailed {
                command: op.render(),
            });
        }
        Ok(())
    }
}
