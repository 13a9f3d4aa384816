//! Profile resolution against the store's current listing.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// A profile as the store knows it: display name plus its UUID-shaped
/// identifier (the `:<id>` directory under the profiles namespace).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRecord {
    pub name: String,
    pub id: String,
}

/// Outcome of resolving a theme name against the store listing.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Identifier to write the profile under.
    pub id: String,
    /// Full profile list, with the new record appended when one was minted.
    pub profiles: Vec<ProfileRecord>,
    /// True when no existing profile matched and a new id was minted.
    pub created: bool,
}

/// Decide which profile identifier a theme maps to.
///
/// The first record whose name equals `theme_name` exactly (case-sensitive)
/// is reused and the listing is returned unchanged. Otherwise a fresh v4
/// UUID is minted and a new record is appended at the end of the listing.
/// No uniqueness check is made against existing ids; v4 collision odds are
/// negligible. This function never touches the store.
#[must_use]
pub fn resolve(theme_name: &str, profiles: Vec<ProfileRecord>) -> Resolution {
    if let Some(existing) = profiles.iter().find(|p| p.name == theme_name) {
        info!(theme = theme_name, id = %existing.id, "found existing profile, updating it");
        let id = existing.id.clone();
        return Resolution {
            id,
            profiles,
            created: false,
        };
    }

    let id = Uuid::new_v4().to_string();
    info!(theme = theme_name, id = %id, "no existing profile, creating it");

    let mut profiles = profiles;
    profiles.push(ProfileRecord {
        name: theme_name.to_string(),
        id: id.clone(),
    });

    Resolution {
        id,
        profiles,
        created: true,
    }
}
