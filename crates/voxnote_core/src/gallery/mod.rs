//! Gallery projection of the filtered note sequence.
//!
//! # Responsibility
//! - Project store contents into display items for the current query.
//! - Relay deletion requests back to the store with their notification.
//! - Render creation instants as relative-time labels.
//!
//! # Invariants
//! - The projection is pure: no store mutation, no caching.
//! - Item order equals store order (most recent first).

use crate::model::note::NoteId;
use crate::notify::Notification;
use crate::storage::KeyValueStorage;
use crate::store::note_store::{NoteStore, StoreResult};
use chrono::{DateTime, TimeZone, Utc};

/// Read model for one gallery card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: NoteId,
    pub content: String,
    /// Relative label such as `5 minutes ago`.
    pub created_label: String,
}

/// Projects the notes matching `query` into gallery items.
pub fn view<S: KeyValueStorage>(
    store: &NoteStore<S>,
    query: &str,
    now: DateTime<Utc>,
) -> Vec<GalleryItem> {
    store
        .search(query)
        .into_iter()
        .map(|note| GalleryItem {
            id: note.id,
            content: note.content.clone(),
            created_label: relative_label(note.created_at, now),
        })
        .collect()
}

/// Relays a card's deletion trigger to the store.
///
/// The confirmation notification is produced even for an already-gone id;
/// the card confirms before the store is consulted.
pub fn delete_note<S: KeyValueStorage>(
    store: &mut NoteStore<S>,
    id: NoteId,
) -> StoreResult<Notification> {
    store.delete(id)?;
    Ok(Notification::NoteDeleted)
}

/// Formats `created_at` (epoch milliseconds) relative to `now`.
///
/// Buckets follow the distance wording users saw before: under a minute,
/// minutes, hours, days, months, years, always suffixed with `ago`. Clock
/// skew into the future clamps to the smallest bucket.
pub fn relative_label(created_at: i64, now: DateTime<Utc>) -> String {
    let created = Utc
        .timestamp_millis_opt(created_at)
        .single()
        .unwrap_or(now);
    let seconds = (now - created).num_seconds().max(0);

    match seconds {
        0..=44 => "less than a minute ago".to_string(),
        45..=89 => "1 minute ago".to_string(),
        _ => {
            let minutes = seconds / 60;
            if minutes < 45 {
                format!("{minutes} minutes ago")
            } else if minutes < 90 {
                "about 1 hour ago".to_string()
            } else {
                let hours = minutes / 60;
                if hours < 24 {
                    format!("about {hours} hours ago")
                } else {
                    let days = hours / 24;
                    if days < 2 {
                        "1 day ago".to_string()
                    } else if days < 30 {
                        format!("{days} days ago")
                    } else if days < 60 {
                        "about 1 month ago".to_string()
                    } else if days < 365 {
                        format!("{} months ago", days / 30)
                    } else if days < 730 {
                        "about 1 year ago".to_string()
                    } else {
                        format!("{} years ago", days / 365)
                    }
                }
            }
        }
    }
}
