//! Change feed over the `profiles` table.
//!
//! The table is small (one row per account) so changes are detected by
//! polling and diffing snapshots rather than holding a push channel
//! open. Subscribers get an explicit handle and must unsubscribe when
//! they no longer care; dropping the handle also stops the watcher.

use std::collections::HashMap;
use std::time::Duration;

use shared_types::UserProfile;
use tokio::task::JoinHandle;

use crate::supabase::SupabaseClient;

/// One observed change between two snapshots of the profiles table.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileChange {
    Inserted(UserProfile),
    Updated { old: UserProfile, new: UserProfile },
    Deleted(UserProfile),
}

/// Diff two snapshots. Order of the output is inserts, then updates,
/// then deletes; within each group the order follows `new` (or `old`
/// for deletes).
pub fn diff_profiles(old: &[UserProfile], new: &[UserProfile]) -> Vec<ProfileChange> {
    let old_by_id: HashMap<_, _> = old.iter().map(|p| (p.id, p)).collect();
    let new_by_id: HashMap<_, _> = new.iter().map(|p| (p.id, p)).collect();

    let mut changes = Vec::new();

    for profile in new {
        match old_by_id.get(&profile.id) {
            None => changes.push(ProfileChange::Inserted(profile.clone())),
            Some(previous) if *previous != profile => {
                // deferred so inserts come first
            }
            Some(_) => {}
        }
    }
    for profile in new {
        if let Some(previous) = old_by_id.get(&profile.id) {
            if *previous != profile {
                changes.push(ProfileChange::Updated {
                    old: (*previous).clone(),
                    new: profile.clone(),
                });
            }
        }
    }
    for profile in old {
        if !new_by_id.contains_key(&profile.id) {
            changes.push(ProfileChange::Deleted(profile.clone()));
        }
    }

    changes
}

/// Handle for a running profile watcher. Stops the background task when
/// unsubscribed or dropped.
pub struct ProfileSubscription {
    handle: JoinHandle<()>,
}

impl ProfileSubscription {
    pub fn unsubscribe(self) {
        self.handle.abort();
        tracing::info!("profile watcher unsubscribed");
    }
}

impl Drop for ProfileSubscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawn a background task that polls the profiles table every
/// `interval_secs` and invokes `on_change` for each observed change.
///
/// The first successful poll seeds the baseline snapshot without
/// emitting changes. Failed polls are logged and skipped; the baseline
/// is kept so a transient outage does not replay the whole table as
/// inserts.
pub fn watch_profiles<F>(
    supabase: SupabaseClient,
    interval_secs: u64,
    on_change: F,
) -> ProfileSubscription
where
    F: Fn(ProfileChange) + Send + Sync + 'static,
{
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
        let mut baseline: Option<Vec<UserProfile>> = None;

        loop {
            interval.tick().await;

            let token = supabase.anon_key().to_string();
            let snapshot: Vec<UserProfile> =
                match supabase.select_all(&token, "profiles").await {
                    Ok(rows) => rows,
                    Err(err) => {
                        tracing::warn!(error = %err, "profile poll failed");
                        continue;
                    }
                };

            match &baseline {
                None => {
                    tracing::debug!(count = snapshot.len(), "profile watcher seeded");
                }
                Some(previous) => {
                    for change in diff_profiles(previous, &snapshot) {
                        on_change(change);
                    }
                }
            }
            baseline = Some(snapshot);
        }
    });

    ProfileSubscription { handle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn profile(id: Uuid, role: i32) -> UserProfile {
        UserProfile { id, role }
    }

    #[test]
    fn identical_snapshots_produce_no_changes() {
        let id = Uuid::new_v4();
        let snapshot = vec![profile(id, 0)];
        assert_eq!(diff_profiles(&snapshot, &snapshot), vec![]);
    }

    #[test]
    fn detects_insert() {
        let id = Uuid::new_v4();
        let added = profile(id, 1);
        let changes = diff_profiles(&[], &[added.clone()]);
        assert_eq!(changes, vec![ProfileChange::Inserted(added)]);
    }

    #[test]
    fn detects_role_change() {
        let id = Uuid::new_v4();
        let before = profile(id, 1);
        let after = profile(id, 0);
        let changes = diff_profiles(&[before.clone()], &[after.clone()]);
        assert_eq!(
            changes,
            vec![ProfileChange::Updated {
                old: before,
                new: after
            }]
        );
    }

    #[test]
    fn detects_delete() {
        let id = Uuid::new_v4();
        let gone = profile(id, 2);
        let changes = diff_profiles(&[gone.clone()], &[]);
        assert_eq!(changes, vec![ProfileChange::Deleted(gone)]);
    }

    #[test]
    fn mixed_diff_orders_inserts_updates_deletes() {
        let kept = profile(Uuid::new_v4(), 0);
        let changed_before = profile(Uuid::new_v4(), 1);
        let changed_after = profile(changed_before.id, 0);
        let removed = profile(Uuid::new_v4(), 3);
        let added = profile(Uuid::new_v4(), 2);

        let old = vec![kept.clone(), changed_before.clone(), removed.clone()];
        let new = vec![added.clone(), kept.clone(), changed_after.clone()];

        let changes = diff_profiles(&old, &new);
        assert_eq!(
            changes,
            vec![
                ProfileChange::Inserted(added),
                ProfileChange::Updated {
                    old: changed_before,
                    new: changed_after
                },
                ProfileChange::Deleted(removed),
            ]
        );
    }
}
