//! Scenarios for the profiles change feed: snapshot diffing and the
//! subscription lifecycle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use server::config::BackendConfig;
use server::realtime::{diff_profiles, watch_profiles, ProfileChange};
use server::supabase::SupabaseClient;
use shared_types::UserProfile;
use uuid::Uuid;

fn profile(id: Uuid, role: i32) -> UserProfile {
    UserProfile { id, role }
}

#[test]
fn promoting_a_user_to_admin_surfaces_as_an_update() {
    let id = Uuid::new_v4();
    let before = vec![profile(id, 1)];
    let after = vec![profile(id, 0)];

    let changes = diff_profiles(&before, &after);
    assert_eq!(
        changes,
        vec![ProfileChange::Updated {
            old: profile(id, 1),
            new: profile(id, 0),
        }]
    );
}

#[test]
fn a_new_signup_surfaces_as_an_insert() {
    let existing = profile(Uuid::new_v4(), 0);
    let newcomer = profile(Uuid::new_v4(), 1);

    let changes = diff_profiles(
        std::slice::from_ref(&existing),
        &[existing.clone(), newcomer.clone()],
    );
    assert_eq!(changes, vec![ProfileChange::Inserted(newcomer)]);
}

#[test]
fn a_removed_account_surfaces_as_a_delete() {
    let keeper = profile(Uuid::new_v4(), 0);
    let goner = profile(Uuid::new_v4(), 2);

    let changes = diff_profiles(&[keeper.clone(), goner.clone()], &[keeper]);
    assert_eq!(changes, vec![ProfileChange::Deleted(goner)]);
}

#[test]
fn an_unchanged_table_emits_nothing() {
    let snapshot = vec![profile(Uuid::new_v4(), 0), profile(Uuid::new_v4(), 1)];
    assert!(diff_profiles(&snapshot, &snapshot).is_empty());
}

#[test]
fn reordering_rows_is_not_a_change() {
    let a = profile(Uuid::new_v4(), 0);
    let b = profile(Uuid::new_v4(), 1);
    let changes = diff_profiles(&[a.clone(), b.clone()], &[b, a]);
    assert!(changes.is_empty());
}

#[tokio::test]
async fn unsubscribed_watcher_stops_observing() {
    // an unreachable backend: polls fail, so the observer must stay quiet
    let config = BackendConfig {
        supabase_url: "http://127.0.0.1:9".to_string(),
        supabase_anon_key: "anon".to_string(),
        geocoder_base_url: "http://127.0.0.1:9".to_string(),
        profile_watch_secs: 1,
    };
    let supabase = SupabaseClient::new(&config);

    let fired = Arc::new(AtomicBool::new(false));
    let observer_fired = Arc::clone(&fired);
    let subscription = watch_profiles(supabase, 1, move |_| {
        observer_fired.store(true, Ordering::SeqCst);
    });

    subscription.unsubscribe();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!fired.load(Ordering::SeqCst));
}
