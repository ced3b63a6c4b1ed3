//! End-to-end scenarios for the sign-in gate decision: the profile
//! lookup outcome fully determines whether a fresh session survives.

use pretty_assertions::assert_eq;
use shared_types::{evaluate_gate, GateDecision, GateDenyReason, UserProfile, ADMIN_ROLE};
use uuid::Uuid;

fn profile_with_role(role: i32) -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        role,
    }
}

#[test]
fn admin_profile_passes_the_gate() {
    let decision = evaluate_gate(Ok(Some(profile_with_role(ADMIN_ROLE))));
    assert_eq!(decision, GateDecision::Allow);
}

#[test]
fn regular_user_is_denied_and_session_revoked() {
    // role=1 signs in with valid credentials but must not reach the
    // dashboard, and must not be left holding a live session
    let decision = evaluate_gate(Ok(Some(profile_with_role(1))));
    assert_eq!(
        decision,
        GateDecision::Deny {
            revoke_session: true,
            reason: GateDenyReason::NotAllowed,
        }
    );
    match decision {
        GateDecision::Deny { reason, .. } => {
            assert_eq!(reason.message(), "User is not allowed to login");
        }
        GateDecision::Allow => unreachable!(),
    }
}

#[test]
fn negative_role_is_denied() {
    let decision = evaluate_gate(Ok(Some(profile_with_role(-1))));
    assert!(matches!(decision, GateDecision::Deny { .. }));
}

#[test]
fn account_without_profile_row_is_denied_and_revoked() {
    let decision = evaluate_gate(Ok(None));
    assert_eq!(
        decision,
        GateDecision::Deny {
            revoke_session: true,
            reason: GateDenyReason::ProfileMissing,
        }
    );
}

#[test]
fn failed_profile_lookup_is_treated_like_a_missing_profile() {
    let decision = evaluate_gate(Err(()));
    assert_eq!(
        decision,
        GateDecision::Deny {
            revoke_session: true,
            reason: GateDenyReason::ProfileMissing,
        }
    );
}

#[test]
fn every_deny_branch_revokes_the_session() {
    for lookup in [Ok(Some(profile_with_role(2))), Ok(None), Err(())] {
        match evaluate_gate(lookup) {
            GateDecision::Deny { revoke_session, .. } => assert!(revoke_session),
            GateDecision::Allow => panic!("expected deny"),
        }
    }
}
