//! Integration test: the full trust-holder surface, end to end.
//!
//! Deployment validation, ownership administration, lookup-bound
//! governance, and delegated trust resolution against one holder.

use trust_holder::{PrincipalId, Resolution, TrustError, TrustHolder, UNKNOWN_TRUST};

const MIN_TRUST: u8 = 1;
const SOME_TRUST: u8 = 50;
const MAX_TRUST: u8 = 100;

/// Deploy the standard holder used by most scenarios: floor 1, ceiling 3.
fn standard_holder() -> (TrustHolder, PrincipalId) {
    let owner = PrincipalId::generate();
    let holder = TrustHolder::new(owner.clone(), 1, 3).expect("standard deploy should succeed");
    (holder, owner)
}

// ── Deployment ────────────────────────────────────────────────────────────────

#[test]
fn deploy_rejects_floor_above_ceiling() {
    let owner = PrincipalId::generate();
    let result = TrustHolder::new(owner, 1, 0);
    assert!(matches!(result, Err(TrustError::InvalidBounds { .. })));
}

#[test]
fn deploy_accepts_floor_below_or_equal_to_ceiling() {
    let owner = PrincipalId::generate();
    assert!(TrustHolder::new(owner.clone(), 1, 2).is_ok());
    assert!(TrustHolder::new(owner, 1, 1).is_ok());
}

#[test]
fn deploy_rejects_zero_floor() {
    let owner = PrincipalId::generate();
    let result = TrustHolder::new(owner, 0, 0);
    assert!(matches!(result, Err(TrustError::InvalidBounds { .. })));
}

#[test]
fn deploy_rejects_attached_value() {
    let owner = PrincipalId::generate();
    let result = TrustHolder::deploy(owner, 1, 1, 10);
    assert!(matches!(
        result,
        Err(TrustError::UnexpectedPayment { amount: 10 })
    ));
}

// ── Ownership administration ──────────────────────────────────────────────────

#[test]
fn only_owner_may_renounce_or_transfer() {
    let (mut holder, owner) = standard_holder();
    let anybody = PrincipalId::generate();

    assert!(matches!(
        holder.renounce_ownership(&anybody),
        Err(TrustError::NotAuthorized)
    ));
    assert!(matches!(
        holder.transfer_ownership(&anybody, anybody.clone()),
        Err(TrustError::NotAuthorized)
    ));
    assert_eq!(holder.owner(), Some(&owner));
}

#[test]
fn owner_transfers_ownership() {
    let (mut holder, owner) = standard_holder();
    let user1 = PrincipalId::generate();

    holder.transfer_ownership(&owner, user1.clone()).unwrap();
    assert_eq!(holder.owner(), Some(&user1));
}

#[test]
fn owner_renounces_ownership() {
    let (mut holder, owner) = standard_holder();

    holder.renounce_ownership(&owner).unwrap();
    assert_eq!(holder.owner(), None);

    // Governance is frozen permanently.
    assert!(holder.set_max_num_lookups(&owner, 5).is_err());
    assert!(holder.set_min_num_lookups(&owner, 2).is_err());
}

// ── Lookup adjustments ────────────────────────────────────────────────────────

#[test]
fn owner_cannot_adjust_floor_down() {
    let (mut holder, owner) = standard_holder();
    let current = holder.min_lookups();

    let result = holder.set_min_num_lookups(&owner, current - 1);
    assert!(matches!(result, Err(TrustError::NotMonotonic { .. })));
    assert_eq!(holder.min_lookups(), current);
}

#[test]
fn owner_adjusts_floor_up() {
    let (mut holder, owner) = standard_holder();
    let current = holder.min_lookups();

    holder.set_min_num_lookups(&owner, current + 1).unwrap();
    assert_eq!(holder.min_lookups(), current + 1);
}

#[test]
fn owner_adjusts_ceiling_both_ways() {
    let (mut holder, owner) = standard_holder();
    let current = holder.max_lookups();

    holder.set_max_num_lookups(&owner, current - 1).unwrap();
    assert_eq!(holder.max_lookups(), current - 1);

    holder.set_max_num_lookups(&owner, current + 1).unwrap();
    assert_eq!(holder.max_lookups(), current + 1);
}

#[test]
fn ceiling_cannot_fall_below_floor() {
    let (mut holder, owner) = standard_holder();
    holder.set_min_num_lookups(&owner, 2).unwrap();

    let result = holder.set_max_num_lookups(&owner, 1);
    assert!(matches!(result, Err(TrustError::InvalidBounds { .. })));
    assert_eq!(holder.max_lookups(), 3);
}

#[test]
fn only_owner_adjusts_lookups() {
    let (mut holder, _) = standard_holder();
    let anybody = PrincipalId::generate();

    assert!(holder.set_max_num_lookups(&anybody, 4).is_err());
    assert!(holder.set_max_num_lookups(&anybody, 2).is_err());
    assert!(holder.set_min_num_lookups(&anybody, 2).is_err());
    assert_eq!(holder.min_lookups(), 1);
    assert_eq!(holder.max_lookups(), 3);
}

// ── User trust values ─────────────────────────────────────────────────────────

#[test]
fn trust_defaults_to_unknown() {
    let (holder, _) = standard_holder();
    let user1 = PrincipalId::generate();
    let subject = PrincipalId::generate();

    let resolution = holder
        .get_public_trust_value(&user1, &subject, 0, 6)
        .unwrap();
    assert_eq!(
        resolution,
        Resolution {
            value: UNKNOWN_TRUST,
            source: user1,
            depth: 0
        }
    );
}

#[test]
fn user_sets_trust_value_directly() {
    let (mut holder, _) = standard_holder();
    let user1 = PrincipalId::generate();
    let subject = PrincipalId::generate();

    holder
        .set_record_trust_value(&user1, &subject, SOME_TRUST)
        .unwrap();

    let resolution = holder
        .get_public_trust_value(&user1, &subject, 0, 6)
        .unwrap();
    assert_eq!(resolution.value, SOME_TRUST);
    assert_eq!(resolution.source, user1);
    assert_eq!(resolution.depth, 0);
}

// ── Record-level delegations ──────────────────────────────────────────────────

#[test]
fn record_delegation_resolves_through_delegate() {
    let (mut holder, _) = standard_holder();
    let user1 = PrincipalId::generate();
    let user2 = PrincipalId::generate();
    let subject = PrincipalId::generate();

    holder
        .set_record_trust_value(&user2, &subject, SOME_TRUST)
        .unwrap();
    holder
        .set_record_trust_delegation(&user1, &subject, user2.clone())
        .unwrap();

    let resolution = holder
        .get_public_trust_value(&user1, &subject, 0, 6)
        .unwrap();
    assert_eq!(resolution.value, SOME_TRUST);
    assert_eq!(resolution.source, user2);
    assert_eq!(resolution.depth, 1);
}

#[test]
fn record_delegation_to_self_fails() {
    let (mut holder, _) = standard_holder();
    let user1 = PrincipalId::generate();
    let subject = PrincipalId::generate();

    let result = holder.set_record_trust_delegation(&user1, &subject, user1.clone());
    assert!(matches!(result, Err(TrustError::SelfDelegation { .. })));
}

#[test]
fn record_delegation_chains_two_levels() {
    let (mut holder, _) = standard_holder();
    let user1 = PrincipalId::generate();
    let user2 = PrincipalId::generate();
    let user3 = PrincipalId::generate();
    let subject = PrincipalId::generate();

    holder
        .set_record_trust_value(&user3, &subject, MIN_TRUST)
        .unwrap();
    holder
        .set_record_trust_delegation(&user2, &subject, user3.clone())
        .unwrap();
    holder
        .set_record_trust_delegation(&user1, &subject, user2.clone())
        .unwrap();

    let resolution = holder
        .get_public_trust_value(&user1, &subject, 0, 6)
        .unwrap();
    assert_eq!(resolution.value, MIN_TRUST);
    assert_eq!(resolution.source, user3);
    assert_eq!(resolution.depth, 2);
}

#[test]
fn record_delegation_fails_past_caller_bound() {
    let (mut holder, _) = standard_holder();
    let user1 = PrincipalId::generate();
    let user2 = PrincipalId::generate();
    let user3 = PrincipalId::generate();
    let subject = PrincipalId::generate();

    // user1 → user2 → user3, and user3 has no value either: the walk
    // needs every hop before it can report unknown.
    holder
        .set_record_trust_delegation(&user2, &subject, user3.clone())
        .unwrap();
    holder
        .set_record_trust_delegation(&user1, &subject, user2.clone())
        .unwrap();
    holder
        .set_default_trust_delegation(&user3, user1.clone())
        .unwrap();

    let result = holder.get_public_trust_value(&user1, &subject, 0, 2);
    assert!(matches!(result, Err(TrustError::DepthExceeded { .. })));
}

#[test]
fn record_delegation_fails_past_governance_ceiling() {
    let owner = PrincipalId::generate();
    let mut holder = TrustHolder::new(owner, 1, 2).unwrap();
    let user1 = PrincipalId::generate();
    let user2 = PrincipalId::generate();
    let user3 = PrincipalId::generate();
    let subject = PrincipalId::generate();

    holder
        .set_record_trust_delegation(&user2, &subject, user3.clone())
        .unwrap();
    holder
        .set_record_trust_delegation(&user1, &subject, user2.clone())
        .unwrap();
    holder
        .set_default_trust_delegation(&user3, user1.clone())
        .unwrap();

    // A generous caller override cannot buy depth past the system ceiling.
    let result = holder.get_public_trust_value(&user1, &subject, 0, 6);
    assert!(matches!(result, Err(TrustError::DepthExceeded { .. })));
}

// ── Default-level delegations ─────────────────────────────────────────────────

#[test]
fn default_delegation_resolves_through_delegate() {
    let (mut holder, _) = standard_holder();
    let user1 = PrincipalId::generate();
    let user2 = PrincipalId::generate();
    let subject = PrincipalId::generate();

    holder
        .set_record_trust_value(&user2, &subject, SOME_TRUST)
        .unwrap();
    holder
        .set_default_trust_delegation(&user1, user2.clone())
        .unwrap();

    let resolution = holder
        .get_public_trust_value(&user1, &subject, 0, 6)
        .unwrap();
    assert_eq!(resolution.value, SOME_TRUST);
    assert_eq!(resolution.source, user2);
    assert_eq!(resolution.depth, 1);
}

#[test]
fn default_delegation_to_self_fails() {
    let (mut holder, _) = standard_holder();
    let user1 = PrincipalId::generate();

    let result = holder.set_default_trust_delegation(&user1, user1.clone());
    assert!(matches!(result, Err(TrustError::SelfDelegation { .. })));
}

#[test]
fn default_delegation_chains_two_levels() {
    let (mut holder, _) = standard_holder();
    let user1 = PrincipalId::generate();
    let user2 = PrincipalId::generate();
    let user3 = PrincipalId::generate();
    let subject = PrincipalId::generate();

    holder
        .set_record_trust_value(&user3, &subject, MIN_TRUST)
        .unwrap();
    holder
        .set_default_trust_delegation(&user2, user3.clone())
        .unwrap();
    holder
        .set_default_trust_delegation(&user1, user2.clone())
        .unwrap();

    let resolution = holder
        .get_public_trust_value(&user1, &subject, 0, 6)
        .unwrap();
    assert_eq!(resolution.value, MIN_TRUST);
    assert_eq!(resolution.source, user3);
    assert_eq!(resolution.depth, 2);
}

// ── Precedence ────────────────────────────────────────────────────────────────

#[test]
fn explicit_value_wins_over_all_delegations() {
    let (mut holder, _) = standard_holder();
    let user1 = PrincipalId::generate();
    let user2 = PrincipalId::generate();
    let user3 = PrincipalId::generate();
    let subject = PrincipalId::generate();

    holder
        .set_record_trust_value(&user1, &subject, MIN_TRUST)
        .unwrap();
    holder
        .set_record_trust_value(&user2, &subject, SOME_TRUST)
        .unwrap();
    holder
        .set_record_trust_value(&user3, &subject, MAX_TRUST)
        .unwrap();

    holder
        .set_default_trust_delegation(&user1, user3.clone())
        .unwrap();
    holder
        .set_record_trust_delegation(&user1, &subject, user2.clone())
        .unwrap();

    let resolution = holder
        .get_public_trust_value(&user1, &subject, 0, 6)
        .unwrap();
    assert_eq!(resolution.value, MIN_TRUST);
    assert_eq!(resolution.source, user1);
    assert_eq!(resolution.depth, 0);
}

#[test]
fn record_delegation_wins_over_default_delegation() {
    let (mut holder, _) = standard_holder();
    let user1 = PrincipalId::generate();
    let user2 = PrincipalId::generate();
    let user3 = PrincipalId::generate();
    let subject = PrincipalId::generate();

    holder
        .set_record_trust_value(&user2, &subject, SOME_TRUST)
        .unwrap();
    holder
        .set_record_trust_value(&user3, &subject, MAX_TRUST)
        .unwrap();

    holder
        .set_default_trust_delegation(&user1, user3.clone())
        .unwrap();
    holder
        .set_record_trust_delegation(&user1, &subject, user2.clone())
        .unwrap();

    let resolution = holder
        .get_public_trust_value(&user1, &subject, 0, 6)
        .unwrap();
    assert_eq!(resolution.value, SOME_TRUST);
    assert_eq!(resolution.source, user2);
    assert_eq!(resolution.depth, 1);
}

// ── End to end ────────────────────────────────────────────────────────────────

#[test]
fn end_to_end_delegated_lookup() {
    let (mut holder, _) = standard_holder();
    let user1 = PrincipalId::generate();
    let user2 = PrincipalId::generate();
    let subject = PrincipalId::generate();

    // User1 sets no value. User2 rates the subject. User1 delegates to
    // User2 for this subject.
    holder
        .set_record_trust_value(&user2, &subject, SOME_TRUST)
        .unwrap();
    holder
        .set_record_trust_delegation(&user1, &subject, user2.clone())
        .unwrap();

    let resolution = holder
        .get_public_trust_value(&user1, &subject, 0, 6)
        .unwrap();
    assert_eq!(
        resolution,
        Resolution {
            value: SOME_TRUST,
            source: user2,
            depth: 1
        }
    );

    // With a zero caller bound the single hop is already too deep.
    let result = holder.get_public_trust_value(&user1, &subject, 0, 0);
    assert!(matches!(result, Err(TrustError::DepthExceeded { .. })));
}

#[test]
fn resolution_is_idempotent_and_open_to_any_caller() {
    let (mut holder, _) = standard_holder();
    let user1 = PrincipalId::generate();
    let user2 = PrincipalId::generate();
    let subject = PrincipalId::generate();

    holder
        .set_record_trust_value(&user2, &subject, SOME_TRUST)
        .unwrap();
    holder
        .set_default_trust_delegation(&user1, user2.clone())
        .unwrap();

    // Anyone may ask on user1's behalf; repeated calls agree.
    let first = holder
        .get_public_trust_value(&user1, &subject, 0, 6)
        .unwrap();
    for _ in 0..5 {
        let again = holder
            .get_public_trust_value(&user1, &subject, 0, 6)
            .unwrap();
        assert_eq!(again, first);
    }
}
