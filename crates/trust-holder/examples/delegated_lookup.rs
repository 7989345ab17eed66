//! Delegated lookup — rate, delegate, and resolve trust through a chain.
//!
//! Run with:
//!   cargo run --example delegated_lookup -p trust-holder

use trust_holder::{PrincipalId, TrustError, TrustHolder};

fn main() {
    env_logger::init();

    // ── Setup: an owner and three users ─────────────────────────────────────
    let owner = PrincipalId::generate();
    let alice = PrincipalId::generate();
    let bob = PrincipalId::generate();
    let carol = PrincipalId::generate();
    let shop = PrincipalId::generate();

    println!("Principals:");
    println!("  Owner: {owner}");
    println!("  Alice: {alice}");
    println!("  Bob:   {bob}");
    println!("  Carol: {carol}");
    println!("  Shop (subject): {shop}");
    println!();

    // ── 1. Deploy with lookup bounds ────────────────────────────────────────
    //
    // The owner fixes the depth floor and ceiling at deployment; both are
    // validated, and no payment is accepted.
    let mut holder = TrustHolder::new(owner.clone(), 1, 3).expect("deploy should succeed");
    println!(
        "Deployed: lookups {}..={}",
        holder.min_lookups(),
        holder.max_lookups()
    );
    println!();

    // ── 2. Nothing configured: unknown ──────────────────────────────────────
    let r = holder
        .get_public_trust_value(&alice, &shop, 0, 6)
        .expect("resolution should succeed");
    println!("Alice → Shop before any rating:");
    println!("  value={} source={} depth={}", r.value, r.source, r.depth);
    println!();

    // ── 3. Carol rates the shop; Bob defers to Carol; Alice defers to Bob ──
    holder
        .set_record_trust_value(&carol, &shop, 85)
        .expect("rating should store");
    holder
        .set_record_trust_delegation(&bob, &shop, carol.clone())
        .expect("record delegation should store");
    holder
        .set_default_trust_delegation(&alice, bob.clone())
        .expect("default delegation should store");

    println!("Configured: Carol rates 85, Bob → Carol (record), Alice → Bob (default)");

    let r = holder
        .get_public_trust_value(&alice, &shop, 0, 6)
        .expect("resolution should succeed");
    println!("Alice → Shop resolves through the chain:");
    println!("  value={} source={} depth={}", r.value, r.source, r.depth);
    assert_eq!(r.value, 85);
    assert_eq!(r.depth, 2);
    println!();

    // ── 4. An explicit value always wins ────────────────────────────────────
    holder
        .set_record_trust_value(&alice, &shop, 20)
        .expect("rating should store");
    let r = holder
        .get_public_trust_value(&alice, &shop, 0, 6)
        .expect("resolution should succeed");
    println!("After Alice rates 20 herself (delegation untouched):");
    println!("  value={} source={} depth={}", r.value, r.source, r.depth);
    assert_eq!(r.value, 20);
    assert_eq!(r.depth, 0);
    println!();

    // ── 5. Depth bounds fail fast ───────────────────────────────────────────
    //
    // Bob's view of the shop needs one hop; a zero caller bound forbids it.
    match holder.get_public_trust_value(&bob, &shop, 0, 0) {
        Err(TrustError::DepthExceeded { depth, ceiling }) => {
            println!("Bob → Shop with caller bound 0: depth {depth} exceeds ceiling {ceiling}");
        }
        other => panic!("expected DepthExceeded, got {other:?}"),
    }

    // ── 6. Governance: the floor only rises ─────────────────────────────────
    holder
        .set_min_num_lookups(&owner, 2)
        .expect("owner raises the floor");
    let lowered = holder.set_min_num_lookups(&owner, 1);
    println!(
        "Raising the floor to 2 succeeded; lowering it back: {:?}",
        lowered.unwrap_err()
    );

    println!();
    println!("All operations completed successfully.");
}
