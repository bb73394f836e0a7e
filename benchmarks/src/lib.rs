//! Shared setup helpers for contact-info benchmarks.
//!
//! ## Running
//!
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench contact
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench contact -- results

use contact_info::nalgebra::Vector3;
use contact_info::{BodyIndex, ContactInfo, ContactResults, GeometryId, PenetrationPointPair, Real};

/// Contact `i` of a chain of `n + 1` bodies stacked along z, where body `i`
/// rests on body `i - 1`.
pub fn chain_contact<S: Real>(i: usize, depth: S) -> ContactInfo<S> {
    let c = |x: f64| S::from_f64(x);
    let z = c(i as f64);
    let normal = Vector3::new(c(0.0), c(0.0), c(-1.0));
    let point_on_a = Vector3::new(c(0.0), c(0.0), z);
    let pair = PenetrationPointPair::new(
        GeometryId::new(i as u64),
        GeometryId::new(i as u64 + 1),
        point_on_a,
        point_on_a + normal * depth,
        normal,
        depth,
    );
    ContactInfo::new(
        BodyIndex::new(i as u32),
        BodyIndex::new(i as u32 + 1),
        -normal * (c(1.0e6) * depth),
        pair.midpoint(),
        c(-0.01),
        c(0.0),
        pair,
    )
    .expect("chain contacts are valid")
}

/// Contact results of a chain of `n + 1` bodies.
pub fn setup_chain<S: Real>(n: usize) -> ContactResults<S> {
    (0..n).map(|i| chain_contact(i, S::from_f64(1e-3))).collect()
}
