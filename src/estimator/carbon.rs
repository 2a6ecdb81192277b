use crate::quantity::{carbon::KilogramsCo2, energy::KilowattHours, rate::EmissionRate};

/// Carbon mass for the given energy at the given grid intensity.
///
/// The same multiply serves every scope: pass one operation's energy, one
/// part's, or the whole job's.
#[must_use]
pub fn emission(energy: KilowattHours, emission_factor: EmissionRate) -> KilogramsCo2 {
    energy * emission_factor
}
