use crate::matrix::Weight;

/// Sentinel weight for "no known finite path" between two vertices.
///
/// Finite path weights must stay strictly below this value; the engine
/// treats any weight at or above it as unreachable when summing path legs,
/// so the sentinel never erodes into a finite-looking distance and sentinel
/// arithmetic can never overflow `i64`. A quarter of the `i64` range leaves
/// ample room for real distances on either side.
pub const NO_PATH: Weight = i64::MAX / 4;
