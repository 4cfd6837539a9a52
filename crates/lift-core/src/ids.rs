//! The lift identifier.

use std::fmt;

/// Position of a lift in the fleet, assigned at construction in creation
/// order.  Lower ids were created earlier and win dispatch ties.
///
/// The inner integer is `pub`, but prefer [`index`][Self::index] when
/// indexing per-lift vectors.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiftId(pub u32);

impl LiftId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lift #{}", self.0)
    }
}

impl From<LiftId> for usize {
    fn from(id: LiftId) -> usize {
        id.index()
    }
}

impl TryFrom<usize> for LiftId {
    type Error = std::num::TryFromIntError;

    /// Fails for fleets larger than `u32::MAX`.
    fn try_from(n: usize) -> Result<LiftId, Self::Error> {
        u32::try_from(n).map(LiftId)
    }
}
