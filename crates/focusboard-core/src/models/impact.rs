//! Impact rating for tasks.

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Manually assigned impact rating, always one to three stars.
///
/// The only way to obtain a value is through [`TryFrom<u8>`] (or the
/// associated constants), so an out-of-range rating cannot exist.
///
/// ```rust
/// use focusboard_core::models::ImpactStars;
///
/// let stars = ImpactStars::try_from(2)?;
/// assert_eq!(stars.get(), 2);
/// assert!(ImpactStars::try_from(4).is_err());
/// # Ok::<(), focusboard_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ImpactStars(u8);

impl ImpactStars {
    pub const ONE: ImpactStars = ImpactStars(1);
    pub const TWO: ImpactStars = ImpactStars(2);
    pub const THREE: ImpactStars = ImpactStars(3);

    /// Highest possible rating.
    pub const MAX: u8 = 3;

    /// Number of stars.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for ImpactStars {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u8> for ImpactStars {
    type Error = BoardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=Self::MAX => Ok(Self(value)),
            _ => Err(BoardError::invalid_input("impact_stars")
                .with_reason(format!("must be 1, 2 or 3, got {value}"))),
        }
    }
}

impl From<ImpactStars> for u8 {
    fn from(stars: ImpactStars) -> Self {
        stars.0
    }
}
