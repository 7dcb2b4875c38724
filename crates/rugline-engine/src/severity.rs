//! Severity tiers for action resolution.
//!
//! Every applied action rolls once on a 1--6 table and lands in one of
//! three tiers. The tier's multiplier rescales the action's meter deltas
//! without changing their direction, so a Critical siphon siphons harder
//! and a Glancing apology barely lands.
//!
//! | Roll  | Tier     | Multiplier |
//! |-------|----------|------------|
//! | 1     | Glancing | 0.5        |
//! | 2--5  | Normal   | 1.0        |
//! | 6     | Critical | 1.5        |

use std::fmt;

use rand::RngCore;
use rugline_types::GameState;

use crate::rng::unit;

/// The three outcome tiers of an action roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTier {
    /// The action lands at half strength.
    Glancing,
    /// The action lands as written.
    Normal,
    /// The action lands at one-and-a-half strength.
    Critical,
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Glancing => "Glancing",
            Self::Normal => "Normal",
            Self::Critical => "Critical",
        };
        f.write_str(label)
    }
}

/// The result of one severity roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Severity {
    /// The tier the roll landed in.
    pub tier: SeverityTier,
    /// The raw 1--6 roll.
    pub roll: u8,
    /// The scaling multiplier carried by the tier.
    pub multiplier: f64,
}

/// Roll a severity tier, consuming one draw.
pub fn roll_severity(rng: &mut dyn RngCore) -> Severity {
    let roll = die_roll(unit(rng));
    let (tier, multiplier) = match roll {
        1 => (SeverityTier::Glancing, 0.5),
        6 => (SeverityTier::Critical, 1.5),
        _ => (SeverityTier::Normal, 1.0),
    };
    Severity {
        tier,
        roll,
        multiplier,
    }
}

/// Map a unit draw onto a 1--6 roll.
// Truncation is the intent: floor(draw * 6) + 1, guarded against the
// upper rounding edge.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn die_roll(draw: f64) -> u8 {
    (((draw * 6.0) as u8).min(5)).saturating_add(1)
}

/// Rescale the six visible meters of `post` around their `pre` values:
/// each becomes `pre + (post - pre) * multiplier`.
///
/// Market fields (`token_price`, `tvl`) and hidden state keep the action's
/// raw effect; the tier amplifies what the player sees on the board, not
/// the market microstructure. Bounds are re-imposed by the caller's
/// normalization pass.
pub fn rescale_meters(pre: &GameState, mut post: GameState, multiplier: f64) -> GameState {
    let scale = |before: f64, after: f64| before + (after - before) * multiplier;
    post.official_treasury = scale(pre.official_treasury, post.official_treasury);
    post.siphoned = scale(pre.siphoned, post.siphoned);
    post.rage = scale(pre.rage, post.rage);
    post.heat = scale(pre.heat, post.heat);
    post.cred = scale(pre.cred, post.cred);
    post.tech_hype = scale(pre.tech_hype, post.tech_hype);
    post
}
