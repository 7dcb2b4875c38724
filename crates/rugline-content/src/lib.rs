//! Standard content pack for the Rugline simulation.
//!
//! Literal tables only: the actions a founder can take, the events and
//! crises the world throws back, the seasons that tilt the odds, and the
//! endings and score combos evaluated when the run is over. All behavior
//! lives in the engine; this crate supplies data the engine is generic
//! over. Extending the game means extending these tables — engine code
//! never changes.

pub mod actions;
pub mod combos;
pub mod crises;
pub mod endings;
pub mod events;
pub mod seasons;

#[cfg(test)]
pub(crate) mod testfix;

use rand::RngCore;
use rugline_types::{ContentPack, GameState};

/// The standard content pack.
///
/// Run [`ContentPack::validate`] once at load time; the tables in this
/// crate are covered by tests, but packs assembled from other sources
/// should not be trusted until validated.
pub static STANDARD: ContentPack = ContentPack {
    actions: actions::ACTIONS,
    events: events::EVENTS,
    crises: crises::CRISES,
    seasons: seasons::SEASONS,
    endings: endings::ENDINGS,
    combos: combos::COMBOS,
};

/// Uniform draw in `[0, 1)` for in-content branching.
///
/// Matches the engine's one-word-per-draw stream convention so content
/// rolls and engine rolls interleave deterministically on one stream.
pub(crate) fn roll(rng: &mut dyn RngCore) -> f64 {
    f64::from(rng.next_u32()) / 4_294_967_296.0
}

/// Prepend a narrative line to the state's log.
pub(crate) fn log(state: &mut GameState, line: String) {
    state.log.insert(0, line);
}

/// Deduct a fraction of the official treasury, returning the amount moved.
///
/// The amount is floored to whole dollars; the engine's normalization pass
/// keeps the treasury non-negative regardless.
pub(crate) fn take_treasury(state: &mut GameState, fraction: f64) -> f64 {
    let amount = (state.official_treasury * fraction).floor();
    state.official_treasury -= amount;
    amount
}

/// Compact dollar formatting for narrative lines (`$1.20B`, `$45.3M`).
pub(crate) fn fmt_usd(amount: f64) -> String {
    if amount >= 1_000_000_000.0 {
        format!("${:.2}B", amount / 1_000_000_000.0)
    } else if amount >= 1_000_000.0 {
        format!("${:.2}M", amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("${:.1}K", amount / 1_000.0)
    } else {
        format!("${amount:.0}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn standard_pack_validates() {
        STANDARD.validate().unwrap();
    }

    #[test]
    fn table_counts_match_the_shipped_content() {
        assert_eq!(STANDARD.actions.len(), 48);
        assert_eq!(STANDARD.events.len(), 9);
        assert_eq!(STANDARD.crises.len(), 12);
        assert_eq!(STANDARD.seasons.len(), 4);
        assert_eq!(STANDARD.endings.len(), 30);
        assert_eq!(STANDARD.combos.len(), 10);
    }

    #[test]
    fn default_season_is_first() {
        assert_eq!(STANDARD.seasons.first().unwrap().id, "meme_summer");
    }

    #[test]
    fn usd_formatting_scales() {
        assert_eq!(fmt_usd(1_234_000_000.0), "$1.23B");
        assert_eq!(fmt_usd(45_300_000.0), "$45.30M");
        assert_eq!(fmt_usd(9_100.0), "$9.1K");
        assert_eq!(fmt_usd(12.0), "$12");
    }
}
