//! Passive drift and the market-price model.
//!
//! Drift decays the four pressure meters by a percentage of their current
//! value each turn, so high meters cool fast and low meters barely move.
//! The market step then moves the token price toward a sentiment-derived
//! target with momentum smoothing, lets TVL follow with damping, and
//! re-prices the non-stablecoin portion of the treasury.
//!
//! Draw budget: the market step consumes exactly four unit draws per turn
//! (three for price noise, one for TVL noise), independent of state. A
//! fixed draw count keeps replay streams aligned across branches.

use rand::RngCore;
use rugline_types::{GameState, SeasonDef};

use crate::rng::unit;

/// Base per-turn decay rates before seasonal deltas.
const RAGE_DECAY: f64 = 0.05;
const HEAT_DECAY: f64 = 0.05;
const HYPE_DECAY: f64 = 0.04;
const CRED_DECAY: f64 = 0.02;

/// The token never trades below this.
pub const PRICE_FLOOR: f64 = 0.05;

/// Minimum liquidity: TVL never reads below this.
pub const TVL_FLOOR: f64 = 1_000_000.0;

/// Fraction of the distance to the target price realized each turn.
const MOMENTUM: f64 = 0.5;

/// Damping of TVL's response to the realized price change.
const TVL_PRICE_COUPLING: f64 = 0.5;

/// Rage above this (or cred below [`PANIC_CRED`]) doubles noise volatility.
const PANIC_RAGE: f64 = 85.0;
const PANIC_CRED: f64 = 15.0;

/// Decay the four pressure meters toward zero by a percentage of their
/// current value, shifted by the season's deltas, floored at zero and
/// rounded to one decimal for display stability.
pub fn apply_drift(state: &GameState, season: &SeasonDef) -> GameState {
    let mut next = state.clone();
    next.rage = decay(state.rage, RAGE_DECAY + season.rage_decay_delta);
    next.heat = decay(state.heat, HEAT_DECAY + season.heat_decay_delta);
    next.tech_hype = decay(state.tech_hype, HYPE_DECAY + season.hype_decay_delta);
    next.cred = decay(state.cred, CRED_DECAY + season.cred_decay_delta);
    next
}

fn decay(value: f64, rate: f64) -> f64 {
    round1((value * (1.0 - rate)).max(0.0))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Advance the market one turn: token price, TVL, and treasury exposure.
///
/// The target price is built from three signed sentiment pressures plus
/// bell-shaped noise scaled by season volatility (doubled under panic
/// conditions); the realized price moves [`MOMENTUM`] of the way there.
/// The treasury's stablecoin fraction is insulated from the move; the
/// native remainder re-prices with it.
pub fn apply_market(state: &GameState, season: &SeasonDef, rng: &mut dyn RngCore) -> GameState {
    let mut next = state.clone();

    let hype_pressure = (state.tech_hype - 50.0) / 200.0;
    let fear_drag = (state.rage + state.heat - 100.0) / 300.0;
    let trust_pull = (state.cred - 50.0) / 400.0;
    let pressure = hype_pressure - fear_drag + trust_pull;

    let panic = state.rage > PANIC_RAGE || state.cred < PANIC_CRED;
    let volatility = season.base_volatility * if panic { 2.0 } else { 1.0 };
    // Sum of three unit draws, centered: a cheap bell shape in [-1.5, 1.5].
    let noise = (unit(rng) + unit(rng) + unit(rng) - 1.5) * volatility;

    let target = state.token_price * (1.0 + pressure + noise);
    let realized = (state.token_price + (target - state.token_price) * MOMENTUM).max(PRICE_FLOOR);
    // token_price is always positive (floored), so the division is safe.
    let price_change = (realized - state.token_price) / state.token_price;
    next.token_price = realized;

    let sentiment = (100.0 - state.rage + state.cred) / 200.0;
    let tvl_noise = (unit(rng) - 0.5) * 0.1;
    next.tvl = (state.tvl * (1.0 + price_change * TVL_PRICE_COUPLING + tvl_noise * sentiment))
        .max(TVL_FLOOR);

    let ratio = state.hidden.stablecoin_ratio.clamp(0.0, 1.0);
    let stable = state.official_treasury * ratio;
    let native = state.official_treasury - stable;
    next.official_treasury = (stable + native * (1.0 + price_change)).max(0.0);

    next
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::rng::Mulberry32;
    use crate::testutil::baseline_state;

    #[test]
    fn drift_is_proportional_to_the_meter() {
        let mut high = baseline_state();
        high.rage = 80.0;
        let mut low = baseline_state();
        low.rage = 8.0;

        let season = SeasonDef::NEUTRAL;
        let high_loss = high.rage - apply_drift(&high, &season).rage;
        let low_loss = low.rage - apply_drift(&low, &season).rage;
        assert!(
            high_loss > low_loss,
            "high meters must fall faster ({high_loss} vs {low_loss})"
        );
    }

    #[test]
    fn drift_rounds_to_one_decimal() {
        let mut state = baseline_state();
        state.rage = 33.33;
        let drifted = apply_drift(&state, &SeasonDef::NEUTRAL);
        assert_eq!(drifted.rage, (drifted.rage * 10.0).round() / 10.0);
    }

    #[test]
    fn negative_decay_delta_turns_into_growth() {
        let mut season = SeasonDef::NEUTRAL;
        season.heat_decay_delta = -0.08; // 5% decay becomes 3% growth
        let state = baseline_state();
        let drifted = apply_drift(&state, &season);
        assert!(drifted.heat > state.heat);
    }

    #[test]
    fn drift_never_goes_negative() {
        let mut state = baseline_state();
        state.rage = 0.01;
        state.heat = 0.0;
        let drifted = apply_drift(&state, &SeasonDef::NEUTRAL);
        assert!(drifted.rage >= 0.0);
        assert!(drifted.heat >= 0.0);
    }

    #[test]
    fn market_floors_the_price() {
        let mut state = baseline_state();
        state.token_price = PRICE_FLOOR;
        state.rage = 100.0;
        state.cred = 0.0;
        state.tech_hype = 0.0;
        let mut rng = Mulberry32::new(3);
        for _ in 0..50 {
            state = apply_market(&state, &SeasonDef::NEUTRAL, &mut rng);
            assert!(state.token_price >= PRICE_FLOOR);
            assert!(state.tvl >= TVL_FLOOR);
            assert!(state.official_treasury >= 0.0);
        }
    }

    #[test]
    fn market_consumes_four_draws_per_turn() {
        let state = baseline_state();
        let mut a = Mulberry32::new(21);
        let mut b = Mulberry32::new(21);
        let _ = apply_market(&state, &SeasonDef::NEUTRAL, &mut a);
        for _ in 0..4 {
            let _ = unit(&mut b);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn momentum_halves_the_jump_to_target() {
        // With zero volatility the target is fully determined by pressure,
        // so the realized move must be exactly half the pressure move.
        let mut season = SeasonDef::NEUTRAL;
        season.base_volatility = 0.0;
        let mut state = baseline_state();
        state.tech_hype = 90.0; // strong positive pressure
        let mut rng = Mulberry32::new(8);
        let next = apply_market(&state, &season, &mut rng);

        let hype = (state.tech_hype - 50.0) / 200.0;
        let fear = (state.rage + state.heat - 100.0) / 300.0;
        let trust = (state.cred - 50.0) / 400.0;
        let target = state.token_price * (1.0 + (hype - fear + trust));
        let expected = state.token_price + (target - state.token_price) * 0.5;
        assert!((next.token_price - expected).abs() < 1e-12);
    }

    #[test]
    fn stablecoin_ratio_insulates_the_treasury() {
        let mut season = SeasonDef::NEUTRAL;
        season.base_volatility = 0.0;

        // Identical crash pressure, different stable ratios.
        let mut exposed = baseline_state();
        exposed.rage = 95.0;
        exposed.heat = 80.0;
        exposed.tech_hype = 0.0;
        exposed.cred = 10.0;
        exposed.hidden.stablecoin_ratio = 0.0;
        let mut insulated = exposed.clone();
        insulated.hidden.stablecoin_ratio = 0.8;

        let mut rng_a = Mulberry32::new(4);
        let mut rng_b = Mulberry32::new(4);
        let exposed_after = apply_market(&exposed, &season, &mut rng_a);
        let insulated_after = apply_market(&insulated, &season, &mut rng_b);

        let exposed_loss = exposed.official_treasury - exposed_after.official_treasury;
        let insulated_loss = insulated.official_treasury - insulated_after.official_treasury;
        assert!(exposed_loss > 0.0, "crash pressure should dent the treasury");
        assert!(
            insulated_loss < exposed_loss,
            "stable fraction must absorb the shock ({insulated_loss} vs {exposed_loss})"
        );
    }
}
