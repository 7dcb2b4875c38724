//! Headless autoplay runner for the Rugline simulation.
//!
//! Plays a full run from a seed with uniformly random choices — a
//! balancing and regression harness, not the product UI. The web
//! presentation layer consumes the same engine through the same entry
//! points; this binary exists so a run can be reproduced, bisected, and
//! eyeballed from a terminal.
//!
//! # Startup sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load run settings (`rugline.toml` + `RUGLINE_*` env)
//! 3. Validate the standard content pack
//! 4. Build the initial state and play until the run ends
//! 5. Log the score breakdown and the chosen ending

mod config;
mod error;

use rand::RngCore;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rugline_content::STANDARD;
use rugline_engine::{
    Mulberry32, calculate_final_score, evaluate_ending, initial_state, resolve_crisis_option,
    sample_without_replacement, step,
};
use rugline_types::GameState;

use crate::config::RunSettings;

fn main() -> anyhow::Result<()> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // 2. Load run settings.
    let settings = RunSettings::load()?;
    info!(
        seed = settings.seed,
        chain = %settings.chain_name,
        ticker = %settings.ticker,
        season = %settings.season_id,
        max_turns = settings.max_turns,
        "Run settings loaded"
    );

    // 3. Validate the content pack before anything rolls.
    STANDARD.validate().map_err(error::CliError::from)?;
    info!(
        actions = STANDARD.actions.len(),
        events = STANDARD.events.len(),
        crises = STANDARD.crises.len(),
        seasons = STANDARD.seasons.len(),
        "Content pack validated"
    );

    // 4. Play the run.
    let mut rng = Mulberry32::new(settings.seed);
    let mut state = initial_state(&settings.run_config(), &STANDARD, &mut rng);
    info!(
        treasury = state.official_treasury,
        tvl = state.tvl,
        price = state.token_price,
        "Run started"
    );

    // Each loop iteration either resolves a crisis or plays a turn, so the
    // budget bounds total iterations even with a crisis before every turn.
    let budget = settings.max_turns.saturating_mul(4);
    for _ in 0..budget {
        if state.game_over {
            break;
        }
        if let Some(crisis_id) = state.pending_crisis.clone() {
            state = play_crisis(&state, &crisis_id, &mut rng);
        } else {
            state = play_turn(&state, &mut rng);
        }
    }

    // 5. Report the outcome.
    let breakdown = calculate_final_score(&STANDARD, &state);
    let ending = evaluate_ending(&STANDARD, &state);
    for result in breakdown.combos.iter().filter(|c| c.applied) {
        info!(
            combo = result.combo.name,
            multiplier = result.combo.multiplier,
            "Combo earned"
        );
    }
    info!(
        turns = state.turn,
        crises = state.crisis_count,
        siphoned = state.siphoned,
        reason = state.game_over_reason.as_deref().unwrap_or("still running"),
        "Run finished"
    );
    info!(
        base = breakdown.base_score,
        multiplier = breakdown.total_multiplier,
        score = breakdown.final_score,
        ending = %ending.headline,
        badge = ending.badge.as_deref().unwrap_or("none"),
        "Final score"
    );

    Ok(())
}

/// Play one ordinary turn with a uniformly chosen menu action.
fn play_turn(state: &GameState, rng: &mut dyn RngCore) -> GameState {
    let menu: Vec<&str> = state.available_actions.iter().map(String::as_str).collect();
    let Some(&choice) = sample_without_replacement(&menu, 1, rng).first() else {
        debug!("empty menu; skipping the turn with a no-op action id");
        return step(&STANDARD, state, "noop", rng);
    };
    debug!(turn = state.turn, action = choice, "Playing action");
    step(&STANDARD, state, choice, rng)
}

/// Resolve the pending crisis with a uniformly chosen option.
fn play_crisis(state: &GameState, crisis_id: &str, rng: &mut dyn RngCore) -> GameState {
    let Some(crisis) = STANDARD.crisis(crisis_id) else {
        // Unknown id would no-op forever; drop the flag and move on.
        let mut next = state.clone();
        next.pending_crisis = None;
        return next;
    };
    let options: Vec<&str> = crisis.options.iter().map(|o| o.id).collect();
    let Some(&choice) = sample_without_replacement(&options, 1, rng).first() else {
        let mut next = state.clone();
        next.pending_crisis = None;
        return next;
    };
    info!(crisis = crisis.name, option = choice, "Resolving crisis");
    let resolution = resolve_crisis_option(&STANDARD, state, choice, rng);
    info!(outcome = %resolution.narrative, "Crisis resolved");
    resolution.state
}
