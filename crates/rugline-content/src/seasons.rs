//! The season table.
//!
//! A season is a read-only modifier profile fixed for the run: additive
//! deltas on the engine's base percentage decay rates, a crisis-gate
//! factor, the market's base volatility, and per-event weight multipliers.
//! The first entry is the default season.

use rugline_types::SeasonDef;

/// All seasons, in definition order.
pub const SEASONS: &[SeasonDef] = &[
    SeasonDef {
        id: "meme_summer",
        name: "Meme Coin Summer",
        description: "Rage cools fast and nobody reads the fine print; siphons feel easy.",
        rage_decay_delta: 0.02,
        heat_decay_delta: 0.0,
        cred_decay_delta: 0.0,
        hype_decay_delta: 0.0,
        crisis_factor: 0.9,
        base_volatility: 0.05,
        event_weight_mods: &[
            ("meme_coin_summer", 3.0),
            ("founder_meltdown", 0.6),
            ("solana_outage", 1.2),
        ],
    },
    SeasonDef {
        id: "regulator_season",
        name: "Regulator Season",
        description: "Heat accumulates on its own and crises come knocking more often.",
        rage_decay_delta: 0.0,
        // 5% decay becomes 3% passive growth.
        heat_decay_delta: -0.08,
        cred_decay_delta: 0.0,
        hype_decay_delta: 0.0,
        crisis_factor: 1.3,
        base_volatility: 0.02,
        event_weight_mods: &[
            ("influencer_thread", 1.5),
            ("conference_backroom_rumour", 1.2),
        ],
    },
    SeasonDef {
        id: "builder_winter",
        name: "Builder Winter",
        description: "Credibility bleeds, the community is bored, and rage refuses to fade.",
        // Rage stops decaying entirely.
        rage_decay_delta: -0.05,
        heat_decay_delta: 0.0,
        cred_decay_delta: 0.03,
        hype_decay_delta: -0.01,
        crisis_factor: 1.1,
        base_volatility: 0.03,
        event_weight_mods: &[("cofounder_ragequit", 1.4)],
    },
    SeasonDef {
        id: "conference_quarter",
        name: "Conference Quarter",
        description: "Hype sticks around and the afterparty circuit breeds scandal.",
        rage_decay_delta: 0.0,
        heat_decay_delta: 0.0,
        cred_decay_delta: 0.0,
        hype_decay_delta: -0.02,
        crisis_factor: 1.1,
        base_volatility: 0.04,
        event_weight_mods: &[
            ("influencer_thread", 1.3),
            ("influencer_livestream", 1.4),
            ("conference_backroom_rumour", 1.4),
            ("vc_tweetstorm", 1.2),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hype_seasons_are_more_volatile_than_regulatory_ones() {
        let meme = SEASONS.iter().find(|s| s.id == "meme_summer").map(|s| s.base_volatility);
        let reg = SEASONS
            .iter()
            .find(|s| s.id == "regulator_season")
            .map(|s| s.base_volatility);
        assert!(meme > reg);
    }

    #[test]
    fn crisis_factors_stay_in_a_sane_band() {
        for season in SEASONS {
            assert!(
                (0.5..=2.0).contains(&season.crisis_factor),
                "{} has factor {}",
                season.id,
                season.crisis_factor
            );
        }
    }
}
