//! End-of-run scoring, combo evaluation, and ending selection.
//!
//! Pure functions over a terminal [`GameState`]: callable at any time, but
//! only meaningful once `game_over` is set. Predicate evaluation mutates
//! nothing, and because contributing multipliers are multiplied together,
//! the result is independent of table iteration order.

use rugline_types::{ComboDef, ContentPack, EndingDef, GameState};

/// One combo's evaluation in a score breakdown.
#[derive(Debug, Clone, Copy)]
pub struct ComboResult {
    /// The combo definition.
    pub combo: &'static ComboDef,
    /// Whether its predicate held for this run.
    pub applied: bool,
}

/// The full scoring breakdown for a run.
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    /// The base score: total value siphoned.
    pub base_score: f64,
    /// Every combo with its applied flag, in table order.
    pub combos: Vec<ComboResult>,
    /// Product of all applied combo multipliers and the survival bonus.
    pub total_multiplier: f64,
    /// `floor(base * total_multiplier)`.
    pub final_score: f64,
}

/// Survival bonus multiplier for reaching the turn budget.
const SURVIVAL_BONUS: f64 = 1.25;

/// Compute the final score for a run.
pub fn calculate_final_score(content: &ContentPack, state: &GameState) -> ScoreBreakdown {
    let base_score = state.siphoned;
    let combos: Vec<ComboResult> = content
        .combos
        .iter()
        .map(|combo| ComboResult {
            combo,
            applied: (combo.check)(state),
        })
        .collect();

    let combo_multiplier: f64 = combos
        .iter()
        .filter(|result| result.applied)
        .map(|result| result.combo.multiplier)
        .product();
    let survival = if state.turn >= state.max_turns {
        SURVIVAL_BONUS
    } else {
        1.0
    };
    let total_multiplier = combo_multiplier * survival;

    ScoreBreakdown {
        base_score,
        combos,
        total_multiplier,
        final_score: (base_score * total_multiplier).floor(),
    }
}

/// The narrative ending chosen for a terminal state.
///
/// Either a scripted ending from the content table or one of three
/// deterministic fallbacks when no trigger matches.
#[derive(Debug, Clone, PartialEq)]
pub struct EndingSummary {
    /// Ending id (fallback ids start with `fallback_`).
    pub id: String,
    /// Emoji for the end-of-run card.
    pub emoji: String,
    /// Headline.
    pub headline: String,
    /// Secondary line.
    pub subline: String,
    /// Full narrative paragraph.
    pub narrative: String,
    /// Badge for the share card, if any.
    pub badge: Option<String>,
    /// Score multiplier surfaced on the card, if any.
    pub score_multiplier: Option<f64>,
}

impl EndingSummary {
    fn from_def(def: &EndingDef) -> Self {
        Self {
            id: def.id.to_string(),
            emoji: def.emoji.to_string(),
            headline: def.headline.to_string(),
            subline: def.subline.to_string(),
            narrative: def.narrative.to_string(),
            badge: def.badge.map(str::to_string),
            score_multiplier: def.score_multiplier,
        }
    }
}

/// Pick the ending for a terminal state: the highest-weight matching
/// scripted ending, or a deterministic fallback when none match.
pub fn evaluate_ending(content: &ContentPack, state: &GameState) -> EndingSummary {
    let best = content
        .endings
        .iter()
        .filter(|ending| (ending.trigger)(state))
        .max_by_key(|ending| ending.weight);
    if let Some(ending) = best {
        return EndingSummary::from_def(ending);
    }
    fallback_ending(state)
}

fn fallback_ending(state: &GameState) -> EndingSummary {
    let survived = state.turn >= state.max_turns;
    let big_bag = state.siphoned > 200_000_000.0;

    if survived && big_bag {
        return EndingSummary {
            id: String::from("fallback_success"),
            emoji: String::from("🎯"),
            headline: String::from("Clean Getaway"),
            subline: String::from("You survived the regime. Time for that penthouse."),
            narrative: String::from(
                "Twenty cycles of chaos. Somehow you made it. The bag is secured. \
                 The next flight leaves in an hour.",
            ),
            badge: None,
            score_multiplier: None,
        };
    }
    if survived {
        return EndingSummary {
            id: String::from("fallback_survive"),
            emoji: String::from("😐"),
            headline: String::from("Survived... Barely"),
            subline: String::from("You made it out, but barely."),
            narrative: String::from(
                "Could have been worse. Could have been better. At least you're not in prison.",
            ),
            badge: None,
            score_multiplier: None,
        };
    }
    EndingSummary {
        id: String::from("fallback_failed"),
        emoji: String::from("💀"),
        headline: String::from("Game Over"),
        subline: String::from("Your reign has ended."),
        narrative: state
            .game_over_reason
            .clone()
            .unwrap_or_else(|| String::from("The party's over.")),
        badge: None,
        score_multiplier: None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::testutil::baseline_state;
    use rugline_types::EndingCategory;

    fn bag_over_100m(state: &GameState) -> bool {
        state.siphoned > 100_000_000.0
    }

    fn survived_run(state: &GameState) -> bool {
        state.turn >= state.max_turns
    }

    static TEST_COMBOS: &[ComboDef] = &[
        ComboDef {
            id: "bag_holder",
            name: "Bag Holder",
            emoji: "💰",
            description: "Siphoned over 100M",
            multiplier: 1.2,
            check: bag_over_100m,
        },
        ComboDef {
            id: "finisher",
            name: "Finisher",
            emoji: "🏁",
            description: "Reached the final turn",
            multiplier: 1.1,
            check: survived_run,
        },
    ];

    fn always(_s: &GameState) -> bool {
        true
    }

    fn never(_s: &GameState) -> bool {
        false
    }

    static TEST_ENDINGS: &[EndingDef] = &[
        EndingDef {
            id: "low_priority",
            category: EndingCategory::Style,
            emoji: "🙂",
            headline: "Low",
            subline: "",
            narrative: "",
            trigger: always,
            weight: 5,
            badge: None,
            score_multiplier: None,
        },
        EndingDef {
            id: "high_priority",
            category: EndingCategory::Style,
            emoji: "😎",
            headline: "High",
            subline: "",
            narrative: "",
            trigger: always,
            weight: 20,
            badge: Some("Winner"),
            score_multiplier: Some(1.5),
        },
        EndingDef {
            id: "unreachable",
            category: EndingCategory::Style,
            emoji: "🚫",
            headline: "Never",
            subline: "",
            narrative: "",
            trigger: never,
            weight: 99,
            badge: None,
            score_multiplier: None,
        },
    ];

    fn pack() -> ContentPack {
        ContentPack {
            actions: &[],
            events: &[],
            crises: &[],
            seasons: &[],
            endings: TEST_ENDINGS,
            combos: TEST_COMBOS,
        }
    }

    #[test]
    fn base_score_is_the_siphoned_total() {
        let mut state = baseline_state();
        state.siphoned = 42_000_000.0;
        let breakdown = calculate_final_score(&pack(), &state);
        assert_eq!(breakdown.base_score, 42_000_000.0);
    }

    #[test]
    fn applied_multipliers_multiply() {
        let mut state = baseline_state();
        state.siphoned = 200_000_000.0;
        state.turn = state.max_turns; // both combos and survival bonus
        let breakdown = calculate_final_score(&pack(), &state);
        let expected_multiplier = 1.2 * 1.1 * 1.25;
        assert!((breakdown.total_multiplier - expected_multiplier).abs() < 1e-12);
        assert_eq!(
            breakdown.final_score,
            (200_000_000.0 * expected_multiplier).floor()
        );
    }

    #[test]
    fn early_failure_skips_the_survival_bonus() {
        let mut state = baseline_state();
        state.siphoned = 200_000_000.0;
        state.turn = 5;
        state.game_over = true;
        let breakdown = calculate_final_score(&pack(), &state);
        assert!((breakdown.total_multiplier - 1.2).abs() < 1e-12);
    }

    #[test]
    fn breakdown_lists_unapplied_combos() {
        let state = baseline_state(); // siphoned 0, turn 0: nothing applies
        let breakdown = calculate_final_score(&pack(), &state);
        assert_eq!(breakdown.combos.len(), 2);
        assert!(breakdown.combos.iter().all(|c| !c.applied));
        assert_eq!(breakdown.final_score, 0.0);
    }

    #[test]
    fn highest_weight_matching_ending_wins() {
        let state = baseline_state();
        let ending = evaluate_ending(&pack(), &state);
        assert_eq!(ending.id, "high_priority");
        assert_eq!(ending.badge.as_deref(), Some("Winner"));
    }

    #[test]
    fn fallback_uses_the_game_over_reason() {
        let empty = ContentPack {
            actions: &[],
            events: &[],
            crises: &[],
            seasons: &[],
            endings: &[],
            combos: &[],
        };
        let mut state = baseline_state();
        state.game_over = true;
        state.game_over_reason = Some(String::from("DAO coup: the community overthrew you."));
        let ending = evaluate_ending(&empty, &state);
        assert_eq!(ending.id, "fallback_failed");
        assert!(ending.narrative.contains("DAO coup"));
    }

    #[test]
    fn fallback_rewards_a_secured_bag() {
        let empty = ContentPack {
            actions: &[],
            events: &[],
            crises: &[],
            seasons: &[],
            endings: &[],
            combos: &[],
        };
        let mut state = baseline_state();
        state.turn = state.max_turns;
        state.siphoned = 300_000_000.0;
        let ending = evaluate_ending(&empty, &state);
        assert_eq!(ending.id, "fallback_success");
    }
}
