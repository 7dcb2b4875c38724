//! The score combo table.
//!
//! Combos are end-of-run bonuses triggered by patterns in the action
//! history, crisis survival, or hidden state. Every predicate that holds
//! multiplies into the final score. All predicates are pure.

use rugline_types::{ComboDef, GameState};

/// All combos, in definition order.
pub const COMBOS: &[ComboDef] = &[
    ComboDef {
        id: "meme_god",
        name: "Meme God",
        emoji: "🎉",
        description: "Launched the mascot, a meme coin, and an AI pivot",
        multiplier: 1.15,
        check: c_meme_god,
    },
    ComboDef {
        id: "governance_theater",
        name: "Governance Theater Enjoyer",
        emoji: "🤡",
        description: "Froze governance, forced emissions, bought delegates",
        multiplier: 1.10,
        check: c_governance_theater,
    },
    ComboDef {
        id: "whale_whisperer",
        name: "Whale Whisperer",
        emoji: "🐋",
        description: "Slid into whale DMs three or more times",
        multiplier: 1.08,
        check: c_whale_whisperer,
    },
    ComboDef {
        id: "technically_legal",
        name: "Technically Not Illegal",
        emoji: "🧰",
        description: "Treasury diversification plus MEV extraction",
        multiplier: 1.05,
        check: c_technically_legal,
    },
    ComboDef {
        id: "degen_royalty",
        name: "Degen Royalty",
        emoji: "👑",
        description: "Survived 5+ crises while siphoning more than half the treasury",
        multiplier: 1.20,
        check: c_degen_royalty,
    },
    ComboDef {
        id: "ct_villain",
        name: "CT Villain Arc",
        emoji: "😈",
        description: "Shamed, ratioed, and platformed grifters",
        multiplier: 1.12,
        check: c_ct_villain,
    },
    ComboDef {
        id: "narrative_master",
        name: "Narrative Master",
        emoji: "📣",
        description: "Stacked three or more hype narratives",
        multiplier: 1.15,
        check: c_narrative_master,
    },
    ComboDef {
        id: "crisis_lord",
        name: "Crisis Lord",
        emoji: "🔥",
        description: "Survived 8+ crises",
        multiplier: 1.25,
        check: c_crisis_lord,
    },
    ComboDef {
        id: "siphon_master",
        name: "Siphon Master",
        emoji: "💸",
        description: "Used 6+ different siphon plays",
        multiplier: 1.18,
        check: c_siphon_master,
    },
    ComboDef {
        id: "audit_dodger",
        name: "Audit Dodger",
        emoji: "🕵️",
        description: "High audit risk, never caught",
        multiplier: 1.15,
        check: c_audit_dodger,
    },
];

/// Extraction plays counted by the Siphon Master combo.
const SIPHON_ACTIONS: &[&str] = &[
    "siphon_advisory",
    "strategic_consultants",
    "founder_wage_increase",
    "expense_account",
    "family_office_vehicle",
    "real_estate_hq",
    "token_buyback",
    "foundation_grant",
    "siphon_insurance_fund",
    "shadow_otc_deal",
    "emergency_token_unlock",
    "mev_sandwich_fund",
    "treasury_diversification",
];

fn has_action(s: &GameState, id: &str) -> bool {
    s.used_action_ids.iter().any(|used| used == id)
}

fn count_actions(s: &GameState, ids: &[&str]) -> usize {
    s.used_action_ids
        .iter()
        .filter(|used| ids.contains(&used.as_str()))
        .count()
}

fn c_meme_god(s: &GameState) -> bool {
    has_action(s, "meme_mascot_campaign")
        && has_action(s, "meme_coin_launch")
        && has_action(s, "ai_pivot")
}

fn c_governance_theater(s: &GameState) -> bool {
    has_action(s, "freeze_governance")
        && has_action(s, "emergency_emissions_vote")
        && has_action(s, "delegate_program")
}

fn c_whale_whisperer(s: &GameState) -> bool {
    count_actions(s, &["dm_whale"]) >= 3
}

fn c_technically_legal(s: &GameState) -> bool {
    has_action(s, "treasury_diversification") && has_action(s, "mev_sandwich_fund")
}

fn c_degen_royalty(s: &GameState) -> bool {
    s.crisis_count >= 5 && s.siphoned > s.official_treasury * 0.5
}

fn c_ct_villain(s: &GameState) -> bool {
    count_actions(s, &["screenshot_shame", "qt_ratio_war", "grifter_spaces"]) >= 2
}

fn c_narrative_master(s: &GameState) -> bool {
    count_actions(
        s,
        &[
            "zk_something",
            "depin_tweet",
            "rwa_tokenization",
            "institutions_soon",
            "ai_pivot",
        ],
    ) >= 3
}

fn c_crisis_lord(s: &GameState) -> bool {
    s.crisis_count >= 8
}

fn c_siphon_master(s: &GameState) -> bool {
    let mut unique: Vec<&str> = s
        .used_action_ids
        .iter()
        .map(String::as_str)
        .filter(|id| SIPHON_ACTIONS.contains(id))
        .collect();
    unique.sort_unstable();
    unique.dedup();
    unique.len() >= 6
}

fn c_audit_dodger(s: &GameState) -> bool {
    s.turn >= s.max_turns && s.hidden.audit_risk > 0.5
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::actions::ACTIONS;
    use crate::testfix::fresh_state;

    #[test]
    fn combo_predicates_reference_real_action_ids() {
        // Every id a combo counts must exist in the action table; a typo
        // here silently makes the combo unreachable.
        let known: Vec<&str> = ACTIONS.iter().map(|a| a.id).collect();
        let referenced = [
            "meme_mascot_campaign",
            "meme_coin_launch",
            "ai_pivot",
            "freeze_governance",
            "emergency_emissions_vote",
            "delegate_program",
            "dm_whale",
            "treasury_diversification",
            "mev_sandwich_fund",
            "screenshot_shame",
            "qt_ratio_war",
            "grifter_spaces",
            "zk_something",
            "depin_tweet",
            "rwa_tokenization",
            "institutions_soon",
        ];
        for id in referenced {
            assert!(known.contains(&id), "combo references unknown action '{id}'");
        }
        for id in SIPHON_ACTIONS {
            assert!(known.contains(id), "siphon list references unknown action '{id}'");
        }
    }

    #[test]
    fn whale_whisperer_counts_repeats() {
        let mut state = fresh_state();
        state.used_action_ids = vec![String::from("dm_whale"); 3];
        assert!(c_whale_whisperer(&state));
        state.used_action_ids.pop();
        assert!(!c_whale_whisperer(&state));
    }

    #[test]
    fn siphon_master_requires_distinct_plays() {
        let mut state = fresh_state();
        state.used_action_ids = vec![String::from("siphon_advisory"); 10];
        assert!(!c_siphon_master(&state));
        state.used_action_ids = [
            "siphon_advisory",
            "strategic_consultants",
            "expense_account",
            "token_buyback",
            "foundation_grant",
            "shadow_otc_deal",
        ]
        .iter()
        .map(|id| String::from(*id))
        .collect();
        assert!(c_siphon_master(&state));
    }

    #[test]
    fn degen_royalty_compares_bag_to_remaining_treasury() {
        let mut state = fresh_state();
        state.crisis_count = 5;
        state.siphoned = 400_000_000.0;
        state.official_treasury = 600_000_000.0;
        assert!(c_degen_royalty(&state));
        state.siphoned = 100_000_000.0;
        assert!(!c_degen_royalty(&state));
    }

    #[test]
    fn audit_dodger_requires_surviving_the_run() {
        let mut state = fresh_state();
        state.hidden.audit_risk = 0.8;
        assert!(!c_audit_dodger(&state));
        state.turn = state.max_turns;
        assert!(c_audit_dodger(&state));
    }

    #[test]
    fn fresh_state_earns_no_combos() {
        let state = fresh_state();
        for combo in COMBOS {
            assert!(!(combo.check)(&state), "{} applied to a fresh run", combo.id);
        }
    }
}
