//! Next-turn action menu sampling.
//!
//! Offering the whole action table every turn overwhelms the player, so
//! each turn deals a stratified hand: eligible actions are partitioned by
//! category and a fixed per-category quota is drawn without replacement
//! with uniform weights. Every category with eligible members is always
//! represented; a category with fewer eligible actions than its quota
//! contributes everything it has.

use rand::RngCore;
use rugline_types::{ActionCategory, ContentPack, GameState};

use crate::select::sample_without_replacement;

/// Deal the action menu for the next turn.
///
/// Returns action ids in category display order (Siphon first). Iteration
/// over the action table is in insertion order, so the same state and
/// draw sequence always deal the same hand.
pub fn sample_menu(content: &ContentPack, state: &GameState, rng: &mut dyn RngCore) -> Vec<String> {
    let mut menu = Vec::new();
    for category in ActionCategory::ALL {
        let pool: Vec<&str> = content
            .actions
            .iter()
            .filter(|action| action.category == category)
            .filter(|action| action.visible_if.is_none_or(|visible| visible(state)))
            .map(|action| action.id)
            .collect();
        let picked = sample_without_replacement(&pool, category.menu_quota(), rng);
        menu.extend(picked.into_iter().map(String::from));
    }
    menu
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::rng::Mulberry32;
    use crate::testutil::baseline_state;
    use rugline_types::ActionDef;

    fn noop(state: &GameState, _rng: &mut dyn RngCore) -> GameState {
        state.clone()
    }

    fn rich_only(state: &GameState) -> bool {
        state.official_treasury > 2_000_000_000.0
    }

    const fn action(id: &'static str, category: ActionCategory) -> ActionDef {
        ActionDef {
            id,
            category,
            name: id,
            description: "",
            tags: &[],
            defensive: false,
            visible_if: None,
            apply: noop,
        }
    }

    static TEST_ACTIONS: &[ActionDef] = &[
        action("s1", ActionCategory::Siphon),
        action("s2", ActionCategory::Siphon),
        action("s3", ActionCategory::Siphon),
        action("g1", ActionCategory::Governance),
        action("g2", ActionCategory::Governance),
        action("n1", ActionCategory::Narrative),
        action("d1", ActionCategory::DamageControl),
        ActionDef {
            id: "d2",
            category: ActionCategory::DamageControl,
            name: "d2",
            description: "",
            tags: &[],
            defensive: false,
            visible_if: Some(rich_only),
            apply: noop,
        },
        action("x1", ActionCategory::Social),
        action("x2", ActionCategory::Social),
    ];

    fn pack() -> ContentPack {
        ContentPack {
            actions: TEST_ACTIONS,
            events: &[],
            crises: &[],
            seasons: &[],
            endings: &[],
            combos: &[],
        }
    }

    #[test]
    fn menu_honors_category_quotas() {
        let state = baseline_state();
        let mut rng = Mulberry32::new(3);
        let menu = sample_menu(&pack(), &state, &mut rng);
        // 2 Siphon + 1 each from the other four categories.
        assert_eq!(menu.len(), 6);
        let siphons = menu.iter().filter(|id| id.starts_with('s')).count();
        assert_eq!(siphons, 2);
    }

    #[test]
    fn menu_never_repeats_an_action() {
        let state = baseline_state();
        let mut rng = Mulberry32::new(41);
        for _ in 0..200 {
            let mut menu = sample_menu(&pack(), &state, &mut rng);
            menu.sort();
            let len = menu.len();
            menu.dedup();
            assert_eq!(menu.len(), len);
        }
    }

    #[test]
    fn hidden_actions_are_not_dealt() {
        let state = baseline_state(); // treasury 1e9: rich_only is false
        let mut rng = Mulberry32::new(5);
        for _ in 0..200 {
            let menu = sample_menu(&pack(), &state, &mut rng);
            assert!(!menu.iter().any(|id| id == "d2"));
        }
    }

    #[test]
    fn eligible_gated_actions_can_appear() {
        let mut state = baseline_state();
        state.official_treasury = 3_000_000_000.0;
        let mut rng = Mulberry32::new(5);
        let appeared = (0..200).any(|_| {
            sample_menu(&pack(), &state, &mut rng)
                .iter()
                .any(|id| id == "d2")
        });
        assert!(appeared, "an eligible gated action should show up eventually");
    }

    #[test]
    fn short_category_contributes_everything() {
        let state = baseline_state();
        let mut rng = Mulberry32::new(13);
        let menu = sample_menu(&pack(), &state, &mut rng);
        // Narrative has a single action; it must always be offered.
        assert!(menu.iter().any(|id| id == "n1"));
    }
}
