//! Content-pack contracts.
//!
//! Actions, events, crises, seasons, endings, and score combos are closed
//! sets of tagged records with a uniform `{eligibility, weight, apply}`
//! shape: plain structs with function-pointer fields, assembled into a
//! [`ContentPack`] registry. The engine is generic over table contents —
//! it never hardcodes cardinality or literal text, only these structural
//! contracts.
//!
//! Contract violations (duplicate ids, a crisis without options, a weight
//! mod naming an unknown event) are programmer errors in the content pack.
//! [`ContentPack::validate`] detects them at load time so the engine can
//! stay total at runtime.

use std::collections::HashSet;
use std::fmt;

use rand::RngCore;

use crate::state::GameState;

/// A pure state transform.
pub type ApplyFn = fn(&GameState) -> GameState;

/// An action transform. Takes the run's RNG stream so in-action branching
/// stays on the single deterministic stream.
pub type ActionApplyFn = fn(&GameState, &mut dyn RngCore) -> GameState;

/// An eligibility predicate over the current state.
pub type PredicateFn = fn(&GameState) -> bool;

/// An event weight, state- and season-dependent. Non-positive means
/// ineligible this turn.
pub type EventWeightFn = fn(&GameState, &SeasonDef) -> f64;

/// A crisis weight. Non-positive means ineligible this turn.
pub type CrisisWeightFn = fn(&GameState) -> f64;

/// First phase of a crisis option: may consume randomness, then fixes the
/// narrative and the pure transform to apply.
pub type ResolveFn = fn(&GameState, &mut dyn RngCore) -> CrisisOutcome;

/// Action menu category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionCategory {
    /// Extraction plays that move treasury value off-chain.
    Siphon,
    /// Votes, freezes, and other protocol-governance maneuvers.
    Governance,
    /// Hype construction: announcements, pivots, papers.
    Narrative,
    /// Damage control and PR.
    DamageControl,
    /// Social plays on crypto twitter and beyond.
    Social,
}

impl ActionCategory {
    /// All categories, in menu display order.
    pub const ALL: [Self; 5] = [
        Self::Siphon,
        Self::Governance,
        Self::Narrative,
        Self::DamageControl,
        Self::Social,
    ];

    /// How many actions of this category each turn's menu offers.
    pub const fn menu_quota(self) -> usize {
        match self {
            Self::Siphon => 2,
            Self::Governance | Self::Narrative | Self::DamageControl | Self::Social => 1,
        }
    }
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Siphon => "Siphon",
            Self::Governance => "Governance",
            Self::Narrative => "Narrative",
            Self::DamageControl => "Damage Control",
            Self::Social => "Social",
        };
        f.write_str(label)
    }
}

/// A player action.
#[derive(Debug, Clone, Copy)]
pub struct ActionDef {
    /// Stable id, unique across the action table.
    pub id: &'static str,
    /// Menu category.
    pub category: ActionCategory,
    /// Display name.
    pub name: &'static str,
    /// Flavor line shown in the menu.
    pub description: &'static str,
    /// Short effect hints for the menu (`"+Siphon"`, `"-Cred"`, ...).
    pub tags: &'static [&'static str],
    /// Defensive actions sharply reduce the chance of a random event on
    /// the turn they are played.
    pub defensive: bool,
    /// Optional eligibility predicate; `None` means always offered.
    pub visible_if: Option<PredicateFn>,
    /// The action's transform.
    pub apply: ActionApplyFn,
}

/// A non-blocking narrative perturbation applied automatically after an
/// action.
#[derive(Debug, Clone, Copy)]
pub struct EventDef {
    /// Stable id, unique across the event table.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Selection weight for this turn.
    pub weight: EventWeightFn,
    /// The event's transform.
    pub apply: ApplyFn,
}

/// Crisis severity band, surfaced to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CrisisSeverity {
    /// Annoying but survivable.
    Low,
    /// Real damage on a bad roll.
    Medium,
    /// Run-threatening.
    High,
    /// The stuff post-mortems are written about.
    Legendary,
}

/// The fixed outcome of a resolved crisis option: the story of what
/// happened plus the pure transform to apply. Only fixed once
/// [`CrisisOption::resolve`] has consumed its randomness — never when the
/// option is merely offered.
pub struct CrisisOutcome {
    /// One-line narrative of how the choice played out.
    pub narrative: String,
    /// The transform to apply to the state.
    pub apply: ApplyFn,
}

impl fmt::Debug for CrisisOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrisisOutcome")
            .field("narrative", &self.narrative)
            .finish_non_exhaustive()
    }
}

/// One way out of a crisis.
#[derive(Debug, Clone, Copy)]
pub struct CrisisOption {
    /// Stable id, unique within the crisis.
    pub id: &'static str,
    /// Button label.
    pub label: &'static str,
    /// Two-phase resolution: roll, then return the fixed outcome.
    pub resolve: ResolveFn,
}

/// A blocking narrative event requiring a player choice before ordinary
/// turns resume.
#[derive(Debug, Clone, Copy)]
pub struct CrisisDef {
    /// Stable id, unique across the crisis table.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Situation text shown in the crisis modal.
    pub description: &'static str,
    /// Severity band.
    pub severity: CrisisSeverity,
    /// Selection weight for this turn.
    pub weight: CrisisWeightFn,
    /// The available ways out. Never empty in a valid pack.
    pub options: &'static [CrisisOption],
}

impl CrisisDef {
    /// Look up an option by id.
    pub fn option(&self, id: &str) -> Option<&'static CrisisOption> {
        self.options.iter().find(|o| o.id == id)
    }
}

/// A named modifier profile active for the duration of a run.
///
/// Decay deltas shift the engine's base per-turn percentage decay rates
/// additively; a negative delta slows decay and can turn it into growth.
#[derive(Debug, Clone, Copy)]
pub struct SeasonDef {
    /// Stable id, unique across the season table.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Flavor line.
    pub description: &'static str,
    /// Additive delta to the rage decay rate.
    pub rage_decay_delta: f64,
    /// Additive delta to the heat decay rate.
    pub heat_decay_delta: f64,
    /// Additive delta to the cred decay rate.
    pub cred_decay_delta: f64,
    /// Additive delta to the tech-hype decay rate.
    pub hype_decay_delta: f64,
    /// Multiplier on the crisis gate probability.
    pub crisis_factor: f64,
    /// Base market volatility for the season.
    pub base_volatility: f64,
    /// Per-event weight multipliers, `(event_id, factor)`. Events not
    /// listed keep factor 1.
    pub event_weight_mods: &'static [(&'static str, f64)],
}

impl SeasonDef {
    /// A no-op season: no decay deltas, neutral crisis factor, moderate
    /// volatility. Used when a state references an unknown season id.
    pub const NEUTRAL: Self = Self {
        id: "neutral",
        name: "Neutral",
        description: "No seasonal modifiers.",
        rage_decay_delta: 0.0,
        heat_decay_delta: 0.0,
        cred_decay_delta: 0.0,
        hype_decay_delta: 0.0,
        crisis_factor: 1.0,
        base_volatility: 0.03,
        event_weight_mods: &[],
    };

    /// Weight multiplier for an event under this season.
    pub fn event_weight_mod(&self, event_id: &str) -> f64 {
        self.event_weight_mods
            .iter()
            .find(|(id, _)| *id == event_id)
            .map_or(1.0, |(_, factor)| *factor)
    }
}

/// Ending flavor category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndingCategory {
    /// Price and liquidity outcomes.
    Market,
    /// Crypto-twitter outcomes.
    Social,
    /// Team and governance outcomes.
    Internal,
    /// Regulatory outcomes.
    Legal,
    /// Hype-cycle outcomes.
    Narrative,
    /// Play-style awards.
    Style,
}

/// A narrative ending evaluated over a terminal state.
#[derive(Debug, Clone, Copy)]
pub struct EndingDef {
    /// Stable id, unique across the ending table.
    pub id: &'static str,
    /// Flavor category.
    pub category: EndingCategory,
    /// Emoji for the end-of-run card.
    pub emoji: &'static str,
    /// Headline.
    pub headline: &'static str,
    /// Secondary line.
    pub subline: &'static str,
    /// Full narrative paragraph.
    pub narrative: &'static str,
    /// Whether this ending applies to the given terminal state.
    pub trigger: PredicateFn,
    /// Tie-break: when several endings match, the highest weight wins.
    pub weight: u32,
    /// Badge for the share card.
    pub badge: Option<&'static str>,
    /// Optional score multiplier surfaced on the end-of-run card.
    pub score_multiplier: Option<f64>,
}

/// An end-of-run scoring bonus triggered by a pattern in the run history.
#[derive(Debug, Clone, Copy)]
pub struct ComboDef {
    /// Stable id, unique across the combo table.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Emoji for the score breakdown.
    pub emoji: &'static str,
    /// What the player did to earn it.
    pub description: &'static str,
    /// Score multiplier contributed when the predicate holds.
    pub multiplier: f64,
    /// The predicate. Must be pure: no state mutation, no randomness.
    pub check: PredicateFn,
}

/// A complete, validated set of content tables.
///
/// Iteration order over each table is its insertion order; the weighted
/// selector depends on that order being stable, so tables are static
/// slices rather than maps.
#[derive(Debug, Clone, Copy)]
pub struct ContentPack {
    /// The action table.
    pub actions: &'static [ActionDef],
    /// The event table.
    pub events: &'static [EventDef],
    /// The crisis table.
    pub crises: &'static [CrisisDef],
    /// The season table. The first entry is the default season.
    pub seasons: &'static [SeasonDef],
    /// The ending table.
    pub endings: &'static [EndingDef],
    /// The score combo table.
    pub combos: &'static [ComboDef],
}

impl ContentPack {
    /// Look up an action by id.
    pub fn action(&self, id: &str) -> Option<&'static ActionDef> {
        self.actions.iter().find(|a| a.id == id)
    }

    /// Look up an event by id.
    pub fn event(&self, id: &str) -> Option<&'static EventDef> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Look up a crisis by id.
    pub fn crisis(&self, id: &str) -> Option<&'static CrisisDef> {
        self.crises.iter().find(|c| c.id == id)
    }

    /// Look up a season by id, falling back to the first season in the
    /// table, then to [`SeasonDef::NEUTRAL`]. Total by design: the engine
    /// treats the season as a pure lookup and must stay defined for every
    /// reachable state.
    pub fn season(&self, id: &str) -> &'static SeasonDef {
        self.seasons
            .iter()
            .find(|s| s.id == id)
            .or_else(|| self.seasons.first())
            .unwrap_or(&SeasonDef::NEUTRAL)
    }

    /// Check the structural contract of every table.
    ///
    /// Intended to run once at content-load time (the CLI does so on
    /// startup, the test suites in their fixtures). A violation is a bug
    /// in the content pack, not a recoverable runtime condition.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.actions.is_empty() {
            return Err(ContentError::EmptyTable { table: "actions" });
        }
        if self.seasons.is_empty() {
            return Err(ContentError::EmptyTable { table: "seasons" });
        }
        Self::check_unique("actions", self.actions.iter().map(|a| a.id))?;
        Self::check_unique("events", self.events.iter().map(|e| e.id))?;
        Self::check_unique("crises", self.crises.iter().map(|c| c.id))?;
        Self::check_unique("seasons", self.seasons.iter().map(|s| s.id))?;
        Self::check_unique("endings", self.endings.iter().map(|e| e.id))?;
        Self::check_unique("combos", self.combos.iter().map(|c| c.id))?;

        for category in ActionCategory::ALL {
            if !self.actions.iter().any(|a| a.category == category) {
                return Err(ContentError::EmptyCategory { category });
            }
        }

        for crisis in self.crises {
            if crisis.options.is_empty() {
                return Err(ContentError::CrisisWithoutOptions {
                    id: crisis.id.to_string(),
                });
            }
            Self::check_unique(crisis.id, crisis.options.iter().map(|o| o.id))?;
        }

        for season in self.seasons {
            for (event_id, _) in season.event_weight_mods {
                if self.event(event_id).is_none() {
                    return Err(ContentError::UnknownEventInWeightMods {
                        season: season.id.to_string(),
                        event: (*event_id).to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    fn check_unique<'a>(
        table: &'static str,
        ids: impl Iterator<Item = &'a str>,
    ) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                return Err(ContentError::DuplicateId {
                    table,
                    id: id.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Errors detected while validating a content pack.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A required table has no entries.
    #[error("content table '{table}' is empty")]
    EmptyTable {
        /// The empty table.
        table: &'static str,
    },

    /// An id appears more than once within a table.
    #[error("duplicate id '{id}' in table '{table}'")]
    DuplicateId {
        /// The table (or crisis id, for option collisions).
        table: &'static str,
        /// The colliding id.
        id: String,
    },

    /// A crisis has no resolution options, which would soft-lock a run.
    #[error("crisis '{id}' has no options")]
    CrisisWithoutOptions {
        /// The malformed crisis.
        id: String,
    },

    /// No action exists for a menu category, so the menu quota for that
    /// category could never be met.
    #[error("no actions in category '{category}'")]
    EmptyCategory {
        /// The unpopulated category.
        category: ActionCategory,
    },

    /// A season's weight-mod table names an event that does not exist.
    #[error("season '{season}' modifies weight of unknown event '{event}'")]
    UnknownEventInWeightMods {
        /// The season carrying the bad entry.
        season: String,
        /// The unknown event id.
        event: String,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn noop_apply(state: &GameState, _rng: &mut dyn RngCore) -> GameState {
        state.clone()
    }

    const TEST_ACTIONS: &[ActionDef] = &[
        ActionDef {
            id: "a1",
            category: ActionCategory::Siphon,
            name: "A1",
            description: "",
            tags: &[],
            defensive: false,
            visible_if: None,
            apply: noop_apply,
        },
        ActionDef {
            id: "a2",
            category: ActionCategory::Governance,
            name: "A2",
            description: "",
            tags: &[],
            defensive: false,
            visible_if: None,
            apply: noop_apply,
        },
        ActionDef {
            id: "a3",
            category: ActionCategory::Narrative,
            name: "A3",
            description: "",
            tags: &[],
            defensive: false,
            visible_if: None,
            apply: noop_apply,
        },
        ActionDef {
            id: "a4",
            category: ActionCategory::DamageControl,
            name: "A4",
            description: "",
            tags: &[],
            defensive: false,
            visible_if: None,
            apply: noop_apply,
        },
        ActionDef {
            id: "a5",
            category: ActionCategory::Social,
            name: "A5",
            description: "",
            tags: &[],
            defensive: false,
            visible_if: None,
            apply: noop_apply,
        },
    ];

    const TEST_SEASONS: &[SeasonDef] = &[SeasonDef::NEUTRAL];

    fn pack() -> ContentPack {
        ContentPack {
            actions: TEST_ACTIONS,
            events: &[],
            crises: &[],
            seasons: TEST_SEASONS,
            endings: &[],
            combos: &[],
        }
    }

    #[test]
    fn valid_pack_passes() {
        pack().validate().unwrap();
    }

    #[test]
    fn empty_actions_fail() {
        let mut p = pack();
        p.actions = &[];
        assert!(matches!(
            p.validate(),
            Err(ContentError::EmptyTable { table: "actions" })
        ));
    }

    #[test]
    fn crisis_without_options_fails() {
        fn weight(_s: &GameState) -> f64 {
            1.0
        }
        static BROKEN: &[CrisisDef] = &[CrisisDef {
            id: "c1",
            name: "C1",
            description: "",
            severity: CrisisSeverity::Low,
            weight,
            options: &[],
        }];
        let mut p = pack();
        p.crises = BROKEN;
        assert!(matches!(
            p.validate(),
            Err(ContentError::CrisisWithoutOptions { .. })
        ));
    }

    #[test]
    fn unknown_season_falls_back_to_first() {
        let p = pack();
        assert_eq!(p.season("nope").id, "neutral");
    }

    #[test]
    fn event_weight_mod_defaults_to_one() {
        let season = SeasonDef::NEUTRAL;
        assert!((season.event_weight_mod("anything") - 1.0).abs() < f64::EPSILON);
    }
}
