//! The event table.
//!
//! Events are non-blocking perturbations applied automatically after an
//! action. Each carries a state-dependent weight (zero means ineligible
//! this turn); seasons multiply weights per id on top. Transforms change
//! meters and prepend a log line; the engine owns the recent-events
//! window, so nothing here touches it.

use rugline_types::{EventDef, GameState, SeasonDef};

use crate::log;

/// All events, in definition order.
pub const EVENTS: &[EventDef] = &[
    EventDef {
        id: "founder_meltdown",
        name: "Founder Meltdown in Discord",
        weight: w_founder_meltdown,
        apply: a_founder_meltdown,
    },
    EventDef {
        id: "influencer_thread",
        name: "Influencer Threads You",
        weight: w_influencer_thread,
        apply: a_influencer_thread,
    },
    EventDef {
        id: "vitalik_tag",
        name: "Vitalik Replies",
        weight: w_vitalik_tag,
        apply: a_vitalik_tag,
    },
    EventDef {
        id: "meme_coin_summer",
        name: "Meme Coin Summer",
        weight: w_meme_coin_summer,
        apply: a_meme_coin_summer,
    },
    EventDef {
        id: "influencer_livestream",
        name: "Influencer Livestream Slip-up",
        weight: w_influencer_livestream,
        apply: a_influencer_livestream,
    },
    EventDef {
        id: "conference_backroom_rumour",
        name: "Conference Backroom Rumour",
        weight: w_backroom_rumour,
        apply: a_backroom_rumour,
    },
    EventDef {
        id: "cofounder_ragequit",
        name: "Co-Founder Rage Quits",
        weight: w_cofounder_ragequit,
        apply: a_cofounder_ragequit,
    },
    EventDef {
        id: "vc_tweetstorm",
        name: "VC Tweetstorm",
        weight: w_vc_tweetstorm,
        apply: a_vc_tweetstorm,
    },
    EventDef {
        id: "solana_outage",
        name: "Solana Outage",
        weight: w_solana_outage,
        apply: a_solana_outage,
    },
];

fn w_founder_meltdown(s: &GameState, _season: &SeasonDef) -> f64 {
    if s.rage > 50.0 { 2.0 } else { 0.3 }
}

fn a_founder_meltdown(s: &GameState) -> GameState {
    let mut next = s.clone();
    next.rage += 15.0;
    next.cred -= 15.0;
    next.hidden.founder_stability -= 0.2;
    next.hidden.community_memory += 0.1;
    log(
        &mut next,
        String::from("You argued with a 19-year-old anon in Discord for 3 hours. Screenshots everywhere."),
    );
    next
}

fn w_influencer_thread(s: &GameState, _season: &SeasonDef) -> f64 {
    if s.hidden.audit_risk > 0.2 { 2.0 } else { 0.5 }
}

fn a_influencer_thread(s: &GameState) -> GameState {
    let mut next = s.clone();
    next.rage += 10.0;
    next.heat += 10.0;
    log(
        &mut next,
        String::from("An influencer posts a 19-tweet thread about your treasury flows."),
    );
    next
}

fn w_vitalik_tag(s: &GameState, _season: &SeasonDef) -> f64 {
    if s.cred > 60.0 { 1.5 } else { 0.05 }
}

fn a_vitalik_tag(s: &GameState) -> GameState {
    let mut next = s.clone();
    next.cred += 20.0;
    next.heat += 5.0;
    log(
        &mut next,
        String::from("Vitalik replies to your post with something ambiguous but positive."),
    );
    next
}

fn w_meme_coin_summer(_s: &GameState, _season: &SeasonDef) -> f64 {
    0.1
}

fn a_meme_coin_summer(s: &GameState) -> GameState {
    let mut next = s.clone();
    next.rage -= 15.0;
    next.tech_hype += 5.0;
    log(
        &mut next,
        String::from("Meme Coin Summer hits. Everyone is distracted by penguin coins."),
    );
    next
}

fn w_influencer_livestream(s: &GameState, _season: &SeasonDef) -> f64 {
    if s.cred > 30.0 { 0.8 } else { 0.3 }
}

fn a_influencer_livestream(s: &GameState) -> GameState {
    let mut next = s.clone();
    // A community that remembers past incidents reacts harder.
    let rage_spike = if s.hidden.community_memory > 0.3 { 25.0 } else { 15.0 };
    next.rage += rage_spike;
    next.heat += 10.0;
    next.cred -= 10.0;
    next.hidden.community_memory += 0.1;
    log(
        &mut next,
        String::from("You rambled on a livestream and hinted at token plans. Clips go viral."),
    );
    next
}

fn w_backroom_rumour(s: &GameState, _season: &SeasonDef) -> f64 {
    if s.tech_hype > 20.0 { 0.9 } else { 0.3 }
}

fn a_backroom_rumour(s: &GameState) -> GameState {
    let mut next = s.clone();
    next.cred += 10.0;
    next.heat += 8.0;
    log(
        &mut next,
        String::from("Backroom whispers say your protocol has a secret partnership."),
    );
    next
}

fn w_cofounder_ragequit(s: &GameState, _season: &SeasonDef) -> f64 {
    if s.hidden.founder_stability < 0.6 { 0.8 } else { 0.1 }
}

fn a_cofounder_ragequit(s: &GameState) -> GameState {
    let mut next = s.clone();
    next.cred -= 25.0;
    next.rage += 10.0;
    next.hidden.founder_stability = (next.hidden.founder_stability - 0.4).max(0.0);
    log(
        &mut next,
        String::from("Your co-founder posts a long goodbye note. The community panics."),
    );
    next
}

fn w_vc_tweetstorm(_s: &GameState, _season: &SeasonDef) -> f64 {
    0.6
}

fn a_vc_tweetstorm(s: &GameState) -> GameState {
    let mut next = s.clone();
    next.tech_hype += 30.0;
    next.heat += 10.0;
    next.cred += 5.0;
    log(
        &mut next,
        String::from("A top VC threads your protocol as \"the future of everything\"."),
    );
    next
}

fn w_solana_outage(_s: &GameState, _season: &SeasonDef) -> f64 {
    0.3
}

fn a_solana_outage(s: &GameState) -> GameState {
    let mut next = s.clone();
    next.rage -= 15.0;
    next.heat -= 5.0;
    next.tech_hype += 5.0;
    log(
        &mut next,
        String::from("Solana goes down; everyone stops yelling at you for a moment."),
    );
    next
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::testfix::fresh_state as state;

    #[test]
    fn weights_are_never_negative() {
        let calm = state();
        let mut stressed = state();
        stressed.rage = 95.0;
        stressed.cred = 5.0;
        stressed.hidden.audit_risk = 1.2;
        stressed.hidden.founder_stability = -0.5;
        let season = SeasonDef::NEUTRAL;
        for event in EVENTS {
            for s in [&calm, &stressed] {
                let w = (event.weight)(s, &season);
                assert!(w >= 0.0, "{} returned weight {w}", event.id);
            }
        }
    }

    #[test]
    fn audit_risk_feeds_the_thread_event() {
        let mut risky = state();
        risky.hidden.audit_risk = 0.5;
        let season = SeasonDef::NEUTRAL;
        assert!(w_influencer_thread(&risky, &season) > w_influencer_thread(&state(), &season));
    }

    #[test]
    fn every_event_logs_a_narrative_line() {
        let base = state();
        for event in EVENTS {
            let next = (event.apply)(&base);
            assert_eq!(
                next.log.len(),
                base.log.len() + 1,
                "{} did not log",
                event.id
            );
        }
    }

    #[test]
    fn community_memory_hardens_the_livestream_spike() {
        let fresh = a_influencer_livestream(&state());
        let mut grudge = state();
        grudge.hidden.community_memory = 0.5;
        let scarred = a_influencer_livestream(&grudge);
        assert!(scarred.rage - grudge.rage > fresh.rage - state().rage);
    }
}
