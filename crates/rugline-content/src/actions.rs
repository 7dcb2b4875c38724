//! The action table.
//!
//! Forty-eight plays across five categories. Transforms adjust meters and
//! hidden state and prepend a narrative line; none of them clamp — bounds
//! are the engine's job, applied uniformly after every transform. Actions
//! that branch on luck draw from the run's stream through the `rng`
//! parameter, never from ambient randomness.

use rand::RngCore;
use rugline_types::{ActionCategory, ActionDef, GameState};

use crate::{fmt_usd, log, roll, take_treasury};

/// All actions, in definition order.
pub const ACTIONS: &[ActionDef] = &[
    // --- Siphon ---
    ActionDef {
        id: "siphon_advisory",
        category: ActionCategory::Siphon,
        name: "Advisory Retainer",
        description: "Route treasury to a 'strategic advisory' you secretly own.",
        tags: &["+Siphon", "+Rage", "+Heat", "-Cred", "-Treasury"],
        defensive: false,
        visible_if: None,
        apply: siphon_advisory,
    },
    ActionDef {
        id: "strategic_consultants",
        category: ActionCategory::Siphon,
        name: "Hire Strategic Consultants",
        description: "Shovel funds to friendly 'experts'.",
        tags: &["+Siphon", "+Rage", "+Heat", "-Cred", "-Treasury"],
        defensive: false,
        visible_if: None,
        apply: strategic_consultants,
    },
    ActionDef {
        id: "founder_wage_increase",
        category: ActionCategory::Siphon,
        name: "Increase Founder Wages",
        description: "Triple your salary 'to retain leadership talent'.",
        tags: &["+Siphon", "+Rage", "-Cred", "-Treasury"],
        defensive: false,
        visible_if: None,
        apply: founder_wage_increase,
    },
    ActionDef {
        id: "expense_account",
        category: ActionCategory::Siphon,
        name: "Expand Expense Account",
        description: "Charge hotels, jets, 'strategy dinners'.",
        tags: &["+Siphon", "+Rage", "+Heat", "-Cred", "-Treasury"],
        defensive: false,
        visible_if: None,
        apply: expense_account,
    },
    ActionDef {
        id: "family_office_vehicle",
        category: ActionCategory::Siphon,
        name: "Family Office Vehicle",
        description: "Route treasury into a 'diversification' structure.",
        tags: &["+Siphon", "+Rage", "+Heat", "-Cred", "-Treasury"],
        defensive: false,
        visible_if: None,
        apply: family_office_vehicle,
    },
    ActionDef {
        id: "real_estate_hq",
        category: ActionCategory::Siphon,
        name: "Buy 'HQ' Villa",
        description: "Purchase a villa as the new 'ecosystem hub'.",
        tags: &["+Siphon", "+Rage", "+Heat", "-Cred", "-Treasury"],
        defensive: false,
        visible_if: Some(can_afford_villa),
        apply: real_estate_hq,
    },
    ActionDef {
        id: "token_buyback",
        category: ActionCategory::Siphon,
        name: "Token Buyback Scheme",
        description: "Prop up price while quietly dumping your own stack.",
        tags: &["+Siphon", "+Tech", "+Heat", "+Rage", "-Treasury"],
        defensive: false,
        visible_if: None,
        apply: token_buyback,
    },
    ActionDef {
        id: "foundation_grant",
        category: ActionCategory::Siphon,
        name: "Foundation Grant to Yourself",
        description: "Award yourself R&D funds. Innovative.",
        tags: &["+Siphon", "+Heat", "+Rage", "-Cred", "-Treasury"],
        defensive: false,
        visible_if: None,
        apply: foundation_grant,
    },
    ActionDef {
        id: "siphon_insurance_fund",
        category: ActionCategory::Siphon,
        name: "Siphon Protocol Insurance Fund",
        description: "Route 'insurance' reserves to opaque multisigs.",
        tags: &["+Siphon", "+Rage", "+Heat", "-Treasury"],
        defensive: false,
        visible_if: None,
        apply: siphon_insurance_fund,
    },
    ActionDef {
        id: "shadow_otc_deal",
        category: ActionCategory::Siphon,
        name: "Shadow OTC Deal",
        description: "Privately sell tokens OTC at a discount to 'friendly' buyers.",
        tags: &["+Siphon", "+Heat", "-Price"],
        defensive: false,
        visible_if: None,
        apply: shadow_otc_deal,
    },
    ActionDef {
        id: "emergency_token_unlock",
        category: ActionCategory::Siphon,
        name: "Emergency Team Token Unlock",
        description: "Accelerate vesting 'for operational needs.' Classic.",
        tags: &["+Siphon", "+++Rage", "+Heat"],
        defensive: false,
        visible_if: None,
        apply: emergency_token_unlock,
    },
    ActionDef {
        id: "mev_sandwich_fund",
        category: ActionCategory::Siphon,
        name: "MEV Sandwich Fund",
        description: "Run a MEV bot that subtly drains users. Plausible deniability.",
        tags: &["+Siphon gradual", "+Heat if discovered"],
        defensive: false,
        visible_if: None,
        apply: mev_sandwich_fund,
    },
    // --- Governance ---
    ActionDef {
        id: "emergency_emissions_vote",
        category: ActionCategory::Governance,
        name: "Emergency Emissions Vote",
        description: "Print more tokens to refill coffers.",
        tags: &["+Treasury", "+Rage", "-Cred", "+Heat"],
        defensive: false,
        visible_if: None,
        apply: emergency_emissions_vote,
    },
    ActionDef {
        id: "lp_incentives_adjust",
        category: ActionCategory::Governance,
        name: "LP Incentives Adjustment",
        description: "Drown LPs in incentives; hope volume follows.",
        tags: &["-Treasury", "+Tech", "+/-Rage", "-Cred"],
        defensive: false,
        visible_if: None,
        apply: lp_incentives_adjust,
    },
    ActionDef {
        id: "treasury_diversification",
        category: ActionCategory::Governance,
        name: "Treasury Diversification",
        description: "Swap into stables at suspicious execution.",
        tags: &["-Treasury", "+Heat", "-Cred", "+Siphon", "+Stable"],
        defensive: false,
        visible_if: None,
        apply: treasury_diversification,
    },
    ActionDef {
        id: "delegate_program",
        category: ActionCategory::Governance,
        name: "Delegate Program",
        description: "Pay influencers to 'vote responsibly'.",
        tags: &["-Treasury", "-Rage", "+Cred", "+Heat"],
        defensive: false,
        visible_if: None,
        apply: delegate_program,
    },
    ActionDef {
        id: "freeze_governance",
        category: ActionCategory::Governance,
        name: "Freeze Governance",
        description: "Pause voting 'for safety' before a reveal.",
        tags: &["+Rage", "+Heat", "-Cred"],
        defensive: false,
        visible_if: None,
        apply: freeze_governance,
    },
    ActionDef {
        id: "community_roundtable",
        category: ActionCategory::Governance,
        name: "Community Roundtable (Pre-Selected)",
        description: "Pretend to be neutral. Actually scripted with friendly influencers.",
        tags: &["+Cred", "-Rage", "+Heat"],
        defensive: false,
        visible_if: None,
        apply: community_roundtable,
    },
    ActionDef {
        id: "snapshot_3am",
        category: ActionCategory::Governance,
        name: "Rushed Snapshot Vote at 3AM",
        description: "Classic governance manipulation. EU is sleeping.",
        tags: &["+Treasury", "++Rage next morning", "-Cred"],
        defensive: false,
        visible_if: None,
        apply: snapshot_3am,
    },
    ActionDef {
        id: "zombie_proposal",
        category: ActionCategory::Governance,
        name: "Zombie AI Governance Proposal",
        description: "Submit a proposal written by a chatbot at 2am. Hope nobody reads it.",
        tags: &["±Cred", "±Tech", "-Rage minor"],
        defensive: false,
        visible_if: None,
        apply: zombie_proposal,
    },
    // --- Narrative / Hype ---
    ActionDef {
        id: "announce_partnership",
        category: ActionCategory::Narrative,
        name: "Announce Major Partnership",
        description: "Claim a big-name partner; details TBD.",
        tags: &["+Tech", "+Cred", "-Rage", "+Heat"],
        defensive: false,
        visible_if: None,
        apply: announce_partnership,
    },
    ActionDef {
        id: "ship_upgrade",
        category: ActionCategory::Narrative,
        name: "Ship Tech Upgrade",
        description: "Actually ship something. Calms people down.",
        tags: &["-Rage", "+Cred", "+Tech", "-Treasury"],
        defensive: false,
        visible_if: None,
        apply: ship_upgrade,
    },
    ActionDef {
        id: "ai_pivot",
        category: ActionCategory::Narrative,
        name: "Announce AI Pivot",
        description: "Rebrand as an AI + crypto protocol. Of course.",
        tags: &["-Rage", "+Cred", "+Tech", "+Heat"],
        defensive: false,
        visible_if: None,
        apply: ai_pivot,
    },
    ActionDef {
        id: "publish_thought_paper",
        category: ActionCategory::Narrative,
        name: "Publish Thought Paper",
        description: "Drop a manifesto about the future of modular chains.",
        tags: &["-Rage", "+Cred", "+Tech", "+Heat"],
        defensive: false,
        visible_if: None,
        apply: publish_thought_paper,
    },
    ActionDef {
        id: "meme_mascot_campaign",
        category: ActionCategory::Narrative,
        name: "Launch Meme Mascot",
        description: "Roll out a mascot; hope it's endearing, not cringe.",
        tags: &["+Tech", "+/-Rage", "+/-Cred"],
        defensive: false,
        visible_if: None,
        apply: meme_mascot_campaign,
    },
    ActionDef {
        id: "conference_2049",
        category: ActionCategory::Narrative,
        name: "Sponsor Token2049 Party",
        description: "Blow cash on an over-the-top conference activation.",
        tags: &["-Treasury", "-Rage", "+Cred", "+Tech", "+Heat"],
        defensive: false,
        visible_if: None,
        apply: conference_2049,
    },
    ActionDef {
        id: "zk_something",
        category: ActionCategory::Narrative,
        name: "Launch zk-Something (Nobody Understands)",
        description: "Zero knowledge, maximum buzzwords.",
        tags: &["+++Tech", "+Cred", "+Heat"],
        defensive: false,
        visible_if: None,
        apply: zk_something,
    },
    ActionDef {
        id: "depin_tweet",
        category: ActionCategory::Narrative,
        name: "DePIN Tweet Thread",
        description: "Decentralised Physical Infrastructure. Buzzword stack and vibes.",
        tags: &["+Tech", "±Cred", "-Rage"],
        defensive: false,
        visible_if: None,
        apply: depin_tweet,
    },
    ActionDef {
        id: "rwa_tokenization",
        category: ActionCategory::Narrative,
        name: "Tokenize Real-World Assets (No Plan)",
        description: "RWA meta play. Announce first, figure out legality later.",
        tags: &["+Tech", "+++Heat", "Treasury stable"],
        defensive: false,
        visible_if: None,
        apply: rwa_tokenization,
    },
    ActionDef {
        id: "institutions_soon",
        category: ActionCategory::Narrative,
        name: "'Onboarding Institutions Soon™'",
        description: "Boosts price short term. CT will meme you.",
        tags: &["+Price", "-Rage", "follow-up memes"],
        defensive: false,
        visible_if: None,
        apply: institutions_soon,
    },
    // --- Damage Control / PR ---
    ActionDef {
        id: "lawyer_up",
        category: ActionCategory::DamageControl,
        name: "Lawyer Up",
        description: "Hire top lawyers to buffer incoming heat.",
        tags: &["-Treasury", "-Heat", "+Rage", "+Cred"],
        defensive: true,
        visible_if: None,
        apply: lawyer_up,
    },
    ActionDef {
        id: "clarification_post",
        category: ActionCategory::DamageControl,
        name: "Issue Clarification Post",
        description: "A Medium article that solves nothing.",
        tags: &["-Rage", "+Cred", "+Heat"],
        defensive: true,
        visible_if: None,
        apply: clarification_post,
    },
    ActionDef {
        id: "launch_audit",
        category: ActionCategory::DamageControl,
        name: "Launch Audit Initiative",
        description: "Pay auditors to give you a clean bill of health.",
        tags: &["-Treasury", "-Heat", "+Cred", "-Rage", "+Stable"],
        defensive: true,
        visible_if: None,
        apply: launch_audit,
    },
    ActionDef {
        id: "fud_counter_thread",
        category: ActionCategory::DamageControl,
        name: "Post 'FUD' Counter-Thread",
        description: "Declare everything is FUD; hope it sticks.",
        tags: &["+/-Rage", "+Heat", "-Cred"],
        defensive: false,
        visible_if: None,
        apply: fud_counter_thread,
    },
    ActionDef {
        id: "fire_scapegoat",
        category: ActionCategory::DamageControl,
        name: "Fire Scapegoat",
        description: "Blame and sack a contractor.",
        tags: &["-Rage", "-Cred", "+Heat"],
        defensive: false,
        visible_if: None,
        apply: fire_scapegoat,
    },
    ActionDef {
        id: "blame_bounty_hunter",
        category: ActionCategory::DamageControl,
        name: "Blame the Bug Bounty Hunter",
        description: "Claim the exploit was responsibly disclosed. Technically true-ish.",
        tags: &["-Heat", "-Cred", "+Rage"],
        defensive: false,
        visible_if: None,
        apply: blame_bounty_hunter,
    },
    ActionDef {
        id: "feature_not_bug",
        category: ActionCategory::DamageControl,
        name: "Spin Exploit as 'Not an Exploit'",
        description: "The 'that's actually a feature' play. Bridge math vibes.",
        tags: &["-Cred", "+Rage", "-Tech"],
        defensive: false,
        visible_if: None,
        apply: feature_not_bug,
    },
    ActionDef {
        id: "ct_lobbyist",
        category: ActionCategory::DamageControl,
        name: "Hire a CT Lobbyist",
        description: "Yes, this is a real thing people do.",
        tags: &["-Rage", "-Heat", "-Treasury"],
        defensive: false,
        visible_if: None,
        apply: ct_lobbyist,
    },
    ActionDef {
        id: "screenshot_shame",
        category: ActionCategory::DamageControl,
        name: "Screenshot Shame an Influencer",
        description: "Publicly leak influencer DMs. Nuclear option.",
        tags: &["-Rage", "-Cred", "+Heat", "social meltdown"],
        defensive: false,
        visible_if: None,
        apply: screenshot_shame,
    },
    // --- Social / Degen ---
    ActionDef {
        id: "shitpost_x",
        category: ActionCategory::Social,
        name: "Shitpost on X",
        description: "Post a spicy meme. Could backfire.",
        tags: &["+/-Cred", "+/-Rage", "+Tech"],
        defensive: false,
        visible_if: None,
        apply: shitpost_x,
    },
    ActionDef {
        id: "join_influencer_space",
        category: ActionCategory::Social,
        name: "Join Influencer Space",
        description: "Hop into a live Space and wing it.",
        tags: &["+/-Cred", "+/-Rage", "+/-Tech"],
        defensive: false,
        visible_if: None,
        apply: join_influencer_space,
    },
    ActionDef {
        id: "dm_whale",
        category: ActionCategory::Social,
        name: "DM a Whale",
        description: "Whisper reassurances to a big holder.",
        tags: &["-Rage", "+/-Cred", "+/-Tech", "+Heat?"],
        defensive: false,
        visible_if: None,
        apply: dm_whale,
    },
    ActionDef {
        id: "dubai_nightclub",
        category: ActionCategory::Social,
        name: "Dubai Nightclub 'Networking'",
        description: "Show face at the most notorious party.",
        tags: &["+Tech", "-Cred", "+Heat", "-Stability"],
        defensive: false,
        visible_if: None,
        apply: dubai_nightclub,
    },
    ActionDef {
        id: "reply_vitalik",
        category: ActionCategory::Social,
        name: "Reply to Vitalik",
        description: "Shoot your shot in Vitalik's replies.",
        tags: &["+/-Cred", "+/-Rage", "+Heat"],
        defensive: false,
        visible_if: None,
        apply: reply_vitalik,
    },
    ActionDef {
        id: "meme_coin_launch",
        category: ActionCategory::Social,
        name: "Launch Meme Coin",
        description: "Spin up a meme token to distract the masses.",
        tags: &["+Treasury", "-Rage", "+Heat", "-Cred", "+Tech"],
        defensive: false,
        visible_if: None,
        apply: meme_coin_launch,
    },
    ActionDef {
        id: "qt_ratio_war",
        category: ActionCategory::Social,
        name: "Quote-Tweet Ratio War",
        description: "Start a war with another founder. CT loves drama.",
        tags: &["±Cred big swing", "++Rage", "+Tech"],
        defensive: false,
        visible_if: None,
        apply: qt_ratio_war,
    },
    ActionDef {
        id: "were_early_chart",
        category: ActionCategory::Social,
        name: "Post 'We're Early' Copium Chart",
        description: "The classic adoption curve copium. Works every time.",
        tags: &["+Tech", "-Cred", "-Rage"],
        defensive: false,
        visible_if: None,
        apply: were_early_chart,
    },
    ActionDef {
        id: "grifter_spaces",
        category: ActionCategory::Social,
        name: "Host Spaces with a Known Grifter",
        description: "You know exactly who. Their audience becomes yours.",
        tags: &["-Cred", "+Tech", "+Rage"],
        defensive: false,
        visible_if: None,
        apply: grifter_spaces,
    },
    ActionDef {
        id: "bankless_interview",
        category: ActionCategory::Social,
        name: "Go Bankless Interview",
        description: "The establishment route. Credibility pump incoming.",
        tags: &["++Cred", "+Heat", "-Rage"],
        defensive: false,
        visible_if: None,
        apply: bankless_interview,
    },
    ActionDef {
        id: "uponly_pod",
        category: ActionCategory::Social,
        name: "Pod With UpOnly",
        description: "The degen credibility arc. Cobie might mock you.",
        tags: &["+Tech", "-Rage", "+Price spike"],
        defensive: false,
        visible_if: None,
        apply: uponly_pod,
    },
];

fn can_afford_villa(s: &GameState) -> bool {
    s.official_treasury >= 50_000_000.0
}

// --- Siphon transforms ---

fn siphon_advisory(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let amount = take_treasury(&mut next, 0.10);
    next.siphoned += amount;
    next.rage += 10.0;
    next.heat += 5.0;
    next.cred -= 5.0;
    next.hidden.audit_risk += 0.1;
    log(&mut next, format!("You siphoned {} via an advisory retainer.", fmt_usd(amount)));
    next
}

fn strategic_consultants(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let amount = take_treasury(&mut next, 0.12);
    next.siphoned += (amount * 0.5).floor();
    next.rage += 12.0;
    next.heat += 8.0;
    next.cred -= 6.0;
    next.hidden.audit_risk += 0.15;
    log(
        &mut next,
        format!("You hired consultants for {}. The invoice is very creative.", fmt_usd(amount)),
    );
    next
}

fn founder_wage_increase(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let amount = take_treasury(&mut next, 0.05);
    next.siphoned += amount;
    next.rage += 20.0;
    next.cred -= 10.0;
    next.heat += 5.0;
    next.hidden.audit_risk += 0.1;
    next.hidden.founder_stability -= 0.05;
    log(&mut next, String::from("You bumped your salary. Some people notice."));
    next
}

fn expense_account(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let amount = take_treasury(&mut next, 0.06);
    next.siphoned += (amount * 0.8).floor();
    next.rage += 12.0;
    next.heat += 6.0;
    next.cred -= 4.0;
    next.hidden.community_memory += 0.1;
    log(&mut next, String::from("You ran a wave of expenses through the foundation."));
    next
}

fn family_office_vehicle(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let amount = take_treasury(&mut next, 0.25);
    next.siphoned += (amount * 0.6).floor();
    next.rage += 18.0;
    next.heat += 15.0;
    next.cred -= 8.0;
    next.hidden.audit_risk += 0.2;
    log(&mut next, format!("You routed {} through a family office.", fmt_usd(amount)));
    next
}

fn real_estate_hq(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let amount = take_treasury(&mut next, 0.30);
    next.siphoned += (amount * 0.5).floor();
    next.rage += 25.0;
    next.heat += 12.0;
    next.cred -= 12.0;
    next.hidden.audit_risk += 0.25;
    next.hidden.community_memory += 0.15;
    log(&mut next, String::from("You closed on a lavish 'HQ'. The photos leak instantly."));
    next
}

fn token_buyback(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let cost = take_treasury(&mut next, 0.08);
    next.siphoned += (cost * 0.4).floor();
    next.tech_hype += 12.0;
    next.heat += 12.0;
    next.rage += 6.0;
    next.hidden.audit_risk += 0.15;
    log(&mut next, String::from("You initiate a buyback. Charts look better... for now."));
    next
}

fn foundation_grant(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let amount = take_treasury(&mut next, 0.07);
    next.siphoned += amount;
    next.rage += 15.0;
    next.heat += 10.0;
    next.cred -= 8.0;
    log(&mut next, String::from("You granted yourself a generous R&D stipend."));
    next
}

fn siphon_insurance_fund(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let amount = take_treasury(&mut next, 0.15);
    next.siphoned += amount;
    next.rage += 12.0;
    next.heat += 10.0;
    next.hidden.audit_risk += 0.2;
    log(&mut next, String::from("You siphoned the insurance fund. \"It's for user protection.\""));
    next
}

fn shadow_otc_deal(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    // Tokens sold OTC, not treasury funds: the bag grows, the price slips.
    let amount = (s.official_treasury * 0.08).floor();
    next.siphoned += amount;
    next.token_price *= 0.9;
    next.heat += 15.0;
    next.hidden.audit_risk += 0.1;
    log(&mut next, String::from("Shadow OTC complete. Price slipping as tokens hit the market."));
    next
}

fn emergency_token_unlock(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let amount = (s.official_treasury * 0.20).floor();
    next.siphoned += amount;
    next.rage += 25.0;
    next.heat += 8.0;
    next.cred -= 15.0;
    next.token_price *= 0.85;
    log(&mut next, String::from("Emergency unlock executed. CT notices immediately."));
    next
}

fn mev_sandwich_fund(s: &GameState, rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let amount = (s.official_treasury * (0.03 + roll(rng) * 0.03)).floor();
    let discovered = roll(rng) < 0.3;
    next.siphoned += amount;
    if discovered {
        next.rage += 20.0;
        next.heat += 15.0;
        next.hidden.audit_risk += 0.25;
        log(&mut next, String::from("Your MEV bot got exposed. An anon sleuth is threading."));
    } else {
        next.heat += 3.0;
        next.hidden.audit_risk += 0.05;
        log(&mut next, String::from("MEV sandwich fund operational. Passive extraction engaged."));
    }
    next
}

// --- Governance transforms ---

fn emergency_emissions_vote(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    next.official_treasury += 300_000_000.0;
    next.rage += 25.0;
    next.cred -= 15.0;
    next.heat += 10.0;
    log(
        &mut next,
        String::from("You force through an emissions vote. Treasury refilled, community seethes."),
    );
    next
}

fn lp_incentives_adjust(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let _ = take_treasury(&mut next, 0.02);
    next.tech_hype += 8.0;
    // A credible founder gets the benefit of the doubt.
    if s.cred > 60.0 {
        next.rage -= 5.0;
    } else {
        next.rage += 5.0;
    }
    next.cred -= 3.0;
    log(&mut next, String::from("You juiced LP incentives. Farmers rejoice; everyone else shrugs."));
    next
}

fn treasury_diversification(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let slip = take_treasury(&mut next, 0.05);
    next.siphoned += (slip * 0.2).floor();
    next.cred -= 6.0;
    next.heat += 8.0;
    next.rage += 6.0;
    next.hidden.stablecoin_ratio = (next.hidden.stablecoin_ratio + 0.15).min(0.8);
    log(&mut next, String::from("You diversified the treasury; slippage whispers start."));
    next
}

fn delegate_program(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let _ = take_treasury(&mut next, 0.015);
    next.rage -= 8.0;
    next.heat += 6.0;
    next.cred += 4.0;
    log(&mut next, String::from("You launched a delegate program. Delegates are... enthusiastic."));
    next
}

fn freeze_governance(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    next.rage += 18.0;
    next.heat += 8.0;
    next.cred -= 8.0;
    next.hidden.audit_risk += 0.05;
    log(&mut next, String::from("You froze governance. Forums ignite."));
    next
}

fn community_roundtable(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    next.cred += 8.0;
    next.rage -= 10.0;
    next.heat += 5.0;
    log(&mut next, String::from("The roundtable went smoothly. Nobody suspects it was scripted."));
    next
}

fn snapshot_3am(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let amount = (s.official_treasury * 0.02).floor();
    next.official_treasury += amount;
    next.rage += 18.0;
    next.cred -= 10.0;
    next.hidden.community_memory += 0.15;
    log(&mut next, String::from("The 3AM snapshot passed. The community wakes up furious."));
    next
}

fn zombie_proposal(s: &GameState, rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let quality = roll(rng);
    if quality > 0.5 {
        next.cred += 5.0;
        next.tech_hype += 8.0;
        next.rage -= 3.0;
        log(&mut next, String::from("The AI proposal is coherent. Some are impressed."));
    } else {
        next.cred -= 12.0;
        next.tech_hype -= 5.0;
        next.rage += 8.0;
        log(&mut next, String::from("The AI proposal is gibberish. Screenshots everywhere."));
    }
    next
}

// --- Narrative transforms ---

fn announce_partnership(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    next.tech_hype += 15.0;
    next.cred += 8.0;
    next.rage -= 8.0;
    next.heat += 8.0;
    log(&mut next, String::from("You announced a partnership. Everyone has questions."));
    next
}

fn ship_upgrade(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let _ = take_treasury(&mut next, 0.02);
    next.rage -= 10.0;
    next.cred += 10.0;
    next.tech_hype += 20.0;
    log(&mut next, String::from("You shipped a scaling upgrade. Twitter is impressed."));
    next
}

fn ai_pivot(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    next.rage -= 5.0;
    next.cred += 5.0;
    next.tech_hype += 15.0;
    next.heat += 5.0;
    log(&mut next, String::from("You pivoted to AI. VCs clap, the community is confused."));
    next
}

fn publish_thought_paper(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    next.cred += 6.0;
    next.rage -= 6.0;
    next.tech_hype += 6.0;
    next.heat += 3.0;
    log(&mut next, String::from("You published a thought piece. Anons argue for 48 hours."));
    next
}

fn meme_mascot_campaign(s: &GameState, rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    next.tech_hype += 8.0;
    if roll(rng) < 0.5 {
        next.rage -= 8.0;
        next.cred += 4.0;
    } else {
        next.rage += 8.0;
        next.cred -= 4.0;
    }
    log(&mut next, String::from("You launched a mascot campaign. Memes fly."));
    next
}

fn conference_2049(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let _ = take_treasury(&mut next, 0.025);
    next.rage -= 10.0;
    next.cred += 5.0;
    next.tech_hype += 10.0;
    next.heat += 15.0;
    next.hidden.founder_stability -= 0.05;
    log(&mut next, String::from("Your Token2049 party trends on X. Regulators also notice."));
    next
}

fn zk_something(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    next.tech_hype += 25.0;
    next.cred += 10.0;
    next.heat += 5.0;
    next.token_price *= 1.08;
    log(&mut next, String::from("You announced zkVM integration. VCs are salivating."));
    next
}

fn depin_tweet(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    next.tech_hype += 12.0;
    next.cred += 3.0;
    next.rage -= 5.0;
    log(&mut next, String::from("Your DePIN thread went semi-viral. Hardware degens are interested."));
    next
}

fn rwa_tokenization(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    next.tech_hype += 15.0;
    next.heat += 20.0;
    next.cred += 5.0;
    next.token_price *= 1.05;
    next.hidden.audit_risk += 0.1;
    log(&mut next, String::from("RWA announcement. Lawyers are sweating. VCs are DMing."));
    next
}

fn institutions_soon(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    next.token_price *= 1.06;
    next.rage -= 5.0;
    next.cred -= 3.0;
    next.hidden.community_memory += 0.1;
    log(
        &mut next,
        String::from("\"Institutions are coming.\" Price pumps. CT screenshots this for later."),
    );
    next
}

// --- Damage Control transforms ---

fn lawyer_up(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let _ = take_treasury(&mut next, 0.02);
    next.heat -= 15.0;
    next.rage += 4.0;
    next.cred += 3.0;
    log(&mut next, String::from("You lawyered up. The bill is... inspiring."));
    next
}

fn clarification_post(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    next.rage -= 6.0;
    next.cred += 4.0;
    next.heat += 4.0;
    log(&mut next, String::from("You posted a clarification. Some calm down, some mock."));
    next
}

fn launch_audit(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let _ = take_treasury(&mut next, 0.015);
    next.heat -= 12.0;
    next.cred += 6.0;
    next.rage -= 8.0;
    next.hidden.audit_risk += 0.1;
    // Auditors also push the treasury toward stables.
    next.hidden.stablecoin_ratio = (next.hidden.stablecoin_ratio + 0.05).min(0.6);
    log(&mut next, String::from("You launched an audit initiative."));
    next
}

fn fud_counter_thread(s: &GameState, rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    if roll(rng) < 0.5 {
        next.rage -= 10.0;
    } else {
        next.rage += 12.0;
    }
    next.heat += 6.0;
    next.cred -= 4.0;
    next.hidden.founder_stability -= 0.05;
    log(&mut next, String::from("You posted a FUD counter-thread."));
    next
}

fn fire_scapegoat(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    next.rage -= 8.0;
    next.cred -= 4.0;
    next.heat += 6.0;
    log(&mut next, String::from("You fired a scapegoat. The mob wants more."));
    next
}

fn blame_bounty_hunter(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    next.heat -= 12.0;
    next.cred -= 8.0;
    next.rage += 10.0;
    log(&mut next, String::from("You blamed the whitehat. The security community is furious."));
    next
}

fn feature_not_bug(s: &GameState, rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let believed = roll(rng) < 0.3;
    if believed {
        next.cred += 2.0;
        next.rage -= 5.0;
        log(
            &mut next,
            String::from("Against all odds, people bought it. \"Unexpected withdrawal feature.\""),
        );
    } else {
        next.cred -= 15.0;
        next.rage += 15.0;
        log(&mut next, String::from("Nobody buys it. The memes write themselves."));
    }
    next.tech_hype -= 10.0;
    next
}

fn ct_lobbyist(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let _ = take_treasury(&mut next, 0.015);
    next.rage -= 12.0;
    next.heat -= 8.0;
    next.cred += 5.0;
    log(&mut next, String::from("CT lobbyist deployed. The narrative starts to shift."));
    next
}

fn screenshot_shame(s: &GameState, rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let backfires = roll(rng) < 0.4;
    if backfires {
        next.rage += 15.0;
        log(&mut next, String::from("The influencer had receipts too. Mutual destruction."));
    } else {
        next.rage -= 15.0;
        log(&mut next, String::from("Influencer exposed. They're deleting tweets."));
    }
    next.cred -= 10.0;
    next.heat += 12.0;
    next.hidden.founder_stability -= 0.15;
    next
}

// --- Social transforms ---

fn shitpost_x(s: &GameState, rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    if roll(rng) < 0.5 {
        next.cred += 4.0;
        next.rage -= 4.0;
    } else {
        next.cred -= 6.0;
        next.rage += 6.0;
    }
    next.tech_hype += 4.0;
    log(&mut next, String::from("You shitposted. The replies are a warzone."));
    next
}

fn join_influencer_space(s: &GameState, rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    // Performance scales with credibility.
    let success = roll(rng) < s.cred / 120.0;
    if success {
        next.cred += 12.0;
        next.rage -= 8.0;
        next.tech_hype += 10.0;
        log(&mut next, String::from("You crushed the Space. The clips are glowing."));
    } else {
        next.cred -= 18.0;
        next.rage += 12.0;
        next.tech_hype -= 4.0;
        log(&mut next, String::from("You fumbled the Space. The clips go viral badly."));
    }
    next.hidden.founder_stability -= 0.1;
    next
}

fn dm_whale(s: &GameState, rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let leak = roll(rng) < 0.25;
    if leak {
        next.rage += 20.0;
        next.heat += 10.0;
        next.cred -= 6.0;
        next.tech_hype -= 2.0;
        next.hidden.community_memory += 0.1;
        log(&mut next, String::from("The whale leaks your DMs. Embarrassing."));
    } else {
        next.rage -= 10.0;
        next.cred += 5.0;
        next.tech_hype += 8.0;
        log(&mut next, String::from("The whale calms down and stops dumping (for now)."));
    }
    next
}

fn dubai_nightclub(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    next.tech_hype += 6.0;
    next.cred -= 10.0;
    next.heat += 15.0;
    next.hidden.founder_stability -= 0.2;
    log(&mut next, String::from("You hit a Dubai nightclub. Cameras were definitely on."));
    next
}

fn reply_vitalik(s: &GameState, rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let success = roll(rng) < 0.25;
    if success {
        next.cred += 18.0;
        next.rage -= 8.0;
        next.heat += 6.0;
        log(&mut next, String::from("Vitalik notices you. Clout ++."));
    } else {
        next.cred -= 6.0;
        next.rage += 4.0;
        log(&mut next, String::from("No reply. Awkward silence."));
    }
    next
}

fn meme_coin_launch(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    next.official_treasury += 80_000_000.0;
    next.rage -= 10.0;
    next.heat += 10.0;
    next.cred -= 5.0;
    next.tech_hype += 15.0;
    log(&mut next, String::from("You launched a meme coin. Degens swarm."));
    next
}

fn qt_ratio_war(s: &GameState, rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let won = roll(rng) < 0.5;
    if won {
        next.cred += 15.0;
        log(&mut next, String::from("You won the ratio war. The enemy founder is coping."));
    } else {
        next.cred -= 20.0;
        log(&mut next, String::from("You got ratioed into oblivion. Screenshots for days."));
    }
    next.rage += 12.0;
    next.tech_hype += 8.0;
    next
}

fn were_early_chart(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    next.tech_hype += 10.0;
    next.cred -= 5.0;
    next.rage -= 8.0;
    log(&mut next, String::from("You posted the adoption curve. Degens RT'd it unironically."));
    next
}

fn grifter_spaces(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    next.cred -= 12.0;
    next.tech_hype += 15.0;
    next.rage += 8.0;
    log(&mut next, String::from("You hosted the grifter. New followers, old bagholders furious."));
    next
}

fn bankless_interview(s: &GameState, _rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    next.cred += 18.0;
    next.heat += 8.0;
    next.rage -= 10.0;
    next.token_price *= 1.03;
    log(&mut next, String::from("The Bankless interview aired. You sounded almost legitimate."));
    next
}

fn uponly_pod(s: &GameState, rng: &mut dyn RngCore) -> GameState {
    let mut next = s.clone();
    let mocked = roll(rng) < 0.3;
    if mocked {
        next.tech_hype -= 5.0;
        next.rage += 10.0;
        next.cred -= 10.0;
        next.token_price *= 0.97;
        log(&mut next, String::from("Cobie roasted you live. Clips going viral."));
    } else {
        next.tech_hype += 12.0;
        next.rage -= 8.0;
        next.cred += 8.0;
        next.token_price *= 1.05;
        log(&mut next, String::from("UpOnly went well. Degen cred established."));
    }
    next
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::testfix::fresh_state;

    struct FixedRng(u32);

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.0
        }
        fn next_u64(&mut self) -> u64 {
            u64::from(self.0)
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
    }

    #[test]
    fn advisory_retainer_moves_ten_percent() {
        let state = fresh_state();
        let mut rng = FixedRng(0);
        let next = siphon_advisory(&state, &mut rng);
        assert_eq!(next.official_treasury, 900_000_000.0);
        assert_eq!(next.siphoned, 100_000_000.0);
        assert_eq!(next.rage, 30.0);
    }

    #[test]
    fn deterministic_actions_ignore_the_stream() {
        let state = fresh_state();
        let mut a = FixedRng(0);
        let mut b = FixedRng(u32::MAX);
        assert_eq!(ship_upgrade(&state, &mut a), ship_upgrade(&state, &mut b));
    }

    #[test]
    fn branching_actions_split_on_the_roll() {
        let state = fresh_state();
        let mut low = FixedRng(0); // roll ~ 0.0
        let mut high = FixedRng(u32::MAX); // roll ~ 1.0
        let good = meme_mascot_campaign(&state, &mut low);
        let bad = meme_mascot_campaign(&state, &mut high);
        assert!(good.rage < state.rage);
        assert!(bad.rage > state.rage);
    }

    #[test]
    fn defensive_actions_are_flagged() {
        let defensive: Vec<&str> = ACTIONS
            .iter()
            .filter(|a| a.defensive)
            .map(|a| a.id)
            .collect();
        assert_eq!(defensive, vec!["lawyer_up", "clarification_post", "launch_audit"]);
    }

    #[test]
    fn diversification_raises_the_stable_ratio_capped() {
        let mut state = fresh_state();
        state.hidden.stablecoin_ratio = 0.75;
        let mut rng = FixedRng(0);
        let next = treasury_diversification(&state, &mut rng);
        assert_eq!(next.hidden.stablecoin_ratio, 0.8);
    }

    #[test]
    fn villa_needs_a_real_treasury() {
        let mut broke = fresh_state();
        broke.official_treasury = 1_000.0;
        assert!(!can_afford_villa(&broke));
        assert!(can_afford_villa(&fresh_state()));
    }

    #[test]
    fn emissions_vote_refills_the_treasury() {
        let state = fresh_state();
        let mut rng = FixedRng(0);
        let next = emergency_emissions_vote(&state, &mut rng);
        assert_eq!(next.official_treasury, 1_300_000_000.0);
        assert!(next.rage > state.rage);
    }

    #[test]
    fn every_action_logs_a_narrative_line() {
        let state = fresh_state();
        for action in ACTIONS {
            let mut rng = FixedRng(123_456_789);
            let next = (action.apply)(&state, &mut rng);
            assert_eq!(next.log.len(), state.log.len() + 1, "{} did not log", action.id);
        }
    }

    #[test]
    fn no_action_touches_turn_or_menu_bookkeeping() {
        let state = fresh_state();
        for action in ACTIONS {
            let mut rng = FixedRng(42);
            let next = (action.apply)(&state, &mut rng);
            assert_eq!(next.turn, state.turn, "{} advanced the turn", action.id);
            assert_eq!(next.used_action_ids, state.used_action_ids, "{}", action.id);
            assert_eq!(next.pending_crisis, state.pending_crisis, "{}", action.id);
        }
    }
}
