//! The ending table.
//!
//! Thirty narrative endings across six flavor categories, evaluated over a
//! terminal state. When several triggers match, the engine picks the
//! highest weight; when none match, it falls back to one of three generic
//! endings. Score multipliers here are surfaced on the end-of-run card —
//! scoring itself uses the combo table.

use rugline_types::{EndingCategory, EndingDef, GameState};

/// All endings, in definition order.
pub const ENDINGS: &[EndingDef] = &[
    // --- Market / economic ---
    EndingDef {
        id: "hyperpump",
        category: EndingCategory::Market,
        emoji: "🚀",
        headline: "Accidental Hyperpump",
        subline: "Token went 100× overnight due to a misunderstanding.",
        narrative: "Your cryptic tweet was interpreted as alpha. Bots pumped it to infinity. \
                    You're now too rich to pretend to care about governance.",
        trigger: t_hyperpump,
        weight: 10,
        badge: Some("Pump Lord"),
        score_multiplier: Some(1.5),
    },
    EndingDef {
        id: "whale_cascade",
        category: EndingCategory::Market,
        emoji: "🐋",
        headline: "Whale Liquidation Cascade",
        subline: "Price nuked 80%. TVL evaporated.",
        narrative: "One whale sneezed, and your entire ecosystem collapsed. You blame macro. \
                    Nobody believes you, but also nobody cares anymore.",
        trigger: t_whale_cascade,
        weight: 15,
        badge: Some("Macro Victim"),
        score_multiplier: None,
    },
    EndingDef {
        id: "stablecoin_depeg",
        category: EndingCategory::Market,
        emoji: "📉",
        headline: "The Stablecoin Depegged",
        subline: "Your chain's main stable collapsed.",
        narrative: "That yield aggregator integration seemed fine. It was not fine. Everyone's \
                    savings are now worth 0.73. You announce a 'mental health break.'",
        trigger: t_stablecoin_depeg,
        weight: 12,
        badge: Some("Depeg Architect"),
        score_multiplier: None,
    },
    EndingDef {
        id: "bot_misinterpret",
        category: EndingCategory::Market,
        emoji: "🤖",
        headline: "Bots Misread Your Tweet",
        subline: "You were shitposting. They thought you rugged.",
        narrative: "Your ironic 'it's over' tweet triggered a $400M selloff. The community \
                    thinks you rugged. You didn't, but explaining this makes it worse.",
        trigger: t_bot_misinterpret,
        weight: 10,
        badge: Some("Poe's Law Victim"),
        score_multiplier: None,
    },
    EndingDef {
        id: "emissions_bankrupt",
        category: EndingCategory::Market,
        emoji: "🌾",
        headline: "LP Incentives Bankrupted You",
        subline: "You paid $120M in emissions to 14 farmers.",
        narrative: "The APY was 84,000%. Fourteen wallets extracted everything. They thanked \
                    you in Discord before disappearing forever.",
        trigger: t_emissions_bankrupt,
        weight: 8,
        badge: Some("Yield Farmer Food"),
        score_multiplier: None,
    },
    // --- Social / twitter ---
    EndingDef {
        id: "ct_cancels",
        category: EndingCategory::Social,
        emoji: "🧵",
        headline: "CT Cancelled You",
        subline: "A 40-part thread exposed everything.",
        narrative: "Your brunch photos. Your misaligned treasuries. Your old Medium posts \
                    about 'hustle culture.' You deactivate and move to Telegram.",
        trigger: t_ct_cancels,
        weight: 20,
        badge: Some("Main Character (Negative)"),
        score_multiplier: None,
    },
    EndingDef {
        id: "replaced_by_frog",
        category: EndingCategory::Social,
        emoji: "🐸",
        headline: "Replaced by Frog Avatar",
        subline: "The community elected a meme influencer.",
        narrative: "They chose a frog account over you. His qualifications: 400k followers and \
                    a 'gm' streak. 'It's time for new leadership,' you announce.",
        trigger: t_replaced_by_frog,
        weight: 12,
        badge: Some("Frog Victim"),
        score_multiplier: None,
    },
    EndingDef {
        id: "ratio_oblivion",
        category: EndingCategory::Social,
        emoji: "📱",
        headline: "Ratio'd Into Oblivion",
        subline: "One tweet ended it all.",
        narrative: "Your final post got 3 likes and 2,400 quote tweets. Each one was worse than \
                    the last. You announce you're 'focusing on building.'",
        trigger: t_ratio_oblivion,
        weight: 10,
        badge: Some("Terminal Ratio"),
        score_multiplier: None,
    },
    EndingDef {
        id: "deepfake_scandal",
        category: EndingCategory::Social,
        emoji: "🎭",
        headline: "AI Deepfake Scandal",
        subline: "An AI clip of you 'confessing' went viral.",
        narrative: "It was obviously fake. The voice was wrong. The lips didn't sync. Nobody \
                    cared. 'Guilty until proven innocent' hits different in crypto.",
        trigger: t_deepfake_scandal,
        weight: 8,
        badge: Some("Deepfaked"),
        score_multiplier: None,
    },
    EndingDef {
        id: "become_meme",
        category: EndingCategory::Social,
        emoji: "🎪",
        headline: "You Became a CT Meme",
        subline: "People ironically love you now.",
        narrative: "Your failures are so consistent, they're beloved. The chain becomes a \
                    vibecurrency. Your face is on NFTs. Somehow, this is winning.",
        trigger: t_become_meme,
        weight: 8,
        badge: Some("Living Meme"),
        score_multiplier: Some(1.2),
    },
    // --- Internal ---
    EndingDef {
        id: "team_mutiny",
        category: EndingCategory::Internal,
        emoji: "⚔️",
        headline: "Full Internal Mutiny",
        subline: "Your team forked the chain without you.",
        narrative: "They took the code, the community, and the Twitter account. You're now \
                    'Founder Emeritus (Ceremonial)' of nothing.",
        trigger: t_team_mutiny,
        weight: 15,
        badge: Some("Forked Out"),
        score_multiplier: None,
    },
    EndingDef {
        id: "multisig_lost",
        category: EndingCategory::Internal,
        emoji: "🔐",
        headline: "Multi-Sig Signer Vanished",
        subline: "Funds frozen. Keys missing. Price tanking.",
        narrative: "One signer went silent. Then another. The treasury is technically still \
                    there. Nobody can touch it. 'Lost keys, lost legacy.'",
        trigger: t_multisig_lost,
        weight: 6,
        badge: Some("Key Misplacer"),
        score_multiplier: None,
    },
    EndingDef {
        id: "cofounder_reveal",
        category: EndingCategory::Internal,
        emoji: "👻",
        headline: "Co-Founder Reveal Scandal",
        subline: "Your co-founder was... not who you thought.",
        narrative: "Turns out your anonymous co-founder was either an AI agent, a 14-year-old, \
                    or your mum. Credibility: instantly 0.",
        trigger: t_cofounder_reveal,
        weight: 5,
        badge: Some("Doxxed by Mum"),
        score_multiplier: None,
    },
    EndingDef {
        id: "dao_installs_bot",
        category: EndingCategory::Internal,
        emoji: "🤖",
        headline: "DAO Replaced You With AI",
        subline: "They literally installed an LLM as CEO.",
        narrative: "Proposal #847: 'Replace founder with a language model.' Passed unanimously. \
                    The bot's first act: ban you from Discord.",
        trigger: t_dao_installs_bot,
        weight: 10,
        badge: Some("AI Replaced"),
        score_multiplier: None,
    },
    EndingDef {
        id: "treasury_miscount",
        category: EndingCategory::Internal,
        emoji: "🧮",
        headline: "Treasury Misaccounting",
        subline: "Auditors found... discrepancies.",
        narrative: "Turns out you were off by a factor of 1000. Somewhere. The report is 847 \
                    pages. 'In hindsight, decimal places matter.'",
        trigger: t_treasury_miscount,
        weight: 8,
        badge: Some("Decimal Disaster"),
        score_multiplier: None,
    },
    // --- Legal / regulatory ---
    EndingDef {
        id: "love_letter",
        category: EndingCategory::Legal,
        emoji: "💌",
        headline: "Regulator Sent a Love Letter",
        subline: "A strongly-worded inquiry ended everything.",
        narrative: "It was polite. Professional. Devastating. A personal fine was avoided \
                    thanks to 'unknown Cayman routing.' The chain is done though.",
        trigger: t_love_letter,
        weight: 20,
        badge: Some("Wells Notice Recipient"),
        score_multiplier: None,
    },
    EndingDef {
        id: "forced_relocate",
        category: EndingCategory::Legal,
        emoji: "✈️",
        headline: "Forced to Relocate",
        subline: "Regulators in your region got aggressive.",
        narrative: "First they came for the exchanges. Then the stablecoins. Then you. 'Moving \
                    operations offshore,' you tweet from the airport lounge.",
        trigger: t_forced_relocate,
        weight: 10,
        badge: Some("Jurisdiction Hopper"),
        score_multiplier: Some(0.9),
    },
    EndingDef {
        id: "exchange_delisting",
        category: EndingCategory::Legal,
        emoji: "🚫",
        headline: "Exchange Delisting Event",
        subline: "Major exchanges nuked your token overnight.",
        narrative: "All the tier-1 venues, gone by morning. 'Liquidity no longer meets \
                    operational needs,' they said. Your Telegram is chaos.",
        trigger: t_exchange_delisting,
        weight: 12,
        badge: Some("Delisted"),
        score_multiplier: None,
    },
    EndingDef {
        id: "tax_authority",
        category: EndingCategory::Legal,
        emoji: "📋",
        headline: "Tax Authority Asked Questions",
        subline: "They inquired about 'ecosystem expenses.'",
        narrative: "The email was brief. 'Please explain transactions 1 through 847.' You did \
                    not reply. Your location is now 'decentralized.'",
        trigger: t_tax_authority,
        weight: 8,
        badge: Some("Tax Optimiser"),
        score_multiplier: None,
    },
    EndingDef {
        id: "whistleblower",
        category: EndingCategory::Legal,
        emoji: "🐀",
        headline: "You Became a Whistleblower",
        subline: "You testified against your own chain.",
        narrative: "For plea deal benefits, you revealed everything. First founder ever to \
                    snitch. The community will never forgive you. Worth it?",
        trigger: t_whistleblower,
        weight: 5,
        badge: Some("Crown Witness"),
        score_multiplier: None,
    },
    // --- Narrative / hype ---
    EndingDef {
        id: "ai_pivot_works",
        category: EndingCategory::Narrative,
        emoji: "🧠",
        headline: "AI Pivot Actually Worked",
        subline: "AI agents started building the chain themselves.",
        narrative: "You pivoted to AI as a joke. Then the agents got smart. They pushed code. \
                    They pumped price. They don't need you anymore. The chain thrives.",
        trigger: t_ai_pivot_works,
        weight: 8,
        badge: Some("AI Transcended"),
        score_multiplier: Some(1.3),
    },
    EndingDef {
        id: "meme_overtakes",
        category: EndingCategory::Narrative,
        emoji: "🐕",
        headline: "Mascot Token Overtook Main Token",
        subline: "The community abandoned the product for the meme coin.",
        narrative: "You launched a mascot token as a joke. It's now 10× your main token's \
                    market cap. Everyone forgot what your chain actually does.",
        trigger: t_meme_overtakes,
        weight: 10,
        badge: Some("Meme Parent"),
        score_multiplier: Some(1.1),
    },
    EndingDef {
        id: "megacorp_partnership",
        category: EndingCategory::Narrative,
        emoji: "🏢",
        headline: "MegaCorp Partnership Went Viral",
        subline: "You accidentally onboarded Fortune 500 flows.",
        narrative: "The enterprise pilot was supposed to be quiet. Bloomberg picked it up. Now \
                    you're doing earnings calls. 'Corporate synergy transition complete.'",
        trigger: t_megacorp_partnership,
        weight: 6,
        badge: Some("Enterprise Chad"),
        score_multiplier: Some(1.4),
    },
    EndingDef {
        id: "bridge_prison",
        category: EndingCategory::Narrative,
        emoji: "🌉",
        headline: "Bridge Went Down Permanently",
        subline: "Nobody can exit. The chain became a prison.",
        narrative: "The bridge exploit was 'patched' by... turning it off. Now everyone's funds \
                    are stuck forever. 'User retention solved,' you joke. Nobody laughs.",
        trigger: t_bridge_prison,
        weight: 7,
        badge: Some("Warden"),
        score_multiplier: None,
    },
    EndingDef {
        id: "wagmi_mode",
        category: EndingCategory::Narrative,
        emoji: "🌈",
        headline: "WAGMI Mode Activated",
        subline: "Everything aligned perfectly.",
        narrative: "Tech hype exploded. Regulators looked away. The community forgave your \
                    sins. Price pumped. You walk away clean. This never happens. You got lucky.",
        trigger: t_wagmi_mode,
        weight: 5,
        badge: Some("WAGMI"),
        score_multiplier: Some(1.5),
    },
    // --- Player-style ---
    EndingDef {
        id: "master_extractor",
        category: EndingCategory::Style,
        emoji: "💎",
        headline: "Master Extractor",
        subline: "You siphoned more than 70% of the treasury.",
        narrative: "Seven hundred million dollars. Gone. Into your pockets. Nobody caught you. \
                    You retire to a private island. Legend status unlocked.",
        trigger: t_master_extractor,
        weight: 20,
        badge: Some("Bag Maximalist"),
        score_multiplier: Some(2.0),
    },
    EndingDef {
        id: "governance_theatre",
        category: EndingCategory::Style,
        emoji: "🎭",
        headline: "Governance Theatre Enjoyer",
        subline: "You confused everyone with votes.",
        narrative: "Proposal after proposal. Vote after vote. Nobody understood what passed. \
                    The DAO holds a festival in your honor for 'creative process management.'",
        trigger: t_governance_theatre,
        weight: 15,
        badge: Some("Process Maximalist"),
        score_multiplier: Some(1.15),
    },
    EndingDef {
        id: "narrative_wizard",
        category: EndingCategory::Style,
        emoji: "✨",
        headline: "Narrative Wizard",
        subline: "You kept hype above 80 the whole time.",
        narrative: "ZK this. AI that. DePIN everything. You shipped nothing but vibes. Somehow, \
                    it worked. You become a full-time 'visionary.'",
        trigger: t_narrative_wizard,
        weight: 12,
        badge: Some("Thought Leader"),
        score_multiplier: Some(1.2),
    },
    EndingDef {
        id: "crisis_lord",
        category: EndingCategory::Style,
        emoji: "🔥",
        headline: "Crisis Lord",
        subline: "You survived 8+ crises.",
        narrative: "Hacks. Exploits. Scandals. FUD. You faced them all and somehow lived. You \
                    now tour conferences teaching 'crypto resilience.' Ironic, since you caused \
                    most of them.",
        trigger: t_crisis_lord,
        weight: 10,
        badge: Some("Chaos Surfer"),
        score_multiplier: Some(1.25),
    },
    EndingDef {
        id: "ironic_award",
        category: EndingCategory::Style,
        emoji: "🏅",
        headline: "Founder of the Year (Ironically)",
        subline: "You did everything wrong but survived anyway.",
        narrative: "Low cred. High heat. An angry community. Yet here you are. CT awards you an \
                    ironically prestigious award. You can't tell if it's a diss.",
        trigger: t_ironic_award,
        weight: 8,
        badge: Some("Irony Award Winner"),
        score_multiplier: Some(1.1),
    },
];

/// Governance action ids, for play-style counting.
const GOVERNANCE_ACTIONS: &[&str] = &[
    "emergency_emissions_vote",
    "lp_incentives_adjust",
    "treasury_diversification",
    "delegate_program",
    "freeze_governance",
    "community_roundtable",
    "snapshot_3am",
    "zombie_proposal",
];

fn survived(s: &GameState) -> bool {
    s.turn >= s.max_turns
}

fn reason_lower(s: &GameState) -> String {
    s.game_over_reason.as_deref().unwrap_or("").to_lowercase()
}

fn failed_by_rage(s: &GameState) -> bool {
    reason_lower(s).contains("coup") || s.rage >= 100.0
}

fn failed_by_heat(s: &GameState) -> bool {
    let reason = reason_lower(s);
    reason.contains("regulatory") || reason.contains("frozen") || s.heat >= 100.0
}

fn failed_by_cred(s: &GameState) -> bool {
    let reason = reason_lower(s);
    reason.contains("credibility") || reason.contains("believes") || s.cred <= 0.0
}

fn governance_plays(s: &GameState) -> usize {
    s.used_action_ids
        .iter()
        .filter(|id| GOVERNANCE_ACTIONS.contains(&id.as_str()))
        .count()
}

fn t_hyperpump(s: &GameState) -> bool {
    survived(s) && s.token_price > 3.0 && s.tech_hype > 70.0
}

fn t_whale_cascade(s: &GameState) -> bool {
    s.token_price < 0.2 && s.tvl < 50_000_000.0
}

fn t_stablecoin_depeg(s: &GameState) -> bool {
    s.official_treasury < 100_000_000.0 && s.token_price < 0.3 && s.cred < 20.0
}

fn t_bot_misinterpret(s: &GameState) -> bool {
    failed_by_rage(s) && s.tech_hype > 40.0
}

fn t_emissions_bankrupt(s: &GameState) -> bool {
    s.official_treasury < 50_000_000.0 && s.siphoned < 100_000_000.0
}

fn t_ct_cancels(s: &GameState) -> bool {
    failed_by_cred(s)
}

fn t_replaced_by_frog(s: &GameState) -> bool {
    failed_by_rage(s) && s.cred < 30.0
}

fn t_ratio_oblivion(s: &GameState) -> bool {
    failed_by_cred(s) && s.rage > 60.0
}

fn t_deepfake_scandal(s: &GameState) -> bool {
    failed_by_cred(s) && s.heat > 50.0
}

fn t_become_meme(s: &GameState) -> bool {
    survived(s) && s.cred < 40.0 && s.siphoned > 100_000_000.0
}

fn t_team_mutiny(s: &GameState) -> bool {
    failed_by_rage(s) && s.cred < 25.0
}

fn t_multisig_lost(s: &GameState) -> bool {
    s.official_treasury > 300_000_000.0 && s.token_price < 0.4 && !survived(s)
}

fn t_cofounder_reveal(s: &GameState) -> bool {
    failed_by_cred(s) && s.turn < 10
}

fn t_dao_installs_bot(s: &GameState) -> bool {
    failed_by_rage(s) && s.tech_hype > 50.0
}

fn t_treasury_miscount(s: &GameState) -> bool {
    s.siphoned > 200_000_000.0 && s.official_treasury < 100_000_000.0
}

fn t_love_letter(s: &GameState) -> bool {
    failed_by_heat(s)
}

fn t_forced_relocate(s: &GameState) -> bool {
    s.heat > 80.0 && survived(s)
}

fn t_exchange_delisting(s: &GameState) -> bool {
    s.heat > 70.0 && s.token_price < 0.5
}

fn t_tax_authority(s: &GameState) -> bool {
    s.siphoned > 150_000_000.0 && s.heat > 60.0
}

fn t_whistleblower(s: &GameState) -> bool {
    s.heat > 90.0 && s.siphoned > 100_000_000.0 && !survived(s)
}

fn t_ai_pivot_works(s: &GameState) -> bool {
    survived(s) && s.tech_hype > 80.0 && s.token_price > 1.5
}

fn t_meme_overtakes(s: &GameState) -> bool {
    survived(s) && s.cred < 50.0 && s.siphoned > 50_000_000.0
}

fn t_megacorp_partnership(s: &GameState) -> bool {
    survived(s) && s.cred > 70.0 && s.tvl > 400_000_000.0
}

fn t_bridge_prison(s: &GameState) -> bool {
    s.tvl < 30_000_000.0 && s.rage > 70.0 && !survived(s)
}

fn t_wagmi_mode(s: &GameState) -> bool {
    survived(s) && s.rage < 30.0 && s.heat < 30.0 && s.cred > 60.0 && s.siphoned > 150_000_000.0
}

fn t_master_extractor(s: &GameState) -> bool {
    survived(s) && s.siphoned > 700_000_000.0
}

fn t_governance_theatre(s: &GameState) -> bool {
    survived(s) && governance_plays(s) >= 5
}

fn t_narrative_wizard(s: &GameState) -> bool {
    survived(s) && s.tech_hype > 80.0
}

fn t_crisis_lord(s: &GameState) -> bool {
    survived(s) && s.crisis_count >= 8
}

fn t_ironic_award(s: &GameState) -> bool {
    survived(s) && s.cred < 40.0 && s.heat > 50.0 && s.siphoned > 100_000_000.0
}
