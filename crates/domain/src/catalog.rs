//! Static catalogs: quests, default rewards, caption fragments and fixed awards.

use crate::entities::{QuestTemplate, RewardTemplate};

/// The quests a draw picks from
pub const QUESTS: [QuestTemplate; 7] = [
    QuestTemplate::new(
        "Send a ridiculous meme to someone you haven’t messaged in 3+ months",
        8,
        2,
    ),
    QuestTemplate::new(
        "Rearrange 3 tiny objects in Corey’s space. Observe silently.",
        10,
        4,
    ),
    QuestTemplate::new("Do 10 push-ups or 30s dance break (your choice)", 6, 0),
    QuestTemplate::new("Organize one chaotic corner (5 minutes max timer)", 7, 1),
    QuestTemplate::new("Compliment a stranger or coworker (genuine)", 6, 0),
    QuestTemplate::new("No-spend hour: dodge every purchase impulse", 9, 0),
    QuestTemplate::new("Secret bonus: teach Donnie a new trick attempt", 12, 2),
];

/// Fixed side quest handed out when temptation goes weird
pub const WEIRD_SIDE_QUEST: &str =
    "Up the chaos: speak only in emoji for 10 minutes with a friend 👀";
pub const WEIRD_SIDE_QUEST_XP: u32 = 5;
pub const WEIRD_SIDE_QUEST_MISCHIEF: u32 = 3;

/// Jackpot prize, paid instead of a catalog pick
pub const JACKPOT_NAME: &str = "JACKPOT: Surprise $15 treat budget";
pub const JACKPOT_STAR_VALUE: u32 = 8;

pub const CAPTION_BITS: [&str; 6] = [
    "🔮 Portals open at inconvenient times.",
    "🪙 Chaotic neutral approved.",
    "👑 The Goblin King demands tribute.",
    "🦴 Donnie said post it, so we posted it.",
    "🌀 Found in a pocket dimension.",
    "✨ Artifact rarity: questionable.",
];

pub const CAPTION_HASHTAGS: &str = "#StrangeDrip #goblincore #cryptid #weirdart #trippy";

/// Reward catalog used until the user has a stored one
pub fn default_rewards() -> Vec<RewardTemplate> {
    vec![
        RewardTemplate::new("Iced coffee", 1),
        RewardTemplate::new("MTG common pack (budget)", 2),
        RewardTemplate::new("Take a 30-min guilt-free break", 1),
        RewardTemplate::new("Snack splurge", 1),
        RewardTemplate::new("You get... a high-five from Donnie", 0),
        RewardTemplate::new("Jackpot: $10 fun budget", 5),
    ]
}

pub fn jackpot_reward() -> RewardTemplate {
    RewardTemplate::new(JACKPOT_NAME, JACKPOT_STAR_VALUE)
}

/// Map a uniform draw in `[0, 1)` to an index in `0..len`.
///
/// Out-of-range draws are clamped so a misbehaving random source can never
/// index past the end. Returns `None` for an empty list.
pub fn pick_index(len: usize, roll: f64) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let scaled = (roll.clamp(0.0, 1.0) * len as f64).floor() as usize;
    Some(scaled.min(len - 1))
}
