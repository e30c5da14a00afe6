//! Verdict prose for compatibility reports
//!
//! Picks a fixed insight line per category from the overlap tier. Overall is
//! three-tiered on percentage; most categories tier on percentage plus whether
//! any exact overlap exists; sleep special-cases the early-bird/night-owl split
//! and wellness is a simple overlap/no-overlap pair.

use crate::domain::category::Category;
use crate::domain::overlap::OverlapResult;

const HIGH_THRESHOLD: u8 = 50;
const OVERALL_MEDIUM_THRESHOLD: u8 = 30;

/// Overall-match verdict line
pub fn overall_insight(result: &OverlapResult) -> &'static str {
    if result.percentage >= HIGH_THRESHOLD {
        "You're vibing on the same wavelength! Shared interests across sleep, lifestyle, and adventures - this match has serious potential."
    } else if result.percentage >= OVERALL_MEDIUM_THRESHOLD {
        "Different styles, shared passions. Your unique approaches could make for an exciting dynamic - balance meets adventure!"
    } else {
        "Opposites can attract! Your different lifestyles might bring fresh perspectives and new experiences to explore together."
    }
}

/// Per-category verdict line
pub fn category_insight(category: Category, result: &OverlapResult) -> String {
    let high = result.percentage >= HIGH_THRESHOLD;
    match category {
        Category::Sleep => sleep_insight(result).to_string(),
        Category::Wellness => {
            if result.has_overlap() {
                "Wellness twins! You both prioritize mental health and mindfulness. Supporting each other's self-care will come naturally.".to_string()
            } else {
                "Different wellness approaches - one might meditate while the other recharges differently. Both valid, both supportive!".to_string()
            }
        }
        Category::Activity => {
            if high {
                "Fitness power couple alert! You're both active with overlapping workout styles. Gym dates and active adventures are in your future.".to_string()
            } else if result.has_overlap() {
                "Active lifestyles with different approaches - you'll motivate each other while keeping your own routines. Perfect balance!".to_string()
            } else {
                "One's more active than the other, but that's cool! You can join sometimes or enjoy your own thing. Respect the hustle!".to_string()
            }
        }
        Category::Food => {
            if high {
                format!(
                    "Date night gold! You both love {}. Exploring new spots together will be a breeze.",
                    join_first_two(&result.exact_overlap)
                )
            } else if result.has_overlap() {
                format!(
                    "Some shared favorites like {}, but you'll each expand the other's palate. Adventure awaits!",
                    result.exact_overlap[0]
                )
            } else {
                "Totally different food vibes! Could be fun - you'll discover each other's favorite spots and try new cuisines together.".to_string()
            }
        }
        Category::Lifestyle => {
            if high {
                format!(
                    "Major lifestyle sync! {} shared interests including {}. You'll never run out of things to do together!",
                    result.exact_overlap.len(),
                    join_first_two(&result.exact_overlap)
                )
            } else if result.has_overlap() {
                "Some shared hobbies, some solo interests. The perfect mix of together time and personal space for growth.".to_string()
            } else {
                "Very different lifestyles - means you'll introduce each other to new worlds. Growth through exploration!".to_string()
            }
        }
        Category::Entertainment => {
            if high {
                "Same fun frequency! Game nights, concerts, or a big match - you already agree on how to spend a free evening.".to_string()
            } else if result.has_overlap() {
                "Some shared entertainment picks with room to trade favorites. Expect a few surprising recommendations!".to_string()
            } else {
                "Completely different ideas of fun - take turns planning and you'll both end up somewhere new.".to_string()
            }
        }
    }
}

fn sleep_insight(result: &OverlapResult) -> &'static str {
    if result.has_overlap() {
        return "Sleep sync! You both value quality rest and have compatible bedtime vibes. Late-night talks won't mess with your rhythms.";
    }
    let unique_has = |tag: &str| {
        result.only_in_first.iter().any(|t| t == tag)
            || result.only_in_second.iter().any(|t| t == tag)
    };
    if unique_has("Early Bird") && unique_has("Night Owl") {
        "Classic early bird meets night owl! Your peak energy times differ, but that just means more solo time and sweet reunions."
    } else {
        "Different sleep styles could work - one winds down while the other gets things done. Just means respecting each other's zones!"
    }
}

fn join_first_two(tags: &[String]) -> String {
    match tags {
        [] => "similar tastes".to_string(),
        [one] => one.clone(),
        [one, two, ..] => format!("{} and {}", one, two),
    }
}
