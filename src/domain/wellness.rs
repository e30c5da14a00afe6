//! Solo scoring
//!
//! Scores a single person's selection without a partner: a wellness score built
//! from per-tag adjustments on a base of 50, and per-category weighted averages
//! where unlisted tags fall back to a default weight.

use crate::domain::category::Category;
use crate::domain::selection::Selection;

/// Weight assumed for tags missing from a category's table
const DEFAULT_WEIGHT: u32 = 60;

/// Score shown for a category with nothing selected
const EMPTY_SCORE: u8 = 50;

/// Wellness score for a whole selection: base 50, adjusted per tag, clamped to 0-100
pub fn wellness_score(selection: &Selection) -> u8 {
    let mut score: i32 = 50;

    for tag in selection.tags_for(Category::Sleep) {
        score += match tag.as_str() {
            "Sleep Achiever" => 8,
            "Early Bird" => 5,
            "Restless Sleeper" => -5,
            "All-Nighter Pro" => -8,
            _ => 0,
        };
    }

    for tag in selection.tags_for(Category::Activity) {
        score += match tag.as_str() {
            "Marathon Walker" => 10,
            "Runner Pro" => 10,
            "Yogi" => 8,
            "Weight Lifter" => 8,
            "Off Beat Mover" => -10,
            "Step Starter" => -5,
            _ => 0,
        };
    }

    for tag in selection.tags_for(Category::Wellness) {
        score += match tag.as_str() {
            "Calm App User" => 5,
            "Spa Day Lover" => 4,
            "Supplement User" => 3,
            _ => 0,
        };
    }

    for tag in selection.tags_for(Category::Food) {
        score += match tag.as_str() {
            "Home Chef" => 5,
            "Vegetarian Fun" => 4,
            "Fast Food Fan" => -3,
            _ => 0,
        };
    }

    score.clamp(0, 100) as u8
}

/// Weighted average score for one category's tags.
///
/// Known tags use the category's weight table, unknown tags count as
/// `DEFAULT_WEIGHT`, and an empty selection scores `EMPTY_SCORE`. The mean is
/// rounded half away from zero.
pub fn category_score(tags: &[String], category: Category) -> u8 {
    if tags.is_empty() {
        return EMPTY_SCORE;
    }

    let sum: u32 = tags
        .iter()
        .map(|tag| weight(category, tag).unwrap_or(DEFAULT_WEIGHT))
        .sum();
    (sum as f64 / tags.len() as f64).round() as u8
}

fn weight(category: Category, tag: &str) -> Option<u32> {
    let value = match category {
        Category::Sleep => match tag {
            "Sleep Achiever" => 95,
            "Early Bird" => 85,
            "Lights-Out Sleeper" => 80,
            "Nap Taker" => 75,
            "Night Owl" => 70,
            "Weekend Snoozer" => 65,
            "Restless Sleeper" => 40,
            "All-Nighter Pro" => 35,
            _ => return None,
        },
        Category::Activity => match tag {
            "Marathon Walker" => 95,
            "Runner Pro" => 95,
            "Yogi" => 90,
            "Weight Lifter" => 90,
            "Sunrise Sweater" => 88,
            "Cyclist" => 85,
            "Swimmer" => 85,
            "Active Hiker" => 85,
            "Run Regular" => 82,
            "Step Master" => 80,
            "Step Explorer" => 70,
            "Step Starter" => 55,
            "Off Beat Mover" => 30,
            _ => return None,
        },
        Category::Food => match tag {
            "Home Chef" => 90,
            "Mediterranean Food Seeker" => 88,
            "Vegetarian Fun" => 85,
            "Sushi Lover" => 80,
            "Thai Bites" => 78,
            "Italian Eats" => 75,
            "Breakfast Spot Finder" => 72,
            "Mexican Food Finder" => 70,
            "Chinese Foodie" => 70,
            "Pizza Fan" => 60,
            "Snack Fan" => 50,
            "Fast Food Fan" => 40,
            _ => return None,
        },
        Category::Lifestyle => match tag {
            "Pet Parent" => 85,
            "The Networker" => 80,
            "Coffee Shop Regular" => 75,
            "Sporting Goods Shopper" => 75,
            "Homebody" => 70,
            "Retail Fashion Shopper" => 65,
            "Online Shopper" => 60,
            _ => return None,
        },
        Category::Entertainment => match tag {
            "Music Lover" => 80,
            "Big Crowd Energy" => 78,
            "Console Gamer" => 65,
            "Casino Explorer" => 55,
            _ => return None,
        },
        // Wellness tags feed wellness_score instead of a weight table
        Category::Wellness => return None,
    };
    Some(value)
}
