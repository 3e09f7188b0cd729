//! Category guessing for score attribution.

use crate::battle::score::Category;
use crate::core::random::RandomSource;
use crate::heuristics::vocabulary::{CATEGORY_KEYWORDS, count_hits};

/// Guess which score category an argument speaks to.
///
/// Counts keyword hits per category; the most hits wins, ties resolve
/// to the earliest category in [`Category::ALL`] order. With zero hits
/// the category is drawn uniformly at random.
pub fn guess_category(text: &str, rng: &mut dyn RandomSource) -> Category {
    let text = text.to_lowercase();

    let mut best = Category::Logic;
    let mut max_hits = 0;
    for (category, keywords) in Category::ALL.iter().zip(CATEGORY_KEYWORDS) {
        let hits = count_hits(&text, keywords);
        if hits > max_hits {
            max_hits = hits;
            best = *category;
        }
    }

    if max_hits == 0 {
        return Category::ALL[rng.pick_index(Category::ALL.len())];
    }
    best
}
