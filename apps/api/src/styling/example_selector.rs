//! Example Selector — picks few-shot examples relevant to the live request.
//!
//! Plain substring overlap, not a ranking: an example is kept when its user
//! text contains the request's occasion, gender or preferences
//! (case-insensitive). No scoring, no cap on the number kept.

use crate::styling::example_bank::{Example, ExampleBank};
use crate::styling::models::StylingRequest;

/// Examples used when nothing in the bank matches.
const FALLBACK_COUNT: usize = 2;

/// Selects examples for the dynamic few-shot prompt, in bank order.
///
/// Empty or whitespace-only criteria never count as a match, since every
/// string contains the empty string.
pub fn select_examples<'a>(bank: &'a ExampleBank, request: &StylingRequest) -> Vec<&'a Example> {
    let criteria = request.match_criteria();
    let criteria: Vec<&str> = criteria
        .iter()
        .map(|c| c.as_str())
        .filter(|c| !c.trim().is_empty())
        .collect();

    let chosen: Vec<&Example> = if criteria.is_empty() {
        Vec::new()
    } else {
        bank.examples()
            .iter()
            .filter(|example| {
                let text = example.user.to_lowercase();
                criteria.iter().any(|c| text.contains(c))
            })
            .collect()
    };

    if chosen.is_empty() {
        return bank.examples().iter().take(FALLBACK_COUNT).collect();
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(occasion: &str, gender: &str, preferences: &str) -> StylingRequest {
        serde_json::from_value(json!({
            "occasion": occasion,
            "gender": gender,
            "preferences": preferences,
            "budget": "₹3000"
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_preferences_do_not_match_everything() {
        let bank = ExampleBank::default();
        let selected = select_examples(&bank, &request("Casual Day Out", "Female", ""));

        assert!(!selected.is_empty());
        assert_eq!(selected, vec![&bank.examples()[0]]);
    }

    #[test]
    fn test_no_match_falls_back_to_first_two() {
        let bank = ExampleBank::default();
        let selected = select_examples(&bank, &request("Space Gala", "Robot", "None"));

        assert_eq!(selected, vec![&bank.examples()[0], &bank.examples()[1]]);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let bank = ExampleBank::default();
        let selected = select_examples(&bank, &request("EVENING DATE", "robot", ""));

        assert_eq!(selected, vec![&bank.examples()[2]]);
    }

    #[test]
    fn test_multiple_matches_kept_in_bank_order() {
        let bank = ExampleBank::default();
        // "formal" hits the business example, "non-binary" the date example.
        let selected = select_examples(&bank, &request("Wedding", "Non-binary", "Formal"));

        assert_eq!(selected, vec![&bank.examples()[1], &bank.examples()[2]]);
    }

    #[test]
    fn test_substring_semantics_male_matches_female_text() {
        let bank = ExampleBank::default();
        let selected = select_examples(&bank, &request("Space Gala", "Male", ""));

        assert_eq!(selected, vec![&bank.examples()[0], &bank.examples()[1]]);
    }

    #[test]
    fn test_whitespace_and_missing_criteria_fall_back() {
        let bank = ExampleBank::default();
        let blank: StylingRequest =
            serde_json::from_value(json!({"occasion": "  ", "budget": 100})).unwrap();

        assert_eq!(
            select_examples(&bank, &blank),
            vec![&bank.examples()[0], &bank.examples()[1]]
        );
    }

    #[test]
    fn test_empty_bank_selects_nothing() {
        let bank = ExampleBank::new(Vec::new());
        assert!(select_examples(&bank, &request("Casual Day Out", "Female", "")).is_empty());
    }
}
