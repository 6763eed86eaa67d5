//! Built-in sample responses that can be loaded from the UI.
//!
//! These let the species card be explored without a running prediction
//! service, and give the documentation pages something concrete to show.

use std::collections::BTreeMap;

use crate::types::{Prediction, SpeciesProfile};

/// Kinds of built-in samples available from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// A grass-type starter with a near-certain prediction.
    Verdanix,
    /// A water-type with a more ambiguous prediction spread.
    Tidelet,
}

/// Returns all samples with their display names.
pub const fn all_samples() -> &'static [(SampleKind, &'static str)] {
    &[
        (SampleKind::Verdanix, "Verdanix (clear match)"),
        (SampleKind::Tidelet, "Tidelet (ambiguous match)"),
    ]
}

/// Builds the canned profile for the given sample.
pub fn sample_profile(kind: SampleKind) -> SpeciesProfile {
    match kind {
        SampleKind::Verdanix => SpeciesProfile {
            dex_number: 1,
            name: "Verdanix".to_string(),
            height: 0.7,
            weight: 6.9,
            description: "The seed on its back soaks up sunlight and swells \
                          as the creature grows."
                .to_string(),
            types: vec!["grass".to_string(), "poison".to_string()],
            base_stats: stats(&[
                ("hp", 45),
                ("attack", 49),
                ("defense", 49),
                ("special_attack", 65),
                ("special_defense", 65),
                ("speed", 45),
            ]),
            predictions: vec![
                prediction("Verdanix", 0.823),
                prediction("Thornling", 0.102),
                prediction("Mosscap", 0.041),
            ],
        },
        SampleKind::Tidelet => SpeciesProfile {
            dex_number: 7,
            name: "Tidelet".to_string(),
            height: 0.5,
            weight: 9.0,
            description: "Sprays foam from its shell when startled. The shell \
                          hardens after each molt."
                .to_string(),
            types: vec!["water".to_string()],
            base_stats: stats(&[
                ("hp", 44),
                ("attack", 48),
                ("defense", 65),
                ("special_attack", 50),
                ("special_defense", 64),
                ("speed", 43),
            ]),
            predictions: vec![
                prediction("Tidelet", 0.448),
                prediction("Dampuff", 0.391),
                prediction("Shellby", 0.094),
            ],
        },
    }
}

fn prediction(name: &str, confidence: f32) -> Prediction {
    Prediction {
        name: name.to_string(),
        confidence,
    }
}

fn stats(pairs: &[(&str, u32)]) -> BTreeMap<String, u32> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_cover_all_kinds() {
        for (kind, _name) in all_samples() {
            let profile = sample_profile(*kind);
            assert!(!profile.name.is_empty());
            assert!(!profile.predictions.is_empty());
            assert!(profile.top_predictions().len() <= 3);
        }
    }

    #[test]
    fn sample_confidences_stay_in_range() {
        for (kind, _name) in all_samples() {
            for pred in sample_profile(*kind).predictions {
                assert!((0.0..=1.0).contains(&pred.confidence));
            }
        }
    }
}
