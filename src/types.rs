//! Core data types for the FieldLens client.
//!
//! This module defines the wire model returned by the prediction service and
//! the formatting helpers the UI uses to turn it into displayable text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{ARTWORK_BASE_URL, MAX_PREDICTION_BARS};

/// A single ranked guess returned by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Species name for this guess; the service may return blank entries
    /// for classes it could not resolve to a catalog name.
    pub name: String,
    /// Model-reported probability in `[0, 1]`.
    pub confidence: f32,
}

impl Prediction {
    /// Renders the confidence as a percentage with one decimal place,
    /// e.g. `0.823` becomes `82.3%`.
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }

    /// Fraction of a full bar this prediction should fill, clamped to `[0, 1]`
    /// so malformed confidences never overflow the bar.
    pub fn bar_fill(&self) -> f32 {
        self.confidence.clamp(0.0, 1.0)
    }
}

/// The catalog entry and prediction set returned by `POST /predict/upload`.
///
/// Field names mirror the service's JSON response exactly; `predictions`
/// defaults to empty so a response without it still decodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesProfile {
    /// Position of the species in the field guide catalog.
    pub dex_number: u32,
    /// Display name of the identified species.
    pub name: String,
    /// Typical height in meters.
    pub height: f64,
    /// Typical weight in kilograms.
    pub weight: f64,
    /// Short flavor description from the catalog.
    pub description: String,
    /// Elemental/habitat type tags.
    #[serde(default)]
    pub types: Vec<String>,
    /// Base stat table keyed by snake_case stat name.
    #[serde(default)]
    pub base_stats: BTreeMap<String, u32>,
    /// Ranked predictions, best first as received. The service pre-sorts;
    /// the client preserves order and never re-sorts.
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

impl SpeciesProfile {
    /// Catalog label with the number zero-padded to three digits, e.g. `#001`.
    pub fn dex_label(&self) -> String {
        format!("#{:03}", self.dex_number)
    }

    /// URL of the official artwork for this species on the asset host.
    pub fn artwork_url(&self) -> String {
        format!("{}/images/{:03}.png", ARTWORK_BASE_URL, self.dex_number)
    }

    /// The predictions worth showing: entries with a non-blank name, in
    /// received order, capped at the bar limit.
    pub fn top_predictions(&self) -> Vec<&Prediction> {
        self.predictions
            .iter()
            .filter(|p| !p.name.trim().is_empty())
            .take(MAX_PREDICTION_BARS)
            .collect()
    }
}

/// Turns a snake_case stat key into its display form: underscores become
/// spaces and each word is capitalized (`special_attack` → `Special Attack`).
pub fn display_stat_name(raw: &str) -> String {
    raw.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_predictions(predictions: Vec<Prediction>) -> SpeciesProfile {
        SpeciesProfile {
            dex_number: 1,
            name: "Verdanix".to_string(),
            height: 0.7,
            weight: 6.9,
            description: "A seed on its back soaks up sunlight.".to_string(),
            types: vec!["grass".to_string()],
            base_stats: BTreeMap::new(),
            predictions,
        }
    }

    #[test]
    fn dex_label_zero_pads_to_three_digits() {
        let mut profile = profile_with_predictions(Vec::new());
        assert_eq!(profile.dex_label(), "#001");

        profile.dex_number = 42;
        assert_eq!(profile.dex_label(), "#042");

        profile.dex_number = 1234;
        assert_eq!(profile.dex_label(), "#1234");
    }

    #[test]
    fn artwork_url_uses_padded_dex_number() {
        let profile = profile_with_predictions(Vec::new());
        assert_eq!(
            profile.artwork_url(),
            format!("{}/images/001.png", ARTWORK_BASE_URL)
        );
    }

    #[test]
    fn percent_label_has_one_decimal_place() {
        let pred = Prediction {
            name: "A".to_string(),
            confidence: 0.823,
        };
        assert_eq!(pred.percent_label(), "82.3%");

        let pred = Prediction {
            name: "B".to_string(),
            confidence: 0.1,
        };
        assert_eq!(pred.percent_label(), "10.0%");
    }

    #[test]
    fn bar_fill_clamps_out_of_range_confidence() {
        let pred = Prediction {
            name: "A".to_string(),
            confidence: 1.7,
        };
        assert_eq!(pred.bar_fill(), 1.0);

        let pred = Prediction {
            name: "B".to_string(),
            confidence: -0.2,
        };
        assert_eq!(pred.bar_fill(), 0.0);
    }

    #[test]
    fn top_predictions_skips_blank_names_and_preserves_order() {
        let profile = profile_with_predictions(vec![
            Prediction {
                name: "A".to_string(),
                confidence: 0.823,
            },
            Prediction {
                name: "".to_string(),
                confidence: 0.5,
            },
            Prediction {
                name: "B".to_string(),
                confidence: 0.1,
            },
        ]);

        let top = profile.top_predictions();
        let rendered: Vec<String> = top
            .iter()
            .map(|p| format!("{} ({})", p.name, p.percent_label()))
            .collect();
        assert_eq!(rendered, vec!["A (82.3%)", "B (10.0%)"]);
    }

    #[test]
    fn top_predictions_skips_whitespace_only_names() {
        let profile = profile_with_predictions(vec![
            Prediction {
                name: "   ".to_string(),
                confidence: 0.9,
            },
            Prediction {
                name: "C".to_string(),
                confidence: 0.05,
            },
        ]);

        let top = profile.top_predictions();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "C");
    }

    #[test]
    fn top_predictions_caps_at_three() {
        let predictions = (0..5)
            .map(|i| Prediction {
                name: format!("P{i}"),
                confidence: 0.2,
            })
            .collect();
        let profile = profile_with_predictions(predictions);

        let top = profile.top_predictions();
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].name, "P0");
        assert_eq!(top[2].name, "P2");
    }

    #[test]
    fn profile_decodes_full_service_response() {
        let json = r#"{
            "dex_number": 7,
            "name": "Tidelet",
            "height": 0.5,
            "weight": 9.0,
            "description": "Sprays foam from its shell when startled.",
            "types": ["water"],
            "base_stats": {"hp": 44, "special_attack": 50},
            "predictions": [
                {"name": "Tidelet", "confidence": 0.91},
                {"name": "Dampuff", "confidence": 0.06}
            ]
        }"#;

        let profile: SpeciesProfile = serde_json::from_str(json).expect("decode");
        assert_eq!(profile.dex_label(), "#007");
        assert_eq!(profile.predictions.len(), 2);
        assert_eq!(profile.base_stats["special_attack"], 50);
    }

    #[test]
    fn profile_decodes_without_predictions_field() {
        let json = r#"{
            "dex_number": 25,
            "name": "Voltail",
            "height": 0.4,
            "weight": 6.0,
            "description": "Stores static in its cheeks."
        }"#;

        let profile: SpeciesProfile = serde_json::from_str(json).expect("decode");
        assert!(profile.predictions.is_empty());
        assert!(profile.types.is_empty());
        assert!(profile.top_predictions().is_empty());
    }

    #[test]
    fn display_stat_name_replaces_underscores_and_capitalizes() {
        assert_eq!(display_stat_name("hp"), "Hp");
        assert_eq!(display_stat_name("special_attack"), "Special Attack");
        assert_eq!(display_stat_name("speed"), "Speed");
    }
}
