//! Tests for the catalog, mock classifier, and alert rendering.

use tsr_core::{ClassId, SignCategory, WarningLevel};

use crate::mock::MockClassifier;

const SEED: u64 = 42;

fn classifier() -> MockClassifier {
    MockClassifier::new(SEED)
}

#[cfg(test)]
mod catalog_tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn every_class_has_name_category_and_instruction() {
        for i in 0..43u8 {
            let class = ClassId(i);
            let name = catalog::class_name(class);
            assert!(name.is_some(), "class {i} has no name");
            assert!(catalog::category_of(class).is_some(), "class {i} has no category");
            let instruction = catalog::instruction_for(class);
            assert!(instruction.is_some(), "class {i} has no instruction");
            assert!(
                !instruction.unwrap().ends_with('.'),
                "instruction for class {i} must splice mid-sentence"
            );
        }
    }

    #[test]
    fn out_of_range_ids_resolve_to_nothing() {
        assert_eq!(catalog::class_name(ClassId(43)), None);
        assert_eq!(catalog::category_of(ClassId(43)), None);
        assert_eq!(catalog::instruction_for(ClassId(200)), None);
    }

    #[test]
    fn name_lookup_round_trips() {
        for i in 0..43u8 {
            let class = ClassId(i);
            let name = catalog::class_name(class).unwrap();
            assert_eq!(catalog::class_named(name), Some(class), "name {name:?}");
        }
        assert_eq!(catalog::class_named("Warp Drive Ahead"), None);
    }

    #[test]
    fn categories_partition_the_catalog() {
        let sizes: Vec<usize> = SignCategory::ALL
            .iter()
            .map(|&c| catalog::classes_in(c).len())
            .collect();
        // Prohibition, Danger, Mandatory, Speed, Other.
        assert_eq!(sizes, vec![6, 14, 8, 9, 6]);
        assert_eq!(sizes.iter().sum::<usize>(), 43);
    }

    #[test]
    fn benchmark_taxonomy_spot_checks() {
        use catalog::category_of;
        assert_eq!(category_of(ClassId(2)), Some(SignCategory::Speed)); // Speed Limit 50
        assert_eq!(category_of(ClassId(9)), Some(SignCategory::Prohibition)); // No Passing
        assert_eq!(category_of(ClassId(13)), Some(SignCategory::Other)); // Yield
        assert_eq!(category_of(ClassId(14)), Some(SignCategory::Prohibition)); // Stop
        assert_eq!(category_of(ClassId(27)), Some(SignCategory::Danger)); // Pedestrian Crossing
        assert_eq!(category_of(ClassId(40)), Some(SignCategory::Mandatory)); // Roundabout
        assert_eq!(category_of(ClassId(42)), Some(SignCategory::Other)); // End No Passing Trucks
    }

    #[test]
    fn demo_track_sign_names_all_resolve() {
        let expected = [
            ("Speed Limit 50", 2),
            ("Yield", 13),
            ("Stop", 14),
            ("No Entry", 17),
            ("Pedestrian Crossing", 27),
            ("Road Work", 25),
            ("Keep Right", 38),
            ("Roundabout", 40),
        ];
        for (name, id) in expected {
            assert_eq!(catalog::class_named(name), Some(ClassId(id)), "name {name:?}");
        }
    }

    #[test]
    fn instruction_wording_spot_checks() {
        assert_eq!(
            catalog::instruction_for(ClassId(14)),
            Some("Come to a complete stop")
        );
        assert_eq!(
            catalog::instruction_for(ClassId(2)),
            Some("Limit speed to 50 km/h")
        );
    }
}

#[cfg(test)]
mod mock_tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn same_seed_and_class_replays_identically() {
        let clf = classifier();
        let a = clf.classify_at(ClassId(14), 1_700_000_000).unwrap();
        let b = clf.classify_at(ClassId(14), 1_700_000_000).unwrap();
        assert_eq!(a, b);

        // A second classifier with the same seed is the same model.
        let c = MockClassifier::new(SEED).classify_at(ClassId(14), 1_700_000_000).unwrap();
        assert_eq!(a, c);
    }

    #[test]
    fn timestamp_is_the_only_scan_dependent_field() {
        let clf = classifier();
        let a = clf.classify_at(ClassId(5), 100).unwrap();
        let b = clf.classify_at(ClassId(5), 200).unwrap();
        assert_eq!(a.unix_time_secs, 100);
        assert_eq!(b.unix_time_secs, 200);
        assert_eq!(a.confidence, b.confidence);
        assert_eq!(a.top_predictions, b.top_predictions);
    }

    #[test]
    fn records_are_well_formed_for_every_class() {
        let clf = classifier();
        for i in 0..43u8 {
            let class = ClassId(i);
            let r = clf.classify_at(class, 0).unwrap();

            assert_eq!(r.german_gtsrb_class, class);
            assert_eq!(Some(r.sign_name.as_str()), catalog::class_name(class));
            assert_eq!(Some(r.category), catalog::category_of(class));
            assert_eq!(r.warning_level, r.category.default_warning());
            assert!(r.image.is_none(), "simulated scans carry no image");

            assert!(
                (86.0..=99.0).contains(&r.confidence),
                "class {i}: confidence {} out of range",
                r.confidence
            );
        }
    }

    #[test]
    fn top_predictions_are_category_confusions() {
        let clf = classifier();
        for i in 0..43u8 {
            let class = ClassId(i);
            let r = clf.classify_at(class, 0).unwrap();
            let top = &r.top_predictions;

            assert_eq!(top.len(), 3, "class {i}");
            assert_eq!(top[0].name, r.sign_name);
            assert_eq!(top[0].confidence, r.confidence);
            assert_eq!(top[1].confidence, ((r.confidence - 15.0).max(5.0) * 10.0).round() / 10.0);
            assert_eq!(top[2].confidence, ((r.confidence - 30.0).max(2.0) * 10.0).round() / 10.0);

            // Runners-up are distinct signs from the same category.
            assert_ne!(top[1].name, top[0].name, "class {i}");
            assert_ne!(top[2].name, top[0].name, "class {i}");
            assert_ne!(top[2].name, top[1].name, "class {i}");
            for p in &top[1..] {
                let sibling = catalog::class_named(&p.name).unwrap();
                assert_eq!(
                    catalog::category_of(sibling),
                    Some(r.category),
                    "class {i}: runner-up {} crossed categories",
                    p.name
                );
            }
        }
    }

    #[test]
    fn warning_levels_follow_the_category() {
        let clf = classifier();
        let stop = clf.classify_at(ClassId(14), 0).unwrap();
        assert_eq!(stop.warning_level, WarningLevel::High);

        let limit = clf.classify_at(ClassId(2), 0).unwrap();
        assert_eq!(limit.warning_level, WarningLevel::Medium);

        let priority = clf.classify_at(ClassId(12), 0).unwrap();
        assert_eq!(priority.warning_level, WarningLevel::Low);
    }

    #[test]
    fn lookup_by_name_matches_lookup_by_class() {
        let clf = classifier();
        let by_name = clf.classify_named("Road Work", 7).unwrap();
        let by_class = clf.classify_at(ClassId(25), 7).unwrap();
        assert_eq!(by_name, by_class);

        assert!(clf.classify_named("Not A Sign", 7).is_none());
        assert!(clf.classify_at(ClassId(43), 7).is_none());
    }
}

#[cfg(test)]
mod alert_tests {
    use super::*;
    use crate::alerts::{alert_text, Language};

    #[test]
    fn english_template_renders_exactly() {
        let r = classifier().classify_at(ClassId(14), 0).unwrap();
        assert_eq!(
            alert_text(Language::En, &r),
            "Warning! Stop detected. Come to a complete stop. Please comply."
        );
    }

    #[test]
    fn every_language_embeds_name_and_instruction() {
        let r = classifier().classify_at(ClassId(25), 0).unwrap();
        for lang in Language::ALL {
            let text = alert_text(lang, &r);
            assert!(text.contains(&r.sign_name), "{lang}: {text}");
            assert!(text.contains(&r.instruction), "{lang}: {text}");
        }
    }

    #[test]
    fn codes_round_trip_and_unknown_falls_back_to_english() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
        assert_eq!(Language::from_code("xx"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
    }

    #[test]
    fn voice_tags_match_the_supported_set() {
        let voices: Vec<&str> = Language::ALL.iter().map(|l| l.voice()).collect();
        assert_eq!(voices, vec!["en-US", "es-ES", "fr-FR", "de-DE", "hi-IN", "te-IN"]);
    }

    #[test]
    fn default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(Language::En.to_string(), "English");
    }
}

#[cfg(test)]
mod wire_tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn record_serializes_with_camel_case_wire_names() {
        let r = classifier().classify_at(ClassId(14), 1_700_000_000).unwrap();
        let value = serde_json::to_value(&r).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "category",
                "confidence",
                "germanGTSRBClass",
                "instruction",
                "signName",
                "timestamp",
                "topPredictions",
                "warningLevel",
            ],
            "image must be omitted when absent"
        );

        assert_eq!(obj["signName"], Value::from("Stop"));
        assert_eq!(obj["category"], Value::from("Prohibition"));
        assert_eq!(obj["warningLevel"], Value::from("high"));
        assert_eq!(obj["germanGTSRBClass"], Value::from(14));
        assert_eq!(obj["timestamp"], Value::from(1_700_000_000));
        assert_eq!(obj["topPredictions"].as_array().unwrap().len(), 3);
        assert!(obj["topPredictions"][0]["name"].is_string());
        assert!(obj["topPredictions"][0]["confidence"].is_number());
    }

    #[test]
    fn record_round_trips_through_json() {
        let mut r = classifier().classify_at(ClassId(27), 123).unwrap();
        r.image = Some("data:image/png;base64,AAAA".to_string());

        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"image\""));
        let back: crate::Classification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn category_labels_serialize_verbatim() {
        let clf = classifier();
        let cases = [
            (ClassId(2), "Speed Regulation"),
            (ClassId(27), "Danger Warning"),
            (ClassId(14), "Prohibition"),
            (ClassId(38), "Mandatory"),
            (ClassId(13), "Other"),
        ];
        for (class, label) in cases {
            let r = clf.classify_at(class, 0).unwrap();
            let value = serde_json::to_value(&r).unwrap();
            assert_eq!(value["category"], Value::from(label), "class {class}");
        }
    }
}
