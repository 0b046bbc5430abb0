//! A deterministic stand-in for the trained sign classifier.
//!
//! # Why this exists
//!
//! The real classifier is an image network; the playback engine only needs
//! the record it emits.  `MockClassifier` produces plausible records from
//! the catalog alone, with one per-(seed, class) RNG stream so re-scanning
//! the same sign in a session reports the same confidence, the way a frozen
//! model with fixed weights would.
//!
//! Runner-up predictions are same-category confusions (a curve sign gets
//! mistaken for another warning triangle, not for a speed limit), with
//! confidences spread 15 and 30 points under the primary.

use tsr_core::{ClassId, SimRng};

use crate::catalog;
use crate::result::{Classification, Prediction};

/// Primary confidence range in percent.
const CONFIDENCE_LO: f64 = 86.0;
const CONFIDENCE_HI: f64 = 99.0;

/// Seeded generator of [`Classification`] records.
#[derive(Copy, Clone, Debug)]
pub struct MockClassifier {
    seed: u64,
}

impl MockClassifier {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Classify `class` as scanned at `unix_time_secs`.
    ///
    /// Returns `None` for a class id outside the catalog.  Everything but
    /// the timestamp is a pure function of `(seed, class)`.
    pub fn classify_at(&self, class: ClassId, unix_time_secs: i64) -> Option<Classification> {
        let name = catalog::class_name(class)?;
        let category = catalog::category_of(class)?;
        let instruction = catalog::instruction_for(class)?;

        let mut rng = SimRng::for_class(self.seed, class);
        let confidence = round1(rng.gen_range(CONFIDENCE_LO..CONFIDENCE_HI));

        // Two distinct same-category runners-up.  Every category holds at
        // least six classes, so both picks always exist.
        let mut pool = catalog::classes_in(category);
        pool.retain(|&c| c != class);
        let first = *rng.choose(&pool)?;
        pool.retain(|&c| c != first);
        let second = *rng.choose(&pool)?;

        let top_predictions = vec![
            Prediction {
                name:       name.to_string(),
                confidence,
            },
            Prediction {
                name:       catalog::class_name(first)?.to_string(),
                confidence: round1((confidence - 15.0).max(5.0)),
            },
            Prediction {
                name:       catalog::class_name(second)?.to_string(),
                confidence: round1((confidence - 30.0).max(2.0)),
            },
        ];

        Some(Classification {
            sign_name: name.to_string(),
            category,
            confidence,
            instruction: instruction.to_string(),
            warning_level: category.default_warning(),
            german_gtsrb_class: class,
            top_predictions,
            image: None,
            unix_time_secs,
        })
    }

    /// Classify by exact catalog name.
    ///
    /// Returns `None` when the name is not a GTSRB class name.
    pub fn classify_named(&self, name: &str, unix_time_secs: i64) -> Option<Classification> {
        let class = catalog::class_named(name)?;
        self.classify_at(class, unix_time_secs)
    }
}

/// Round to one decimal place, the precision confidence is displayed at.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
