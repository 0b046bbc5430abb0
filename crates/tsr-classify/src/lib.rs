//! `tsr-classify` — GTSRB sign catalog, mock classifier, and alert text.
//!
//! | Module    | Role                                                    |
//! |-----------|---------------------------------------------------------|
//! | `catalog` | The 43 benchmark classes: names, categories, guidance   |
//! | `result`  | The `Classification` record and its wire form           |
//! | `mock`    | Seeded, deterministic generator of classifications      |
//! | `alerts`  | Six-language alert sentences and voice tags             |
//!
//! The classifier here is a deterministic stand-in for a trained image
//! model: it yields the same record shape the real model would, derived
//! from the catalog and a session seed instead of from pixels.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tsr_classify::{alert_text, Language, MockClassifier};
//!
//! let clf = MockClassifier::new(42);
//! let result = clf.classify_named("Stop", 1_700_000_000).unwrap();
//! println!("{}", alert_text(Language::En, &result));
//! ```

pub mod alerts;
pub mod catalog;
pub mod mock;
pub mod result;

#[cfg(test)]
mod tests;

pub use alerts::{alert_text, Language};
pub use catalog::GTSRB_CLASSES;
pub use mock::MockClassifier;
pub use result::{Classification, Prediction};
