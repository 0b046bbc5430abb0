//! Track representation and builder.
//!
//! # Data layout
//!
//! A track is a straight one-dimensional road of fixed length with markers
//! at strictly increasing positions.  Markers are stored in one `Vec` in
//! position order and identified by `MarkerId` = index, so id order, slice
//! order, and position order are all the same ordering.  The proximity scan
//! walks that `Vec` front to back, which is what makes "earliest untriggered
//! marker wins" fall out of iteration order rather than needing a sort.
//!
//! Tracks are immutable after `build()` and shared read-only across runs.

use std::collections::HashSet;
use std::hash::BuildHasher;

use tsr_core::{MarkerId, SignCategory};

use crate::error::{TrackError, TrackResult};

// ── TrackMarker ───────────────────────────────────────────────────────────────

/// One fixed sign position on the track.
///
/// `name` is unique within a track (enforced by the builder) and doubles as
/// the human-facing identity in snapshots and history records.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackMarker {
    pub id:       MarkerId,
    /// Distance from the track start, in simulation distance units.
    pub position: f64,
    pub name:     String,
    pub category: SignCategory,
}

// ── Track ─────────────────────────────────────────────────────────────────────

/// An immutable track: total length plus markers in ascending position order.
///
/// Do not construct directly; use [`TrackBuilder`], which validates the
/// ordering and uniqueness invariants the proximity scan relies on.
#[derive(Clone, Debug)]
pub struct Track {
    length:  f64,
    markers: Vec<TrackMarker>,
}

impl Track {
    /// Total track length in distance units.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The ordered marker list.  Same slice every call.
    #[inline]
    pub fn markers(&self) -> &[TrackMarker] {
        &self.markers
    }

    #[inline]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Look up a marker by id.  `None` for ids from another track.
    #[inline]
    pub fn marker(&self, id: MarkerId) -> Option<&TrackMarker> {
        self.markers.get(id.index())
    }

    /// Look up a marker by its unique name.
    pub fn marker_named(&self, name: &str) -> Option<&TrackMarker> {
        self.markers.iter().find(|m| m.name == name)
    }

    /// First marker, in ascending position order, that is not in `triggered`
    /// and whose distance to `position` is strictly less than `threshold`.
    ///
    /// When two markers sit inside the window at once (possible only with
    /// pathological speed/threshold combinations), the front-to-back scan
    /// deterministically selects the earlier-positioned one.
    pub fn find_proximate<S: BuildHasher>(
        &self,
        position:  f64,
        triggered: &HashSet<MarkerId, S>,
        threshold: f64,
    ) -> Option<&TrackMarker> {
        self.markers
            .iter()
            .find(|m| !triggered.contains(&m.id) && (position - m.position).abs() < threshold)
    }

    /// The replay track of the reference demo: eight GTSRB sign encounters
    /// spread along 1000 units of road.
    pub fn demo() -> Track {
        const TABLE: [(f64, &str, SignCategory); 8] = [
            (80.0,  "Speed Limit 50",      SignCategory::Speed),
            (200.0, "Yield",               SignCategory::Danger),
            (320.0, "Stop",                SignCategory::Prohibition),
            (440.0, "No Entry",            SignCategory::Prohibition),
            (560.0, "Pedestrian Crossing", SignCategory::Danger),
            (680.0, "Road Work",           SignCategory::Danger),
            (800.0, "Keep Right",          SignCategory::Mandatory),
            (920.0, "Roundabout",          SignCategory::Mandatory),
        ];
        // The static table trivially satisfies the builder invariants, so the
        // track is assembled directly with ids in table order.
        let markers = TABLE
            .iter()
            .enumerate()
            .map(|(i, (position, name, category))| TrackMarker {
                id:       MarkerId(i as u32),
                position: *position,
                name:     (*name).to_string(),
                category: *category,
            })
            .collect();
        Track { length: 1_000.0, markers }
    }
}

// ── TrackBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Track`] incrementally, then call [`build`](Self::build).
///
/// Markers must be added in ascending position order; `build()` verifies
/// the ordering, bounds, and name-uniqueness invariants and reports the
/// first violation as a [`TrackError`].
///
/// # Example
///
/// ```
/// use tsr_core::SignCategory;
/// use tsr_track::TrackBuilder;
///
/// let mut b = TrackBuilder::new(500.0);
/// b.marker(120.0, "Stop", SignCategory::Prohibition);
/// b.marker(300.0, "Keep Right", SignCategory::Mandatory);
/// let track = b.build().unwrap();
/// assert_eq!(track.marker_count(), 2);
/// ```
pub struct TrackBuilder {
    length:  f64,
    markers: Vec<TrackMarker>,
}

impl TrackBuilder {
    pub fn new(length: f64) -> Self {
        Self { length, markers: Vec::new() }
    }

    /// Add a marker and return its `MarkerId` (sequential from 0).
    pub fn marker(
        &mut self,
        position: f64,
        name:     impl Into<String>,
        category: SignCategory,
    ) -> MarkerId {
        let id = MarkerId(self.markers.len() as u32);
        self.markers.push(TrackMarker {
            id,
            position,
            name: name.into(),
            category,
        });
        id
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Consume the builder and produce a validated [`Track`].
    pub fn build(self) -> TrackResult<Track> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(TrackError::InvalidLength { length: self.length });
        }

        let mut prev: Option<f64> = None;
        for m in &self.markers {
            if !m.position.is_finite() || m.position <= 0.0 || m.position >= self.length {
                return Err(TrackError::OutOfBounds {
                    name:     m.name.clone(),
                    position: m.position,
                    length:   self.length,
                });
            }
            if let Some(p) = prev {
                if m.position <= p {
                    return Err(TrackError::Unordered {
                        name:     m.name.clone(),
                        position: m.position,
                        previous: p,
                    });
                }
            }
            prev = Some(m.position);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(self.markers.len());
        for m in &self.markers {
            if !seen.insert(m.name.as_str()) {
                return Err(TrackError::DuplicateName { name: m.name.clone() });
            }
        }

        Ok(Track {
            length:  self.length,
            markers: self.markers,
        })
    }
}
