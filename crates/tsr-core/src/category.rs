//! Sign taxonomy shared across the track, classifier, and history crates.
//!
//! The five-way split mirrors the GTSRB grouping the reference model was
//! trained against.  Track markers carry their category directly (the demo
//! track hand-assigns one per sign); classified results derive theirs from
//! the class→category mapping in `tsr-classify`.

/// Hazard category of a traffic sign.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignCategory {
    /// Speed limits and their end-of-restriction counterparts.
    #[cfg_attr(feature = "serde", serde(rename = "Speed Regulation"))]
    Speed,
    /// Warning triangles: curves, crossings, road work, surface hazards.
    #[cfg_attr(feature = "serde", serde(rename = "Danger Warning"))]
    Danger,
    /// Bans: no entry, no passing, no vehicles, stop.
    #[cfg_attr(feature = "serde", serde(rename = "Prohibition"))]
    Prohibition,
    /// Required behavior: keep right, turn ahead, roundabout.
    #[cfg_attr(feature = "serde", serde(rename = "Mandatory"))]
    Mandatory,
    /// Everything else: priority road, yield, end of restrictions.
    #[cfg_attr(feature = "serde", serde(rename = "Other"))]
    Other,
}

impl SignCategory {
    /// All categories, in the display order of the reference UI.
    pub const ALL: [SignCategory; 5] = [
        SignCategory::Prohibition,
        SignCategory::Danger,
        SignCategory::Mandatory,
        SignCategory::Speed,
        SignCategory::Other,
    ];

    /// Human-readable label, also the serialized form of the category.
    pub fn label(self) -> &'static str {
        match self {
            SignCategory::Speed       => "Speed Regulation",
            SignCategory::Danger      => "Danger Warning",
            SignCategory::Prohibition => "Prohibition",
            SignCategory::Mandatory   => "Mandatory",
            SignCategory::Other       => "Other",
        }
    }

    /// Hex display color renderers use for marker icons and result cards.
    pub fn color(self) -> &'static str {
        match self {
            SignCategory::Speed       => "#8B5CF6",
            SignCategory::Danger      => "#F59E0B",
            SignCategory::Prohibition => "#EF4444",
            SignCategory::Mandatory   => "#3B82F6",
            SignCategory::Other       => "#10B981",
        }
    }

    /// Default alert severity for signs of this category.
    pub fn default_warning(self) -> WarningLevel {
        match self {
            SignCategory::Prohibition | SignCategory::Danger => WarningLevel::High,
            SignCategory::Speed | SignCategory::Mandatory    => WarningLevel::Medium,
            SignCategory::Other                              => WarningLevel::Low,
        }
    }
}

impl std::fmt::Display for SignCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // pad, not write_str, so table columns can width-format categories
        f.pad(self.label())
    }
}

// ── WarningLevel ──────────────────────────────────────────────────────────────

/// Alert severity attached to a classification result.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WarningLevel {
    Low,
    Medium,
    High,
}

impl WarningLevel {
    /// Lowercase label, also the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            WarningLevel::Low    => "low",
            WarningLevel::Medium => "medium",
            WarningLevel::High   => "high",
        }
    }
}

impl std::fmt::Display for WarningLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
