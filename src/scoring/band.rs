use serde::Serialize;
use std::fmt;

/// Qualitative classification of a score, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Poor,
    Fair,
    Good,
    Excellent,
}

/// Colour/severity signal, 1:1 with [`Band`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    Strong,
    Positive,
    Caution,
    Alert,
}

impl Band {
    pub const ALL: [Band; 4] = [Band::Poor, Band::Fair, Band::Good, Band::Excellent];

    /// Lowest score that falls in this band
    pub fn lower_bound(self) -> u16 {
        match self {
            Band::Poor => super::SCORE_MIN,
            Band::Fair => 580,
            Band::Good => 670,
            Band::Excellent => 750,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Band::Poor => "Poor",
            Band::Fair => "Fair",
            Band::Good => "Good",
            Band::Excellent => "Excellent",
        }
    }

    pub fn cue(self) -> Cue {
        match self {
            Band::Excellent => Cue::Strong,
            Band::Good => Cue::Positive,
            Band::Fair => Cue::Caution,
            Band::Poor => Cue::Alert,
        }
    }

    /// Good or better: the score is trending the right way.
    pub fn is_favorable(self) -> bool {
        self >= Band::Good
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify(score: u16) -> Band {
    if score >= Band::Excellent.lower_bound() {
        Band::Excellent
    } else if score >= Band::Good.lower_bound() {
        Band::Good
    } else if score >= Band::Fair.lower_bound() {
        Band::Fair
    } else {
        Band::Poor
    }
}
