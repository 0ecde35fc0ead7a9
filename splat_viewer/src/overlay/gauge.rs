/// Water gauge badge

use std::fmt;

/// Warning stage reported by the river gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GaugeLevel {
    Normal,
    Caution,
    #[default]
    Alert,
    Severe,
}

/// Badge color class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    Green,
    Amber,
    Orange,
    Red,
}

impl GaugeLevel {
    pub const ALL: [GaugeLevel; 4] =
        [GaugeLevel::Normal, GaugeLevel::Caution, GaugeLevel::Alert, GaugeLevel::Severe];

    pub fn tone(&self) -> BadgeTone {
        match self {
            GaugeLevel::Normal => BadgeTone::Green,
            GaugeLevel::Caution => BadgeTone::Amber,
            GaugeLevel::Alert => BadgeTone::Orange,
            GaugeLevel::Severe => BadgeTone::Red,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GaugeLevel::Normal => "Normal",
            GaugeLevel::Caution => "Caution",
            GaugeLevel::Alert => "Alert",
            GaugeLevel::Severe => "Severe",
        }
    }
}

impl BadgeTone {
    /// CSS class of the badge
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeTone::Green => "badge green",
            BadgeTone::Amber => "badge amber",
            BadgeTone::Orange => "badge orange",
            BadgeTone::Red => "badge red",
        }
    }
}

impl fmt::Display for GaugeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
