//! Transport mode type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown transport mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode: {0:?}")]
pub struct InvalidTransportMode(String);

/// How an edge is travelled.
///
/// Passenger modes come from the comparator network, goods modes from the
/// delivery network. Both kinds can appear in one graph.
///
/// # Examples
///
/// ```
/// use route_server::domain::TransportMode;
///
/// assert_eq!(TransportMode::parse("metro").unwrap(), TransportMode::Metro);
///
/// // Matching is case-insensitive and accepts separators in "self drive"
/// assert_eq!(TransportMode::parse("Van").unwrap(), TransportMode::Van);
/// assert_eq!(TransportMode::parse("self-drive").unwrap(), TransportMode::SelfDrive);
///
/// assert!(TransportMode::parse("rocket").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum TransportMode {
    Walk,
    Train,
    Metro,
    Bus,
    SelfDrive,
    Taxi,
    Bike,
    Van,
    Drone,
    Truck,
}

impl TransportMode {
    /// All modes, in declaration order.
    pub const ALL: [TransportMode; 10] = [
        TransportMode::Walk,
        TransportMode::Train,
        TransportMode::Metro,
        TransportMode::Bus,
        TransportMode::SelfDrive,
        TransportMode::Taxi,
        TransportMode::Bike,
        TransportMode::Van,
        TransportMode::Drone,
        TransportMode::Truck,
    ];

    /// Parse a transport mode label.
    pub fn parse(s: &str) -> Result<Self, InvalidTransportMode> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| InvalidTransportMode(s.to_string()))
    }

    /// Returns the canonical snake_case label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Walk => "walk",
            TransportMode::Train => "train",
            TransportMode::Metro => "metro",
            TransportMode::Bus => "bus",
            TransportMode::SelfDrive => "self_drive",
            TransportMode::Taxi => "taxi",
            TransportMode::Bike => "bike",
            TransportMode::Van => "van",
            TransportMode::Drone => "drone",
            TransportMode::Truck => "truck",
        }
    }
}

impl TryFrom<String> for TransportMode {
    type Error = InvalidTransportMode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TransportMode::parse(&value)
    }
}

impl From<TransportMode> for &'static str {
    fn from(value: TransportMode) -> Self {
        value.as_str()
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
