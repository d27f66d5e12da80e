use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EphemerisError;

/// The eight major planets, in heliocentric order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    /// All planets in catalog order.
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Lowercase identifier used in catalogs and JSON payloads.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Earth => "earth",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
        }
    }

    /// Capitalised display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Planet::ALL
            .into_iter()
            .find(|planet| planet.name() == lower)
            .ok_or_else(|| EphemerisError::UnknownPlanet {
                name: s.to_string(),
            })
    }
}

/// Display color as 8-bit RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS-style `#RRGGBB` form.
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Static display metadata for a planet.
#[derive(Debug, Clone, Copy)]
pub struct PlanetDescriptor {
    pub planet: Planet,
    pub color: Rgb,
    /// Radius relative to Earth.
    pub relative_size: f64,
}

/// Color used for the Sun in the rendered scene.
pub const SUN_COLOR: Rgb = Rgb(0xFD, 0xB8, 0x13);

/// Canonical planet catalog, indexed in the same order as [`Planet::ALL`].
pub const PLANET_CATALOG: &[PlanetDescriptor] = &[
    PlanetDescriptor {
        planet: Planet::Mercury,
        color: Rgb(0xA0, 0x52, 0x2D),
        relative_size: 0.383,
    },
    PlanetDescriptor {
        planet: Planet::Venus,
        color: Rgb(0xDE, 0xB8, 0x87),
        relative_size: 0.949,
    },
    PlanetDescriptor {
        planet: Planet::Earth,
        color: Rgb(0x4B, 0x00, 0x82),
        relative_size: 1.0,
    },
    PlanetDescriptor {
        planet: Planet::Mars,
        color: Rgb(0xCD, 0x5C, 0x5C),
        relative_size: 0.532,
    },
    PlanetDescriptor {
        planet: Planet::Jupiter,
        color: Rgb(0xDA, 0xA5, 0x20),
        relative_size: 11.21,
    },
    PlanetDescriptor {
        planet: Planet::Saturn,
        color: Rgb(0xF4, 0xA4, 0x60),
        relative_size: 9.45,
    },
    PlanetDescriptor {
        planet: Planet::Uranus,
        color: Rgb(0x87, 0xCE, 0xEB),
        relative_size: 4.01,
    },
    PlanetDescriptor {
        planet: Planet::Neptune,
        color: Rgb(0x1E, 0x90, 0xFF),
        relative_size: 3.88,
    },
];

/// Catalog entry for a planet.
pub fn entry(planet: Planet) -> &'static PlanetDescriptor {
    &PLANET_CATALOG[planet as usize]
}
