//! Core units, constants, and shared primitives for the Solar Explorer workspace.

/// Physical and calendar constants (units stated per item).
pub mod constants {
    /// Kilometres per astronomical unit.
    pub const AU_KM: f64 = 149_597_870.7;
    /// Seconds per Julian day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Julian date of the Unix epoch (1970-01-01T00:00:00 UTC).
    pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;
    /// TT - UTC in seconds (32.184 s + 37 leap seconds, valid since 2017).
    pub const TT_MINUS_UTC_SECONDS: f64 = 69.184;
    /// Mean obliquity of the ecliptic at J2000.0, in degrees.
    pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_1;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::AU_KM;

    /// Convert astronomical units to kilometres.
    #[inline]
    pub fn au_to_km(v: f64) -> f64 {
        v * AU_KM
    }

    /// Convert kilometres to astronomical units.
    #[inline]
    pub fn km_to_au(v: f64) -> f64 {
        v / AU_KM
    }
}

/// Time-scale helpers shared across crates.
pub mod time {
    use chrono::{DateTime, Utc};

    use super::constants::{SECONDS_PER_DAY, TT_MINUS_UTC_SECONDS, UNIX_EPOCH_JD};

    /// Julian date (UTC scale) of an instant.
    pub fn julian_date(instant: DateTime<Utc>) -> f64 {
        let seconds = instant.timestamp() as f64 + instant.timestamp_subsec_nanos() as f64 * 1e-9;
        UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
    }

    /// Julian Ephemeris Day (TT scale) of a UTC instant.
    pub fn julian_ephemeris_day(instant: DateTime<Utc>) -> f64 {
        julian_date(instant) + TT_MINUS_UTC_SECONDS / SECONDS_PER_DAY
    }
}

/// Cartesian vector value type.
pub mod vector {
    use serde::{Deserialize, Serialize};

    /// 3D vector; units depend on context (AU, km, or km/day).
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct Vector3 {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    impl Vector3 {
        pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

        #[inline]
        pub const fn new(x: f64, y: f64, z: f64) -> Self {
            Self { x, y, z }
        }

        /// Euclidean norm.
        #[inline]
        pub fn norm(&self) -> f64 {
            self.dot(self).sqrt()
        }

        #[inline]
        pub fn dot(&self, other: &Vector3) -> f64 {
            self.x * other.x + self.y * other.y + self.z * other.z
        }

        #[inline]
        pub fn sub(&self, other: &Vector3) -> Vector3 {
            Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
        }

        /// Scale by a scalar.
        #[inline]
        pub fn scale(&self, s: f64) -> Vector3 {
            Vector3::new(self.x * s, self.y * s, self.z * s)
        }

        /// Unit vector in the same direction, or zero for a zero vector.
        pub fn normalized(&self) -> Vector3 {
            let n = self.norm();
            if n == 0.0 { Vector3::ZERO } else { self.scale(1.0 / n) }
        }

        pub fn is_finite(&self) -> bool {
            self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
        }
    }

    impl From<[f64; 3]> for Vector3 {
        fn from(v: [f64; 3]) -> Self {
            Vector3::new(v[0], v[1], v[2])
        }
    }
}
