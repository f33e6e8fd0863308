//! Body model and ephemeris provider seam.
//!
//! [`EphemerisProvider`] is the single entry point downstream crates use to
//! obtain tropical ecliptic positions. The retrograde rule lives in the
//! trait's provided [`EphemerisProvider::position`] method so every provider
//! reports motion the same way. [`AnalyticEphemeris`] is the built-in
//! low-precision provider.
//!
//! Computed points (the lunar nodes) are not bodies; they belong to
//! `kp_vedic_base`.

pub mod analytic;
pub mod error;
pub mod spherical;

use serde::Serialize;

pub use analytic::AnalyticEphemeris;
pub use error::EphemerisError;
pub use spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};

/// Physical bodies an ephemeris provider must answer for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// All bodies in declaration order.
pub const ALL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }

    /// Whether the body can appear retrograde from Earth.
    ///
    /// The luminaries are never retrograde.
    pub const fn can_retrograde(self) -> bool {
        !matches!(self, Self::Sun | Self::Moon)
    }
}

/// Geocentric tropical ecliptic coordinates of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EclipticPosition {
    /// Longitude in degrees, range [0, 360).
    pub longitude_deg: f64,
    /// Latitude in degrees.
    pub latitude_deg: f64,
    /// Distance in AU (Earth radii for the Moon).
    pub distance: f64,
}

/// Tropical position with the apparent direction of motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPosition {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub retrograde: bool,
}

/// Source of geocentric tropical positions.
///
/// Implementations must be [`Send`] + [`Sync`] so one provider can be shared
/// by reference across threads.
pub trait EphemerisProvider: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Tropical ecliptic position of `body` at Julian Day `jd` (UT).
    fn ecliptic_position(&self, body: Body, jd: f64) -> Result<EclipticPosition, EphemerisError>;

    /// Position with the retrograde flag.
    ///
    /// A body is retrograde when its longitude at `jd` minus its longitude
    /// one day earlier, wrapped to ±180°, is negative. Sun and Moon are
    /// never retrograde.
    fn position(&self, body: Body, jd: f64) -> Result<BodyPosition, EphemerisError> {
        let now = self.ecliptic_position(body, jd)?;
        let retrograde = if body.can_retrograde() {
            let prev = self.ecliptic_position(body, jd - 1.0)?;
            signed_delta_deg(now.longitude_deg, prev.longitude_deg) < 0.0
        } else {
            false
        };
        Ok(BodyPosition {
            longitude_deg: now.longitude_deg,
            latitude_deg: now.latitude_deg,
            retrograde,
        })
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn ecliptic_position(&self, body: Body, jd: f64) -> Result<EclipticPosition, EphemerisError> {
        (**self).ecliptic_position(body, jd)
    }
}

/// `a − b` wrapped to [-180, 180).
fn signed_delta_deg(a: f64, b: f64) -> f64 {
    (a - b + 180.0).rem_euclid(360.0) - 180.0
}
