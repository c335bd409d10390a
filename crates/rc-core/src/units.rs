// rc-core/src/units.rs

use uom::si::available_energy::joule_per_kilogram;
use uom::si::f64::AvailableEnergy as UomAvailableEnergy;

/// Equivalent dose. The sievert is dimensionally J/kg, so uom's specific
/// energy quantity carries it; 1 Sv == 1 J/kg.
pub type Dose = UomAvailableEnergy;

#[inline]
pub fn sv(v: f64) -> Dose {
    Dose::new::<joule_per_kilogram>(v)
}

/// Magnitude of a dose in sieverts.
#[inline]
pub fn in_sv(dose: Dose) -> f64 {
    dose.get::<joule_per_kilogram>()
}

pub mod constants {
    /// Sieverts per rem.
    pub const SV_PER_REM: f64 = 0.01;
}
