use uom::si::{
    f64::{MolarMass, SpecificHeatCapacity, ThermodynamicTemperature},
    molar_mass::gram_per_mole,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::model::perfect_gas::{PerfectGasFluid, PerfectGasParameters};
use crate::support::transport::{SutherlandCoefficients, SutherlandFluid};

/// Canonical identifier for carbon dioxide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarbonDioxide;

impl PerfectGasFluid for CarbonDioxide {
    const NAME: &'static str = "carbonDioxide";

    fn parameters() -> PerfectGasParameters {
        PerfectGasParameters::new(
            MolarMass::new::<gram_per_mole>(44.01),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(844.0),
        )
    }
}

// Fit of 1.370e-5 Pa·s at 273 K with S = 222 K.
impl SutherlandFluid for CarbonDioxide {
    fn coefficients() -> SutherlandCoefficients {
        SutherlandCoefficients::new(1.503e-6, ThermodynamicTemperature::new::<kelvin>(222.0), 0.77)
    }
}
