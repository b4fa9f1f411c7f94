use uom::si::{
    f64::{MolarMass, SpecificHeatCapacity, ThermodynamicTemperature},
    molar_mass::gram_per_mole,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::model::perfect_gas::{PerfectGasFluid, PerfectGasParameters};
use crate::support::transport::{SutherlandCoefficients, SutherlandFluid};

/// Canonical identifier for molecular nitrogen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nitrogen;

impl PerfectGasFluid for Nitrogen {
    const NAME: &'static str = "nitrogen";

    fn parameters() -> PerfectGasParameters {
        PerfectGasParameters::new(
            MolarMass::new::<gram_per_mole>(28.0134),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1040.0),
        )
    }
}

// Fit of 1.663e-5 Pa·s at 273 K with S = 107 K.
impl SutherlandFluid for Nitrogen {
    fn coefficients() -> SutherlandCoefficients {
        SutherlandCoefficients::new(1.401e-6, ThermodynamicTemperature::new::<kelvin>(107.0), 0.72)
    }
}
