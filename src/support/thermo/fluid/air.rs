use uom::si::{
    f64::{MolarMass, SpecificHeatCapacity, ThermodynamicTemperature},
    molar_mass::gram_per_mole,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::model::perfect_gas::{PerfectGasFluid, PerfectGasParameters};
use crate::support::transport::{SutherlandCoefficients, SutherlandFluid};

/// Canonical identifier for dry air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Air;

impl PerfectGasFluid for Air {
    const NAME: &'static str = "air";

    fn parameters() -> PerfectGasParameters {
        PerfectGasParameters::new(
            MolarMass::new::<gram_per_mole>(28.96),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0),
        )
    }
}

impl SutherlandFluid for Air {
    fn coefficients() -> SutherlandCoefficients {
        SutherlandCoefficients::new(1.458e-6, ThermodynamicTemperature::new::<kelvin>(110.4), 0.7)
    }
}
