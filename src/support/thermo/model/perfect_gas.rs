//! Calorically perfect gas species.
//!
//! `PerfectGas` is the simplest thermodynamic model a transport model can wrap:
//! an ideal gas with a constant specific heat capacity.
//!
//! # Assumptions
//!
//! - Ideal gas equation of state: `p = ρ·R·T` with `R = Rᵤ / W`
//! - Calorically perfect: `cp` does not vary with temperature or pressure
//!
//! # Mixing
//!
//! Each instance carries a mixing weight (a mass fraction, `1` by default).
//! Mixing adds the weights and blends `cp` by mass share and the molar mass
//! harmonically, so the mixture's gas constant is the mass-weighted mean.

use thiserror::Error;
use uom::si::{
    f64::{MassDensity, MolarMass, Pressure, SpecificHeatCapacity, ThermodynamicTemperature},
    molar_mass::{gram_per_mole, kilogram_per_mole},
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::support::{
    config::{ConfigError, Dictionary, FromDict, WriteDict},
    constraint::{Constraint, NonNegative, StrictlyPositive},
    thermo::capability::{HasCp, Mix, SMALL_WEIGHT, ThermoModel},
    units::{SpecificGasConstant, UNIVERSAL_GAS_CONSTANT},
};

use super::ideal_gas_eos;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PerfectGasParametersError {
    #[error("invalid molar mass: {molar_mass:?}")]
    MolarMass { molar_mass: MolarMass },
    #[error("invalid cp: {cp:?}")]
    Cp { cp: SpecificHeatCapacity },
}

/// Constant parameters for the [`PerfectGas`] model.
///
/// These values are typically provided by a fluid's [`PerfectGasFluid`] implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGasParameters {
    pub molar_mass: MolarMass,
    pub cp: SpecificHeatCapacity,
}

impl PerfectGasParameters {
    #[must_use]
    pub fn new(molar_mass: MolarMass, cp: SpecificHeatCapacity) -> Self {
        Self { molar_mass, cp }
    }
}

/// Fluid constants required by the [`PerfectGas`] model.
pub trait PerfectGasFluid {
    /// Species name used when building a model for this fluid.
    const NAME: &'static str;

    /// Returns the constant parameters for use with [`PerfectGas`].
    fn parameters() -> PerfectGasParameters;
}

/// Perfect gas species (constant `cp`) using the ideal gas equation of state.
#[derive(Debug, Clone, PartialEq)]
pub struct PerfectGas {
    name: String,
    weight: f64,
    molar_mass: MolarMass,
    cp: SpecificHeatCapacity,
}

impl PerfectGas {
    /// Creates a species with unit mixing weight.
    ///
    /// # Errors
    ///
    /// Returns [`PerfectGasParametersError`] if the molar mass or `cp` is not
    /// strictly positive.
    pub fn new(
        name: impl Into<String>,
        parameters: PerfectGasParameters,
    ) -> Result<Self, PerfectGasParametersError> {
        let molar_mass = parameters.molar_mass;
        if StrictlyPositive::check(&molar_mass.get::<kilogram_per_mole>()).is_err() {
            return Err(PerfectGasParametersError::MolarMass { molar_mass });
        }

        let cp = parameters.cp;
        if StrictlyPositive::check(&cp.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(PerfectGasParametersError::Cp { cp });
        }

        Ok(Self {
            name: name.into(),
            weight: 1.0,
            molar_mass,
            cp,
        })
    }

    /// Creates a species using the constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`PerfectGasParametersError`] if the fluid's constants are invalid.
    pub fn for_fluid<Fluid: PerfectGasFluid>() -> Result<Self, PerfectGasParametersError> {
        Self::new(Fluid::NAME, Fluid::parameters())
    }

    /// Returns this species with its mixing weight set to `weight`.
    #[must_use]
    pub fn with_weight(self, weight: f64) -> Self {
        Self { weight, ..self }
    }

    #[must_use]
    pub fn molar_mass(&self) -> MolarMass {
        self.molar_mass
    }

    /// Returns the specific gas constant `R = Rᵤ / W`.
    #[must_use]
    pub fn gas_constant(&self) -> SpecificGasConstant {
        SpecificGasConstant::new::<joule_per_kilogram_kelvin>(
            UNIVERSAL_GAS_CONSTANT / self.molar_mass.get::<kilogram_per_mole>(),
        )
    }

    /// Computes density with `ρ = p / (R·T)`.
    #[must_use]
    pub fn density(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> MassDensity {
        ideal_gas_eos::density(temperature, pressure, self.gas_constant())
    }
}

impl ThermoModel for PerfectGas {
    fn type_name() -> String {
        "perfectGas".to_owned()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn renamed(&self, name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..self.clone()
        }
    }
}

impl HasCp for PerfectGas {
    /// Returns the constant `cp` of the species.
    fn cp(
        &self,
        _pressure: Pressure,
        _temperature: ThermodynamicTemperature,
    ) -> SpecificHeatCapacity {
        self.cp
    }
}

impl Mix for PerfectGas {
    fn weight(&self) -> f64 {
        self.weight
    }

    fn mix_in(&mut self, other: &Self) {
        let y_1 = self.weight;
        let y_2 = other.weight;
        let y = y_1 + y_2;

        if y.abs() > SMALL_WEIGHT {
            let w_1 = self.molar_mass.get::<kilogram_per_mole>();
            let w_2 = other.molar_mass.get::<kilogram_per_mole>();
            self.molar_mass = MolarMass::new::<kilogram_per_mole>(y / (y_1 / w_1 + y_2 / w_2));

            let cp_1 = self.cp.get::<joule_per_kilogram_kelvin>();
            let cp_2 = other.cp.get::<joule_per_kilogram_kelvin>();
            self.cp = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
                (y_1 * cp_1 + y_2 * cp_2) / y,
            );
        }

        self.weight = y;
    }

    fn scale(&mut self, factor: f64) {
        self.weight *= factor;
    }
}

impl FromDict for PerfectGas {
    /// Reads `name`, `specie { massFraction, molWeight }` and `thermodynamics { Cp }`.
    ///
    /// `molWeight` is in g/mol and `Cp` in J/kg·K. `massFraction` defaults to `1`.
    fn from_dict(dict: &Dictionary) -> Result<Self, ConfigError> {
        let name = dict.lookup_word("name")?;

        let specie = dict.sub_dict("specie")?;
        let weight = specie.lookup_scalar_or("massFraction", 1.0)?;
        let weight = specie.check::<NonNegative>("massFraction", weight)?;
        let molar_weight = specie.lookup_checked::<StrictlyPositive>("molWeight")?;

        let thermodynamics = dict.sub_dict("thermodynamics")?;
        let cp = thermodynamics.lookup_checked::<StrictlyPositive>("Cp")?;

        Ok(Self {
            name: name.to_owned(),
            weight,
            molar_mass: MolarMass::new::<gram_per_mole>(molar_weight),
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp),
        })
    }
}

impl WriteDict for PerfectGas {
    fn write(&self, dict: &mut Dictionary) {
        dict.set_word("name", self.name.as_str());

        let mut specie = Dictionary::new();
        specie.set_scalar("massFraction", self.weight);
        specie.set_scalar("molWeight", self.molar_mass.get::<gram_per_mole>());
        dict.set_sub_dict("specie", specie);

        let mut thermodynamics = Dictionary::new();
        thermodynamics.set_scalar("Cp", self.cp.get::<joule_per_kilogram_kelvin>());
        dict.set_sub_dict("thermodynamics", thermodynamics);
    }
}
