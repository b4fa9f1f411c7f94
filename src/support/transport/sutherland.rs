//! Sutherland transport model.
//!
//! Dynamic viscosity follows Sutherland's two-parameter law
//!
//! ```text
//! μ = As·√T / (1 + Ts/T)
//! ```
//!
//! and the thermal properties follow from a constant Prandtl number and the
//! `cp` of the wrapped thermodynamic model:
//!
//! ```text
//! αh = μ / Pr
//! κ  = αh·cp
//! ```
//!
//! # Assumptions
//!
//! - Viscosity depends on temperature only (dilute gas)
//! - The Prandtl number is constant
//!
//! # Evaluation domain
//!
//! Evaluation does not validate its inputs. Temperatures must be strictly
//! positive; anything else yields non-finite or meaningless values.

mod coefficients;
mod io;
mod mixing;

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, Pressure, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    thermo::{
        capability::{HasCp, ThermoModel},
        model::{
            PerfectGas,
            perfect_gas::{PerfectGasFluid, PerfectGasParametersError},
        },
    },
    units::EnthalpyDiffusivity,
};

use super::TransportProperties;

pub use coefficients::{SutherlandCoefficients, fit};

/// Sutherland coefficients for a canonical fluid.
pub trait SutherlandFluid {
    /// Returns the fluid's Sutherland coefficients and Prandtl number.
    fn coefficients() -> SutherlandCoefficients;
}

/// Sutherland transport model wrapping a thermodynamic model.
///
/// Holds the viscosity scale `As` (Pa·s/√K), the Sutherland temperature `Ts`
/// (K), and the reciprocal Prandtl number. These three values and the wrapped
/// thermodynamic model fully determine the transport behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct Sutherland<Thermo> {
    thermo: Thermo,
    a_s: f64,
    t_s: f64,
    r_pr: f64,
}

impl<Thermo> Sutherland<Thermo> {
    /// Creates a transport model from explicit coefficients.
    #[must_use]
    pub fn new(thermo: Thermo, coefficients: SutherlandCoefficients) -> Self {
        Self {
            thermo,
            a_s: coefficients.a_s,
            t_s: coefficients.t_s.get::<kelvin>(),
            r_pr: 1.0 / coefficients.prandtl,
        }
    }

    /// Creates a transport model whose viscosity passes through two samples.
    ///
    /// The samples must be taken at different temperatures.
    #[must_use]
    pub fn from_viscosities(
        thermo: Thermo,
        samples: [(DynamicViscosity, ThermodynamicTemperature); 2],
        prandtl: f64,
    ) -> Self {
        Self::new(
            thermo,
            SutherlandCoefficients::from_viscosities(samples, prandtl),
        )
    }

    #[must_use]
    pub fn thermo(&self) -> &Thermo {
        &self.thermo
    }

    #[must_use]
    pub fn into_thermo(self) -> Thermo {
        self.thermo
    }

    /// Returns the viscosity scale `As` in Pa·s/√K.
    #[must_use]
    pub fn a_s(&self) -> f64 {
        self.a_s
    }

    /// Returns the Sutherland temperature `Ts`.
    #[must_use]
    pub fn t_s(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(self.t_s)
    }

    #[must_use]
    pub fn prandtl(&self) -> f64 {
        1.0 / self.r_pr
    }

    #[must_use]
    pub fn reciprocal_prandtl(&self) -> f64 {
        self.r_pr
    }

    #[must_use]
    pub fn coefficients(&self) -> SutherlandCoefficients {
        SutherlandCoefficients::new(self.a_s, self.t_s(), self.prandtl())
    }

    /// Computes dynamic viscosity with `μ = As·√T / (1 + Ts/T)`.
    ///
    /// Pressure does not enter the result.
    #[must_use]
    pub fn mu(
        &self,
        _pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> DynamicViscosity {
        let t = temperature.get::<kelvin>();
        DynamicViscosity::new::<pascal_second>(self.a_s * t.sqrt() / (1.0 + self.t_s / t))
    }

    /// Computes thermal diffusivity of enthalpy with `αh = μ / Pr`.
    #[must_use]
    pub fn alphah(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> EnthalpyDiffusivity {
        self.mu(pressure, temperature) * self.r_pr
    }
}

impl<Thermo: ThermoModel> Sutherland<Thermo> {
    /// Returns the model's type name, embedding the thermodynamic model's name.
    #[must_use]
    pub fn type_name() -> String {
        format!("sutherland<{}>", Thermo::type_name())
    }

    /// Returns a copy with the same coefficients, relabeled as `name`.
    #[must_use]
    pub fn renamed(&self, name: &str) -> Self {
        Self {
            thermo: self.thermo.renamed(name),
            ..self.clone()
        }
    }
}

impl<Thermo: HasCp> Sutherland<Thermo> {
    /// Computes thermal conductivity with `κ = αh·cp`.
    #[must_use]
    pub fn kappa(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> ThermalConductivity {
        let alphah = self.alphah(pressure, temperature);
        let cp = self.thermo.cp(pressure, temperature);
        conductivity(alphah, cp)
    }

    /// Computes all transport properties, evaluating viscosity and `cp` once.
    #[must_use]
    pub fn properties(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> TransportProperties {
        let mu = self.mu(pressure, temperature);
        let alphah = mu * self.r_pr;
        let cp = self.thermo.cp(pressure, temperature);

        TransportProperties {
            mu,
            kappa: conductivity(alphah, cp),
            alphah,
        }
    }
}

impl Sutherland<PerfectGas> {
    /// Creates a perfect gas transport model using the constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`PerfectGasParametersError`] if the fluid's perfect gas
    /// constants are invalid.
    pub fn for_fluid<Fluid>() -> Result<Self, PerfectGasParametersError>
    where
        Fluid: PerfectGasFluid + SutherlandFluid,
    {
        Ok(Self::new(
            PerfectGas::for_fluid::<Fluid>()?,
            Fluid::coefficients(),
        ))
    }
}

fn conductivity(alphah: EnthalpyDiffusivity, cp: SpecificHeatCapacity) -> ThermalConductivity {
    ThermalConductivity::new::<watt_per_meter_kelvin>(
        alphah.get::<pascal_second>() * cp.get::<joule_per_kilogram_kelvin>(),
    )
}
