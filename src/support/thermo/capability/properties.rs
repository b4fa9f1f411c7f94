use uom::si::f64::{Pressure, SpecificHeatCapacity, ThermodynamicTemperature};

use super::ThermoModel;

pub trait HasCp: ThermoModel {
    /// Returns the specific heat capacity at constant pressure.
    ///
    /// This is evaluated on the transport hot path and must not fail;
    /// out-of-domain inputs produce non-finite values.
    fn cp(&self, pressure: Pressure, temperature: ThermodynamicTemperature)
    -> SpecificHeatCapacity;
}
