use std::fmt;

use tracing::debug;
use uom::si::thermodynamic_temperature::kelvin;

use crate::support::{
    config::{ConfigError, Dictionary, FromDict, WriteDict},
    thermo::capability::ThermoModel,
};

use super::{Sutherland, SutherlandCoefficients};

const TRANSPORT: &str = "transport";

impl<Thermo: ThermoModel> Sutherland<Thermo> {
    /// Creates a transport model around an existing thermodynamic model,
    /// reading only the `transport` record from `dict`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the `transport` record is missing or any
    /// coefficient in it is missing or not a number.
    pub fn from_thermo_and_dict(
        thermo: Thermo,
        dict: &Dictionary,
    ) -> Result<Self, ConfigError> {
        let transport = dict.sub_dict(TRANSPORT)?;
        let coefficients = SutherlandCoefficients::from_dict(&transport)?;

        debug!(
            specie = thermo.name(),
            model = %Self::type_name(),
            a_s = coefficients.a_s,
            t_s = coefficients.t_s.get::<kelvin>(),
            prandtl = coefficients.prandtl,
            "read transport coefficients"
        );

        Ok(Self::new(thermo, coefficients))
    }
}

impl<Thermo: ThermoModel + FromDict> FromDict for Sutherland<Thermo> {
    /// Reads the thermodynamic model and then the `transport` record.
    fn from_dict(dict: &Dictionary) -> Result<Self, ConfigError> {
        let thermo = Thermo::from_dict(dict)?;
        Self::from_thermo_and_dict(thermo, dict)
    }
}

impl<Thermo: WriteDict> WriteDict for Sutherland<Thermo> {
    /// Writes the thermodynamic model's entries and a `transport` record
    /// holding `As`, `Ts` and the Prandtl number.
    fn write(&self, dict: &mut Dictionary) {
        self.thermo.write(dict);
        dict.set_sub_dict(TRANSPORT, self.coefficients().to_dict());
    }
}

impl<Thermo: WriteDict> fmt::Display for Sutherland<Thermo> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_dict(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        dynamic_viscosity::pascal_second,
        f64::{Pressure, ThermodynamicTemperature},
        pressure::pascal,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    use crate::support::thermo::{
        capability::Mix,
        fluid::{Air, CarbonDioxide},
        model::PerfectGas,
    };

    const AIR: &str = r#"{
        "name": "air",
        "specie": { "molWeight": 28.96 },
        "thermodynamics": { "Cp": 1005 },
        "transport": { "As": 1.458e-6, "Ts": 110.4, "Pr": 0.7 }
    }"#;

    fn assert_same_properties(a: &Sutherland<PerfectGas>, b: &Sutherland<PerfectGas>) {
        let p = Pressure::new::<pascal>(2.0e5);
        for t in [200.0, 300.0, 750.0, 1500.0] {
            let t = ThermodynamicTemperature::new::<kelvin>(t);
            let (x, y) = (a.properties(p, t), b.properties(p, t));

            assert_relative_eq!(
                x.mu.get::<pascal_second>(),
                y.mu.get::<pascal_second>(),
                max_relative = 1e-14
            );
            assert_relative_eq!(
                x.alphah.get::<pascal_second>(),
                y.alphah.get::<pascal_second>(),
                max_relative = 1e-14
            );
            assert_relative_eq!(
                x.kappa.get::<watt_per_meter_kelvin>(),
                y.kappa.get::<watt_per_meter_kelvin>(),
                max_relative = 1e-14
            );
        }
    }

    #[test]
    fn reads_species_record() {
        let dict = Dictionary::parse(AIR).unwrap();
        let air = Sutherland::<PerfectGas>::from_dict(&dict).unwrap();

        assert_eq!(air.thermo().name(), "air");
        assert_eq!(air.a_s(), 1.458e-6);
        assert_relative_eq!(air.prandtl(), 0.7);
        assert_same_properties(&air, &Sutherland::<PerfectGas>::for_fluid::<Air>().unwrap());
    }

    #[test]
    fn reads_transport_around_existing_thermo() {
        let dict =
            Dictionary::parse(r#"{ "transport": { "As": 1.503e-6, "Ts": 222, "Pr": 0.77 } }"#)
                .unwrap();
        let thermo = PerfectGas::for_fluid::<CarbonDioxide>().unwrap();

        let co2 = Sutherland::from_thermo_and_dict(thermo, &dict).unwrap();

        assert_same_properties(
            &co2,
            &Sutherland::<PerfectGas>::for_fluid::<CarbonDioxide>().unwrap(),
        );
    }

    #[test]
    fn missing_transport_record_fails() {
        let dict = Dictionary::parse(
            r#"{
                "name": "air",
                "specie": { "molWeight": 28.96 },
                "thermodynamics": { "Cp": 1005 }
            }"#,
        )
        .unwrap();

        assert!(matches!(
            Sutherland::<PerfectGas>::from_dict(&dict),
            Err(ConfigError::MissingKey { key, .. }) if key == "transport"
        ));
    }

    #[test]
    fn malformed_coefficient_fails() {
        let dict = Dictionary::parse(&AIR.replace("110.4", r#""hot""#)).unwrap();

        assert!(matches!(
            Sutherland::<PerfectGas>::from_dict(&dict),
            Err(ConfigError::NotAScalar { key, scope, .. }) if key == "Ts" && scope == "transport"
        ));
    }

    #[test]
    fn written_text_reads_back() {
        let mut mixture = Sutherland::<PerfectGas>::for_fluid::<Air>().unwrap();
        mixture.scale(0.6);
        mixture += &Sutherland::<PerfectGas>::for_fluid::<CarbonDioxide>()
            .unwrap()
            .scaled(0.4);

        let text = mixture.to_string();
        let dict = Dictionary::parse(&text).unwrap();
        let reread = Sutherland::<PerfectGas>::from_dict(&dict).unwrap();

        assert_eq!(reread.thermo().name(), "air");
        assert_relative_eq!(reread.thermo().weight(), 1.0, max_relative = 1e-14);
        assert_relative_eq!(reread.a_s(), mixture.a_s(), max_relative = 1e-14);
        assert_relative_eq!(
            reread.t_s().get::<kelvin>(),
            mixture.t_s().get::<kelvin>(),
            max_relative = 1e-14
        );
        assert_relative_eq!(
            reread.reciprocal_prandtl(),
            mixture.reciprocal_prandtl(),
            max_relative = 1e-14
        );
        assert_same_properties(&reread, &mixture);
    }

    #[test]
    fn writes_prandtl_not_its_reciprocal() {
        let air = Sutherland::<PerfectGas>::for_fluid::<Air>().unwrap();
        let transport = air.to_dict().sub_dict("transport").unwrap();

        assert_relative_eq!(transport.lookup_scalar("Pr").unwrap(), 0.7);
        assert_eq!(transport.lookup_scalar("As").unwrap(), 1.458e-6);
    }
}
