use tracing::warn;
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::support::config::{ConfigError, Dictionary, FromDict, WriteDict};

/// Sutherland coefficients and Prandtl number.
///
/// In a configuration record these appear under `transport`, either given
/// directly:
///
/// ```json
/// { "As": 1.458e-6, "Ts": 110.4, "Pr": 0.7 }
/// ```
///
/// or as two viscosity samples that the law is fitted through:
///
/// ```json
/// {
///   "sample1": { "mu": 1.716e-5, "T": 273.15 },
///   "sample2": { "mu": 2.286e-5, "T": 373.15 },
///   "Pr": 0.7
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SutherlandCoefficients {
    /// Viscosity scale `As`, Pa·s/√K.
    pub a_s: f64,
    /// Sutherland temperature `Ts`.
    pub t_s: ThermodynamicTemperature,
    /// Prandtl number.
    pub prandtl: f64,
}

impl SutherlandCoefficients {
    #[must_use]
    pub fn new(a_s: f64, t_s: ThermodynamicTemperature, prandtl: f64) -> Self {
        Self { a_s, t_s, prandtl }
    }

    /// Fits `As` and `Ts` through two viscosity samples.
    ///
    /// See [`fit`] for the degenerate cases.
    #[must_use]
    pub fn from_viscosities(
        samples: [(DynamicViscosity, ThermodynamicTemperature); 2],
        prandtl: f64,
    ) -> Self {
        let [(mu_1, t_1), (mu_2, t_2)] = samples;
        let (a_s, t_s) = fit(mu_1, t_1, mu_2, t_2);

        let t_s_kelvin = t_s.get::<kelvin>();
        if !(t_s_kelvin.is_finite() && t_s_kelvin > 0.0) {
            warn!(
                t_s = t_s_kelvin,
                a_s, "viscosity samples give a non-physical Sutherland temperature"
            );
        }

        Self::new(a_s, t_s, prandtl)
    }
}

/// Solves Sutherland's law for `As` and `Ts` given two samples `(μ₁, T₁)` and `(μ₂, T₂)`.
///
/// Returns `(As, Ts)` with `As` in Pa·s/√K. Both samples satisfy
/// `μ = As·√T / (1 + Ts/T)` to within rounding.
///
/// The samples must differ in temperature and must not already lie on a
/// `μ ∝ √T` curve; such inputs divide by zero and yield non-finite values.
#[must_use]
pub fn fit(
    mu_1: DynamicViscosity,
    t_1: ThermodynamicTemperature,
    mu_2: DynamicViscosity,
    t_2: ThermodynamicTemperature,
) -> (f64, ThermodynamicTemperature) {
    let mu_1 = mu_1.get::<pascal_second>();
    let mu_2 = mu_2.get::<pascal_second>();
    let t_1 = t_1.get::<kelvin>();
    let t_2 = t_2.get::<kelvin>();

    let root_t_1 = t_1.sqrt();
    let mu_1_root_t_2 = mu_1 * t_2.sqrt();
    let mu_2_root_t_1 = mu_2 * root_t_1;

    let t_s = (mu_2_root_t_1 - mu_1_root_t_2) / (mu_1_root_t_2 / t_1 - mu_2_root_t_1 / t_2);
    let a_s = mu_1 * (1.0 + t_s / t_1) / root_t_1;

    (a_s, ThermodynamicTemperature::new::<kelvin>(t_s))
}

impl FromDict for SutherlandCoefficients {
    /// Reads a `transport` record in either the direct or the two-sample form.
    ///
    /// The direct form takes precedence when `As` is present.
    fn from_dict(dict: &Dictionary) -> Result<Self, ConfigError> {
        let prandtl = dict.lookup_scalar("Pr")?;

        if dict.found("As") || !dict.found("sample1") {
            let a_s = dict.lookup_scalar("As")?;
            let t_s = dict.lookup_scalar("Ts")?;
            return Ok(Self::new(
                a_s,
                ThermodynamicTemperature::new::<kelvin>(t_s),
                prandtl,
            ));
        }

        let samples = [read_sample(dict, "sample1")?, read_sample(dict, "sample2")?];
        Ok(Self::from_viscosities(samples, prandtl))
    }
}

impl WriteDict for SutherlandCoefficients {
    /// Writes the direct form, so a fitted model is written by its coefficients.
    fn write(&self, dict: &mut Dictionary) {
        dict.set_scalar("As", self.a_s);
        dict.set_scalar("Ts", self.t_s.get::<kelvin>());
        dict.set_scalar("Pr", self.prandtl);
    }
}

fn read_sample(
    dict: &Dictionary,
    key: &str,
) -> Result<(DynamicViscosity, ThermodynamicTemperature), ConfigError> {
    let sample = dict.sub_dict(key)?;
    let mu = sample.lookup_scalar("mu")?;
    let t = sample.lookup_scalar("T")?;

    Ok((
        DynamicViscosity::new::<pascal_second>(mu),
        ThermodynamicTemperature::new::<kelvin>(t),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_relative_eq, relative_eq};
    use proptest::prelude::*;

    fn sutherland_mu(a_s: f64, t_s: f64, t: f64) -> f64 {
        a_s * t.sqrt() / (1.0 + t_s / t)
    }

    fn sample(a_s: f64, t_s: f64, t: f64) -> (DynamicViscosity, ThermodynamicTemperature) {
        (
            DynamicViscosity::new::<pascal_second>(sutherland_mu(a_s, t_s, t)),
            ThermodynamicTemperature::new::<kelvin>(t),
        )
    }

    #[test]
    fn fits_air_reference_values() {
        // Sea-level and boiling-point viscosities of air.
        let (a_s, t_s) = fit(
            DynamicViscosity::new::<pascal_second>(1.716e-5),
            ThermodynamicTemperature::new::<kelvin>(273.15),
            DynamicViscosity::new::<pascal_second>(2.17e-5),
            ThermodynamicTemperature::new::<kelvin>(373.15),
        );

        let t_s = t_s.get::<kelvin>();
        assert_relative_eq!(sutherland_mu(a_s, t_s, 273.15), 1.716e-5, max_relative = 1e-12);
        assert_relative_eq!(sutherland_mu(a_s, t_s, 373.15), 2.17e-5, max_relative = 1e-12);
        assert!(t_s > 50.0 && t_s < 200.0);
    }

    #[test]
    fn equal_temperatures_are_degenerate() {
        let (a_s, t_s) = fit(
            DynamicViscosity::new::<pascal_second>(1.8e-5),
            ThermodynamicTemperature::new::<kelvin>(300.0),
            DynamicViscosity::new::<pascal_second>(1.8e-5),
            ThermodynamicTemperature::new::<kelvin>(300.0),
        );

        assert!(a_s.is_nan());
        assert!(t_s.get::<kelvin>().is_nan());
    }

    #[test]
    fn reads_direct_form() {
        let dict = Dictionary::parse(r#"{ "As": 1.458e-6, "Ts": 110.4, "Pr": 0.7 }"#).unwrap();
        let coefficients = SutherlandCoefficients::from_dict(&dict).unwrap();

        assert_eq!(coefficients.a_s, 1.458e-6);
        assert_eq!(coefficients.t_s.get::<kelvin>(), 110.4);
        assert_eq!(coefficients.prandtl, 0.7);
    }

    #[test]
    fn reads_two_sample_form() {
        let (mu_1, t_1) = sample(1.458e-6, 110.4, 250.0);
        let (mu_2, t_2) = sample(1.458e-6, 110.4, 900.0);

        let mut sample_1 = Dictionary::new();
        sample_1.set_scalar("mu", mu_1.get::<pascal_second>());
        sample_1.set_scalar("T", t_1.get::<kelvin>());
        let mut sample_2 = Dictionary::new();
        sample_2.set_scalar("mu", mu_2.get::<pascal_second>());
        sample_2.set_scalar("T", t_2.get::<kelvin>());

        let mut dict = Dictionary::new();
        dict.set_sub_dict("sample1", sample_1);
        dict.set_sub_dict("sample2", sample_2);
        dict.set_scalar("Pr", 0.7);

        let coefficients = SutherlandCoefficients::from_dict(&dict).unwrap();

        assert_relative_eq!(coefficients.a_s, 1.458e-6, max_relative = 1e-9);
        assert_relative_eq!(
            coefficients.t_s.get::<kelvin>(),
            110.4,
            max_relative = 1e-9
        );
        assert_eq!(coefficients.prandtl, 0.7);
    }

    #[test]
    fn missing_entries_are_reported() {
        let no_prandtl = Dictionary::parse(r#"{ "As": 1.458e-6, "Ts": 110.4 }"#).unwrap();
        assert!(matches!(
            SutherlandCoefficients::from_dict(&no_prandtl),
            Err(ConfigError::MissingKey { key, .. }) if key == "Pr"
        ));

        let no_t_s = Dictionary::parse(r#"{ "As": 1.458e-6, "Pr": 0.7 }"#).unwrap();
        assert!(matches!(
            SutherlandCoefficients::from_dict(&no_t_s),
            Err(ConfigError::MissingKey { key, .. }) if key == "Ts"
        ));

        let empty = Dictionary::parse(r#"{ "Pr": 0.7 }"#).unwrap();
        assert!(matches!(
            SutherlandCoefficients::from_dict(&empty),
            Err(ConfigError::MissingKey { key, .. }) if key == "As"
        ));

        let one_sample =
            Dictionary::parse(r#"{ "sample1": { "mu": 1.8e-5, "T": 300 }, "Pr": 0.7 }"#).unwrap();
        assert!(matches!(
            SutherlandCoefficients::from_dict(&one_sample),
            Err(ConfigError::MissingKey { key, .. }) if key == "sample2"
        ));

        let bad_sample = Dictionary::parse(
            r#"{
                "sample1": { "mu": "thick", "T": 300 },
                "sample2": { "mu": 2e-5, "T": 400 },
                "Pr": 0.7
            }"#,
        )
        .unwrap();
        assert!(matches!(
            SutherlandCoefficients::from_dict(&bad_sample),
            Err(ConfigError::NotAScalar { key, scope, .. }) if key == "mu" && scope == "sample1"
        ));
    }

    #[test]
    fn writes_prandtl_number() {
        let t_s = ThermodynamicTemperature::new::<kelvin>(110.4);
        let coefficients = SutherlandCoefficients::new(1.458e-6, t_s, 0.7);
        let dict = coefficients.to_dict();

        assert_eq!(dict.lookup_scalar("As").unwrap(), 1.458e-6);
        assert_eq!(dict.lookup_scalar("Ts").unwrap(), 110.4);
        assert_eq!(dict.lookup_scalar("Pr").unwrap(), 0.7);
    }

    proptest! {
        #[test]
        fn fit_recovers_coefficients(
            a_s in 1.0e-7..1.0e-5_f64,
            t_s in 50.0..500.0_f64,
            t_1 in 100.0..1000.0_f64,
            dt in 20.0..2000.0_f64,
        ) {
            let (mu_1, t_1) = sample(a_s, t_s, t_1);
            let (mu_2, t_2) = sample(a_s, t_s, t_1.get::<kelvin>() + dt);

            let (a_s_fit, t_s_fit) = fit(mu_1, t_1, mu_2, t_2);

            prop_assert!(relative_eq!(a_s_fit, a_s, max_relative = 1e-8));
            prop_assert!(relative_eq!(t_s_fit.get::<kelvin>(), t_s, max_relative = 1e-8));
        }
    }
}
