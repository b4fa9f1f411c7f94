//! Mixture averaging of Sutherland transport models.
//!
//! The wrapped thermodynamic models combine by their own [`Mix`] rule. The
//! transport coefficients are then blended by each operand's share of the
//! combined weight: `As` and `Ts` linearly, and the Prandtl number linearly
//! (so the stored reciprocal blends harmonically).

use std::ops::{Add, AddAssign, Mul, MulAssign};

use crate::support::thermo::capability::{Mix, SMALL_WEIGHT};

use super::Sutherland;

impl<Thermo: Mix> Sutherland<Thermo> {
    /// Accumulates `other` into this model.
    ///
    /// If the combined weight is zero, the coefficients are set to zero and
    /// carry no meaning. An operand with no share of the combined weight does
    /// not contribute, so such a zeroed model can still be accumulated into.
    pub fn mix_in(&mut self, other: &Self) {
        let y_1 = self.thermo.weight();
        self.thermo.mix_in(&other.thermo);
        let y = self.thermo.weight();

        if y.abs() < SMALL_WEIGHT {
            self.a_s = 0.0;
            self.t_s = 0.0;
            self.r_pr = 0.0;
            return;
        }

        let f_1 = y_1 / y;
        let f_2 = other.thermo.weight() / y;

        self.a_s = f_1 * self.a_s + f_2 * other.a_s;
        self.t_s = f_1 * self.t_s + f_2 * other.t_s;
        self.r_pr = 1.0 / (prandtl_share(f_1, self.r_pr) + prandtl_share(f_2, other.r_pr));
    }

    /// Returns the combination of `self` and `other`.
    #[must_use]
    pub fn mixed(&self, other: &Self) -> Self {
        let mut mixture = self.clone();
        mixture.mix_in(other);
        mixture
    }

    /// Scales the thermodynamic model's weight by `factor`.
    ///
    /// The transport coefficients are intensive and stay unchanged.
    pub fn scale(&mut self, factor: f64) {
        self.thermo.scale(factor);
    }

    /// Returns a copy with the thermodynamic model's weight scaled by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        let mut scaled = self.clone();
        scaled.scale(factor);
        scaled
    }
}

/// Returns `f·Pr`, skipping operands with no share so a zeroed `rPr` never divides.
fn prandtl_share(fraction: f64, r_pr: f64) -> f64 {
    if fraction == 0.0 { 0.0 } else { fraction / r_pr }
}

impl<Thermo: Mix> Add for Sutherland<Thermo> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self.mix_in(&rhs);
        self
    }
}

impl<Thermo: Mix> Add for &Sutherland<Thermo> {
    type Output = Sutherland<Thermo>;

    fn add(self, rhs: Self) -> Sutherland<Thermo> {
        self.mixed(rhs)
    }
}

impl<Thermo: Mix> AddAssign<&Sutherland<Thermo>> for Sutherland<Thermo> {
    fn add_assign(&mut self, rhs: &Sutherland<Thermo>) {
        self.mix_in(rhs);
    }
}

impl<Thermo: Mix> Mul<Sutherland<Thermo>> for f64 {
    type Output = Sutherland<Thermo>;

    fn mul(self, mut rhs: Sutherland<Thermo>) -> Sutherland<Thermo> {
        rhs.scale(self);
        rhs
    }
}

impl<Thermo: Mix> Mul<&Sutherland<Thermo>> for f64 {
    type Output = Sutherland<Thermo>;

    fn mul(self, rhs: &Sutherland<Thermo>) -> Sutherland<Thermo> {
        rhs.scaled(self)
    }
}

impl<Thermo: Mix> MulAssign<f64> for Sutherland<Thermo> {
    fn mul_assign(&mut self, factor: f64) {
        self.scale(factor);
    }
}
