//! Sutherland transport model adapter.

use std::convert::Infallible;

use twine_core::Model;

use crate::support::{
    thermo::capability::HasCp,
    transport::{Sutherland, TransportProperties},
};

use super::TransportInput;

/// Evaluates [`Sutherland`] transport properties as a Twine model.
///
/// Evaluation never fails; non-physical inputs such as a zero temperature
/// produce non-finite properties rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct SutherlandTransport<Thermo> {
    transport: Sutherland<Thermo>,
}

impl<Thermo> SutherlandTransport<Thermo> {
    #[must_use]
    pub fn new(transport: Sutherland<Thermo>) -> Self {
        Self { transport }
    }

    #[must_use]
    pub fn transport(&self) -> &Sutherland<Thermo> {
        &self.transport
    }
}

impl<Thermo> From<Sutherland<Thermo>> for SutherlandTransport<Thermo> {
    fn from(transport: Sutherland<Thermo>) -> Self {
        Self::new(transport)
    }
}

impl<Thermo: HasCp> Model for SutherlandTransport<Thermo> {
    type Input = TransportInput;
    type Output = TransportProperties;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.transport.properties(input.pressure, input.temperature))
    }
}
