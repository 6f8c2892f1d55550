//! Testing infrastructure (mock interfaces, delays, etc.).

pub(crate) mod mock;

pub(crate) use mock::{MockDelay, MockInterface};
