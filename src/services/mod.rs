// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - FleetUp API access and token lifecycle.

pub mod fleetup;
pub mod token;

pub use fleetup::{FleetUpClient, FleetUpService};
pub use token::{Credential, TokenStore};
