// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

#![doc = include_str!("../README.md")]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod codec;
mod error;
mod frame;

pub mod config;
#[cfg(feature = "driver")]
pub mod driver;
#[cfg(feature = "master")]
pub mod master;
pub mod output;
#[cfg(feature = "master")]
pub mod serial;
#[cfg(feature = "master")]
pub mod transport;

pub use codec::{COMMAND_FRAME_LEN, STATE_FRAME_LEN};
pub use config::{BusTiming, Config, DEFAULT_ADDRESS};
#[cfg(feature = "driver")]
pub use driver::RelayDriver;
pub use error::*;
pub use frame::*;
#[cfg(feature = "master")]
pub use master::RelayMaster;
pub use output::{BitOrder, OutputStage, ShiftRegister};
#[cfg(feature = "master")]
pub use transport::{I2cTransport, Transport};
