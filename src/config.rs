// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings both ends of the link have to agree on.

use crate::RelayMask;

/// 7 bit bus address of a relay driver.
pub type Address = u8;

/// Bus address a driver listens on unless told otherwise.
pub const DEFAULT_ADDRESS: Address = 0x14;

/// Per-endpoint configuration.
#[cfg_attr(all(feature = "defmt", target_os = "none"), derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Address of the driver
    pub address: Address,
    /// Relay state at boot
    pub initial: RelayMask,
}

impl Config {
    #[must_use]
    pub const fn new(address: Address) -> Self {
        Self {
            address,
            initial: RelayMask::ALL_OFF,
        }
    }

    #[must_use]
    pub const fn with_initial(self, initial: RelayMask) -> Self {
        Self { initial, ..self }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS)
    }
}

/// Bus timing the master's I2C peripheral should be set up with.
#[cfg_attr(all(feature = "defmt", target_os = "none"), derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusTiming {
    /// SCL frequency
    pub frequency_hz: u32,
    /// How long the driver may hold SCL low while it handles a transaction
    pub clock_stretch_limit_us: u32,
}

impl Default for BusTiming {
    fn default() -> Self {
        Self {
            frequency_hz: 100_000,
            clock_stretch_limit_us: 40_000,
        }
    }
}
