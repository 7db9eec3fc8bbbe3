// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;

/// The driven state of all 8 relays.
///
/// Bit `n` belongs to relay `n + 1`. The mask is sent to the shift register
/// as is, so a set bit drives the corresponding relay-enable line.
#[cfg_attr(all(feature = "defmt", target_os = "none"), derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelayMask(u8);

/// Pattern flipped by a toggle-all.
pub const TOGGLE_ALL_PATTERN: RelayMask = RelayMask(0xFF);

impl RelayMask {
    /// Every relay-enable line driven.
    pub const ALL_ON: Self = Self(0xFF);
    /// No relay-enable line driven.
    pub const ALL_OFF: Self = Self(0x00);

    pub const RELAY_1: Self = Self(0x01);
    pub const RELAY_2: Self = Self(0x02);
    pub const RELAY_3: Self = Self(0x04);
    pub const RELAY_4: Self = Self(0x08);
    pub const RELAY_5: Self = Self(0x10);
    pub const RELAY_6: Self = Self(0x20);
    pub const RELAY_7: Self = Self(0x40);
    pub const RELAY_8: Self = Self(0x80);

    /// The single-relay masks in relay order.
    pub const RELAYS: [Self; 8] = [
        Self::RELAY_1,
        Self::RELAY_2,
        Self::RELAY_3,
        Self::RELAY_4,
        Self::RELAY_5,
        Self::RELAY_6,
        Self::RELAY_7,
        Self::RELAY_8,
    ];

    #[must_use]
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// The raw byte as it goes over the wire.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Mask of relay `number` (`1..=8`).
    #[must_use]
    pub const fn relay(number: u8) -> Option<Self> {
        match number {
            1..=8 => Some(Self(1 << (number - 1))),
            _ => None,
        }
    }

    /// `true` if this is exactly one of [`Self::RELAYS`].
    #[must_use]
    pub const fn is_single_relay(self) -> bool {
        self.0.count_ones() == 1
    }

    /// Clears the bits of `relay`.
    ///
    /// Note that turning a relay *on* clears its bit while [`Self::turn_off`]
    /// sets it. Both ends of the link rely on exactly this convention.
    #[must_use]
    pub const fn turn_on(self, relay: Self) -> Self {
        Self(self.0 & !relay.0)
    }

    /// Sets the bits of `relay`.
    #[must_use]
    pub const fn turn_off(self, relay: Self) -> Self {
        Self(self.0 | relay.0)
    }

    #[must_use]
    pub const fn toggle(self, relay: Self) -> Self {
        Self(self.0 ^ relay.0)
    }

    #[must_use]
    pub const fn toggle_all(self) -> Self {
        self.toggle(TOGGLE_ALL_PATTERN)
    }

    /// `true` if any bit of `relay` is set.
    #[must_use]
    pub const fn contains(self, relay: Self) -> bool {
        self.0 & relay.0 != 0
    }

    /// `true` if any bit of `relay` is cleared.
    #[must_use]
    pub const fn excludes(self, relay: Self) -> bool {
        !self.0 & relay.0 != 0
    }
}

impl From<u8> for RelayMask {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<RelayMask> for u8 {
    fn from(mask: RelayMask) -> Self {
        mask.0
    }
}

impl fmt::Display for RelayMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0b{:08b}", self.0)
    }
}
