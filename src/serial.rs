// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single-character console commands.

use crate::RelayMask;

/// What a console character asks the master to do.
#[cfg_attr(all(feature = "defmt", target_os = "none"), derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialAction {
    AllOff,
    AllOn,
    ToggleAll,
    Toggle(RelayMask),
}

impl SerialAction {
    /// `'0'`/`'f'` all off, `'1'..='8'` toggle that relay, `'9'`/`'n'` all on,
    /// `'t'` toggle all. Letters are case-insensitive.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        let action = match ch {
            '0' | 'f' | 'F' => Self::AllOff,
            '1'..='8' => match RelayMask::relay(ch as u8 - b'0') {
                Some(relay) => Self::Toggle(relay),
                None => return None,
            },
            '9' | 'n' | 'N' => Self::AllOn,
            't' | 'T' => Self::ToggleAll,
            _ => return None,
        };
        Some(action)
    }
}
