// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;

/// relay-bus Error
#[cfg_attr(all(feature = "defmt", target_os = "none"), derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Invalid buffer size
    BufferSize,
    /// Not exactly one of the 8 single-relay codes
    InvalidRelay(u8),
    /// The driver returned no bytes to a read request
    NoResponse,
    /// No command is mapped to this console character
    UnmappedInput(char),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;

        match self {
            BufferSize => write!(f, "Invalid buffer size"),
            InvalidRelay(code) => write!(f, "Invalid relay code: 0x{code:0>2X}"),
            NoResponse => write!(f, "No response from relay driver"),
            UnmappedInput(ch) => write!(f, "Unmapped console input: {ch:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Error of a [`RelayMaster`](crate::RelayMaster) operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MasterError<E> {
    /// Rejected or malformed before or after the bus transaction
    Protocol(Error),
    /// The bus transaction itself failed
    Transport(E),
}

impl<E> From<Error> for MasterError<E> {
    fn from(err: Error) -> Self {
        Self::Protocol(err)
    }
}

impl<E: fmt::Debug> fmt::Display for MasterError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Protocol(err) => err.fmt(f),
            Self::Transport(err) => write!(f, "Bus transaction failed: {err:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for MasterError<E> {}
