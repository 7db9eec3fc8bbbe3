// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Master side of the two-wire bus.

use crate::config::Address;
use embedded_hal::i2c::I2c;

/// Half-duplex, addressed bus seen from the initiating side.
pub trait Transport {
    type Error;

    /// Write `bytes` to the device at `address`.
    fn send(&mut self, address: Address, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Ask the device at `address` for up to `buf.len()` bytes.
    ///
    /// Returns how many bytes were actually received, which may be `0`.
    fn request(&mut self, address: Address, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn send(&mut self, address: Address, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).send(address, bytes)
    }

    fn request(&mut self, address: Address, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).request(address, buf)
    }
}

/// [`Transport`] over any `embedded-hal` I2C bus.
///
/// An I2C read either fills the whole buffer or fails, so a successful
/// request always reports `buf.len()` bytes.
#[derive(Debug)]
pub struct I2cTransport<I> {
    i2c: I,
}

impl<I: I2c> I2cTransport<I> {
    pub const fn new(i2c: I) -> Self {
        Self { i2c }
    }

    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> Transport for I2cTransport<I> {
    type Error = I::Error;

    fn send(&mut self, address: Address, bytes: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(address, bytes)
    }

    fn request(&mut self, address: Address, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.i2c.read(address, buf)?;
        Ok(buf.len())
    }
}
