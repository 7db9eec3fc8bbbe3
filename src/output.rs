// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shift-register output stage.

use crate::RelayMask;
use embedded_hal::digital::OutputPin;

/// Hardware that drives the relay coils from a [`RelayMask`].
pub trait OutputStage {
    type Error;

    /// Latch `mask` onto the relay-enable lines.
    fn write(&mut self, mask: RelayMask) -> Result<(), Self::Error>;
}

impl<O: OutputStage + ?Sized> OutputStage for &mut O {
    type Error = O::Error;

    fn write(&mut self, mask: RelayMask) -> Result<(), Self::Error> {
        (**self).write(mask)
    }
}

/// Order in which the mask bits are shifted out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BitOrder {
    /// Bit 7 first, so relay 8 ends up at the last register output.
    #[default]
    MsbFirst,
    LsbFirst,
}

/// A serial-in parallel-out shift register (74HC595 style) on three GPIOs.
pub struct ShiftRegister<DATA, CLOCK, LATCH> {
    data: DATA,
    clock: CLOCK,
    latch: LATCH,
    order: BitOrder,
}

impl<DATA, CLOCK, LATCH, E> ShiftRegister<DATA, CLOCK, LATCH>
where
    DATA: OutputPin<Error = E>,
    CLOCK: OutputPin<Error = E>,
    LATCH: OutputPin<Error = E>,
{
    /// Arms the output lines by pulling all of them low.
    pub fn new(mut data: DATA, mut clock: CLOCK, mut latch: LATCH) -> Result<Self, E> {
        data.set_low()?;
        clock.set_low()?;
        latch.set_low()?;
        Ok(Self {
            data,
            clock,
            latch,
            order: BitOrder::default(),
        })
    }

    #[must_use]
    pub fn with_bit_order(self, order: BitOrder) -> Self {
        Self { order, ..self }
    }

    /// Give back the pins.
    pub fn release(self) -> (DATA, CLOCK, LATCH) {
        (self.data, self.clock, self.latch)
    }

    fn shift_bit(&mut self, high: bool) -> Result<(), E> {
        if high {
            self.data.set_high()?;
        } else {
            self.data.set_low()?;
        }
        self.clock.set_high()?;
        self.clock.set_low()
    }
}

impl<DATA, CLOCK, LATCH, E> OutputStage for ShiftRegister<DATA, CLOCK, LATCH>
where
    DATA: OutputPin<Error = E>,
    CLOCK: OutputPin<Error = E>,
    LATCH: OutputPin<Error = E>,
{
    type Error = E;

    fn write(&mut self, mask: RelayMask) -> Result<(), E> {
        let bits = mask.bits();
        self.latch.set_low()?;
        for i in 0..8 {
            let bit = match self.order {
                BitOrder::MsbFirst => 7 - i,
                BitOrder::LsbFirst => i,
            };
            self.shift_bit(bits & (1 << bit) != 0)?;
        }
        // rising edge copies the shift stage to the outputs
        self.latch.set_high()
    }
}
