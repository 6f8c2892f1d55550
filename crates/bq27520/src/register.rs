//! bq27520 register definitions.
//!
//! Standard commands are two-byte, little-endian registers addressed by their
//! low command code. The extended data-flash window (class, block, block data,
//! checksum, control) sits above them.

#![allow(dead_code)]

/// Standard command registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// Control register, low byte (sub-command LSB).
    ControlLow = 0x00,
    /// Control register, high byte (sub-command MSB).
    ControlHigh = 0x01,
    /// AtRate() in mA.
    AtRate = 0x02,
    /// AtRateTimeToEmpty() in minutes.
    AtRateTimeToEmpty = 0x04,
    /// Temperature() in 0.1 K.
    Temperature = 0x06,
    /// Voltage() in mV.
    Voltage = 0x08,
    /// Flags() status register.
    Flags = 0x0A,
    /// NominalAvailableCapacity() in mAh.
    NominalAvailableCapacity = 0x0C,
    /// FullAvailableCapacity() in mAh.
    FullAvailableCapacity = 0x0E,
    /// RemainingCapacity() in mAh.
    RemainingCapacity = 0x10,
    /// FullChargeCapacity() in mAh.
    FullChargeCapacity = 0x12,
    /// AverageCurrent() in mA, signed.
    AverageCurrent = 0x14,
    /// TimeToEmpty() in minutes.
    TimeToEmpty = 0x16,
    /// StandbyCurrent() in mA, signed.
    StandbyCurrent = 0x18,
    /// StandbyTimeToEmpty() in minutes.
    StandbyTimeToEmpty = 0x1A,
    /// StateOfHealth() in percent.
    StateOfHealth = 0x1C,
    /// CycleCount().
    CycleCount = 0x1E,
    /// StateOfCharge() in percent.
    StateOfCharge = 0x20,
    /// InstantaneousCurrent() in mA, signed.
    InstantaneousCurrent = 0x22,
    /// InternalTemperature() in 0.1 K.
    InternalTemperature = 0x28,
}

impl Command {
    /// Returns the command code.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Extended data-flash access registers.
pub mod extended {
    /// DataFlashClass(): selects the subclass id.
    pub const DATA_CLASS: u8 = 0x3E;
    /// DataFlashBlock(): selects the 32-byte block within the subclass.
    pub const DATA_BLOCK: u8 = 0x3F;
    /// BlockData(): first byte of the 32-byte block window.
    pub const BLOCK_DATA_START: u8 = 0x40;
    /// BlockDataChecksum(): writing it commits the block to flash.
    pub const BLOCK_DATA_CHECKSUM: u8 = 0x60;
    /// BlockDataControl(): writing 0x00 enables block data flash control.
    pub const BLOCK_DATA_CONTROL: u8 = 0x61;
}

/// Control() sub-commands.
pub mod control {
    /// Reports CONTROL_STATUS flags.
    pub const CONTROL_STATUS: u16 = 0x0000;
    /// Reports the device type.
    pub const DEVICE_TYPE: u16 = 0x0001;
    /// Reports the firmware version.
    pub const FW_VERSION: u16 = 0x0002;
    /// Seals the gauge.
    pub const SEALED: u16 = 0x0020;
    /// Soft reset; reloads data flash into RAM.
    pub const RESET: u16 = 0x0041;
    /// First unseal key word.
    pub const UNSEAL_KEY_0: u16 = 0x0414;
    /// Second unseal key word.
    pub const UNSEAL_KEY_1: u16 = 0x3672;
}

/// CONTROL_STATUS bits (16-bit word).
pub mod control_status {
    /// Full access sealed.
    pub const FAS: u16 = 1 << 14;
    /// Sealed.
    pub const SS: u16 = 1 << 13;
    /// Data flash checksum valid.
    pub const CSV: u16 = 1 << 12;
    /// Coulomb counter calibration active.
    pub const CCA: u16 = 1 << 11;
    /// Board calibration active.
    pub const BCA: u16 = 1 << 10;
    /// Initialization complete.
    pub const INITCOMP: u16 = 1 << 7;
    /// Hibernate requested.
    pub const HIBERNATE: u16 = 1 << 6;
    /// SLEEP mode active.
    pub const SLEEP: u16 = 1 << 4;
}

/// Device type values.
pub mod device_type {
    /// Response to DEVICE_TYPE for the bq27520.
    pub const EXPECTED: u16 = 0x0520;
}

/// Data-flash subclass ids.
pub mod subclass {
    /// Configuration / Data (design capacity).
    pub const DATA: u8 = 0x30;
    /// Configuration / Discharge (final voltage).
    pub const DISCHARGE: u8 = 0x31;
    /// Gas Gauging / IT Cfg (terminate voltage).
    pub const IT_CFG: u8 = 0x50;
}
