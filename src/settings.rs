//! Typed views over the raw sample settings fields.
//!
//! The raw fields are kept as they are in the file, so unknown values survive decoding;
//! the accessors here return `None` for anything the device isn't known to write.

use crate::structs::OtRecord;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StretchMode {
    Off,
    Normal,
    Beat,
}

impl StretchMode {
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Off),
            2 => Some(Self::Normal),
            3 => Some(Self::Beat),
            _ => None,
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum LoopMode {
    Off,
    Normal,
    PingPong,
}

impl LoopMode {
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Off),
            1 => Some(Self::Normal),
            2 => Some(Self::PingPong),
            _ => None,
        }
    }
}

/// step counts for the raw quantize values 1 to 16
const QUANTIZE_STEPS: [u16; 16] = [1, 2, 3, 4, 6, 8, 12, 16, 24, 32, 48, 64, 96, 128, 192, 256];

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TrigQuantize {
    /// wait for the pattern length
    Pattern,
    Direct,
    Steps(u16),
}

impl TrigQuantize {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0x00 => Some(Self::Pattern),
            0xFF => Some(Self::Direct),
            n => QUANTIZE_STEPS.get(n as usize - 1).map(|steps| Self::Steps(*steps)),
        }
    }
}

pub const GAIN_ZERO_DB: u16 = 0x30;
pub const GAIN_MAX_DB: f32 = 24.0;
pub const GAIN_MIN_DB: f32 = -24.0;

/// 0x00 is -24 dB, 0x30 is 0 dB and 0x60 is +24 dB, half a dB per step
pub fn gain_to_db(raw: u16) -> f32 {
    (raw as f32 - GAIN_ZERO_DB as f32) / 2.0
}

impl OtRecord {
    pub fn tempo_bpm(&self) -> f32 {
        self.tempo as f32 / 24.0
    }

    pub fn trim_length_value(&self) -> f32 {
        self.trim_length as f32 / 100.0
    }

    pub fn loop_length_value(&self) -> f32 {
        self.loop_length as f32 / 100.0
    }

    pub fn stretch_mode(&self) -> Option<StretchMode> {
        StretchMode::from_raw(self.stretch)
    }

    pub fn loop_mode(&self) -> Option<LoopMode> {
        LoopMode::from_raw(self.loop_mode)
    }

    /// Gain in dB, `None` if the raw value is outside of the range the device writes.
    pub fn gain_db(&self) -> Option<f32> {
        let db = gain_to_db(self.gain);
        if (GAIN_MIN_DB..=GAIN_MAX_DB).contains(&db) {
            Some(db)
        } else {
            None
        }
    }

    pub fn trig_quantize(&self) -> Option<TrigQuantize> {
        TrigQuantize::from_raw(self.quantize)
    }
}
