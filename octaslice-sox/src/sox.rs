use std::{
    io::{self, Write},
    path::Path,
};

use octaslice::{OtRecord, SliceBounds};

/// Paths for chopping the audio file that belongs to one .ot file.
pub struct ChopNames {
    base: String,
    audio_ext: String,
}

impl ChopNames {
    /// `None` if the path doesn't end in `.ot` or isn't UTF-8
    pub fn from_ot_path(ot_path: &Path, audio_ext: &str) -> Option<Self> {
        let base = ot_path.to_str()?.strip_suffix(".ot")?;
        Some(Self {
            base: base.to_owned(),
            audio_ext: audio_ext.to_owned(),
        })
    }

    pub fn input(&self) -> String {
        format!("{}.{}", self.base, self.audio_ext)
    }

    pub fn output(&self, bounds: &SliceBounds) -> String {
        format!("{}{}.{}", self.base, bounds.padded_index(), self.audio_ext)
    }

    /// arguments for `sox`, offsets are in samples
    pub fn trim_command(&self, bounds: &SliceBounds) -> String {
        format!(
            "{} {} trim {}s ={}s",
            self.input(),
            self.output(bounds),
            bounds.start,
            bounds.end
        )
    }
}

pub fn write_commands<W: Write>(names: &ChopNames, record: &OtRecord, w: &mut W) -> io::Result<()> {
    for bounds in record.slice_bounds() {
        writeln!(w, "{}", names.trim_command(&bounds))?;
    }
    Ok(())
}

pub fn write_info<W: Write>(ot_path: &Path, record: &OtRecord, w: &mut W) -> io::Result<()> {
    fn or_unknown<T: std::fmt::Debug>(value: Option<T>) -> String {
        value.map_or_else(|| "unknown".to_owned(), |v| format!("{v:?}"))
    }
    writeln!(w, "{}", ot_path.display())?;
    writeln!(w, "  tempo: {} BPM", record.tempo_bpm())?;
    writeln!(w, "  trim length: {}", record.trim_length_value())?;
    writeln!(w, "  loop length: {}", record.loop_length_value())?;
    writeln!(w, "  stretch: {}", or_unknown(record.stretch_mode()))?;
    writeln!(w, "  loop: {}", or_unknown(record.loop_mode()))?;
    match record.gain_db() {
        Some(db) => writeln!(w, "  gain: {db} dB")?,
        None => writeln!(w, "  gain: unknown ({:#x})", record.gain)?,
    }
    writeln!(w, "  quantize: {}", or_unknown(record.trig_quantize()))?;
    writeln!(
        w,
        "  trim: {}..{}, loop point {}",
        record.trim_start, record.trim_end, record.loop_point
    )?;
    writeln!(w, "  checksum: {:#06x}", record.checksum)?;
    writeln!(w, "  slices: {}", record.slice_count)?;
    for (bounds, slice) in record.slice_bounds().zip(record.slices()) {
        writeln!(
            w,
            "    {}: {}..{} loop {}",
            bounds.padded_index(),
            bounds.start,
            bounds.end,
            slice.loop_point
        )?;
    }
    Ok(())
}
