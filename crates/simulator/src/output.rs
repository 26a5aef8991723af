use crate::lattice::SpinLattice;
use crate::tfim::SweepRecord;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// One row per lattice row, spins as comma-separated ±1.
pub fn write_lattice_csv(path: impl AsRef<Path>, lattice: &SpinLattice) -> io::Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    for row in lattice.rows() {
        let line: Vec<String> = row.iter().map(|s| s.to_string()).collect();
        writeln!(f, "{}", line.join(","))?;
    }
    f.flush()
}

pub fn write_trace_csv(path: impl AsRef<Path>, records: &[SweepRecord]) -> io::Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    writeln!(f, "sweep,magnetization,energy,accepted,kicked")?;
    for r in records {
        writeln!(
            f,
            "{},{},{},{},{}",
            r.sweep, r.magnetization, r.energy, r.accepted, r.kicked
        )?;
    }
    f.flush()
}
