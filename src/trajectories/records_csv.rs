//! # Coordinate records as CSV
//!
//! Long-format exchange of [`CoordinateRecord`]s: one row per `(iter, time)` position,
//! with a header row.
//!
//! ```text
//! iter,time,value
//! 0,0,1.0
//! 0,1,3.0
//! 1,0,1.0
//! ```
//!
//! Row order is free; [`unpivot_trajectories`](crate::trajectories::unpivot::unpivot_trajectories)
//! sorts and validates the rows when they are turned back into a batch.
use std::fs::File;
use std::io::{Read, Write};

use camino::Utf8Path;

use crate::jitter_errors::JitterError;
use crate::trajectories::unpivot::CoordinateRecord;

/// Read records from any CSV source with an `iter,time,value` header.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<CoordinateRecord>, JitterError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let records = rdr
        .deserialize::<CoordinateRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Write records, header included, to any sink.
pub fn write_records<W: Write>(writer: W, records: &[CoordinateRecord]) -> Result<(), JitterError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read records from a CSV file.
pub fn read_records_csv(path: &Utf8Path) -> Result<Vec<CoordinateRecord>, JitterError> {
    read_records(File::open(path)?)
}

/// Write records to a CSV file, replacing it if it exists.
pub fn write_records_csv(path: &Utf8Path, records: &[CoordinateRecord]) -> Result<(), JitterError> {
    write_records(File::create(path)?, records)
}
