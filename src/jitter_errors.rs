use thiserror::Error;

use crate::constants::{Iter, Time};

#[derive(Error, Debug)]
pub enum JitterError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(
        "Malformed coordinate records: got (iter={iter}, time={time}) \
         while expecting (iter={expected_iter}, time={expected_time}) or the start of the next iter"
    )]
    MalformedData {
        iter: Iter,
        time: Time,
        expected_iter: Iter,
        expected_time: Time,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl PartialEq for JitterError {
    fn eq(&self, other: &Self) -> bool {
        use JitterError::*;
        match (self, other) {
            (InvalidArgument(a), InvalidArgument(b)) => a == b,
            (
                MalformedData {
                    iter: a_iter,
                    time: a_time,
                    expected_iter: a_ei,
                    expected_time: a_et,
                },
                MalformedData {
                    iter: b_iter,
                    time: b_time,
                    expected_iter: b_ei,
                    expected_time: b_et,
                },
            ) => a_iter == b_iter && a_time == b_time && a_ei == b_ei && a_et == b_et,

            // Wrapped errors are not comparable: same variant is enough
            (CsvError(_), CsvError(_)) => true,
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}
