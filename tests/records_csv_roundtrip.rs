use camino::Utf8PathBuf;

use reedfrost_jitter::trajectories::records_csv::{read_records_csv, write_records_csv};
use reedfrost_jitter::trajectories::unpivot::{batch_to_records, unpivot_trajectories};
use reedfrost_jitter::{jitter_trajectories, JitterError};

mod common;
use common::{random_outbreak_batch, shape};

fn scratch_file(name: &str) -> Utf8PathBuf {
    let dir = Utf8PathBuf::from_path_buf(std::env::temp_dir()).expect("utf-8 temp dir");
    dir.join(format!("{name}-{}.csv", std::process::id()))
}

#[test]
fn test_jittered_batch_through_csv_file() {
    let batch: Vec<_> = random_outbreak_batch(3, 50, 12)
        .into_iter()
        .filter(|t| !t.is_empty())
        .collect();
    let jittered = jitter_trajectories(&batch, 0.25).unwrap();

    let path = scratch_file("jittered-records");
    write_records_csv(&path, &batch_to_records(&jittered)).unwrap();
    let records = read_records_csv(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let reloaded = unpivot_trajectories(records).unwrap();
    assert_eq!(shape(&reloaded), shape(&batch));
    assert_eq!(reloaded, jittered);
}

#[test]
fn test_file_with_time_gap_is_malformed() {
    let path = scratch_file("gap-records");
    std::fs::write(&path, "iter,time,value\n0,0,1.0\n0,2,3.0\n").unwrap();
    let records = read_records_csv(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(
        unpivot_trajectories(records),
        Err(JitterError::MalformedData {
            iter: 0,
            time: 2,
            expected_iter: 0,
            expected_time: 1,
        })
    );
}
