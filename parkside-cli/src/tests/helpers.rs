//! Test helpers for writing catalogs and reading command output.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

use crate::files::SessionFiles;

pub(super) const CATALOG: &str = r#"[
    {"id": 1, "name": "Space Coaster", "area": "Tomorrow", "priority": 1, "lat": 35.6340, "lon": 139.8790},
    {"id": 2, "name": "Jungle Cruise", "area": "Adventure", "priority": 2, "lat": 35.6310, "lon": 139.8810},
    {"id": 3, "name": "Carousel", "area": "Fantasy", "priority": 4, "lat": 35.6325, "lon": 139.8830},
    {"id": 4, "name": "Parade", "area": "Plaza", "priority": 3, "notes": "twice daily"}
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory with the sample catalog and a state path inside it.
pub(super) struct ParkFiles {
    _tmp: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) files: SessionFiles,
}

impl ParkFiles {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        let catalog = root.join("catalog.json");
        write_utf8(&catalog, CATALOG.as_bytes());
        let state = root.join("state").join("parkside-state.json");
        Self {
            _tmp: tmp,
            root,
            files: SessionFiles { catalog, state },
        }
    }
}

pub(super) fn json_output(buffer: &[u8]) -> serde_json::Value {
    let stdout = std::str::from_utf8(buffer).expect("stdout utf-8");
    serde_json::from_str(stdout).expect("output should be JSON")
}

pub(super) fn ids(values: &serde_json::Value) -> Vec<u64> {
    values
        .as_array()
        .expect("JSON array")
        .iter()
        .map(|value| value["id"].as_u64().expect("numeric id"))
        .collect()
}
