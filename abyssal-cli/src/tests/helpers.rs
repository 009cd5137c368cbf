//! Test helpers for building dataset workspaces on disk.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Merged table with three scored cells and one row lacking a column index.
pub(super) const MERGED: &str = "\
row,col,lat,lon,depth_m,pressure_atm,temperature_c,biome,resource_type,resource_economic_value,resource_abundance,resource_purity,resource_extraction_difficulty,hazard_type,hazard_severity
0,0,-10.0,140.0,4000,400,2.0,abyssal plain,['cobalt'],[10.0],[2.0],[0.5],\"[4.0, 6.0]\",\"['vent', 'seep']\",\"['high', 'low']\"
0,1,-10.0,140.1,4100,410,1.9,seamount,['nickel'],[30.0],[1.0],[1.0],[2.0],[],[]
1,,-10.1,140.0,4200,420,1.8,trench,[],[],[],[],[],[],[]
1,1,-10.1,140.1,4300,430,1.7,abyssal plain,[],[],[],[],[],['slump'],['extreme']
";

pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn dataset(&self) -> Utf8PathBuf {
        let path = self.root.join("merged.csv");
        write_utf8(&path, MERGED.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}
