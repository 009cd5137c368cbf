//! Integration tests for loading and reloading datasets from disk.

use std::fs;
use std::io::Write;

use abyssal_data::{Dataset, DatasetError, DatasetOptions};
use camino::{Utf8Path, Utf8PathBuf};
use rstest::{fixture, rstest};
use tempfile::TempDir;

const MERGED: &str = "\
row,col,lat,lon,depth_m,biome,hazard_type,hazard_severity
0,0,-10.0,140.0,4000,abyssal plain,\"['vent', 'seep']\",\"['high', 'low']\"
0,1,-10.0,140.1,4100,seamount,[],[]
";

struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        let mut file = fs::File::create(&path).expect("create dataset file");
        file.write_all(contents.as_bytes())
            .expect("write dataset file");
        path
    }
}

#[fixture]
fn workspace() -> Workspace {
    let dir = TempDir::new().expect("create temp dir");
    let root = Utf8Path::from_path(dir.path())
        .expect("temp dir should be UTF-8")
        .to_path_buf();
    Workspace { _dir: dir, root }
}

#[rstest]
fn loads_rows_with_quoted_collections(workspace: Workspace) {
    let path = workspace.write("merged.csv", MERGED);
    let dataset = Dataset::load(&path).expect("dataset should load");

    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.source(), Some(path.as_path()));
    assert_eq!(dataset.rows()[0].get("hazard_type"), Some("['vent', 'seep']"));

    let cells: Vec<_> = dataset
        .cells()
        .collect::<Result<_, _>>()
        .expect("identities should parse");
    assert_eq!(cells[0].hazards.len(), 2);
    assert!(cells[1].hazards.is_empty());
}

#[rstest]
fn missing_file_reports_open_error(workspace: Workspace) {
    let path = workspace.path("absent.csv");
    let err = Dataset::load(&path).expect_err("missing file should fail");
    match err {
        DatasetError::Open { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected open error, got {other:?}"),
    }
}

#[rstest]
#[case("")]
#[case("row,col,depth_m\n")]
fn empty_tables_have_no_rows(workspace: Workspace, #[case] contents: &str) {
    let path = workspace.write("empty.csv", contents);
    let dataset = Dataset::load(&path).expect("empty dataset should load");
    assert!(dataset.is_empty());
}

#[rstest]
fn honours_custom_delimiter(workspace: Workspace) {
    let path = workspace.write("merged.tsv", "row\tcol\tdepth_m\n2\t5\t3900\n");
    let dataset = Dataset::load_with(&path, DatasetOptions { delimiter: b'\t' })
        .expect("tab-delimited dataset should load");
    assert_eq!(dataset.headers(), ["row", "col", "depth_m"]);
    assert_eq!(dataset.rows()[0].get("depth_m"), Some("3900"));
}

#[rstest]
fn reload_picks_up_new_rows(workspace: Workspace) {
    let path = workspace.write("merged.csv", MERGED);
    let mut dataset = Dataset::load(&path).expect("dataset should load");

    workspace.write("merged.csv", "row,col\n0,0\n0,1\n0,2\n");
    dataset.reload().expect("reload should succeed");
    assert_eq!(dataset.len(), 3);
}

#[rstest]
fn failed_reload_keeps_previous_rows(workspace: Workspace) {
    let path = workspace.write("merged.csv", MERGED);
    let mut dataset = Dataset::load(&path).expect("dataset should load");

    fs::remove_file(&path).expect("remove dataset");
    assert!(dataset.reload().is_err());
    assert_eq!(dataset.len(), 2);
}
