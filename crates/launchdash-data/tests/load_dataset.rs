//! Load a launch table from disk and check the derived summaries.

use std::io::Write;

use launchdash_common::LaunchDashError;
use launchdash_data::{Dataset, PayloadBounds};
use pretty_assertions::assert_eq;

const LAUNCHES: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0
2,3,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,4,CCAFS LC-40,0,500.0,F9 v1.0  B0006,v1.0
4,5,CCAFS LC-40,0,677.0,F9 v1.0  B0007,v1.0
5,7,CCAFS LC-40,0,3170.0,F9 v1.1,v1.1
6,10,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
7,36,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT
8,42,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
9,43,KSC LC-39A,0,5600.0,F9 FT B1030,FT
10,45,KSC LC-39A,1,3669.0,F9 FT B1035.1,FT
11,50,CCAFS SLC-40,1,5300.0,F9 B4 B1043.1,B4
12,55,CCAFS SLC-40,1,4707.0,F9 B5 B1046.4,B5
13,56,CCAFS SLC-40,0,1898.0,F9 B4 B1040.2,B4
";

fn write_fixture() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(LAUNCHES.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_disk() {
    let file = write_fixture();
    let ds = Dataset::load(file.path(), None).unwrap();

    assert_eq!(ds.records.len(), 14);
    assert_eq!(ds.bounds, PayloadBounds { min: 0.0, max: 9600.0 });
    assert_eq!(
        ds.sites,
        vec!["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"]
    );

    let ksc = &ds.summaries["KSC LC-39A"];
    assert_eq!((ksc.launches, ksc.successes), (3, 2));
    assert!((ksc.success - 2.0 / 3.0).abs() < 1e-12);

    let ccafs = &ds.summaries["CCAFS LC-40"];
    assert_eq!((ccafs.success, ccafs.failure), (0.0, 1.0));

    let summed: usize = ds.summaries.values().map(|s| s.successes).sum();
    assert_eq!(summed, ds.total_successes());
}

#[test]
fn test_configured_domain_with_absent_site_aborts() {
    let file = write_fixture();
    let sites: Vec<String> = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40", "KSC LC-39B"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let err = Dataset::load(file.path(), Some(&sites)).unwrap_err();
    assert!(matches!(err, LaunchDashError::Aggregation(_)), "{err}");
}

#[test]
fn test_configured_domain_keeps_dropdown_order() {
    let file = write_fixture();
    let sites: Vec<String> = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let ds = Dataset::load(file.path(), Some(&sites)).unwrap();
    assert_eq!(ds.sites, sites);
    assert_eq!(ds.summaries.len(), 4);
}
