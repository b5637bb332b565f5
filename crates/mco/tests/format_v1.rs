//! Integration tests for the V1 output layout

use ltools_core::SimulationRecord;
use ltools_mco::{Error, Format, Mco, McoV1};
use rstest::{fixture, rstest};

const TOLERANCE: f64 = 1e-12;

fn expect(value: f64, reference: f64) {
    assert!(
        (value - reference).abs() < TOLERANCE,
        "{value} != {reference}"
    );
}

#[fixture]
fn reference() -> McoV1 {
    McoV1::from_file("./data/v1_sample.mco").unwrap()
}

#[rstest]
fn header_values(reference: McoV1) {
    assert_eq!(reference.photons, 1_000_000);
    assert_eq!(reference.n_above, 1.0);
    assert_eq!(reference.n_below, 1.0);
}

#[rstest]
fn grid_converted_to_mm(reference: McoV1) {
    let grid = &reference.grid;
    expect(grid.dz, 0.1);
    expect(grid.dr, 0.1);
    assert_eq!(grid.dt, None);
    assert_eq!((grid.ndz, grid.ndr, grid.nda), (4, 3, 2));
    assert_eq!(grid.ndt, None);

    // radial centres stop one bin short of the overflow bin
    assert_eq!(grid.r.len(), 2);
    expect(grid.r[0], 0.0);
    expect(grid.r[1], 0.1);
    assert_eq!(grid.z.len(), 4);
    expect(grid.z[3], 0.30000000000000004);
}

#[rstest]
fn layer_stack(reference: McoV1) {
    assert_eq!(reference.num_layers(), 3);
    let middle = &reference.layers[1];
    assert_eq!(middle.name, None);
    expect(middle.n, 1.4);
    expect(middle.mu_a, 0.01);
    expect(middle.mu_s, 0.99);
    expect(middle.g, 0.0);
    expect(middle.d, 10.0);
    expect(reference.layers[0].d, 1.0);
}

#[rstest]
fn energy_balance_derivations(reference: McoV1) {
    let results = reference.results();
    expect(results.rsp, 0.025);
    // the V1 layout has no unscattered reflectance of its own
    expect(results.ru, 0.025);
    expect(results.rd, 0.23);
    expect(results.rt, 0.255);
    expect(results.absorbed, 0.68);
    expect(results.td, 0.065);
    expect(results.tt, 0.065);
    expect(results.tu, 0.0);
    expect(results.total(), 1.0);
}

#[rstest]
fn one_dimensional_distributions(reference: McoV1) {
    let results = &reference.results;

    // overflow bins are dropped, values converted to mm-based units
    assert_eq!(results.az, vec![1.0, 2.0, 3.0]);
    assert_eq!(results.rdr, vec![1.0, 0.5]);
    assert_eq!(results.tdr, vec![2.0, 1.0]);

    // angular distributions are dimensionless per steradian, kept raw
    assert_eq!(results.rda, vec![0.11, 0.22]);
    assert_eq!(results.tda, vec![0.33, 0.44]);
}

#[rstest]
fn absorbance_matrix_is_floored(reference: McoV1) {
    let arz = &reference.results.arz;
    assert_eq!(arz.shape(), (4, 3));
    expect(arz[(0, 0)], 1.0);
    expect(arz[(3, 1)], 0.8);
    // 1e-6 cm^-3 converts below the floor and is clamped
    expect(arz[(0, 2)], 1e-8);
}

#[rstest]
fn angular_matrices(reference: McoV1) {
    let rdra = &reference.results.rdra;
    assert_eq!(rdra.shape(), (2, 3));
    expect(rdra[(0, 0)], 1.0);
    expect(rdra[(1, 2)], 6.0);

    let tdra = &reference.results.tdra;
    assert_eq!(tdra.shape(), (2, 3));
    expect(tdra[(0, 0)], 0.1);
    expect(tdra[(1, 2)], 0.6);
}

#[rstest]
fn detected_through_the_common_entry_point(reference: McoV1) {
    let record = Mco::from_file("./data/v1_sample.mco").unwrap();
    assert_eq!(record.format(), Format::V1);
    match record {
        Mco::V1(parsed) => assert_eq!(parsed, reference),
        Mco::V2(_) => panic!("V1 content detected as V2"),
    }
}

#[rstest]
fn wrong_magic_is_rejected() {
    let result = McoV1::from_text("mcmloA2.0\n");
    assert!(matches!(
        result,
        Err(Error::UnrecognizedFormat { expected, .. }) if expected == "A1"
    ));
}

#[rstest]
fn truncated_distribution_is_reported() {
    // A_z promises ndz values but the content ends after two
    let text = "A1\n\n\n\n\n\n\n\n\n\n\n\n\n\
                100\n0.01 0.01\n4 3 2\n1\n1.0\n1.5 0 0 0 0.1\n1.0\n\
                A_z\n10\n20\n";
    let result = McoV1::from_text(text);
    assert!(matches!(
        result,
        Err(Error::Scan(ltools_core::Error::TruncatedData {
            expected: 4,
            found: 2
        }))
    ));
}

#[rstest]
fn missing_blocks_leave_defaults(reference: McoV1) {
    // header and layers only, no RAT and no distributions
    let text = "A1\n\n\n\n\n\n\n\n\n\n\n\n\n\
                100\n0.01 0.01\n4 3 2\n1\n1.0\n1.5 0 0 0 0.1\n1.0\n";
    let record = McoV1::from_text(text).unwrap();
    assert_eq!(record.photons, 100);
    assert_eq!(record.results.rt, 0.0);
    assert!(record.results.az.is_empty());
    assert!(record.results.arz.is_empty());
    assert_ne!(record, reference);
}
