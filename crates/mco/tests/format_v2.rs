//! Integration tests for the V2 output layout

use ltools_core::SimulationRecord;
use ltools_mco::{Error, Format, Mco, McoV2};
use rstest::{fixture, rstest};

const TOLERANCE: f64 = 1e-12;

fn expect(value: f64, reference: f64) {
    assert!(
        (value - reference).abs() < TOLERANCE,
        "{value} != {reference}"
    );
}

#[fixture]
fn reference() -> McoV2 {
    McoV2::from_file("./data/v2_sample.mco").unwrap()
}

#[rstest]
fn media_dictionary_kept_raw(reference: McoV2) {
    assert_eq!(reference.media.len(), 5);
    let tissue = reference.media.get("tissue_1").unwrap();
    expect(tissue.n, 1.37);
    expect(tissue.mu_a, 1.0);
    expect(tissue.mu_s, 100.0);
    expect(tissue.g, 0.9);
    assert!(reference.media.get("bone").is_none());
}

#[rstest]
fn source_description(reference: McoV2) {
    assert_eq!(reference.source.kind, "pencil");
    expect(reference.source.depth, 0.0);
}

#[rstest]
fn grid_with_time_dimension(reference: McoV2) {
    let grid = &reference.grid;
    expect(grid.dz, 0.1);
    expect(grid.dr, 0.2);
    expect(grid.dt.unwrap(), 0.1);
    assert_eq!((grid.ndz, grid.ndr, grid.nda), (4, 3, 2));
    assert_eq!(grid.ndt, Some(1));
}

#[rstest]
fn layers_resolve_through_media(reference: McoV2) {
    assert_eq!(reference.num_layers(), 5);

    let names: Vec<_> = reference
        .layers
        .iter()
        .map(|layer| layer.name.as_deref().unwrap())
        .collect();
    assert_eq!(names, ["air", "tissue_1", "tissue_2", "tissue_3", "air"]);

    // boundary media have no thickness token
    assert!(reference.layers[0].is_semi_infinite());
    assert!(reference.layers[4].is_semi_infinite());

    let thicknesses: Vec<_> = reference.layers[1..4]
        .iter()
        .map(|layer| layer.d)
        .collect();
    assert_eq!(thicknesses, [1.0, 1.0, 2.0]);

    let middle = &reference.layers[2];
    expect(middle.n, 1.37);
    expect(middle.mu_a, 0.1);
    expect(middle.mu_s, 1.0);
    expect(middle.g, 0.0);

    expect(reference.layers[1].mu_s, 10.0);
    expect(reference.layers[3].g, 0.7);
}

#[rstest]
fn energy_balance_totals(reference: McoV2) {
    let results = reference.results();
    expect(results.rsp, 0.024);
    expect(results.ru, 0.01);
    expect(results.rd, 0.23);
    expect(results.rt, 0.24);
    expect(results.absorbed, 0.67);
    expect(results.tu, 0.005);
    expect(results.td, 0.061);
    expect(results.tt, 0.066);
}

#[rstest]
fn distributions_skip_the_echoed_labels(reference: McoV2) {
    let results = &reference.results;

    assert_eq!(results.az, vec![1.0, 2.0, 3.0]);
    assert_eq!(results.rdr, vec![1.0, 0.5]);
    assert_eq!(results.tdr, vec![0.2, 0.1]);
    assert_eq!(results.rda, vec![0.11, 0.22]);
    assert_eq!(results.tda, vec![0.01, 0.02]);

    let arz = &results.arz;
    assert_eq!(arz.shape(), (4, 3));
    expect(arz[(0, 0)], 1.0);
    expect(arz[(0, 2)], 1e-8);

    assert_eq!(results.rdra.shape(), (2, 3));
    expect(results.rdra[(1, 2)], 6.0);
    assert_eq!(results.tdra.shape(), (2, 3));
    expect(results.tdra[(0, 0)], 0.1);
}

#[rstest]
fn detected_through_the_common_entry_point(reference: McoV2) {
    let record = Mco::from_file("./data/v2_sample.mco").unwrap();
    assert_eq!(record.format(), Format::V2);
    match record {
        Mco::V2(parsed) => assert_eq!(parsed, reference),
        Mco::V1(_) => panic!("V2 content detected as V1"),
    }
}

#[rstest]
fn unknown_content_is_rejected() {
    let result = Mco::from_text("mesh tally output\n1 2 3\n");
    assert!(matches!(result, Err(Error::UnrecognizedFormat { .. })));
}

#[rstest]
fn missing_input_echo_is_an_error() {
    let result = McoV2::from_text("mcmloA2.0\nRAT\n0.1\n");
    assert!(matches!(
        result,
        Err(Error::SectionNotFound(section)) if section == "mcmli2.0"
    ));
}

#[rstest]
fn undefined_medium_is_an_error() {
    let text = "mcmloA2.0\n\
                mcmli2.0\n\
                air 1.0 0 0 0\n\
                end\n\
                out.mco A\n\
                air\n\
                bone 0.1\n\
                end\n";
    let result = McoV2::from_text(text);
    assert!(matches!(
        result,
        Err(Error::UndefinedMedium(name)) if name == "bone"
    ));
}
