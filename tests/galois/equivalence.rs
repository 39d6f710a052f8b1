//! Table-driven fields must agree with the carry-less reference everywhere
//!
//! GF(2^4) and GF(2^8) are compared over the full operand square. GF(2^14) and
//! GF(2^16) are sampled by default; the full squares run with `--ignored`.

use gfcode::galois::{
    GaloisField, Gf16Field, Gf8Field, Poly16427, Poly19, Poly285, Poly69643, ReferenceField,
};
use gfcode::testbench::{compare_fields, compare_fields_sampled};

fn full_square_comparisons(order: u64) -> u64 {
    order * order * 2 + order * (order - 1) + (order - 1)
}

#[test]
fn test_gf16_matches_reference() {
    let table = Gf8Field::generate(19).unwrap();
    let reference = ReferenceField::<Poly19>::new();
    let report = compare_fields(&table, &reference).unwrap();
    assert_eq!(report.comparisons, full_square_comparisons(16));
}

#[test]
fn test_gf256_matches_reference() {
    let table = Gf8Field::generate(285).unwrap();
    let reference = ReferenceField::<Poly285>::new();
    let report = compare_fields(&table, &reference).unwrap();
    assert_eq!(report.order, 256);
    assert_eq!(report.comparisons, full_square_comparisons(256));
}

#[test]
fn test_gf16384_matches_reference_sampled() {
    let table = Gf16Field::generate(16427).unwrap();
    let reference = ReferenceField::<Poly16427>::new();
    let report = compare_fields_sampled(&table, &reference, 97).unwrap();
    assert_eq!(report.row_step, 97);
}

#[test]
fn test_gf65536_matches_reference_sampled() {
    let table = Gf16Field::generate(69643).unwrap();
    let reference = ReferenceField::<Poly69643>::new();
    compare_fields_sampled(&table, &reference, 1021).unwrap();
}

#[test]
fn test_gf65536_edge_rows() {
    let table = Gf16Field::generate(69643).unwrap();
    let reference = ReferenceField::<Poly69643>::new();
    for a in [0u64, 1, 2, 0x8000, 0xFFFE, 0xFFFF] {
        let (ta, ra) = (table.element(a).unwrap(), reference.element(a).unwrap());
        for b in (0..65536u64).step_by(7) {
            let (tb, rb) = (table.element(b).unwrap(), reference.element(b).unwrap());
            assert_eq!(table.mul(ta, tb).value() as u64, reference.mul(ra, rb).value() as u64);
        }
    }
}

#[test]
#[ignore = "full 2^14 square, slow in debug builds"]
fn test_gf16384_matches_reference_exhaustive() {
    let table = Gf16Field::generate(16427).unwrap();
    let reference = ReferenceField::<Poly16427>::new();
    let report = compare_fields(&table, &reference).unwrap();
    assert_eq!(report.comparisons, full_square_comparisons(1 << 14));
}

#[test]
#[ignore = "full 2^16 square, slow in debug builds"]
fn test_gf65536_matches_reference_exhaustive() {
    let table = Gf16Field::generate(69643).unwrap();
    let reference = ReferenceField::<Poly69643>::new();
    let report = compare_fields(&table, &reference).unwrap();
    assert_eq!(report.comparisons, full_square_comparisons(1 << 16));
}
