//! Lagrange coder round trips with random erasures

use gfcode::galois::{
    GaloisField, Gf16Field, Gf8Field, Poly4299161607, Prime257, PrimeField, ReferenceField,
};
use gfcode::reed_solomon::lagrange::{self, interpolate};
use gfcode::reed_solomon::{CodeError, LagrangeCoder, Node};
use gfcode::FieldElement;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

fn random_message<F: GaloisField>(field: &F, k: usize, rng: &mut StdRng) -> Vec<F::Element> {
    (0..k)
        .map(|_| field.element(rng.random_range(0..field.order())).unwrap())
        .collect()
}

/// Encode at `0..n`, keep K random codeword symbols, decode
fn round_trip<F: GaloisField>(field: &F, k: usize, n: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let coder = LagrangeCoder::systematic(field, k).unwrap();
    let message = random_message(field, k, &mut rng);
    let codeword = coder.encode_fixed(&message, n).unwrap();
    assert_eq!(codeword.len(), n);

    let received: Vec<_> = codeword.choose_multiple(&mut rng, k).copied().collect();
    let decoded = coder.decode(&received).unwrap();
    assert_eq!(decoded, message, "seed {}", seed);
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_gf256_k7_n29() {
    let field = Gf8Field::generate(285).unwrap();
    for seed in 0..20 {
        round_trip(&field, 7, 29, seed);
    }
}

#[test]
fn test_prime257_k7_n29() {
    let field = PrimeField::<Prime257>::new();
    for seed in 0..20 {
        round_trip(&field, 7, 29, seed);
    }
}

#[test]
fn test_other_fields() {
    round_trip(&Gf8Field::generate(19).unwrap(), 5, 16, 1);
    round_trip(&Gf16Field::generate(16427).unwrap(), 12, 40, 2);
    round_trip(&Gf16Field::generate(69643).unwrap(), 20, 60, 3);
    round_trip(&ReferenceField::<Poly4299161607>::new(), 5, 15, 4);
}

#[test]
fn test_full_field_codeword() {
    // N = order: every element is a target
    let field = Gf8Field::generate(19).unwrap();
    round_trip(&field, 6, 16, 8);
}

#[test]
fn test_systematic_prefix() {
    let field = PrimeField::<Prime257>::new();
    let mut rng = StdRng::seed_from_u64(3);
    let coder = LagrangeCoder::systematic(&field, 7).unwrap();
    let message = random_message(&field, 7, &mut rng);
    let codeword = coder.encode_fixed(&message, 29).unwrap();
    let prefix: Vec<_> = codeword[..7].iter().map(|node| node.value).collect();
    assert_eq!(prefix, message);
}

// ============================================================================
// Arbitrary Coordinates
// ============================================================================

#[test]
fn test_targets_permuting_message_coords() {
    let field = Gf8Field::generate(285).unwrap();
    let coords: Vec<_> = [10u64, 20, 30, 40]
        .iter()
        .map(|&v| field.element(v).unwrap())
        .collect();
    let coder = LagrangeCoder::new(&field, coords.clone()).unwrap();
    let message: Vec<_> = [1u64, 2, 3, 4]
        .iter()
        .map(|&v| field.element(v).unwrap())
        .collect();

    let targets = [coords[3], coords[1], coords[0], coords[2]];
    let codeword = coder.encode(&message, &targets).unwrap();
    let values: Vec<u64> = codeword.iter().map(|node| node.value.to_u64()).collect();
    assert_eq!(values, vec![4, 2, 1, 3]);
}

#[test]
fn test_free_functions_with_disjoint_targets() {
    let field = PrimeField::<Prime257>::new();
    let e = |v| field.element(v).unwrap();
    let message: Vec<Node<_>> = (0..5).map(|i| Node::new(e(100 + i), e(7 * i + 1))).collect();
    let targets: Vec<_> = (0..12).map(|i| e(200 + i)).collect();

    let codeword = lagrange::encode(&field, &message, &targets).unwrap();
    let received = [codeword[11], codeword[0], codeword[5], codeword[7], codeword[2]];
    let message_coords: Vec<_> = message.iter().map(|node| node.coord).collect();
    let decoded = lagrange::decode(&field, &received, &message_coords).unwrap();
    let expected: Vec<_> = message.iter().map(|node| node.value).collect();
    assert_eq!(decoded, expected);
}

#[test]
fn test_interpolate_constant_polynomial() {
    let field = Gf16Field::generate(69643).unwrap();
    let e = |v| field.element(v).unwrap();
    let nodes = [Node::new(e(1), e(0xBEEF)), Node::new(e(2), e(0xBEEF))];
    for point in [0, 3, 0xFFFF] {
        assert_eq!(interpolate(&field, &nodes, e(point)).unwrap(), e(0xBEEF));
    }
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn test_decode_rejects_wrong_count() {
    let field = Gf8Field::generate(285).unwrap();
    let coder = LagrangeCoder::systematic(&field, 4).unwrap();
    let message: Vec<_> = (1..=4).map(|v| field.element(v).unwrap()).collect();
    let codeword = coder.encode_fixed(&message, 10).unwrap();
    assert_eq!(
        coder.decode(&codeword[..5]).unwrap_err(),
        CodeError::SymbolCount {
            expected: 4,
            actual: 5
        }
    );
}

#[test]
fn test_duplicate_coordinates_rejected() {
    let field = Gf8Field::generate(285).unwrap();
    let e = |v| field.element(v).unwrap();
    assert_eq!(
        LagrangeCoder::new(&field, vec![e(1), e(2), e(1)]).unwrap_err(),
        CodeError::DuplicateCoordinate(1)
    );

    let coder = LagrangeCoder::systematic(&field, 2).unwrap();
    assert_eq!(
        coder.encode(&[e(5), e(6)], &[e(3), e(3)]).unwrap_err(),
        CodeError::DuplicateCoordinate(3)
    );
    let received = [Node::new(e(9), e(1)), Node::new(e(9), e(2))];
    assert_eq!(
        coder.decode(&received).unwrap_err(),
        CodeError::DuplicateCoordinate(9)
    );
}

#[test]
fn test_too_many_targets() {
    let field = Gf8Field::generate(19).unwrap();
    let coder = LagrangeCoder::systematic(&field, 3).unwrap();
    let message: Vec<_> = (1..=3).map(|v| field.element(v).unwrap()).collect();
    assert_eq!(
        coder.encode_fixed(&message, 17).unwrap_err(),
        CodeError::TooManySymbols {
            requested: 17,
            order: 16
        }
    );
}

#[test]
fn test_empty_message_rejected() {
    let field = PrimeField::<Prime257>::new();
    assert_eq!(
        LagrangeCoder::systematic(&field, 0).unwrap_err(),
        CodeError::EmptyMessage
    );
}
