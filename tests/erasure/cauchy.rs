//! Cauchy coder round trips with random erasures

use gfcode::galois::{
    GaloisField, Gf16Field, Gf8Field, Poly4299161607, Prime257, Prime65537, PrimeField,
    ReferenceField,
};
use gfcode::reed_solomon::{CauchyCoder, CodeError, Node};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

fn random_message<F: GaloisField>(field: &F, k: usize, rng: &mut StdRng) -> Vec<F::Element> {
    (0..k)
        .map(|_| field.element(rng.random_range(0..field.order())).unwrap())
        .collect()
}

/// Encode, keep K random codeword symbols, decode
fn round_trip<F: GaloisField>(field: &F, k: usize, n: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let coder = CauchyCoder::with_default_coords(field, k, n).unwrap();
    let message = random_message(field, k, &mut rng);
    let codeword = coder.codeword(&message).unwrap();
    assert_eq!(codeword.len(), n);

    let received: Vec<_> = codeword.choose_multiple(&mut rng, k).copied().collect();
    let decoded = coder.decode(&received).unwrap();
    assert_eq!(decoded, message, "seed {}", seed);
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_prime257_k7_n29() {
    let field = PrimeField::<Prime257>::new();
    for seed in 0..20 {
        round_trip(&field, 7, 29, seed);
    }
}

#[test]
fn test_gf256_k7_n29() {
    let field = Gf8Field::generate(285).unwrap();
    for seed in 0..20 {
        round_trip(&field, 7, 29, seed);
    }
}

#[test]
fn test_other_fields() {
    round_trip(&PrimeField::<Prime65537>::new(), 16, 48, 1);
    round_trip(&Gf16Field::generate(16427).unwrap(), 12, 40, 2);
    round_trip(&Gf16Field::generate(69643).unwrap(), 20, 60, 3);
    round_trip(&ReferenceField::<Poly4299161607>::new(), 5, 15, 4);
    round_trip(&Gf8Field::generate(19).unwrap(), 4, 12, 5);
}

#[test]
fn test_single_symbol_message() {
    let field = PrimeField::<Prime257>::new();
    round_trip(&field, 1, 5, 9);
}

#[test]
fn test_no_redundancy() {
    let field = Gf8Field::generate(285).unwrap();
    round_trip(&field, 10, 10, 11);
}

#[test]
fn test_received_order_does_not_matter() {
    let field = PrimeField::<Prime257>::new();
    let mut rng = StdRng::seed_from_u64(42);
    let coder = CauchyCoder::with_default_coords(&field, 6, 20).unwrap();
    let message = random_message(&field, 6, &mut rng);
    let codeword = coder.codeword(&message).unwrap();

    let mut received: Vec<_> = codeword[10..16].to_vec();
    let forward = coder.decode(&received).unwrap();
    received.shuffle(&mut rng);
    let shuffled = coder.decode(&received).unwrap();
    assert_eq!(forward, message);
    assert_eq!(shuffled, message);
}

#[test]
fn test_full_field_budget() {
    // K + N = 256 uses every coordinate of GF(2^8)
    let field = Gf8Field::generate(285).unwrap();
    round_trip(&field, 100, 156, 7);

    assert_eq!(
        CauchyCoder::with_default_coords(&field, 100, 157).unwrap_err(),
        CodeError::TooManySymbols {
            requested: 257,
            order: 256
        }
    );
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn test_decode_rejects_wrong_count() {
    let field = PrimeField::<Prime257>::new();
    let coder = CauchyCoder::with_default_coords(&field, 3, 8).unwrap();
    let message: Vec<_> = (1..=3).map(|v| field.element(v).unwrap()).collect();
    let codeword = coder.codeword(&message).unwrap();

    assert_eq!(
        coder.decode(&codeword[..2]).unwrap_err(),
        CodeError::SymbolCount {
            expected: 3,
            actual: 2
        }
    );
    assert_eq!(
        coder.encode(&message[..2]).unwrap_err(),
        CodeError::SymbolCount {
            expected: 3,
            actual: 2
        }
    );
}

#[test]
fn test_decode_rejects_repeated_symbol() {
    let field = PrimeField::<Prime257>::new();
    let coder = CauchyCoder::with_default_coords(&field, 2, 5).unwrap();
    let message: Vec<_> = (1..=2).map(|v| field.element(v).unwrap()).collect();
    let codeword = coder.codeword(&message).unwrap();

    let received = [codeword[0], codeword[0]];
    assert_eq!(
        coder.decode(&received).unwrap_err(),
        CodeError::DuplicateCoordinate(2)
    );
}

#[test]
fn test_overlapping_coordinates_rejected() {
    let field = Gf8Field::generate(285).unwrap();
    let coords = |values: &[u64]| -> Vec<_> {
        values.iter().map(|&v| field.element(v).unwrap()).collect()
    };
    let err = CauchyCoder::new(&field, coords(&[1, 2, 3]), coords(&[4, 3])).unwrap_err();
    assert_eq!(err, CodeError::ZeroDenominator { row: 3, col: 3 });
}

#[test]
fn test_received_row_colliding_with_column_rejected() {
    let field = PrimeField::<Prime257>::new();
    let coder = CauchyCoder::with_default_coords(&field, 2, 4).unwrap();
    // 256 + 1 = 0 mod 257
    let bad = Node::new(field.element(256).unwrap(), field.element(1).unwrap());
    let ok = Node::new(field.element(3).unwrap(), field.element(1).unwrap());
    assert!(matches!(
        coder.decode(&[ok, bad]).unwrap_err(),
        CodeError::ZeroDenominator { .. }
    ));
}
