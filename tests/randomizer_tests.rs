//! Randomizer tests - determinism and dealing bias

use gridfall::core::Randomizer;
use gridfall::types::PieceKind;

#[test]
fn test_same_seed_same_sequence() {
    let mut a = Randomizer::new(2024);
    let mut b = Randomizer::new(2024);
    for _ in 0..500 {
        assert_eq!(a.deal(), b.deal());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = Randomizer::new(1);
    let mut b = Randomizer::new(2);
    let a_run: Vec<PieceKind> = (0..50).map(|_| a.deal()).collect();
    let b_run: Vec<PieceKind> = (0..50).map(|_| b.deal()).collect();
    assert_ne!(a_run, b_run);
}

#[test]
fn test_long_run_deals_every_kind_roughly_uniformly() {
    let mut randomizer = Randomizer::new(0xBEEF);
    let mut counts = [0u32; 7];
    for _ in 0..10_000 {
        counts[randomizer.deal() as usize] += 1;
    }

    // Expected share is ~1428 per kind; the history bias evens runs
    // out rather than skewing the totals.
    for (kind, &count) in PieceKind::ALL.iter().zip(counts.iter()) {
        assert!(
            (1100..1800).contains(&count),
            "{:?} dealt {} times",
            kind,
            count
        );
    }
}

#[test]
fn test_first_deal_avoids_overhang_pieces() {
    // The retry cap means the exclusion is probabilistic, not
    // absolute; over many seeds violations must stay rare.
    let mut violations = 0;
    for seed in 0..200u32 {
        let first = Randomizer::new(seed).deal();
        if matches!(first, PieceKind::S | PieceKind::Z | PieceKind::O) {
            violations += 1;
        }
    }
    assert!(violations <= 5, "{violations} openings with S/Z/O");
}

#[test]
fn test_immediate_repeats_are_rare() {
    let mut randomizer = Randomizer::new(777);
    let mut previous = randomizer.deal();
    let mut repeats = 0;
    let deals = 5_000;
    for _ in 0..deals {
        let next = randomizer.deal();
        if next == previous {
            repeats += 1;
        }
        previous = next;
    }

    // A memoryless dealer would repeat ~1/7 of the time (~714 here);
    // the history window should push that well below 2%.
    assert!(repeats < deals / 50, "{repeats} immediate repeats");
}
