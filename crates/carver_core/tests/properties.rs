//! Property-based checks for the ordering and non-overlap invariants a
//! `CarveCoordinator` run must uphold regardless of what signatures land
//! where in the source.

use carver_core::reader::SliceReader;
use carver_core::{AcceptAll, CarveConfig, CarveCoordinator, CollectingSink, NoopProgress, SystemClock};
use proptest::prelude::*;

fn jpeg_blob(filler: u8, extra: usize) -> Vec<u8> {
    let mut v = vec![0xFF, 0xD8, 0xFF, 0xE0];
    v.extend(std::iter::repeat(filler).take(extra));
    v.extend_from_slice(&[0xFF, 0xD9]);
    v
}

fn png_blob(filler: u8, extra: usize) -> Vec<u8> {
    let mut v = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    v.extend(std::iter::repeat(filler).take(extra));
    v.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    v.extend_from_slice(b"IEND");
    v.extend_from_slice(&[0xAE, 0x42, 0x60, 0x82]);
    v
}

fn interleave(pieces: &[Vec<u8>], gap_sizes: &[usize]) -> Vec<u8> {
    let mut out = Vec::new();
    for (i, piece) in pieces.iter().enumerate() {
        out.extend_from_slice(piece);
        if let Some(gap) = gap_sizes.get(i) {
            out.extend(std::iter::repeat(0xAAu8).take(*gap));
        }
    }
    out
}

fn carve(data: Vec<u8>) -> Vec<(String, Vec<u8>)> {
    let mut reader = SliceReader::new(data);
    let filter = AcceptAll;
    let mut sink = CollectingSink::default();
    let mut progress = NoopProgress;
    let clock = SystemClock;
    let mut coordinator = CarveCoordinator::new(
        &mut reader,
        &filter,
        &mut sink,
        &mut progress,
        &clock,
        CarveConfig::default(),
    );
    coordinator.run(&|| false).unwrap();
    sink.items
}

fn source_offset_from_name(name: &str) -> u64 {
    // carved_<timestamp>_<offset-12-hex>_<counter>.<ext>
    let hex_part = name.split('_').nth(2).expect("offset field present");
    u64::from_str_radix(hex_part, 16).expect("offset field is hex")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // P1 (ordering) + P2 (non-overlap): for any interleaving of JPEGs and
    // PNGs separated by random filler, emitted carves are strictly
    // ordered by source offset and never overlap.
    #[test]
    fn p1_p2_ordering_and_non_overlap(
        kinds in proptest::collection::vec(any::<bool>(), 1..6),
        gaps in proptest::collection::vec(0usize..200, 1..6),
        extras in proptest::collection::vec(0usize..40, 1..6),
    ) {
        let pieces: Vec<Vec<u8>> = kinds
            .iter()
            .zip(extras.iter())
            .map(|(is_jpeg, extra)| {
                if *is_jpeg {
                    jpeg_blob(0x11, *extra)
                } else {
                    png_blob(0x22, *extra)
                }
            })
            .collect();
        let data = interleave(&pieces, &gaps);

        let items = carve(data);
        let offsets: Vec<u64> = items.iter().map(|(name, _)| source_offset_from_name(name)).collect();

        for pair in offsets.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }

        for i in 0..items.len().saturating_sub(1) {
            let this_end = offsets[i] + items[i].1.len() as u64;
            prop_assert!(this_end <= offsets[i + 1]);
        }
    }

    // P4 (completeness): every embedded, well-formed JPEG is detected at
    // least once, regardless of surrounding random noise.
    #[test]
    fn p4_every_embedded_jpeg_is_found(
        prefix_noise in proptest::collection::vec(any::<u8>(), 0..500),
        suffix_noise in proptest::collection::vec(any::<u8>(), 0..500),
        extra in 0usize..100,
    ) {
        let mut data = prefix_noise;
        // Random noise could itself contain a stray magic; only assert
        // that at least one JPEG carve exists, not an exact count.
        let jpeg_offset = data.len() as u64;
        data.extend(jpeg_blob(0x33, extra));
        data.extend(suffix_noise);

        let items = carve(data);
        let found = items.iter().any(|(name, _)| source_offset_from_name(name) == jpeg_offset);
        prop_assert!(found);
    }
}
