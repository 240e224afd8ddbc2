use secure_shuffle::source::{BoundedRandomSource, RandomSourceError, SystemRandomSource};

#[test]
fn system_source_rejects_zero_bound() {
    let mut source = SystemRandomSource::new();

    assert_eq!(
        source.next_below(0),
        Err(RandomSourceError::InvalidBound)
    );
}

#[test]
fn system_source_bound_one_always_returns_zero() {
    let mut source = SystemRandomSource::new();

    for _ in 0..64 {
        assert_eq!(source.next_below(1).unwrap(), 0);
    }
}

#[test]
fn system_source_stays_within_requested_bound() {
    let mut source = SystemRandomSource::new();

    for bound in [2, 3, 7, 10, 255, 1000, 65_537] {
        for _ in 0..200 {
            let value = source.next_below(bound).unwrap();
            assert!(value < bound, "got {value} for bound {bound}");
        }
    }
}

#[test]
fn system_source_reaches_every_residue_of_a_small_bound() {
    let mut source = SystemRandomSource::new();
    let mut seen = [false; 4];

    // P(missing a residue after 1000 draws) is below 2^-400.
    for _ in 0..1000 {
        seen[source.next_below(4).unwrap()] = true;
    }

    assert_eq!(seen, [true; 4]);
}

#[test]
fn independent_system_sources_are_interchangeable() {
    let mut a = SystemRandomSource::new();
    let mut b = SystemRandomSource::default();

    for _ in 0..50 {
        assert!(a.next_below(10).unwrap() < 10);
        assert!(b.next_below(10).unwrap() < 10);
    }
}
