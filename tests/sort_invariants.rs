use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use chainsort::{merge_sort, par_merge_sort, Chain, Record, Value};

/// Deterministic pseudo-random records; zero-padded index labels make the
/// original position recoverable from the label.
fn generated_records(seed: u64, len: usize, value_range: Value) -> Vec<Record> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|idx| Record::new(format!("rec-{idx:04}"), rng.random_range(0..value_range)))
        .collect()
}

fn chain_from(records: &[Record]) -> Chain {
    Chain::from_records(records.iter().cloned()).expect("generated records are non-empty")
}

fn listing(chain: &Chain) -> Vec<(String, Value)> {
    chain
        .iter()
        .map(|record| (record.label.clone(), record.value))
        .collect()
}

#[test]
fn sorted_output_preserves_length() {
    for len in [1, 2, 3, 10, 97, 256] {
        let records = generated_records(11, len, 1_000);
        let sorted = merge_sort(chain_from(&records));
        assert_eq!(sorted.len(), len, "length changed for input of {len}");
    }
}

#[test]
fn sorted_output_is_a_permutation_of_the_input() {
    let records = generated_records(23, 200, 1_000);
    let sorted = merge_sort(chain_from(&records));

    let mut expected: Vec<(String, Value)> = records
        .iter()
        .map(|record| (record.label.clone(), record.value))
        .collect();
    let mut actual = listing(&sorted);
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected);
}

#[test]
fn adjacent_values_never_increase() {
    let records = generated_records(37, 300, 50);
    let sorted = merge_sort(chain_from(&records));
    let values: Vec<Value> = sorted.iter().map(|record| record.value).collect();
    for pair in values.windows(2) {
        assert!(pair[0] >= pair[1], "ascending pair {:?}", pair);
    }
}

#[test]
fn equal_values_keep_their_input_order() {
    // A narrow value range forces plenty of ties.
    let records = generated_records(53, 200, 8);
    let sorted = listing(&merge_sort(chain_from(&records)));
    for pair in sorted.windows(2) {
        if pair[0].1 == pair[1].1 {
            // Labels encode the original position, so stable runs must keep
            // them ascending.
            assert!(
                pair[0].0 < pair[1].0,
                "tie reordered: {:?} before {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn sorting_an_already_sorted_chain_changes_nothing() {
    let records = generated_records(71, 150, 100);
    let once = merge_sort(chain_from(&records));
    let first_pass = listing(&once);
    let twice = merge_sort(once);
    assert_eq!(listing(&twice), first_pass);
}

#[test]
fn parallel_and_sequential_engines_agree() {
    let records = generated_records(89, 1_000, 5_000);
    let sequential = merge_sort(chain_from(&records));
    let parallel = par_merge_sort(chain_from(&records));
    assert_eq!(listing(&sequential), listing(&parallel));
}

#[test]
fn small_fixed_inputs_sort_as_expected() {
    let sorted = merge_sort(
        Chain::from_records([
            Record::new("X", 10),
            Record::new("Y", 30),
            Record::new("Z", 20),
        ])
        .expect("three records"),
    );
    assert_eq!(sorted.to_string(), r#"("Y", 30), ("Z", 20), ("X", 10)"#);

    let ties = merge_sort(
        Chain::from_records([
            Record::new("A", 1),
            Record::new("B", 1),
            Record::new("C", 1),
        ])
        .expect("three records"),
    );
    assert_eq!(ties.to_string(), r#"("A", 1), ("B", 1), ("C", 1)"#);
}
