use afl::fuzz;
use nif_validator::{
    classify, is_valid, is_valid_cif, is_valid_dni, is_valid_entity, is_valid_nie,
    is_valid_other_personal_nif, is_valid_personal, NifScope, Validator,
};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    run_fuzz(input);
    Some(())
}

fn run_fuzz(input: &str) {
    let dni = is_valid_dni(input);
    let nie = is_valid_nie(input);
    let other_personal_nif = is_valid_other_personal_nif(input);
    let cif = is_valid_cif(input);

    assert_eq!(is_valid_personal(input), dni || nie || other_personal_nif);
    assert_eq!(is_valid_entity(input), cif);
    assert_eq!(
        is_valid(input),
        is_valid_personal(input) || is_valid_entity(input)
    );

    // shapes are disjoint, so at most one kind can be valid
    let valid_kinds = [dni, nie, other_personal_nif, cif]
        .iter()
        .filter(|valid| **valid)
        .count();
    assert!(valid_kinds <= 1);

    match classify(input) {
        Some(kind) => {
            assert!(NifScope::from(kind).is_valid_match(input));
            assert_eq!(input.len(), 9);
        }
        None => assert!(!is_valid(input)),
    }
}
