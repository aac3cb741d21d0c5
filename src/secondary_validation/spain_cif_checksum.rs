use crate::kind::NifKind;
use crate::secondary_validation::{sum_all_digits, Validator};
use crate::shape::match_shape;

/// Legal entities (CIF) and the K, L and M personal numbers share the same
/// control digit, only the accepted type letters differ.
///
/// See <https://es.wikipedia.org/wiki/C%C3%B3digo_de_identificaci%C3%B3n_fiscal>
pub struct SpanishCifChecksum;

pub struct SpanishOtherPersonalNifChecksum;

const LETTER_CHECK_TYPES: &str = "PQSW";
const NUMBER_CHECK_TYPES: &str = "ABEH";

/// Check letters, indexed by the control digit
const NIF_LETTER_CHECK_TABLE: [char; 10] = ['J', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

/// Which representations of the control digit a number may carry as its check symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckForm {
    Letter,
    Number,
    Either,
}

impl CheckForm {
    pub fn for_type(type_letter: char, body: &str) -> Self {
        if LETTER_CHECK_TYPES.contains(type_letter) || body.starts_with("00") {
            CheckForm::Letter
        } else if NUMBER_CHECK_TYPES.contains(type_letter) {
            CheckForm::Number
        } else {
            CheckForm::Either
        }
    }

    pub fn accepts(&self, control_digit: u32, check: char) -> bool {
        let letter_matches = || NIF_LETTER_CHECK_TABLE.get(control_digit as usize) == Some(&check);
        let number_matches = || check.to_digit(10) == Some(control_digit);

        match self {
            CheckForm::Letter => letter_matches(),
            CheckForm::Number => number_matches(),
            CheckForm::Either => letter_matches() || number_matches(),
        }
    }
}

/// Digits at odd positions are summed as they are, digits at even positions
/// are doubled and the digits of the result are summed.
fn control_digit(body: &str) -> u32 {
    let (sum_even, sum_odd) = body
        .chars()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .fold((0, 0), |(sum_even, sum_odd), (idx, digit)| {
            if idx & 1 == 1 {
                (sum_even + digit, sum_odd)
            } else {
                (sum_even, sum_odd + sum_all_digits(digit * 2))
            }
        });

    (10 - (sum_even + sum_odd) % 10) % 10
}

fn is_valid_nif_checksum(kind: NifKind, regex_match: &str) -> bool {
    let Some(nif) = match_shape(kind, regex_match) else {
        return false;
    };
    let Some(nif_type) = nif.type_letter else {
        return false;
    };

    CheckForm::for_type(nif_type, nif.body).accepts(control_digit(nif.body), nif.check)
}

impl Validator for SpanishCifChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        is_valid_nif_checksum(NifKind::Cif, regex_match)
    }
}

impl Validator for SpanishOtherPersonalNifChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        is_valid_nif_checksum(NifKind::OtherPersonalNif, regex_match)
    }
}

#[cfg(test)]
mod test {
    use super::{control_digit, CheckForm};
    use crate::secondary_validation::*;

    #[test]
    fn test_control_digit() {
        assert_eq!(control_digit("5881850"), 1);
        assert_eq!(control_digit("7565938"), 3);
        assert_eq!(control_digit("0605378"), 9);
        assert_eq!(control_digit("9514336"), 8);
        assert_eq!(control_digit("1234567"), 4);
        assert_eq!(control_digit("0000000"), 0);
    }

    #[test]
    fn test_check_form_dispatch() {
        for letter in ['P', 'Q', 'S', 'W'] {
            assert_eq!(CheckForm::for_type(letter, "1234567"), CheckForm::Letter);
        }
        for letter in ['A', 'B', 'E', 'H'] {
            assert_eq!(CheckForm::for_type(letter, "1234567"), CheckForm::Number);
            // A body starting with two zeros always uses a letter
            assert_eq!(CheckForm::for_type(letter, "0012345"), CheckForm::Letter);
        }
        for letter in ['C', 'D', 'F', 'G', 'J', 'K', 'L', 'M', 'N', 'R', 'U', 'V'] {
            assert_eq!(CheckForm::for_type(letter, "1234567"), CheckForm::Either);
        }
    }

    #[test]
    fn test_check_form_accepts() {
        assert!(CheckForm::Letter.accepts(0, 'J'));
        assert!(!CheckForm::Letter.accepts(0, '0'));
        assert!(CheckForm::Number.accepts(0, '0'));
        assert!(!CheckForm::Number.accepts(0, 'J'));
        assert!(CheckForm::Either.accepts(4, 'D'));
        assert!(CheckForm::Either.accepts(4, '4'));
        assert!(!CheckForm::Either.accepts(4, 'E'));
        assert!(!CheckForm::Either.accepts(4, '5'));
    }

    #[test]
    fn test_valid_cif() {
        let valid_ids = vec![
            "A58818501",
            "B65410011",
            "V7565938C",
            "V75659383",
            "F0605378I",
            "Q2238877A",
            "D40022956",
            "P1234567D",
            "A12345674",
        ];
        for id in valid_ids {
            assert!(SpanishCifChecksum.is_valid_match(id));
        }
    }

    #[test]
    fn test_invalid_cif() {
        let invalid_ids = vec![
            // Wrong check
            "A5881850B",
            "B6541001A",
            "V75659382",
            "F0605378J",
            "Q22388772",
            "D4002295C",
            // Letter check types refuse the numeric form
            "P12345674",
            // Number check types refuse the letter form
            "A1234567D",
            // Type letters outside the entity alphabet
            "K9514336H",
            "X5102754C",
            "I12345674",
            // DNI
            "93471790C",
        ];
        for id in invalid_ids {
            assert!(!SpanishCifChecksum.is_valid_match(id));
        }
    }

    #[test]
    fn test_valid_other_personal_nif() {
        let valid_ids = vec!["K9514336H", "K95143368", "L1234567D", "M12345674", "K0012345E"];
        for id in valid_ids {
            assert!(SpanishOtherPersonalNifChecksum.is_valid_match(id));
        }
    }

    #[test]
    fn test_invalid_other_personal_nif() {
        let invalid_ids = vec![
            "M3118299M",
            "K9514336I",
            // Bodies starting with 00 only accept the letter form
            "K00123455",
            // Entity type letters
            "A58818501",
            "V7565938C",
        ];
        for id in invalid_ids {
            assert!(!SpanishOtherPersonalNifChecksum.is_valid_match(id));
        }
    }
}
