mod spain_cif_checksum;
mod spain_dni_checksum;
mod spain_nie_checksum;

pub use crate::secondary_validation::spain_cif_checksum::{
    CheckForm, SpanishCifChecksum, SpanishOtherPersonalNifChecksum,
};
pub use crate::secondary_validation::spain_dni_checksum::SpanishDniChecksum;
pub use crate::secondary_validation::spain_nie_checksum::SpanishNieChecksum;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

/// Check letters for DNI and NIE, indexed by the number modulo 23
const DNI_NIE_LETTER_TABLE: [char; 23] = [
    'T', 'R', 'W', 'A', 'G', 'M', 'Y', 'F', 'P', 'D', 'X', 'B', 'N', 'J', 'Z', 'S', 'Q', 'V', 'H',
    'L', 'C', 'K', 'E',
];

fn mod_23_letter(number: u32) -> char {
    DNI_NIE_LETTER_TABLE[(number % 23) as usize]
}

/// Decimal value of a string made only of ASCII digits
fn digits_value(digits: &str) -> u32 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0, |value, digit| value * 10 + digit)
}

/// Sum all the digits from a number
#[inline]
fn sum_all_digits(digits: u32) -> u32 {
    let mut sum = 0;
    let mut num = digits;
    while num > 0 {
        sum += num % 10;
        num /= 10;
    }
    sum
}
