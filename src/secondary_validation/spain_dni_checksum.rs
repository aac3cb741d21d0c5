use crate::kind::NifKind;
use crate::secondary_validation::{digits_value, mod_23_letter, Validator};
use crate::shape::match_shape;

pub struct SpanishDniChecksum;

impl Validator for SpanishDniChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        /*
         * Spanish DNI format:
         * 8 digits followed by a letter
         * The letter is calculated by taking the number modulo 23 and using it as an index
         * into the check letter table. No DNI is ever issued with the number 0.
         */
        let Some(dni) = match_shape(NifKind::Dni, regex_match) else {
            return false;
        };

        let number = digits_value(dni.body);
        if number == 0 {
            return false;
        }

        mod_23_letter(number) == dni.check
    }
}
