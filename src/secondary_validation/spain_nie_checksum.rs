use crate::kind::NifKind;
use crate::secondary_validation::{digits_value, mod_23_letter, Validator};
use crate::shape::{match_shape, NIE_TYPES};

pub struct SpanishNieChecksum;

const NIE_BODY_MAGNITUDE: u32 = 10_000_000;

impl Validator for SpanishNieChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        /*
         * Spanish NIE format:
         * X, Y or Z followed by 7 digits and a letter
         * The type letter is replaced by its position in "XYZ" to build an 8 digit number,
         * which is then checked exactly like a DNI.
         */
        let Some(nie) = match_shape(NifKind::Nie, regex_match) else {
            return false;
        };

        let Some(nie_type) = nie
            .type_letter
            .and_then(|letter| NIE_TYPES.chars().position(|c| c == letter))
        else {
            return false;
        };

        let number = nie_type as u32 * NIE_BODY_MAGNITUDE + digits_value(nie.body);
        mod_23_letter(number) == nie.check
    }
}
