use crate::kind::NifKind;
use lazy_static::lazy_static;
use regex::Regex;

pub const NIE_TYPES: &str = "XYZ";
pub const OTHER_PERSONAL_NIF_TYPES: &str = "KLM";
pub const CIF_TYPES: &str = "ABCDEFGHJNPQRSUVW";

lazy_static! {
    static ref DNI_SHAPE: Regex = Regex::new(r"^(?P<body>[0-9]{8})(?P<check>[A-Z])$").unwrap();
    static ref NIE_SHAPE: Regex =
        Regex::new(&format!(r"^(?P<type>[{NIE_TYPES}])(?P<body>[0-9]{{7}})(?P<check>[A-Z])$"))
            .unwrap();
    static ref OTHER_PERSONAL_NIF_SHAPE: Regex = Regex::new(&format!(
        r"^(?P<type>[{OTHER_PERSONAL_NIF_TYPES}])(?P<body>[0-9]{{7}})(?P<check>[0-9A-Z])$"
    ))
    .unwrap();
    static ref CIF_SHAPE: Regex = Regex::new(&format!(
        r"^(?P<type>[{CIF_TYPES}])(?P<body>[0-9]{{7}})(?P<check>[0-9A-Z])$"
    ))
    .unwrap();
}

/// The parts of a candidate that matched the shape of a [NifKind].
#[derive(Debug, PartialEq, Eq)]
pub struct ShapeMatch<'a> {
    /// Leading type letter. Always `None` for a DNI.
    pub type_letter: Option<char>,
    /// The digits between the type letter and the check symbol.
    pub body: &'a str,
    pub check: char,
}

fn shape_of(kind: NifKind) -> &'static Regex {
    match kind {
        NifKind::Dni => &DNI_SHAPE,
        NifKind::Nie => &NIE_SHAPE,
        NifKind::OtherPersonalNif => &OTHER_PERSONAL_NIF_SHAPE,
        NifKind::Cif => &CIF_SHAPE,
    }
}

/// Matches the whole candidate against the shape of `kind`.
/// Input is not trimmed or uppercased.
pub fn match_shape(kind: NifKind, candidate: &str) -> Option<ShapeMatch<'_>> {
    let captures = shape_of(kind).captures(candidate)?;

    Some(ShapeMatch {
        type_letter: captures
            .name("type")
            .and_then(|letter| letter.as_str().chars().next()),
        body: captures.name("body")?.as_str(),
        check: captures.name("check")?.as_str().chars().next()?,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn splits_dni() {
        assert_eq!(
            match_shape(NifKind::Dni, "93471790C"),
            Some(ShapeMatch {
                type_letter: None,
                body: "93471790",
                check: 'C',
            })
        );
    }

    #[test]
    fn splits_typed_shapes() {
        assert_eq!(
            match_shape(NifKind::Nie, "Y4174455S"),
            Some(ShapeMatch {
                type_letter: Some('Y'),
                body: "4174455",
                check: 'S',
            })
        );
        assert_eq!(
            match_shape(NifKind::Cif, "V75659383"),
            Some(ShapeMatch {
                type_letter: Some('V'),
                body: "7565938",
                check: '3',
            })
        );
    }

    #[test]
    fn rejects_untrimmed_or_lowercase_input() {
        let inputs = vec![
            " 93471790C",
            "93471790C ",
            "93471790C\n",
            "93471790c",
            "x5102754C",
            "a58818501",
            "93471790-C",
        ];
        for input in inputs {
            assert!(match_shape(NifKind::Dni, input).is_none());
            assert!(match_shape(NifKind::Nie, input).is_none());
            assert!(match_shape(NifKind::Cif, input).is_none());
        }
    }

    #[test]
    fn type_alphabets_do_not_overlap() {
        for kind_letter in OTHER_PERSONAL_NIF_TYPES.chars() {
            assert!(!CIF_TYPES.contains(kind_letter));
            assert!(!NIE_TYPES.contains(kind_letter));
        }
        for kind_letter in NIE_TYPES.chars() {
            assert!(!CIF_TYPES.contains(kind_letter));
        }
    }

    #[test]
    fn numeric_check_only_for_nif_shapes() {
        assert!(match_shape(NifKind::Dni, "123456789").is_none());
        assert!(match_shape(NifKind::Nie, "X12345678").is_none());
        assert!(match_shape(NifKind::OtherPersonalNif, "K12345678").is_some());
        assert!(match_shape(NifKind::Cif, "A12345678").is_some());
    }
}
