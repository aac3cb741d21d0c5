use crate::secondary_validation::{
    SpanishCifChecksum, SpanishDniChecksum, SpanishNieChecksum, SpanishOtherPersonalNifChecksum,
    Validator,
};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

/// The kind of a Spanish identification number.
///
/// Each kind has its own fixed shape. The shapes never overlap on their first
/// character, so a candidate can be valid for at most one kind.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum NifKind {
    /// National identity document number, 8 digits and a check letter.
    Dni,
    /// Foreigner identity number, X/Y/Z, 7 digits and a check letter.
    Nie,
    /// K/L/M personal tax number.
    OtherPersonalNif,
    /// Legal entity tax number.
    Cif,
}

impl NifKind {
    pub fn is_personal(&self) -> bool {
        !self.is_entity()
    }

    pub fn is_entity(&self) -> bool {
        matches!(self, NifKind::Cif)
    }

    /// The checksum validator for this kind
    pub fn validator(&self) -> &'static dyn Validator {
        match self {
            NifKind::Dni => &SpanishDniChecksum,
            NifKind::Nie => &SpanishNieChecksum,
            NifKind::OtherPersonalNif => &SpanishOtherPersonalNifChecksum,
            NifKind::Cif => &SpanishCifChecksum,
        }
    }
}
