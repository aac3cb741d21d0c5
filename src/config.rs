use crate::error::ConfigError;
use crate::kind::NifKind;
use crate::observability::labels::Labels;
use crate::observability::metrics::MeteredNifValidator;
use crate::secondary_validation::Validator;
use crate::validation::{
    is_valid, is_valid_cif, is_valid_dni, is_valid_entity, is_valid_nie,
    is_valid_other_personal_nif, is_valid_personal,
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use std::collections::BTreeMap;
use strum::{EnumIter, IntoStaticStr};

/// Label added to every metric, reserved for the scope name
pub const SCOPE_LABEL: &str = "scope";

/// Which kinds of NIF a validator accepts.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, IntoStaticStr,
)]
#[serde(tag = "type")]
#[strum(serialize_all = "snake_case")]
pub enum NifScope {
    #[default]
    Any,
    Personal,
    Entity,
    Dni,
    Nie,
    OtherPersonalNif,
    Cif,
}

impl NifScope {
    /// Whether a valid number of the given kind is accepted by this scope
    pub fn covers(&self, kind: NifKind) -> bool {
        match self {
            NifScope::Any => true,
            NifScope::Personal => kind.is_personal(),
            NifScope::Entity => kind.is_entity(),
            NifScope::Dni => kind == NifKind::Dni,
            NifScope::Nie => kind == NifKind::Nie,
            NifScope::OtherPersonalNif => kind == NifKind::OtherPersonalNif,
            NifScope::Cif => kind == NifKind::Cif,
        }
    }
}

impl From<NifKind> for NifScope {
    fn from(kind: NifKind) -> Self {
        match kind {
            NifKind::Dni => NifScope::Dni,
            NifKind::Nie => NifScope::Nie,
            NifKind::OtherPersonalNif => NifScope::OtherPersonalNif,
            NifKind::Cif => NifScope::Cif,
        }
    }
}

impl Validator for NifScope {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        match self {
            NifScope::Any => is_valid(regex_match),
            NifScope::Personal => is_valid_personal(regex_match),
            NifScope::Entity => is_valid_entity(regex_match),
            NifScope::Dni => is_valid_dni(regex_match),
            NifScope::Nie => is_valid_nie(regex_match),
            NifScope::OtherPersonalNif => is_valid_other_personal_nif(regex_match),
            NifScope::Cif => is_valid_cif(regex_match),
        }
    }
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NifValidatorConfig {
    #[serde(default)]
    pub scope: NifScope,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl NifValidatorConfig {
    pub fn new(scope: NifScope) -> Self {
        Self {
            scope,
            labels: BTreeMap::new(),
        }
    }

    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn scope(&self, scope: NifScope) -> Self {
        self.mutate_clone(|x| x.scope = scope)
    }

    pub fn label(&self, key: &str, value: &str) -> Self {
        self.mutate_clone(|x| {
            x.labels.insert(key.to_owned(), value.to_owned());
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for key in self.labels.keys() {
            if key.is_empty() {
                return Err(ConfigError::EmptyLabelKey);
            }
            if key == SCOPE_LABEL {
                return Err(ConfigError::ReservedLabelKey(key.clone()));
            }
        }
        Ok(())
    }

    pub fn build(&self) -> Result<MeteredNifValidator, ConfigError> {
        self.validate()?;
        Ok(MeteredNifValidator::new(self.scope, &Labels::from(&self.labels)))
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
