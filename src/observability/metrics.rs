use crate::config::{NifScope, SCOPE_LABEL};
use crate::observability::labels::{Labels, NO_LABEL};
use crate::secondary_validation::Validator;
use metrics::{counter, Counter};

#[derive(Debug)]
pub struct ValidatorMetrics {
    pub valid: Counter,
    pub invalid: Counter,
}

impl ValidatorMetrics {
    pub fn new(scope: NifScope, labels: &Labels) -> Self {
        let scope_name: &'static str = scope.into();
        let labels = labels.clone_with_labels(&[(SCOPE_LABEL, scope_name)]);

        ValidatorMetrics {
            valid: counter!("nif_validation.valid", labels.clone()),
            invalid: counter!("nif_validation.invalid", labels),
        }
    }

    fn record(&self, is_valid: bool) {
        if is_valid {
            self.valid.increment(1);
        } else {
            self.invalid.increment(1);
        }
    }
}

impl Default for ValidatorMetrics {
    fn default() -> Self {
        ValidatorMetrics::new(NifScope::default(), &NO_LABEL)
    }
}

/// Validator for a [NifScope] that counts its results.
///
/// Counters are registered with the recorder installed when the validator is created.
#[derive(Debug)]
pub struct MeteredNifValidator {
    scope: NifScope,
    metrics: ValidatorMetrics,
}

impl MeteredNifValidator {
    pub fn new(scope: NifScope, labels: &Labels) -> Self {
        Self {
            scope,
            metrics: ValidatorMetrics::new(scope, labels),
        }
    }

    pub fn scope(&self) -> NifScope {
        self.scope
    }
}

impl Validator for MeteredNifValidator {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        let is_valid = self.scope.is_valid_match(regex_match);
        self.metrics.record(is_valid);
        is_valid
    }
}
