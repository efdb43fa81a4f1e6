//! Viewer context - the user every read is scoped to

use std::fmt;

use crate::error::DomainError;
use crate::value_objects::Id;

/// The requesting user. Construction fails when no user is present, so the
/// engine can never be asked to evaluate visibility for nobody.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewer(Id);

impl Viewer {
    /// Scope a read to `id`
    pub fn new(id: Id) -> Result<Self, DomainError> {
        if id.is_zero() {
            return Err(DomainError::PolicyViolation(
                "visibility evaluated without a viewer".to_string(),
            ));
        }
        Ok(Self(id))
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.0
    }
}

impl fmt::Display for Viewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
