use std::{fmt, num::NonZeroU64};

use serde::{Deserialize, Serialize};

/// Declares a record identifier backed by `NonZeroU64`.
///
/// Ids are handed out in creation order starting at 1. The zero value is the
/// "absent" sentinel and can neither be constructed nor deserialized, so an
/// unset reference is always spelled `Option<Id>::None`.
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(NonZeroU64);

        impl $name {
            /// Returns `None` for the reserved zero sentinel.
            pub fn new(raw: u64) -> Option<Self> {
                NonZeroU64::new(raw).map(Self)
            }

            pub fn get(self) -> u64 {
                self.0.get()
            }

            /// Id of the record stored at `index` of its table.
            pub(crate) fn from_index(index: usize) -> Self {
                Self(NonZeroU64::MIN.saturating_add(index as u64))
            }

            /// Table slot of this record.
            pub(crate) fn index(self) -> usize {
                usize::try_from(self.0.get() - 1).unwrap_or(usize::MAX)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(EmployeeId);
record_id!(CompanyId);
record_id!(ExperienceId);
record_id!(SkillId);
record_id!(CertificationId);
record_id!(EndorsementId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_never_a_valid_id() {
        assert!(EmployeeId::new(0).is_none());
        assert!(serde_json::from_str::<CompanyId>("0").is_err());
    }

    #[test]
    fn ids_map_onto_table_slots_starting_at_one() {
        let first = SkillId::from_index(0);
        assert_eq!(first.get(), 1);
        assert_eq!(first.index(), 0);
        assert_eq!(SkillId::new(7).map(SkillId::index), Some(6));
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let id = ExperienceId::new(42).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        assert_eq!(serde_json::from_str::<ExperienceId>("42").unwrap(), id);
        assert_eq!(id.to_string(), "42");
    }
}
