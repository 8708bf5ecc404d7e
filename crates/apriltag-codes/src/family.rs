//! The fixed registry of reference AprilTag families.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the eight reference AprilTag families.
///
/// The set is closed: these are the families shipped as `<name>.c` reference
/// documents, and the conversion pipeline knows no others.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Family {
    Tag16h5,
    Tag25h9,
    Tag36h11,
    TagCircle21h7,
    TagCircle49h12,
    TagCustom48h12,
    TagStandard41h12,
    TagStandard52h13,
}

impl Family {
    /// All families, in the canonical processing order.
    pub const ALL: [Family; 8] = [
        Family::Tag16h5,
        Family::Tag25h9,
        Family::Tag36h11,
        Family::TagCircle21h7,
        Family::TagCircle49h12,
        Family::TagCustom48h12,
        Family::TagStandard41h12,
        Family::TagStandard52h13,
    ];

    /// Canonical family name as it appears in file names (e.g. `tag36h11`).
    pub fn name(self) -> &'static str {
        match self {
            Family::Tag16h5 => "tag16h5",
            Family::Tag25h9 => "tag25h9",
            Family::Tag36h11 => "tag36h11",
            Family::TagCircle21h7 => "tagCircle21h7",
            Family::TagCircle49h12 => "tagCircle49h12",
            Family::TagCustom48h12 => "tagCustom48h12",
            Family::TagStandard41h12 => "tagStandard41h12",
            Family::TagStandard52h13 => "tagStandard52h13",
        }
    }

    /// File name of the reference C document for this family.
    pub fn source_file_name(self) -> String {
        format!("{}.c", self.name())
    }

    /// File name of the binary artifact for this family.
    pub fn artifact_file_name(self) -> String {
        format!("{}.bin", self.name())
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Family> for &'static str {
    fn from(family: Family) -> Self {
        family.name()
    }
}

/// Error for an unrecognized family name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown family '{0}'")]
pub struct UnknownFamily(pub String);

impl FromStr for Family {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Family::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| UnknownFamily(s.to_string()))
    }
}

impl TryFrom<String> for Family {
    type Error = UnknownFamily;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for family in Family::ALL {
            assert_eq!(family.name().parse::<Family>(), Ok(family));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "tag99h99".parse::<Family>().unwrap_err();
        assert_eq!(err, UnknownFamily("tag99h99".to_string()));
    }

    #[test]
    fn file_names_use_the_canonical_name() {
        assert_eq!(Family::Tag36h11.source_file_name(), "tag36h11.c");
        assert_eq!(Family::TagCircle21h7.artifact_file_name(), "tagCircle21h7.bin");
    }

    #[test]
    fn processing_order_starts_with_the_classic_families() {
        assert_eq!(Family::ALL[0], Family::Tag16h5);
        assert_eq!(Family::ALL[2], Family::Tag36h11);
        assert_eq!(Family::ALL.len(), 8);
    }
}
