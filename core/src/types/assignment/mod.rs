//! On-disk representation of a slot assignment.
//!
//! Records are stored as a version byte followed by a postcard payload so the
//! layout can evolve without a migration step.

use redb::TypeName;
pub use v1 as latest_assignment;

pub mod v1;

pub trait AssignmentVariant {
    const VERSION: u8;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionedAssignment {
    V1(v1::Assignment),
}

impl VersionedAssignment {
    pub fn latest(app: Option<crate::types::AppId>) -> Self {
        VersionedAssignment::V1(v1::Assignment { app })
    }

    pub fn into_latest(self) -> latest_assignment::Assignment {
        match self {
            VersionedAssignment::V1(v1) => v1,
        }
    }
}

impl redb::Value for VersionedAssignment {
    type SelfType<'a> = VersionedAssignment;
    type AsBytes<'a> = Vec<u8>;

    fn fixed_width() -> Option<usize> {
        None
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        let (version, data) = data.split_first().expect("empty assignment record");
        match *version {
            v1::Assignment::VERSION => {
                let v1 = postcard::from_bytes::<v1::Assignment>(data)
                    .expect("invalid assignment record");
                VersionedAssignment::V1(v1)
            }
            version => panic!("unsupported assignment version: {}", version),
        }
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        match value {
            VersionedAssignment::V1(v1) => {
                postcard::to_extend(v1, vec![v1::Assignment::VERSION]).unwrap()
            }
        }
    }

    fn type_name() -> TypeName {
        TypeName::new("tvset::Assignment")
    }
}
