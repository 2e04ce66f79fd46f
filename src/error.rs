use thiserror::Error;

use crate::Person;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PedigreeError {
    #[error("person {child} already has parents {first} and {second}; refusing {rejected} as a third")]
    ThirdParent {
        child: Person,
        first: Person,
        second: Person,
        rejected: Person,
    },

    #[error("malformed pair '{0}': expected PARENT,CHILD")]
    MalformedPair(String),

    #[error("invalid person id '{0}'")]
    InvalidId(String),
}

pub type Result<T> = std::result::Result<T, PedigreeError>;
