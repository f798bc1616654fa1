#![doc = include_str!("../README.md")]
mod casing;
mod compare;
mod error;
mod repr;
mod value;

pub use casing::IgnoreCaseExt;
pub use compare::{
    CaseInsensitiveStringComparator, Comparator, ComparatorStrategy, ComparisonStrategy,
    StandardComparisonStrategy,
};
pub use error::ValueError;
pub use repr::to_string_of;
pub use value::format::{ObviousFloat, ObviousFloat32};
pub use value::record::Record;
pub use value::Value;
