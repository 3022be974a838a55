use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Aggregator families.
///
/// The string form is the family name exposed by [`Container::name`], which
/// a serialization layer can use to tag a container's type.
///
/// [`Container::name`]: crate::core::Container::name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum ContainerKind {
    Count,
    Sum,
    Bin,
}
