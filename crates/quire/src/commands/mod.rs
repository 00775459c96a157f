//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod css;
pub(crate) mod highlight;

pub(crate) use check::CheckArgs;
pub(crate) use css::CssArgs;
pub(crate) use highlight::HighlightArgs;
