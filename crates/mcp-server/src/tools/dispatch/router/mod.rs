// Per-tool dispatch functions used by the MCP tool router.

pub(super) mod capabilities;
pub(super) mod error;
pub(super) mod lookup;
pub(super) mod route;
pub(super) mod sequence;
pub(super) mod steps;
