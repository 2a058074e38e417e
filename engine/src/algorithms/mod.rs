pub mod collision;

pub use collision::{events_in_group_span, group_span, resolve_group_move};
