// Project bullets: the user's evidence bank consumed by the mapping proposer.

pub mod handlers;
