// Domain layer - Form rules and wire types

pub mod errors;
pub mod model;
pub mod rules;
