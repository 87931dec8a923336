//! Progress reporting while a validation batch is in flight

pub mod reporter;
