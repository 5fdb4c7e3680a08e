// Application layer: the ways a caller drives a registry.

pub mod demo;
pub mod shell;
