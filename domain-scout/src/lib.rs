// Research pipeline module
pub mod pipeline;

// Registrar availability client
pub mod registrar;

// Per-run session state
pub mod session;

// Name-suggestion collaborator boundary
pub mod suggest;
