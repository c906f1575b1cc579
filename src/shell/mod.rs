// Composition root for the events service.
//
// - state: the shared handles injected into every handler.
// - http: the route table.
// The binary in main.rs reads config, installs logging and serves the router.

pub mod http;
pub mod state;
