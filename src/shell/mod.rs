// Composition root.
//
// - Declare the active feature modules and GraphQL options (assembly).
// - Build the application: schema, validation policy, CORS, global prefix (factory).
// - Hold the process-wide application and bridge hosting platforms to it
//   (app_cell, platform).

pub mod app_cell;
pub mod assembly;
pub mod factory;
pub mod graphql;
pub mod http;
pub mod platform;
