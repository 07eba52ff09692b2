// Adapters layer: concrete implementations for the GraphQL API and the output stream.

pub mod checks;
pub mod graphql;
pub mod output;
