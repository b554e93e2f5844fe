//! Query cache
//!
//! Results of backend reads are kept per [`QueryKey`] and shared by every
//! view observing the same key. Writes go through [`use_mutation`] with
//! [`MutationHooks`]; optimistic edits use a [`Transaction`].

pub mod cache;
pub mod client;
pub mod mutation;
pub mod transaction;

pub use cache::{FetchTrigger, QueryCache, QueryKey, QueryState, StaleTime};
pub use client::{
    use_mutation, use_query, use_query_client, Mutation, QueryClient, QueryHandle, QueryOptions,
};
pub use mutation::{run_mutation, MutationHooks};
pub use transaction::Transaction;
