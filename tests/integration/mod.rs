//! Integration tests for the sandboxed note store

mod cli_contracts;
mod listing_contracts;
mod note_round_trip;
mod root_persistence;
mod support;
