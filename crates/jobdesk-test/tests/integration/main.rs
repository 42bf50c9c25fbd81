//! Integration tests for the authentication and authorization core.

mod helpers;

mod auth_flow;
mod ownership;
