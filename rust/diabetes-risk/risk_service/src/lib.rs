/*!
Risk Service

Scores survey records for early diabetes risk with a pre-fit scaler and classifier.
*/

#![warn(
    unreachable_pub,
    redundant_lifetimes,
    unsafe_code,
    non_local_definitions,
    clippy::needless_pass_by_value,
    clippy::needless_pass_by_ref_mut
)]

pub mod api;
pub mod config;
