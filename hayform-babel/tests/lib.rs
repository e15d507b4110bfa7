// This file is required to make `cargo test` discover tests in subdirectories.

#[cfg(test)]
mod common;

#[cfg(test)]
mod properties;

#[cfg(test)]
mod session;

#[cfg(test)]
mod yaml;
