//! Request guards applied by controllers before executing an operation, and limits
//! applied to every request at the router boundary.

pub mod auth;
pub mod limit;

#[cfg(test)]
mod test;
