//! Session handling for the external auth provider.
//!
//! Authentication itself happens elsewhere; the provider hands the user a
//! bearer token out of band. Trove only persists that token alongside the
//! account name and reads it back to decide which affordance to show.

mod session;

pub use session::{AuthState, Session};
