//! Authorization primitives for the console
//!
//! Role and permission data arrives from the external identity provider per
//! authenticated request; everything in this module takes it as an explicit
//! argument and holds no session state.

pub mod rbac;
