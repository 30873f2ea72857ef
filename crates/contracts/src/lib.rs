//! Wire contracts shared between the Gestión front end and its REST backend.

pub mod domain;
pub mod shared;
pub mod system;
