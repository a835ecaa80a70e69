//! Public transformer models.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the computation and domain logic lives. The `core` module is an
//! implementation detail; its public types are re-exported by the model module.
//!
//! Where a model has a natural input/output shape it is also exposed as a
//! [`twine_core::Model`], a thin adapter that delegates to the core API.

pub mod transformer;
