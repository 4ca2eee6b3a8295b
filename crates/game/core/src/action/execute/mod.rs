//! Action execution.
//!
//! [`execute`] validates a caster, target list and costs against a roster,
//! then applies every effect of the action in order. Validation happens
//! entirely before the first mutation: a rejected action leaves the roster
//! exactly as it was.

mod context;
mod pipeline;
mod validation;

pub use context::EffectContext;
pub use pipeline::execute;
