/*!
 * Resolver Module
 */

mod engine;
mod trace;

pub use engine::{Precedence, ResolutionEngine};
pub use trace::{Resolution, ResolutionPath, ResolutionStep};
