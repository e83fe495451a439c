//! Per-frame rendering.
//!
//! Responsibilities:
//! - capture and restore host GL state around the frame (`state`)
//! - set up the overlay pipeline and projection (`projection`)
//! - stream each draw list and walk its commands (`renderer`)
//! - dispatch embedded user callbacks (`callback`)

mod binding;
mod callback;
mod projection;
mod renderer;
mod state;

pub use callback::{CallbackContext, CallbackHandler, IgnoreCallbacks};
pub use projection::ortho_projection;
pub use renderer::Renderer;
pub use state::GlStateSnapshot;
