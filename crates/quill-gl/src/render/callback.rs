use super::binding::ListBinding;
use crate::draw::{CallbackId, DrawCmd, DrawIdx, DrawList};
use crate::gl::GlApi;

/// Runs user callbacks embedded in draw lists.
///
/// Called in command order, in place of a draw. The handler may issue its own
/// GL calls through [`CallbackContext::gl`]; if those disturb the vertex or
/// element buffer bindings it must call
/// [`CallbackContext::reset_render_state`] before returning.
pub trait CallbackHandler<G: GlApi> {
    fn on_callback<I: DrawIdx>(
        &mut self,
        ctx: &mut CallbackContext<'_, G>,
        id: CallbackId,
        list: &DrawList<I>,
        cmd: &DrawCmd,
    );
}

/// What a callback may touch while the frame is in flight.
pub struct CallbackContext<'a, G: GlApi> {
    gl: &'a mut G,
    binding: &'a ListBinding<'a, G>,
    framebuffer_size: (i32, i32),
}

impl<'a, G: GlApi> CallbackContext<'a, G> {
    pub(crate) fn new(
        gl: &'a mut G,
        binding: &'a ListBinding<'a, G>,
        framebuffer_size: (i32, i32),
    ) -> Self {
        Self {
            gl,
            binding,
            framebuffer_size,
        }
    }

    #[inline]
    pub fn gl(&mut self) -> &mut G {
        self.gl
    }

    #[inline]
    pub fn framebuffer_size(&self) -> (i32, i32) {
        self.framebuffer_size
    }

    /// Reselects texture unit 0, re-enables the vertex attribute arrays,
    /// re-points them at the current list's vertices and rebinds and
    /// re-uploads its index buffer.
    pub fn reset_render_state(&mut self) {
        self.binding.reset(self.gl);
    }
}

/// Handler that skips every callback.
#[derive(Debug, Default, Copy, Clone)]
pub struct IgnoreCallbacks;

impl<G: GlApi> CallbackHandler<G> for IgnoreCallbacks {
    fn on_callback<I: DrawIdx>(
        &mut self,
        _ctx: &mut CallbackContext<'_, G>,
        id: CallbackId,
        _list: &DrawList<I>,
        _cmd: &DrawCmd,
    ) {
        log::debug!("no callback handler; skipping {id:?}");
    }
}
