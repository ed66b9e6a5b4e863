//! Request-scoped encoder context.

use std::fmt;
use std::sync::Arc;

use crate::encoder::{CidEncoder, Encoder};

/// Carries an encoding policy down a call chain.
///
/// Contexts are immutable. [`with_encoder`](Self::with_encoder) returns a
/// derived context and leaves the original untouched, so handing a child
/// context to one call never affects readers of the parent. A context with
/// no encoder resolves to [`Encoder::DEFAULT`].
#[derive(Clone, Default)]
pub struct EncoderContext {
    encoder: Option<Arc<dyn CidEncoder>>,
}

impl EncoderContext {
    /// An empty context that resolves to the default encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a context carrying `encoder`.
    pub fn with_encoder(&self, encoder: impl CidEncoder + 'static) -> Self {
        self.with_shared_encoder(Arc::new(encoder))
    }

    /// Derive a context carrying an already shared encoder.
    pub fn with_shared_encoder(&self, encoder: Arc<dyn CidEncoder>) -> Self {
        Self {
            encoder: Some(encoder),
        }
    }

    /// The attached encoder, or [`Encoder::DEFAULT`] if none is attached.
    pub fn encoder(&self) -> &dyn CidEncoder {
        match &self.encoder {
            Some(enc) => &**enc,
            None => &Encoder::DEFAULT,
        }
    }

    /// Whether an encoder has been attached.
    pub fn has_encoder(&self) -> bool {
        self.encoder.is_some()
    }
}

impl fmt::Debug for EncoderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncoderContext")
            .field("encoder", &self.encoder())
            .field("attached", &self.has_encoder())
            .finish()
    }
}
