//! Encoder decorator that pins the original text of selected CIDs.

use std::borrow::Cow;
use std::collections::HashMap;

use cidutil_types::{Cid, CidError, detect_version, other_version};
use tracing::debug;

use crate::encoder::{CidEncoder, Encoder};

/// Wraps an encoder and preserves the exact text of registered CIDs.
///
/// Useful when echoing back CIDs a user supplied: those keep the form the
/// user typed, while every other CID follows the base policy. Registration
/// covers both CID versions of the same content where a counterpart exists.
///
/// Entries are only added, never evicted. `add` takes `&mut self`; once
/// built, the table can be shared across threads for encoding.
#[derive(Debug, Clone, Default)]
pub struct OverrideEncoder<E = Encoder> {
    base: E,
    overrides: HashMap<Cid, String>,
}

impl<E: CidEncoder> OverrideEncoder<E> {
    /// Create an empty table over `base`.
    pub fn new(base: E) -> Self {
        Self {
            base,
            overrides: HashMap::new(),
        }
    }

    /// The wrapped encoder.
    pub fn base(&self) -> &E {
        &self.base
    }

    /// Number of pinned CIDs (counting both versions separately).
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Whether no CID is pinned.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// The pinned text for `cid`, if any.
    pub fn get(&self, cid: &Cid) -> Option<&str> {
        self.overrides.get(cid).map(String::as_str)
    }

    /// Pin the given textual CIDs.
    ///
    /// Text the base encoder would already produce is not stored. Text that
    /// fails to decode is skipped.
    pub fn add<I, S>(&mut self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for text in texts {
            let text = text.as_ref();
            let cid = match Cid::try_from(text) {
                Ok(cid) => cid,
                Err(e) => {
                    debug!(cid = text, error = %e, "skipping override");
                    continue;
                }
            };
            self.pin(cid, text);
            if let Some(alt) = other_version(&cid) {
                self.pin(alt, text);
            }
        }
    }

    fn pin(&mut self, cid: Cid, text: &str) {
        if self.base.encode(&cid) != text {
            debug!(%cid, text, "pinning cid text");
            self.overrides.insert(cid, text.to_string());
        }
    }
}

impl<E: CidEncoder> CidEncoder for OverrideEncoder<E> {
    fn encode(&self, cid: &Cid) -> String {
        match self.overrides.get(cid) {
            Some(text) => text.clone(),
            None => self.base.encode(cid),
        }
    }

    fn recode<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, CidError> {
        if self.overrides.is_empty() {
            return self.base.recode(text);
        }
        detect_version(text)?;
        let cid = Cid::try_from(text)?;
        Ok(Cow::Owned(self.encode(&cid)))
    }
}
