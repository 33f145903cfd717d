//! Export envelope and the export entry points.
//!
//! A share string always wraps its payload in an [`Envelope`], which has a
//! slot for every top-level shape that ever existed. Exports fill exactly one
//! of the current slots; the legacy slots are only populated while an old
//! import is being migrated.

use crate::clean::{clean_bar, clean_shortcut};
use crate::codec::{self, ExportMode};
use crate::config::SharePolicy;
use crate::error::{CodecError, ShareError, ShareResult};
use crate::model::{Bar, ConditionSet, LegacyBar, LegacyShortcut, Shortcut};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Format version written into new envelopes. Informational only; imports
/// detect the generation from the shapes present.
pub const FORMAT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Versioned wrapper around one exported object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Envelope {
    #[serde(rename = "b1")]
    pub legacy_bar: Option<LegacyBar>,
    #[serde(rename = "b2")]
    pub bar: Option<Bar>,
    #[serde(rename = "s1")]
    pub legacy_shortcut: Option<LegacyShortcut>,
    #[serde(rename = "s2")]
    pub shortcut: Option<Shortcut>,
    #[serde(rename = "cs")]
    pub condition_set: Option<ConditionSet>,
    #[serde(rename = "v")]
    pub version: String,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            legacy_bar: None,
            bar: None,
            legacy_shortcut: None,
            shortcut: None,
            condition_set: None,
            version: FORMAT_VERSION.to_string(),
        }
    }
}

impl Envelope {
    pub fn with_bar(bar: Bar) -> Self {
        Self {
            bar: Some(bar),
            ..Default::default()
        }
    }

    pub fn with_shortcut(shortcut: Shortcut) -> Self {
        Self {
            shortcut: Some(shortcut),
            ..Default::default()
        }
    }

    pub fn with_condition_set(condition_set: ConditionSet) -> Self {
        Self {
            condition_set: Some(condition_set),
            ..Default::default()
        }
    }

    /// Whether a first-generation shape still needs upgrading.
    pub fn has_legacy(&self) -> bool {
        self.legacy_bar.is_some() || self.legacy_shortcut.is_some()
    }

    /// Whether the envelope carries nothing importable.
    pub fn is_empty(&self) -> bool {
        !self.has_legacy()
            && self.bar.is_none()
            && self.shortcut.is_none()
            && self.condition_set.is_none()
    }
}

/// Serialize an envelope to tagged JSON.
pub fn serialize_envelope(envelope: &Envelope, mode: ExportMode) -> Result<String, CodecError> {
    codec::to_json(envelope, mode)
}

/// Parse tagged JSON (either tag style) into an envelope.
pub fn deserialize_envelope(json: &str) -> Result<Envelope, CodecError> {
    codec::from_json(json)
}

/// Serialize and compress an envelope into a share string.
pub fn export_envelope(envelope: &Envelope, mode: ExportMode) -> Result<String, CodecError> {
    let json = serialize_envelope(envelope, mode)?;
    let text = codec::compress(&json)?;
    debug!(
        ?mode,
        json_len = json.len(),
        text_len = text.len(),
        "Exported envelope"
    );
    Ok(text)
}

/// Decompress and parse a share string, without any migration or gating.
pub fn import_envelope(text: &str) -> Result<Envelope, CodecError> {
    deserialize_envelope(&codec::decompress(text)?)
}

/// Export a bar. Compact exports clean a deep copy first; `bar` itself is
/// never modified.
pub fn export_bar(bar: &Bar, mode: ExportMode) -> ShareResult<String> {
    let bar = match mode {
        ExportMode::Compact => {
            let mut copy = codec::deep_clone(bar)?;
            clean_bar(&mut copy);
            copy
        }
        ExportMode::Full => bar.clone(),
    };
    Ok(export_envelope(&Envelope::with_bar(bar), mode)?)
}

/// Export a shortcut (and its subtree). See [`export_bar`].
pub fn export_shortcut(shortcut: &Shortcut, mode: ExportMode) -> ShareResult<String> {
    let shortcut = match mode {
        ExportMode::Compact => {
            let mut copy = codec::deep_clone(shortcut)?;
            clean_shortcut(&mut copy);
            copy
        }
        ExportMode::Full => shortcut.clone(),
    };
    Ok(export_envelope(&Envelope::with_shortcut(shortcut), mode)?)
}

/// Export a condition set. Sets with player-identifying conditions are
/// refused unless the policy allows sensitive exports.
pub fn export_condition_set(
    condition_set: &ConditionSet,
    mode: ExportMode,
    policy: &SharePolicy,
) -> ShareResult<String> {
    if condition_set.is_sensitive() && !policy.allow_export_sensitive_condition_sets {
        return Err(ShareError::SensitiveConditionSet);
    }
    Ok(export_envelope(
        &Envelope::with_condition_set(condition_set.clone()),
        mode,
    )?)
}
