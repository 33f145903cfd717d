//! Import pipeline.
//!
//! A share string goes through one pass:
//!
//! 1. decompress and decode the envelope, retrying legacy shapes on failure
//! 2. patch and upgrade legacy objects
//! 3. apply the policy gates
//!
//! [`try_import`] never fails; problems end up as [`Diagnostic`]s next to an
//! empty result.

pub mod gates;
pub mod legacy;

pub use gates::{GateReport, apply_gates};
pub use legacy::{LEGACY_VERSION, apply_legacy_patches, decode_legacy};

use crate::codec::{self, from_tagged_value};
use crate::config::SharePolicy;
use crate::error::{CodecError, ErrorKind, ShareError, ShareResult};
use crate::export::Envelope;
use crate::model::{Bar, ConditionSet, Shortcut};
use serde::Serialize;
use std::fmt;
use tracing::{debug, error, info};

/// Objects recovered from a share string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportResult {
    pub bar: Option<Bar>,
    pub shortcut: Option<Shortcut>,
    pub condition_set: Option<ConditionSet>,
}

impl ImportResult {
    pub fn is_empty(&self) -> bool {
        self.bar.is_none() && self.shortcut.is_none() && self.condition_set.is_none()
    }
}

impl From<Envelope> for ImportResult {
    fn from(envelope: Envelope) -> Self {
        Self {
            bar: envelope.bar,
            shortcut: envelope.shortcut,
            condition_set: envelope.condition_set,
        }
    }
}

/// User-facing notes about one import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The string could not be imported at all.
    Failed { error: ErrorKind, message: String },
    ConditionRemoved,
    HotkeyRemoved,
    PieRemoved,
}

impl Diagnostic {
    fn failed(err: &CodecError) -> Self {
        let kind = err.kind();
        let message = match kind.user_message() {
            Some(message) => message.to_string(),
            None => err.to_string(),
        };
        Diagnostic::Failed {
            error: kind,
            message,
        }
    }

    /// Whether the import produced nothing.
    pub fn is_failure(&self) -> bool {
        matches!(self, Diagnostic::Failed { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Failed { message, .. } => f.write_str(message),
            Diagnostic::ConditionRemoved => f.write_str(
                "The bar's condition set was removed. Enable importing conditions to keep it.",
            ),
            Diagnostic::HotkeyRemoved => f.write_str(
                "Hotkeys were removed from the imported shortcuts. Enable importing hotkeys to keep them.",
            ),
            Diagnostic::PieRemoved => f.write_str(
                "The bar was set up as a pie and lost its hotkey. Enable importing hotkeys to keep it.",
            ),
        }
    }
}

/// Result plus whatever the user should be told about it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportReport {
    pub result: ImportResult,
    pub diagnostics: Vec<Diagnostic>,
}

impl ImportReport {
    pub fn failed(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_failure)
    }
}

/// Import a share string. Never fails; a bad string yields an empty result
/// and, when `want_diagnostics` is set, a [`Diagnostic::Failed`].
pub fn try_import(text: &str, policy: &SharePolicy, want_diagnostics: bool) -> ImportReport {
    let mut report = ImportReport::default();

    match migrate(text, policy) {
        Ok((envelope, gates)) => {
            if want_diagnostics {
                report.diagnostics.extend(gates.advisories());
            }
            report.result = ImportResult::from(envelope);
        }
        Err(e) if want_diagnostics => {
            error!(error = %e, kind = ?e.kind(), "Import failed");
            report.diagnostics.push(Diagnostic::failed(&e));
        }
        Err(e) => debug!(error = %e, "Import failed"),
    }

    report
}

/// Import a share string that must hold a bar.
pub fn import_bar(text: &str, policy: &SharePolicy) -> ShareResult<Bar> {
    let (envelope, _) = migrate(text, policy)?;
    envelope.bar.ok_or(ShareError::MissingObject("bar"))
}

/// Import a share string that must hold a shortcut.
pub fn import_shortcut(text: &str, policy: &SharePolicy) -> ShareResult<Shortcut> {
    let (envelope, _) = migrate(text, policy)?;
    envelope.shortcut.ok_or(ShareError::MissingObject("shortcut"))
}

/// Decode a share string into an envelope, falling back to the legacy
/// shapes. No patching, upgrading or gating.
pub fn decode(text: &str) -> Result<Envelope, CodecError> {
    let json = codec::decompress(text)?;
    let payload = codec::parse_json(&json)?;

    match from_tagged_value::<Envelope>(payload.clone()) {
        Ok(envelope) => Ok(envelope),
        Err(envelope_err) => {
            debug!(error = %envelope_err, "Not an envelope, trying legacy shapes");
            decode_legacy(&payload).ok_or(envelope_err)
        }
    }
}

fn migrate(text: &str, policy: &SharePolicy) -> Result<(Envelope, GateReport), CodecError> {
    let mut envelope = decode(text)?;
    apply_legacy_patches(&mut envelope);
    upgrade_legacy(&mut envelope);
    if envelope.is_empty() {
        return Err(CodecError::Empty);
    }
    let gates = apply_gates(&mut envelope, policy);
    Ok((envelope, gates))
}

fn upgrade_legacy(envelope: &mut Envelope) {
    if let Some(legacy) = envelope.legacy_bar.take() {
        info!(version = %envelope.version, "Upgrading legacy bar");
        envelope.bar = Some(legacy.upgrade());
    }
    if let Some(legacy) = envelope.legacy_shortcut.take() {
        info!(version = %envelope.version, "Upgrading legacy shortcut");
        envelope.shortcut = Some(legacy.upgrade());
    }
}
