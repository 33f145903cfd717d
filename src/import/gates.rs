//! Policy gates applied to imported objects.
//!
//! A share string comes from someone else's machine. Condition set indices
//! and hotkeys only make sense in the exporter's environment, so they are
//! stripped unless the importer opted in. The report records what was
//! removed so the caller can tell the user.

use super::Diagnostic;
use crate::config::SharePolicy;
use crate::export::Envelope;
use crate::model::{Bar, Shortcut};
use crate::walk::{walk_all_mut, walk_mut};
use serde::Serialize;
use tracing::warn;

/// What the gates removed from one import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GateReport {
    /// The bar referenced a condition set.
    pub condition_removed: bool,
    /// At least one hotkey (bar or shortcut) was cleared.
    pub hotkey_removed: bool,
    /// The bar itself had a hotkey, i.e. it was set up as a pie.
    pub pie_removed: bool,
}

impl GateReport {
    pub fn any(&self) -> bool {
        self.condition_removed || self.hotkey_removed || self.pie_removed
    }

    /// One advisory per raised flag.
    pub fn advisories(&self) -> Vec<Diagnostic> {
        let mut advisories = Vec::new();
        if self.condition_removed {
            advisories.push(Diagnostic::ConditionRemoved);
        }
        if self.hotkey_removed {
            advisories.push(Diagnostic::HotkeyRemoved);
        }
        if self.pie_removed {
            advisories.push(Diagnostic::PieRemoved);
        }
        advisories
    }
}

/// Apply every gate the policy does not waive.
pub fn apply_gates(envelope: &mut Envelope, policy: &SharePolicy) -> GateReport {
    let mut report = GateReport::default();

    if !policy.allow_import_conditions
        && let Some(bar) = envelope.bar.as_mut()
    {
        report.condition_removed = strip_condition_set(bar);
    }

    if !policy.allow_import_hotkeys {
        if let Some(bar) = envelope.bar.as_mut() {
            let (pie, any) = strip_bar_hotkeys(bar);
            report.pie_removed = pie;
            report.hotkey_removed |= any;
        }
        if let Some(shortcut) = envelope.shortcut.as_mut() {
            report.hotkey_removed |= strip_hotkeys(shortcut);
        }
    }

    if report.any() {
        warn!(?report, "Removed sensitive settings from import");
    }
    report
}

/// Reset the bar's condition set. Returns whether one was set.
pub fn strip_condition_set(bar: &mut Bar) -> bool {
    let default = Bar::default().condition_set;
    if bar.condition_set == default {
        return false;
    }
    bar.condition_set = default;
    true
}

/// Strip the bar hotkey and every shortcut hotkey on the bar.
///
/// Returns `(bar_had_hotkey, any_hotkey_removed)`.
pub fn strip_bar_hotkeys(bar: &mut Bar) -> (bool, bool) {
    let default = Bar::default().hotkey;
    let bar_had_hotkey = bar.hotkey != default;
    bar.hotkey = default;

    let mut removed = false;
    walk_all_mut(&mut bar.shortcuts, &mut |sh: &mut Shortcut| {
        removed |= strip_node(sh)
    });

    (bar_had_hotkey, bar_had_hotkey || removed)
}

/// Strip hotkeys from a shortcut tree. Returns whether any was set.
pub fn strip_hotkeys(shortcut: &mut Shortcut) -> bool {
    let mut removed = false;
    walk_mut(shortcut, &mut |sh: &mut Shortcut| removed |= strip_node(sh));
    removed
}

fn strip_node(sh: &mut Shortcut) -> bool {
    let d = Shortcut::default();
    let had_hotkey = sh.hotkey != d.hotkey;
    sh.hotkey = d.hotkey;
    sh.key_passthrough = d.key_passthrough;
    had_hotkey
}
