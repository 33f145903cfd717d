//! Default-value pruning ("cleaning") before compact exports.
//!
//! Many fields only matter for some discriminant values, e.g. category
//! settings on a plain action. Cleaning resets those to their declared
//! defaults so compact exports can omit them and a later hand-edit of the
//! discriminant does not bring stale values back. Cleaning mutates in place;
//! exporters run it on a deep clone only.

use crate::model::{Bar, BarVisibility, Shortcut, ShortcutKind, ShortcutMode};
use crate::walk::{walk_all_mut, walk_mut};

/// Clean one shortcut and, for categories, its whole subtree.
pub fn clean_shortcut(sh: &mut Shortcut) {
    let defaults = Shortcut::default();
    walk_mut(sh, &mut |node: &mut Shortcut| clean_node(node, &defaults));
}

/// Clean a bar and every shortcut on it.
pub fn clean_bar(bar: &mut Bar) {
    let defaults = Bar::default();

    if !bar.is_docked() {
        bar.alignment = defaults.alignment;
        bar.reveal_area_scale = defaults.reveal_area_scale;
        bar.hint = defaults.hint;
    } else {
        bar.reveal_area_scale = defaults.reveal_area_scale;
        if bar.visibility == BarVisibility::Always {
            bar.hint = defaults.hint;
        }
    }

    let shortcut_defaults = Shortcut::default();
    walk_all_mut(&mut bar.shortcuts, &mut |node: &mut Shortcut| {
        clean_node(node, &shortcut_defaults)
    });
}

fn clean_node(sh: &mut Shortcut, d: &Shortcut) {
    if sh.kind != ShortcutKind::Category {
        // Clearing sub_list also keeps the walk from descending.
        sh.sub_list = d.sub_list.clone();
        sh.category_columns = d.category_columns;
        sh.category_stays_open = d.category_stays_open;
        sh.category_width = d.category_width;
        sh.category_spacing = d.category_spacing;
        sh.category_scale = d.category_scale;
        sh.category_font_scale = d.category_font_scale;
        sh.category_no_background = d.category_no_background;
        sh.category_on_hover = d.category_on_hover;
        sh.category_hover_close = d.category_hover_close;
    } else if sh.mode != ShortcutMode::Default {
        sh.command = d.command.clone();
    }

    if sh.kind == ShortcutKind::Spacer {
        sh.command = d.command.clone();
        sh.mode = d.mode;
    }

    if !sh.has_icon() {
        sh.icon_zoom = d.icon_zoom;
        sh.icon_offset = d.icon_offset;
        sh.cooldown_action = d.cooldown_action;
        sh.cooldown_style = d.cooldown_style;
    }

    sh.volatile_index = d.volatile_index;
}
