//! Outline parser: heading/bullet markdown → rooted tree.
//!
//! Only `# `–`### ` headings and flat `- ` bullets are recognised; every
//! other line is silently ignored. The parser never fails: malformed input
//! degrades to a smaller tree, empty input to no tree at all.

use crate::outline::model::OutlineNode;

/// Label for the synthetic root when the text has no leading `# ` heading.
const DEFAULT_ROOT_LABEL: &str = "Writing strategy";

/// Parse outline-style markdown into a tree.
///
/// Returns `None` when the input has no non-blank lines. Headings open a
/// scope on the ancestor stack (closing any open scope of equal or deeper
/// level first); bullets attach as leaves under the innermost open scope
/// and never open one themselves, so consecutive bullets stay siblings.
/// A `# ` heading on the very first non-blank line names the root instead
/// of adding a child.
pub fn parse(raw: &str) -> Option<OutlineNode> {
    let lines: Vec<&str> = raw.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    if lines.is_empty() {
        return None;
    }

    // Stack of open scopes. Index 0 is the synthetic root and never pops.
    let mut stack = vec![OutlineNode::new(0, DEFAULT_ROOT_LABEL, 0)];
    let mut next_id = 1usize;

    for (idx, line) in lines.iter().enumerate() {
        let (level, label, is_bullet) = if let Some(rest) = line.strip_prefix("# ") {
            if idx == 0 {
                // A leading H1 names the root rather than adding a node.
                if let Some(root) = stack.first_mut() {
                    root.label = rest.trim().to_string();
                }
                continue;
            }
            (1, rest, false)
        } else if let Some(rest) = line.strip_prefix("## ") {
            (2, rest, false)
        } else if let Some(rest) = line.strip_prefix("### ") {
            (3, rest, false)
        } else if let Some(rest) = line.strip_prefix("- ") {
            let open_level = stack.last().map(|n| n.level).unwrap_or(0);
            (open_level + 1, rest, true)
        } else {
            continue;
        };

        while stack.len() > 1 && stack.last().is_some_and(|top| top.level >= level) {
            close_top(&mut stack);
        }

        let node = OutlineNode::new(next_id, label.trim(), level);
        next_id += 1;

        if is_bullet {
            if let Some(parent) = stack.last_mut() {
                parent.children.push(node);
            }
        } else {
            stack.push(node);
        }
    }

    while stack.len() > 1 {
        close_top(&mut stack);
    }
    stack.pop()
}

/// Pop the top open scope and attach it to the scope below.
fn close_top(stack: &mut Vec<OutlineNode>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(done) = stack.pop()
        && let Some(parent) = stack.last_mut()
    {
        parent.children.push(done);
    }
}
