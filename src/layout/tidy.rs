//! Tidy-tree layout for outline trees.
//!
//! Columns are fixed per depth; vertical placement stacks leaves on a
//! monotonic cursor and centres each parent between its first and last
//! child, so no two leaves can overlap and parents sit over their
//! subtree regardless of asymmetry. All coordinates are content-space
//! units, scaled to screen cells by the viewport at draw time.

use std::collections::HashMap;

use crate::outline::model::OutlineNode;

const COLUMN_WIDTH: f32 = 300.0;
const COLUMN_GAP: f32 = 80.0;
const ROW_GAP: f32 = 18.0;
const LINE_HEIGHT: f32 = 16.0;
const VERTICAL_PADDING: f32 = 14.0;
const ROOT_BASE_WIDTH: f32 = 320.0;
const BASE_WIDTH: f32 = 300.0;
const MAX_WIDTH: f32 = 620.0;
/// Label length beyond which the box starts growing, at 6 units a character.
const FREE_CHARS: usize = 18;

/// Position and size of one laid-out node, with its wrapped label.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeBox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub depth: usize,
    pub lines: Vec<String>,
}

impl NodeBox {
    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }
}

/// Minimal axis-aligned box covering every placed node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
    pub width: f32,
    pub height: f32,
}

/// The complete layout of one tree.
///
/// `nodes` and `edges` are in depth-first source order; `boxes` is keyed
/// by node id. Output ordering never depends on map iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// `(id, depth)` for every node, parents before children.
    pub nodes: Vec<(usize, usize)>,
    /// `(parent id, child id)` for every edge.
    pub edges: Vec<(usize, usize)>,
    pub boxes: HashMap<usize, NodeBox>,
    pub bounds: Bounds,
}

/// Lay out `tree`. Deterministic for a fixed tree.
pub fn compute(tree: &OutlineNode) -> Layout {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    flatten(tree, 0, &mut nodes, &mut edges);

    let mut boxes = HashMap::new();
    let mut cursor = 0.0_f32;
    place(tree, 0, &mut cursor, &mut boxes);

    let bounds = bounds_of(&boxes);
    Layout {
        nodes,
        edges,
        boxes,
        bounds,
    }
}

fn flatten(
    node: &OutlineNode,
    depth: usize,
    nodes: &mut Vec<(usize, usize)>,
    edges: &mut Vec<(usize, usize)>,
) {
    nodes.push((node.id, depth));
    for child in &node.children {
        edges.push((node.id, child.id));
        flatten(child, depth + 1, nodes, edges);
    }
}

/// Depth-first, post-order placement. Returns the vertical centre of the
/// placed subtree root; `cursor` is the next free leaf offset.
fn place(
    node: &OutlineNode,
    depth: usize,
    cursor: &mut f32,
    boxes: &mut HashMap<usize, NodeBox>,
) -> f32 {
    let (w, h, lines) = size_for(&node.label, depth);
    let x = depth as f32 * (COLUMN_WIDTH + COLUMN_GAP);

    if node.is_leaf() {
        let y = *cursor;
        *cursor += h + ROW_GAP;
        boxes.insert(
            node.id,
            NodeBox {
                x,
                y,
                w,
                h,
                depth,
                lines,
            },
        );
        return y + h / 2.0;
    }

    let centers: Vec<f32> = node
        .children
        .iter()
        .map(|child| place(child, depth + 1, cursor, boxes))
        .collect();
    let center = (centers[0] + centers[centers.len() - 1]) / 2.0;
    boxes.insert(
        node.id,
        NodeBox {
            x,
            y: center - h / 2.0,
            w,
            h,
            depth,
            lines,
        },
    );
    center
}

/// Box size and wrapped lines for a label at a given depth.
fn size_for(label: &str, depth: usize) -> (f32, f32, Vec<String>) {
    let base = if depth == 0 { ROOT_BASE_WIDTH } else { BASE_WIDTH };
    let chars = label.chars().count();
    let grown = base + chars.saturating_sub(FREE_CHARS) as f32 * 6.0;
    let w = grown.clamp(base, MAX_WIDTH);
    // ~7 units per character at the label font size.
    let max_chars = (((w - 32.0) / 7.0) as usize).max(16);
    let lines = wrap_label(label, max_chars);
    let h = VERTICAL_PADDING * 2.0 + lines.len() as f32 * LINE_HEIGHT;
    (w, h, lines)
}

/// Greedy word wrap. Words longer than `max_chars` are hard-split into
/// chunks of at most `max_chars` characters, each its own line.
pub fn wrap_label(label: &str, max_chars: usize) -> Vec<String> {
    let words: Vec<&str> = label.split_whitespace().collect();
    if words.is_empty() {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in words {
        let word_len = word.chars().count();
        let joined = if current.is_empty() {
            word_len
        } else {
            current.chars().count() + 1 + word_len
        };
        if joined <= max_chars {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if word_len > max_chars {
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(max_chars) {
                lines.push(chunk.iter().collect());
            }
        } else {
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn bounds_of(boxes: &HashMap<usize, NodeBox>) -> Bounds {
    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;
    for b in boxes.values() {
        min_x = min_x.min(b.x);
        min_y = min_y.min(b.y);
        max_x = max_x.max(b.x + b.w);
        max_y = max_y.max(b.y + b.h);
    }
    Bounds {
        min_x,
        min_y,
        max_x,
        max_y,
        width: (max_x - min_x).max(1.0),
        height: (max_y - min_y).max(1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::outline;

    fn tree(text: &str) -> OutlineNode {
        outline::parse(text).expect("test outline must parse")
    }

    fn leaf_boxes<'a>(layout: &'a Layout, root: &OutlineNode) -> Vec<&'a NodeBox> {
        let mut out = Vec::new();
        fn walk<'a>(node: &OutlineNode, layout: &'a Layout, out: &mut Vec<&'a NodeBox>) {
            if node.is_leaf() {
                out.push(&layout.boxes[&node.id]);
            }
            for child in &node.children {
                walk(child, layout, out);
            }
        }
        walk(root, layout, &mut out);
        out
    }

    #[test]
    fn leaves_never_overlap_vertically() {
        let root = tree("# R\n## A\n- a\n- b\n- c\n## B\n- d\n### C\n- e\n- f");
        let layout = compute(&root);
        let leaves = leaf_boxes(&layout, &root);
        for (i, a) in leaves.iter().enumerate() {
            for b in leaves.iter().skip(i + 1) {
                let disjoint = a.y + a.h <= b.y || b.y + b.h <= a.y;
                assert!(disjoint, "leaf boxes overlap: {a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn parent_center_is_midpoint_of_first_and_last_child() {
        let root = tree("# R\n## A\n- one\n- two\n- three\n## B\n- four");
        let layout = compute(&root);
        fn check(node: &OutlineNode, layout: &Layout) {
            if !node.is_leaf() {
                let first = layout.boxes[&node.children[0].id].center_y();
                let last = layout.boxes[&node.children[node.children.len() - 1].id].center_y();
                let own = layout.boxes[&node.id].center_y();
                assert!(
                    (own - (first + last) / 2.0).abs() < 1e-3,
                    "parent {} not centred", node.label
                );
            }
            for child in &node.children {
                check(child, layout);
            }
        }
        check(&root, &layout);
    }

    #[test]
    fn x_is_fixed_per_depth() {
        let root = tree("# R\n## A\n- a\n## B");
        let layout = compute(&root);
        for &(id, depth) in &layout.nodes {
            let expected = depth as f32 * (COLUMN_WIDTH + COLUMN_GAP);
            assert_eq!(layout.boxes[&id].x, expected);
        }
    }

    #[test]
    fn single_node_bounds_are_its_own_box() {
        let root = tree("# Only");
        let layout = compute(&root);
        let b = &layout.boxes[&root.id];
        assert_eq!(layout.bounds.min_x, b.x);
        assert_eq!(layout.bounds.min_y, b.y);
        assert_eq!(layout.bounds.width, b.w);
        assert_eq!(layout.bounds.height, b.h);
    }

    #[test]
    fn layout_is_deterministic() {
        let root = tree("# R\n## A\n- a\n- b\n## B\n- c");
        assert_eq!(compute(&root), compute(&root));
    }

    #[test]
    fn nodes_and_edges_follow_source_order() {
        let root = tree("# R\n## A\n- a\n## B");
        let layout = compute(&root);
        let depths: Vec<usize> = layout.nodes.iter().map(|&(_, d)| d).collect();
        assert_eq!(depths, vec![0, 1, 2, 1]);
        assert_eq!(layout.edges.len(), 3);
        assert_eq!(layout.edges[0].0, root.id);
    }

    #[test]
    fn long_labels_grow_width_up_to_the_cap() {
        let short = size_for("short", 1);
        let long = size_for(&"x".repeat(40), 1);
        let huge = size_for(&"x ".repeat(200), 1);
        assert_eq!(short.0, BASE_WIDTH);
        assert!(long.0 > BASE_WIDTH);
        assert_eq!(huge.0, MAX_WIDTH);
    }

    #[test]
    fn height_tracks_wrapped_line_count() {
        let (_, h, lines) = size_for(
            "a fairly long label that will certainly wrap across lines",
            1,
        );
        assert!(lines.len() > 1);
        assert_eq!(
            h,
            VERTICAL_PADDING * 2.0 + lines.len() as f32 * LINE_HEIGHT
        );
    }

    #[test]
    fn wrap_respects_the_width() {
        let lines = wrap_label("one two three four five six seven eight", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.concat().replace(' ', ""), "onetwothreefourfivesixseveneight");
    }

    #[test]
    fn wrap_hard_splits_oversized_words() {
        let lines = wrap_label("tiny incomprehensibilities end", 8);
        assert!(lines.iter().all(|l| l.chars().count() <= 8));
        assert!(lines.contains(&"tiny".to_string()));
        assert!(lines.contains(&"end".to_string()));
    }

    #[test]
    fn wrap_of_empty_label_is_one_empty_line() {
        assert_eq!(wrap_label("", 16), vec![String::new()]);
        assert_eq!(wrap_label("   ", 16), vec![String::new()]);
    }

    #[test]
    fn root_box_is_wider_than_equivalent_child() {
        let (root_w, _, _) = size_for("same label", 0);
        let (child_w, _, _) = size_for("same label", 1);
        assert!(root_w > child_w);
    }
}
