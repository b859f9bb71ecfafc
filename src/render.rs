use std::fmt;

use crossterm::style::Stylize;

use crate::ast::{BinaryOperator, Expr};

/// Spaces added per level by [`render_prefix`].
const PREFIX_INDENT: usize = 2;
/// Spaces added per level by [`render_tree`].
const TREE_INDENT: usize = 4;

/// Displays a tree in indented prefix form. See [`render_prefix`].
#[derive(Debug, Clone, Copy)]
pub struct PrefixLayout<'a>(pub &'a Expr);

impl fmt::Display for PrefixLayout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![(self.0, 0)];
        while let Some((node, level)) = pending.pop() {
            let pad = level * PREFIX_INDENT;
            match node {
                Expr::Number { value } => writeln!(f, "{:pad$}{value}", "")?,
                Expr::BinaryOp { op, left, right } => {
                    writeln!(f, "{:pad$}{op}", "")?;
                    pending.push((&**right, level + 1));
                    pending.push((&**left, level + 1));
                },
            }
        }
        Ok(())
    }
}

/// Displays a tree sideways, optionally coloured. See [`render_tree`].
#[derive(Debug, Clone, Copy)]
pub struct TreeLayout<'a> {
    /// The tree to draw.
    pub expr:  &'a Expr,
    /// Whether to emit ANSI colour codes.
    pub color: bool,
}

impl fmt::Display for TreeLayout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Step<'a> {
            Visit(&'a Expr, usize),
            Label(&'a Expr, usize),
        }

        let mut pending = vec![Step::Visit(self.expr, 0)];
        while let Some(step) = pending.pop() {
            match step {
                Step::Label(node, indent) => self.write_label(f, node, indent)?,
                Step::Visit(node @ Expr::Number { .. }, indent) => {
                    self.write_label(f, node, indent)?;
                },
                Step::Visit(node @ Expr::BinaryOp { left, right, .. }, indent) => {
                    pending.push(Step::Visit(&**left, indent + TREE_INDENT));
                    pending.push(Step::Label(node, indent));
                    pending.push(Step::Visit(&**right, indent + TREE_INDENT));
                },
            }
        }
        Ok(())
    }
}

impl TreeLayout<'_> {
    fn write_label(&self, f: &mut fmt::Formatter<'_>, node: &Expr, indent: usize) -> fmt::Result {
        match (node, self.color) {
            (Expr::Number { value }, true) => {
                writeln!(f, "{:indent$}{}", "", value.to_string().green().bold())
            },
            (Expr::Number { value }, false) => writeln!(f, "{:indent$}{value}", ""),
            (Expr::BinaryOp { op, .. }, true) => {
                writeln!(f, "{:indent$}{}", "", paint_operator(*op))
            },
            (Expr::BinaryOp { op, .. }, false) => writeln!(f, "{:indent$}{op}", ""),
        }
    }
}

fn paint_operator(op: BinaryOperator) -> crossterm::style::StyledContent<char> {
    let symbol = op.symbol();
    if op.is_additive() {
        symbol.blue().bold()
    } else {
        symbol.red().bold()
    }
}

/// Renders the tree in indented prefix form.
///
/// Each node gets its own line, indented two spaces per level. An operator
/// node prints its symbol, then its left and right subtrees.
///
/// # Example
/// ```
/// use calctree::{interpreter::parser::core::parse, render::render_prefix};
///
/// let tree = parse("1 + 2 * 3").unwrap();
/// assert_eq!(render_prefix(&tree), "+\n  1\n  *\n    2\n    3\n");
/// ```
#[must_use]
pub fn render_prefix(expr: &Expr) -> String {
    PrefixLayout(expr).to_string()
}

/// Renders the tree sideways, with the root in the left-most column.
///
/// The right subtree is drawn above its parent and the left subtree below,
/// each shifted four columns further right. Reading the output with the head
/// tilted left shows the usual top-down tree.
///
/// With `color` set, numbers are bold green, `+` and `-` bold blue, and `*`
/// and `/` bold red.
///
/// # Example
/// ```
/// use calctree::{interpreter::parser::core::parse, render::render_tree};
///
/// let tree = parse("1 - 2").unwrap();
/// assert_eq!(render_tree(&tree, false), "    2\n-\n    1\n");
/// ```
#[must_use]
pub fn render_tree(expr: &Expr, color: bool) -> String {
    TreeLayout { expr, color }.to_string()
}
