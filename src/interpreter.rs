/// The evaluator module reduces trees to integers.
///
/// The evaluator walks the tree bottom-up, applies checked integer arithmetic
/// at every operator node and reports division by zero and overflow.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// Tokens are produced one at a time on demand; the parser only ever sees a
/// single token of lookahead.
///
/// # Responsibilities
/// - Skips whitespace and classifies numbers, operators and parentheses.
/// - Reports characters that do not begin any token, with their position.
pub mod lexer;
/// The parser module builds the abstract syntax tree from tokens.
///
/// Precedence and associativity are encoded by the nesting of the grammar
/// rules:
///
/// ```text
///     expr   := term (("+" | "-") term)*
///     term   := factor (("*" | "/") factor)*
///     factor := ("+" | "-") factor | NUMBER | "(" expr ")"
/// ```
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Expr`] nodes.
/// - Fails on the first grammar violation; no partial tree is returned.
pub mod parser;
