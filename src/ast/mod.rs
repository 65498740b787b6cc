/// AST (Abstract Syntax Tree) module
/// Contains the expression tree produced by the parser
///
/// Submodules:
/// - ast: The `Expr` sum type, the `SyntaxTree` aggregate and the tree printer
/// - expressions: One struct per expression form
pub mod ast;
pub mod expressions;
