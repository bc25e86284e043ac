/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Statement and expression sum types, and the Program root
/// - expressions: Definitions for the expression forms
/// - statements: Definitions for the statement forms
/// - types: Type references used by declarations
///
/// Every node renders back to canonical source through `Display`.
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
