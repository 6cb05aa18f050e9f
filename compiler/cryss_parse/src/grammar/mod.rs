//! Grammar productions, one module per syntactic category.
//!
//! - `expr.rs`: precedence climbing, factors and postfix forms
//! - `list.rs`: bracketed, comma-separated lists
//! - `stmt.rs`: statements and blocks
//! - `item.rs`: definitions
//! - `ty.rs`: type annotations

mod expr;
mod item;
mod list;
mod stmt;
mod ty;
