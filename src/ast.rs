//! # factql - Abstract Syntax Tree
//!
//! This module defines the tokens and tree nodes of the factql predicate
//! language, a compact syntax for testing flat fact records against boolean
//! conditions.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[operators]** - Junctions, comparators and the keyword-to-operator mapping
//! - **[node]** - Tree nodes built by the parser and walked by the evaluator
//!
//! ## Quick Start
//!
//! ```text
//! status == open && priority >= 2
//! ```
//!
//! ## Precedence
//!
//! From loosest to tightest:
//!
//! - `where` - quantified filter
//! - `&&`, `||` - junctions, right-associative, equal precedence
//! - `==`, `!=`, `>=`, `<=`, `>`, `<` - one comparison per level
//! - `in` - list membership
//! - literals, `[...]` lists and `(...)` groups
//!
//! ## Examples
//!
//! ### Grouping
//!
//! ```text
//! (a == 1 || b == 2) && c == 3
//! ```
//!
//! ### Membership
//!
//! ```text
//! region in [eu-west-1 us-east-1]
//! ```
//!
//! ### Quantified Filter
//!
//! ```text
//! amount > 100 where currency == EUR
//! ```
//!
//! Against a sequence of facts this holds when at least one fact has
//! `currency == EUR` and `amount > 100` at the same time.
pub mod node;
pub mod operators;
pub mod tokens;

pub use node::{ListItem, Literal, Node};
pub use operators::{BinaryOp, Comparator, Junction};
pub use tokens::{Category, Keyword, Token};
