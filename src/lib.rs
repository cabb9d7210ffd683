//! A WebAssembly text format writer library.
//!
//! wattext serialises in-memory WebAssembly ASTs to the s-expression text
//! format: plain modules (WAT) and full spec-test scripts (`.wast`) with
//! their assertion extensions. Given an AST built by a parser or by hand, it
//! produces indented, parser-compatible text.
//!
//! # Modules
//!
//! - [`wat`] -- Module-level AST and writer. Types, instructions, module
//!   items, and the separator machine that governs all whitespace.
//! - [`wast`] -- Script-level AST and writer. Commands, actions, and the
//!   assertion family used by the specification test suite.
//!
//! # Example
//!
//! Build a one-function module, wrap it in a script, and write it:
//!
//! ```
//! use wattext::wat::{
//!     Function, FunctionDesc, Instruction, ModuleItem, Opcode, WriteContext,
//! };
//! use wattext::wast::{self, Command, ScriptModule, ScriptModuleBody};
//!
//! let func = Function {
//!     desc: FunctionDesc::default(),
//!     locals: vec![],
//!     instructions: vec![Instruction::plain(Opcode::Nop)],
//!     import: None,
//!     exports: vec![],
//! };
//! let script = vec![Command::Module(ScriptModule {
//!     name: None,
//!     body: ScriptModuleBody::Text(vec![ModuleItem::Function(func)]),
//! })];
//!
//! let mut out = String::new();
//! wast::write_script(&mut WriteContext::new(), &script, &mut out);
//! assert_eq!(out, "(module\n  (func\n    nop))");
//! ```
//!
//! # Output contract
//!
//! The writer is total over well-formed ASTs: it never fails, never mutates
//! its input, and appends strictly left to right. Output is accepted by any
//! conforming text parser that understands the script extensions
//! (`binary`/`quote` modules, `register`, `invoke`, `get`, and the
//! `assert_*` family).

pub mod wast;
pub mod wat;
