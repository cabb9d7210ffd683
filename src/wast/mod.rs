//! WebAssembly script (.wast) support.
//!
//! This module models the command sequence of a `.wast` file, the script
//! format used by the official WebAssembly specification test suite, and
//! provides the writer that serialises it: module definitions (inline text,
//! `binary`, or `quote`), registrations, actions, and the full assertion
//! family, including typed expected results with NaN patterns.
//!
//! # Example
//!
//! ```
//! use wattext::wast::{
//!     self, Action, Assertion, Command, Const, InvokeAction, ReturnAssertion, ReturnResult,
//! };
//! use wattext::wat::{Text, WriteContext};
//!
//! let script = vec![Command::Assertion(Assertion::Return(ReturnAssertion {
//!     action: Action::Invoke(InvokeAction {
//!         module: None,
//!         name: Text::quoted("add"),
//!         consts: vec![Const::I32(2), Const::I32(3)],
//!     }),
//!     results: vec![ReturnResult::I32(5)],
//! }))];
//!
//! let mut out = String::new();
//! wast::write_script(&mut WriteContext::new(), &script, &mut out);
//! assert_eq!(
//!     out,
//!     "(assert_return (invoke \"add\" (i32.const 2) (i32.const 3)) (i32.const 5))"
//! );
//! ```

pub mod command;
pub mod writer;

pub use command::*;
pub use writer::{write_command, write_script};
