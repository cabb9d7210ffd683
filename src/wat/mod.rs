//! WebAssembly Text Format (WAT) support.
//!
//! This module holds the text-level module AST and the writer that serialises
//! it. The AST keeps everything the text format can say that the binary
//! format cannot: symbolic names, inline imports and exports, element and
//! data sugar on tables and memories, and type uses alongside inline
//! signatures.
//!
//! # Example
//!
//! ```
//! use wattext::wat::{
//!     self, BoundFunctionType, BoundValueType, Function, FunctionDesc, Immediate, InlineExport,
//!     Instruction, ModuleItem, Opcode, Text, ValueType, Var, WriteContext,
//! };
//!
//! let add = Function {
//!     desc: FunctionDesc {
//!         name: Some("add".to_string()),
//!         type_use: None,
//!         ty: BoundFunctionType {
//!             params: vec![
//!                 BoundValueType::anonymous(ValueType::I32),
//!                 BoundValueType::anonymous(ValueType::I32),
//!             ],
//!             results: vec![ValueType::I32],
//!         },
//!     },
//!     locals: vec![],
//!     instructions: vec![
//!         Instruction::new(Opcode::LocalGet, Immediate::Var(Var::Index(0))),
//!         Instruction::new(Opcode::LocalGet, Immediate::Var(Var::Index(1))),
//!         Instruction::plain(Opcode::I32Add),
//!     ],
//!     import: None,
//!     exports: vec![InlineExport { name: Text::quoted("add") }],
//! };
//!
//! let mut out = String::new();
//! wat::write_module(&mut WriteContext::new(), &vec![ModuleItem::Function(add)], &mut out);
//! assert_eq!(
//!     out,
//!     "(func $add (export \"add\") (param i32 i32) (result i32)\n  local.get 0\n  local.get 1\n  i32.add)"
//! );
//! ```

pub mod ast;
pub mod numeric;
pub mod opcode;
pub mod writer;

pub use ast::*;
pub use numeric::{Base, WatLiteral};
pub use opcode::Opcode;
pub use writer::{write_instruction, write_module, WriteContext};
