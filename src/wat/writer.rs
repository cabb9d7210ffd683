//! WAT writer: module AST -> text.
//!
//! The writer is a single downward pass over the AST. All whitespace is
//! produced by a *pending separator*: emitting primitives never write
//! whitespace themselves, they record what should separate them from the
//! next token. The next emission flushes the pending separator and replaces
//! it. This lets any emitter decline to produce output (an absent optional, an
//! empty list) without leaving stray spaces behind, and lets `)` suppress the
//! space that would otherwise precede it.
//!
//! # Separator rules
//!
//! - A token (keyword, identifier, number, string): flush, write, then leave
//!   a pending space.
//! - `(`: flush, write, leave nothing pending (the head keyword glues on).
//! - `)`: *discard* the pending separator, write, leave a pending space.
//! - `newline()` replaces the pending separator with the current indent, so
//!   consecutive calls collapse into one line break.
//!
//! # Example
//!
//! ```
//! use wattext::wat::{self, Function, FunctionDesc, Instruction, ModuleItem, Opcode, WriteContext};
//!
//! let module = vec![ModuleItem::Function(Function {
//!     desc: FunctionDesc::default(),
//!     locals: vec![],
//!     instructions: vec![Instruction::plain(Opcode::Nop)],
//!     import: None,
//!     exports: vec![],
//! })];
//!
//! let mut out = String::new();
//! wat::write_module(&mut WriteContext::new(), &module, &mut out);
//! assert_eq!(out, "(func\n  nop)");
//! ```

use super::ast::{
    BlockImmediate, BoundFunctionType, BoundValueType, BrOnExnImmediate, BrTableImmediate,
    CallIndirectImmediate, ConstantExpression, CopyImmediate, DataSegment, ElementExpression,
    ElementList, ElementSegment, Event, EventDesc, EventType, Export, ExternalKind, Function,
    FunctionDesc, FunctionTypeUse, Global, GlobalDesc, GlobalType, Immediate, Import, ImportDesc,
    InitImmediate, InlineExport, InlineImport, Instruction, Limits, MemArgImmediate, Memory,
    MemoryDesc, MemoryType, Module, ModuleItem, Mutability, SegmentType, Start, Table, TableDesc,
    TableType, Text, TypeEntry, ValueType, Var, V128,
};
use super::numeric::{Base, WatLiteral};
use super::opcode::Opcode;

// ===========================================================================
// Write context
// ===========================================================================

/// Per-invocation writer state: the pending separator, the current indent,
/// and the numeric base.
///
/// Create one per top-level write call; it is never shared.
#[derive(Debug, Clone)]
pub struct WriteContext {
    separator: String,
    indent: String,
    pub base: Base,
}

impl WriteContext {
    pub fn new() -> Self {
        Self::with_base(Base::Decimal)
    }

    pub fn with_base(base: Base) -> Self {
        WriteContext {
            separator: String::new(),
            indent: "\n".to_string(),
            base,
        }
    }

    fn clear_separator(&mut self) {
        self.separator.clear();
    }

    fn space(&mut self) {
        self.separator.clear();
        self.separator.push(' ');
    }

    pub(crate) fn newline(&mut self) {
        self.separator = self.indent.clone();
    }

    pub(crate) fn indent(&mut self) {
        self.indent.push_str("  ");
    }

    /// Remove one indent level, saturating at the bare line break so that
    /// surplus `end`s in an instruction list cannot underflow.
    pub(crate) fn dedent(&mut self) {
        let len = self.indent.len().saturating_sub(2);
        self.indent.truncate(len.max(1));
    }
}

impl Default for WriteContext {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Token layer
// ===========================================================================

fn write_separator(ctx: &mut WriteContext, out: &mut String) {
    out.push_str(&ctx.separator);
    ctx.clear_separator();
}

/// Emit a complete token: flush the pending separator, write the token, and
/// leave a space pending.
pub(crate) fn write_token(ctx: &mut WriteContext, token: &str, out: &mut String) {
    write_separator(ctx, out);
    out.push_str(token);
    ctx.space();
}

pub(crate) fn write_lpar(ctx: &mut WriteContext, out: &mut String) {
    write_separator(ctx, out);
    out.push('(');
}

/// `(` immediately followed by its head keyword.
pub(crate) fn write_lpar_keyword(ctx: &mut WriteContext, keyword: &str, out: &mut String) {
    write_lpar(ctx, out);
    out.push_str(keyword);
    ctx.space();
}

/// `)` discards any pending separator: closing parens hug the last token.
pub(crate) fn write_rpar(ctx: &mut WriteContext, out: &mut String) {
    ctx.clear_separator();
    out.push(')');
    ctx.space();
}

pub(crate) fn write_literal<T: WatLiteral>(ctx: &mut WriteContext, value: T, out: &mut String) {
    write_token(ctx, &value.wat_literal(ctx.base), out);
}

pub(crate) fn write_var(ctx: &mut WriteContext, var: &Var, out: &mut String) {
    match var {
        Var::Index(index) => write_literal(ctx, *index, out),
        Var::Name(name) => write_token(ctx, &format!("${name}"), out),
    }
}

fn write_opt_var(ctx: &mut WriteContext, var: &Option<Var>, out: &mut String) {
    if let Some(var) = var {
        write_var(ctx, var, out);
    }
}

fn write_vars(ctx: &mut WriteContext, vars: &[Var], out: &mut String) {
    for var in vars {
        write_var(ctx, var, out);
    }
}

/// Emit an optional binding name or label as `$name`.
pub(crate) fn write_name(ctx: &mut WriteContext, name: &Option<String>, out: &mut String) {
    if let Some(name) = name {
        write_token(ctx, &format!("${name}"), out);
    }
}

pub(crate) fn write_text(ctx: &mut WriteContext, text: &Text, out: &mut String) {
    write_token(ctx, &text.0, out);
}

pub(crate) fn write_text_list(ctx: &mut WriteContext, texts: &[Text], out: &mut String) {
    for text in texts {
        write_text(ctx, text, out);
    }
}

// ===========================================================================
// Types
// ===========================================================================

fn write_value_type(ctx: &mut WriteContext, valtype: ValueType, out: &mut String) {
    write_token(ctx, valtype.keyword(), out);
}

/// `(keyword t*)`, omitted entirely when the list is empty.
fn write_value_type_group(
    ctx: &mut WriteContext,
    values: &[ValueType],
    keyword: &str,
    out: &mut String,
) {
    if values.is_empty() {
        return;
    }
    write_lpar_keyword(ctx, keyword, out);
    for valtype in values {
        write_value_type(ctx, *valtype, out);
    }
    write_rpar(ctx, out);
}

/// Emit bound value types as `(param ...)` / `(local ...)` groups.
///
/// Anonymous runs share one group; a named entry always gets a group of its
/// own, because the grammar binds a name to the single type beside it.
fn write_bound_value_types(
    ctx: &mut WriteContext,
    values: &[BoundValueType],
    keyword: &str,
    out: &mut String,
) {
    let mut first = true;
    let mut prev_has_name = false;
    for value in values {
        let has_name = value.name.is_some();
        if (has_name || prev_has_name) && !first {
            write_rpar(ctx, out);
        }
        if has_name || prev_has_name || first {
            write_lpar_keyword(ctx, keyword, out);
        }
        write_name(ctx, &value.name, out);
        write_value_type(ctx, value.valtype, out);
        prev_has_name = has_name;
        first = false;
    }
    if !values.is_empty() {
        write_rpar(ctx, out);
    }
}

fn write_bound_function_type(ctx: &mut WriteContext, ty: &BoundFunctionType, out: &mut String) {
    write_bound_value_types(ctx, &ty.params, "param", out);
    write_value_type_group(ctx, &ty.results, "result", out);
}

fn write_type_use(ctx: &mut WriteContext, type_use: &Option<Var>, out: &mut String) {
    if let Some(var) = type_use {
        write_lpar_keyword(ctx, "type", out);
        write_var(ctx, var, out);
        write_rpar(ctx, out);
    }
}

fn write_function_type_use(ctx: &mut WriteContext, ty: &FunctionTypeUse, out: &mut String) {
    write_type_use(ctx, &ty.type_use, out);
    write_bound_function_type(ctx, &ty.ty, out);
}

fn write_limits(ctx: &mut WriteContext, limits: &Limits, out: &mut String) {
    write_literal(ctx, limits.min, out);
    if let Some(max) = limits.max {
        write_literal(ctx, max, out);
    }
    if limits.shared {
        write_token(ctx, "shared", out);
    }
}

fn write_table_type(ctx: &mut WriteContext, ty: &TableType, out: &mut String) {
    write_limits(ctx, &ty.limits, out);
    write_token(ctx, ty.elemtype.keyword(), out);
}

fn write_memory_type(ctx: &mut WriteContext, ty: &MemoryType, out: &mut String) {
    write_limits(ctx, &ty.limits, out);
}

fn write_global_type(ctx: &mut WriteContext, ty: &GlobalType, out: &mut String) {
    match ty.mutability {
        Mutability::Var => {
            write_lpar_keyword(ctx, "mut", out);
            write_value_type(ctx, ty.valtype, out);
            write_rpar(ctx, out);
        }
        Mutability::Const => write_value_type(ctx, ty.valtype, out),
    }
}

fn write_event_type(ctx: &mut WriteContext, ty: &EventType, out: &mut String) {
    write_function_type_use(ctx, &ty.ty, out);
}

// ===========================================================================
// Instructions
// ===========================================================================

/// `v128` immediates default to four u32 lanes; the script layer overrides
/// the shape for typed float results.
pub(crate) fn write_v128(ctx: &mut WriteContext, value: &V128, out: &mut String) {
    write_token(ctx, "i32x4", out);
    for lane in value.to_u32x4() {
        write_literal(ctx, lane, out);
    }
}

fn write_block_immediate(ctx: &mut WriteContext, imm: &BlockImmediate, out: &mut String) {
    write_name(ctx, &imm.label, out);
    write_function_type_use(ctx, &imm.ty, out);
}

fn write_br_on_exn_immediate(ctx: &mut WriteContext, imm: &BrOnExnImmediate, out: &mut String) {
    write_var(ctx, &imm.target, out);
    write_var(ctx, &imm.event, out);
}

fn write_br_table_immediate(ctx: &mut WriteContext, imm: &BrTableImmediate, out: &mut String) {
    write_vars(ctx, &imm.targets, out);
    write_var(ctx, &imm.default_target, out);
}

fn write_call_indirect_immediate(
    ctx: &mut WriteContext,
    imm: &CallIndirectImmediate,
    out: &mut String,
) {
    write_opt_var(ctx, &imm.table, out);
    write_function_type_use(ctx, &imm.ty, out);
}

fn write_copy_immediate(ctx: &mut WriteContext, imm: &CopyImmediate, out: &mut String) {
    write_var(ctx, &imm.dst, out);
    write_var(ctx, &imm.src, out);
}

fn write_init_immediate(ctx: &mut WriteContext, imm: &InitImmediate, out: &mut String) {
    write_opt_var(ctx, &imm.dst, out);
    write_var(ctx, &imm.segment, out);
}

/// `offset=N align=M`, each key glued to its number.
fn write_mem_arg_immediate(ctx: &mut WriteContext, imm: &MemArgImmediate, out: &mut String) {
    if let Some(offset) = imm.offset {
        write_token(ctx, "offset=", out);
        ctx.clear_separator();
        write_literal(ctx, offset, out);
    }
    if let Some(align) = imm.align {
        write_token(ctx, "align=", out);
        ctx.clear_separator();
        write_literal(ctx, align, out);
    }
}

fn write_instr(ctx: &mut WriteContext, instr: &Instruction, out: &mut String) {
    write_token(ctx, instr.opcode.mnemonic(), out);

    match &instr.immediate {
        Immediate::None => {}
        Immediate::S32(value) => write_literal(ctx, *value, out),
        Immediate::S64(value) => write_literal(ctx, *value, out),
        Immediate::F32(value) => write_literal(ctx, *value, out),
        Immediate::F64(value) => write_literal(ctx, *value, out),
        Immediate::V128(value) => write_v128(ctx, value, out),
        Immediate::Var(var) => write_var(ctx, var, out),
        Immediate::Block(imm) => write_block_immediate(ctx, imm, out),
        Immediate::BrOnExn(imm) => write_br_on_exn_immediate(ctx, imm, out),
        Immediate::BrTable(imm) => write_br_table_immediate(ctx, imm, out),
        Immediate::CallIndirect(imm) => write_call_indirect_immediate(ctx, imm, out),
        Immediate::Copy(imm) => write_copy_immediate(ctx, imm, out),
        Immediate::Init(imm) => write_init_immediate(ctx, imm, out),
        Immediate::MemArg(imm) => write_mem_arg_immediate(ctx, imm, out),
        Immediate::RefType(reftype) => write_token(ctx, reftype.keyword(), out),
        Immediate::Select(types) => {
            for valtype in types {
                write_value_type(ctx, *valtype, out);
            }
        }
        Immediate::Shuffle(lanes) => {
            for lane in lanes {
                write_literal(ctx, *lane, out);
            }
        }
        Immediate::SimdLane(lane) => write_literal(ctx, *lane, out),
    }
}

fn write_instrs(ctx: &mut WriteContext, instrs: &[Instruction], out: &mut String) {
    for instr in instrs {
        write_instr(ctx, instr, out);
    }
}

/// Emit an instruction list one per line, indenting the bodies of structured
/// control instructions.
///
/// `end`, `else`, and `catch` close the level they were opened at; anything
/// carrying a block immediate (and `else`/`catch` themselves) opens a new one
/// for what follows.
fn write_instrs_with_newlines(ctx: &mut WriteContext, instrs: &[Instruction], out: &mut String) {
    for instr in instrs {
        if matches!(instr.opcode, Opcode::End | Opcode::Else | Opcode::Catch) {
            ctx.dedent();
            ctx.newline();
        }

        write_instr(ctx, instr, out);

        if matches!(instr.immediate, Immediate::Block(_))
            || matches!(instr.opcode, Opcode::Else | Opcode::Catch)
        {
            ctx.indent();
        }
        ctx.newline();
    }
}

fn write_constant_expression(ctx: &mut WriteContext, expr: &ConstantExpression, out: &mut String) {
    write_instrs(ctx, &expr.instructions, out);
}

// ===========================================================================
// Module items
// ===========================================================================

fn write_function_desc(ctx: &mut WriteContext, desc: &FunctionDesc, out: &mut String) {
    write_token(ctx, "func", out);
    write_name(ctx, &desc.name, out);
    write_type_use(ctx, &desc.type_use, out);
    write_bound_function_type(ctx, &desc.ty, out);
}

fn write_table_desc(ctx: &mut WriteContext, desc: &TableDesc, out: &mut String) {
    write_token(ctx, "table", out);
    write_name(ctx, &desc.name, out);
    write_table_type(ctx, &desc.ty, out);
}

fn write_memory_desc(ctx: &mut WriteContext, desc: &MemoryDesc, out: &mut String) {
    write_token(ctx, "memory", out);
    write_name(ctx, &desc.name, out);
    write_memory_type(ctx, &desc.ty, out);
}

fn write_global_desc(ctx: &mut WriteContext, desc: &GlobalDesc, out: &mut String) {
    write_token(ctx, "global", out);
    write_name(ctx, &desc.name, out);
    write_global_type(ctx, &desc.ty, out);
}

fn write_event_desc(ctx: &mut WriteContext, desc: &EventDesc, out: &mut String) {
    write_token(ctx, "event", out);
    write_name(ctx, &desc.name, out);
    write_event_type(ctx, &desc.ty, out);
}

fn write_import(ctx: &mut WriteContext, import: &Import, out: &mut String) {
    write_lpar_keyword(ctx, "import", out);
    write_text(ctx, &import.module, out);
    write_text(ctx, &import.name, out);
    write_lpar(ctx, out);
    match &import.desc {
        ImportDesc::Function(desc) => write_function_desc(ctx, desc, out),
        ImportDesc::Table(desc) => write_table_desc(ctx, desc, out),
        ImportDesc::Memory(desc) => write_memory_desc(ctx, desc, out),
        ImportDesc::Global(desc) => write_global_desc(ctx, desc, out),
        ImportDesc::Event(desc) => write_event_desc(ctx, desc, out),
    }
    write_rpar(ctx, out);
    write_rpar(ctx, out);
}

fn write_inline_import(ctx: &mut WriteContext, import: &InlineImport, out: &mut String) {
    write_lpar_keyword(ctx, "import", out);
    write_text(ctx, &import.module, out);
    write_text(ctx, &import.name, out);
    write_rpar(ctx, out);
}

fn write_inline_exports(ctx: &mut WriteContext, exports: &[InlineExport], out: &mut String) {
    for export in exports {
        write_lpar_keyword(ctx, "export", out);
        write_text(ctx, &export.name, out);
        write_rpar(ctx, out);
    }
}

// Inline imports/exports sit between the bind name and the type tokens; the
// descriptor writers above cannot be reused for definitions.
fn write_function(ctx: &mut WriteContext, func: &Function, out: &mut String) {
    write_lpar_keyword(ctx, "func", out);
    write_name(ctx, &func.desc.name, out);
    write_inline_exports(ctx, &func.exports, out);

    if let Some(import) = &func.import {
        write_inline_import(ctx, import, out);
    }

    write_type_use(ctx, &func.desc.type_use, out);
    write_bound_function_type(ctx, &func.desc.ty, out);

    if func.import.is_none() {
        ctx.indent();
        ctx.newline();
        write_bound_value_types(ctx, &func.locals, "local", out);
        ctx.newline();
        write_instrs_with_newlines(ctx, &func.instructions, out);
        ctx.dedent();
    }

    write_rpar(ctx, out);
    ctx.newline();
}

/// Element expressions use spaces, not newlines, and each instruction is
/// wrapped in its own parentheses.
fn write_element_expressions(
    ctx: &mut WriteContext,
    exprs: &[ElementExpression],
    out: &mut String,
) {
    for expr in exprs {
        for instr in &expr.instructions {
            write_lpar(ctx, out);
            write_instr(ctx, instr, out);
            write_rpar(ctx, out);
            ctx.space();
        }
    }
}

fn write_element_list(ctx: &mut WriteContext, elements: &ElementList, out: &mut String) {
    match elements {
        ElementList::Vars(vars) => {
            write_token(ctx, vars.kind.keyword(), out);
            write_vars(ctx, &vars.list, out);
        }
        ElementList::Expressions(exprs) => {
            write_token(ctx, exprs.elemtype.keyword(), out);
            write_element_expressions(ctx, &exprs.list, out);
        }
    }
}

fn write_table(ctx: &mut WriteContext, table: &Table, out: &mut String) {
    write_lpar_keyword(ctx, "table", out);
    write_name(ctx, &table.desc.name, out);
    write_inline_exports(ctx, &table.exports, out);

    if let Some(import) = &table.import {
        write_inline_import(ctx, import, out);
        write_table_type(ctx, &table.desc.ty, out);
    } else if let Some(elements) = &table.elements {
        // The limits are implied by the element count, so only the element
        // type is written, followed by the bare element payload.
        write_token(ctx, table.desc.ty.elemtype.keyword(), out);
        write_lpar_keyword(ctx, "elem", out);
        match elements {
            ElementList::Vars(vars) => write_vars(ctx, &vars.list, out),
            ElementList::Expressions(exprs) => write_element_expressions(ctx, &exprs.list, out),
        }
        write_rpar(ctx, out);
    } else {
        write_table_type(ctx, &table.desc.ty, out);
    }

    write_rpar(ctx, out);
}

fn write_memory(ctx: &mut WriteContext, memory: &Memory, out: &mut String) {
    write_lpar_keyword(ctx, "memory", out);
    write_name(ctx, &memory.desc.name, out);
    write_inline_exports(ctx, &memory.exports, out);

    if let Some(import) = &memory.import {
        write_inline_import(ctx, import, out);
        write_memory_type(ctx, &memory.desc.ty, out);
    } else if let Some(data) = &memory.data {
        write_lpar_keyword(ctx, "data", out);
        write_text_list(ctx, data, out);
        write_rpar(ctx, out);
    } else {
        write_memory_type(ctx, &memory.desc.ty, out);
    }

    write_rpar(ctx, out);
}

fn write_global(ctx: &mut WriteContext, global: &Global, out: &mut String) {
    write_lpar_keyword(ctx, "global", out);
    write_name(ctx, &global.desc.name, out);
    write_inline_exports(ctx, &global.exports, out);

    if let Some(import) = &global.import {
        write_inline_import(ctx, import, out);
        write_global_type(ctx, &global.desc.ty, out);
    } else {
        write_global_type(ctx, &global.desc.ty, out);
        if let Some(init) = &global.init {
            write_constant_expression(ctx, init, out);
        }
    }

    write_rpar(ctx, out);
}

fn write_event(ctx: &mut WriteContext, event: &Event, out: &mut String) {
    write_lpar_keyword(ctx, "event", out);
    write_name(ctx, &event.desc.name, out);
    write_inline_exports(ctx, &event.exports, out);

    if let Some(import) = &event.import {
        write_inline_import(ctx, import, out);
    }
    write_event_type(ctx, &event.desc.ty, out);

    write_rpar(ctx, out);
}

fn write_export(ctx: &mut WriteContext, export: &Export, out: &mut String) {
    write_lpar_keyword(ctx, "export", out);
    write_text(ctx, &export.name, out);
    write_lpar(ctx, out);
    write_token(ctx, export.kind.keyword(), out);
    write_var(ctx, &export.var, out);
    write_rpar(ctx, out);
    write_rpar(ctx, out);
}

fn write_start(ctx: &mut WriteContext, start: &Start, out: &mut String) {
    write_lpar_keyword(ctx, "start", out);
    write_var(ctx, &start.var, out);
    write_rpar(ctx, out);
}

fn write_type_entry(ctx: &mut WriteContext, entry: &TypeEntry, out: &mut String) {
    write_lpar_keyword(ctx, "type", out);
    write_lpar_keyword(ctx, "func", out);
    write_name(ctx, &entry.bind_var, out);
    write_bound_function_type(ctx, &entry.ty, out);
    write_rpar(ctx, out);
    write_rpar(ctx, out);
}

fn write_element_segment(ctx: &mut WriteContext, segment: &ElementSegment, out: &mut String) {
    write_lpar_keyword(ctx, "elem", out);
    write_name(ctx, &segment.name, out);
    match segment.ty {
        SegmentType::Active => {
            if let Some(table) = &segment.table {
                write_lpar_keyword(ctx, "table", out);
                write_var(ctx, table, out);
                write_rpar(ctx, out);
            }
            if let Some(offset) = &segment.offset {
                write_lpar_keyword(ctx, "offset", out);
                write_constant_expression(ctx, offset, out);
                write_rpar(ctx, out);
            }

            match &segment.elements {
                ElementList::Vars(vars) => {
                    // A bare function-var list stays compatible with the MVP
                    // text format, which had no external kind. The legacy
                    // form cannot carry a table use or a bind name.
                    if vars.kind != ExternalKind::Function
                        || segment.table.is_some()
                        || segment.name.is_some()
                    {
                        write_token(ctx, vars.kind.keyword(), out);
                    }
                    write_vars(ctx, &vars.list, out);
                }
                ElementList::Expressions(_) => write_element_list(ctx, &segment.elements, out),
            }
        }
        SegmentType::Passive => write_element_list(ctx, &segment.elements, out),
        SegmentType::Declared => {
            write_token(ctx, "declare", out);
            write_element_list(ctx, &segment.elements, out);
        }
    }
    write_rpar(ctx, out);
}

fn write_data_segment(ctx: &mut WriteContext, segment: &DataSegment, out: &mut String) {
    write_lpar_keyword(ctx, "data", out);
    write_name(ctx, &segment.name, out);
    if segment.ty == SegmentType::Active {
        if let Some(memory) = &segment.memory {
            write_lpar_keyword(ctx, "memory", out);
            write_var(ctx, memory, out);
            write_rpar(ctx, out);
        }
        if let Some(offset) = &segment.offset {
            write_lpar_keyword(ctx, "offset", out);
            write_constant_expression(ctx, offset, out);
            write_rpar(ctx, out);
        }
    }

    write_text_list(ctx, &segment.data, out);
    write_rpar(ctx, out);
}

fn write_module_item(ctx: &mut WriteContext, item: &ModuleItem, out: &mut String) {
    match item {
        ModuleItem::Type(entry) => write_type_entry(ctx, entry, out),
        ModuleItem::Import(import) => write_import(ctx, import, out),
        ModuleItem::Function(func) => write_function(ctx, func, out),
        ModuleItem::Table(table) => write_table(ctx, table, out),
        ModuleItem::Memory(memory) => write_memory(ctx, memory, out),
        ModuleItem::Global(global) => write_global(ctx, global, out),
        ModuleItem::Export(export) => write_export(ctx, export, out),
        ModuleItem::Start(start) => write_start(ctx, start, out),
        ModuleItem::Element(segment) => write_element_segment(ctx, segment, out),
        ModuleItem::Data(segment) => write_data_segment(ctx, segment, out),
        ModuleItem::Event(event) => write_event(ctx, event, out),
    }
    ctx.newline();
}

// ===========================================================================
// Public API
// ===========================================================================

/// Write a module's items to `out`, one per line, at the current indent.
///
/// Returns the sink length after writing. Note that a bare module has no
/// `(module ...)` wrapper; that belongs to the script layer.
pub fn write_module(ctx: &mut WriteContext, module: &Module, out: &mut String) -> usize {
    for item in module {
        write_module_item(ctx, item, out);
    }
    out.len()
}

/// Write a single instruction (opcode and immediates) to `out`.
///
/// Returns the sink length after writing.
pub fn write_instruction(ctx: &mut WriteContext, instr: &Instruction, out: &mut String) -> usize {
    write_instr(ctx, instr, out);
    out.len()
}
