//! Script writer: .wast command AST -> text.
//!
//! Builds directly on the WAT writer's token layer. Commands print one per
//! line; module-shaped assertion payloads are indented onto their own line
//! while action-shaped payloads stay inline, matching the layout of the
//! official test suite.
//!
//! Constants and expected results print as parenthesised constant
//! instructions. Expected results additionally cover the per-lane float
//! patterns (`f32x4` / `f64x2` with `nan:canonical` / `nan:arithmetic`) and
//! the payload-less `ref.extern` / `ref.func` patterns, which share syntax
//! with constants but are not values.

use crate::wat::numeric::WatLiteral;
use crate::wat::writer::{
    write_literal, write_lpar, write_lpar_keyword, write_module, write_name, write_rpar,
    write_text, write_text_list, write_token, write_v128, write_var, WriteContext,
};
use crate::wat::{Opcode, Var};

use super::command::{
    Action, ActionAssertion, Assertion, Command, Const, FloatResult, GetAction, InvokeAction,
    ModuleAssertion, NanKind, Register, ReturnAssertion, ReturnResult, Script, ScriptModule,
    ScriptModuleBody,
};

// ===========================================================================
// Script modules
// ===========================================================================

fn write_script_module(ctx: &mut WriteContext, module: &ScriptModule, out: &mut String) {
    write_lpar_keyword(ctx, "module", out);
    write_name(ctx, &module.name, out);
    match &module.body {
        ScriptModuleBody::Text(items) => {
            ctx.indent();
            ctx.newline();
            write_module(ctx, items, out);
            ctx.dedent();
        }
        ScriptModuleBody::Binary(texts) => {
            write_token(ctx, "binary", out);
            write_text_list(ctx, texts, out);
        }
        ScriptModuleBody::Quote(texts) => {
            write_token(ctx, "quote", out);
            write_text_list(ctx, texts, out);
        }
    }
    write_rpar(ctx, out);
}

// ===========================================================================
// Constants and results
// ===========================================================================

fn write_const(ctx: &mut WriteContext, value: &Const, out: &mut String) {
    write_lpar(ctx, out);
    match value {
        Const::I32(bits) => {
            write_token(ctx, Opcode::I32Const.mnemonic(), out);
            write_literal(ctx, *bits, out);
        }
        Const::I64(bits) => {
            write_token(ctx, Opcode::I64Const.mnemonic(), out);
            write_literal(ctx, *bits, out);
        }
        Const::F32(value) => {
            write_token(ctx, Opcode::F32Const.mnemonic(), out);
            write_literal(ctx, *value, out);
        }
        Const::F64(value) => {
            write_token(ctx, Opcode::F64Const.mnemonic(), out);
            write_literal(ctx, *value, out);
        }
        Const::V128(value) => {
            write_token(ctx, Opcode::V128Const.mnemonic(), out);
            write_v128(ctx, value, out);
        }
        Const::RefNull => write_token(ctx, Opcode::RefNull.mnemonic(), out),
        Const::RefExtern(var) => {
            write_token(ctx, "ref.extern", out);
            write_var(ctx, var, out);
        }
    }
    write_rpar(ctx, out);
}

fn write_consts(ctx: &mut WriteContext, consts: &[Const], out: &mut String) {
    for value in consts {
        write_const(ctx, value, out);
    }
}

fn write_nan_kind(ctx: &mut WriteContext, kind: NanKind, out: &mut String) {
    match kind {
        NanKind::Canonical => write_token(ctx, "nan:canonical", out),
        NanKind::Arithmetic => write_token(ctx, "nan:arithmetic", out),
    }
}

fn write_float_result<T: WatLiteral + Copy>(
    ctx: &mut WriteContext,
    result: &FloatResult<T>,
    out: &mut String,
) {
    match result {
        FloatResult::Value(value) => write_literal(ctx, *value, out),
        FloatResult::Nan(kind) => write_nan_kind(ctx, *kind, out),
    }
}

fn write_return_result(ctx: &mut WriteContext, result: &ReturnResult, out: &mut String) {
    write_lpar(ctx, out);
    match result {
        ReturnResult::I32(bits) => {
            write_token(ctx, Opcode::I32Const.mnemonic(), out);
            write_literal(ctx, *bits, out);
        }
        ReturnResult::I64(bits) => {
            write_token(ctx, Opcode::I64Const.mnemonic(), out);
            write_literal(ctx, *bits, out);
        }
        ReturnResult::V128(value) => {
            write_token(ctx, Opcode::V128Const.mnemonic(), out);
            write_v128(ctx, value, out);
        }
        ReturnResult::F32(result) => {
            write_token(ctx, Opcode::F32Const.mnemonic(), out);
            write_float_result(ctx, result, out);
        }
        ReturnResult::F64(result) => {
            write_token(ctx, Opcode::F64Const.mnemonic(), out);
            write_float_result(ctx, result, out);
        }
        ReturnResult::F32x4(lanes) => {
            write_token(ctx, Opcode::V128Const.mnemonic(), out);
            write_token(ctx, "f32x4", out);
            for lane in lanes {
                write_float_result(ctx, lane, out);
            }
        }
        ReturnResult::F64x2(lanes) => {
            write_token(ctx, Opcode::V128Const.mnemonic(), out);
            write_token(ctx, "f64x2", out);
            for lane in lanes {
                write_float_result(ctx, lane, out);
            }
        }
        ReturnResult::RefNull => write_token(ctx, Opcode::RefNull.mnemonic(), out),
        ReturnResult::RefExtern(index) => {
            write_token(ctx, "ref.extern", out);
            write_literal(ctx, *index, out);
        }
        ReturnResult::RefExternPattern => write_token(ctx, "ref.extern", out),
        ReturnResult::RefFuncPattern => write_token(ctx, "ref.func", out),
    }
    write_rpar(ctx, out);
}

// ===========================================================================
// Actions
// ===========================================================================

fn write_module_var(ctx: &mut WriteContext, module: &Option<Var>, out: &mut String) {
    if let Some(var) = module {
        write_var(ctx, var, out);
    }
}

fn write_invoke_action(ctx: &mut WriteContext, action: &InvokeAction, out: &mut String) {
    write_lpar_keyword(ctx, "invoke", out);
    write_module_var(ctx, &action.module, out);
    write_text(ctx, &action.name, out);
    write_consts(ctx, &action.consts, out);
    write_rpar(ctx, out);
}

fn write_get_action(ctx: &mut WriteContext, action: &GetAction, out: &mut String) {
    write_lpar_keyword(ctx, "get", out);
    write_module_var(ctx, &action.module, out);
    write_text(ctx, &action.name, out);
    write_rpar(ctx, out);
}

fn write_action(ctx: &mut WriteContext, action: &Action, out: &mut String) {
    match action {
        Action::Invoke(invoke) => write_invoke_action(ctx, invoke, out),
        Action::Get(get) => write_get_action(ctx, get, out),
    }
}

// ===========================================================================
// Assertions
// ===========================================================================

/// Module payloads go on their own indented line, message below the module.
fn write_module_assertion(ctx: &mut WriteContext, assertion: &ModuleAssertion, out: &mut String) {
    ctx.indent();
    ctx.newline();
    write_script_module(ctx, &assertion.module, out);
    ctx.newline();
    write_text(ctx, &assertion.message, out);
    ctx.dedent();
}

fn write_action_assertion(ctx: &mut WriteContext, assertion: &ActionAssertion, out: &mut String) {
    write_action(ctx, &assertion.action, out);
    write_text(ctx, &assertion.message, out);
}

fn write_return_assertion(ctx: &mut WriteContext, assertion: &ReturnAssertion, out: &mut String) {
    write_action(ctx, &assertion.action, out);
    for result in &assertion.results {
        write_return_result(ctx, result, out);
    }
}

fn write_assertion(ctx: &mut WriteContext, assertion: &Assertion, out: &mut String) {
    match assertion {
        Assertion::Malformed(desc) => {
            write_lpar_keyword(ctx, "assert_malformed", out);
            write_module_assertion(ctx, desc, out);
        }
        Assertion::Invalid(desc) => {
            write_lpar_keyword(ctx, "assert_invalid", out);
            write_module_assertion(ctx, desc, out);
        }
        Assertion::Unlinkable(desc) => {
            write_lpar_keyword(ctx, "assert_unlinkable", out);
            write_module_assertion(ctx, desc, out);
        }
        Assertion::ActionTrap(desc) => {
            write_lpar_keyword(ctx, "assert_trap", out);
            write_action_assertion(ctx, desc, out);
        }
        Assertion::Return(desc) => {
            write_lpar_keyword(ctx, "assert_return", out);
            write_return_assertion(ctx, desc, out);
        }
        Assertion::ModuleTrap(desc) => {
            write_lpar_keyword(ctx, "assert_trap", out);
            write_module_assertion(ctx, desc, out);
        }
        Assertion::Exhaustion(desc) => {
            write_lpar_keyword(ctx, "assert_exhaustion", out);
            write_action_assertion(ctx, desc, out);
        }
    }
    write_rpar(ctx, out);
}

fn write_register(ctx: &mut WriteContext, register: &Register, out: &mut String) {
    write_lpar_keyword(ctx, "register", out);
    write_text(ctx, &register.name, out);
    write_module_var(ctx, &register.module, out);
    write_rpar(ctx, out);
}

// ===========================================================================
// Public API
// ===========================================================================

/// Write one script command to `out`, leaving a pending line break behind it.
///
/// Returns the sink length after writing.
pub fn write_command(ctx: &mut WriteContext, command: &Command, out: &mut String) -> usize {
    match command {
        Command::Module(module) => write_script_module(ctx, module, out),
        Command::Register(register) => write_register(ctx, register, out),
        Command::Action(action) => write_action(ctx, action, out),
        Command::Assertion(assertion) => write_assertion(ctx, assertion, out),
    }
    ctx.newline();
    out.len()
}

/// Write a whole script, one command per line.
///
/// Returns the sink length after writing.
pub fn write_script(ctx: &mut WriteContext, script: &Script, out: &mut String) -> usize {
    for command in script {
        write_command(ctx, command, out);
    }
    out.len()
}
