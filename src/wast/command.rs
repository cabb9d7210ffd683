//! AST types for WebAssembly script (.wast) files.
//!
//! A .wast file is a sequence of commands that define modules, register them
//! for cross-module linking, invoke exported functions, and assert expected
//! behaviour (return values, traps, validation failures, etc.). These types
//! model that command sequence for the writer; nothing here is executed.

use crate::wat::{Module, Text, Var, V128};

/// A parsed script: a sequence of commands, in order.
pub type Script = Vec<Command>;

/// A top-level command in a .wast file.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Define a module, optionally named.
    Module(ScriptModule),

    /// Register a module under a string name for imports.
    Register(Register),

    /// Top-level action (invoke or get, without assertion).
    Action(Action),

    /// Assert that a module or action has a specified outcome.
    Assertion(Assertion),
}

/// A module as it appears in a script, optionally bound to a `$name`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptModule {
    pub name: Option<String>,
    pub body: ScriptModuleBody,
}

/// How the module is provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptModuleBody {
    /// Inline text: `(module ...)` with real module items.
    Text(Module),

    /// Binary module: `(module binary "\00asm" ...)`.
    Binary(Vec<Text>),

    /// Quoted text module: `(module quote "(func ...)" ...)`.
    Quote(Vec<Text>),
}

/// `(register "name" $module?)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Register {
    pub name: Text,
    pub module: Option<Var>,
}

/// An action within an assertion or at top level.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Invoke(InvokeAction),
    Get(GetAction),
}

/// Invoke an exported function: `(invoke $mod? "name" args...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct InvokeAction {
    pub module: Option<Var>,
    pub name: Text,
    pub consts: Vec<Const>,
}

/// Read an exported global: `(get $mod? "name")`.
#[derive(Debug, Clone, PartialEq)]
pub struct GetAction {
    pub module: Option<Var>,
    pub name: Text,
}

/// A typed constant used as an action argument.
///
/// Integer constants carry their bit pattern unsigned; the sign shown in the
/// source is a property of the literal, not the value.
#[derive(Debug, Clone, PartialEq)]
pub enum Const {
    I32(u32),
    I64(u64),
    F32(f32),
    F64(f64),
    V128(V128),
    RefNull,
    RefExtern(Var),
}

/// A NaN pattern in an expected result. Patterns, not values: they match
/// families of bit patterns and have no float representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NanKind {
    Canonical,
    Arithmetic,
}

/// A float expected-result: an exact value or a NaN pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FloatResult<T> {
    Value(T),
    Nan(NanKind),
}

pub type F32Result = FloatResult<f32>;
pub type F64Result = FloatResult<f64>;

/// An expected result in an `assert_return`.
///
/// Beyond the argument constants this adds per-lane float patterns for v128
/// and the payload-less `ref.extern` / `ref.func` patterns.
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnResult {
    I32(u32),
    I64(u64),
    V128(V128),
    F32(F32Result),
    F64(F64Result),
    F32x4([F32Result; 4]),
    F64x2([F64Result; 2]),
    RefNull,
    /// A specific extern reference. Index only: the source format never
    /// names these.
    RefExtern(u32),
    /// Matches any extern reference.
    RefExternPattern,
    /// Matches any function reference.
    RefFuncPattern,
}

/// An assertion command, with the payload shape its kind requires.
#[derive(Debug, Clone, PartialEq)]
pub enum Assertion {
    /// The module must fail to parse.
    Malformed(ModuleAssertion),

    /// The module must fail validation.
    Invalid(ModuleAssertion),

    /// The module must fail to link (import resolution).
    Unlinkable(ModuleAssertion),

    /// The action must trap with the given message.
    ActionTrap(ActionAssertion),

    /// The action must return the given results.
    Return(ReturnAssertion),

    /// Module instantiation must trap.
    ModuleTrap(ModuleAssertion),

    /// The action must exhaust resources (e.g. the call stack).
    Exhaustion(ActionAssertion),
}

/// A module plus the expected failure message.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleAssertion {
    pub module: ScriptModule,
    pub message: Text,
}

/// An action plus the expected failure message.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionAssertion {
    pub action: Action,
    pub message: Text,
}

/// An action plus its expected results.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnAssertion {
    pub action: Action,
    pub results: Vec<ReturnResult>,
}
