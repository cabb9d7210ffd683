//! Writer throughput benchmarks.
//!
//! These benchmarks measure emission speed for instruction-heavy function
//! bodies and for assertion-heavy scripts, the two shapes that dominate real
//! inputs (modules and spec-test files respectively).

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use wattext::wast::{
    Action, Assertion, Command, Const, InvokeAction, ReturnAssertion, ReturnResult, Script,
    ScriptModule, ScriptModuleBody,
};
use wattext::wat::{
    BlockImmediate, Function, FunctionDesc, Immediate, Instruction, MemArgImmediate, Module,
    ModuleItem, Opcode, Text, Var, WriteContext,
};

/// A module of `count` functions, each with a block, loads, and arithmetic.
fn instruction_heavy_module(count: usize) -> Module {
    let body = vec![
        Instruction::new(Opcode::Block, Immediate::Block(BlockImmediate::default())),
        Instruction::new(Opcode::LocalGet, Immediate::Var(Var::Index(0))),
        Instruction::new(
            Opcode::I32Load,
            Immediate::MemArg(MemArgImmediate {
                offset: Some(16),
                align: Some(2),
            }),
        ),
        Instruction::new(Opcode::I32Const, Immediate::S32(1)),
        Instruction::plain(Opcode::I32Add),
        Instruction::plain(Opcode::Drop),
        Instruction::plain(Opcode::End),
    ];
    (0..count)
        .map(|_| {
            ModuleItem::Function(Function {
                desc: FunctionDesc::default(),
                locals: vec![],
                instructions: body.clone(),
                import: None,
                exports: vec![],
            })
        })
        .collect()
}

/// A script of one empty module and `count` assert_returns.
fn assertion_heavy_script(count: usize) -> Script {
    let mut commands = vec![Command::Module(ScriptModule {
        name: None,
        body: ScriptModuleBody::Text(vec![]),
    })];
    for i in 0..count {
        commands.push(Command::Assertion(Assertion::Return(ReturnAssertion {
            action: Action::Invoke(InvokeAction {
                module: None,
                name: Text::quoted("f"),
                consts: vec![Const::I32(i as u32)],
            }),
            results: vec![ReturnResult::I32(i as u32)],
        })));
    }
    commands
}

fn bench_module_writing(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_module");
    for count in [10, 100, 1000] {
        let module = instruction_heavy_module(count);
        group.bench_with_input(BenchmarkId::new("functions", count), &module, |b, module| {
            b.iter(|| {
                let mut out = String::new();
                wattext::wat::write_module(&mut WriteContext::new(), module, &mut out);
                black_box(out)
            })
        });
    }
    group.finish();
}

fn bench_script_writing(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_script");
    for count in [100, 1000] {
        let script = assertion_heavy_script(count);
        group.bench_with_input(BenchmarkId::new("assertions", count), &script, |b, script| {
            b.iter(|| {
                let mut out = String::new();
                wattext::wast::write_script(&mut WriteContext::new(), script, &mut out);
                black_box(out)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_module_writing, bench_script_writing);
criterion_main!(benches);
