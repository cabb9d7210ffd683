#![no_main]

use libfuzzer_sys::fuzz_target;

use wattext::wat::{
    self, BlockImmediate, BoundValueType, Function, FunctionDesc, Immediate, Instruction,
    MemArgImmediate, ModuleItem, Opcode, ValueType, Var, WriteContext,
};

/// Build an instruction from the next fuzz bytes.
fn generate_instruction(data: &mut &[u8]) -> Instruction {
    let tag = take(data);
    match tag % 8 {
        0 => Instruction::new(Opcode::Block, Immediate::Block(BlockImmediate::default())),
        1 => Instruction::plain(Opcode::End),
        2 => Instruction::plain(Opcode::Nop),
        3 => Instruction::new(Opcode::I32Const, Immediate::S32(take(data) as i32)),
        4 => Instruction::new(Opcode::LocalGet, Immediate::Var(Var::Index(take(data) as u32))),
        5 => Instruction::new(
            Opcode::I32Load,
            Immediate::MemArg(MemArgImmediate {
                offset: (take(data) % 2 == 0).then(|| take(data) as u32),
                align: (take(data) % 2 == 0).then(|| take(data) as u32),
            }),
        ),
        6 => Instruction::new(Opcode::Loop, Immediate::Block(BlockImmediate::default())),
        _ => Instruction::plain(Opcode::Else),
    }
}

fn take(data: &mut &[u8]) -> u8 {
    if let Some((&first, rest)) = data.split_first() {
        *data = rest;
        first
    } else {
        0
    }
}

fuzz_target!(|data: &[u8]| {
    let mut data = data;

    let local_count = (take(&mut data) % 8) as usize;
    let locals = (0..local_count)
        .map(|i| {
            if take(&mut data) % 2 == 0 {
                BoundValueType::anonymous(ValueType::I32)
            } else {
                BoundValueType::named(&format!("l{i}"), ValueType::I64)
            }
        })
        .collect();

    let instr_count = (take(&mut data) % 64) as usize;
    let instructions = (0..instr_count)
        .map(|_| generate_instruction(&mut data))
        .collect();

    let module = vec![ModuleItem::Function(Function {
        desc: FunctionDesc::default(),
        locals,
        instructions,
        import: None,
        exports: vec![],
    })];

    let mut out = String::new();
    wat::write_module(&mut WriteContext::new(), &module, &mut out);

    // The writer is total: whatever the instruction mix (including surplus
    // `end`s), the output keeps its structural invariants.
    let mut depth = 0i64;
    for ch in out.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        assert!(depth >= 0);
    }
    assert_eq!(depth, 0);

    let bytes = out.as_bytes();
    for i in 1..bytes.len() {
        if bytes[i] == b')' {
            assert!(bytes[i - 1] != b' ' && bytes[i - 1] != b'\n');
        }
    }
});
