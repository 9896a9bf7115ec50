//! Main Execution Loop.
//!
//! This module implements one cycle of the machine. It performs the following:
//! 1. **Fetch:** Bounds-checks the program counter and reads the instruction.
//! 2. **Decode:** Splits the word into opcode and operand, then bounds-checks the
//!    operand before dispatch, whatever the opcode.
//! 3. **Execute:** Applies the opcode to the accumulator, memory, or console.
//! 4. **Advance:** Increments the PC unless a jump overwrote it.
//!
//! A conditional jump whose condition is false advances the PC by one exactly
//! like an arithmetic instruction.

use tracing::{debug, trace};

use super::{Cpu, Step};
use crate::common::MachineError;
use crate::core::units::alu::AluOp;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Opcode;
use crate::soc::Console;

impl Cpu {
    /// Executes one fetch-decode-execute cycle.
    ///
    /// On error the machine state is left as it was at the start of the cycle,
    /// except that INPUT may already have consumed a malformed token.
    ///
    /// # Errors
    ///
    /// * [`MachineError::ProgramCounterOutOfBounds`] - PC outside memory.
    /// * [`MachineError::InvalidOperand`] - operand outside memory.
    /// * [`MachineError::InvalidInstruction`] - unknown opcode.
    /// * [`MachineError::ArithmeticOverflow`] - ADD/SUB overflow in checked mode.
    /// * [`MachineError::InvalidInput`] / [`MachineError::Io`] - console failures.
    pub fn step<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<Step, MachineError> {
        self.stats.cycles += 1;

        let pc = self
            .memory
            .address(self.pc)
            .ok_or(MachineError::ProgramCounterOutOfBounds(self.pc))?;
        let inst = decode(self.memory.read(pc));
        let target = self
            .memory
            .address(inst.operand)
            .ok_or(MachineError::InvalidOperand(inst.operand))?;
        let op = inst
            .op()
            .ok_or(MachineError::InvalidInstruction(inst.raw))?;

        if self.trace {
            trace!(
                pc = self.pc,
                acc = self.acc,
                inst = inst.raw,
                "{}",
                disassemble(inst.raw)
            );
        }

        let jumped = match op {
            Opcode::Halt => {
                self.stats.retire(op, false);
                debug!(pc = self.pc, acc = self.acc, "halted");
                return Ok(Step::Halted);
            }
            Opcode::Add | Opcode::Sub => {
                let alu_op = if op == Opcode::Add {
                    AluOp::Add
                } else {
                    AluOp::Sub
                };
                self.acc = self
                    .alu
                    .execute(alu_op, self.acc, self.memory.read(target))
                    .ok_or(MachineError::ArithmeticOverflow {
                        pc: self.pc,
                        instruction: inst.raw,
                    })?;
                false
            }
            Opcode::Store => {
                self.memory.write(target, self.acc);
                false
            }
            Opcode::Load => {
                self.acc = self.memory.read(target);
                false
            }
            Opcode::Jump => true,
            Opcode::JumpIfZero => self.acc == 0,
            Opcode::JumpIfPositive => self.acc > 0,
            Opcode::Input => {
                if let Some(prompt) = self.presentation.input_prompt() {
                    console.write_str(prompt)?;
                }
                let value = console.read_word()?;
                self.memory.write(target, value);
                false
            }
            Opcode::Output => {
                let line = self.presentation.output_line(self.memory.read(target));
                console.write_str(&line)?;
                false
            }
        };

        self.pc = if jumped {
            target.as_word()
        } else {
            self.pc + 1
        };
        self.stats.retire(op, jumped);
        Ok(Step::Continue)
    }
}
