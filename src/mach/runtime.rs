use super::{Device, Memory, Operation};
use crate::error;
use crate::lang::ast::{Block, Expression};
use crate::lang::{prepare, Error, Operator, Span};
use log::{debug, trace, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub struct Config {
    pub max_cells: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            max_cells: super::MAX_CELLS,
        }
    }
}

/// ## Evaluator
///
/// Owns the address space and the device for a whole session. Each call
/// to `enter` runs one program against the same memory.
pub struct Runtime<D: Device> {
    memory: Memory,
    device: D,
    interrupted: Arc<AtomicBool>,
}

impl<D: Device> Runtime<D> {
    pub fn new(device: D) -> Runtime<D> {
        Runtime::with_config(device, Config::default())
    }

    pub fn with_config(device: D, config: Config) -> Runtime<D> {
        Runtime {
            memory: Memory::new(config.max_cells),
            device,
            interrupted: Arc::default(),
        }
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Setting the flag stops the running program with `BREAK` at the next
    /// operator or loop iteration. It is cleared when the next program starts.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupted)
    }

    /// Strips comments and whitespace from `source`, then runs it.
    /// Returns the value of the last statement.
    pub fn enter(&mut self, source: &str) -> Result<i64> {
        let program = prepare(source);
        self.run(&program)
    }

    /// Runs text that has already been through `prepare`.
    pub fn run(&mut self, program: &str) -> Result<i64> {
        self.interrupted.store(false, Ordering::SeqCst);
        let block = Block::new(Span::new(program, 0));
        let mut value = 0;
        let mut index = 0;
        while let Some(statement) = block.statement(index)? {
            value = self.expression(&statement)?;
            debug!("statement {} = {}", index, value);
            index += 1;
        }
        Ok(value)
    }

    fn block(&mut self, block: &Block<'_>) -> Result<i64> {
        let mut value = 0;
        let mut index = 0;
        while let Some(statement) = block.statement(index)? {
            value = self.expression(&statement)?;
            index += 1;
        }
        Ok(value)
    }

    fn check_interrupt(&self) -> Result<()> {
        if self.interrupted.swap(false, Ordering::SeqCst) {
            Err(error!(Break))
        } else {
            Ok(())
        }
    }

    fn expression(&mut self, expr: &Expression<'_>) -> Result<i64> {
        let (column, op, operands) = match expr {
            Expression::Integer(n) => return Ok(*n),
            Expression::Apply(column, op, operands) => (column, *op, operands),
        };
        self.check_interrupt()?;
        match op {
            Operator::Conditional => {
                if self.block(&operands[0])? == 0 {
                    self.block(&operands[1])
                } else {
                    self.block(&operands[2])
                }
            }
            Operator::Loop => {
                let mut value = 0;
                while self.block(&operands[0])? == 0 {
                    value = self.block(&operands[1])?;
                    self.check_interrupt()?;
                }
                Ok(value)
            }
            _ => {
                let mut args = Vec::with_capacity(operands.len());
                for operand in operands {
                    args.push(self.block(operand)?);
                }
                trace!("{} {:?}", op, args);
                self.apply(op, &args).map_err(|e| e.or_in_column(column))
            }
        }
    }

    fn apply(&mut self, op: Operator, args: &[i64]) -> Result<i64> {
        use Operator::*;
        match op {
            Write => self.memory.write(args[0], args[1]),
            Read => self.memory.read(args[0]),
            Dealloc => self.memory.deallocate_to(args[0]),
            MaxAddress => Ok(self.memory.max_address()),
            Print => {
                let code = args[0];
                match u32::try_from(code).ok().and_then(char::from_u32) {
                    Some(ch) => self.device.print(ch)?,
                    None => warn!("character code {} not printable", code),
                }
                Ok(code)
            }
            Input => match self.device.input()? {
                Some(ch) => Ok(ch as i64),
                None => Ok(-1),
            },
            Add => Operation::sum(args[0], args[1]),
            Subtract => Operation::subtract(args[0], args[1]),
            Multiply => Operation::multiply(args[0], args[1]),
            Divide => Operation::divide(args[0], args[1]),
            Modulus => Operation::modulus(args[0], args[1]),
            Clock => Ok(self.device.clock()),
            Random => {
                let (low, high) = Operation::bounds(args[0], args[1]);
                Ok(self.device.random(low, high))
            }
            Conditional | Loop => Err(error!(InternalError; "CONTROL FORM APPLIED AS FUNCTION")),
        }
    }
}

impl Default for Runtime<super::Buffer> {
    fn default() -> Runtime<super::Buffer> {
        Runtime::new(super::Buffer::new())
    }
}
