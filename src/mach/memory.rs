use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Address space
///
/// Cells are zero-indexed and always contiguous. Writing past the end
/// allocates every address up to the target, zero-filled.

#[derive(Debug, Clone)]
pub struct Memory {
    max_cells: usize,
    cells: Vec<i64>,
}

impl Default for Memory {
    fn default() -> Memory {
        Memory::new(super::MAX_CELLS)
    }
}

impl Memory {
    pub fn new(max_cells: usize) -> Memory {
        Memory {
            max_cells,
            cells: vec![],
        }
    }

    /// Highest allocated address, -1 when nothing is allocated.
    pub fn max_address(&self) -> i64 {
        self.cells.len() as i64 - 1
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[i64] {
        &self.cells
    }

    pub fn write(&mut self, address: i64, value: i64) -> Result<i64> {
        if address < 0 {
            return Err(error!(AddressError; "CANNOT ASSIGN NEGATIVE ADDRESSES"));
        }
        let index = match usize::try_from(address) {
            Ok(index) if index < self.max_cells => index,
            _ => {
                return Err(error!(OutOfMemory; &format!(
                    "ADDRESS SPACE IS LIMITED TO {} CELLS",
                    self.max_cells
                )))
            }
        };
        if index >= self.cells.len() {
            self.cells.resize(index + 1, 0);
        }
        self.cells[index] = value;
        Ok(value)
    }

    pub fn read(&self, address: i64) -> Result<i64> {
        let index = self.index(address)?;
        Ok(self.cells[index])
    }

    /// Truncates so that `address` becomes the highest allocated address.
    pub fn deallocate_to(&mut self, address: i64) -> Result<i64> {
        let index = self.index(address)?;
        self.cells.truncate(index + 1);
        Ok(address)
    }

    fn index(&self, address: i64) -> Result<usize> {
        match usize::try_from(address) {
            Ok(index) if index < self.cells.len() => Ok(index),
            _ => Err(error!(AddressError; &format!("INVALID ADDRESS {}", address))),
        }
    }
}
