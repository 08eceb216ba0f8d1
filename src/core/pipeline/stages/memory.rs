//! MEM: data memory access for loads and stores.

use crate::core::pipeline::latches::{ExMemLatch, MemWbLatch};
use crate::memory::{AccessWidth, DataMemory, MemAccessError};

/// A load or store targeted an address the configured data memory
/// rejected. Both variants halt the simulator — this core strengthens
/// the warn-and-continue behavior some simulators use into a hard stop,
/// since a misaligned or out-of-range access almost always means the
/// program (or its loaded image) is broken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryFault {
    /// The access was not aligned to its width.
    Unaligned {
        /// PC of the offending instruction.
        pc: u32,
        /// Address that was misaligned.
        addr: u32,
    },
    /// The access fell outside the data memory extent.
    OutOfBounds {
        /// PC of the offending instruction.
        pc: u32,
        /// Address that was out of bounds.
        addr: u32,
    },
}

/// Runs the MEM stage for the instruction currently latched in EX/MEM.
pub fn memory_stage(ex_mem: &ExMemLatch, dmem: &mut DataMemory) -> Result<MemWbLatch, MemoryFault> {
    if !ex_mem.valid {
        return Ok(MemWbLatch::default());
    }

    let mut mem_data = 0;
    if ex_mem.control.is_load {
        let width = ex_mem.control.access_width.unwrap_or(AccessWidth::Word);
        let addr = ex_mem.alu_result;
        let raw = dmem
            .read(addr, width)
            .map_err(|e| to_fault(e, ex_mem.pc, addr))?;
        mem_data = if ex_mem.control.signed_load {
            sign_extend_load(raw, width)
        } else {
            raw
        };
    } else if ex_mem.control.is_store {
        let width = ex_mem.control.access_width.unwrap_or(AccessWidth::Word);
        let addr = ex_mem.alu_result;
        dmem.write(addr, width, ex_mem.store_data)
            .map_err(|e| to_fault(e, ex_mem.pc, addr))?;
    }

    Ok(MemWbLatch {
        valid: true,
        control: ex_mem.control,
        rd: ex_mem.rd,
        alu_result: ex_mem.alu_result,
        mem_data,
    })
}

fn to_fault(err: MemAccessError, pc: u32, addr: u32) -> MemoryFault {
    match err {
        MemAccessError::Unaligned => MemoryFault::Unaligned { pc, addr },
        MemAccessError::OutOfBounds => MemoryFault::OutOfBounds { pc, addr },
    }
}

fn sign_extend_load(raw: u32, width: AccessWidth) -> u32 {
    match width {
        AccessWidth::Byte => (raw as u8 as i8) as i32 as u32,
        AccessWidth::Half => (raw as u16 as i16) as i32 as u32,
        AccessWidth::Word => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_load_sign_extends_negative_value() {
        assert_eq!(sign_extend_load(0xFF, AccessWidth::Byte), 0xFFFF_FFFF);
        assert_eq!(sign_extend_load(0x7F, AccessWidth::Byte), 0x7F);
    }

    #[test]
    fn unaligned_store_reports_fault_with_pc_and_address() {
        let mut dmem = DataMemory::new();
        let mut ex_mem = ExMemLatch {
            valid: true,
            pc: 0x100,
            alu_result: 3,
            store_data: 1,
            ..Default::default()
        };
        ex_mem.control.is_store = true;
        ex_mem.control.access_width = Some(AccessWidth::Word);
        assert_eq!(
            memory_stage(&ex_mem, &mut dmem),
            Err(MemoryFault::Unaligned { pc: 0x100, addr: 3 })
        );
    }
}
