//! Judecca machine
//!
//! There is no halt instruction. A run only ends with an error (a resource
//! limit or a failed device), or when the optional step budget is spent.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, trace, warn};

use crate::error::Result;
use crate::generator::{HashPages, PageGenerator};
use crate::io::IoDevice;
use crate::jump_table::JumpTable;
use crate::page_cache::PageCache;
use crate::state::MachineState;
use crate::tape::Tape;
use judecca_spec::{check_source_len, derive_seed, Limits, Opcode, Seed};

/// Machine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineConfig {
    /// Page and tape bounds
    pub limits: Limits,

    /// Emit a trace event for every executed instruction
    pub trace: bool,

    /// Stop after this many instructions
    pub max_steps: Option<u64>,
}

/// Counters reported when a step budget is spent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSummary {
    /// Instructions executed
    pub steps: u64,

    /// Pages generated, counting regenerations after cache misses
    pub pages_generated: u64,

    /// Pages scanned by the jump table
    pub pages_scanned: u64,

    /// BREAK instructions executed
    pub breakpoints: u64,
}

pub struct Machine<G, D> {
    state: MachineState,
    tape: Tape,
    pages: PageCache<G>,
    jumps: JumpTable,
    device: D,
    config: MachineConfig,
}

impl<'src, D: IoDevice> Machine<HashPages<'src>, D> {
    /// Machine for `source` with an already derived seed
    pub fn new(source: &'src [u8], seed: Seed, config: MachineConfig, device: D) -> Result<Self> {
        check_source_len(source.len() as u64)?;
        Ok(Self::with_generator(HashPages::new(source, seed), config, device))
    }

    /// Machine for `source`, deriving the seed first
    pub fn from_source(source: &'src [u8], config: MachineConfig, device: D) -> Result<Self> {
        check_source_len(source.len() as u64)?;
        let seed = derive_seed(source);
        Self::new(source, seed, config, device)
    }
}

impl<G: PageGenerator, D: IoDevice> Machine<G, D> {
    /// Machine over an arbitrary page generator
    pub fn with_generator(generator: G, config: MachineConfig, device: D) -> Self {
        Machine {
            state: MachineState::new(),
            tape: Tape::new(config.limits.max_tape),
            pages: PageCache::new(generator, config.limits.max_page),
            jumps: JumpTable::new(),
            device,
            config,
        }
    }

    /// Execute one instruction
    ///
    /// On error the instruction pointer and step count are left unchanged.
    pub fn step(&mut self) -> Result<()> {
        let ip = self.state.ip;
        let opcode = self.pages.opcode(ip)?;

        if self.config.trace {
            trace!(
                step = self.state.steps,
                ip,
                %opcode,
                head = self.tape.read_head(),
                position = self.tape.position(),
                "exec"
            );
        }

        let next = match opcode {
            Opcode::Inc => {
                self.tape.increment();
                ip + 1
            }
            Opcode::Dec => {
                self.tape.decrement();
                ip + 1
            }
            Opcode::Left => {
                self.tape.move_left()?;
                ip + 1
            }
            Opcode::Right => {
                self.tape.move_right()?;
                ip + 1
            }
            Opcode::Out => {
                self.device.write_byte(self.tape.read_head())?;
                ip + 1
            }
            Opcode::In => {
                let byte = self.device.read_byte()?.unwrap_or(0);
                self.tape.write_head(byte);
                ip + 1
            }
            Opcode::Break => {
                self.state.breakpoints += 1;
                debug!(
                    ip,
                    head = self.tape.read_head(),
                    position = self.tape.position(),
                    "breakpoint"
                );
                ip + 1
            }
            Opcode::Open | Opcode::Close | Opcode::Pivot => {
                let head_is_zero = self.tape.read_head() == 0;
                self.jumps.resolve(&mut self.pages, ip, head_is_zero)?
            }
            Opcode::Nop
            | Opcode::ReservedB
            | Opcode::ReservedC
            | Opcode::ReservedD
            | Opcode::ReservedE
            | Opcode::ReservedF => ip + 1,
        };

        self.state.advance(next);
        Ok(())
    }

    /// Run until an error, or until `max_steps` instructions have executed
    pub fn run(&mut self) -> Result<ExecutionSummary> {
        info!(
            max_steps = ?self.config.max_steps,
            max_page = ?self.config.limits.max_page,
            max_tape = ?self.config.limits.max_tape,
            "run started"
        );

        loop {
            if let Some(max_steps) = self.config.max_steps {
                if self.state.steps >= max_steps {
                    let summary = self.summary();
                    info!(steps = summary.steps, pages = summary.pages_generated, "step budget spent");
                    return Ok(summary);
                }
            }

            if let Err(err) = self.step() {
                if err.is_resource_limit() {
                    warn!(ip = self.state.ip, steps = self.state.steps, "{}", err);
                } else if err.is_internal() {
                    error!(ip = self.state.ip, steps = self.state.steps, "{}", err);
                } else {
                    info!(ip = self.state.ip, steps = self.state.steps, "run stopped: {}", err);
                }
                return Err(err);
            }
        }
    }

    pub fn summary(&self) -> ExecutionSummary {
        ExecutionSummary {
            steps: self.state.steps,
            pages_generated: self.pages.generated(),
            pages_scanned: self.jumps.pages_scanned(),
            breakpoints: self.state.breakpoints,
        }
    }

    #[inline]
    pub fn ip(&self) -> u64 {
        self.state.ip
    }

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn jump_table(&self) -> &JumpTable {
        &self.jumps
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn into_device(self) -> D {
        self.device
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }
}
