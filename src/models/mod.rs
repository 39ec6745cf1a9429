//! Simulation domain models.
//!
//! Provides the input and output types of a scheduling run: the
//! process table going in, completion records and the per-tick
//! timeline coming out.
//!
//! # Terminology
//!
//! | Type | Meaning |
//! |------|---------|
//! | Process | Unit of CPU work (arrival, burst, priority) |
//! | ProcessTable | Ordered input set of one run |
//! | CompletionRecord | When a process finished |
//! | TimelineEvent | Who held the CPU during one tick |
//! | ExecutionSegment | Contiguous run of one process |

mod process;
mod schedule;

pub use process::{Process, ProcessTable};
pub use schedule::{
    CompletionRecord, ExecutionSegment, ScheduleResult, TimelineEvent, Violation, ViolationType,
};
