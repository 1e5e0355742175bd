//! OSI trace file writer packaged as an FMI 2.0 co-simulation FMU.
//!
//! The host hands one serialized OSI record per step through the OSMP
//! integer variables (`osi_in.base.lo`, `osi_in.base.hi`, `osi_in.size`).
//! The component views that buffer in place and appends it to a trace file
//! written by [`osi_trace_writer::TraceWriter`].

pub mod component;
pub mod config;
pub mod exports;
pub mod fmi2;
pub mod handoff;
pub mod logging;
pub mod variables;

pub use component::{Component, ExperimentSetup, LifecycleState};
pub use config::{RuntimeOptions, TraceSettings};
pub use fmi2::Fmi2Status;
pub use handoff::HandoffDescriptor;
pub use logging::{BufferedSink, HostLogSink, InstanceLogger, LogCategory, LogLevel, LogRecord, LogSink};
pub use variables::{OutOfRange, VariableKind, VariableTable};
