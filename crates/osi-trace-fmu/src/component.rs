use std::path::{Path, PathBuf};

use anyhow::Context as _;
use osi_trace_writer::TraceWriter;

use crate::config::TraceSettings;
use crate::fmi2::Fmi2Status;
use crate::handoff::HandoffDescriptor;
use crate::logging::{InstanceLogger, LogCategory};
use crate::variables::{OutOfRange, VariableTable, BOOLEAN_VALID};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Constructed,
    Initialized,
    ExperimentConfigured,
    InRun,
    Terminated,
    /// Only `reset` leaves this state.
    Failed,
}

/// Hints from `fmi2SetupExperiment`. Recorded, not acted upon.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExperimentSetup {
    pub tolerance: Option<f64>,
    pub start_time: f64,
    pub stop_time: Option<f64>,
}

/// One FMU instance: variables, lifecycle and the open trace.
pub struct Component {
    state: LifecycleState,
    variables: VariableTable,
    logger: InstanceLogger,
    writer: Option<TraceWriter>,
    experiment: ExperimentSetup,
    last_trace: Option<PathBuf>,
}

impl Component {
    pub fn new(logger: InstanceLogger) -> Self {
        let mut component = Component {
            state: LifecycleState::Constructed,
            variables: VariableTable::new(),
            logger,
            writer: None,
            experiment: ExperimentSetup::default(),
            last_trace: None,
        };
        component.do_init();
        component
    }

    fn do_init(&mut self) {
        self.variables.reset();
        self.writer = None;
        self.experiment = ExperimentSetup::default();
        self.state = LifecycleState::Initialized;
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut VariableTable {
        &mut self.variables
    }

    pub fn logger_mut(&mut self) -> &mut InstanceLogger {
        &mut self.logger
    }

    pub fn experiment(&self) -> &ExperimentSetup {
        &self.experiment
    }

    /// Records written to the open trace, zero when none is open.
    pub fn frames(&self) -> u64 {
        self.writer.as_ref().map_or(0, TraceWriter::frames)
    }

    pub fn working_path(&self) -> Option<&Path> {
        self.writer.as_ref().map(TraceWriter::working_path)
    }

    /// Final path of the last trace finalized by `terminate`.
    pub fn last_trace(&self) -> Option<&Path> {
        self.last_trace.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        self.variables.boolean(BOOLEAN_VALID)
    }

    fn reject(&mut self, operation: &str) -> Fmi2Status {
        let state = self.state;
        self.logger.error(
            LogCategory::Fmi,
            format_args!("{operation} is not allowed in state {state:?}"),
        );
        Fmi2Status::Error
    }

    pub fn setup_experiment(
        &mut self,
        tolerance: Option<f64>,
        start_time: f64,
        stop_time: Option<f64>,
    ) -> Fmi2Status {
        if self.state != LifecycleState::Initialized {
            return self.reject("fmi2SetupExperiment");
        }
        self.experiment = ExperimentSetup {
            tolerance,
            start_time,
            stop_time,
        };
        Fmi2Status::Ok
    }

    pub fn enter_initialization_mode(&mut self) -> Fmi2Status {
        if self.state != LifecycleState::Initialized {
            return self.reject("fmi2EnterInitializationMode");
        }
        self.state = LifecycleState::ExperimentConfigured;
        Fmi2Status::Ok
    }

    /// Reads the trace parameters and opens the trace file.
    pub fn exit_initialization_mode(&mut self) -> Fmi2Status {
        if self.state != LifecycleState::ExperimentConfigured {
            return self.reject("fmi2ExitInitializationMode");
        }
        match self.open_writer() {
            Ok(writer) => {
                self.logger.info(
                    LogCategory::Osi,
                    format_args!("tracing to {}", writer.working_path().display()),
                );
                self.writer = Some(writer);
                self.state = LifecycleState::InRun;
                Fmi2Status::Ok
            }
            Err(err) => {
                self.logger.error(LogCategory::Osi, format_args!("{err:#}"));
                self.state = LifecycleState::Failed;
                Fmi2Status::Error
            }
        }
    }

    fn open_writer(&mut self) -> anyhow::Result<TraceWriter> {
        let settings = TraceSettings::from_variables(&self.variables);
        if settings.format_defaulted() {
            self.logger
                .info(LogCategory::Osi, "no trace file format given, using osi");
        }
        let config = settings
            .writer_config()
            .context("invalid trace configuration")?;
        let writer = TraceWriter::open(config)
            .with_context(|| format!("cannot start trace in {:?}", settings.trace_path))?;
        Ok(writer)
    }

    /// Writes the record currently described by the handoff variables.
    ///
    /// # Safety
    ///
    /// When the handoff variables describe a non-empty buffer, it must be
    /// readable for the duration of this call.
    pub unsafe fn do_step(&mut self, current_time: f64, step_size: f64) -> Fmi2Status {
        if self.state != LifecycleState::InRun {
            return self.reject("fmi2DoStep");
        }
        let descriptor = HandoffDescriptor::from_variables(&self.variables);
        let Some(bytes) = descriptor.resolve() else {
            self.variables.set_boolean(BOOLEAN_VALID, false);
            self.logger.info(
                LogCategory::Osmp,
                format_args!("no buffer at t={current_time} (step {step_size})"),
            );
            return Fmi2Status::Ok;
        };
        let Some(writer) = self.writer.as_mut() else {
            self.variables.set_boolean(BOOLEAN_VALID, false);
            return self.reject("fmi2DoStep without an open trace");
        };
        match writer.step(bytes) {
            Ok(()) => {
                self.variables.set_boolean(BOOLEAN_VALID, true);
                Fmi2Status::Ok
            }
            Err(err) => {
                self.variables.set_boolean(BOOLEAN_VALID, false);
                self.logger.error(
                    LogCategory::Osi,
                    format_args!("step at t={current_time} dropped: {err}"),
                );
                Fmi2Status::Error
            }
        }
    }

    /// Finalizes the trace. Finalization failures are logged, not returned.
    pub fn terminate(&mut self) -> Fmi2Status {
        match self.state {
            LifecycleState::InRun => {
                if let Some(writer) = self.writer.take() {
                    self.finish(writer);
                }
            }
            LifecycleState::Initialized | LifecycleState::ExperimentConfigured => {}
            _ => return self.reject("fmi2Terminate"),
        }
        self.state = LifecycleState::Terminated;
        Fmi2Status::Ok
    }

    fn finish(&mut self, writer: TraceWriter) {
        let frames = writer.frames();
        match writer.finish() {
            Ok(path) => {
                self.logger.info(
                    LogCategory::Osi,
                    format_args!("wrote {frames} frames to {}", path.display()),
                );
                self.last_trace = Some(path);
            }
            Err(err) => self.logger.error(LogCategory::Osi, err),
        }
    }

    /// Drops any open trace without finalizing it and starts over.
    pub fn reset(&mut self) -> Fmi2Status {
        if let Some(writer) = self.writer.take() {
            self.logger.warn(
                LogCategory::Osi,
                format_args!(
                    "reset leaves unfinished trace {}",
                    writer.working_path().display()
                ),
            );
        }
        self.do_init();
        Fmi2Status::Ok
    }

    /// Maps a variable access result to a status, logging the failure.
    pub fn access_status(&mut self, function: &str, result: Result<(), OutOfRange>) -> Fmi2Status {
        match result {
            Ok(()) => Fmi2Status::Ok,
            Err(err) => {
                self.logger
                    .error(LogCategory::Fmi, format_args!("{function}: {err}"));
                Fmi2Status::Error
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuntimeOptions;
    use crate::logging::{BufferedSink, LogLevel};
    use crate::variables::BOOLEAN_OMIT_TIMESTAMP;
    use osi_trace_writer::{InterfaceVersion, RecordHeader, Timestamp};
    use prost::Message as _;
    use std::ffi::{CStr, CString};

    fn component() -> (Component, BufferedSink) {
        let sink = BufferedSink::new();
        let logger = InstanceLogger::new(
            "test",
            Some(Box::new(sink.clone())),
            &RuntimeOptions::default(),
            true,
        );
        (Component::new(logger), sink)
    }

    fn configure(c: &mut Component, dir: &Path, kind: &str, format: &str) {
        let values = [
            CString::new(dir.to_str().unwrap()).unwrap(),
            CString::new("3.5.0").unwrap(),
            CString::new("").unwrap(),
            CString::new(kind).unwrap(),
            CString::new(format).unwrap(),
        ];
        let refs: Vec<&CStr> = values.iter().map(CString::as_c_str).collect();
        c.variables_mut().set_strings(&[0, 1, 2, 3, 4], &refs).unwrap();
        c.variables_mut()
            .set_booleans(&[BOOLEAN_OMIT_TIMESTAMP as u32], &[true])
            .unwrap();
    }

    fn start(c: &mut Component, dir: &Path, kind: &str, format: &str) -> Fmi2Status {
        configure(c, dir, kind, format);
        assert_eq!(c.setup_experiment(None, 0.0, Some(1.0)), Fmi2Status::Ok);
        assert_eq!(c.enter_initialization_mode(), Fmi2Status::Ok);
        c.exit_initialization_mode()
    }

    fn record(seconds: i64) -> Vec<u8> {
        RecordHeader {
            version: Some(InterfaceVersion::new(3, 7, 0)),
            timestamp: Some(Timestamp {
                seconds: Some(seconds),
                nanos: Some(0),
            }),
        }
        .encode_to_vec()
    }

    fn step_with(c: &mut Component, bytes: &[u8]) -> Fmi2Status {
        HandoffDescriptor::for_slice(bytes)
            .unwrap()
            .store(c.variables_mut());
        unsafe { c.do_step(0.0, 0.01) }
    }

    #[test]
    fn instantiation_leaves_component_initialized() {
        let (c, _) = component();
        assert_eq!(c.state(), LifecycleState::Initialized);
        assert!(!c.is_valid());
        assert_eq!(c.frames(), 0);
    }

    #[test]
    fn setup_experiment_records_hints() {
        let (mut c, _) = component();
        assert_eq!(c.setup_experiment(Some(1e-4), 0.5, None), Fmi2Status::Ok);
        assert_eq!(c.state(), LifecycleState::Initialized);
        assert_eq!(
            *c.experiment(),
            ExperimentSetup {
                tolerance: Some(1e-4),
                start_time: 0.5,
                stop_time: None,
            }
        );
    }

    #[test]
    fn three_sensor_data_steps_produce_named_binary_trace() {
        let dir = tempfile::tempdir().unwrap();
        let (mut c, _) = component();
        assert_eq!(start(&mut c, dir.path(), "sd", "osi"), Fmi2Status::Ok);
        assert_eq!(c.state(), LifecycleState::InRun);

        for t in 0..3 {
            assert_eq!(step_with(&mut c, &record(t)), Fmi2Status::Ok);
            assert!(c.is_valid());
        }
        assert_eq!(c.frames(), 3);
        assert_eq!(c.terminate(), Fmi2Status::Ok);
        assert_eq!(c.state(), LifecycleState::Terminated);

        let path = c.last_trace().unwrap();
        assert_eq!(
            path.file_name().unwrap(),
            "00000000T000000Z_sd_370_3.5.0_3.osi"
        );
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn empty_handoff_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let (mut c, _) = component();
        assert_eq!(start(&mut c, dir.path(), "sv", "osi"), Fmi2Status::Ok);
        assert_eq!(step_with(&mut c, &record(0)), Fmi2Status::Ok);
        assert!(c.is_valid());

        c.variables_mut().set_integers(&[2], &[0]).unwrap();
        assert_eq!(unsafe { c.do_step(0.01, 0.01) }, Fmi2Status::Ok);
        assert!(!c.is_valid());
        assert_eq!(c.frames(), 1);
    }

    #[test]
    fn malformed_buffer_fails_only_its_step() {
        let dir = tempfile::tempdir().unwrap();
        let (mut c, sink) = component();
        assert_eq!(start(&mut c, dir.path(), "sd", "mcap"), Fmi2Status::Ok);

        assert_eq!(step_with(&mut c, &[0x0a, 0x09, 0x08]), Fmi2Status::Error);
        assert!(!c.is_valid());
        assert_eq!(c.frames(), 0);
        assert_eq!(c.state(), LifecycleState::InRun);
        assert!(sink
            .records()
            .iter()
            .any(|r| r.level == LogLevel::Error && r.category == LogCategory::Osi));

        assert_eq!(step_with(&mut c, &record(1)), Fmi2Status::Ok);
        assert!(c.is_valid());
        assert_eq!(c.frames(), 1);
    }

    #[test]
    fn corrupt_nested_field_fails_its_step() {
        let dir = tempfile::tempdir().unwrap();
        let (mut c, _) = component();
        assert_eq!(start(&mut c, dir.path(), "sd", "osi"), Fmi2Status::Ok);

        let mut bytes = record(0);
        // sensor_id { value: <truncated varint> }
        bytes.extend_from_slice(&[0x1a, 0x01, 0x08]);
        assert_eq!(step_with(&mut c, &bytes), Fmi2Status::Error);
        assert!(!c.is_valid());
        assert_eq!(c.frames(), 0);
        assert_eq!(c.state(), LifecycleState::InRun);
    }

    #[test]
    fn format_tags_resolve_to_the_same_backend() {
        for tag in ["osi", "OSI", ".osi"] {
            let dir = tempfile::tempdir().unwrap();
            let (mut c, _) = component();
            assert_eq!(start(&mut c, dir.path(), "gt", tag), Fmi2Status::Ok, "{tag}");
            let working = c.working_path().unwrap().to_path_buf();
            assert_eq!(working.file_name().unwrap(), "00000000T000000Z_gt.osi");
        }
    }

    #[test]
    fn unknown_format_fails_until_reset() {
        let dir = tempfile::tempdir().unwrap();
        let (mut c, sink) = component();
        assert_eq!(start(&mut c, dir.path(), "sv", "xyz"), Fmi2Status::Error);
        assert_eq!(c.state(), LifecycleState::Failed);
        assert!(sink.messages().iter().any(|m| m.contains("xyz")));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

        assert_eq!(step_with(&mut c, &record(0)), Fmi2Status::Error);
        assert_eq!(c.enter_initialization_mode(), Fmi2Status::Error);
        assert_eq!(c.terminate(), Fmi2Status::Error);
        assert_eq!(c.state(), LifecycleState::Failed);

        assert_eq!(c.reset(), Fmi2Status::Ok);
        assert_eq!(c.state(), LifecycleState::Initialized);
        assert_eq!(c.variables().text(crate::variables::STRING_FILE_FORMAT), "");
    }

    #[test]
    fn unknown_record_kind_fails_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let (mut c, _) = component();
        assert_eq!(start(&mut c, dir.path(), "ov", "osi"), Fmi2Status::Error);
        assert_eq!(c.state(), LifecycleState::Failed);
    }

    #[test]
    fn missing_format_defaults_to_binary() {
        let dir = tempfile::tempdir().unwrap();
        let (mut c, sink) = component();
        assert_eq!(start(&mut c, dir.path(), "sv", ""), Fmi2Status::Ok);
        assert!(c
            .working_path()
            .unwrap()
            .to_string_lossy()
            .ends_with(".osi"));
        assert!(sink.messages().iter().any(|m| m.contains("using osi")));
    }

    #[test]
    fn steps_outside_the_run_are_rejected() {
        let (mut c, _) = component();
        assert_eq!(step_with(&mut c, &record(0)), Fmi2Status::Error);
        assert_eq!(c.exit_initialization_mode(), Fmi2Status::Error);
        assert_eq!(c.state(), LifecycleState::Initialized);
    }

    #[test]
    fn terminate_before_run_has_nothing_to_finalize() {
        let (mut c, _) = component();
        assert_eq!(c.enter_initialization_mode(), Fmi2Status::Ok);
        assert_eq!(c.terminate(), Fmi2Status::Ok);
        assert_eq!(c.state(), LifecycleState::Terminated);
        assert!(c.last_trace().is_none());
        assert_eq!(c.terminate(), Fmi2Status::Error);
    }

    #[test]
    fn finalization_failure_is_logged_not_returned() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir(&out).unwrap();
        let (mut c, sink) = component();
        assert_eq!(start(&mut c, &out, "sd", "osi"), Fmi2Status::Ok);
        assert_eq!(step_with(&mut c, &record(0)), Fmi2Status::Ok);

        std::fs::remove_dir_all(&out).unwrap();
        assert_eq!(c.terminate(), Fmi2Status::Ok);
        assert_eq!(c.state(), LifecycleState::Terminated);
        assert!(c.last_trace().is_none());
        assert!(sink
            .records()
            .iter()
            .any(|r| r.level == LogLevel::Error && r.message.contains("cannot finalize")));
    }

    #[test]
    fn reset_drops_open_trace_and_zeroes_variables() {
        let dir = tempfile::tempdir().unwrap();
        let (mut c, _) = component();
        assert_eq!(start(&mut c, dir.path(), "sd", "txth"), Fmi2Status::Ok);
        assert_eq!(step_with(&mut c, &record(0)), Fmi2Status::Ok);

        assert_eq!(c.reset(), Fmi2Status::Ok);
        assert_eq!(c.state(), LifecycleState::Initialized);
        assert!(!c.is_valid());
        assert_eq!(c.frames(), 0);
        assert!(c.working_path().is_none());

        assert_eq!(start(&mut c, dir.path(), "sd", "txth"), Fmi2Status::Ok);
        assert_eq!(c.state(), LifecycleState::InRun);
    }

    #[test]
    fn out_of_range_access_maps_to_error() {
        let (mut c, sink) = component();
        let res = c.variables_mut().set_integers(&[3], &[1]);
        assert_eq!(c.access_status("fmi2SetInteger", res), Fmi2Status::Error);
        assert!(sink.messages()[0].starts_with("fmi2SetInteger: "));
        assert_eq!(c.access_status("fmi2SetInteger", Ok(())), Fmi2Status::Ok);
    }
}
