use std::path::PathBuf;

use osi_trace_writer::{TraceError, TraceFormat, TraceWriterConfig};

use crate::variables::{
    VariableTable, BOOLEAN_OMIT_TIMESTAMP, STRING_CUSTOM_NAME, STRING_FILE_FORMAT,
    STRING_MESSAGE_TYPE, STRING_PROTOBUF_VERSION, STRING_TRACE_PATH,
};

pub const VERBOSE_FMI_ENV: &str = "OSI_TRACE_FMU_VERBOSE_FMI";
pub const PRIVATE_LOG_ENV: &str = "OSI_TRACE_FMU_PRIVATE_LOG";

/// Process-level options, read once per instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeOptions {
    pub verbose_fmi: bool,
    pub private_log: Option<PathBuf>,
}

impl RuntimeOptions {
    pub fn from_env() -> Self {
        RuntimeOptions::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        RuntimeOptions {
            verbose_fmi: lookup(VERBOSE_FMI_ENV)
                .and_then(|v| parse_bool(&v))
                .unwrap_or(false),
            private_log: lookup(PRIVATE_LOG_ENV)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}

/// The trace parameters as the host left them when initialization mode
/// ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceSettings {
    pub trace_path: String,
    pub protobuf_version: String,
    pub custom_name: String,
    pub message_type: String,
    pub file_format: String,
    pub omit_timestamp: bool,
}

impl TraceSettings {
    pub fn from_variables(variables: &VariableTable) -> Self {
        TraceSettings {
            trace_path: variables.text(STRING_TRACE_PATH).into_owned(),
            protobuf_version: variables.text(STRING_PROTOBUF_VERSION).into_owned(),
            custom_name: variables.text(STRING_CUSTOM_NAME).into_owned(),
            message_type: variables.text(STRING_MESSAGE_TYPE).into_owned(),
            file_format: variables.text(STRING_FILE_FORMAT).into_owned(),
            omit_timestamp: variables.boolean(BOOLEAN_OMIT_TIMESTAMP),
        }
    }

    /// True when no format was given and the binary default applies.
    pub fn format_defaulted(&self) -> bool {
        self.file_format.trim().is_empty()
    }

    /// An empty trace path means the current directory.
    pub fn writer_config(&self) -> Result<TraceWriterConfig, TraceError> {
        let format = if self.format_defaulted() {
            TraceFormat::default().as_str()
        } else {
            self.file_format.as_str()
        };
        let output_dir = if self.trace_path.is_empty() {
            "."
        } else {
            self.trace_path.as_str()
        };
        TraceWriterConfig::from_tags(
            output_dir,
            &self.protobuf_version,
            &self.custom_name,
            &self.message_type,
            format,
            self.omit_timestamp,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use osi_trace_writer::RecordKind;
    use std::ffi::CString;

    fn settings(message_type: &str, file_format: &str) -> TraceSettings {
        TraceSettings {
            trace_path: "/tmp/traces".to_string(),
            protobuf_version: "3.5.0".to_string(),
            custom_name: String::new(),
            message_type: message_type.to_string(),
            file_format: file_format.to_string(),
            omit_timestamp: false,
        }
    }

    #[test]
    fn options_follow_environment_lookup() {
        let opts = RuntimeOptions::from_lookup(|name| match name {
            VERBOSE_FMI_ENV => Some("yes".to_string()),
            PRIVATE_LOG_ENV => Some(" /tmp/fmu.log ".to_string()),
            _ => None,
        });
        assert!(opts.verbose_fmi);
        assert_eq!(opts.private_log, Some(PathBuf::from("/tmp/fmu.log")));

        let opts = RuntimeOptions::from_lookup(|name| match name {
            VERBOSE_FMI_ENV => Some("maybe".to_string()),
            PRIVATE_LOG_ENV => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(opts, RuntimeOptions::default());
    }

    #[test]
    fn empty_format_defaults_to_binary() {
        let s = settings("sd", "");
        assert!(s.format_defaulted());
        assert_eq!(s.writer_config().unwrap().format, TraceFormat::Binary);
    }

    #[test]
    fn format_tags_are_normalized() {
        for tag in ["osi", "OSI", ".osi"] {
            assert_eq!(
                settings("sv", tag).writer_config().unwrap().format,
                TraceFormat::Binary
            );
        }
        assert!(matches!(
            settings("sv", "xyz").writer_config(),
            Err(TraceError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            settings("xx", "osi").writer_config(),
            Err(TraceError::UnsupportedRecordKind(_))
        ));
    }

    #[test]
    fn reads_parameters_from_variables() {
        let mut vars = VariableTable::new();
        let values = [
            CString::new("/data").unwrap(),
            CString::new("3.21.12").unwrap(),
            CString::new("night").unwrap(),
            CString::new("gt").unwrap(),
            CString::new("mcap").unwrap(),
        ];
        let refs: Vec<&std::ffi::CStr> = values.iter().map(|v| v.as_c_str()).collect();
        vars.set_strings(&[0, 1, 2, 3, 4], &refs).unwrap();
        vars.set_booleans(&[1], &[true]).unwrap();

        let config = TraceSettings::from_variables(&vars).writer_config().unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/data"));
        assert_eq!(config.protobuf_version, "3.21.12");
        assert_eq!(config.custom_name, "night");
        assert_eq!(config.record_kind, RecordKind::GroundTruth);
        assert_eq!(config.format, TraceFormat::Container);
        assert!(config.omit_timestamp);
    }
}
