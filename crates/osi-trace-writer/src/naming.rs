use chrono::Utc;

use crate::record::InterfaceVersion;
use crate::writer::TraceWriterConfig;

/// Start time used in file names when timestamps are suppressed.
pub const ZERO_TIMESTAMP: &str = "00000000T000000Z";

pub(crate) fn start_time(omit_timestamp: bool) -> String {
    if omit_timestamp {
        ZERO_TIMESTAMP.to_string()
    } else {
        Utc::now().format("%Y%m%dT%H%M%SZ").to_string()
    }
}

/// `<start>_<kind>[_<custom>]<ext>`
pub fn working_file_name(config: &TraceWriterConfig, start_time: &str) -> String {
    let mut name = format!("{start_time}_{}", config.record_kind.as_str());
    push_custom_name(&mut name, config);
    name.push_str(config.format.extension());
    name
}

/// `<start>_<kind>_<osi>_<protobuf>_<frames>[_<custom>]<ext>`
///
/// `observed` is `None` when no record was written; the OSI version part is
/// then left empty rather than guessed.
pub fn final_file_name(
    config: &TraceWriterConfig,
    start_time: &str,
    observed: Option<&InterfaceVersion>,
    frames: u64,
) -> String {
    let osi_version = observed
        .map(InterfaceVersion::file_name_fragment)
        .unwrap_or_default();
    let mut name = format!(
        "{start_time}_{}_{osi_version}_{}_{frames}",
        config.record_kind.as_str(),
        config.protobuf_version
    );
    push_custom_name(&mut name, config);
    name.push_str(config.format.extension());
    name
}

fn push_custom_name(name: &mut String, config: &TraceWriterConfig) {
    if !config.custom_name.is_empty() {
        name.push('_');
        name.push_str(&config.custom_name);
    }
}
