//! `fmi2*` entry points.
//!
//! Every function forwards to [`Component`]. A NULL component is an error,
//! a panic is caught and reported as `fmi2Fatal`.

#![allow(non_snake_case)]
#![allow(clippy::missing_safety_doc)]

use std::ffi::CStr;
use std::panic::AssertUnwindSafe;

use crate::component::Component;
use crate::config::RuntimeOptions;
use crate::fmi2::{
    fmi2Boolean, fmi2Byte, fmi2CallbackFunctions, fmi2Component, fmi2FMUstate, fmi2Integer,
    fmi2Real, fmi2StatusKind, fmi2String, fmi2ValueReference, Fmi2Status, fmi2CoSimulation,
    fmi2False, fmi2True, FMI_VERSION, TYPES_PLATFORM,
};
use crate::logging::{HostLogSink, InstanceLogger, LogCategory, LogSink};

// -------------------------
// Helpers
// -------------------------

fn guarded(f: impl FnOnce() -> Fmi2Status) -> Fmi2Status {
    std::panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or(Fmi2Status::Fatal)
}

unsafe fn with_component(
    c: fmi2Component,
    function: &str,
    f: impl FnOnce(&mut Component) -> Fmi2Status,
) -> Fmi2Status {
    let Some(component) = (c as *mut Component).as_mut() else {
        return Fmi2Status::Error;
    };
    guarded(|| {
        component.logger_mut().fmi_call(function);
        f(component)
    })
}

/// `n` elements at `ptr`. An empty request never dereferences `ptr`; a NULL
/// `ptr` with `n > 0` is `None`.
unsafe fn raw_slice<'a, T>(ptr: *const T, n: usize) -> Option<&'a [T]> {
    if n == 0 {
        return Some(&[]);
    }
    if ptr.is_null() {
        return None;
    }
    Some(std::slice::from_raw_parts(ptr, n))
}

unsafe fn raw_slice_mut<'a, T>(ptr: *mut T, n: usize) -> Option<&'a mut [T]> {
    if n == 0 {
        return Some(&mut []);
    }
    if ptr.is_null() {
        return None;
    }
    Some(std::slice::from_raw_parts_mut(ptr, n))
}

unsafe fn c_str<'a>(s: fmi2String) -> &'a CStr {
    if s.is_null() {
        Default::default()
    } else {
        CStr::from_ptr(s)
    }
}

fn null_array(component: &mut Component, function: &str) -> Fmi2Status {
    component
        .logger_mut()
        .error(LogCategory::Fmi, format_args!("{function}: NULL array"));
    Fmi2Status::Error
}

/// Entries a get call filled before stopping.
fn filled(n: usize, result: &Result<(), crate::variables::OutOfRange>) -> usize {
    match result {
        Ok(()) => n,
        Err(err) => err.position,
    }
}

fn to_fmi_bool(v: bool) -> fmi2Boolean {
    if v {
        fmi2True
    } else {
        fmi2False
    }
}

// -------------------------
// Inquiry and logging
// -------------------------

#[no_mangle]
pub extern "C" fn fmi2GetTypesPlatform() -> *const std::ffi::c_char {
    TYPES_PLATFORM.as_ptr().cast()
}

#[no_mangle]
pub extern "C" fn fmi2GetVersion() -> *const std::ffi::c_char {
    FMI_VERSION.as_ptr().cast()
}

#[no_mangle]
pub unsafe extern "C" fn fmi2SetDebugLogging(
    c: fmi2Component,
    loggingOn: fmi2Boolean,
    nCategories: usize,
    categories: *const fmi2String,
) -> Fmi2Status {
    with_component(c, "fmi2SetDebugLogging", |component| {
        let names: Vec<String> = match raw_slice(categories, nCategories) {
            Some(raw) => raw
                .iter()
                .map(|&s| c_str(s).to_string_lossy().into_owned())
                .collect(),
            // A NULL array with a count means "all categories".
            None => Vec::new(),
        };
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let logger = component.logger_mut();
        let unknown = logger.set_debug_logging(loggingOn != fmi2False, &names);
        for name in unknown {
            logger.warn(
                LogCategory::Fmi,
                format_args!("ignoring unknown log category {name:?}"),
            );
        }
        Fmi2Status::Ok
    })
}

// -------------------------
// Instance lifecycle
// -------------------------

#[no_mangle]
pub unsafe extern "C" fn fmi2Instantiate(
    instanceName: fmi2String,
    fmuType: std::ffi::c_int,
    fmuGUID: fmi2String,
    fmuResourceLocation: fmi2String,
    functions: *const fmi2CallbackFunctions,
    visible: fmi2Boolean,
    loggingOn: fmi2Boolean,
) -> fmi2Component {
    let res = std::panic::catch_unwind(AssertUnwindSafe(|| {
        let name = c_str(instanceName).to_string_lossy().into_owned();
        let sink = functions
            .as_ref()
            .and_then(|f| HostLogSink::new(f, &name))
            .map(|s| Box::new(s) as Box<dyn LogSink>);
        let options = RuntimeOptions::from_env();
        let mut logger = InstanceLogger::new(&name, sink, &options, loggingOn != fmi2False);

        if fmuType != fmi2CoSimulation {
            logger.error(
                LogCategory::Fmi,
                format_args!("fmi2Instantiate: only co-simulation is supported (type {fmuType})"),
            );
            return std::ptr::null_mut();
        }
        logger.fmi_call("fmi2Instantiate");
        logger.info(
            LogCategory::Fmi,
            format_args!(
                "instantiated (guid {:?}, resources {:?}, visible {})",
                c_str(fmuGUID).to_string_lossy(),
                c_str(fmuResourceLocation).to_string_lossy(),
                visible != fmi2False
            ),
        );
        Box::into_raw(Box::new(Component::new(logger))) as fmi2Component
    }));
    res.unwrap_or(std::ptr::null_mut())
}

#[no_mangle]
pub unsafe extern "C" fn fmi2FreeInstance(c: fmi2Component) {
    if c.is_null() {
        return;
    }
    let _ = std::panic::catch_unwind(AssertUnwindSafe(|| {
        let mut component = Box::from_raw(c as *mut Component);
        component.logger_mut().fmi_call("fmi2FreeInstance");
        drop(component);
    }));
}

#[no_mangle]
pub unsafe extern "C" fn fmi2SetupExperiment(
    c: fmi2Component,
    toleranceDefined: fmi2Boolean,
    tolerance: fmi2Real,
    startTime: fmi2Real,
    stopTimeDefined: fmi2Boolean,
    stopTime: fmi2Real,
) -> Fmi2Status {
    with_component(c, "fmi2SetupExperiment", |component| {
        let tolerance = (toleranceDefined != fmi2False).then_some(tolerance);
        let stop_time = (stopTimeDefined != fmi2False).then_some(stopTime);
        component.setup_experiment(tolerance, startTime, stop_time)
    })
}

#[no_mangle]
pub unsafe extern "C" fn fmi2EnterInitializationMode(c: fmi2Component) -> Fmi2Status {
    with_component(c, "fmi2EnterInitializationMode", Component::enter_initialization_mode)
}

#[no_mangle]
pub unsafe extern "C" fn fmi2ExitInitializationMode(c: fmi2Component) -> Fmi2Status {
    with_component(c, "fmi2ExitInitializationMode", Component::exit_initialization_mode)
}

#[no_mangle]
pub unsafe extern "C" fn fmi2DoStep(
    c: fmi2Component,
    currentCommunicationPoint: fmi2Real,
    communicationStepSize: fmi2Real,
    _noSetFMUStatePriorToCurrentPoint: fmi2Boolean,
) -> Fmi2Status {
    with_component(c, "fmi2DoStep", |component| {
        component.do_step(currentCommunicationPoint, communicationStepSize)
    })
}

#[no_mangle]
pub unsafe extern "C" fn fmi2Terminate(c: fmi2Component) -> Fmi2Status {
    with_component(c, "fmi2Terminate", Component::terminate)
}

#[no_mangle]
pub unsafe extern "C" fn fmi2Reset(c: fmi2Component) -> Fmi2Status {
    with_component(c, "fmi2Reset", Component::reset)
}

// -------------------------
// Variable access
// -------------------------

#[no_mangle]
pub unsafe extern "C" fn fmi2GetReal(
    c: fmi2Component,
    vr: *const fmi2ValueReference,
    nvr: usize,
    value: *mut fmi2Real,
) -> Fmi2Status {
    with_component(c, "fmi2GetReal", |component| {
        let (Some(refs), Some(out)) = (raw_slice(vr, nvr), raw_slice_mut(value, nvr)) else {
            return null_array(component, "fmi2GetReal");
        };
        let res = component.variables().get_reals(refs, out);
        component.access_status("fmi2GetReal", res)
    })
}

#[no_mangle]
pub unsafe extern "C" fn fmi2GetInteger(
    c: fmi2Component,
    vr: *const fmi2ValueReference,
    nvr: usize,
    value: *mut fmi2Integer,
) -> Fmi2Status {
    with_component(c, "fmi2GetInteger", |component| {
        let (Some(refs), Some(out)) = (raw_slice(vr, nvr), raw_slice_mut(value, nvr)) else {
            return null_array(component, "fmi2GetInteger");
        };
        let res = component.variables().get_integers(refs, out);
        component.access_status("fmi2GetInteger", res)
    })
}

#[no_mangle]
pub unsafe extern "C" fn fmi2GetBoolean(
    c: fmi2Component,
    vr: *const fmi2ValueReference,
    nvr: usize,
    value: *mut fmi2Boolean,
) -> Fmi2Status {
    with_component(c, "fmi2GetBoolean", |component| {
        let (Some(refs), Some(out)) = (raw_slice(vr, nvr), raw_slice_mut(value, nvr)) else {
            return null_array(component, "fmi2GetBoolean");
        };
        let mut values = vec![false; nvr];
        let res = component.variables().get_booleans(refs, &mut values);
        let n = filled(nvr, &res);
        for (dst, &v) in out.iter_mut().zip(&values[..n]) {
            *dst = to_fmi_bool(v);
        }
        component.access_status("fmi2GetBoolean", res)
    })
}

/// The returned strings stay valid until the next set call or reset.
#[no_mangle]
pub unsafe extern "C" fn fmi2GetString(
    c: fmi2Component,
    vr: *const fmi2ValueReference,
    nvr: usize,
    value: *mut fmi2String,
) -> Fmi2Status {
    with_component(c, "fmi2GetString", |component| {
        let (Some(refs), Some(out)) = (raw_slice(vr, nvr), raw_slice_mut(value, nvr)) else {
            return null_array(component, "fmi2GetString");
        };
        let mut values: Vec<&CStr> = vec![Default::default(); nvr];
        let res = component.variables().get_strings(refs, &mut values);
        let n = filled(nvr, &res);
        for (dst, v) in out.iter_mut().zip(&values[..n]) {
            *dst = v.as_ptr();
        }
        component.access_status("fmi2GetString", res)
    })
}

#[no_mangle]
pub unsafe extern "C" fn fmi2SetReal(
    c: fmi2Component,
    vr: *const fmi2ValueReference,
    nvr: usize,
    value: *const fmi2Real,
) -> Fmi2Status {
    with_component(c, "fmi2SetReal", |component| {
        let (Some(refs), Some(values)) = (raw_slice(vr, nvr), raw_slice(value, nvr)) else {
            return null_array(component, "fmi2SetReal");
        };
        let res = component.variables_mut().set_reals(refs, values);
        component.access_status("fmi2SetReal", res)
    })
}

#[no_mangle]
pub unsafe extern "C" fn fmi2SetInteger(
    c: fmi2Component,
    vr: *const fmi2ValueReference,
    nvr: usize,
    value: *const fmi2Integer,
) -> Fmi2Status {
    with_component(c, "fmi2SetInteger", |component| {
        let (Some(refs), Some(values)) = (raw_slice(vr, nvr), raw_slice(value, nvr)) else {
            return null_array(component, "fmi2SetInteger");
        };
        let res = component.variables_mut().set_integers(refs, values);
        component.access_status("fmi2SetInteger", res)
    })
}

#[no_mangle]
pub unsafe extern "C" fn fmi2SetBoolean(
    c: fmi2Component,
    vr: *const fmi2ValueReference,
    nvr: usize,
    value: *const fmi2Boolean,
) -> Fmi2Status {
    with_component(c, "fmi2SetBoolean", |component| {
        let (Some(refs), Some(values)) = (raw_slice(vr, nvr), raw_slice(value, nvr)) else {
            return null_array(component, "fmi2SetBoolean");
        };
        let values: Vec<bool> = values.iter().map(|&v| v != fmi2False).collect();
        let res = component.variables_mut().set_booleans(refs, &values);
        component.access_status("fmi2SetBoolean", res)
    })
}

/// NULL strings are stored as empty strings.
#[no_mangle]
pub unsafe extern "C" fn fmi2SetString(
    c: fmi2Component,
    vr: *const fmi2ValueReference,
    nvr: usize,
    value: *const fmi2String,
) -> Fmi2Status {
    with_component(c, "fmi2SetString", |component| {
        let (Some(refs), Some(values)) = (raw_slice(vr, nvr), raw_slice(value, nvr)) else {
            return null_array(component, "fmi2SetString");
        };
        let values: Vec<&CStr> = values.iter().map(|&s| c_str(s)).collect();
        let res = component.variables_mut().set_strings(refs, &values);
        component.access_status("fmi2SetString", res)
    })
}

// -------------------------
// Unsupported
// -------------------------

unsafe fn unsupported(c: fmi2Component, function: &str, status: Fmi2Status) -> Fmi2Status {
    with_component(c, function, |component| {
        component
            .logger_mut()
            .warn(LogCategory::Fmi, format_args!("{function} is not supported"));
        status
    })
}

#[no_mangle]
pub unsafe extern "C" fn fmi2GetFMUstate(c: fmi2Component, _FMUstate: *mut fmi2FMUstate) -> Fmi2Status {
    unsupported(c, "fmi2GetFMUstate", Fmi2Status::Error)
}

#[no_mangle]
pub unsafe extern "C" fn fmi2SetFMUstate(c: fmi2Component, _FMUstate: fmi2FMUstate) -> Fmi2Status {
    unsupported(c, "fmi2SetFMUstate", Fmi2Status::Error)
}

#[no_mangle]
pub unsafe extern "C" fn fmi2FreeFMUstate(c: fmi2Component, _FMUstate: *mut fmi2FMUstate) -> Fmi2Status {
    unsupported(c, "fmi2FreeFMUstate", Fmi2Status::Error)
}

#[no_mangle]
pub unsafe extern "C" fn fmi2SerializedFMUstateSize(
    c: fmi2Component,
    _FMUstate: fmi2FMUstate,
    _size: *mut usize,
) -> Fmi2Status {
    unsupported(c, "fmi2SerializedFMUstateSize", Fmi2Status::Error)
}

#[no_mangle]
pub unsafe extern "C" fn fmi2SerializeFMUstate(
    c: fmi2Component,
    _FMUstate: fmi2FMUstate,
    _serializedState: *mut fmi2Byte,
    _size: usize,
) -> Fmi2Status {
    unsupported(c, "fmi2SerializeFMUstate", Fmi2Status::Error)
}

#[no_mangle]
pub unsafe extern "C" fn fmi2DeSerializeFMUstate(
    c: fmi2Component,
    _serializedState: *const fmi2Byte,
    _size: usize,
    _FMUstate: *mut fmi2FMUstate,
) -> Fmi2Status {
    unsupported(c, "fmi2DeSerializeFMUstate", Fmi2Status::Error)
}

#[no_mangle]
pub unsafe extern "C" fn fmi2GetDirectionalDerivative(
    c: fmi2Component,
    _vUnknown_ref: *const fmi2ValueReference,
    _nUnknown: usize,
    _vKnown_ref: *const fmi2ValueReference,
    _nKnown: usize,
    _dvKnown: *const fmi2Real,
    _dvUnknown: *mut fmi2Real,
) -> Fmi2Status {
    unsupported(c, "fmi2GetDirectionalDerivative", Fmi2Status::Error)
}

#[no_mangle]
pub unsafe extern "C" fn fmi2SetRealInputDerivatives(
    c: fmi2Component,
    _vr: *const fmi2ValueReference,
    _nvr: usize,
    _order: *const fmi2Integer,
    _value: *const fmi2Real,
) -> Fmi2Status {
    unsupported(c, "fmi2SetRealInputDerivatives", Fmi2Status::Error)
}

#[no_mangle]
pub unsafe extern "C" fn fmi2GetRealOutputDerivatives(
    c: fmi2Component,
    _vr: *const fmi2ValueReference,
    _nvr: usize,
    _order: *const fmi2Integer,
    _value: *mut fmi2Real,
) -> Fmi2Status {
    unsupported(c, "fmi2GetRealOutputDerivatives", Fmi2Status::Error)
}

#[no_mangle]
pub unsafe extern "C" fn fmi2CancelStep(c: fmi2Component) -> Fmi2Status {
    unsupported(c, "fmi2CancelStep", Fmi2Status::Error)
}

#[no_mangle]
pub unsafe extern "C" fn fmi2GetStatus(
    c: fmi2Component,
    _s: fmi2StatusKind,
    _value: *mut Fmi2Status,
) -> Fmi2Status {
    unsupported(c, "fmi2GetStatus", Fmi2Status::Discard)
}

#[no_mangle]
pub unsafe extern "C" fn fmi2GetRealStatus(
    c: fmi2Component,
    _s: fmi2StatusKind,
    _value: *mut fmi2Real,
) -> Fmi2Status {
    unsupported(c, "fmi2GetRealStatus", Fmi2Status::Discard)
}

#[no_mangle]
pub unsafe extern "C" fn fmi2GetIntegerStatus(
    c: fmi2Component,
    _s: fmi2StatusKind,
    _value: *mut fmi2Integer,
) -> Fmi2Status {
    unsupported(c, "fmi2GetIntegerStatus", Fmi2Status::Discard)
}

#[no_mangle]
pub unsafe extern "C" fn fmi2GetBooleanStatus(
    c: fmi2Component,
    _s: fmi2StatusKind,
    _value: *mut fmi2Boolean,
) -> Fmi2Status {
    unsupported(c, "fmi2GetBooleanStatus", Fmi2Status::Discard)
}

#[no_mangle]
pub unsafe extern "C" fn fmi2GetStringStatus(
    c: fmi2Component,
    _s: fmi2StatusKind,
    _value: *mut fmi2String,
) -> Fmi2Status {
    unsupported(c, "fmi2GetStringStatus", Fmi2Status::Discard)
}
