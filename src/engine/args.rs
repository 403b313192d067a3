// ctxlog/src/engine/args.rs
//
// The argument shapes accepted by leveled log calls, modelled as an
// explicit tagged union instead of runtime shape inspection.

use super::{Bindings, Value};

/// One leveled log call's arguments.
///
/// Mirrors the three conventional structured-logging call shapes:
/// a message with optional printf-style params, a payload object with an
/// optional message, or an error with an optional message override. The
/// engine interprets the shape; the façade only forwards it.
#[derive(Debug, Clone)]
pub enum LogArgs {
    /// `(message, ...params)`
    Message { template: String, params: Vec<Value> },
    /// `(payload, message?, ...params)`
    Payload {
        fields: Bindings,
        message: Option<String>,
        params: Vec<Value>,
    },
    /// `(error, message?, ...params)`
    Failure {
        error: ErrorInfo,
        message: Option<String>,
        params: Vec<Value>,
    },
}

impl LogArgs {
    /// A plain message.
    pub fn message(template: impl Into<String>) -> Self {
        LogArgs::Message {
            template: template.into(),
            params: Vec::new(),
        }
    }

    /// A message template with `%s`/`%d`/`%j` placeholder params.
    pub fn format(template: impl Into<String>, params: Vec<Value>) -> Self {
        LogArgs::Message {
            template: template.into(),
            params,
        }
    }

    /// A payload object logged as top-level fields.
    pub fn payload(fields: Bindings) -> Self {
        LogArgs::Payload {
            fields,
            message: None,
            params: Vec::new(),
        }
    }

    /// A payload object together with a message.
    pub fn payload_message(fields: Bindings, message: impl Into<String>) -> Self {
        LogArgs::Payload {
            fields,
            message: Some(message.into()),
            params: Vec::new(),
        }
    }

    /// A payload object together with a message template and params.
    pub fn payload_format(
        fields: Bindings,
        template: impl Into<String>,
        params: Vec<Value>,
    ) -> Self {
        LogArgs::Payload {
            fields,
            message: Some(template.into()),
            params,
        }
    }

    /// An error; the entry's message defaults to the error's own message.
    pub fn failure(error: ErrorInfo) -> Self {
        LogArgs::Failure {
            error,
            message: None,
            params: Vec::new(),
        }
    }

    /// An error with a message override.
    pub fn failure_message(error: ErrorInfo, message: impl Into<String>) -> Self {
        LogArgs::Failure {
            error,
            message: Some(message.into()),
            params: Vec::new(),
        }
    }

    /// An error with a message template and params.
    pub fn failure_format(
        error: ErrorInfo,
        template: impl Into<String>,
        params: Vec<Value>,
    ) -> Self {
        LogArgs::Failure {
            error,
            message: Some(template.into()),
            params,
        }
    }
}

impl From<&str> for LogArgs {
    fn from(message: &str) -> Self {
        LogArgs::message(message)
    }
}

impl From<String> for LogArgs {
    fn from(message: String) -> Self {
        LogArgs::message(message)
    }
}

impl From<Bindings> for LogArgs {
    fn from(fields: Bindings) -> Self {
        LogArgs::payload(fields)
    }
}

impl From<ErrorInfo> for LogArgs {
    fn from(error: ErrorInfo) -> Self {
        LogArgs::failure(error)
    }
}

/// An error-like value: at minimum a type name and a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// The error's type name, logged under the `type` key.
    pub kind: String,
    /// The error's message.
    pub message: String,
}

impl ErrorInfo {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorInfo {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Build from any concrete error, using its (unqualified) type name.
    pub fn from_error<E: std::error::Error>(err: &E) -> Self {
        let kind = std::any::type_name::<E>()
            .rsplit("::")
            .next()
            .unwrap_or("Error");
        ErrorInfo::new(kind, err.to_string())
    }
}
