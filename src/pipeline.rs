//! The per-request synthesis state machine.
//!
//! ```text
//! Validating -> Building -> Resolving -> Serializing -> Done
//!      |                        |
//!      +--------> Failed <------+
//! ```
//!
//! Each state owns the value the next stage consumes, so a document is only
//! ever reachable from one request and never from a failed one.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use admin::{AdminResolver, ResolveError};
use document::{DocumentError, Layer, PlaceDocument};
use ingest::{IngestError, RawPlaceParams, ValidatedPlace};
use tracing::{Instrument, info, info_span, warn};

use crate::enrich::resolve_hierarchy;
use crate::generate::generate;
use crate::metrics::metrics_recorder;

/// One synthesis request after routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub source: String,
    pub layer: Layer,
    pub params: RawPlaceParams,
}

impl SynthesisRequest {
    pub fn new(source: impl Into<String>, layer: Layer, params: RawPlaceParams) -> Self {
        Self {
            source: source.into(),
            layer,
            params,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Validating,
    Building,
    Resolving,
    Serializing,
    Done,
    Failed,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Validating => "validating",
            PipelineStage::Building => "building",
            PipelineStage::Resolving => "resolving",
            PipelineStage::Serializing => "serializing",
            PipelineStage::Done => "done",
            PipelineStage::Failed => "failed",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a failure is reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    BadRequest,
    ServerError,
}

/// Errors that end a synthesis before a document is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    Validation(IngestError),
    Resolution(ResolveError),
    Serialization(DocumentError),
}

impl PipelineError {
    pub fn classification(&self) -> Classification {
        match self {
            PipelineError::Validation(_) => Classification::BadRequest,
            PipelineError::Resolution(_) | PipelineError::Serialization(_) => {
                Classification::ServerError
            }
        }
    }

    pub fn http_status_code(&self) -> u16 {
        match self.classification() {
            Classification::BadRequest => 400,
            Classification::ServerError => 500,
        }
    }

    pub fn failed_stage(&self) -> PipelineStage {
        match self {
            PipelineError::Validation(_) => PipelineStage::Validating,
            PipelineError::Resolution(_) => PipelineStage::Resolving,
            PipelineError::Serialization(_) => PipelineStage::Serializing,
        }
    }

    /// Exact text returned to the caller.
    ///
    /// Rejection messages and resolver content are passed through unchanged.
    pub fn body(&self) -> String {
        match self {
            PipelineError::Validation(err) => err.to_string(),
            PipelineError::Resolution(err) => err.body().to_string(),
            PipelineError::Serialization(err) => err.to_string(),
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Validation(err) => write!(f, "validation failure: {err}"),
            PipelineError::Resolution(err) => write!(f, "admin lookup failure: {err}"),
            PipelineError::Serialization(err) => write!(f, "serialization failure: {err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Validation(err) => Some(err),
            PipelineError::Resolution(err) => Some(err),
            PipelineError::Serialization(err) => Some(err),
        }
    }
}

impl From<IngestError> for PipelineError {
    fn from(value: IngestError) -> Self {
        PipelineError::Validation(value)
    }
}

impl From<ResolveError> for PipelineError {
    fn from(value: ResolveError) -> Self {
        PipelineError::Resolution(value)
    }
}

impl From<DocumentError> for PipelineError {
    fn from(value: DocumentError) -> Self {
        PipelineError::Serialization(value)
    }
}

/// A request's position in the pipeline, carrying the value owned by that stage.
#[derive(Debug)]
pub enum PipelineState {
    Validating(SynthesisRequest),
    Building(ValidatedPlace),
    Resolving(PlaceDocument),
    Serializing(PlaceDocument),
    Done(serde_json::Value),
    Failed(PipelineError),
}

impl PipelineState {
    pub fn new(request: SynthesisRequest) -> Self {
        PipelineState::Validating(request)
    }

    pub fn stage(&self) -> PipelineStage {
        match self {
            PipelineState::Validating(_) => PipelineStage::Validating,
            PipelineState::Building(_) => PipelineStage::Building,
            PipelineState::Resolving(_) => PipelineStage::Resolving,
            PipelineState::Serializing(_) => PipelineStage::Serializing,
            PipelineState::Done(_) => PipelineStage::Done,
            PipelineState::Failed(_) => PipelineStage::Failed,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Done(_) | PipelineState::Failed(_))
    }

    /// Perform exactly one transition. Terminal states return themselves.
    pub async fn advance(self, resolver: &dyn AdminResolver) -> PipelineState {
        match self {
            PipelineState::Validating(request) => {
                match ingest::validate(request.source, request.layer, request.params) {
                    Ok(place) => PipelineState::Building(place),
                    Err(err) => PipelineState::Failed(err.into()),
                }
            }
            PipelineState::Building(place) => PipelineState::Resolving(generate(place)),
            PipelineState::Resolving(doc) => match resolve_hierarchy(doc, resolver).await {
                Ok(doc) => PipelineState::Serializing(doc),
                Err(err) => PipelineState::Failed(err.into()),
            },
            PipelineState::Serializing(doc) => match doc.to_output() {
                Ok(output) => PipelineState::Done(output),
                Err(err) => PipelineState::Failed(err.into()),
            },
            terminal @ (PipelineState::Done(_) | PipelineState::Failed(_)) => terminal,
        }
    }
}

/// Run one request through every stage and return the output document.
pub async fn synthesize(
    request: SynthesisRequest,
    resolver: &dyn AdminResolver,
) -> Result<serde_json::Value, PipelineError> {
    let span = info_span!("synthesize", source = %request.source, layer = %request.layer);
    run(request, resolver).instrument(span).await
}

async fn run(
    request: SynthesisRequest,
    resolver: &dyn AdminResolver,
) -> Result<serde_json::Value, PipelineError> {
    let start = Instant::now();
    let layer = request.layer;
    let mut state = PipelineState::new(request);

    let result = loop {
        state = match state {
            PipelineState::Done(output) => break Ok(output),
            PipelineState::Failed(err) => break Err(err),
            pending => pending.advance(resolver).await,
        };
    };

    let latency = start.elapsed();
    match &result {
        Ok(_) => info!(
            elapsed_micros = latency.as_micros(),
            "synthesize_success"
        ),
        Err(err) => warn!(
            stage = %err.failed_stage(),
            status = err.http_status_code(),
            error = %err,
            elapsed_micros = latency.as_micros(),
            "synthesize_failure"
        ),
    }

    if let Some(recorder) = metrics_recorder() {
        recorder.record_synthesis(layer, latency, result.as_ref().map(|_| ()));
    }

    result
}
