use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::Error;

use anyhow::Context;

use tracing::{subscriber::set_global_default, Span, Subscriber};

use tracing_actix_web::{DefaultRootSpanBuilder, RootSpanBuilder};

use tracing_log::LogTracer;

use tracing_subscriber::fmt::{self, format::FmtSpan, MakeWriter};
use tracing_subscriber::EnvFilter;

use crate::envelope::EnvelopeSummary;

/// Build a formatting subscriber. Span close events carry the request duration.
pub fn create_subscriber<Sink>(env_filter: &str, sink: Sink) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    fmt::fmt()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_writer(sink)
        .finish()
}

/// Install the subscriber globally and route `log` records into it
pub fn set_subscriber(subscriber: impl Subscriber + Send + Sync) -> anyhow::Result<()> {
    LogTracer::init().context("Failed to initalize logging")?;

    set_global_default(subscriber).context("Failed to set global subscriber")
}

/// Request root span that also records the (truncated) response envelope
pub struct EnvelopeRootSpanBuilder;

impl RootSpanBuilder for EnvelopeRootSpanBuilder {
    fn on_request_start(request: &ServiceRequest) -> Span {
        tracing_actix_web::root_span!(request, response.body = tracing::field::Empty)
    }

    fn on_request_end<B: MessageBody>(span: Span, outcome: &Result<ServiceResponse<B>, Error>) {
        if let Ok(res) = outcome {
            if let Some(summary) = res.response().extensions().get::<EnvelopeSummary>() {
                span.record("response.body", summary.0.as_str());
            }
        }
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}
