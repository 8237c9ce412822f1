//! In-memory capture of log events for test assertions

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::nwbeq_core_types::schema::{
    FIELD_CATEGORY, FIELD_CHECK_ID, FIELD_COMPONENT, FIELD_DURATION_MS, FIELD_ERR_CODE,
    FIELD_ERR_KIND, FIELD_EVENT, FIELD_FAILURE_COUNT, FIELD_FIELDS_CHECKED, FIELD_OP, FIELD_PATH,
    FIELD_TYPE_TAG,
};

/// A captured log event with all its fields rendered as strings
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn check_id(&self) -> Option<&str> {
        self.field(FIELD_CHECK_ID)
    }

    pub fn type_tag(&self) -> Option<&str> {
        self.field(FIELD_TYPE_TAG)
    }

    pub fn path(&self) -> Option<&str> {
        self.field(FIELD_PATH)
    }

    pub fn category(&self) -> Option<&str> {
        self.field(FIELD_CATEGORY)
    }

    pub fn err_kind(&self) -> Option<&str> {
        self.field(FIELD_ERR_KIND)
    }

    pub fn err_code(&self) -> Option<&str> {
        self.field(FIELD_ERR_CODE)
    }

    /// Numeric fields are rendered as strings; these parse them back
    pub fn duration_ms(&self) -> Option<u64> {
        self.field(FIELD_DURATION_MS)?.parse().ok()
    }

    pub fn fields_checked(&self) -> Option<usize> {
        self.field(FIELD_FIELDS_CHECKED)?.parse().ok()
    }

    pub fn failure_count(&self) -> Option<usize> {
        self.field(FIELD_FAILURE_COUNT)?.parse().ok()
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: HashMap<String, String>,
}

impl FieldVisitor {
    fn insert(&mut self, field: &Field, value: String) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.insert(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.to_string());
    }
}

/// Layer that appends every event to a shared buffer
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            events: events.clone(),
        };
        (layer, TestCapture { events })
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            component: visitor.fields.get(FIELD_COMPONENT).cloned(),
            op: visitor.fields.get(FIELD_OP).cloned(),
            event: visitor.fields.get(FIELD_EVENT).cloned(),
            fields: visitor.fields,
        };

        self.events
            .lock()
            .map(|mut events| events.push(captured))
            .ok();
    }
}

/// Handle for reading captured events
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events belonging to one comparison run
    pub fn events_for_check(&self, check_id: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.check_id() == Some(check_id))
            .collect()
    }

    /// # Panics
    ///
    /// Panics if no event has the given `op` and `event` values.
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        let found = events
            .iter()
            .any(|e| e.op.as_deref() == Some(op) && e.event.as_deref() == Some(event));
        assert!(
            found,
            "Expected event op={} event={} not found in {} captured events",
            op,
            event,
            events.len()
        );
    }

    pub fn clear(&self) {
        self.events.lock().map(|mut e| e.clear()).ok();
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber
///
/// The first call installs it; later calls share the same buffer, so
/// tests running in one process should filter by `check_id` or `op`.
///
/// ```
/// use nwbeq_core::logging_facility::test_capture::init_test_capture;
/// use nwbeq_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_op");
/// capture.assert_event_exists("doc_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            tracing_subscriber::registry().with(layer).try_init().ok();
            capture
        })
        .clone()
}


#[cfg(test)]
mod accessor_tests {
    use super::*;

    #[test]
    fn test_numeric_fields_parse_back() {
        let fields: HashMap<String, String> = [
            (FIELD_DURATION_MS, "7"),
            (FIELD_FIELDS_CHECKED, "13"),
            (FIELD_FAILURE_COUNT, "2"),
            (FIELD_ERR_KIND, "LengthMismatch"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let event = CapturedEvent {
            level: Level::INFO,
            component: None,
            op: Some("check".to_string()),
            event: Some("end".to_string()),
            fields,
        };

        assert_eq!(event.duration_ms(), Some(7));
        assert_eq!(event.fields_checked(), Some(13));
        assert_eq!(event.failure_count(), Some(2));
        assert_eq!(event.err_kind(), Some("LengthMismatch"));
        assert_eq!(event.err_code(), None);
    }
}
