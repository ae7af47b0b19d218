use super::*;
use crate::{
    test_support::{ControlEvent, RecordingControl, RecordingNotifier},
    ui::{SharedPanel, SharedText},
};
use async_trait::async_trait;
use std::{sync::Mutex, time::Duration};

#[derive(Clone)]
enum Reply {
    Output(&'static str),
    Backend(Option<&'static str>),
    Malformed,
    Hang,
    Delayed(u64, &'static str),
}

#[derive(Clone)]
struct ScriptedBackend {
    reply: Reply,
    calls: Arc<Mutex<Vec<OperationRequest>>>,
}

impl ScriptedBackend {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> Vec<OperationRequest> {
        self.calls.lock().expect("calls").clone()
    }
}

#[async_trait]
impl CodecBackend for ScriptedBackend {
    async fn submit(&self, request: &OperationRequest) -> Result<String, OperationError> {
        self.calls.lock().expect("calls").push(request.clone());
        match &self.reply {
            Reply::Output(value) => Ok(value.to_string()),
            Reply::Backend(message) => Err(OperationError::Backend {
                mode: request.mode(),
                status: 400,
                message: message.map(str::to_string),
            }),
            Reply::Malformed => Err(serde_json::from_str::<serde_json::Value>("<html>")
                .expect_err("not json")
                .into()),
            Reply::Hang => futures::future::pending::<Result<String, OperationError>>().await,
            Reply::Delayed(millis, value) => {
                tokio::time::sleep(Duration::from_millis(*millis)).await;
                Ok(value.to_string())
            }
        }
    }
}

fn controller(
    reply: Reply,
) -> (
    OperationController<ScriptedBackend>,
    ScriptedBackend,
    RecordingNotifier,
) {
    let backend = ScriptedBackend::new(reply);
    let notifier = RecordingNotifier::default();
    let controller = OperationController::new(backend.clone(), Arc::new(notifier.clone()));
    (controller, backend, notifier)
}

#[tokio::test]
async fn encode_success_writes_output_and_notifies() {
    let (controller, backend, notifier) = controller(Reply::Output("SGVsbG8sIFdvcmxkIQ=="));
    let control = RecordingControl::new("Encode", true);
    let output = SharedText::default();

    let result = controller
        .perform_operation(Mode::Encode, "Hello, World!", &control, &output)
        .await;

    assert_eq!(
        result,
        OperationResult::Success {
            output: "SGVsbG8sIFdvcmxkIQ==".to_string()
        }
    );
    assert_eq!(output.text(), "SGVsbG8sIFdvcmxkIQ==");
    assert_eq!(
        notifier.seen(),
        vec![("Text encoded successfully!".to_string(), Severity::Success)]
    );
    assert_eq!(backend.calls().len(), 1);
    assert_eq!(backend.calls()[0].mode(), Mode::Encode);
}

#[tokio::test]
async fn decode_success_writes_output() {
    let (controller, _backend, notifier) = controller(Reply::Output("Hello, World!"));
    let control = RecordingControl::new("Decode", true);
    let output = SharedText::default();

    controller
        .perform_operation(Mode::Decode, "SGVsbG8sIFdvcmxkIQ==", &control, &output)
        .await;

    assert_eq!(output.text(), "Hello, World!");
    assert_eq!(
        notifier.last(),
        Some(("Text decoded successfully!".to_string(), Severity::Success))
    );
}

#[tokio::test]
async fn blank_input_never_reaches_backend_or_touches_control() {
    for (mode, input, message) in [
        (Mode::Encode, "", "Please enter text to encode"),
        (Mode::Encode, "   \n\t", "Please enter text to encode"),
        (Mode::Decode, " ", "Please enter base64 string to decode"),
    ] {
        let (controller, backend, notifier) = controller(Reply::Output("unused"));
        let control = RecordingControl::new("Run", true);
        let output = SharedText::new("previous");

        let result = controller
            .perform_operation(mode, input, &control, &output)
            .await;

        assert_eq!(result.message(), Some(message));
        assert!(backend.calls().is_empty());
        assert!(control.events().is_empty());
        assert_eq!(output.text(), "previous");
        assert_eq!(notifier.seen(), vec![(message.to_string(), Severity::Error)]);
    }
}

#[tokio::test]
async fn payload_is_sent_untrimmed() {
    let (controller, backend, _notifier) = controller(Reply::Output("x"));
    let control = RecordingControl::new("Encode", true);

    controller
        .perform_operation(Mode::Encode, "  padded\n", &control, &SharedText::default())
        .await;

    assert_eq!(backend.calls()[0].payload(), "  padded\n");
}

#[tokio::test]
async fn backend_error_passes_message_and_leaves_output() {
    let (controller, _backend, notifier) = controller(Reply::Backend(Some("invalid base64")));
    let control = RecordingControl::new("Decode", true);
    let output = SharedText::new("untouched");

    let result = controller
        .perform_operation(Mode::Decode, "abc", &control, &output)
        .await;

    assert_eq!(result.message(), Some("invalid base64"));
    assert_eq!(output.text(), "untouched");
    assert_eq!(
        notifier.seen(),
        vec![("invalid base64".to_string(), Severity::Error)]
    );
    assert!(control.is_enabled());
    assert_eq!(control.label(), "Decode");
}

#[tokio::test]
async fn backend_error_without_message_uses_generic_text() {
    let (controller, _backend, notifier) = controller(Reply::Backend(None));
    let control = RecordingControl::new("Encode", true);

    controller
        .perform_operation(Mode::Encode, "hi", &control, &SharedText::default())
        .await;

    assert_eq!(
        notifier.last(),
        Some(("Encoding failed".to_string(), Severity::Error))
    );
}

#[tokio::test]
async fn malformed_response_reports_network_error() {
    let (controller, _backend, notifier) = controller(Reply::Malformed);
    let control = RecordingControl::new("Encode", true);

    let result = controller
        .perform_operation(Mode::Encode, "hi", &control, &SharedText::default())
        .await;

    assert_eq!(result.message(), Some("Network error occurred"));
    assert_eq!(
        notifier.last(),
        Some(("Network error occurred".to_string(), Severity::Error))
    );
    assert!(control.is_enabled());
}

#[tokio::test]
async fn control_goes_busy_exactly_once_and_is_restored_on_every_outcome() {
    for reply in [
        Reply::Output("ok"),
        Reply::Backend(Some("nope")),
        Reply::Malformed,
    ] {
        let (controller, _backend, _notifier) = controller(reply);
        let control = RecordingControl::new("<b>Encode</b>", true);

        controller
            .perform_operation(Mode::Encode, "hi", &control, &SharedText::default())
            .await;

        assert_eq!(
            control.events(),
            vec![
                ControlEvent::Enabled(false),
                ControlEvent::Label("Encoding...".to_string()),
                ControlEvent::Label("<b>Encode</b>".to_string()),
                ControlEvent::Enabled(true),
            ]
        );
        assert_eq!(control.busy_transitions(), 1);
    }
}

#[tokio::test]
async fn restore_returns_the_captured_state_not_a_default() {
    let (controller, _backend, _notifier) = controller(Reply::Output("ok"));
    let control = RecordingControl::new("Custom", true);

    controller
        .perform_operation(Mode::Decode, "aGk=", &control, &SharedText::default())
        .await;

    assert_eq!(control.label(), "Custom");
    assert!(control.is_enabled());
}

#[tokio::test]
async fn disabled_control_is_refused_without_a_request() {
    let (controller, backend, notifier) = controller(Reply::Output("ok"));
    let control = RecordingControl::new("Encoding...", false);
    let output = SharedText::new("previous");

    let result = controller
        .perform_operation(Mode::Encode, "hi", &control, &output)
        .await;

    assert_eq!(
        result,
        OperationResult::Failure {
            message: "Encoding already in progress".to_string()
        }
    );
    assert!(backend.calls().is_empty());
    assert!(control.events().is_empty());
    assert_eq!(output.text(), "previous");
    assert_eq!(
        notifier.last(),
        Some(("Encoding already in progress".to_string(), Severity::Error))
    );
}

#[tokio::test(start_paused = true)]
async fn overlapping_operations_leave_the_control_idle() {
    let (controller, backend, _notifier) = controller(Reply::Delayed(50, "aGk="));
    let panel = SharedPanel::new(Mode::Encode);
    let output = SharedText::default();

    let first = controller.perform_operation(Mode::Encode, "hi", &panel.trigger, &output);
    let second = async {
        tokio::task::yield_now().await;
        controller
            .perform_operation(Mode::Encode, "hi again", &panel.trigger, &output)
            .await
    };
    let (first, second) = tokio::join!(first, second);

    assert!(first.is_success());
    assert_eq!(second.message(), Some("Encoding already in progress"));
    assert_eq!(backend.calls().len(), 1);

    let snapshot = panel.trigger.snapshot();
    assert_eq!(snapshot.label, "Encode");
    assert!(snapshot.enabled);
}

#[tokio::test]
async fn dropping_an_in_flight_operation_still_restores_the_control() {
    let (controller, _backend, notifier) = controller(Reply::Hang);
    let control = RecordingControl::new("Encode", true);
    let output = SharedText::default();

    let outcome = tokio::time::timeout(
        Duration::from_millis(20),
        controller.perform_operation(Mode::Encode, "hi", &control, &output),
    )
    .await;

    assert!(outcome.is_err());
    assert!(control.is_enabled());
    assert_eq!(control.label(), "Encode");
    assert!(notifier.seen().is_empty());
}

#[tokio::test]
async fn control_is_busy_while_request_is_in_flight() {
    let (controller, _backend, _notifier) = controller(Reply::Hang);
    let panel = SharedPanel::new(Mode::Decode);
    panel.input.set_text("aGk=");
    let bindings = UiBindings::from_shared(
        &SharedPanel::new(Mode::Encode),
        &panel,
        Arc::new(RecordingNotifier::default()),
    );

    let run = controller.run_panel(Mode::Decode, &bindings);
    tokio::pin!(run);
    assert!(futures::poll!(run.as_mut()).is_pending());

    let snapshot = panel.trigger.snapshot();
    assert!(!snapshot.enabled);
    assert_eq!(snapshot.label, "Decoding...");
}

#[tokio::test]
async fn run_panel_uses_the_panel_surfaces() {
    let (controller, backend, _notifier) = controller(Reply::Output("aGk="));
    let encode = SharedPanel::new(Mode::Encode);
    let decode = SharedPanel::new(Mode::Decode);
    encode.input.set_text("hi");
    let bindings = UiBindings::from_shared(&encode, &decode, Arc::new(RecordingNotifier::default()));

    let result = controller.run_panel(Mode::Encode, &bindings).await;

    assert!(result.is_success());
    assert_eq!(encode.output.text(), "aGk=");
    assert_eq!(decode.output.text(), "");
    assert_eq!(backend.calls()[0].payload(), "hi");
    assert_eq!(encode.trigger.snapshot().label, "Encode");
    assert!(encode.trigger.snapshot().enabled);
}
