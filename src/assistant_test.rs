use super::*;
use crate::color::RawColorRecord;
use crate::host::{HostContext, HostError};
use serde_json::json;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

// =========================================================================
// Fakes
// =========================================================================

struct MockSource {
    response: Result<serde_json::Value, u16>,
    calls: AtomicUsize,
}

impl MockSource {
    fn list(list: serde_json::Value) -> Arc<Self> {
        Arc::new(Self { response: Ok(list), calls: AtomicUsize::new(0) })
    }

    fn status(status: u16) -> Arc<Self> {
        Arc::new(Self { response: Err(status), calls: AtomicUsize::new(0) })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ColorSource for MockSource {
    async fn fetch_colors(&self) -> Result<Vec<RawColorRecord>, ColorApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(list) => Ok(serde_json::from_value(list.clone()).unwrap()),
            Err(status) => Err(ColorApiError::Status { status: *status, body: "boom".into() }),
        }
    }
}

struct FakeHost {
    path: Option<String>,
    can_insert: bool,
    inserted: Mutex<Vec<String>>,
}

impl FakeHost {
    fn at(path: &str) -> Self {
        Self { path: Some(path.into()), can_insert: true, inserted: Mutex::new(Vec::new()) }
    }

    fn disconnected(path: &str) -> Self {
        Self { can_insert: false, ..Self::at(path) }
    }
}

#[async_trait::async_trait]
impl EditorHost for FakeHost {
    async fn context(&self) -> HostContext {
        HostContext { path: self.path.clone() }
    }

    async fn insert_html(&self, html: &str) -> Result<(), HostError> {
        if !self.can_insert {
            return Err(HostError::Unavailable);
        }
        self.inserted.lock().unwrap().push(html.to_owned());
        Ok(())
    }
}

fn behr_list() -> serde_json::Value {
    json!([
        { "colorCode": "BEHR-000", "colorName": "Other" },
        {
            "colorCode": "BEHR-001",
            "colorName": "Polar Bear",
            "rgbHex": "#F2EFE4",
            "r": 242, "g": 239, "b": 228,
            "lrv": "86",
            "colorFamily": "White",
            "colorCollection": "Designer Collection"
        }
    ])
}

// =========================================================================
// extract_color_code
// =========================================================================

#[test]
fn extract_code_from_detail_path() {
    assert_eq!(extract_color_code("/colors/color-detail/BEHR-001"), Some("BEHR-001"));
}

#[test]
fn extract_code_is_verbatim() {
    assert_eq!(extract_color_code("/colors/color-detail/PPU5%2010"), Some("PPU5%2010"));
}

#[test]
fn extract_code_rejects_other_paths() {
    assert_eq!(extract_color_code("/other/page"), None);
    assert_eq!(extract_color_code("/colors/color-detail/"), None);
    assert_eq!(extract_color_code("/colors/color-detail/A/B"), None);
    assert_eq!(extract_color_code("/colors/color-detail/A/"), None);
    assert_eq!(extract_color_code("/en/colors/color-detail/A"), None);
}

// =========================================================================
// open
// =========================================================================

#[tokio::test]
async fn open_detail_page_shows_preview_and_enables_insert() {
    let source = MockSource::list(behr_list());
    let assistant = ColorMetadataAssistant::new(source.clone());
    let host = FakeHost::at("/colors/color-detail/BEHR-001");
    let mut panel = PanelState::default();

    let session = assistant.open(&host, &mut panel).await.unwrap();

    assert_eq!(source.calls(), 1);
    assert!(!panel.loading);
    assert!(panel.insert_enabled);
    assert!(panel.message.is_none());
    let preview = panel.preview.as_ref().unwrap();
    assert_eq!(preview.title, "Polar Bear");
    assert_eq!(preview.code_line, "Code: BEHR-001");
    assert_eq!(session.record().rgb, "242, 239, 228");
    assert_eq!(session.record().collection, "Designer Collection");
}

#[tokio::test]
async fn open_other_page_shows_neutral_message_without_fetch() {
    let source = MockSource::list(behr_list());
    let assistant = ColorMetadataAssistant::new(source.clone());
    let host = FakeHost::at("/other/page");
    let mut panel = PanelState::default();

    let session = assistant.open(&host, &mut panel).await;

    assert!(session.is_none());
    assert_eq!(source.calls(), 0);
    assert_eq!(panel.message, Some(PanelMessage { text: NAVIGATE_MESSAGE.into(), is_error: false }));
    assert!(panel.preview.is_none());
    assert!(!panel.insert_enabled);
}

#[tokio::test]
async fn open_without_document_path_shows_neutral_message() {
    let source = MockSource::list(behr_list());
    let assistant = ColorMetadataAssistant::new(source.clone());
    let host = FakeHost { path: None, ..FakeHost::at("") };
    let mut panel = PanelState::default();

    assert!(assistant.open(&host, &mut panel).await.is_none());
    assert_eq!(source.calls(), 0);
    assert!(!panel.is_error());
}

#[tokio::test]
async fn open_http_500_shows_reason_and_no_preview() {
    let source = MockSource::status(500);
    let assistant = ColorMetadataAssistant::new(source.clone());
    let host = FakeHost::at("/colors/color-detail/BEHR-001");
    let mut panel = PanelState::default();

    let session = assistant.open(&host, &mut panel).await;

    assert!(session.is_none());
    assert!(panel.is_error());
    let message = panel.message.as_ref().unwrap();
    assert_eq!(message.text, "Failed to fetch color data: Failed to fetch colors (HTTP 500)");
    assert!(panel.preview.is_none());
    assert!(!panel.insert_enabled);
    assert!(!panel.loading);
}

#[tokio::test]
async fn open_unknown_code_reports_not_found() {
    let source = MockSource::list(behr_list());
    let assistant = ColorMetadataAssistant::new(source);
    let host = FakeHost::at("/colors/color-detail/BEHR-999");
    let mut panel = PanelState::default();

    assert!(assistant.open(&host, &mut panel).await.is_none());
    assert_eq!(
        panel.message.as_ref().map(|m| m.text.as_str()),
        Some("Failed to fetch color data: Color not found: BEHR-999")
    );
}

#[tokio::test]
async fn each_open_issues_its_own_fetch() {
    let source = MockSource::list(behr_list());
    let assistant = ColorMetadataAssistant::new(source.clone());
    let host = FakeHost::at("/colors/color-detail/BEHR-001");

    assistant.open(&host, &mut PanelState::default()).await.unwrap();
    assistant.open(&host, &mut PanelState::default()).await.unwrap();

    assert_eq!(source.calls(), 2);
}

// =========================================================================
// insert
// =========================================================================

#[tokio::test]
async fn insert_sends_table_and_reports_success() {
    let assistant = ColorMetadataAssistant::new(MockSource::list(behr_list()));
    let host = FakeHost::at("/colors/color-detail/BEHR-001");
    let mut panel = PanelState::default();
    let session = assistant.open(&host, &mut panel).await.unwrap();

    assert!(session.insert(&host, &mut panel).await);

    let inserted = host.inserted.lock().unwrap();
    assert_eq!(inserted.len(), 1);
    assert_eq!(inserted[0], session.html());
    assert!(inserted[0].contains("<p>Polar Bear</p>"));
    assert_eq!(panel.message, Some(PanelMessage { text: INSERT_SUCCESS_MESSAGE.into(), is_error: false }));
}

#[tokio::test]
async fn insert_without_editor_connection_keeps_preview() {
    let assistant = ColorMetadataAssistant::new(MockSource::list(behr_list()));
    let host = FakeHost::disconnected("/colors/color-detail/BEHR-001");
    let mut panel = PanelState::default();
    let session = assistant.open(&host, &mut panel).await.unwrap();

    assert!(!session.insert(&host, &mut panel).await);

    assert_eq!(
        panel.message,
        Some(PanelMessage { text: "Cannot insert block: editor connection unavailable".into(), is_error: true })
    );
    assert!(panel.preview.is_some());
    assert!(panel.insert_enabled);
}

#[tokio::test]
async fn repeated_inserts_produce_identical_markup() {
    let assistant = ColorMetadataAssistant::new(MockSource::list(behr_list()));
    let host = FakeHost::at("/colors/color-detail/BEHR-001");
    let mut panel = PanelState::default();
    let session = assistant.open(&host, &mut panel).await.unwrap();

    session.insert(&host, &mut panel).await;
    session.insert(&host, &mut panel).await;

    let inserted = host.inserted.lock().unwrap();
    assert_eq!(inserted.len(), 2);
    assert_eq!(inserted[0], inserted[1]);
}

#[tokio::test]
async fn render_options_flow_into_session_html() {
    let list = json!([{ "colorCode": "X", "colorName": "A & B" }]);
    let assistant =
        ColorMetadataAssistant::new(MockSource::list(list)).with_render_options(RenderOptions { escape: true });
    let session = assistant.session(assistant.fetch_record("X").await.unwrap());
    assert!(session.html().contains("<p>A &amp; B</p>"));
}
