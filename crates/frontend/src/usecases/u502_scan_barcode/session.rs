//! Жизненный цикл одной попытки сканирования
//!
//! At most one session is alive per controller. The camera stream and the
//! detector belong to the active session and are released when it is
//! dropped, so every exit path (detection, cancel, error, teardown of the
//! controller itself) gives the camera back.

use thiserror::Error;

/// Same code within this window is dropped.
pub const DUPLICATE_WINDOW_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Camera unavailable: {0}")]
    CameraUnavailable(String),

    #[error("Barcode detector could not start: {0}")]
    DetectorInit(String),

    #[error("A scan session is already active")]
    SessionActive,
}

/// Захваченный видеопоток камеры
pub trait StreamHandle {
    /// Показать поток в превью. Only the stream of the current session is shown.
    fn show_preview(&mut self);

    /// Stop every track. Called exactly once per stream.
    ///
    /// The preview is cleared only while it still shows this stream.
    fn release(&mut self);
}

/// Запущенный детектор штрихкодов
pub trait DetectorHandle {
    fn stop(&mut self);
}

struct ActiveSession<S: StreamHandle, D: DetectorHandle> {
    stream: S,
    detector: D,
}

impl<S: StreamHandle, D: DetectorHandle> Drop for ActiveSession<S, D> {
    fn drop(&mut self) {
        // Детектор первым: он читает кадры из потока
        self.detector.stop();
        self.stream.release();
    }
}

enum Phase<S: StreamHandle, D: DetectorHandle> {
    Idle,
    Acquiring(u64),
    Scanning(ActiveSession<S, D>),
}

/// Identifies one `start()`; results of an older start are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    Scanning,
    /// Session was cancelled or superseded while the camera was opening.
    Discarded,
}

/// Подавление повторных срабатываний
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSuppressor {
    window_ms: u64,
    last: Option<(String, u64)>,
}

impl Default for DuplicateSuppressor {
    fn default() -> Self {
        Self::new(DUPLICATE_WINDOW_MS)
    }
}

impl DuplicateSuppressor {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last: None,
        }
    }

    /// Accepts a code that differs from the last accepted one, or the same
    /// code once `window_ms` has passed. State is updated on acceptance.
    pub fn accept(&mut self, code: &str, now_ms: u64) -> bool {
        let duplicate = matches!(
            &self.last,
            Some((last, at)) if last == code && now_ms.saturating_sub(*at) < self.window_ms
        );
        if duplicate {
            return false;
        }
        self.last = Some((code.to_string(), now_ms));
        true
    }
}

pub struct ScanSessionController<S: StreamHandle, D: DetectorHandle> {
    phase: Phase<S, D>,
    generation: u64,
    panel_visible: bool,
    suppressor: DuplicateSuppressor,
}

impl<S: StreamHandle, D: DetectorHandle> Default for ScanSessionController<S, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StreamHandle, D: DetectorHandle> ScanSessionController<S, D> {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            generation: 0,
            panel_visible: false,
            suppressor: DuplicateSuppressor::default(),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    pub fn is_scanning(&self) -> bool {
        matches!(self.phase, Phase::Scanning(_))
    }

    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    /// Idle -> Acquiring; shows the panel. Refused while a session is alive.
    pub fn start(&mut self) -> Result<SessionTicket, ScanError> {
        if self.is_active() {
            return Err(ScanError::SessionActive);
        }
        self.generation += 1;
        self.phase = Phase::Acquiring(self.generation);
        self.panel_visible = true;
        Ok(SessionTicket(self.generation))
    }

    fn is_current(&self, ticket: SessionTicket) -> bool {
        matches!(self.phase, Phase::Acquiring(current) if current == ticket.0)
    }

    /// Hand over the opened stream and the detector result.
    ///
    /// A stale ticket releases what it brought. A detector error releases
    /// the stream and reverts to Idle.
    pub fn attach(
        &mut self,
        ticket: SessionTicket,
        mut stream: S,
        detector: Result<D, ScanError>,
    ) -> Result<AttachOutcome, ScanError> {
        if !self.is_current(ticket) {
            log::debug!("Scan session {:?} ended before the camera opened", ticket);
            if let Ok(mut detector) = detector {
                detector.stop();
            }
            stream.release();
            return Ok(AttachOutcome::Discarded);
        }

        match detector {
            Ok(detector) => {
                stream.show_preview();
                self.phase = Phase::Scanning(ActiveSession { stream, detector });
                Ok(AttachOutcome::Scanning)
            }
            Err(e) => {
                stream.release();
                self.reset();
                Err(e)
            }
        }
    }

    /// Camera could not be opened; `false` for a stale ticket.
    pub fn fail(&mut self, ticket: SessionTicket, error: &ScanError) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        log::warn!("Scan session failed: {}", error);
        self.reset();
        true
    }

    /// Tears the session down first, then asks the suppressor.
    ///
    /// Returns the code when it should be looked up. Detections that arrive
    /// outside a scanning session are dropped.
    pub fn on_detected(&mut self, code: &str, now_ms: u64) -> Option<String> {
        if !self.is_scanning() {
            log::debug!("Barcode {} ignored: no scan session", code);
            return None;
        }
        self.reset();
        if self.suppressor.accept(code, now_ms) {
            log::info!("Barcode detected: {}", code);
            Some(code.to_string())
        } else {
            log::debug!("Duplicate barcode suppressed: {}", code);
            None
        }
    }

    /// No-op when idle.
    pub fn cancel(&mut self) {
        if self.is_active() {
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.panel_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<&'static str>>>;
    /// Id of the stream the shared `<video>` shows
    type Screen = Rc<RefCell<Option<u32>>>;

    struct FakeStream {
        log: Log,
        live: bool,
        id: u32,
        screen: Screen,
    }

    impl StreamHandle for FakeStream {
        fn show_preview(&mut self) {
            *self.screen.borrow_mut() = Some(self.id);
        }

        fn release(&mut self) {
            assert!(self.live, "stream released twice");
            self.live = false;
            let mut screen = self.screen.borrow_mut();
            if *screen == Some(self.id) {
                *screen = None;
            }
            self.log.borrow_mut().push("stream.release");
        }
    }

    struct FakeDetector {
        log: Log,
    }

    impl DetectorHandle for FakeDetector {
        fn stop(&mut self) {
            self.log.borrow_mut().push("detector.stop");
        }
    }

    type Controller = ScanSessionController<FakeStream, FakeDetector>;

    fn fakes(log: &Log) -> (FakeStream, FakeDetector) {
        fakes_on(log, &Screen::default(), 0)
    }

    fn fakes_on(log: &Log, screen: &Screen, id: u32) -> (FakeStream, FakeDetector) {
        (
            FakeStream {
                log: log.clone(),
                live: true,
                id,
                screen: screen.clone(),
            },
            FakeDetector { log: log.clone() },
        )
    }

    fn scanning(controller: &mut Controller, log: &Log) {
        let ticket = controller.start().unwrap();
        let (stream, detector) = fakes(log);
        assert_eq!(
            controller.attach(ticket, stream, Ok(detector)),
            Ok(AttachOutcome::Scanning)
        );
    }

    #[test]
    fn test_suppressor_window() {
        let mut s = DuplicateSuppressor::default();
        assert!(s.accept("4006381333931", 10_000));
        assert!(!s.accept("4006381333931", 10_999));
        assert!(s.accept("4006381333931", 11_000));
        assert!(s.accept("96385074", 11_001));
        assert!(s.accept("4006381333931", 11_001));
    }

    #[test]
    fn test_detection_releases_before_dispatch() {
        let log = Log::default();
        let mut controller = Controller::new();
        scanning(&mut controller, &log);
        assert!(controller.panel_visible());

        let code = controller.on_detected("4006381333931", 5_000);

        assert_eq!(code.as_deref(), Some("4006381333931"));
        assert_eq!(*log.borrow(), vec!["detector.stop", "stream.release"]);
        assert!(!controller.is_active());
        assert!(!controller.panel_visible());
    }

    #[test]
    fn test_same_code_twice_within_window_processed_once() {
        let log = Log::default();
        let mut controller = Controller::new();

        scanning(&mut controller, &log);
        assert!(controller.on_detected("123", 1_000).is_some());

        scanning(&mut controller, &log);
        assert!(controller.on_detected("123", 1_500).is_none());

        scanning(&mut controller, &log);
        assert!(controller.on_detected("123", 2_600).is_some());
    }

    #[test]
    fn test_start_while_active_is_refused() {
        let mut controller = Controller::new();
        controller.start().unwrap();
        assert_eq!(controller.start(), Err(ScanError::SessionActive));
    }

    #[test]
    fn test_cancel_releases_and_is_noop_when_idle() {
        let log = Log::default();
        let mut controller = Controller::new();
        controller.cancel();
        assert!(log.borrow().is_empty());

        scanning(&mut controller, &log);
        controller.cancel();
        assert_eq!(*log.borrow(), vec!["detector.stop", "stream.release"]);
        assert!(!controller.panel_visible());

        controller.cancel();
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_cancel_during_acquire_discards_late_stream() {
        let log = Log::default();
        let mut controller = Controller::new();
        let ticket = controller.start().unwrap();
        controller.cancel();

        let (stream, detector) = fakes(&log);
        assert_eq!(
            controller.attach(ticket, stream, Ok(detector)),
            Ok(AttachOutcome::Discarded)
        );
        assert_eq!(*log.borrow(), vec!["detector.stop", "stream.release"]);
        assert!(!controller.is_active());
    }

    #[test]
    fn test_stale_ticket_does_not_take_over_new_session() {
        let log = Log::default();
        let mut controller = Controller::new();
        let old = controller.start().unwrap();
        controller.cancel();
        let fresh = controller.start().unwrap();

        let (stream, detector) = fakes(&log);
        assert_eq!(
            controller.attach(old, stream, Ok(detector)),
            Ok(AttachOutcome::Discarded)
        );
        assert!(!controller.fail(old, &ScanError::CameraUnavailable("late".into())));
        assert!(controller.is_active());

        let (stream, detector) = fakes(&log);
        assert_eq!(
            controller.attach(fresh, stream, Ok(detector)),
            Ok(AttachOutcome::Scanning)
        );
    }

    #[test]
    fn test_late_older_stream_keeps_current_preview() {
        let log = Log::default();
        let screen = Screen::default();
        let mut controller = Controller::new();
        let old = controller.start().unwrap();
        controller.cancel();
        let fresh = controller.start().unwrap();

        let (stream, detector) = fakes_on(&log, &screen, 2);
        assert_eq!(
            controller.attach(fresh, stream, Ok(detector)),
            Ok(AttachOutcome::Scanning)
        );
        assert_eq!(*screen.borrow(), Some(2));

        // getUserMedia of the cancelled start resolves last
        let (stream, detector) = fakes_on(&log, &screen, 1);
        assert_eq!(
            controller.attach(old, stream, Ok(detector)),
            Ok(AttachOutcome::Discarded)
        );
        assert_eq!(*screen.borrow(), Some(2));
        assert!(controller.is_scanning());

        controller.cancel();
        assert_eq!(*screen.borrow(), None);
    }

    #[test]
    fn test_detection_without_session_is_dropped() {
        let log = Log::default();
        let mut controller = Controller::new();
        assert_eq!(controller.on_detected("123", 5), None);

        controller.start().unwrap();
        controller.cancel();
        assert_eq!(controller.on_detected("456", 6), None);

        let ticket = controller.start().unwrap();
        assert_eq!(controller.on_detected("789", 7), None);
        assert!(controller.is_active());

        // Ignored codes do not arm the duplicate window
        let (stream, detector) = fakes(&log);
        controller.attach(ticket, stream, Ok(detector)).unwrap();
        assert_eq!(controller.on_detected("789", 8).as_deref(), Some("789"));
    }

    #[test]
    fn test_camera_denied_hides_panel() {
        let mut controller = Controller::new();
        let ticket = controller.start().unwrap();
        assert!(controller.panel_visible());

        assert!(controller.fail(ticket, &ScanError::CameraUnavailable("NotAllowedError".into())));
        assert!(!controller.is_active());
        assert!(!controller.panel_visible());
    }

    #[test]
    fn test_detector_init_error_releases_stream() {
        let log = Log::default();
        let mut controller = Controller::new();
        let ticket = controller.start().unwrap();
        let (stream, _) = fakes(&log);

        let err = ScanError::DetectorInit("BarcodeDetector is not defined".into());
        assert_eq!(controller.attach(ticket, stream, Err(err.clone())), Err(err));
        assert_eq!(*log.borrow(), vec!["stream.release"]);
        assert!(!controller.panel_visible());
    }

    #[test]
    fn test_dropping_controller_releases_stream() {
        let log = Log::default();
        {
            let mut controller = Controller::new();
            scanning(&mut controller, &log);
        }
        assert_eq!(*log.borrow(), vec!["detector.stop", "stream.release"]);
    }
}
