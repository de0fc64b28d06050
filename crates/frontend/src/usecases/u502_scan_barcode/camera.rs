//! Камера и BarcodeDetector браузера

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};

use super::session::{DetectorHandle, ScanError, StreamHandle};

/// EAN symbologies only.
pub const BARCODE_FORMATS: [&str; 2] = ["ean_13", "ean_8"];

pub const DETECT_INTERVAL_MS: u32 = 200;

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type BarcodeDetector;

    #[wasm_bindgen(constructor, catch)]
    fn new(options: &JsValue) -> Result<BarcodeDetector, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn detect(this: &BarcodeDetector, source: &HtmlVideoElement) -> Result<js_sys::Promise, JsValue>;
}

#[derive(Serialize)]
struct VideoConstraints {
    #[serde(rename = "facingMode")]
    facing_mode: &'static str,
}

#[derive(Serialize)]
struct DetectorOptions {
    formats: &'static [&'static str],
}

fn describe(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

fn camera_error(value: JsValue) -> ScanError {
    ScanError::CameraUnavailable(describe(&value))
}

/// Поток камеры и `<video>`, в котором его можно показать
pub struct WebStream {
    stream: MediaStream,
    video: Option<HtmlVideoElement>,
}

impl WebStream {
    fn is_shown(&self, video: &HtmlVideoElement) -> bool {
        video
            .src_object()
            .map_or(false, |current| current == self.stream)
    }
}

impl StreamHandle for WebStream {
    fn show_preview(&mut self) {
        let Some(video) = self.video.as_ref() else {
            return;
        };
        video.set_src_object(Some(&self.stream));
        match video.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("Camera preview did not start: {}", describe(&e));
                }
            }),
            Err(e) => log::warn!("Camera preview did not start: {}", describe(&e)),
        }
    }

    fn release(&mut self) {
        for track in self.stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
        if let Some(video) = self.video.take() {
            // Превью уже может показывать поток новой сессии
            if self.is_shown(&video) {
                video.set_src_object(None);
            }
        }
        log::debug!("Camera stream released");
    }
}

/// Open the rear camera for `video`.
///
/// The element is left untouched until the session shows the stream.
pub async fn acquire_rear_camera(video: &HtmlVideoElement) -> Result<WebStream, ScanError> {
    let window = web_sys::window()
        .ok_or_else(|| ScanError::CameraUnavailable("window is not available".into()))?;
    let media_devices = window.navigator().media_devices().map_err(camera_error)?;

    let video_constraints = serde_wasm_bindgen::to_value(&VideoConstraints {
        facing_mode: "environment",
    })
    .map_err(|e| ScanError::CameraUnavailable(e.to_string()))?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video_constraints);

    let promise = media_devices
        .get_user_media_with_constraints(&constraints)
        .map_err(camera_error)?;
    let stream: MediaStream = JsFuture::from(promise)
        .await
        .map_err(camera_error)?
        .dyn_into()
        .map_err(camera_error)?;

    Ok(WebStream {
        stream,
        video: Some(video.clone()),
    })
}

/// Детектор, опрашивающий кадры пока поднят флаг
pub struct WebDetector {
    detector: BarcodeDetector,
    running: Rc<Cell<bool>>,
}

impl WebDetector {
    /// Fails where the browser has no `BarcodeDetector`.
    pub fn new() -> Result<Self, ScanError> {
        let options = serde_wasm_bindgen::to_value(&DetectorOptions {
            formats: &BARCODE_FORMATS,
        })
        .map_err(|e| ScanError::DetectorInit(e.to_string()))?;
        let detector =
            BarcodeDetector::new(&options).map_err(|e| ScanError::DetectorInit(describe(&e)))?;
        Ok(Self {
            detector,
            running: Rc::new(Cell::new(true)),
        })
    }

    pub fn poller(&self) -> DetectionPoller {
        DetectionPoller {
            detector: self.detector.clone(),
            running: self.running.clone(),
        }
    }
}

impl DetectorHandle for WebDetector {
    fn stop(&mut self) {
        self.running.set(false);
    }
}

/// Цикл опроса кадров
pub struct DetectionPoller {
    detector: BarcodeDetector,
    running: Rc<Cell<bool>>,
}

impl DetectionPoller {
    /// Calls `on_code` for the first code of a frame until the detector is stopped.
    pub async fn run(self, video: HtmlVideoElement, mut on_code: impl FnMut(String)) {
        while self.running.get() {
            if let Some(code) = self.detect_once(&video).await {
                if self.running.get() {
                    on_code(code);
                }
            }
            TimeoutFuture::new(DETECT_INTERVAL_MS).await;
        }
        log::debug!("Barcode polling stopped");
    }

    async fn detect_once(&self, video: &HtmlVideoElement) -> Option<String> {
        let promise = self.detector.detect(video).ok()?;
        let found = match JsFuture::from(promise).await {
            Ok(found) => found,
            Err(e) => {
                // Кадр ещё не готов
                log::debug!("detect() failed: {}", describe(&e));
                return None;
            }
        };
        let first = js_sys::Array::from(&found).get(0);
        if first.is_undefined() {
            return None;
        }
        js_sys::Reflect::get(&first, &JsValue::from_str("rawValue"))
            .ok()
            .and_then(|v| v.as_string())
            .filter(|code| !code.is_empty())
    }
}
