use js_sys::{Array, Function, Reflect};
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::DomError;

// Only Chromium and Safari ship it, the latter under a prefix.
const CONSTRUCTORS: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = js_sys::Object)]
    type SpeechRecognition;

    #[wasm_bindgen(method, setter)]
    fn set_lang(this: &SpeechRecognition, lang: &str);

    #[wasm_bindgen(method, setter = interimResults)]
    fn set_interim_results(this: &SpeechRecognition, value: bool);

    #[wasm_bindgen(method, setter)]
    fn set_continuous(this: &SpeechRecognition, value: bool);

    #[wasm_bindgen(method, setter)]
    fn set_onresult(this: &SpeechRecognition, handler: Option<&Function>);

    #[wasm_bindgen(method, setter)]
    fn set_onerror(this: &SpeechRecognition, handler: Option<&Function>);

    #[wasm_bindgen(method, setter)]
    fn set_onend(this: &SpeechRecognition, handler: Option<&Function>);

    #[wasm_bindgen(method, catch)]
    fn start(this: &SpeechRecognition) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    fn stop(this: &SpeechRecognition);

    #[wasm_bindgen(method)]
    fn abort(this: &SpeechRecognition);
}

fn constructor() -> Option<Function> {
    let window = web_sys::window()?;
    CONSTRUCTORS.iter().find_map(|name| {
        Reflect::get(&window, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    })
}

/// Whether this browser can take dictation at all.
pub fn is_supported() -> bool {
    constructor().is_some()
}

/// `event.results[0][0].transcript`
fn first_transcript(event: &JsValue) -> Option<String> {
    let results = Reflect::get(event, &JsValue::from_str("results")).ok()?;
    let result = Reflect::get_u32(&results, 0).ok()?;
    let alternative = Reflect::get_u32(&result, 0).ok()?;
    Reflect::get(&alternative, &JsValue::from_str("transcript"))
        .ok()?
        .as_string()
}

/// One recognition session. Results arrive through `on_transcript`, and
/// `on_end` runs when the browser stops listening for any reason. Dropping
/// the session aborts it and detaches both callbacks.
pub struct Dictation {
    recognition: SpeechRecognition,
    _on_result: Closure<dyn FnMut(JsValue)>,
    _on_error: Closure<dyn FnMut(JsValue)>,
    _on_end: Closure<dyn FnMut(JsValue)>,
}

impl Dictation {
    pub fn start<T, E>(locale: &str, on_transcript: T, on_end: E) -> Result<Self, DomError>
    where
        T: Fn(String) + 'static,
        E: Fn() + 'static,
    {
        let constructor = constructor().ok_or_else(|| {
            DomError::Js("speech recognition is not available".to_string())
        })?;
        let recognition: SpeechRecognition =
            Reflect::construct(&constructor, &Array::new())?.unchecked_into();
        recognition.set_lang(locale);
        recognition.set_interim_results(false);
        recognition.set_continuous(false);

        let on_result = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            match first_transcript(&event) {
                Some(transcript) => on_transcript(transcript),
                None => debug!("Speech result without a transcript"),
            }
        });
        let on_error = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            let reason = Reflect::get(&event, &JsValue::from_str("error"))
                .ok()
                .and_then(|value| value.as_string())
                .unwrap_or_default();
            warn!("Speech recognition error: {}", reason);
        });
        let on_end = Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| on_end());

        recognition.set_onresult(Some(on_result.as_ref().unchecked_ref()));
        recognition.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        recognition.set_onend(Some(on_end.as_ref().unchecked_ref()));

        let dictation = Self {
            recognition,
            _on_result: on_result,
            _on_error: on_error,
            _on_end: on_end,
        };
        dictation.recognition.start()?;
        debug!("Listening for dictation in {}", locale);
        Ok(dictation)
    }

    /// Stops listening but still delivers what was heard so far.
    pub fn finish(&self) {
        self.recognition.stop();
    }
}

impl Drop for Dictation {
    fn drop(&mut self) {
        // Handlers go first so the abort never calls into freed closures
        self.recognition.set_onresult(None);
        self.recognition.set_onerror(None);
        self.recognition.set_onend(None);
        self.recognition.abort();
    }
}
