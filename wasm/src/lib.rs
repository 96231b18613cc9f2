use quietcast_core::padding::{pad, unpad};
use quietcast_core::{Codec, DecodedMessage};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmCodec {
    inner: Codec,
}

#[wasm_bindgen]
impl WasmCodec {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCodec {
        WasmCodec {
            inner: Codec::standard(),
        }
    }

    /// Pad a payload (Uint8Array, first 47 bytes used) and encode it.
    /// Returns the 192-byte block as a Uint8Array.
    #[wasm_bindgen]
    pub fn encode(&self, payload: &[u8]) -> Vec<u8> {
        self.inner.encode_message(&pad(payload)).to_vec()
    }

    /// Encode an already padded 48-byte message
    #[wasm_bindgen(js_name = encodeMessage)]
    pub fn encode_message(&self, message: &[u8]) -> Result<Vec<u8>, JsValue> {
        self.inner
            .encode(message)
            .map(|block| block.to_vec())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Decode a 192-byte block
    #[wasm_bindgen]
    pub fn decode(&self, block: &[u8]) -> Result<WasmDecoded, JsValue> {
        self.inner
            .decode(block)
            .map(WasmDecoded::from)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WasmCodec {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
pub struct WasmDecoded {
    has_error: bool,
    unresolved: usize,
    message: Vec<u8>,
    payload: Vec<u8>,
}

#[wasm_bindgen]
impl WasmDecoded {
    #[wasm_bindgen(getter, js_name = hasError)]
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    #[wasm_bindgen(getter)]
    pub fn unresolved(&self) -> usize {
        self.unresolved
    }

    /// The full 48-byte message, length prefix included
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> Vec<u8> {
        self.message.clone()
    }

    /// The payload with the length prefix applied
    #[wasm_bindgen(getter)]
    pub fn payload(&self) -> Vec<u8> {
        self.payload.clone()
    }
}

impl From<DecodedMessage> for WasmDecoded {
    fn from(decoded: DecodedMessage) -> Self {
        Self {
            has_error: decoded.has_error,
            unresolved: decoded.unresolved,
            payload: unpad(&decoded.message),
            message: decoded.message.to_vec(),
        }
    }
}
