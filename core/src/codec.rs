use crate::codebook::{Codebook, CodebookBuilder};
use crate::decoder::{DecodedMessage, Decoder};
use crate::encoder::Encoder;
use crate::error::{QuietCastError, Result};
use crate::padding;
use crate::reverse_map::{ReverseMap, ReverseMapBuilder};
use crate::{EncodedBlock, Message};

/// Encoder and decoder built from one codebook.
///
/// Holds no mutable state; share it freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    encoder: Encoder,
    decoder: Decoder,
}

impl Codec {
    /// Codec over the precomputed tables
    pub fn standard() -> Self {
        Self::default()
    }

    /// Run the offline builders with a custom configuration
    pub fn from_builder(builder: &CodebookBuilder) -> Result<Self> {
        Ok(Self::with_codebook(builder.build()?))
    }

    pub fn with_codebook(codebook: Codebook) -> Self {
        let reverse_map = ReverseMapBuilder::build(&codebook);
        Self {
            encoder: Encoder::new(codebook),
            decoder: Decoder::new(reverse_map),
        }
    }

    /// Pair a codebook with a stored reverse map. The map must be the one
    /// `ReverseMapBuilder` derives from that codebook.
    pub fn from_tables(codebook: Codebook, reverse_map: ReverseMap) -> Result<Self> {
        if ReverseMapBuilder::build(&codebook) != reverse_map {
            return Err(QuietCastError::InvalidConfig(
                "Reverse map was not built from this codebook".to_string(),
            ));
        }
        Ok(Self {
            encoder: Encoder::new(codebook),
            decoder: Decoder::new(reverse_map),
        })
    }

    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    pub fn encode(&self, message: &[u8]) -> Result<EncodedBlock> {
        self.encoder.encode(message)
    }

    pub fn encode_message(&self, message: &Message) -> EncodedBlock {
        self.encoder.encode_message(message)
    }

    /// Pad an arbitrary payload into a message, then encode it
    pub fn encode_payload(&self, payload: &[u8]) -> EncodedBlock {
        self.encoder.encode_message(&padding::pad(payload))
    }

    pub fn decode(&self, block: &[u8]) -> Result<DecodedMessage> {
        self.decoder.decode(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MESSAGE_LEN;

    #[test]
    fn test_builder_codec_matches_standard() {
        let built = Codec::from_builder(&CodebookBuilder::default()).unwrap();
        let standard = Codec::standard();
        assert_eq!(built.encoder().codebook(), standard.encoder().codebook());
        assert_eq!(built.decoder().reverse_map(), standard.decoder().reverse_map());
    }

    #[test]
    fn test_custom_codebook_round_trip() {
        let codec = Codec::from_builder(&CodebookBuilder::default().with_seeds(vec![0x0F])).unwrap();
        let message = [0x3Cu8; MESSAGE_LEN];
        let decoded = codec.decode(&codec.encode(&message).unwrap()).unwrap();
        assert_eq!(decoded.into_parts(), (false, message));
    }

    #[test]
    fn test_from_tables_rejects_mismatched_reverse_map() {
        let other = CodebookBuilder::default().with_seeds(vec![0x0F]).build().unwrap();
        assert_ne!(other, Codebook::standard());
        let foreign_map = ReverseMapBuilder::build(&other);
        assert_ne!(foreign_map, ReverseMap::standard());

        let err = Codec::from_tables(Codebook::standard(), foreign_map.clone()).unwrap_err();
        assert!(matches!(err, QuietCastError::InvalidConfig(_)));
        assert!(Codec::from_tables(other, foreign_map).is_ok());
        assert!(Codec::from_tables(Codebook::standard(), ReverseMap::standard()).is_ok());
    }

    #[test]
    fn test_encode_payload_round_trip() {
        let codec = Codec::standard();
        let block = codec.encode_payload(b"ping");
        let decoded = codec.decode(&block).unwrap();
        assert!(!decoded.has_error);
        assert_eq!(padding::unpad(&decoded.message), b"ping");
    }

    #[test]
    fn test_shared_across_threads() {
        let codec = Codec::standard();
        std::thread::scope(|scope| {
            for seed in 0..4u8 {
                let codec = &codec;
                scope.spawn(move || {
                    let message = [seed.wrapping_mul(61); MESSAGE_LEN];
                    let decoded = codec.decode(&codec.encode_message(&message)).unwrap();
                    assert_eq!(decoded.into_parts(), (false, message));
                });
            }
        });
    }
}
