//! Client for the BAS speech web services
//!
//! Wraps the web services hosted by the Bavarian Archive for Speech Signals
//! (<https://clarin.phonetik.uni-muenchen.de/BASWebServices/>):
//!
//! - `MAUSBasic` — forced alignment from a WAV file and a plain-text
//!   transcript (G2P + MAUS in one call)
//! - `G2P` — orthographic transcript to phonemic transcription
//! - `MAUS` — forced alignment from a WAV file and a BPF phonemic
//!   transcription
//! - `Pho2Syl` — syllabification of phonemic transcriptions
//! - `TTS` — German text-to-speech (MaryTTS)
//! - `TextAlign` — alignment of two symbol sequences, e.g. graphemes with
//!   phonemes
//!
//! Language parameters are normalized with [`iso639::LanguageTag`] before
//! transmission, so `"en-NZ"`, `"ENG-NZ"`, and `"English-NZ"` all reach the
//! service as `"eng-NZ"`.
//!
//! # Example
//!
//! ```ignore
//! use basws::{BasClient, BasConfig, HttpBasClient, Payload};
//!
//! let client = HttpBasClient::new(BasConfig::default())?;
//! let response = client
//!     .maus_basic(
//!         "eng-NZ",
//!         Payload::from_file("recording.wav").await?,
//!         Payload::from_file("transcript.txt").await?,
//!     )
//!     .await?;
//! if response.success {
//!     client.save_download(&response, "aligned.TextGrid").await?;
//! } else {
//!     tracing::warn!(warnings = %response.warnings, "alignment rejected");
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod response;
pub mod types;

pub use client::{BasClient, HttpBasClient, SERVICE_VERSION};
pub use config::BasConfig;
pub use error::BasError;
pub use response::BasResponse;
pub use types::{
    AlignmentType, FeatureSet, G2pOptions, G2pOutputFormat, LetterAlignment, MausMode,
    MausOptions, MausOutputFormat, Payload, PhonemeInventory, Pho2SylOptions,
    SyllableOutputFormat, SymbolInventory, TextAlignOptions, TextFormat, TtsAudioFormat,
    TtsInputType, TtsOptions, TtsOutputType,
};
