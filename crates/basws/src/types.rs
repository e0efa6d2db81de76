//! Request payloads and per-operation options
//!
//! Each service operation takes one options struct whose `Default` impl
//! matches the defaults the services document. Closed value sets are enums
//! carrying their wire string via `as_str()`; optional parameters are only
//! transmitted when set.

use std::path::Path;

use crate::error::BasError;

/// Boolean encoding used by the lowercase-parameter services
pub(crate) const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// An input document or signal to upload
///
/// The services take opaque byte payloads: a WAV signal, an orthographic
/// transcript, a BPF annotation file, a rule set, a cost-function CSV. The
/// payload carries no format knowledge; each operation posts it under the
/// part name and content type that service expects.
#[derive(Debug, Clone)]
pub struct Payload {
    data: Vec<u8>,
}

impl Payload {
    /// Create a payload from bytes or text
    #[must_use]
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Read a payload from a file
    ///
    /// # Errors
    ///
    /// Returns [`BasError::Io`] if the file cannot be read.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, BasError> {
        Ok(Self {
            data: tokio::fs::read(path).await?,
        })
    }

    /// Borrow the raw bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw bytes
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Size in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the payload holds no bytes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for Payload {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self { data: text.into() }
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self {
            data: text.into_bytes(),
        }
    }
}

/// Format of the text document submitted to G2P (`iform`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    /// Connected text, tokenized by the service
    #[default]
    Txt,
    /// A list of unconnected words
    List,
    /// Praat TextGrid
    Tg,
    /// TCF with a tokenization layer
    Tcf,
    /// BPF with an ORT tier
    Bpf,
}

impl TextFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::List => "list",
            Self::Tg => "tg",
            Self::Tcf => "tcf",
            Self::Bpf => "bpf",
        }
    }
}

/// Phoneme symbol inventory for G2P output (`outsym`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhonemeInventory {
    /// Language-specific SAMPA variant
    #[default]
    Sampa,
    /// Language-independent X-SAMPA
    XSampa,
    /// SAMPA restricted to the subset MAUS can process
    MausSampa,
    /// Unicode IPA
    Ipa,
    /// ARPABET (eng-US only)
    Arpabet,
}

impl PhonemeInventory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sampa => "sampa",
            Self::XSampa => "x-sampa",
            Self::MausSampa => "maus-sampa",
            Self::Ipa => "ipa",
            Self::Arpabet => "arpabet",
        }
    }
}

/// Feature set used for grapheme-phoneme conversion (`featset`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureSet {
    /// Letter window centered on the grapheme
    #[default]
    Standard,
    /// Adds part-of-speech and morphological analyses
    Extended,
}

impl FeatureSet {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Extended => "extended",
        }
    }
}

/// G2P output format (`oform`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum G2pOutputFormat {
    /// BPF with a KAN tier
    #[default]
    Bpf,
    /// BPF with blank-separated phonemes
    Bpfs,
    /// Transcribed words, tab-separated
    Txt,
    /// Two-column word/transcription table
    Tab,
    /// Five-column table with POS and morphology
    Exttab,
    /// Unique sorted lexicon
    Lex,
    /// Unique sorted five-column lexicon
    Extlex,
    /// TCF with POS, morphs, and morph classes
    Exttcf,
    /// Praat TextGrid
    Tg,
    /// Praat TextGrid with POS and morphology
    Exttg,
}

impl G2pOutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bpf => "bpf",
            Self::Bpfs => "bpfs",
            Self::Txt => "txt",
            Self::Tab => "tab",
            Self::Exttab => "exttab",
            Self::Lex => "lex",
            Self::Extlex => "extlex",
            Self::Exttcf => "exttcf",
            Self::Tg => "tg",
            Self::Exttg => "exttg",
        }
    }
}

/// Whether the G2P transcription is letter-aligned (`align`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterAlignment {
    Yes,
    #[default]
    No,
    /// Symbol alignment without syllable boundaries or word stress
    Sym,
}

impl LetterAlignment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Sym => "sym",
        }
    }
}

/// Options for the G2P service
#[derive(Debug, Clone, PartialEq)]
pub struct G2pOptions {
    /// Format of the submitted text
    pub iform: TextFormat,
    /// TextGrid item holding the words (required for TextGrid input)
    pub tgitem: Option<String>,
    /// Sample rate for converting TextGrid times to BPF samples
    pub tgrate: u32,
    /// Output phoneme symbol inventory
    pub outsym: PhonemeInventory,
    /// Feature set for the conversion
    pub featset: FeatureSet,
    /// Output format
    pub oform: G2pOutputFormat,
    /// Add syllabification to the output transcription
    pub syl: bool,
    /// Add word stress to the output transcription
    pub stress: bool,
    /// Expand non-standard word types (numbers, abbreviations, ...)
    pub nrm: bool,
    /// Pass `<*>` strings through as annotation markers
    pub com: bool,
    /// Letter alignment of the transcription
    pub align: LetterAlignment,
}

impl Default for G2pOptions {
    fn default() -> Self {
        Self {
            iform: TextFormat::default(),
            tgitem: None,
            tgrate: 16000,
            outsym: PhonemeInventory::default(),
            featset: FeatureSet::default(),
            oform: G2pOutputFormat::default(),
            syl: false,
            stress: false,
            nrm: true,
            com: false,
            align: LetterAlignment::default(),
        }
    }
}

/// MAUS output format (`OUTFORMAT`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MausOutputFormat {
    /// Praat TextGrid
    #[default]
    TextGrid,
    /// Input BPF with a new or replaced MAU tier
    Par,
    /// Input BPF with the MAU tier appended
    MauAppend,
    /// MAU tier only, as a CSV table
    Csv,
    /// MAU tier only
    Mau,
    /// Emu hlb plus phonetic segmentation
    LegacyEmu,
    /// Emu-compatible `_annot.json`
    EmuR,
}

impl MausOutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextGrid => "TextGrid",
            Self::Par => "par",
            Self::MauAppend => "mau-append",
            Self::Csv => "csv",
            Self::Mau => "mau",
            Self::LegacyEmu => "legacyEMU",
            Self::EmuR => "emuR",
        }
    }
}

/// Encoding of phonetic symbols in MAUS output (`OUTSYMBOL`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolInventory {
    /// Language-specific SAM-PA
    #[default]
    Sampa,
    /// UTF-8 IPA
    Ipa,
    /// IPA manner of articulation per segment
    Manner,
    /// IPA place of articulation per segment
    Place,
}

impl SymbolInventory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sampa => "sampa",
            Self::Ipa => "ipa",
            Self::Manner => "manner",
            Self::Place => "place",
        }
    }
}

/// MAUS operation mode (`MODUS`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MausMode {
    /// Segmentation and labelling
    #[default]
    Standard,
    /// Forced alignment of the KAN tier
    Align,
}

impl MausMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Align => "align",
        }
    }
}

/// Options for the MAUS service
///
/// `None` fields are omitted from the request and left to the service's own
/// defaults.
#[derive(Debug, Clone)]
pub struct MausOptions {
    /// Output format
    pub outformat: MausOutputFormat,
    /// Output symbol encoding
    pub outsymbol: SymbolInventory,
    /// Minimum inter-word silence, in 10 ms frames
    pub minpauselen: u32,
    /// First word to segment (word numbering starts at 0)
    pub startword: Option<u32>,
    /// Last word to segment
    pub endword: Option<u32>,
    /// Phonological rule set file
    pub ruleset: Option<Payload>,
    /// Shift segment boundaries by this many msec
    pub mausshift: Option<i32>,
    /// Segment insertion/deletion probability factor
    pub insprob: Option<f64>,
    /// Add a KAN-labelled word tier to TextGrid output
    pub inskantextgrid: Option<bool>,
    /// Add an ORT-labelled word tier to TextGrid output
    pub insorttextgrid: Option<bool>,
    /// Restrict segmentation to the BPF TRN tier entry
    pub usetrn: Option<bool>,
    /// Suppress modeling of leading/trailing silence
    pub noinitialfinalsilence: Option<bool>,
    /// Weight of the pronunciation model against the acoustics
    pub weight: Option<f64>,
    /// Operation mode
    pub modus: Option<MausMode>,
}

impl Default for MausOptions {
    fn default() -> Self {
        Self {
            outformat: MausOutputFormat::default(),
            outsymbol: SymbolInventory::default(),
            // 40 msec is about the threshold of perceivable silence
            minpauselen: 5,
            startword: None,
            endword: None,
            ruleset: None,
            mausshift: None,
            insprob: None,
            inskantextgrid: None,
            insorttextgrid: None,
            usetrn: None,
            noinitialfinalsilence: None,
            weight: None,
            modus: None,
        }
    }
}

/// Pho2Syl output format (`oform`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyllableOutputFormat {
    /// BPF
    #[default]
    Bpf,
    /// Praat TextGrid
    Tg,
}

impl SyllableOutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bpf => "bpf",
            Self::Tg => "tg",
        }
    }
}

/// Options for the Pho2Syl service
#[derive(Debug, Clone, PartialEq)]
pub struct Pho2SylOptions {
    /// Annotation tier to syllabify
    pub tier: String,
    /// Treat every word boundary as a syllable boundary
    pub wsync: Option<bool>,
    /// Output format
    pub oform: SyllableOutputFormat,
    /// Sample rate for converting samples to seconds (TextGrid output only)
    pub rate: Option<u32>,
}

impl Default for Pho2SylOptions {
    fn default() -> Self {
        Self {
            tier: "KAN".to_string(),
            wsync: None,
            oform: SyllableOutputFormat::default(),
            rate: None,
        }
    }
}

/// MaryTTS input document type (`INPUT_TYPE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TtsInputType {
    #[default]
    Text,
    SimplePhonemes,
    Sable,
    Ssml,
    Apml,
    Phonemes,
    Intonation,
    AcoustParams,
    RawMaryXml,
    Tokens,
    Words,
    Allophones,
    RealisedAcoustParams,
    RealisedDurations,
    PraatTextGrid,
    PartsOfSpeech,
}

impl TtsInputType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::SimplePhonemes => "SIMPLEPHONEMES",
            Self::Sable => "SABLE",
            Self::Ssml => "SSML",
            Self::Apml => "APML",
            Self::Phonemes => "PHONEMES",
            Self::Intonation => "INTONATION",
            Self::AcoustParams => "ACOUSTPARAMS",
            Self::RawMaryXml => "RAWMARYXML",
            Self::Tokens => "TOKENS",
            Self::Words => "WORDS",
            Self::Allophones => "ALLOPHONES",
            Self::RealisedAcoustParams => "REALISED_ACOUSTPARAMS",
            Self::RealisedDurations => "REALISED_DURATIONS",
            Self::PraatTextGrid => "PRAAT_TEXTGRID",
            Self::PartsOfSpeech => "PARTSOFSPEECH",
        }
    }
}

/// MaryTTS output type (`OUTPUT_TYPE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TtsOutputType {
    #[default]
    Audio,
    Phonemes,
    Intonation,
    AcoustParams,
    RawMaryXml,
    Tokens,
    Words,
    Allophones,
    RealisedAcoustParams,
    RealisedDurations,
    PraatTextGrid,
    PartsOfSpeech,
    HalfphoneTargetFeatures,
}

impl TtsOutputType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Audio => "AUDIO",
            Self::Phonemes => "PHONEMES",
            Self::Intonation => "INTONATION",
            Self::AcoustParams => "ACOUSTPARAMS",
            Self::RawMaryXml => "RAWMARYXML",
            Self::Tokens => "TOKENS",
            Self::Words => "WORDS",
            Self::Allophones => "ALLOPHONES",
            Self::RealisedAcoustParams => "REALISED_ACOUSTPARAMS",
            Self::RealisedDurations => "REALISED_DURATIONS",
            Self::PraatTextGrid => "PRAAT_TEXTGRID",
            Self::PartsOfSpeech => "PARTSOFSPEECH",
            Self::HalfphoneTargetFeatures => "HALFPHONE_TARGETFEATURES",
        }
    }
}

/// Audio container for TTS audio output (`AUDIO`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TtsAudioFormat {
    #[default]
    WaveFile,
    AuFile,
    AiffFile,
}

impl TtsAudioFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WaveFile => "WAVE_FILE",
            Self::AuFile => "AU_FILE",
            Self::AiffFile => "AIFF_FILE",
        }
    }
}

/// Options for the MaryTTS service (German voices)
#[derive(Debug, Clone, PartialEq)]
pub struct TtsOptions {
    /// Input document type
    pub input_type: TtsInputType,
    /// Output type
    pub output_type: TtsOutputType,
    /// Audio container when `output_type` is audio
    pub audio_format: TtsAudioFormat,
    /// Voice to synthesize with
    pub voice: String,
}

impl Default for TtsOptions {
    fn default() -> Self {
        Self {
            input_type: TtsInputType::default(),
            output_type: TtsOutputType::default(),
            audio_format: TtsAudioFormat::default(),
            voice: "bits1unitselautolabel".to_string(),
        }
    }
}

/// TextAlign alignment type (`atype`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentType {
    /// Align the second column to the first
    #[default]
    Directional,
    /// Symmetric alignment
    Symmetric,
}

impl AlignmentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Directional => "dir",
            Self::Symmetric => "sym",
        }
    }
}

/// Options for the TextAlign service
///
/// `cost` is an open set: `naive`, `intrinsic`, `import`, or a predefined
/// grapheme-phoneme cost function such as `g2p_deu`.
#[derive(Debug, Clone)]
pub struct TextAlignOptions {
    /// Cost function for substitution, deletion, and insertion
    pub cost: String,
    /// Caller-supplied cost function (when `cost` is `import`)
    pub costfile: Option<Payload>,
    /// Show alignment costs in a third output column
    pub displc: bool,
    /// Alignment type
    pub atype: AlignmentType,
}

impl Default for TextAlignOptions {
    fn default() -> Self {
        Self {
            cost: "naive".to_string(),
            costfile: None,
            displc: false,
            atype: AlignmentType::default(),
        }
    }
}
