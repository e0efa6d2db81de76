//! BAS web services client
//!
//! One async method per remote operation. Every method assembles a
//! `multipart/form-data` POST with the part names the service expects,
//! normalizes any language parameter through [`iso639::LanguageTag`] first,
//! and decodes the XML envelope that comes back.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use iso639::LanguageTag;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument};

use crate::config::BasConfig;
use crate::error::BasError;
use crate::response::BasResponse;
use crate::types::{
    G2pOptions, MausOptions, Payload, Pho2SylOptions, TextAlignOptions, TtsOptions, yes_no,
};

/// Version of the BAS services this client targets
pub const SERVICE_VERSION: &str = "2.10";

/// Client for the BAS speech web services
///
/// The services are single blocking request/response exchanges; there is no
/// session state, and implementations are safe to share across tasks.
#[async_trait]
pub trait BasClient: Send + Sync {
    /// Run MAUSBasic: G2P plus MAUS in one call, for forced alignment given
    /// a WAV signal and a plain-text orthographic transcript
    async fn maus_basic(
        &self,
        language: &str,
        signal: Payload,
        text: Payload,
    ) -> Result<BasResponse, BasError>;

    /// Run G2P: convert orthography into a phonemic transcription
    async fn g2p(
        &self,
        language: &str,
        text: Payload,
        options: G2pOptions,
    ) -> Result<BasResponse, BasError>;

    /// Run MAUS: forced alignment given a WAV signal and a BPF phonemic
    /// transcription with a KAN tier
    async fn maus(
        &self,
        language: &str,
        signal: Payload,
        bpf: Payload,
        options: MausOptions,
    ) -> Result<BasResponse, BasError>;

    /// Run Pho2Syl: syllabify a phonemic transcription
    async fn pho2syl(
        &self,
        language: &str,
        bpf: Payload,
        options: Pho2SylOptions,
    ) -> Result<BasResponse, BasError>;

    /// Run the MaryTTS German text-to-speech service
    async fn tts(&self, text: Payload, options: TtsOptions) -> Result<BasResponse, BasError>;

    /// Run TextAlign: align two symbol sequences, e.g. graphemes with
    /// phonemes. Input is a two-column semicolon-separated CSV file
    async fn text_align(
        &self,
        pairs: Payload,
        options: TextAlignOptions,
    ) -> Result<BasResponse, BasError>;
}

/// HTTP implementation of [`BasClient`]
#[derive(Debug, Clone)]
pub struct HttpBasClient {
    client: Client,
    config: BasConfig,
    tagger: LanguageTag,
}

impl HttpBasClient {
    /// Create a new client
    ///
    /// Builds the HTTP client with the configured timeout and loads the
    /// ISO 639 reference tables once.
    ///
    /// # Errors
    ///
    /// Returns [`BasError::Configuration`] if the configuration is invalid
    /// and [`BasError::LanguageTable`] if the reference tables fail to load.
    pub fn new(config: BasConfig) -> Result<Self, BasError> {
        config.validate().map_err(BasError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BasError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        let tagger = LanguageTag::new()?;

        Ok(Self {
            client,
            config,
            tagger,
        })
    }

    /// The BAS services version this client targets
    #[must_use]
    pub const fn version() -> &'static str {
        SERVICE_VERSION
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &BasConfig {
        &self.config
    }

    /// Normalize a language identifier the way outgoing requests do
    #[must_use]
    pub fn tag(&self, language: &str) -> String {
        self.tagger.tag(language)
    }

    /// Fetch the result artifact of a response and write it to `path`
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// [`BasError::NoDownloadLink`] if the response carries no link,
    /// [`BasError::DownloadFailed`] if fetching it fails, and
    /// [`BasError::Io`] if the file cannot be written.
    #[instrument(skip(self, response, path))]
    pub async fn save_download(
        &self,
        response: &BasResponse,
        path: impl AsRef<Path> + Send,
    ) -> Result<u64, BasError> {
        let Some(link) = response.download_link.clone() else {
            return Err(BasError::NoDownloadLink);
        };

        debug!(%link, "Fetching result artifact");
        let reply = self
            .client
            .get(link)
            .send()
            .await
            .map_err(|e| BasError::DownloadFailed(e.to_string()))?;

        let status = reply.status();
        if !status.is_success() {
            return Err(BasError::DownloadFailed(format!("HTTP {status}")));
        }

        let bytes = reply
            .bytes()
            .await
            .map_err(|e| BasError::DownloadFailed(e.to_string()))?;
        tokio::fs::write(path, &bytes).await?;

        debug!(size = bytes.len(), "Artifact saved");
        Ok(bytes.len() as u64)
    }

    /// POST a multipart form and decode the response envelope
    async fn post(&self, url: &str, form: Form) -> Result<BasResponse, BasError> {
        let reply = self.client.post(url).multipart(form).send().await?;

        let status = reply.status();
        if !status.is_success() {
            let body = reply.text().await.unwrap_or_default();
            return Err(BasError::RequestFailed(format!("HTTP {status}: {body}")));
        }

        let body = reply.text().await?;
        BasResponse::parse(&body)
    }
}

/// Build a binary form part with the fixed file name a service expects
fn binary_part(
    payload: Payload,
    file_name: impl Into<String>,
    content_type: &str,
) -> Result<Part, BasError> {
    Part::bytes(payload.into_data())
        .file_name(file_name.into())
        .mime_str(content_type)
        .map_err(|e| BasError::Configuration(format!("Invalid content type: {e}")))
}

#[async_trait]
impl BasClient for HttpBasClient {
    #[instrument(skip(self, signal, text), fields(language = %language, signal_size = signal.len()))]
    async fn maus_basic(
        &self,
        language: &str,
        signal: Payload,
        text: Payload,
    ) -> Result<BasResponse, BasError> {
        debug!("Submitting MAUSBasic request");

        let form = Form::new()
            .text("LANGUAGE", self.tagger.tag(language))
            .part("SIGNAL", binary_part(signal, "BAS.wav", "audio/wav")?)
            .part("TEXT", binary_part(text, "BAS.txt", "text/plain")?);

        self.post(&self.config.maus_basic_url, form).await
    }

    #[instrument(skip(self, text, options), fields(language = %language))]
    async fn g2p(
        &self,
        language: &str,
        text: Payload,
        options: G2pOptions,
    ) -> Result<BasResponse, BasError> {
        debug!("Submitting G2P request");

        let file_name = format!("BAS.{}", options.iform.as_str());
        let form = Form::new()
            .text("lng", self.tagger.tag(language))
            .part("i", binary_part(text, file_name, "text/plain")?)
            .text("iform", options.iform.as_str())
            .text("tgitem", options.tgitem.unwrap_or_default())
            .text("tgrate", options.tgrate.to_string())
            .text("outsym", options.outsym.as_str())
            .text("featset", options.featset.as_str())
            .text("oform", options.oform.as_str())
            .text("syl", yes_no(options.syl))
            .text("stress", yes_no(options.stress))
            .text("nrm", yes_no(options.nrm))
            .text("com", yes_no(options.com))
            .text("align", options.align.as_str());

        self.post(&self.config.g2p_url, form).await
    }

    #[instrument(skip(self, signal, bpf, options), fields(language = %language, signal_size = signal.len()))]
    async fn maus(
        &self,
        language: &str,
        signal: Payload,
        bpf: Payload,
        options: MausOptions,
    ) -> Result<BasResponse, BasError> {
        debug!("Submitting MAUS request");

        let mut form = Form::new()
            .text("LANGUAGE", self.tagger.tag(language))
            .part("SIGNAL", binary_part(signal, "BAS.wav", "audio/wav")?)
            .part("BPF", binary_part(bpf, "BAS.par", "text/plain-bas")?)
            .text("OUTFORMAT", options.outformat.as_str())
            .text("OUTSYMBOL", options.outsymbol.as_str())
            .text("MINPAUSLEN", options.minpauselen.to_string());
        if let Some(usetrn) = options.usetrn {
            form = form.text("USETRN", usetrn.to_string());
        }
        if let Some(startword) = options.startword {
            form = form.text("STARTWORD", startword.to_string());
        }
        if let Some(endword) = options.endword {
            form = form.text("ENDWORD", endword.to_string());
        }
        if let Some(ruleset) = options.ruleset {
            form = form.part(
                "RULESET",
                binary_part(ruleset, "RULESET.txt", "text/plain")?,
            );
        }
        if let Some(mausshift) = options.mausshift {
            form = form.text("MAUSSHIFT", mausshift.to_string());
        }
        if let Some(insprob) = options.insprob {
            form = form.text("INSPROB", insprob.to_string());
        }
        if let Some(inskan) = options.inskantextgrid {
            form = form.text("INSKANTEXTGRID", inskan.to_string());
        }
        if let Some(insort) = options.insorttextgrid {
            form = form.text("INSORTTEXTGRID", insort.to_string());
        }
        if let Some(nosilence) = options.noinitialfinalsilence {
            form = form.text("NOINITIALFINALSILENCE", nosilence.to_string());
        }
        if let Some(weight) = options.weight {
            form = form.text("WEIGHT", weight.to_string());
        }
        if let Some(modus) = options.modus {
            form = form.text("MODUS", modus.as_str());
        }

        self.post(&self.config.maus_url, form).await
    }

    #[instrument(skip(self, bpf, options), fields(language = %language))]
    async fn pho2syl(
        &self,
        language: &str,
        bpf: Payload,
        options: Pho2SylOptions,
    ) -> Result<BasResponse, BasError> {
        debug!("Submitting Pho2Syl request");

        let mut form = Form::new()
            .text("lng", self.tagger.tag(language))
            .part("i", binary_part(bpf, "BAS.par", "text/plain-bas")?)
            .text("tier", options.tier)
            .text("oform", options.oform.as_str());
        if let Some(wsync) = options.wsync {
            form = form.text("wsync", yes_no(wsync));
        }
        if let Some(rate) = options.rate {
            form = form.text("rate", rate.to_string());
        }

        self.post(&self.config.pho2syl_url, form).await
    }

    #[instrument(skip(self, text, options))]
    async fn tts(&self, text: Payload, options: TtsOptions) -> Result<BasResponse, BasError> {
        debug!("Submitting TTS request");

        let form = Form::new()
            .text("INPUT_TYPE", options.input_type.as_str())
            .part("INPUT_TEXT", binary_part(text, "BAS.txt", "text/plain")?)
            .text("OUTPUT_TYPE", options.output_type.as_str())
            .text("AUDIO", options.audio_format.as_str())
            .text("VOICE", options.voice);

        self.post(&self.config.tts_url, form).await
    }

    #[instrument(skip(self, pairs, options))]
    async fn text_align(
        &self,
        pairs: Payload,
        options: TextAlignOptions,
    ) -> Result<BasResponse, BasError> {
        debug!("Submitting TextAlign request");

        let mut form = Form::new()
            .part("i", binary_part(pairs, "BAS.csv", "text/csv")?)
            .text("cost", options.cost)
            .text("displc", yes_no(options.displc))
            .text("atype", options.atype.as_str());
        if let Some(costfile) = options.costfile {
            form = form.part(
                "costfile",
                binary_part(costfile, "BAS.cst.csv", "text/csv")?,
            );
        }

        self.post(&self.config.text_align_url, form).await
    }
}
