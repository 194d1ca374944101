use crate::dictionary::Entry;
use crate::utils::{DictionaryError, Result, SpeechConfig};
use std::process::Stdio;
use tokio::process::{Child, Command};
use tracing::{debug, info};

/// A cancel-then-speak request for the platform text-to-speech program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    pub text: String,
    pub voice: Option<String>,
    pub lang: Option<String>,
}

impl SpeechRequest {
    pub fn new(text: &str, config: &SpeechConfig) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            voice: config.voice.clone(),
            lang: config.lang.clone(),
        })
    }

    pub fn for_entry(entry: &Entry, config: &SpeechConfig) -> Option<Self> {
        Self::new(&entry.term, config)
    }
}

/// Text-to-speech output. At most one utterance is active: `speak`
/// cancels whatever is still playing before starting.
#[allow(async_fn_in_trait)]
pub trait Speaker {
    async fn speak(&mut self, request: SpeechRequest) -> Result<()>;
    async fn cancel(&mut self) -> Result<()>;
}

/// Runs an external program (`espeak`, `say`, ...) per utterance. The
/// voice, or failing that the language, is passed with `-v`.
pub struct CommandSpeaker {
    program: String,
    active: Option<Child>,
}

impl CommandSpeaker {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            active: None,
        }
    }

    pub fn is_speaking(&mut self) -> bool {
        match self.active.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }
}

impl Speaker for CommandSpeaker {
    async fn speak(&mut self, request: SpeechRequest) -> Result<()> {
        self.cancel().await?;

        let mut command = Command::new(&self.program);
        if let Some(voice) = request.voice.as_ref().or(request.lang.as_ref()) {
            command.arg("-v").arg(voice);
        }
        command
            .arg(&request.text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let child = command.spawn().map_err(|e| {
            DictionaryError::SpeechError(format!("failed to start {}: {e}", self.program))
        })?;
        debug!(program = %self.program, text = %request.text, "speaking");
        self.active = Some(child);
        Ok(())
    }

    async fn cancel(&mut self) -> Result<()> {
        if self.is_speaking() {
            if let Some(child) = self.active.as_mut() {
                child.kill().await?;
                debug!("previous utterance cancelled");
            }
        }
        self.active = None;
        Ok(())
    }
}

/// Speaker used when speech is disabled: logs and remembers requests.
#[derive(Debug, Default)]
pub struct SilentSpeaker {
    pub spoken: Vec<SpeechRequest>,
    pub active: Option<SpeechRequest>,
}

impl Speaker for SilentSpeaker {
    async fn speak(&mut self, request: SpeechRequest) -> Result<()> {
        self.cancel().await?;
        info!(text = %request.text, "speech disabled; not speaking");
        self.spoken.push(request.clone());
        self.active = Some(request);
        Ok(())
    }

    async fn cancel(&mut self) -> Result<()> {
        self.active = None;
        Ok(())
    }
}
