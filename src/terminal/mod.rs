pub mod commands;
pub mod render;

pub use commands::{parse_command, Command, HELP};
pub use render::{footer, render_options, render_page};

use crate::speech::{SpeechRequest, Speaker};
use crate::state::Session;
use crate::utils::{Result, SpeechConfig};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::warn;

/// Reads commands line by line until EOF or `quit`, printing the current
/// page after every change.
pub async fn run<R, W, S>(
    session: &mut Session,
    speaker: &mut S,
    speech: &SpeechConfig,
    input: R,
    mut output: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: Speaker,
{
    if let Some(reason) = session.working_set().failure() {
        output
            .write_all(format!("word list unavailable: {reason}\n").as_bytes())
            .await?;
    }
    write_page(session, &mut output).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Command::Session(event) => {
                session.apply(event);
                write_page(session, &mut output).await?;
            }
            Command::Speak(row) => {
                let request = session
                    .entry_on_page(row)
                    .and_then(|entry| SpeechRequest::for_entry(entry, speech));
                match request {
                    Some(request) => {
                        if let Err(e) = speaker.speak(request).await {
                            warn!(error = %e, "speech failed");
                            output.write_all(format!("{e}\n").as_bytes()).await?;
                        }
                    }
                    None => output.write_all(b"nothing to speak on that row\n").await?,
                }
            }
            Command::Options => {
                let text = render_options(session.options());
                output.write_all(format!("{text}\n").as_bytes()).await?;
            }
            Command::Help => output.write_all(format!("{HELP}\n").as_bytes()).await?,
            Command::Quit => break,
            Command::Unknown(text) => {
                output
                    .write_all(format!("unknown command: {text} (try help)\n").as_bytes())
                    .await?
            }
        }
        output.flush().await?;
    }

    speaker.cancel().await?;
    output.flush().await?;
    Ok(())
}

async fn write_page<W: AsyncWrite + Unpin>(session: &Session, output: &mut W) -> Result<()> {
    let rendered = render_page(&session.view());
    output.write_all(format!("{rendered}\n").as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
