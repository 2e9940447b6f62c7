//! Log setup with secret redaction
//!
//! Bot tokens and TMDB API keys end up in request URLs, and those URLs end
//! up in error messages. Every line written by the fmt layer goes through
//! [`redact`] first.

// lazy_regex! builds on once_cell; patterns are validated at compile time
#![allow(clippy::non_std_lazy_statics)]

use lazy_regex::lazy_regex;
use std::io::{self, Write};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Bot API URL: `https://api.telegram.org/bot<token>/method`
static RE_BOT_URL: lazy_regex::Lazy<regex::Regex> =
    lazy_regex!(r"(https?://[^/]+/bot)([0-9]+:[A-Za-z0-9_-]+)(/['\s]*)");

/// Bare Telegram token: `<bot id>:<35 chars>`
static RE_BOT_TOKEN: lazy_regex::Lazy<regex::Regex> =
    lazy_regex!(r"([0-9]{8,10}:[A-Za-z0-9_-]{35})");

/// TMDB key passed as a query parameter
static RE_API_KEY: lazy_regex::Lazy<regex::Regex> = lazy_regex!(r"(api_key=)[^\s&]+");

/// Masks secrets in a log line.
///
/// # Examples
///
/// ```
/// use movie_info_bot::logging::redact;
/// let line = "GET https://api.themoviedb.org/3/search/movie?api_key=abc123&query=x";
/// assert_eq!(
///     redact(line),
///     "GET https://api.themoviedb.org/3/search/movie?api_key=[MASKED]&query=x"
/// );
/// ```
#[must_use]
pub fn redact(input: &str) -> String {
    let output = RE_BOT_URL.replace_all(input, "$1[TELEGRAM_TOKEN]$3");
    let output = RE_BOT_TOKEN.replace_all(&output, "[TELEGRAM_TOKEN]");
    let output = RE_API_KEY.replace_all(&output, "${1}[MASKED]");
    output.into_owned()
}

struct RedactingWriter<W: Write> {
    inner: W,
}

impl<W: Write> Write for RedactingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s = String::from_utf8_lossy(buf);
        self.inner.write_all(redact(&s).as_bytes())?;
        // Report the original length; the redacted text may differ in size.
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

struct RedactingMakeWriter<F> {
    make_inner: F,
}

impl<'a, F, W> tracing_subscriber::fmt::MakeWriter<'a> for RedactingMakeWriter<F>
where
    F: Fn() -> W + 'static,
    W: Write,
{
    type Writer = RedactingWriter<W>;

    fn make_writer(&'a self) -> Self::Writer {
        RedactingWriter {
            inner: (self.make_inner)(),
        }
    }
}

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Output goes to
/// stderr with secrets masked.
pub fn init_logging() {
    let make_writer = RedactingMakeWriter {
        make_inner: io::stderr,
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(make_writer))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "123456789:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsawq";

    #[test]
    fn test_redacts_bot_url() {
        let line = format!("error sending request for url (https://api.telegram.org/bot{TOKEN}/sendPhoto)");
        let redacted = redact(&line);
        assert!(!redacted.contains(TOKEN));
        assert!(redacted.contains("https://api.telegram.org/bot[TELEGRAM_TOKEN]/sendPhoto"));
    }

    #[test]
    fn test_redacts_bare_token() {
        assert_eq!(redact(&format!("token={TOKEN}")), "token=[TELEGRAM_TOKEN]");
    }

    #[test]
    fn test_redacts_api_key_only() {
        let line = "/3/movie/550?api_key=0123456789abcdef&language=en-US";
        assert_eq!(redact(line), "/3/movie/550?api_key=[MASKED]&language=en-US");
        assert_eq!(redact("nothing secret here"), "nothing secret here");
    }

    #[test]
    fn test_writer_reports_original_length() -> io::Result<()> {
        let mut writer = RedactingWriter { inner: Vec::new() };
        let line = b"api_key=secret\n";
        assert_eq!(writer.write(line)?, line.len());
        assert_eq!(writer.inner, b"api_key=[MASKED]\n");
        Ok(())
    }
}
